use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Point};

/// Where food may land after it is eaten.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FoodPlacement {
    /// One uniform roll over the grid, snake body included.
    #[default]
    Anywhere,
    /// Re-roll until the cell is not covered by the snake.
    AvoidSnake,
}

/// What happens when the head leaves the grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Keep going off screen; nothing kills the snake there.
    #[default]
    Unbounded,
    /// Re-enter from the opposite edge.
    Wrap,
}

/// Startup constants. Read once, never mutated while the game runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub cell_size: u32,
    pub ticks_per_second: u32,
    /// Spawn cell after start and after every death.
    pub start_cell: Point,
    pub food_placement: FoodPlacement,
    pub edge_policy: EdgePolicy,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 640,
            canvas_height: 480,
            cell_size: 20,
            ticks_per_second: 20,
            start_cell: Point::new(1, 1),
            food_placement: FoodPlacement::Anywhere,
            edge_policy: EdgePolicy::Unbounded,
            seed: None,
            log_file: Some(PathBuf::from("snake.log")),
        }
    }
}

impl GameConfig {
    /// Missing keys fall back to the defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config = serde_json::from_str(content).context("could not parse config JSON")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell_size must be positive");
        ensure!(
            self.canvas_width >= self.cell_size && self.canvas_height >= self.cell_size,
            "canvas {}x{} is smaller than one {} unit cell",
            self.canvas_width,
            self.canvas_height,
            self.cell_size
        );
        ensure!(self.ticks_per_second > 0, "ticks_per_second must be positive");
        ensure!(
            self.grid().contains(self.start_cell),
            "start cell ({}, {}) is outside the {}x{} grid",
            self.start_cell.x,
            self.start_cell.y,
            self.grid().width,
            self.grid().height
        );
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::from_canvas(self.canvas_width, self.canvas_height, self.cell_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second
    }
}
