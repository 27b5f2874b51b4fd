use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use snake_classic::config::{EdgePolicy, FoodPlacement, GameConfig};
use snake_classic::{event_loop, logger};

#[derive(Parser)]
#[command(name = "snake_classic")]
#[command(version, about = "Single-screen snake")]
struct Cli {
    /// JSON file with startup settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side of one grid cell, in canvas units
    #[arg(long)]
    cell_size: Option<u32>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Simulation steps per second
    #[arg(long)]
    tick_rate: Option<u32>,

    #[arg(long, value_enum)]
    food: Option<FoodPlacement>,

    #[arg(long, value_enum)]
    edges: Option<EdgePolicy>,

    /// Fixed RNG seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    log_file: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn into_config(self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(v) = self.cell_size {
            config.cell_size = v;
        }
        if let Some(v) = self.width {
            config.canvas_width = v;
        }
        if let Some(v) = self.height {
            config.canvas_height = v;
        }
        if let Some(v) = self.tick_rate {
            config.ticks_per_second = v;
        }
        if let Some(v) = self.food {
            config.food_placement = v;
        }
        if let Some(v) = self.edges {
            config.edge_policy = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.log_file.is_some() {
            config.log_file = self.log_file;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = cli.log_level;
    let config = cli.into_config()?;

    logger::init(level, config.log_file.as_deref());

    event_loop::run(config)
}
