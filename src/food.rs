use rand::Rng;

use crate::grid::{Grid, Point};

/// Upper bound on re-rolls before `relocate_avoiding` scans for a free cell.
const MAX_REROLLS: usize = 64;

#[derive(Debug, Clone)]
pub struct Food {
    position: Point,
    relocations: u64,
}

impl Food {
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Self {
            position: grid.random_cell(rng),
            relocations: 0,
        }
    }

    pub fn at(position: Point) -> Self {
        Self { position, relocations: 0 }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the food without counting it as a relocation.
    pub fn place(&mut self, position: Point) {
        self.position = position;
    }

    pub fn relocations(&self) -> u64 {
        self.relocations
    }

    /// Single uniform roll. May land on the snake, or on the cell it already holds.
    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        self.position = grid.random_cell(rng);
        self.relocations += 1;
    }

    /// Rejection sampling against `occupied`. Falls back to a plain roll when
    /// every cell is taken.
    pub fn relocate_avoiding<R, F>(&mut self, grid: &Grid, rng: &mut R, occupied: F)
    where
        R: Rng + ?Sized,
        F: Fn(Point) -> bool,
    {
        self.relocations += 1;

        for _ in 0..MAX_REROLLS {
            let pos = grid.random_cell(rng);
            if !occupied(pos) {
                self.position = pos;
                return;
            }
        }

        // crowded grid: pick uniformly among whatever is still free
        let free: Vec<Point> = grid.cells().filter(|&p| !occupied(p)).collect();
        self.position = if free.is_empty() {
            grid.random_cell(rng)
        } else {
            free[rng.gen_range(0..free.len())]
        };
    }
}
