use rand::Rng;
use serde::{Deserialize, Serialize};

/// One grid cell. Signed because the snake is allowed to leave the visible area.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, (dx, dy): (i32, i32)) -> Point {
        Point { x: self.x + dx, y: self.y + dy }
    }
}

/// Playable area in cells, [0, width) x [0, height).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        Self { width, height, cell_size }
    }

    /// 640x480 canvas with 20 unit cells gives a 32x24 grid.
    pub fn from_canvas(canvas_width: u32, canvas_height: u32, cell_size: u32) -> Self {
        Self::new(canvas_width / cell_size, canvas_height / cell_size, cell_size)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    /// Folds any cell back into the grid, torus style.
    pub fn wrap(&self, p: Point) -> Point {
        Point {
            x: p.x.rem_euclid(self.width as i32),
            y: p.y.rem_euclid(self.height as i32),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Uniform pick over the whole grid.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point {
            x: rng.gen_range(0..self.width as i32),
            y: rng.gen_range(0..self.height as i32),
        }
    }

    /// Top-left corner of the cell in canvas units.
    pub fn to_pixels(&self, p: Point) -> (i64, i64) {
        let size = self.cell_size as i64;
        (p.x as i64 * size, p.y as i64 * size)
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height as i32).flat_map(move |y| (0..self.width as i32).map(move |x| Point { x, y }))
    }
}
