use crate::food::Food;
use crate::game::Game;
use crate::grid::{Grid, Point};
use crate::snake::Snake;

/// RGBA8, the layout `pixels` expects.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Rgba(pub [u8; 4]);

pub const BACKGROUND: Rgba = Rgba([0x00, 0x00, 0x00, 0xFF]); // black
pub const SNAKE_COLOR: Rgba = Rgba([0x00, 0xFF, 0x00, 0xFF]); // green
pub const FOOD_COLOR: Rgba = Rgba([0xFF, 0x00, 0x00, 0xFF]); // red

/// Anything the painter can draw: a set of cells in one color.
pub trait Drawable {
    fn cells(&self) -> Vec<Point>;
    fn color(&self) -> Rgba;
}

impl Drawable for Snake {
    fn cells(&self) -> Vec<Point> {
        self.body().iter().copied().collect()
    }

    fn color(&self) -> Rgba {
        SNAKE_COLOR
    }
}

impl Drawable for Food {
    fn cells(&self) -> Vec<Point> {
        vec![self.position()]
    }

    fn color(&self) -> Rgba {
        FOOD_COLOR
    }
}

/// Frame buffer view: `width` x `height` canvas units, 4 bytes each.
pub struct Canvas<'a> {
    pub frame: &'a mut [u8],
    pub width: u32,
    pub height: u32,
}

impl Canvas<'_> {
    pub fn clear(&mut self, color: Rgba) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color.0);
        }
    }

    /// Fills one cell; whatever falls outside the canvas is clipped.
    pub fn fill_cell(&mut self, grid: &Grid, cell: Point, color: Rgba) {
        let (left, top) = grid.to_pixels(cell);
        let size = grid.cell_size as i64;
        let x0 = left.max(0);
        let y0 = top.max(0);
        let x1 = (left + size).min(self.width as i64);
        let y1 = (top + size).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for py in y0..y1 {
            let row = py as usize * self.width as usize;
            for px in x0..x1 {
                let i = (row + px as usize) * 4;
                if i + 4 <= self.frame.len() {
                    self.frame[i..i + 4].copy_from_slice(&color.0);
                }
            }
        }
    }

    pub fn draw(&mut self, grid: &Grid, item: &dyn Drawable) {
        let color = item.color();
        for cell in item.cells() {
            self.fill_cell(grid, cell, color);
        }
    }
}

/// Background, then the snake, then the food on top.
pub fn paint(canvas: &mut Canvas<'_>, game: &Game) {
    canvas.clear(BACKGROUND);
    let grid = *game.grid();
    let items: [&dyn Drawable; 2] = [game.snake(), game.food()];
    for item in items {
        canvas.draw(&grid, item);
    }
}
