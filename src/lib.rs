//! Classic single-screen snake.
//!
//! The game rules live in [`game`], [`snake`], [`food`] and [`grid`] and know
//! nothing about windows or pixels. [`render`], [`input`] and [`event_loop`]
//! are the thin shell that puts them on screen.

pub mod config;
pub mod event_loop;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logger;
pub mod render;
pub mod snake;

pub use config::{EdgePolicy, FoodPlacement, GameConfig};
pub use food::Food;
pub use game::{Game, GameStats, TickOutcome};
pub use grid::{Grid, Point};
pub use snake::{Direction, Snake};
