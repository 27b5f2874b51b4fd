use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{EdgePolicy, FoodPlacement, GameConfig};
use crate::food::Food;
use crate::grid::Grid;
use crate::snake::{Direction, Snake};

/// What a single tick did, for the shell to log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub died: bool,
    /// Body length right before the reset, when `died`.
    pub length_at_death: Option<usize>,
}

/// In-memory counters only; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameStats {
    pub ticks: u64,
    pub meals: u64,
    pub deaths: u64,
    pub longest: usize,
}

pub struct Game {
    grid: Grid,
    food_placement: FoodPlacement,
    edge_policy: EdgePolicy,
    snake: Snake,
    food: Food,
    rng: StdRng,
    stats: GameStats,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: &GameConfig, mut rng: StdRng) -> Self {
        let grid = config.grid();
        let food = Food::new(&grid, &mut rng);
        Self {
            grid,
            food_placement: config.food_placement,
            edge_policy: config.edge_policy,
            snake: Snake::new(config.start_cell),
            food,
            rng,
            stats: GameStats { longest: 1, ..Default::default() },
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn food_mut(&mut self) -> &mut Food {
        &mut self.food
    }

    /// One simulation step: input, move, eat, self-collision. The order is fixed.
    pub fn tick<I>(&mut self, inputs: I) -> TickOutcome
    where
        I: IntoIterator<Item = Direction>,
    {
        let mut outcome = TickOutcome::default();
        self.stats.ticks += 1;

        for direction in inputs {
            self.snake.set_pending_direction(direction);
        }

        let grid = self.grid;
        let head = match self.edge_policy {
            EdgePolicy::Unbounded => self.snake.advance(),
            EdgePolicy::Wrap => self.snake.advance_with(|p| grid.wrap(p)),
        };

        if head == self.food.position() {
            self.snake.grow();
            self.relocate_food();
            self.stats.meals += 1;
            outcome.ate_food = true;
        }

        if self.snake.check_self_collision() {
            outcome.died = true;
            outcome.length_at_death = Some(self.snake.len());
            self.snake.reset();
            self.stats.deaths += 1;
        }

        self.stats.longest = self.stats.longest.max(self.snake.target_length());
        outcome
    }

    fn relocate_food(&mut self) {
        match self.food_placement {
            FoodPlacement::Anywhere => self.food.relocate(&self.grid, &mut self.rng),
            FoodPlacement::AvoidSnake => {
                let snake = &self.snake;
                self.food
                    .relocate_avoiding(&self.grid, &mut self.rng, |p| snake.occupies(p));
            }
        }
    }
}
