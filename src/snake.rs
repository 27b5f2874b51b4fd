use std::collections::VecDeque;

use crate::grid::Point;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The 180 degree turn.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step (dx, dy); y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>, // body[0] - head
    target_length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    start: Point,
}

impl Snake {
    /// Length 1 at `start`, heading right.
    pub fn new(start: Point) -> Snake {
        Snake {
            body: VecDeque::from([start]),
            target_length: 1,
            direction: Direction::Right,
            pending_direction: None,
            start,
        }
    }

    pub fn head(&self) -> Point {
        // never empty: built with one cell and advance() only pops after a push
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn occupies(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    /// Queues a turn for the next advance. A reversal into the neck is dropped;
    /// anything else overwrites an unconsumed pending turn.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// One step forward with no edge handling.
    pub fn advance(&mut self) -> Point {
        self.advance_with(|p| p)
    }

    /// One step forward. `edge` maps the raw new head, e.g. to wrap it onto the grid.
    /// Returns the new head.
    pub fn advance_with<F: Fn(Point) -> Point>(&mut self, edge: F) -> Point {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        let new_head = edge(self.head().offset(self.direction.delta()));
        self.body.push_front(new_head);
        if self.body.len() > self.target_length {
            self.body.pop_back();
        }
        new_head
    }

    /// Takes effect on the next advance, which keeps its tail.
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Head against the post-move body, head excluded.
    pub fn check_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&p| p == head)
    }

    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(self.start);
        self.target_length = 1;
        self.direction = Direction::Right;
        self.pending_direction = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(snake: &Snake) -> Vec<Point> {
        snake.body().iter().copied().collect()
    }

    /// Grows to `length` while heading right from (1, 1).
    fn straight_snake(length: usize) -> Snake {
        let mut snake = Snake::new(Point::new(1, 1));
        for _ in 1..length {
            snake.grow();
        }
        for _ in 1..length {
            snake.advance();
        }
        snake
    }

    #[test]
    fn test_new_snake() {
        let snake = Snake::new(Point::new(1, 1));
        assert_eq!(body(&snake), vec![Point::new(1, 1)]);
        assert_eq!(snake.target_length(), 1);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), None);
    }

    #[test]
    fn test_opposite_and_delta_cancel() {
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            let (ox, oy) = d.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_accepted_turn_applies_on_advance() {
        for d in Direction::ALL {
            let mut snake = Snake::new(Point::new(5, 5));
            if d == snake.direction().opposite() {
                continue;
            }
            snake.set_pending_direction(d);
            assert_eq!(snake.direction(), Direction::Right);
            let head = snake.advance();
            assert_eq!(snake.direction(), d);
            assert_eq!(snake.pending_direction(), None);
            assert_eq!(head, Point::new(5, 5).offset(d.delta()));
        }
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut snake = Snake::new(Point::new(5, 5));
        snake.set_pending_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), None);
        snake.advance();
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head(), Point::new(6, 5));
    }

    #[test]
    fn test_reversal_checked_against_current_not_pending() {
        let mut snake = Snake::new(Point::new(5, 5));
        snake.set_pending_direction(Direction::Up);
        // Down reverses the pending Up, but not the current Right
        snake.set_pending_direction(Direction::Down);
        assert_eq!(snake.pending_direction(), Some(Direction::Down));
        // Left reverses the current Right and leaves the pending turn alone
        snake.set_pending_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), Some(Direction::Down));
    }

    #[test]
    fn test_plain_advance_keeps_length() {
        let mut snake = Snake::new(Point::new(1, 1));
        let head = snake.advance();
        assert_eq!(head, Point::new(2, 1));
        assert_eq!(body(&snake), vec![Point::new(2, 1)]);
    }

    #[test]
    fn test_grow_skips_exactly_one_trim() {
        let mut snake = Snake::new(Point::new(1, 1));
        snake.grow();
        assert_eq!(snake.len(), 1);
        snake.advance();
        assert_eq!(body(&snake), vec![Point::new(2, 1), Point::new(1, 1)]);
        snake.advance();
        assert_eq!(body(&snake), vec![Point::new(3, 1), Point::new(2, 1)]);
        assert_eq!(snake.len(), snake.target_length());
    }

    #[test]
    fn test_body_stays_contiguous() {
        let mut snake = straight_snake(5);
        for d in [Direction::Down, Direction::Down, Direction::Left, Direction::Up] {
            snake.set_pending_direction(d);
            snake.advance();
            let cells = body(&snake);
            for pair in cells.windows(2) {
                let manhattan = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
                assert_eq!(manhattan, 1);
            }
        }
    }

    #[test]
    fn test_movement_is_unbounded() {
        let mut snake = Snake::new(Point::new(0, 0));
        snake.set_pending_direction(Direction::Up);
        snake.advance();
        snake.advance();
        assert_eq!(snake.head(), Point::new(0, -2));
        assert!(!snake.check_self_collision());
    }

    #[test]
    fn test_advance_with_maps_head() {
        let mut snake = Snake::new(Point::new(3, 0));
        let head = snake.advance_with(|p| Point::new(p.x % 4, p.y));
        assert_eq!(head, Point::new(0, 0));
        assert_eq!(snake.head(), Point::new(0, 0));
    }

    #[test]
    fn test_loop_collides() {
        let mut snake = straight_snake(5);
        // (5,1) (4,1) (3,1) (2,1) (1,1)
        snake.set_pending_direction(Direction::Down);
        snake.advance();
        assert!(!snake.check_self_collision());
        snake.set_pending_direction(Direction::Left);
        snake.advance();
        assert!(!snake.check_self_collision());
        snake.set_pending_direction(Direction::Up);
        snake.advance();
        assert_eq!(snake.head(), Point::new(4, 1));
        assert!(snake.check_self_collision());

        snake.reset();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Point::new(1, 1));
        assert_eq!(snake.target_length(), 1);
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_popped_tail_is_not_a_collision() {
        let mut snake = straight_snake(4);
        // (4,1) (3,1) (2,1) (1,1); the square closes onto the cell vacated this tick
        for d in [Direction::Down, Direction::Left, Direction::Up] {
            snake.set_pending_direction(d);
            snake.advance();
        }
        assert_eq!(snake.head(), Point::new(3, 1));
        assert!(!snake.check_self_collision());
    }

    #[test]
    fn test_unpopped_tail_is_a_collision() {
        let mut snake = straight_snake(4);
        for d in [Direction::Down, Direction::Left] {
            snake.set_pending_direction(d);
            snake.advance();
        }
        // growing keeps the tail in place for this move
        snake.grow();
        snake.set_pending_direction(Direction::Up);
        snake.advance();
        assert!(snake.check_self_collision());
    }

    #[test]
    fn test_reset_clears_pending() {
        let mut snake = straight_snake(3);
        snake.set_pending_direction(Direction::Down);
        snake.reset();
        assert_eq!(snake.pending_direction(), None);
        assert_eq!(body(&snake), vec![snake.start()]);
    }
}
