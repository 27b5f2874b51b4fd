use winit::event::VirtualKeyCode;

use crate::snake::Direction;

/// Arrows and WASD; any other key is ignored.
pub fn direction_for_key(key: VirtualKeyCode) -> Option<Direction> {
    match key {
        VirtualKeyCode::Up | VirtualKeyCode::W => Some(Direction::Up),
        VirtualKeyCode::Down | VirtualKeyCode::S => Some(Direction::Down),
        VirtualKeyCode::Left | VirtualKeyCode::A => Some(Direction::Left),
        VirtualKeyCode::Right | VirtualKeyCode::D => Some(Direction::Right),
        _ => None,
    }
}

pub fn is_quit_key(key: VirtualKeyCode) -> bool {
    key == VirtualKeyCode::Escape
}

/// Directions pressed since the last tick, oldest first.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<Direction>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, direction: Direction) {
        self.pending.push(direction);
    }

    /// Returns true when the key meant something to the game.
    pub fn push_key(&mut self, key: VirtualKeyCode) -> bool {
        match direction_for_key(key) {
            Some(direction) => {
                self.push(direction);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Direction> {
        self.pending.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(direction_for_key(VirtualKeyCode::Up), Some(Direction::Up));
        assert_eq!(direction_for_key(VirtualKeyCode::S), Some(Direction::Down));
        assert_eq!(direction_for_key(VirtualKeyCode::A), Some(Direction::Left));
        assert_eq!(direction_for_key(VirtualKeyCode::Right), Some(Direction::Right));
        assert_eq!(direction_for_key(VirtualKeyCode::Space), None);
        assert!(is_quit_key(VirtualKeyCode::Escape));
        assert!(!is_quit_key(VirtualKeyCode::Q));
    }

    #[test]
    fn test_queue_keeps_arrival_order_and_empties() {
        let mut queue = InputQueue::new();
        assert!(queue.push_key(VirtualKeyCode::Up));
        assert!(!queue.push_key(VirtualKeyCode::Return));
        assert!(queue.push_key(VirtualKeyCode::Left));
        let drained: Vec<Direction> = queue.drain().collect();
        assert_eq!(drained, vec![Direction::Up, Direction::Left]);
        assert!(queue.is_empty());
    }
}
