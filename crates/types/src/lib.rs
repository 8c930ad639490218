//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless runners).
//!
//! # Grid Dimensions
//!
//! The playfield is a square grid of `size x size` cells:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_GRID_SIZE` | 2 | Smallest playable grid |
//! | `MAX_GRID_SIZE` | 8 | Largest grid (coordinates fit in `i8`, traversals stay on the stack) |
//! | `DEFAULT_GRID_SIZE` | 4 | Classic 4x4 board |
//!
//! Coordinates: `(x, y)` where `x` grows left to right and `y` grows top to bottom.
//!
//! # Direction Contract
//!
//! Directions are encoded as integers for callers such as input layers:
//!
//! | Index | Direction | Vector |
//! |-------|-----------|--------|
//! | 0 | Up | (0, -1) |
//! | 1 | Right | (1, 0) |
//! | 2 | Down | (0, 1) |
//! | 3 | Left | (-1, 0) |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_GRID_SIZE};
//!
//! let dir = Direction::from_index(3).unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.vector(), (-1, 0));
//!
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

/// Smallest supported grid size
pub const MIN_GRID_SIZE: u8 = 2;

/// Largest supported grid size
pub const MAX_GRID_SIZE: u8 = 8;

/// Default grid size (classic 4x4)
pub const DEFAULT_GRID_SIZE: u8 = 4;

/// Number of random tiles placed on a fresh grid
pub const START_TILES: u8 = 2;

/// Probability that a spawned tile is a 2 (otherwise a 4)
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Value of the common spawned tile
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of the rare spawned tile
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// The four movement directions
///
/// Discriminants follow the integer contract used by input layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// All directions in index order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Look up a direction by its integer code (0-3)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_index(0), Some(Direction::Up));
    /// assert_eq!(Direction::from_index(2), Some(Direction::Down));
    /// assert_eq!(Direction::from_index(4), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Integer code of this direction
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Unit vector `(dx, dy)` for this direction
    pub fn vector(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "right" | "r" => Some(Direction::Right),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// Actions an outer layer can ask the game to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift every tile towards one wall
    Move(Direction),
    /// Throw the current grid away and start over
    Restart,
}

impl GameAction {
    /// Parse game action from string (camelCase or snake_case)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("move_down"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "moveUp" | "move_up" => Some(GameAction::Move(Direction::Up)),
            "moveRight" | "move_right" => Some(GameAction::Move(Direction::Right)),
            "moveDown" | "move_down" => Some(GameAction::Move(Direction::Down)),
            "moveLeft" | "move_left" => Some(GameAction::Move(Direction::Left)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_index_table_is_fixed() {
        assert_eq!(Direction::Up.index(), 0);
        assert_eq!(Direction::Right.index(), 1);
        assert_eq!(Direction::Down.index(), 2);
        assert_eq!(Direction::Left.index(), 3);

        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::from_index(i as u8), Some(*dir));
        }
        assert_eq!(Direction::from_index(255), None);
    }

    #[test]
    fn direction_vectors_are_unit_steps() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.vector();
            assert_eq!(dx.abs() + dy.abs(), 1, "{:?}", dir);
        }
        assert_eq!(Direction::Up.vector(), (0, -1));
        assert_eq!(Direction::Down.vector(), (0, 1));
    }

    #[test]
    fn direction_string_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
        assert_eq!(Direction::from_str("sideways"), None);
    }

    #[test]
    fn action_string_roundtrip() {
        let actions = [
            GameAction::Move(Direction::Up),
            GameAction::Move(Direction::Right),
            GameAction::Move(Direction::Down),
            GameAction::Move(Direction::Left),
            GameAction::Restart,
        ];
        for action in actions {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn spawn_constants() {
        assert_eq!(START_TILES, 2);
        assert!((SPAWN_TWO_PROBABILITY - 0.9).abs() < f64::EPSILON);
        assert_eq!(SPAWN_LOW_VALUE * 2, SPAWN_HIGH_VALUE);
        assert!(MIN_GRID_SIZE <= DEFAULT_GRID_SIZE && DEFAULT_GRID_SIZE <= MAX_GRID_SIZE);
    }
}
