//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the sliding-tile merge rules, grid state, and move resolution.
//! It has **no dependencies** on terminal I/O or input handling, making it:
//!
//! - **Deterministic**: The random source is injected, so a seed replays a game exactly
//! - **Testable**: Grids can be built from literal rows and driven move by move
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Moves and snapshot refreshes do not allocate once warmed up
//!
//! # Module Structure
//!
//! - [`tile`]: Numbered tiles with position and merge provenance
//! - [`grid`]: N x N cell storage with availability queries
//! - [`game_manager`]: One full move cycle (traversal, slide, merge, spawn, game over)
//! - [`rng`]: Random source abstraction and a small deterministic LCG
//! - [`snapshot`]: Read-only observable state for renderers and other consumers
//! - [`config`]: Grid size / seed configuration loaded from the environment
//!
//! # Game Rules
//!
//! - **Slide**: every tile travels as far as it can towards the chosen wall
//! - **Merge**: two equal tiles combine into one of double value, at most once per tile per move
//! - **Spawn**: a successful move adds a 2 (90%) or a 4 (10%) on a random empty cell
//! - **Game over**: the grid is full and no two neighbours share a value
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameManager, Grid, Position};
//! use tui_2048_types::Direction;
//!
//! // A fixed random source keeps the spawn predictable
//! let grid = Grid::from_rows(&[&[2, 2, 0, 0], &[0; 4], &[0; 4], &[0; 4]]);
//! let mut game = GameManager::with_grid(grid, || 0.0);
//!
//! let outcome = game.move_tiles(Direction::Left);
//! assert!(outcome.moved);
//! assert_eq!(outcome.points, 4);
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.grid().cell_content(Position::new(0, 0)).map(|t| t.value), Some(4));
//! ```

pub mod config;
pub mod game_manager;
pub mod grid;
pub mod rng;
pub mod snapshot;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use game_manager::{GameManager, MoveOutcome, Traversals};
pub use grid::Grid;
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::GameSnapshot;
pub use tile::{MergeParent, Position, Tile, TileId};
