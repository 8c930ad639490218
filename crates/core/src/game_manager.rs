//! Game manager module - runs one full move cycle
//!
//! This module ties together the grid, tiles, and random source. It handles traversal
//! ordering, sliding, merging, spawning, and game-over detection.
//!
//! The session has two states: active and terminated. Terminated is absorbing; moves
//! made after it are ignored.

use arrayvec::ArrayVec;

use crate::config::{ConfigError, GameConfig};
use crate::grid::Grid;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::tile::{Position, Tile, TileId};
use crate::types::*;

/// Summary of a single call to [`GameManager::move_tiles`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// At least one tile changed cell (or merged)
    pub moved: bool,
    /// Score gained this move
    pub points: u32,
    /// Number of merges performed
    pub merges: u8,
    /// Where the new tile was spawned, if any
    pub spawned: Option<Position>,
}

/// Cell visiting order for one move
///
/// Along the axis the move points to, cells nearest the destination wall come first, so
/// a tile never checks availability against a neighbour that has yet to slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversals {
    pub x: ArrayVec<i8, { MAX_GRID_SIZE as usize }>,
    pub y: ArrayVec<i8, { MAX_GRID_SIZE as usize }>,
}

impl Traversals {
    pub fn build(size: u8, (dx, dy): (i8, i8)) -> Self {
        let mut x: ArrayVec<i8, { MAX_GRID_SIZE as usize }> = (0..size as i8).collect();
        let mut y: ArrayVec<i8, { MAX_GRID_SIZE as usize }> = (0..size as i8).collect();

        if dx == 1 {
            x.reverse();
        }
        if dy == 1 {
            y.reverse();
        }

        Self { x, y }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameManager<R = SimpleRng> {
    grid: Grid,
    rng: R,
    score: u64,
    over: bool,
    /// Next id handed out to a spawned or merged tile
    next_tile_id: TileId,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Moves that actually changed the grid in this episode.
    moves: u32,
}

impl GameManager<SimpleRng> {
    /// Create a new game with the built-in LCG seeded from `seed`
    pub fn new(size: u8, seed: u32) -> Self {
        Self::with_rng(size, SimpleRng::new(seed))
    }

    /// Validate a configuration and start a game from it
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.size, config.seed))
    }
}

impl<R: RandomSource> GameManager<R> {
    /// Create a new game drawing randomness from `rng`
    ///
    /// # Panics
    ///
    /// If `size` is outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    pub fn with_rng(size: u8, rng: R) -> Self {
        let mut game = Self {
            grid: Grid::new(size),
            rng,
            score: 0,
            over: false,
            next_tile_id: 0,
            episode_id: 0,
            moves: 0,
        };
        game.setup();
        game
    }

    /// Continue from a prepared grid without spawning start tiles
    ///
    /// The game is marked terminated straight away if the grid admits no move.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        let next_tile_id = grid.max_id().map_or(0, |id| id + 1);
        let mut game = Self {
            grid,
            rng,
            score: 0,
            over: false,
            next_tile_id,
            episode_id: 0,
            moves: 0,
        };
        game.over = !game.moves_available();
        game
    }

    fn setup(&mut self) {
        self.grid = Grid::new(self.grid.size());
        self.score = 0;
        self.over = false;
        self.moves = 0;
        self.add_start_tiles();
        log::info!(
            "episode {} started on a {}x{} grid",
            self.episode_id,
            self.grid.size(),
            self.grid.size()
        );
    }

    /// Start over on a fresh grid of the same size
    ///
    /// The random source keeps its stream, so consecutive episodes differ.
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.setup();
    }

    pub fn is_game_terminated(&self) -> bool {
        self.over
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn size(&self) -> u8 {
        self.grid.size()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    fn add_start_tiles(&mut self) {
        for _ in 0..START_TILES {
            self.add_random_tile();
        }
    }

    fn next_id(&mut self) -> TileId {
        let id = self.next_tile_id;
        self.next_tile_id = self.next_tile_id.wrapping_add(1);
        id
    }

    /// Spawn a 2 (90%) or a 4 (10%) on a random empty cell
    ///
    /// Returns the spawn position, or `None` if the grid is full.
    pub fn add_random_tile(&mut self) -> Option<Position> {
        if !self.grid.cells_available() {
            return None;
        }

        let value = if self.rng.next_f64() < SPAWN_TWO_PROBABILITY {
            SPAWN_LOW_VALUE
        } else {
            SPAWN_HIGH_VALUE
        };
        let position = self.grid.random_available_cell(&mut self.rng);
        let id = self.next_id();
        self.grid.insert_tile(Tile::new(id, position, value));

        log::trace!("spawned {} at ({}, {})", value, position.x, position.y);
        Some(position)
    }

    /// Clear merge provenance and snapshot positions before a move
    pub fn prepare_tiles(&mut self) {
        self.grid.each_cell_mut(|_, _, tile| {
            if let Some(tile) = tile {
                tile.merged_from = None;
                tile.save_position();
            }
        });
    }

    /// Relocate the tile in `from` to `to`
    fn move_tile(&mut self, from: Position, to: Position) {
        if let Some(mut tile) = self.grid.take(from) {
            tile.update_position(to);
            self.grid.insert_tile(tile);
        }
    }

    /// Apply a direction given as its integer code (0=up, 1=right, 2=down, 3=left)
    ///
    /// Unknown codes are ignored.
    pub fn move_index(&mut self, index: u8) -> MoveOutcome {
        match Direction::from_index(index) {
            Some(direction) => self.move_tiles(direction),
            None => {
                log::warn!("ignoring unknown direction code {}", index);
                MoveOutcome::default()
            }
        }
    }

    /// Shift every tile towards `direction`, merging equal neighbours
    ///
    /// If anything moved, one random tile is spawned and the game-over condition is
    /// re-evaluated. A move that changes nothing is a no-op: no spawn, no score.
    pub fn move_tiles(&mut self, direction: Direction) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();
        if self.is_game_terminated() {
            return outcome;
        }

        let vector = direction.vector();
        let traversals = self.build_traversals(vector);

        self.prepare_tiles();

        for &x in &traversals.x {
            for &y in &traversals.y {
                let cell = Position::new(x, y);
                let Some(tile) = self.grid.cell_content(cell).copied() else {
                    continue;
                };

                let (farthest, next) = self.find_farthest_position(cell, vector);
                let mergeable = self
                    .grid
                    .cell_content(next)
                    .filter(|other| other.value == tile.value && other.merged_from.is_none())
                    .copied();

                let landed = match mergeable {
                    Some(stationary) => {
                        let mut moving = tile;
                        moving.update_position(next);
                        let merged = Tile::merged(self.next_id(), moving, stationary);

                        self.grid.insert_tile(merged);
                        self.grid.remove_tile(&tile);

                        self.score += u64::from(merged.value);
                        outcome.points += merged.value;
                        outcome.merges += 1;
                        next
                    }
                    None => {
                        self.move_tile(cell, farthest);
                        farthest
                    }
                };

                if landed != cell {
                    outcome.moved = true;
                }
            }
        }

        if outcome.moved {
            self.moves += 1;
            outcome.spawned = self.add_random_tile();

            if !self.moves_available() {
                self.over = true;
                log::info!(
                    "episode {} over after {} moves, score {}",
                    self.episode_id,
                    self.moves,
                    self.score
                );
            }
        }

        log::debug!(
            "move {}: moved={} points={} merges={}",
            direction.as_str(),
            outcome.moved,
            outcome.points,
            outcome.merges
        );
        outcome
    }

    /// Visiting order for a move along `vector` on this grid
    pub fn build_traversals(&self, vector: (i8, i8)) -> Traversals {
        Traversals::build(self.grid.size(), vector)
    }

    /// Walk from `cell` along `vector` while the next cell is empty
    ///
    /// Returns `(farthest, next)`: the last empty cell reached (or `cell` itself) and the
    /// first blocked cell, which is either occupied or out of bounds.
    pub fn find_farthest_position(&self, cell: Position, vector: (i8, i8)) -> (Position, Position) {
        let mut previous = cell;
        let mut next = cell.offset(vector);
        while self.grid.cell_available(next) {
            previous = next;
            next = next.offset(vector);
        }
        (previous, next)
    }

    /// True while an empty cell or a mergeable pair exists
    pub fn moves_available(&self) -> bool {
        self.grid.cells_available() || self.tile_matches_available()
    }

    /// True if any tile has an equal-valued orthogonal neighbour
    pub fn tile_matches_available(&self) -> bool {
        self.grid.tiles().any(|tile| {
            Direction::ALL.iter().any(|dir| {
                self.grid
                    .cell_content(tile.position.offset(dir.vector()))
                    .is_some_and(|other| other.value == tile.value)
            })
        })
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.move_tiles(direction).moved,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Refresh `out` with the current observable state
    ///
    /// Reuses `out`'s cell buffer, so repeated calls do not allocate.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.grid.size();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.score = self.score;
        out.over = self.over;
        out.episode_id = self.episode_id;
        out.moves = self.moves;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameManager<SimpleRng> {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn test_new_game_has_start_tiles() {
        let game = GameManager::new(4, 12345);
        assert_eq!(game.grid().tile_count(), START_TILES as usize);
        assert_eq!(game.score(), 0);
        assert!(!game.is_game_terminated());
        assert_eq!(game.episode_id(), 0);
        assert_eq!(game.moves(), 0);
        for tile in game.grid().tiles() {
            assert!(tile.value == 2 || tile.value == 4);
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = GameManager::new(4, 99);
        let b = GameManager::new(4, 99);
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_traversals_reverse_positive_axis() {
        let right = Traversals::build(4, Direction::Right.vector());
        assert_eq!(right.x.as_slice(), &[3, 2, 1, 0]);
        assert_eq!(right.y.as_slice(), &[0, 1, 2, 3]);

        let down = Traversals::build(3, Direction::Down.vector());
        assert_eq!(down.x.as_slice(), &[0, 1, 2]);
        assert_eq!(down.y.as_slice(), &[2, 1, 0]);

        let left = Traversals::build(2, Direction::Left.vector());
        assert_eq!(left.x.as_slice(), &[0, 1]);
        assert_eq!(left.y.as_slice(), &[0, 1]);

        let game = GameManager::new(5, 1);
        let up = game.build_traversals(Direction::Up.vector());
        assert_eq!(up.x.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(up.y.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_find_farthest_position() {
        let grid = Grid::from_rows(&[&[0, 0, 2, 0], &[0; 4], &[0; 4], &[0; 4]]);
        let game = GameManager::with_grid(grid, scripted(0.0));

        let (farthest, next) = game.find_farthest_position(Position::new(3, 0), (-1, 0));
        assert_eq!(farthest, Position::new(3, 0));
        assert_eq!(next, Position::new(2, 0));

        let (farthest, next) = game.find_farthest_position(Position::new(2, 0), (-1, 0));
        assert_eq!(farthest, Position::new(0, 0));
        assert_eq!(next, Position::new(-1, 0));

        let (farthest, next) = game.find_farthest_position(Position::new(2, 0), (0, 1));
        assert_eq!(farthest, Position::new(2, 3));
        assert_eq!(next, Position::new(2, 4));
    }

    #[test]
    fn test_prepare_tiles_resets_history() {
        let grid = Grid::from_rows(&[&[2, 2], &[0, 0]]);
        let mut game = GameManager::with_grid(grid, scripted(0.0));
        game.move_tiles(Direction::Left);
        let merged = *game.grid().cell_content(Position::new(0, 0)).unwrap();
        assert!(merged.merged_from.is_some());

        game.prepare_tiles();
        let prepared = *game.grid().cell_content(Position::new(0, 0)).unwrap();
        assert!(prepared.merged_from.is_none());
        assert_eq!(prepared.previous_position, Some(Position::new(0, 0)));
    }

    #[test]
    fn test_merge_assigns_fresh_id() {
        let grid = Grid::from_rows(&[&[2, 2], &[0, 0]]);
        let mut game = GameManager::with_grid(grid, scripted(0.0));
        game.move_tiles(Direction::Left);

        let merged = game.grid().cell_content(Position::new(0, 0)).unwrap();
        assert_eq!(merged.id, 2);
        let [moving, stationary] = merged.merged_from.unwrap();
        assert_eq!(moving.id, 1);
        assert_eq!(stationary.id, 0);
    }

    #[test]
    fn test_with_grid_detects_dead_board() {
        let grid = Grid::from_rows(&[&[2, 4], &[8, 16]]);
        let game = GameManager::with_grid(grid, scripted(0.0));
        assert!(game.is_game_terminated());
    }

    #[test]
    fn test_move_index_maps_contract() {
        let grid = Grid::from_rows(&[&[0, 0], &[0, 2]]);
        let mut game = GameManager::with_grid(grid, scripted(0.0));
        // 0 = up
        assert!(game.move_index(0).moved);
        assert_eq!(game.grid().cell_content(Position::new(1, 0)).map(|t| t.value), Some(2));
        // Unknown codes do nothing
        let before = game.grid().clone();
        assert_eq!(game.move_index(7), MoveOutcome::default());
        assert_eq!(game.grid(), &before);
    }

    #[test]
    fn test_restart_increments_episode_id() {
        let mut game = GameManager::new(4, 12345);
        assert_eq!(game.episode_id(), 0);
        assert!(game.apply_action(GameAction::Restart));
        assert_eq!(game.episode_id(), 1);
        assert_eq!(game.score(), 0);
        assert_eq!(game.grid().tile_count(), START_TILES as usize);
    }

    #[test]
    fn test_from_config_rejects_bad_size() {
        let config = GameConfig {
            size: 1,
            ..GameConfig::default()
        };
        assert!(GameManager::from_config(&config).is_err());

        let config = GameConfig {
            size: 5,
            ..GameConfig::default()
        };
        let game = GameManager::from_config(&config).unwrap();
        assert_eq!(game.size(), 5);
    }
}
