//! Tile module - a single numbered piece on the grid
//!
//! Tiles are small `Copy` values. Moving a tile updates its position, never its identity:
//! the `id` stays the same from spawn until the tile is absorbed by a merge.

use serde::Serialize;

/// Monotonic tile identifier, unique within one game session
pub type TileId = u32;

/// A cell coordinate
///
/// Signed so that the neighbour past a wall (e.g. `x = -1`) is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one step along `(dx, dy)`
    #[inline]
    pub fn offset(self, (dx, dy): (i8, i8)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// One of the two tiles that combined into a merged tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeParent {
    pub id: TileId,
    pub value: u32,
    /// Where the parent ended up (the merge cell)
    pub position: Position,
    /// Where the parent started the move
    pub previous_position: Option<Position>,
}

impl From<Tile> for MergeParent {
    fn from(tile: Tile) -> Self {
        Self {
            id: tile.id,
            value: tile.value,
            position: tile.position,
            previous_position: tile.previous_position,
        }
    }
}

/// A numbered tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub id: TileId,
    pub position: Position,
    /// Always a power of two
    pub value: u32,
    /// `[moving, stationary]` when this tile was produced by a merge in the current move
    pub merged_from: Option<[MergeParent; 2]>,
    /// Position at the start of the current move; `None` for freshly created tiles
    pub previous_position: Option<Position>,
}

impl Tile {
    /// Create a fresh tile (spawn or merge result)
    pub fn new(id: TileId, position: Position, value: u32) -> Self {
        Self {
            id,
            position,
            value,
            merged_from: None,
            previous_position: None,
        }
    }

    /// Create the tile produced by merging `moving` into `stationary`
    pub fn merged(id: TileId, moving: Tile, stationary: Tile) -> Self {
        Self {
            merged_from: Some([moving.into(), stationary.into()]),
            ..Self::new(id, stationary.position, moving.value * 2)
        }
    }

    /// Snapshot the current position before a move
    pub fn save_position(&mut self) {
        self.previous_position = Some(self.position);
    }

    pub fn update_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Whether the tile changed cell since `save_position`
    pub fn has_moved(&self) -> bool {
        self.previous_position.is_some_and(|prev| prev != self.position)
    }

    /// Base-2 exponent of the value (2 -> 1, 4 -> 2, ...)
    pub fn exponent(&self) -> u32 {
        self.value.trailing_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_has_no_history() {
        let tile = Tile::new(7, Position::new(1, 2), 2);
        assert_eq!(tile.id, 7);
        assert_eq!(tile.value, 2);
        assert!(tile.merged_from.is_none());
        assert!(tile.previous_position.is_none());
        assert!(!tile.has_moved());
    }

    #[test]
    fn test_save_and_update_position() {
        let mut tile = Tile::new(1, Position::new(3, 0), 4);
        tile.save_position();
        assert!(!tile.has_moved());

        tile.update_position(Position::new(0, 0));
        assert_eq!(tile.previous_position, Some(Position::new(3, 0)));
        assert_eq!(tile.position, Position::new(0, 0));
        assert!(tile.has_moved());
    }

    #[test]
    fn test_merged_tile_records_parents() {
        let mut moving = Tile::new(1, Position::new(1, 0), 8);
        moving.save_position();
        moving.update_position(Position::new(0, 0));
        let mut stationary = Tile::new(2, Position::new(0, 0), 8);
        stationary.save_position();

        let merged = Tile::merged(3, moving, stationary);
        assert_eq!(merged.value, 16);
        assert_eq!(merged.position, Position::new(0, 0));
        assert!(merged.previous_position.is_none());

        let [a, b] = merged.merged_from.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(a.previous_position, Some(Position::new(1, 0)));
        assert_eq!(b.previous_position, Some(Position::new(0, 0)));
    }

    #[test]
    fn test_exponent() {
        assert_eq!(Tile::new(0, Position::default(), 2).exponent(), 1);
        assert_eq!(Tile::new(0, Position::default(), 2048).exponent(), 11);
    }

    #[test]
    fn test_position_offset() {
        let p = Position::new(0, 0);
        assert_eq!(p.offset((-1, 0)), Position::new(-1, 0));
        assert_eq!(p.offset((0, 1)), Position::new(0, 1));
    }
}
