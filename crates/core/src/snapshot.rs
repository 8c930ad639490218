//! Snapshot module - read-only view of a game for outer layers
//!
//! Renderers and other consumers read a [`GameSnapshot`] instead of borrowing the live
//! game. Cells are row-major, matching [`crate::Grid::cells`].

use serde::Serialize;

use crate::tile::{Position, Tile};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameSnapshot {
    pub size: u8,
    /// Row-major cells (`y * size + x`)
    pub cells: Vec<Option<Tile>>,
    pub score: u64,
    pub over: bool,
    pub episode_id: u32,
    pub moves: u32,
}

impl GameSnapshot {
    /// Tile at `(x, y)`, if any
    pub fn tile_at(&self, x: u8, y: u8) -> Option<&Tile> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells
            .get(y as usize * self.size as usize + x as usize)
            .and_then(Option::as_ref)
    }

    /// Iterate over all tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    /// Highest tile value (0 if the grid is empty)
    pub fn max_value(&self) -> u32 {
        self.tiles().map(|t| t.value).max().unwrap_or(0)
    }

    /// Tiles that slid this move, as `(from, to)` pairs, for animation
    pub fn slides(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.tiles().filter(|t| t.has_moved()).filter_map(|t| {
            t.previous_position.map(|from| (from, t.position))
        })
    }

    pub fn playable(&self) -> bool {
        !self.over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameManager, Grid};
    use crate::types::Direction;

    #[test]
    fn test_tile_at_bounds() {
        let game = GameManager::with_grid(Grid::from_rows(&[&[2, 0], &[0, 4]]), || 0.0);
        let snap = game.snapshot();
        assert_eq!(snap.tile_at(0, 0).map(|t| t.value), Some(2));
        assert_eq!(snap.tile_at(1, 1).map(|t| t.value), Some(4));
        assert!(snap.tile_at(1, 0).is_none());
        assert!(snap.tile_at(2, 0).is_none());
        assert_eq!(snap.max_value(), 4);
        assert!(snap.playable());
    }

    #[test]
    fn test_slides_report_movement() {
        let grid = Grid::from_rows(&[&[0, 0, 0, 2], &[0; 4], &[0; 4], &[0; 4]]);
        let mut game = GameManager::with_grid(grid, || 0.99);
        game.move_tiles(Direction::Left);

        let snap = game.snapshot();
        let slides: Vec<_> = snap.slides().collect();
        assert_eq!(slides, vec![(Position::new(3, 0), Position::new(0, 0))]);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let game = GameManager::with_grid(Grid::from_rows(&[&[2, 0], &[0, 0]]), || 0.0);
        let v = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(v["size"], 2);
        assert_eq!(v["score"], 0);
        assert_eq!(v["over"], false);
        assert_eq!(v["cells"][0]["value"], 2);
        assert_eq!(v["cells"][0]["position"]["x"], 0);
        assert!(v["cells"][0]["merged_from"].is_null());
        assert!(v["cells"][1].is_null());
    }
}
