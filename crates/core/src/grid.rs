//! Grid module - manages the square playfield
//!
//! The grid is an N x N array where each cell holds zero or one tile.
//! Uses a flat vector (allocated once) for better cache locality.
//! Coordinates: (x, y) where x ranges 0..size (left to right), y ranges 0..size (top to bottom)

use crate::rng::RandomSource;
use crate::tile::{Position, Tile, TileId};
use crate::types::{MAX_GRID_SIZE, MIN_GRID_SIZE};

/// The game grid - `size` x `size` cells using flat row-major storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: u8,
    /// Flat array of cells, row-major order (y * size + x)
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create a new empty grid
    ///
    /// # Panics
    ///
    /// If `size` is outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    pub fn new(size: u8) -> Self {
        assert!(
            (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size),
            "grid size {} outside {}..={}",
            size,
            MIN_GRID_SIZE,
            MAX_GRID_SIZE
        );
        let len = size as usize * size as usize;
        Self {
            size,
            cells: vec![None; len],
        }
    }

    /// Build a grid from literal rows of values (`0` = empty)
    ///
    /// Tiles get ids `0, 1, 2, ...` in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::{Grid, Position};
    ///
    /// let grid = Grid::from_rows(&[&[2, 0], &[0, 4]]);
    /// assert_eq!(grid.size(), 2);
    /// assert_eq!(grid.cell_content(Position::new(1, 1)).map(|t| t.value), Some(4));
    /// assert!(grid.cell_available(Position::new(1, 0)));
    /// ```
    ///
    /// # Panics
    ///
    /// If the rows do not form a square of a supported size.
    pub fn from_rows(rows: &[&[u32]]) -> Self {
        let mut grid = Self::new(rows.len() as u8);
        let mut next_id: TileId = 0;
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), rows.len(), "row {} is not {} wide", y, rows.len());
            for (x, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                grid.insert_tile(Tile::new(
                    next_id,
                    Position::new(x as i8, y as i8),
                    value,
                ));
                next_id += 1;
            }
        }
        grid
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.within_bounds(pos) {
            return None;
        }
        Some((pos.y as usize) * (self.size as usize) + (pos.x as usize))
    }

    /// Side length of the grid
    pub fn size(&self) -> u8 {
        self.size
    }

    /// True if both coordinates are in `[0, size)`
    pub fn within_bounds(&self, pos: Position) -> bool {
        let size = self.size as i8;
        pos.x >= 0 && pos.x < size && pos.y >= 0 && pos.y < size
    }

    /// Tile at a position; `None` if out of bounds or unoccupied
    pub fn cell_content(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).and_then(|idx| self.cells[idx].as_ref())
    }

    /// True if the position is within bounds and holds no tile
    pub fn cell_available(&self, pos: Position) -> bool {
        matches!(self.index(pos).map(|idx| &self.cells[idx]), Some(None))
    }

    /// True if the position is within bounds and holds a tile
    pub fn cell_occupied(&self, pos: Position) -> bool {
        self.cell_content(pos).is_some()
    }

    /// True if at least one cell is empty
    pub fn cells_available(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Number of empty cells
    pub fn available_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Number of tiles on the grid
    pub fn tile_count(&self) -> usize {
        self.cells.len() - self.available_count()
    }

    /// Pick one empty cell uniformly at random
    ///
    /// # Panics
    ///
    /// If the grid is full. Callers must check [`Grid::cells_available`] first.
    pub fn random_available_cell<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Position {
        let available = self.available_count();
        assert!(available > 0, "random_available_cell called on a full grid");

        let pick = ((rng.next_f64() * available as f64) as usize).min(available - 1);
        let idx = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .nth(pick)
            .map(|(idx, _)| idx)
            .unwrap_or_default();
        self.position_of(idx)
    }

    fn position_of(&self, idx: usize) -> Position {
        let size = self.size as usize;
        Position::new((idx % size) as i8, (idx / size) as i8)
    }

    /// Place a tile at its own recorded position, replacing whatever was there
    ///
    /// Returns false (and stores nothing) if the tile's position is out of bounds.
    pub fn insert_tile(&mut self, tile: Tile) -> bool {
        match self.index(tile.position) {
            Some(idx) => {
                self.cells[idx] = Some(tile);
                true
            }
            None => false,
        }
    }

    /// Clear the cell at the tile's recorded position
    pub fn remove_tile(&mut self, tile: &Tile) -> Option<Tile> {
        self.take(tile.position)
    }

    /// Remove and return whatever occupies a position
    pub fn take(&mut self, pos: Position) -> Option<Tile> {
        self.index(pos).and_then(|idx| self.cells[idx].take())
    }

    /// Visit every cell in row-major order with `(x, y, tile-or-empty)`
    pub fn each_cell(&self, mut visitor: impl FnMut(i8, i8, Option<&Tile>)) {
        for (idx, cell) in self.cells.iter().enumerate() {
            let pos = self.position_of(idx);
            visitor(pos.x, pos.y, cell.as_ref());
        }
    }

    /// Visit every cell in row-major order with mutable access to its tile
    pub fn each_cell_mut(&mut self, mut visitor: impl FnMut(i8, i8, Option<&mut Tile>)) {
        let size = self.size as usize;
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            visitor((idx % size) as i8, (idx / size) as i8, cell.as_mut());
        }
    }

    /// Iterate over all tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    /// Highest tile value on the grid (0 if empty)
    pub fn max_value(&self) -> u32 {
        self.tiles().map(|tile| tile.value).max().unwrap_or(0)
    }

    /// Highest tile id on the grid
    pub fn max_id(&self) -> Option<TileId> {
        self.tiles().map(|tile| tile.id).max()
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Option<Tile>] {
        &self.cells
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Tile values as rows (`0` = empty), mostly useful for tests and debugging
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells
            .chunks(self.size as usize)
            .map(|row| row.iter().map(|cell| cell.map_or(0, |t| t.value)).collect())
            .collect()
    }
}
