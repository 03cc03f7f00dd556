use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of cells together with the bomb layout and the visibility
/// counters derived from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    bombs: Vec<Coord2>,
    bombs_placed: bool,
    open_count: CellCount,
    flag_count: CellCount,
}

impl Board {
    pub fn new(size: Coord) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self {
            cells: Array2::default((size, size).to_nd_index()),
            bombs: Vec::new(),
            bombs_placed: false,
            open_count: 0,
            flag_count: 0,
        })
    }

    /// Closes every cell and forgets the bomb layout, resizing when `size`
    /// differs from the current side.
    pub fn reset(&mut self, size: Coord) -> Result<()> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        if size != self.size() {
            self.cells = Array2::default((size, size).to_nd_index());
        }
        self.clear();
        Ok(())
    }

    /// Same as [`Board::reset`] at the current size.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.bombs.clear();
        self.bombs_placed = false;
        self.open_count = 0;
        self.flag_count = 0;
    }

    pub fn size(&self) -> Coord {
        Coord::try_from(self.cells.nrows()).unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size())
    }

    /// Accepts signed input so callers can test raw, possibly negative,
    /// positions before converting them to coordinates.
    pub fn is_in_bounds(&self, row: isize, col: isize) -> bool {
        let size = isize::from(self.size());
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn iter_coords(&self) -> CoordIter {
        CoordIter::new((self.size(), self.size()))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn bombs_placed(&self) -> bool {
        self.bombs_placed
    }

    /// Bomb coordinates in row-major order, empty until bombs are placed.
    pub fn bomb_coords(&self) -> &[Coord2] {
        &self.bombs
    }

    pub fn open_count(&self) -> CellCount {
        self.open_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Cells that are either closed or flagged.
    pub fn unopened_count(&self) -> CellCount {
        self.total_cells() - self.open_count
    }

    pub fn flagged_neighbor_count(&self, coords: Coord2) -> u8 {
        self.count_neighbors(coords, Cell::is_flagged)
    }

    fn count_neighbors(&self, coords: Coord2, pred: impl Fn(&Cell) -> bool) -> u8 {
        let count = self
            .iter_neighbors(coords)
            .filter(|&pos| pred(&self[pos]))
            .count();
        // at most eight neighbors
        count as u8
    }

    /// Arms the given cells and precomputes every neighbor count.
    ///
    /// Runs once per game; a second call fails with
    /// [`GameError::BombsAlreadyPlaced`] without touching the board.
    pub fn place_bombs(&mut self, bombs: &[Coord2]) -> Result<()> {
        if self.bombs_placed {
            return Err(GameError::BombsAlreadyPlaced);
        }
        for &coords in bombs {
            self.validate_coords(coords)?;
        }

        for &coords in bombs {
            self.cells[coords.to_nd_index()].arm();
        }
        self.bombs = self
            .iter_coords()
            .filter(|&pos| self[pos].has_bomb())
            .collect();

        for coords in self.iter_coords() {
            let count = self.count_neighbors(coords, Cell::has_bomb);
            self.cells[coords.to_nd_index()].set_adjacent_bombs(count);
        }

        self.bombs_placed = true;
        Ok(())
    }

    /// Changes the visibility of one cell, keeping the open and flag counters
    /// in step. Returns the previous visibility.
    pub(crate) fn set_visibility(&mut self, coords: Coord2, visibility: Visibility) -> Visibility {
        use Visibility::*;

        let cell = &mut self.cells[coords.to_nd_index()];
        let previous = cell.visibility();
        if previous == visibility {
            return previous;
        }
        cell.set_visibility(visibility);

        match previous {
            Open => self.open_count -= 1,
            Flagged => self.flag_count -= 1,
            Closed => {}
        }
        match visibility {
            Open => self.open_count += 1,
            Flagged => self.flag_count += 1,
            Closed => {}
        }
        previous
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
