use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer draws for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Closed,
    Flagged,
    Open(u8),
    /// An open bomb, only seen after a defeat
    Bomb,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        match cell.visibility() {
            Visibility::Closed => Self::Closed,
            Visibility::Flagged => Self::Flagged,
            Visibility::Open if cell.has_bomb() => Self::Bomb,
            Visibility::Open => Self::Open(cell.adjacent_bombs()),
        }
    }
}

/// Read-only snapshot of a game for collaborators that draw or ship state.
///
/// Hides bomb positions of closed cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord,
    pub state: GameState,
    pub remaining_flags: isize,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_game<P: BombPlacer>(game: &Game<P>) -> Self {
        let board = game.board();
        let size = board.size();
        let mut cells = Array2::from_elem((size, size).to_nd_index(), CellView::Closed);

        for coords in board.iter_coords() {
            cells[coords.to_nd_index()] = board[coords].into();
        }

        Self {
            size,
            state: game.state(),
            remaining_flags: game.remaining_flags(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(coords.to_nd_index()).copied()
    }
}
