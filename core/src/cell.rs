use serde::{Deserialize, Serialize};

/// What the player currently sees of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
    Flagged,
}

impl Visibility {
    pub const fn is_unopened(self) -> bool {
        matches!(self, Self::Closed | Self::Flagged)
    }
}

/// State of one grid position.
///
/// `has_bomb` and `adjacent_bombs` are written once, when bombs are placed,
/// and stay fixed until the board is reset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    visibility: Visibility,
    has_bomb: bool,
    adjacent_bombs: u8,
}

impl Cell {
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub const fn has_bomb(&self) -> bool {
        self.has_bomb
    }

    pub const fn adjacent_bombs(&self) -> u8 {
        self.adjacent_bombs
    }

    pub const fn is_closed(&self) -> bool {
        matches!(self.visibility, Visibility::Closed)
    }

    pub const fn is_open(&self) -> bool {
        matches!(self.visibility, Visibility::Open)
    }

    pub const fn is_flagged(&self) -> bool {
        matches!(self.visibility, Visibility::Flagged)
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub(crate) fn arm(&mut self) {
        self.has_bomb = true;
    }

    pub(crate) fn set_adjacent_bombs(&mut self, count: u8) {
        self.adjacent_bombs = count;
    }
}
