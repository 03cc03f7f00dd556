//! Board and game-state engine for a square bomb-grid puzzle.
//!
//! [`Game`] is the entry point: it owns a [`Board`], places bombs lazily on the
//! first open so that move is always safe, and reports victory or defeat via
//! [`RevealOutcome`]. Renderers read cell state through [`Game::cell_at`] or a
//! [`BoardView`] snapshot and never mutate cells directly.

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use placer::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod error;
mod game;
mod placer;
mod reveal;
mod types;
mod view;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub bombs: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, bombs: CellCount) -> Self {
        Self { size, bombs }
    }

    /// At least one cell must stay bomb-free, since the first open is always
    /// safe.
    pub fn new(size: Coord, bombs: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, bombs);
        config.validate()?;
        Ok(config)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 10)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GameError::InvalidSize);
        }
        if self.bombs >= self.total_cells() {
            return Err(GameError::TooManyBombs);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.bombs)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

/// Result of an open or smart open.
///
/// `Victory` and `Defeat` are returned exactly once per game, by the call that
/// ends it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Victory,
    Defeat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_keeps_one_safe_cell() {
        assert_eq!(GameConfig::new(3, 8), Ok(GameConfig::new_unchecked(3, 8)));
        assert_eq!(GameConfig::new(3, 9), Err(GameError::TooManyBombs));
        assert_eq!(GameConfig::new(0, 0), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::new(1, 0).map(|c| c.safe_cells()), Ok(1));
    }

    #[test]
    fn default_config_is_beginner() {
        let config = GameConfig::default();
        assert_eq!((config.size, config.bombs), (9, 10));
        assert_eq!(config.safe_cells(), 71);
    }
}
