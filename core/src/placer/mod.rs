use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Chooses where the bombs of a game go.
///
/// Called once per game, on the first open, with the coordinate that must stay
/// safe.
pub trait BombPlacer {
    fn choose(&mut self, config: GameConfig, excluded: Coord2) -> Result<Vec<Coord2>>;
}
