use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one cell")]
    InvalidSize,
    #[error("Too many bombs, at least one cell must stay safe")]
    TooManyBombs,
    #[error("Bombs were already placed for this game")]
    BombsAlreadyPlaced,
    #[error("Bomb layout does not match the configured bomb count")]
    LayoutMismatch,
    #[error("Bomb layout mines the first opened cell")]
    ExcludedCellMined,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
