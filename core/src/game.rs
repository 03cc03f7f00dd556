use serde::{Deserialize, Serialize};

use crate::reveal::Step;
use crate::*;

/// Valid transitions:
/// - Ready -> Active (bombs placed)
/// - Active -> Won
/// - Active -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No cell opened yet, bombs not placed
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game session: the board, the bomb placer and the lifecycle state.
///
/// Every command either applies fully or returns an error with the game left
/// untouched.
#[derive(Clone, Debug)]
pub struct Game<P = RandomBombPlacer> {
    config: GameConfig,
    board: Board,
    placer: P,
    state: GameState,
    triggered_bomb: Option<Coord2>,
}

impl Game<RandomBombPlacer> {
    /// Game with an entropy-seeded layout.
    pub fn new(size: Coord, bombs: CellCount) -> Result<Self> {
        Self::with_placer(GameConfig::new(size, bombs)?, RandomBombPlacer::from_entropy())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_placer(config, RandomBombPlacer::new(seed))
    }
}

impl Game<FixedBombPlacer> {
    /// Game whose bombs go exactly where `bombs` says, every restart.
    pub fn with_layout(size: Coord, bombs: &[Coord2]) -> Result<Self> {
        let placer = FixedBombPlacer::new(bombs);
        let config = GameConfig::new(size, placer.bomb_count())?;
        Self::with_placer(config, placer)
    }
}

impl<P: BombPlacer> Game<P> {
    pub fn with_placer(config: GameConfig, placer: P) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            board: Board::new(config.size)?,
            placer,
            state: GameState::default(),
            triggered_bomb: None,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }

    pub fn bomb_count(&self) -> CellCount {
        self.config.bombs
    }

    pub fn flag_count(&self) -> CellCount {
        self.board.flag_count()
    }

    /// Bombs minus flags, negative when the player over-flags.
    pub fn remaining_flags(&self) -> isize {
        (self.config.bombs as isize) - (self.board.flag_count() as isize)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn bombs_placed(&self) -> bool {
        self.board.bombs_placed()
    }

    /// The bomb that ended a lost game.
    pub fn triggered_bomb(&self) -> Option<Coord2> {
        self.triggered_bomb
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_in_bounds(&self, row: isize, col: isize) -> bool {
        self.board.is_in_bounds(row, col)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        self.board
            .get(coords)
            .copied()
            .ok_or(GameError::InvalidCoords)
    }

    /// Whether a smart open at `coords` would do anything.
    pub fn can_smart_open(&self, coords: Coord2) -> bool {
        !self.is_finished() && self.board.is_satisfied(coords)
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_game(self)
    }

    /// Starts a new game with the same configuration. The placer keeps its
    /// state, so a random placer yields a fresh layout.
    pub fn restart(&mut self) {
        self.board.clear();
        self.state = GameState::Ready;
        self.triggered_bomb = None;
        log::debug!("Game restarted with {:?}", self.config);
    }

    pub fn open_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        if !self.board.bombs_placed() {
            self.place_bombs(coords)?;
        }

        let step = match self.board.open_single(coords) {
            Step::Unchanged => self.board.refill(coords),
            step => step,
        };
        Ok(self.settle(step))
    }

    /// Toggles `Closed <-> Flagged`. Open cells are left alone.
    pub fn put_flag_in_cell(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;
        use Visibility::*;

        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        Ok(match self.board[coords].visibility() {
            Closed => {
                self.board.set_visibility(coords, Flagged);
                Changed
            }
            Flagged => {
                self.board.set_visibility(coords, Closed);
                Changed
            }
            Open => NoChange,
        })
    }

    /// Chord: opens every closed neighbor of a satisfied cell.
    pub fn smart_open_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        let step = self.board.chord(coords);
        Ok(self.settle(step))
    }

    fn place_bombs(&mut self, excluded: Coord2) -> Result<()> {
        let bombs = self.placer.choose(self.config, excluded)?;
        if bombs.len() != usize::from(self.config.bombs) {
            return Err(GameError::LayoutMismatch);
        }
        if bombs.contains(&excluded) {
            return Err(GameError::ExcludedCellMined);
        }
        self.board.place_bombs(&bombs)?;
        self.state = GameState::Active;
        log::debug!("Bombs placed, first open at {:?}", excluded);
        Ok(())
    }

    fn settle(&mut self, step: Step) -> RevealOutcome {
        match step {
            Step::Unchanged => RevealOutcome::NoChange,
            Step::Detonated(coords) => self.lose(coords),
            Step::Opened if self.board.all_safe_cells_open() => self.win(),
            Step::Opened => RevealOutcome::Revealed,
        }
    }

    fn lose(&mut self, coords: Coord2) -> RevealOutcome {
        self.board.reveal_bombs();
        self.triggered_bomb = Some(coords);
        self.state = GameState::Lost;
        log::info!("Defeat, bomb hit at {:?}", coords);
        RevealOutcome::Defeat
    }

    fn win(&mut self) -> RevealOutcome {
        self.board.flag_bombs();
        self.state = GameState::Won;
        log::info!("Victory on a {0}x{0} board", self.config.size);
        RevealOutcome::Victory
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.board.validate_coords(coords).inspect_err(|_| {
            log::warn!("Rejected out-of-bounds coordinates {:?}", coords);
        })
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
