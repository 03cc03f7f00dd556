use super::*;

/// Scripted layout, used for tests, tutorials and replays.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBombPlacer {
    bombs: Vec<Coord2>,
}

impl FixedBombPlacer {
    pub fn new(bombs: &[Coord2]) -> Self {
        let mut bombs = bombs.to_vec();
        bombs.sort_unstable();
        bombs.dedup();
        Self { bombs }
    }

    pub fn bomb_count(&self) -> CellCount {
        CellCount::try_from(self.bombs.len()).unwrap_or(CellCount::MAX)
    }
}

impl BombPlacer for FixedBombPlacer {
    fn choose(&mut self, config: GameConfig, excluded: Coord2) -> Result<Vec<Coord2>> {
        if self.bomb_count() != config.bombs {
            return Err(GameError::LayoutMismatch);
        }
        if self
            .bombs
            .iter()
            .any(|&(row, col)| row >= config.size || col >= config.size)
        {
            return Err(GameError::InvalidCoords);
        }
        if self.bombs.contains(&excluded) {
            log::warn!("Scripted layout puts a bomb under the first open at {:?}", excluded);
            return Err(GameError::ExcludedCellMined);
        }
        Ok(self.bombs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_layout_sorted_without_duplicates() {
        let mut placer = FixedBombPlacer::new(&[(2, 2), (0, 1), (2, 2)]);
        let config = GameConfig::new(3, 2).unwrap();

        assert_eq!(placer.choose(config, (1, 1)), Ok(vec![(0, 1), (2, 2)]));
    }

    #[test]
    fn refuses_to_mine_the_excluded_cell() {
        let mut placer = FixedBombPlacer::new(&[(0, 0)]);
        let config = GameConfig::new(3, 1).unwrap();

        assert_eq!(
            placer.choose(config, (0, 0)),
            Err(GameError::ExcludedCellMined)
        );
    }

    #[test]
    fn rejects_count_mismatch() {
        let mut placer = FixedBombPlacer::new(&[(0, 0), (0, 1)]);
        let config = GameConfig::new(3, 1).unwrap();

        assert_eq!(placer.choose(config, (2, 2)), Err(GameError::LayoutMismatch));
    }

    #[test]
    fn rejects_layout_outside_the_board() {
        let mut placer = FixedBombPlacer::new(&[(5, 0)]);
        let config = GameConfig::new(3, 1).unwrap();

        assert_eq!(placer.choose(config, (0, 0)), Err(GameError::InvalidCoords));
    }
}
