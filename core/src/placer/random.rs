use rand::prelude::*;

use super::*;

/// Uniform placement over every cell except the excluded one.
///
/// Keeps its generator between games, so a seeded placer replays the same
/// sequence of layouts across restarts.
#[derive(Clone, Debug)]
pub struct RandomBombPlacer {
    rng: SmallRng,
}

impl RandomBombPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl Default for RandomBombPlacer {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl BombPlacer for RandomBombPlacer {
    fn choose(&mut self, config: GameConfig, excluded: Coord2) -> Result<Vec<Coord2>> {
        let size = usize::from(config.size);
        let total_cells = usize::from(config.total_cells());
        let count = usize::from(config.bombs);

        if excluded.0 >= config.size || excluded.1 >= config.size {
            return Err(GameError::InvalidCoords);
        }
        if count >= total_cells {
            return Err(GameError::TooManyBombs);
        }

        // sample from all cells but one, then shift past the hole
        let excluded_index = usize::from(excluded.0) * size + usize::from(excluded.1);
        let mut bombs: Vec<Coord2> = rand::seq::index::sample(&mut self.rng, total_cells - 1, count)
            .into_iter()
            .map(|index| if index >= excluded_index { index + 1 } else { index })
            .map(|index| ((index / size) as Coord, (index % size) as Coord))
            .collect();
        bombs.sort_unstable();

        log::debug!(
            "Placed {} bombs on a {}x{} board, keeping {:?} safe",
            bombs.len(),
            config.size,
            config.size,
            excluded
        );
        Ok(bombs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: Coord, bombs: CellCount) -> GameConfig {
        GameConfig::new(size, bombs).unwrap()
    }

    #[test]
    fn never_mines_the_excluded_cell() {
        let mut placer = RandomBombPlacer::new(7);
        for round in 0..200u32 {
            let excluded = ((round % 9) as Coord, (round / 23 % 9) as Coord);
            let bombs = placer.choose(config(9, 10), excluded).unwrap();
            assert!(!bombs.contains(&excluded));
        }
    }

    #[test]
    fn picks_distinct_in_bounds_cells() {
        let mut placer = RandomBombPlacer::new(1);
        let bombs = placer.choose(config(9, 10), (4, 4)).unwrap();

        assert_eq!(bombs.len(), 10);
        let mut deduped = bombs.clone();
        deduped.dedup();
        assert_eq!(deduped, bombs);
        assert!(bombs.iter().all(|&(row, col)| row < 9 && col < 9));
    }

    #[test]
    fn fills_every_other_cell_when_full() {
        let mut placer = RandomBombPlacer::new(3);
        let bombs = placer.choose(config(3, 8), (1, 2)).unwrap();

        assert_eq!(bombs.len(), 8);
        assert!(!bombs.contains(&(1, 2)));
    }

    #[test]
    fn same_seed_same_layout() {
        let first = RandomBombPlacer::new(42).choose(config(16, 40), (0, 0));
        let second = RandomBombPlacer::new(42).choose(config(16, 40), (0, 0));
        assert_eq!(first, second);
    }

    #[test]
    fn overfull_config_is_rejected() {
        let overfull = GameConfig::new_unchecked(3, 9);
        let mut placer = RandomBombPlacer::new(0);
        assert_eq!(
            placer.choose(overfull, (0, 0)),
            Err(GameError::TooManyBombs)
        );
    }
}
