use crate::*;

/// What a single reveal step did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Unchanged,
    Opened,
    Detonated(Coord2),
}

impl Board {
    /// An open cell with exactly as many flagged neighbors as adjacent bombs.
    pub fn is_satisfied(&self, coords: Coord2) -> bool {
        match self.get(coords) {
            Some(cell) if cell.is_open() => {
                cell.adjacent_bombs() == self.flagged_neighbor_count(coords)
            }
            _ => false,
        }
    }

    /// Every safe cell is open. Only meaningful once bombs are placed.
    pub fn all_safe_cells_open(&self) -> bool {
        self.bombs_placed() && usize::from(self.unopened_count()) == self.bomb_coords().len()
    }

    /// Opens a closed cell, flooding outward from it when it has no adjacent
    /// bombs. Flagged and open cells are left alone.
    pub(crate) fn open_single(&mut self, coords: Coord2) -> Step {
        if !self[coords].is_closed() {
            return Step::Unchanged;
        }
        self.set_visibility(coords, Visibility::Open);

        let cell = self[coords];
        if cell.has_bomb() {
            Step::Detonated(coords)
        } else {
            if cell.adjacent_bombs() == 0 {
                self.open_area(coords);
            }
            Step::Opened
        }
    }

    /// Floods again from a cell that is already open with no adjacent bombs,
    /// picking up neighbors that were flagged during the earlier fill.
    pub(crate) fn refill(&mut self, coords: Coord2) -> Step {
        let cell = self[coords];
        let zero = cell.is_open() && !cell.has_bomb() && cell.adjacent_bombs() == 0;
        if zero && self.open_area(coords) > 0 {
            Step::Opened
        } else {
            Step::Unchanged
        }
    }

    /// Flood fill from an open, zero-adjacent cell.
    ///
    /// Cells are opened before they are queued, so each one goes
    /// `Closed -> Open` at most once. Neighbors with adjacent bombs are
    /// opened but not expanded, and flags block the fill. Returns the number
    /// of cells opened.
    pub(crate) fn open_area(&mut self, start: Coord2) -> CellCount {
        let mut opened: CellCount = 0;
        let mut to_visit = vec![start];

        while let Some(visit_coords) = to_visit.pop() {
            for pos in self.iter_neighbors(visit_coords) {
                if !self[pos].is_closed() {
                    continue;
                }
                self.set_visibility(pos, Visibility::Open);
                opened += 1;

                if self[pos].adjacent_bombs() == 0 {
                    to_visit.push(pos);
                }
            }
        }

        log::trace!("Flood fill from {:?} opened {} cells", start, opened);
        opened
    }

    /// Opens every closed neighbor of a satisfied cell, stopping at the first
    /// bomb. Not satisfied means no change.
    pub(crate) fn chord(&mut self, coords: Coord2) -> Step {
        if !self.is_satisfied(coords) {
            return Step::Unchanged;
        }

        let mut step = Step::Unchanged;
        for pos in self.iter_neighbors(coords) {
            match self.open_single(pos) {
                Step::Unchanged => {}
                Step::Opened => step = Step::Opened,
                detonated @ Step::Detonated(_) => return detonated,
            }
        }
        step
    }

    pub(crate) fn reveal_bombs(&mut self) {
        for index in 0..self.bomb_coords().len() {
            let coords = self.bomb_coords()[index];
            self.set_visibility(coords, Visibility::Open);
        }
    }

    pub(crate) fn flag_bombs(&mut self) {
        for index in 0..self.bomb_coords().len() {
            let coords = self.bomb_coords()[index];
            self.set_visibility(coords, Visibility::Flagged);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_bombs(size: Coord, bombs: &[Coord2]) -> Board {
        let mut board = Board::new(size).unwrap();
        board.place_bombs(bombs).unwrap();
        board
    }

    fn open_cells(board: &Board) -> Vec<Coord2> {
        board.iter_coords().filter(|&pos| board[pos].is_open()).collect()
    }

    #[test]
    fn flood_stops_at_numbered_border() {
        // bomb column on the right splits the board
        let mut board = board_with_bombs(5, &[(0, 3), (1, 3), (2, 3), (3, 3), (4, 3)]);

        assert_eq!(board.open_single((2, 0)), Step::Opened);

        let expected: Vec<Coord2> = board
            .iter_coords()
            .filter(|&(_, col)| col <= 2)
            .collect();
        assert_eq!(open_cells(&board), expected);
        assert!(board[(0, 4)].is_closed());
    }

    #[test]
    fn flood_skips_flags() {
        let mut board = board_with_bombs(4, &[(3, 3)]);
        board.set_visibility((0, 3), Visibility::Flagged);

        board.open_single((0, 0));

        assert!(board[(0, 3)].is_flagged());
        assert_eq!(board.flag_count(), 1);
        assert!(board[(3, 3)].is_closed());
        assert_eq!(board.open_count(), 14);
    }

    #[test]
    fn flood_on_large_empty_board_opens_everything() {
        let mut board = board_with_bombs(Coord::MAX, &[]);

        board.open_single((100, 100));

        assert_eq!(board.open_count(), board.total_cells());
        assert!(board.all_safe_cells_open());
    }

    #[test]
    fn refill_opens_neighbors_unflagged_after_the_first_fill() {
        let mut board = board_with_bombs(5, &[(4, 4)]);
        board.set_visibility((0, 1), Visibility::Flagged);
        board.open_single((2, 0));
        assert_eq!(board.refill((0, 0)), Step::Unchanged);

        board.set_visibility((0, 1), Visibility::Closed);

        assert_eq!(board.refill((0, 0)), Step::Opened);
        assert!(board[(0, 1)].is_open());
        assert_eq!(board.refill((3, 3)), Step::Unchanged);
    }

    #[test]
    fn numbered_cell_does_not_flood() {
        let mut board = board_with_bombs(3, &[(0, 0)]);

        assert_eq!(board.open_single((1, 1)), Step::Opened);
        assert_eq!(open_cells(&board), vec![(1, 1)]);
    }

    #[test]
    fn opening_a_bomb_detonates() {
        let mut board = board_with_bombs(3, &[(0, 0)]);
        assert_eq!(board.open_single((0, 0)), Step::Detonated((0, 0)));
    }

    #[test]
    fn satisfied_requires_open_cell_with_matching_flags() {
        let mut board = board_with_bombs(3, &[(0, 0)]);
        assert!(!board.is_satisfied((1, 1)));

        board.open_single((1, 1));
        assert!(!board.is_satisfied((1, 1)));

        board.set_visibility((0, 0), Visibility::Flagged);
        assert!(board.is_satisfied((1, 1)));

        board.set_visibility((0, 1), Visibility::Flagged);
        assert!(!board.is_satisfied((1, 1)));
        assert!(!board.is_satisfied((9, 9)));
    }

    #[test]
    fn chord_stops_at_first_wrongly_flagged_bomb() {
        let mut board = board_with_bombs(3, &[(0, 0)]);
        board.open_single((1, 1));
        board.set_visibility((2, 2), Visibility::Flagged);

        assert_eq!(board.chord((1, 1)), Step::Detonated((0, 0)));
        // scanned in row-major order, nothing after the bomb was touched
        assert!(board[(0, 1)].is_closed());
    }

    #[test]
    fn reveal_and_flag_bombs_keep_counters() {
        let mut board = board_with_bombs(3, &[(0, 0), (2, 2)]);
        board.set_visibility((0, 0), Visibility::Flagged);

        board.reveal_bombs();
        assert_eq!(board.flag_count(), 0);
        assert_eq!(board.open_count(), 2);

        board.flag_bombs();
        assert_eq!(board.flag_count(), 2);
        assert_eq!(board.open_count(), 0);
    }
}
