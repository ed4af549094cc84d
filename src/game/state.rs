use super::board::{Board, MoveError, SIZE};
use super::mark::Mark;
use super::rules::{self, Outcome, WinLine};

/// Transient display state of a cell, kept apart from the mark it holds.
/// Set by the game, cleared by the render pass that shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flash {
    #[default]
    None,
    Error,
    Win,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner { mark: Mark, line: WinLine },
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    start: Mark,
    flashes: [[Flash; SIZE]; SIZE],
}

impl GameState {
    /// Create a game where Cross moves first
    pub fn initial() -> Self {
        Self::with_start(Mark::Cross)
    }

    /// Create a game where `start` moves first, now and after every reset
    pub fn with_start(start: Mark) -> Self {
        GameState {
            board: Board::new(),
            current_mark: start,
            start,
            flashes: [[Flash::None; SIZE]; SIZE],
        }
    }

    /// Get the mark placed by the next accepted move
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn start(&self) -> Mark {
        self.start
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn flash(&self, row: usize, col: usize) -> Flash {
        self.flashes[row][col]
    }

    /// Iterate over every cell's pending flash
    pub fn flashes(&self) -> impl Iterator<Item = Flash> + '_ {
        self.flashes.iter().flat_map(|row| row.iter().copied())
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Place the current mark at `(row, col)`.
    ///
    /// On success the turn passes to the other mark. An occupied cell is
    /// left as it is, flashed as an error, and the turn does not change.
    pub fn place(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        match self.board.place(row, col, self.current_mark.to_cell()) {
            Ok(()) => {
                self.current_mark = self.current_mark.other();
                Ok(())
            }
            Err(err @ MoveError::AlreadyOccupied { .. }) => {
                self.flashes[row][col] = Flash::Error;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Evaluate the board and flag the cells worth flashing.
    ///
    /// The winning line is flagged `Flash::Win`. A draw flags every cell
    /// `Flash::Error`. Returns `None` while the round is still open.
    pub fn settle(&mut self) -> Option<GameOutcome> {
        match rules::evaluate(&self.board) {
            Outcome::Winner { mark, line } => {
                for (row, col) in line {
                    self.flashes[row][col] = Flash::Win;
                }
                Some(GameOutcome::Winner { mark, line })
            }
            Outcome::NoWinner if self.board.is_full() => {
                self.flashes = [[Flash::Error; SIZE]; SIZE];
                Some(GameOutcome::Draw)
            }
            Outcome::NoWinner => None,
        }
    }

    pub fn clear_flashes(&mut self) {
        self.flashes = [[Flash::None; SIZE]; SIZE];
    }

    /// Empty the board and give the turn back to the starting mark
    pub fn reset(&mut self) {
        self.board.clear();
        self.clear_flashes();
        self.current_mark = self.start;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    fn play(state: &mut GameState, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            state.place(row, col).unwrap();
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_mark(), Mark::Cross);
        assert_eq!(state.board().count(Cell::Empty), 9);
        assert!(state.flashes().all(|f| f == Flash::None));
    }

    #[test]
    fn test_place_toggles_turn() {
        let mut state = GameState::initial();
        state.place(0, 0).unwrap();
        assert_eq!(state.board().get(0, 0), Cell::Cross);
        assert_eq!(state.current_mark(), Mark::Nought);

        state.place(0, 1).unwrap();
        assert_eq!(state.board().get(0, 1), Cell::Nought);
        assert_eq!(state.current_mark(), Mark::Cross);
    }

    #[test]
    fn test_place_twice_is_rejected() {
        let mut state = GameState::initial();
        state.place(0, 0).unwrap();
        let before = *state.board();

        assert_eq!(
            state.place(0, 0),
            Err(MoveError::AlreadyOccupied { row: 0, col: 0 })
        );
        assert_eq!(state.current_mark(), Mark::Nought);
        assert_eq!(*state.board(), before);
        assert_eq!(state.flash(0, 0), Flash::Error);
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut state = GameState::initial();
        assert_eq!(
            state.place(0, 3),
            Err(MoveError::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(state.current_mark(), Mark::Cross);
        assert!(state.flashes().all(|f| f == Flash::None));
    }

    #[test]
    fn test_counts_stay_balanced() {
        let mut state = GameState::initial();
        let order = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1), (1, 0), (1, 2), (2, 0)];
        for (row, col) in order {
            state.place(row, col).unwrap();
            let crosses = state.board().count(Cell::Cross);
            let noughts = state.board().count(Cell::Nought);
            assert!(crosses == noughts || crosses == noughts + 1);
        }
    }

    #[test]
    fn test_diagonal_win_flags_line() {
        let mut state = GameState::initial();
        // Cross on the diagonal, Nought elsewhere
        play(&mut state, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);

        let line = [(0, 0), (1, 1), (2, 2)];
        assert_eq!(
            state.settle(),
            Some(GameOutcome::Winner {
                mark: Mark::Cross,
                line,
            })
        );
        for row in 0..SIZE {
            for col in 0..SIZE {
                let expected = if line.contains(&(row, col)) {
                    Flash::Win
                } else {
                    Flash::None
                };
                assert_eq!(state.flash(row, col), expected);
            }
        }
    }

    #[test]
    fn test_column_win_for_nought() {
        let mut state = GameState::with_start(Mark::Nought);
        play(&mut state, &[(0, 1), (0, 0), (1, 1), (2, 2), (2, 1)]);
        assert_eq!(
            state.settle(),
            Some(GameOutcome::Winner {
                mark: Mark::Nought,
                line: [(0, 1), (1, 1), (2, 1)],
            })
        );
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::initial();
        // x o x
        // x o o
        // o x x
        play(
            &mut state,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );

        assert!(state.is_full());
        assert_eq!(state.settle(), Some(GameOutcome::Draw));
        assert!(state.flashes().all(|f| f == Flash::Error));
    }

    #[test]
    fn test_open_round_settles_to_none() {
        let mut state = GameState::initial();
        play(&mut state, &[(0, 0), (1, 1)]);
        assert_eq!(state.settle(), None);
        assert!(state.flashes().all(|f| f == Flash::None));
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::with_start(Mark::Nought);
        play(&mut state, &[(0, 0), (1, 1), (2, 2)]);
        let _ = state.place(0, 0);
        state.reset();

        assert_eq!(state.board().count(Cell::Empty), 9);
        assert_eq!(state.current_mark(), Mark::Nought);
        assert!(state.flashes().all(|f| f == Flash::None));
    }

    #[test]
    fn test_clear_flashes_keeps_marks() {
        let mut state = GameState::initial();
        state.place(2, 0).unwrap();
        let _ = state.place(2, 0);
        state.clear_flashes();
        assert_eq!(state.flash(2, 0), Flash::None);
        assert_eq!(state.board().get(2, 0), Cell::Cross);
    }
}
