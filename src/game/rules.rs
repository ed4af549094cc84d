//! Win detection for the 3x3 board.

use super::board::{Board, Cell, SIZE};
use super::mark::Mark;

/// A `(row, col)` pair on the board.
pub type Position = (usize, usize);

/// Three positions evaluated together for a win.
pub type WinLine = [Position; 3];

/// Result of evaluating a board.
///
/// A draw is not an outcome of its own here: it is `NoWinner` on a full
/// board, see [`GameState::settle`](super::GameState::settle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoWinner,
    Winner { mark: Mark, line: WinLine },
}

impl Outcome {
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::NoWinner => None,
            Outcome::Winner { mark, .. } => Some(*mark),
        }
    }
}

/// Evaluate the eight lines of the board.
///
/// Row `i` is checked before column `i` for each `i`, the diagonals last.
/// The first complete line wins.
pub fn evaluate(board: &Board) -> Outcome {
    for i in 0..SIZE {
        let row = [(i, 0), (i, 1), (i, 2)];
        if let Some(mark) = line_owner(board, row) {
            return Outcome::Winner { mark, line: row };
        }

        let col = [(0, i), (1, i), (2, i)];
        if let Some(mark) = line_owner(board, col) {
            return Outcome::Winner { mark, line: col };
        }
    }

    // Both diagonals run through the centre
    if board.get(1, 1) == Cell::Empty {
        return Outcome::NoWinner;
    }

    let diagonals = [[(0, 0), (1, 1), (2, 2)], [(0, 2), (1, 1), (2, 0)]];
    for line in diagonals {
        if let Some(mark) = line_owner(board, line) {
            return Outcome::Winner { mark, line };
        }
    }

    Outcome::NoWinner
}

/// The mark filling all three positions, if any
fn line_owner(board: &Board, [a, b, c]: WinLine) -> Option<Mark> {
    let first = board.get(a.0, a.1);
    if first != board.get(b.0, b.1) || first != board.get(c.0, c.1) {
        return None;
    }

    match first {
        Cell::Empty => None,
        Cell::Nought => Some(Mark::Nought),
        Cell::Cross => Some(Mark::Cross),
    }
}
