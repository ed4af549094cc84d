//! Core tic-tac-toe logic: board representation, marks, win detection and
//! the game state mutated by clicks.

mod board;
mod mark;
pub mod rules;
mod state;

pub use board::{Board, Cell, MoveError, SIZE};
pub use mark::Mark;
pub use rules::{evaluate, Outcome, Position, WinLine};
pub use state::{Flash, GameOutcome, GameState};
