//! # Tic-Tac-Toe
//!
//! Two players share one terminal and take turns clicking cells of a 3x3
//! grid. A completed row, column or diagonal wins; a full board is a draw.
//! Either way the board flashes and starts over.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, marks, win detection, game state
//! - [`ui`] — Terminal UI: board rendering, mouse mapping, event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
