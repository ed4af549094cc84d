//! Terminal UI: the board drawn with canvas shapes, mouse input mapped back
//! to cells, and the blocking event loop that drives a game.

mod app;
pub mod board_widget;
mod game_view;
pub mod grid;

pub use app::App;
pub use grid::GridLayout;
