//! Core Connect Four game logic: board, cells, players, win detection and the
//! turn state machine.

mod board;
mod cell;
mod player;
mod state;
mod win;

pub use board::{Board, COLS, DEFAULT_SEPARATOR, ROWS};
pub use cell::{Cell, GlyphSet};
pub use player::Player;
pub use state::{GameOutcome, GameState, Phase};
pub use win::{Direction, WinDetector, Window, WINDOWS, WINDOW_COUNT, WINDOW_LEN};
