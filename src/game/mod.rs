//! Core Connect Four game logic: board representation, player types, and the
//! game engine state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Line, MoveError, SizeError, DEFAULT_HEIGHT, DEFAULT_WIDTH, RUN_LENGTH};
pub use player::Player;
pub use state::{GameEngine, GameStatus, Outcome, Placement};
