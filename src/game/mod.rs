//! Core Connect Four game logic: board representation, players, incremental
//! win detection and the game engine that ties them together.

mod board;
mod engine;
mod player;
pub mod win;

pub use board::{Board, BoardError, Cell, COLS, ROWS};
pub use engine::{GameEngine, GameSnapshot, MoveError, MoveOutcome, Phase, Placement};
pub use player::{Player, PlayerNames};
pub use win::{has_winning_line_through, Direction, WinningLine, CONNECT};
