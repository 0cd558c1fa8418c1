//! Reversi (Othello) game engine.
//!
//! Board state, the capture rule, tiered AI strategies, and a turn
//! controller. Presentation concerns (rendering, input, pacing timers) live
//! outside this crate: a caller submits the human's chosen cell, advances
//! the AI turn whenever it sees fit, and renders the returned snapshots.

pub mod board;
pub mod rules;
pub mod session;
pub mod strategies;

pub use board::{Board, BoardError, Cell, Move, Player, MIN_BOARD_SIZE};
pub use rules::IllegalMove;
pub use session::{
    AdvanceTurnError, BoardSnapshot, GamePhase, GameSession, Outcome, SubmitMoveError, Winner,
};
pub use strategies::{Difficulty, Strategy};
