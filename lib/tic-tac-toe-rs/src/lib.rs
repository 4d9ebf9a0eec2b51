//! A 3x3 Tic-Tac-Toe rules engine.
//!
//! Boards are immutable values. Moves are applied with [`apply`] (or [`Board::play`]),
//! which returns a new board and its [`Outcome`].

mod board;
mod error;
mod outcome;
mod play;
mod player;

pub use self::{
    board::Board,
    error::{
        BoardError,
        Error,
        MoveError,
    },
    outcome::{
        Outcome,
        WinType,
        WinnerInfo,
    },
    play::{
        apply,
        Move,
    },
    player::{
        InvalidCharError,
        InvalidStrError,
        Player,
    },
};

/// The # of tic-tac-toe tiles
pub const NUM_TILES: u8 = 9;

/// The # of rows and columns
pub const BOARD_SIZE: u8 = 3;
