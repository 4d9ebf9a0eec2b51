//! Optimal move search for Tic-Tac-Toe.
//!
//! [`best_move`] runs a full minimax search with depth-weighted scores,
//! so it never loses, wins as fast as it can, and drags out losses it cannot avoid.
//! The first couple of plies are the most expensive to search,
//! so [`OpeningCache`] compiles their answers once and [`MiniMaxAi`] looks them up.

mod ai;
mod opening_cache;
mod score;
mod search;

pub use self::{
    ai::{
        best_move_cached,
        random_move,
        MiniMaxAi,
    },
    opening_cache::{
        CacheEntry,
        OpeningCache,
    },
    score::{
        terminal_score,
        WIN_SCORE,
    },
    search::{
        best_move,
        score_moves,
        Search,
    },
};
pub use tic_tac_toe;
use tic_tac_toe::Outcome;

/// Library Error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The board or move was illegal
    #[error(transparent)]
    Game(#[from] tic_tac_toe::Error),

    /// A board without an outcome has no empty tiles.
    ///
    /// Valid boards never hit this, as a full board is always a win or a tie.
    #[error("no legal moves are available")]
    NoAvailableMoves,

    /// The board already has an outcome
    #[error("the game is already over ({0})")]
    GameOver(Outcome),
}
