use crate::{
    InvalidCharError,
    InvalidStrError,
    Player,
    NUM_TILES,
};

/// Library Error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The board breaks a structural invariant.
    #[error("illegal board")]
    IllegalBoard(#[from] BoardError),

    /// The move cannot be played on an otherwise valid board.
    #[error("illegal move")]
    IllegalMove(#[from] MoveError),
}

impl From<InvalidStrError> for Error {
    fn from(e: InvalidStrError) -> Self {
        Self::IllegalMove(MoveError::InvalidPlayer(e))
    }
}

impl From<InvalidCharError> for Error {
    fn from(e: InvalidCharError) -> Self {
        Self::from(InvalidStrError::from(e))
    }
}

/// Why a board is illegal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The board does not have exactly 9 tiles.
    #[error("expected {} tiles, got {len}", NUM_TILES)]
    InvalidLength { len: usize },

    /// A tile could not be parsed.
    #[error("invalid tile '{tile}' at index {index}")]
    InvalidTile { index: usize, tile: char },

    /// Bits outside of the 9 tiles are set.
    #[error("the bitboard has tiles outside of the board set ({bits:#011b})")]
    TileOutOfRange { bits: u16 },

    /// Both players claim the same tile.
    #[error("tile {index} is marked by both players")]
    SharedTile { index: u8 },

    /// The encoded board is out of range.
    #[error("{code} is not a valid board encoding")]
    InvalidEncoding { code: u16 },
}

/// Why a move is illegal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The column or row is not in `0..3`.
    #[error("({column}, {row}) is not on the board")]
    OutOfRange { column: u8, row: u8 },

    /// The tile is already taken.
    #[error("({column}, {row}) is already marked by {player}")]
    Occupied { column: u8, row: u8, player: Player },

    /// The player could not be recognized.
    #[error("invalid player")]
    InvalidPlayer(#[source] InvalidStrError),
}
