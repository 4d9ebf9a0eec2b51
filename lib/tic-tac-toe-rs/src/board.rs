use crate::{
    BoardError,
    Error,
    Move,
    Outcome,
    Player,
    WinType,
    WinnerInfo,
    NUM_TILES,
};

// Allow unusual_byte_groupings as we group by 3 to visualize the board.
// Tile 0 is the least significant bit, so the board reads right-to-left, bottom-to-top.
#[allow(clippy::unusual_byte_groupings)]
const ALL_TILES: u16 = 0b111_111_111;

// Rows
#[allow(clippy::unusual_byte_groupings)]
const ROW_1: u16 = 0b000_000_111;
#[allow(clippy::unusual_byte_groupings)]
const ROW_2: u16 = 0b000_111_000;
#[allow(clippy::unusual_byte_groupings)]
const ROW_3: u16 = 0b111_000_000;

// Columns
#[allow(clippy::unusual_byte_groupings)]
const COLUMN_1: u16 = 0b001_001_001;
#[allow(clippy::unusual_byte_groupings)]
const COLUMN_2: u16 = 0b010_010_010;
#[allow(clippy::unusual_byte_groupings)]
const COLUMN_3: u16 = 0b100_100_100;

// Diagonal
#[allow(clippy::unusual_byte_groupings)]
const DIAGONAL: u16 = 0b100_010_001;

// Anti-Diagonal
#[allow(clippy::unusual_byte_groupings)]
const ANTI_DIAGONAL: u16 = 0b001_010_100;

/// Every line, in the order they are checked.
const LINES: [(u16, [u8; 3], WinType); 8] = [
    (ROW_1, [0, 1, 2], WinType::Horizontal),
    (ROW_2, [3, 4, 5], WinType::Horizontal),
    (ROW_3, [6, 7, 8], WinType::Horizontal),
    (COLUMN_1, [0, 3, 6], WinType::Vertical),
    (COLUMN_2, [1, 4, 7], WinType::Vertical),
    (COLUMN_3, [2, 5, 8], WinType::Vertical),
    (DIAGONAL, [0, 4, 8], WinType::Diagonal),
    (ANTI_DIAGONAL, [2, 4, 6], WinType::AntiDiagonal),
];

/// 3^9, the number of distinct encodings.
const NUM_ENCODINGS: u16 = 19683;

/// A Tic-Tac-Toe board.
///
/// Tiles are indexed row-major, `row * 3 + column`:
///
/// ```text
/// 0|1|2
/// -+-+-
/// 3|4|5
/// -+-+-
/// 6|7|8
/// ```
///
/// Boards are plain values. Every "mutation" returns a new board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    // the bitboard
    // 9 tiles, so it cannot fit in a u8 but can fit in a u16
    x_state: u16,
    o_state: u16,
}

impl Board {
    /// Make a new, empty [`Board`].
    pub const fn new() -> Self {
        Board {
            x_state: 0,
            o_state: 0,
        }
    }

    /// Make a [`Board`] from raw bitboards.
    ///
    /// This does not validate the board. Use [`Board::is_valid`] to check it.
    pub const fn from_raw(x_state: u16, o_state: u16) -> Self {
        Board { x_state, o_state }
    }

    /// Make a [`Board`] from a slice of tiles.
    pub fn from_cells(cells: &[Option<Player>]) -> Result<Self, Error> {
        if cells.len() != usize::from(NUM_TILES) {
            return Err(BoardError::InvalidLength { len: cells.len() }.into());
        }

        Ok(cells
            .iter()
            .zip(0..)
            .fold(Self::new(), |board, (player, index)| {
                board.set(index, *player)
            }))
    }

    /// Get the raw X bitboard.
    pub fn x_state(self) -> u16 {
        self.x_state
    }

    /// Get the raw O bitboard.
    pub fn o_state(self) -> u16 {
        self.o_state
    }

    /// Returns true if this board only has tiles on the board and no tile is claimed twice.
    pub fn is_valid(self) -> bool {
        self.validate().is_ok()
    }

    /// Check the board, returning the reason it is invalid.
    pub fn validate(self) -> Result<(), Error> {
        let stray = (self.x_state | self.o_state) & !ALL_TILES;
        if stray != 0 {
            return Err(BoardError::TileOutOfRange { bits: stray }.into());
        }

        let shared = self.x_state & self.o_state;
        if shared != 0 {
            // trailing_zeros of a non-zero 9 bit value is always < 9.
            let index = shared.trailing_zeros() as u8;
            return Err(BoardError::SharedTile { index }.into());
        }

        Ok(())
    }

    /// Set the tile at the index.
    ///
    /// # Panics
    /// Panics if the index >= 9.
    #[must_use]
    pub fn set(mut self, index: u8, player: Option<Player>) -> Self {
        assert!(index < NUM_TILES);
        match player {
            Some(Player::X) => {
                self.x_state |= 1 << index;
                self.o_state &= !(1 << index);
            }
            Some(Player::O) => {
                self.x_state &= !(1 << index);
                self.o_state |= 1 << index;
            }
            None => {
                self.x_state &= !(1 << index);
                self.o_state &= !(1 << index);
            }
        }
        self
    }

    /// Get the tile at the index.
    ///
    /// # Panics
    /// Panics if the index >= 9.
    pub fn get(self, index: u8) -> Option<Player> {
        assert!(index < NUM_TILES);
        if self.x_state & (1 << index) != 0 {
            Some(Player::X)
        } else if self.o_state & (1 << index) != 0 {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Get an iterator over the tiles.
    ///
    /// The iterator starts at 0 at the top left and ends at 8 at the bottom right.
    ///
    /// # Returns
    /// Returns a tuple pair, where the first element is the index and the second is the tile value.
    pub fn iter(self) -> impl Iterator<Item = (u8, Option<Player>)> {
        (0..NUM_TILES).map(move |index| (index, self.get(index)))
    }

    /// Get the number of marked tiles.
    pub fn count(self) -> u32 {
        (self.x_state | self.o_state).count_ones()
    }

    /// Returns true if no tile is marked.
    pub fn is_empty(self) -> bool {
        (self.x_state | self.o_state) == 0
    }

    /// Returns true if every tile is marked.
    ///
    /// This does not check for wins.
    pub fn is_full(self) -> bool {
        (self.x_state | self.o_state) & ALL_TILES == ALL_TILES
    }

    /// Check if the given player has three in a row.
    ///
    /// This is designed to be fast and does not validate the board.
    pub fn has_won(self, player: Player) -> bool {
        let state = match player {
            Player::X => self.x_state,
            Player::O => self.o_state,
        };

        LINES.iter().any(|(mask, _, _)| (state & mask) == *mask)
    }

    /// Get the winner info, if there is a winner.
    ///
    /// Rows are checked first, then columns, then the two diagonals.
    pub fn winner_info(self) -> Result<Option<WinnerInfo>, Error> {
        self.validate()?;

        for (mask, tile_indexes, win_type) in LINES {
            let player = if (self.x_state & mask) == mask {
                Player::X
            } else if (self.o_state & mask) == mask {
                Player::O
            } else {
                continue;
            };

            return Ok(Some(WinnerInfo {
                player,
                tile_indexes,
                win_type,
            }));
        }

        Ok(None)
    }

    /// Get the outcome of this board.
    ///
    /// Returns `None` if the game is still going.
    pub fn winner(self) -> Result<Option<Outcome>, Error> {
        if let Some(info) = self.winner_info()? {
            return Ok(Some(Outcome::Win(info.player)));
        }

        if self.is_full() {
            return Ok(Some(Outcome::Tie));
        }

        Ok(None)
    }

    /// Get all moves that target an empty tile, in ascending index order.
    pub fn available_moves(self) -> Result<Vec<Move>, Error> {
        self.validate()?;
        Ok(self.empty_tiles().filter_map(Move::from_index).collect())
    }

    /// Iterate over the indexes of the empty tiles.
    ///
    /// This does not validate the board.
    pub(crate) fn empty_tiles(self) -> impl Iterator<Item = u8> {
        let filled = self.x_state | self.o_state;
        (0..NUM_TILES).filter(move |index| filled & (1 << index) == 0)
    }

    /// Encode this board as a [`u16`].
    ///
    /// Each tile is a base-3 digit, with tile 0 as the least significant digit.
    /// Empty is 0, X is 1, and O is 2.
    pub fn encode_u16(self) -> u16 {
        let mut ret = 0;
        for index in (0..NUM_TILES).rev() {
            ret *= 3;
            ret += match self.get(index) {
                None => 0,
                Some(Player::X) => 1,
                Some(Player::O) => 2,
            };
        }
        ret
    }

    /// Decode a board made with [`Board::encode_u16`].
    pub fn decode_u16(code: u16) -> Result<Self, Error> {
        if code >= NUM_ENCODINGS {
            return Err(BoardError::InvalidEncoding { code }.into());
        }

        let mut board = Self::new();
        let mut rest = code;
        for index in 0..NUM_TILES {
            let player = match rest % 3 {
                0 => None,
                1 => Some(Player::X),
                _ => Some(Player::O),
            };
            board = board.set(index, player);
            rest /= 3;
        }

        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::str::FromStr for Board {
    type Err = Error;

    /// Parse a board from 9 tiles, like `"X.O.X...O"`.
    ///
    /// `.`, `-`, `_`, and spaces are empty tiles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != usize::from(NUM_TILES) {
            return Err(BoardError::InvalidLength { len }.into());
        }

        let mut cells = [None; NUM_TILES as usize];
        for ((index, tile), cell) in s.chars().enumerate().zip(cells.iter_mut()) {
            *cell = match tile {
                '.' | '-' | '_' | ' ' => None,
                tile => Some(
                    Player::from_char(tile).map_err(|_| BoardError::InvalidTile { index, tile })?,
                ),
            };
        }

        Self::from_cells(&cells)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for column in 0..3 {
                let tile = self.get(row * 3 + column).map_or(' ', Player::as_char);
                write!(f, "{tile}")?;

                if column != 2 {
                    write!(f, "|")?;
                }
            }

            if row != 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }

        Ok(())
    }
}
