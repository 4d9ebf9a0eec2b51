use crate::{
    Board,
    Error,
    MoveError,
    Outcome,
    Player,
    BOARD_SIZE,
    NUM_TILES,
};

/// A move, targeting the tile at a column and row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// The column, in `0..3`.
    pub column: u8,

    /// The row, in `0..3`.
    pub row: u8,
}

impl Move {
    /// Make a new [`Move`].
    ///
    /// This does not check that the move is on the board.
    pub const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// Make a [`Move`] from a tile index.
    ///
    /// Returns `None` if the index >= 9.
    pub fn from_index(index: u8) -> Option<Self> {
        if index >= NUM_TILES {
            return None;
        }

        Some(Self::new(index % BOARD_SIZE, index / BOARD_SIZE))
    }

    /// Get the tile index of this move.
    ///
    /// Returns `None` if the move is not on the board.
    pub fn index(self) -> Option<u8> {
        if self.column >= BOARD_SIZE || self.row >= BOARD_SIZE {
            return None;
        }

        Some(self.row * BOARD_SIZE + self.column)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Play a move as the given player.
///
/// # Returns
/// Returns the new board and its outcome. The input board is left as-is.
///
/// # Errors
/// Returns [`Error::IllegalBoard`] if the board is invalid,
/// and [`Error::IllegalMove`] if the move is off the board or targets a marked tile.
pub fn apply(board: Board, player: Player, mv: Move) -> Result<(Board, Option<Outcome>), Error> {
    board.validate()?;

    let index = mv.index().ok_or(MoveError::OutOfRange {
        column: mv.column,
        row: mv.row,
    })?;

    if let Some(occupant) = board.get(index) {
        return Err(MoveError::Occupied {
            column: mv.column,
            row: mv.row,
            player: occupant,
        }
        .into());
    }

    let board = board.set(index, Some(player));
    let outcome = board.winner()?;

    Ok((board, outcome))
}

impl Board {
    /// Play a move as the given player.
    ///
    /// See [`apply`].
    pub fn play(self, player: Player, mv: Move) -> Result<(Self, Option<Outcome>), Error> {
        apply(self, player, mv)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::BoardError;

    #[test]
    fn index_round_trip() {
        for index in 0..NUM_TILES {
            let mv = Move::from_index(index).expect("index is on the board");
            assert_eq!(mv.index(), Some(index));
        }
        assert_eq!(Move::from_index(9), None);
        assert_eq!(Move::new(3, 0).index(), None);
        assert_eq!(Move::new(2, 1).index(), Some(5));
    }

    #[test]
    fn apply_changes_one_tile() {
        let board: Board = "X...O....".parse().expect("failed to parse board");
        let (new_board, outcome) =
            apply(board, Player::X, Move::new(2, 2)).expect("failed to apply move");

        assert_eq!(outcome, None);
        assert_eq!(board.get(8), None);
        assert_eq!(new_board.get(8), Some(Player::X));

        let changed = board
            .iter()
            .zip(new_board.iter())
            .filter(|(old, new)| old != new)
            .count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn apply_every_move_on_every_board() {
        // Walk a few boards reachable from the empty board.
        let mut frontier = vec![(Board::new(), Player::X)];
        for _ in 0..3 {
            let mut next = Vec::new();
            for (board, player) in frontier {
                for mv in board.available_moves().expect("valid board") {
                    let (new_board, _) = board.play(player, mv).expect("failed to apply move");
                    assert_eq!(new_board.count(), board.count() + 1);
                    next.push((new_board, player.opponent()));
                }
            }
            frontier = next;
        }
        assert_eq!(frontier.len(), 9 * 8 * 7);
    }

    #[test]
    fn apply_reports_outcome() {
        let board: Board = "XX.OO....".parse().expect("failed to parse board");
        let (_, outcome) = apply(board, Player::X, Move::new(2, 0)).expect("failed to apply move");
        assert_eq!(outcome, Some(Outcome::Win(Player::X)));

        let board: Board = "XOXXOOOX.".parse().expect("failed to parse board");
        let (_, outcome) = apply(board, Player::X, Move::new(2, 2)).expect("failed to apply move");
        assert_eq!(outcome, Some(Outcome::Tie));
    }

    #[test]
    fn illegal_moves() {
        let board: Board = "X........".parse().expect("failed to parse board");

        assert_eq!(
            apply(board, Player::O, Move::new(0, 0)),
            Err(Error::IllegalMove(MoveError::Occupied {
                column: 0,
                row: 0,
                player: Player::X,
            }))
        );
        assert_eq!(
            apply(board, Player::O, Move::new(0, 3)),
            Err(Error::IllegalMove(MoveError::OutOfRange { column: 0, row: 3 }))
        );

        let parse_player = |s: &str| -> Result<Player, Error> { Ok(s.parse::<Player>()?) };
        assert!(matches!(
            parse_player("Q"),
            Err(Error::IllegalMove(MoveError::InvalidPlayer(_)))
        ));
    }

    #[test]
    fn illegal_board_is_checked_first() {
        let board = Board::from_raw(0b11, 0b10);
        assert_eq!(
            apply(board, Player::O, Move::new(5, 5)),
            Err(Error::IllegalBoard(BoardError::SharedTile { index: 1 }))
        );
    }
}
