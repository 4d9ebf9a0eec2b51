use crate::Player;

/// The result of a finished game.
///
/// A game that is still going has no outcome, so this is usually found in an `Option`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A player got three in a row.
    Win(Player),

    /// The board is full and nobody won.
    Tie,
}

impl Outcome {
    /// Get the winning player, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Self::Win(player) => Some(player),
            Self::Tie => None,
        }
    }

    /// Returns true if this is a tie.
    pub fn is_tie(self) -> bool {
        matches!(self, Self::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win(player) => write!(f, "{player} wins"),
            Self::Tie => write!(f, "tie"),
        }
    }
}

/// The win type
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WinType {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

/// Winner Info
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WinnerInfo {
    /// The winning player
    pub player: Player,

    /// The tile indexes that are part of the win.
    ///
    /// Sorted from least to greatest.
    pub tile_indexes: [u8; 3],

    /// The win type
    pub win_type: WinType,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn winner() {
        assert_eq!(Outcome::Win(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Tie.winner(), None);
        assert!(Outcome::Tie.is_tie());
        assert!(!Outcome::Win(Player::X).is_tie());
    }
}
