/// Failed to parse a [`Player`] from a [`char`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCharError(pub char);

impl std::fmt::Display for InvalidCharError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a valid Tic-Tac-Toe player", self.0)
    }
}

impl std::error::Error for InvalidCharError {}

/// Failed to parse a [`Player`] from a [`str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidStrError {
    /// The string is the wrong length. It must contain exactly one ascii char.
    ///
    /// The length is in bytes.
    InvalidLength(usize),

    /// The char is not valid.
    InvalidChar(InvalidCharError),
}

impl From<InvalidCharError> for InvalidStrError {
    fn from(e: InvalidCharError) -> Self {
        Self::InvalidChar(e)
    }
}

impl std::fmt::Display for InvalidStrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(
                f,
                "a Tic-Tac-Toe player cannot be made from inputs of length {len}"
            ),
            Self::InvalidChar(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for InvalidStrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::InvalidChar(e) = self {
            Some(e)
        } else {
            None
        }
    }
}

/// A Tic-Tac-Toe player
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Both players, X first.
    pub const ALL: [Self; 2] = [Self::X, Self::O];

    /// Get the other player.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Try to parse a [`Player`] from a [`char`].
    pub fn from_char(c: char) -> Result<Self, InvalidCharError> {
        match c {
            'x' | 'X' => Ok(Self::X),
            'o' | 'O' => Ok(Self::O),
            c => Err(InvalidCharError(c)),
        }
    }

    /// Get the mark this player draws on the board.
    pub fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl std::str::FromStr for Player {
    type Err = InvalidStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // This is in bytes, but only single ascii chars are valid anyways.
        if s.len() != 1 {
            return Err(InvalidStrError::InvalidLength(s.len()));
        }

        let c = s.chars().next().ok_or(InvalidStrError::InvalidLength(0))?;
        Ok(Self::from_char(c)?)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
