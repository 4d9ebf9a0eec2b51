use crate::{
    best_move,
    Error,
    OpeningCache,
};
use rand::{
    seq::SliceRandom,
    Rng,
};
use std::sync::Arc;
use tic_tac_toe::{
    apply,
    Board,
    Outcome,
    Player,
};
use tracing::trace;

/// A Tic-Tac-Toe player backed by minimax and an [`OpeningCache`].
#[derive(Debug, Clone)]
pub struct MiniMaxAi {
    opening_cache: Arc<OpeningCache>,
}

impl MiniMaxAi {
    /// Make a new [`MiniMaxAi`].
    pub fn new(opening_cache: Arc<OpeningCache>) -> Self {
        Self { opening_cache }
    }

    /// Get the opening cache.
    pub fn opening_cache(&self) -> &OpeningCache {
        &self.opening_cache
    }

    /// Play the best move for `player`.
    ///
    /// Opening boards are answered from the cache, everything else is searched.
    pub fn play_best_move(
        &self,
        board: Board,
        player: Player,
    ) -> Result<(Board, Option<Outcome>), Error> {
        if let Some(entry) = self.opening_cache.get(board, player) {
            trace!(%player, mv = %entry.mv, "opening cache hit");
            return Ok((entry.board, entry.outcome));
        }

        trace!(%player, "opening cache miss");
        let mv = best_move(board, player)?;
        Ok(apply(board, player, mv)?)
    }

    /// Play a uniformly random move for `player`.
    pub fn play_random_move<R>(
        &self,
        board: Board,
        player: Player,
        rng: &mut R,
    ) -> Result<(Board, Option<Outcome>), Error>
    where
        R: Rng + ?Sized,
    {
        random_move(board, player, rng)
    }

    /// Play a move for `player`, picking a random one instead of the best one with a probability of `chance_for_error`.
    ///
    /// `chance_for_error` is clamped to `0.0..=1.0`.
    pub fn play<R>(
        &self,
        board: Board,
        player: Player,
        chance_for_error: f64,
        rng: &mut R,
    ) -> Result<(Board, Option<Outcome>), Error>
    where
        R: Rng + ?Sized,
    {
        let chance_for_error = if chance_for_error.is_nan() {
            0.0
        } else {
            chance_for_error.clamp(0.0, 1.0)
        };

        if rng.gen_bool(chance_for_error) {
            self.play_random_move(board, player, rng)
        } else {
            self.play_best_move(board, player)
        }
    }
}

impl Default for MiniMaxAi {
    /// Make a [`MiniMaxAi`] that uses the global [`OpeningCache`].
    fn default() -> Self {
        Self::new(OpeningCache::global())
    }
}

/// Play the best move for `player`, using the global [`OpeningCache`].
pub fn best_move_cached(board: Board, player: Player) -> Result<(Board, Option<Outcome>), Error> {
    MiniMaxAi::default().play_best_move(board, player)
}

/// Play a uniformly random available move for `player`.
///
/// # Errors
/// Returns [`Error::GameOver`] if the board already has an outcome,
/// and forwards board errors.
pub fn random_move<R>(
    board: Board,
    player: Player,
    rng: &mut R,
) -> Result<(Board, Option<Outcome>), Error>
where
    R: Rng + ?Sized,
{
    if let Some(outcome) = board.winner()? {
        return Err(Error::GameOver(outcome));
    }

    let moves = board.available_moves()?;
    let mv = *moves.choose(rng).ok_or(Error::NoAvailableMoves)?;

    Ok(apply(board, player, mv)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    #[test]
    fn cached_and_searched_agree() {
        let ai = MiniMaxAi::default();
        let board: Board = "X...O....".parse().expect("failed to parse board");

        // Not an opening board, so this is searched.
        assert!(ai.opening_cache().get(board, Player::X).is_none());
        let (new_board, outcome) = ai
            .play_best_move(board, Player::X)
            .expect("failed to play");
        let mv = best_move(board, Player::X).expect("search failed");
        assert_eq!(Ok((new_board, outcome)), apply(board, Player::X, mv));
    }

    #[test]
    fn empty_board_opens_in_the_center() {
        let (board, outcome) =
            best_move_cached(Board::new(), Player::X).expect("failed to play");
        assert_eq!(outcome, None);
        assert_eq!(board.get(4), Some(Player::X));
        assert_eq!(board.count(), 1);
    }

    #[test]
    fn random_moves_are_legal() {
        let mut rng = StdRng::seed_from_u64(0);
        let board: Board = "XO.XO.O..".parse().expect("failed to parse board");

        for _ in 0..100 {
            let (new_board, _) =
                random_move(board, Player::X, &mut rng).expect("failed to play");
            assert_eq!(new_board.count(), board.count() + 1);
            for (index, tile) in board.iter() {
                if tile.is_some() {
                    assert_eq!(new_board.get(index), tile);
                }
            }
        }
    }

    #[test]
    fn random_move_covers_every_tile() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 9];
        for _ in 0..500 {
            let (board, _) =
                random_move(Board::new(), Player::O, &mut rng).expect("failed to play");
            let (index, _) = board
                .iter()
                .find(|(_, tile)| tile.is_some())
                .expect("missing move");
            seen[usize::from(index)] = true;
        }
        assert!(seen.iter().all(|seen| *seen));
    }

    #[test]
    fn random_move_on_finished_board() {
        let mut rng = StdRng::seed_from_u64(0);
        let board: Board = "XOXXOOOXX".parse().expect("failed to parse board");
        assert_eq!(
            random_move(board, Player::X, &mut rng),
            Err(Error::GameOver(Outcome::Tie))
        );
    }

    #[test]
    fn chance_for_error() {
        let ai = MiniMaxAi::default();
        let mut rng = StdRng::seed_from_u64(3);
        let board: Board = "XX.OO....".parse().expect("failed to parse board");

        // Never erring always takes the win.
        for _ in 0..20 {
            let (_, outcome) = ai
                .play(board, Player::X, 0.0, &mut rng)
                .expect("failed to play");
            assert_eq!(outcome, Some(Outcome::Win(Player::X)));
        }

        // Always erring misses the win at least once.
        let missed = (0..50)
            .filter_map(|_| ai.play(board, Player::X, 1.0, &mut rng).ok())
            .any(|(_, outcome)| outcome.is_none());
        assert!(missed);
    }
}
