use crate::{
    terminal_score,
    Error,
};
use tic_tac_toe::{
    apply,
    Board,
    Move,
    Player,
};
use tracing::debug;

/// A full-depth minimax search.
///
/// Every branch is explored, there is no pruning.
/// The only state is a counter of the moves that were tried.
#[derive(Debug, Default, Clone, Copy)]
pub struct Search {
    nodes: u64,
}

impl Search {
    /// Make a new [`Search`].
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Get the number of moves tried so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Score every move `player` can make on `board`.
    ///
    /// # Returns
    /// Returns each available move with its minimax score, in the order of [`Board::available_moves`].
    ///
    /// # Errors
    /// Returns [`Error::GameOver`] if the board already has an outcome, which includes every full board,
    /// and forwards board errors.
    pub fn score_moves(&mut self, board: Board, player: Player) -> Result<Vec<(Move, i8)>, Error> {
        if let Some(outcome) = board.winner()? {
            return Err(Error::GameOver(outcome));
        }

        let moves = board.available_moves()?;
        if moves.is_empty() {
            return Err(Error::NoAvailableMoves);
        }

        moves
            .into_iter()
            .map(|mv| Ok((mv, self.score_move(board, player, player, mv, 0)?)))
            .collect()
    }

    /// Find the best move for `player`.
    ///
    /// Ties go to the first move in [`Board::available_moves`] order.
    pub fn best_move(&mut self, board: Board, player: Player) -> Result<Move, Error> {
        let mut best: Option<(Move, i8)> = None;
        for (mv, score) in self.score_moves(board, player)? {
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        best.map(|(mv, _)| mv).ok_or(Error::NoAvailableMoves)
    }

    /// Score `turn_player` playing `mv` on a board at `depth`.
    fn score_move(
        &mut self,
        board: Board,
        active_player: Player,
        turn_player: Player,
        mv: Move,
        depth: u8,
    ) -> Result<i8, Error> {
        self.nodes += 1;

        let (child, outcome) = apply(board, turn_player, mv)?;
        match outcome {
            Some(outcome) => Ok(terminal_score(outcome, active_player, depth + 1)),
            None => self.score_board(child, active_player, turn_player.opponent(), depth + 1),
        }
    }

    /// Score an unfinished board where it is `turn_player`'s turn.
    fn score_board(
        &mut self,
        board: Board,
        active_player: Player,
        turn_player: Player,
        depth: u8,
    ) -> Result<i8, Error> {
        let maximizing = turn_player == active_player;

        let mut best: Option<i8> = None;
        for mv in board.available_moves()? {
            let score = self.score_move(board, active_player, turn_player, mv, depth)?;
            best = Some(match best {
                None => score,
                Some(best) if maximizing => best.max(score),
                Some(best) => best.min(score),
            });
        }

        // An unfinished board always has an empty tile.
        best.ok_or(Error::NoAvailableMoves)
    }
}

/// Find the best move for `player` with a full search.
///
/// # Errors
/// Returns [`Error::GameOver`] if the board already has an outcome,
/// and forwards board errors.
pub fn best_move(board: Board, player: Player) -> Result<Move, Error> {
    let mut search = Search::new();
    let mv = search.best_move(board, player)?;
    debug!(nodes = search.nodes(), %player, %mv, "searched for best move");
    Ok(mv)
}

/// Score every move for `player` with a full search.
///
/// See [`Search::score_moves`].
pub fn score_moves(board: Board, player: Player) -> Result<Vec<(Move, i8)>, Error> {
    Search::new().score_moves(board, player)
}
