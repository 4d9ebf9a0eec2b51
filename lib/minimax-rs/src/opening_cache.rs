use crate::{
    Error,
    Search,
};
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    sync::Arc,
    time::Instant,
};
use tic_tac_toe::{
    apply,
    Board,
    Move,
    Outcome,
    Player,
    NUM_TILES,
};
use tracing::info;

static GLOBAL_OPENING_CACHE: Lazy<Arc<OpeningCache>> = Lazy::new(|| {
    Arc::new(OpeningCache::compile().expect("failed to compile the opening cache"))
});

/// The precomputed reply for an opening board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CacheEntry {
    /// The move that was chosen
    pub mv: Move,

    /// The board after the move
    pub board: Board,

    /// The outcome of the board after the move
    pub outcome: Option<Outcome>,
}

/// Best replies for the first two moves of each player.
///
/// For each player, this holds the empty board and the 9 boards with a single opponent mark.
/// These are the most expensive boards to search, and their results never change.
#[derive(Debug, Clone)]
pub struct OpeningCache {
    x_entries: HashMap<Board, CacheEntry>,
    o_entries: HashMap<Board, CacheEntry>,
}

impl OpeningCache {
    /// Compile a new [`OpeningCache`] by searching every opening board.
    pub fn compile() -> Result<Self, Error> {
        let start = Instant::now();
        info!("compiling tic-tac-toe opening cache");

        let mut cache = Self {
            x_entries: HashMap::with_capacity(usize::from(NUM_TILES) + 1),
            o_entries: HashMap::with_capacity(usize::from(NUM_TILES) + 1),
        };

        for player in Player::ALL {
            for board in opening_boards(player) {
                let entry = compile_entry(board, player)?;
                cache.entries_mut(player).insert(board, entry);
            }
        }

        info!(
            "compiled tic-tac-toe opening cache with {} entries in {:?}",
            cache.len(),
            start.elapsed()
        );

        Ok(cache)
    }

    /// Get the shared, process-wide [`OpeningCache`].
    ///
    /// It is compiled on first use.
    pub fn global() -> Arc<Self> {
        GLOBAL_OPENING_CACHE.clone()
    }

    /// Look up the reply for `player` on `board`.
    pub fn get(&self, board: Board, player: Player) -> Option<&CacheEntry> {
        self.entries(player).get(&board)
    }

    /// Get the number of entries for both players.
    pub fn len(&self) -> usize {
        self.x_entries.len() + self.o_entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every entry.
    ///
    /// Items are the player to move, the opening board, and the cached reply.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &Board, &CacheEntry)> {
        Player::ALL.into_iter().flat_map(move |player| {
            self.entries(player)
                .iter()
                .map(move |(board, entry)| (player, board, entry))
        })
    }

    fn entries(&self, player: Player) -> &HashMap<Board, CacheEntry> {
        match player {
            Player::X => &self.x_entries,
            Player::O => &self.o_entries,
        }
    }

    fn entries_mut(&mut self, player: Player) -> &mut HashMap<Board, CacheEntry> {
        match player {
            Player::X => &mut self.x_entries,
            Player::O => &mut self.o_entries,
        }
    }
}

/// The empty board, then every board with a single opponent mark.
fn opening_boards(player: Player) -> impl Iterator<Item = Board> {
    let opponent = player.opponent();
    std::iter::once(Board::new())
        .chain((0..NUM_TILES).map(move |index| Board::new().set(index, Some(opponent))))
}

/// Rank tiles for breaking ties between equally scored moves: center, then corners, then edges.
fn tile_preference(mv: Move) -> u8 {
    match mv.index() {
        Some(4) => 2,
        Some(0 | 2 | 6 | 8) => 1,
        _ => 0,
    }
}

fn compile_entry(board: Board, player: Player) -> Result<CacheEntry, Error> {
    let mut search = Search::new();

    let mut best: Option<(Move, i8)> = None;
    for (mv, score) in search.score_moves(board, player)? {
        let is_better = best.map_or(true, |(best_mv, best_score)| {
            (score, tile_preference(mv)) > (best_score, tile_preference(best_mv))
        });
        if is_better {
            best = Some((mv, score));
        }
    }
    let (mv, _) = best.ok_or(Error::NoAvailableMoves)?;

    let (board, outcome) = apply(board, player, mv)?;
    Ok(CacheEntry { mv, board, outcome })
}
