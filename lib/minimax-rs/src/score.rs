use tic_tac_toe::{
    Outcome,
    Player,
};

/// The score of an immediate win, before the depth penalty.
pub const WIN_SCORE: i8 = 10;

/// Score a finished game from the point of view of `active_player`.
///
/// Wins lose a point for every ply it took to reach them and losses gain one,
/// so the search prefers fast wins and slow losses.
pub fn terminal_score(outcome: Outcome, active_player: Player, depth: u8) -> i8 {
    // A game lasts at most 9 plies, so this cannot wrap.
    let depth = depth as i8;
    match outcome {
        Outcome::Win(winner) if winner == active_player => WIN_SCORE - depth,
        Outcome::Win(_) => depth - WIN_SCORE,
        Outcome::Tie => 0,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn values() {
        assert_eq!(terminal_score(Outcome::Win(Player::X), Player::X, 1), 9);
        assert_eq!(terminal_score(Outcome::Win(Player::O), Player::X, 1), -9);
        assert_eq!(terminal_score(Outcome::Tie, Player::O, 9), 0);
    }

    #[test]
    fn faster_wins_and_slower_losses_are_better() {
        for player in Player::ALL {
            let win = Outcome::Win(player);
            let loss = Outcome::Win(player.opponent());

            assert!(terminal_score(win, player, 1) > terminal_score(win, player, 3));
            assert!(terminal_score(loss, player, 3) > terminal_score(loss, player, 1));
            assert!(terminal_score(win, player, 9) > terminal_score(Outcome::Tie, player, 1));
            assert!(terminal_score(Outcome::Tie, player, 1) > terminal_score(loss, player, 9));
        }
    }
}
