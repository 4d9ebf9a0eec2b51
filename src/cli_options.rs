use std::path::PathBuf;
use tic_tac_toe::Player;

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "Play Tic-Tac-Toe against a minimax engine")]
pub struct CliOptions {
    #[argh(option, description = "the path to the config")]
    pub config: Option<PathBuf>,

    #[argh(option, description = "the player you play as, X or O")]
    pub player: Option<Player>,

    #[argh(
        option,
        description = "the chance that the engine plays a random move, from 0 to 1"
    )]
    pub chance_for_error: Option<f64>,
}
