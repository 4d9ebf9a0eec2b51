#![deny(
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_copy_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::all
)]
#![warn(variant_size_differences, let_underscore_drop)]

//! # ttt-console
//! Play Tic-Tac-Toe against a minimax engine on the console.

pub mod cli_options;
pub mod config;
pub mod console;
pub mod logger;
pub mod setup;

use crate::{
    cli_options::CliOptions,
    console::ConsoleGame,
};
use anyhow::{
    ensure,
    Context as _,
};
use minimax::MiniMaxAi;
use tic_tac_toe::Player;
use tracing::info;

/// Data from the setup function
struct SetupData {
    human: Player,
    chance_for_error: f64,
}

/// Pre-main setup
fn setup(cli_options: CliOptions) -> anyhow::Result<SetupData> {
    let config =
        setup::load_config(cli_options.config.as_deref()).context("failed to load config")?;

    let human = cli_options.player.unwrap_or(config.human_player());
    let chance_for_error = cli_options
        .chance_for_error
        .unwrap_or(config.chance_for_error());
    ensure!(
        (0.0..=1.0).contains(&chance_for_error),
        "the chance for error must be between 0 and 1, got {chance_for_error}"
    );

    eprintln!("setting up logger...");
    logger::setup(config.log_level()).context("failed to initialize logger")?;

    eprintln!();
    Ok(SetupData {
        human,
        chance_for_error,
    })
}

/// The main entry.
///
/// Sets up the program and calls `real_main`.
/// Setup errors are printed to the stderr, as the logger is not initialized yet.
fn main() -> anyhow::Result<()> {
    // This line MUST run first.
    // It is needed to exit early if the options are invalid,
    // and this will NOT run destructors if it does so.
    let cli_options = argh::from_env();

    let setup_data = setup(cli_options)?;
    real_main(setup_data)?;
    Ok(())
}

/// The actual entry point
fn real_main(setup_data: SetupData) -> anyhow::Result<()> {
    let ai = MiniMaxAi::default();
    info!(
        "loaded opening cache with {} entries",
        ai.opening_cache().len()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = ConsoleGame::new(
        ai,
        setup_data.human,
        setup_data.chance_for_error,
        stdin.lock(),
        stdout.lock(),
        rand::thread_rng(),
    );
    game.run()?;

    Ok(())
}
