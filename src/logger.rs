use anyhow::Context;
use tracing_subscriber::{
    filter::{
        EnvFilter,
        LevelFilter,
    },
    layer::SubscriberExt,
};

/// Try to setup a logger.
///
/// Logs go to the stderr so they do not mix with the game on the stdout.
/// The `RUST_LOG` env var can add more directives on top of `level`.
pub fn setup(level: LevelFilter) -> anyhow::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let stderr_formatting_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(stderr_formatting_layer);

    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")?;

    Ok(())
}
