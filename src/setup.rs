use crate::config::{
    Config,
    Severity,
};
use anyhow::{
    ensure,
    Context,
};
use std::path::Path;

/// Load a config.
///
/// This prints to the stderr directly.
/// It is intended to be called BEFORE the loggers are set up.
/// If no path is given, the default config is used.
pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => {
            eprintln!("loading `{}`...", path.display());
            Config::load_from_path(path)
                .with_context(|| format!("failed to load `{}`", path.display()))?
        }
        None => Config::default(),
    };

    let errors = config.validate();
    let mut error_count = 0;
    for e in errors {
        match e.severity() {
            Severity::Warn => {
                eprintln!("validation warning: {}", e.error());
            }
            Severity::Error => {
                eprintln!("validation error: {}", e.error());
                error_count += 1;
            }
        }
    }

    ensure!(
        error_count == 0,
        "validation failed with {error_count} errors."
    );

    Ok(config)
}
