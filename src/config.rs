use anyhow::Context;
use serde::{
    Deserialize,
    Deserializer,
};
use std::{
    collections::HashMap,
    path::Path,
};
use tic_tac_toe::Player;
use tracing_subscriber::filter::LevelFilter;

fn default_human_player() -> Player {
    Player::X
}

fn default_log_level() -> String {
    "info".to_string()
}

fn deserialize_player<'de, D>(deserializer: D) -> Result<Player, D::Error>
where
    D: Deserializer<'de>,
{
    let player = String::deserialize(deserializer)?;
    player.parse().map_err(serde::de::Error::custom)
}

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(
        default = "default_human_player",
        deserialize_with = "deserialize_player"
    )]
    human_player: Player,

    #[serde(default)]
    chance_for_error: f64,

    #[serde(default = "default_log_level")]
    log_level: String,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Config {
    pub fn human_player(&self) -> Player {
        self.human_player
    }

    pub fn chance_for_error(&self) -> f64 {
        self.chance_for_error
    }

    /// Get the log level.
    ///
    /// Falls back to `info` if the level is invalid, which [`Config::validate`] reports.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::INFO)
    }

    /// Load a config from a path
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from '{}'", path.display()))
            .and_then(|s| Self::load_from_str(&s))
    }

    /// Load a config from a string
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse config")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.chance_for_error) {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::InvalidChanceForError(self.chance_for_error),
            });
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            errors.push(ValidationMessage {
                severity: Severity::Error,
                error: ValidationError::InvalidLogLevel(self.log_level.clone()),
            });
        }

        let mut unknown_keys: Vec<_> = self.extra.keys().collect();
        unknown_keys.sort();
        for key in unknown_keys {
            errors.push(ValidationMessage {
                severity: Severity::Warn,
                error: ValidationError::UnknownKey(key.clone()),
            });
        }

        errors
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human_player: default_human_player(),
            chance_for_error: 0.0,
            log_level: default_log_level(),
            extra: HashMap::new(),
        }
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug)]
pub enum ValidationError {
    InvalidChanceForError(f64),
    InvalidLogLevel(String),
    UnknownKey(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidChanceForError(chance) => {
                write!(f, "Chance For Error {chance} is not between 0 and 1")
            }
            ValidationError::InvalidLogLevel(level) => write!(f, "Invalid Log Level \"{level}\""),
            ValidationError::UnknownKey(key) => write!(f, "Unknown Key \"{key}\""),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::load_from_str("").expect("failed to parse config");
        assert_eq!(config.human_player(), Player::X);
        assert_eq!(config.chance_for_error(), 0.0);
        assert_eq!(config.log_level(), LevelFilter::INFO);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn parse() {
        let config = Config::load_from_str(
            "human_player = \"o\"\nchance_for_error = 0.25\nlog_level = \"debug\"\n",
        )
        .expect("failed to parse config");
        assert_eq!(config.human_player(), Player::O);
        assert_eq!(config.chance_for_error(), 0.25);
        assert_eq!(config.log_level(), LevelFilter::DEBUG);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn invalid_player() {
        assert!(Config::load_from_str("human_player = \"Z\"").is_err());
    }

    #[test]
    fn validate() {
        let config =
            Config::load_from_str("chance_for_error = 1.5\nlog_level = \"loud\"\ncolour = true\n")
                .expect("failed to parse config");
        let messages = config.validate();
        let errors = messages
            .iter()
            .filter(|message| message.severity() == Severity::Error)
            .count();
        let warnings = messages
            .iter()
            .filter(|message| message.severity() == Severity::Warn)
            .count();
        assert_eq!(errors, 2);
        assert_eq!(warnings, 1);
        assert!(matches!(
            messages[2].error(),
            ValidationError::UnknownKey(key) if key == "colour"
        ));
    }
}
