//! Shared domain vocabulary and configuration for newsdash.
//!
//! Holds the language/sentiment/tone enums used across the feed pipeline
//! and the CLI, plus the env-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{Language, Sentiment, Tone};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
