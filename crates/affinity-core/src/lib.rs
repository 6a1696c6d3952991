//! Shared data model and configuration for the affinity scorer.
//!
//! The lexicon and result types live here so the scorer, the file loaders,
//! and the CLI agree on one shape without depending on each other.

pub mod app_config;
pub mod config;
pub mod lexicon;
pub mod results;

use thiserror::Error;

pub use app_config::{AppConfig, ConverterCommand, INPUT_PLACEHOLDER};
pub use config::{load_app_config, load_app_config_from_env};
pub use lexicon::{Lexicon, LexiconEntry};
pub use results::{ResultRecord, ResultSet, RESULT_HEADER};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
