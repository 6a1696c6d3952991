use std::path::PathBuf;

use crate::app_config::{AppConfig, ConverterCommand};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; unset ones fall back to [`AppConfig::default`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let non_blank = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_usize = |var: &str, default: usize| -> Result<usize, ConfigError> {
        match non_blank(var) {
            None => Ok(default),
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
        }
    };

    let log_level = non_blank("AFFINITY_LOG_LEVEL").unwrap_or(defaults.log_level);
    let lexicon_file_name =
        non_blank("AFFINITY_LEXICON_FILE").unwrap_or(defaults.lexicon_file_name);
    if lexicon_file_name.contains(['/', '\\']) {
        return Err(ConfigError::InvalidEnvVar {
            var: "AFFINITY_LEXICON_FILE".to_string(),
            reason: "must be a bare file name; use AFFINITY_LEXICON_PATH for a full path"
                .to_string(),
        });
    }
    let lexicon_path = non_blank("AFFINITY_LEXICON_PATH").map(PathBuf::from);
    let parallel_min_terms =
        parse_usize("AFFINITY_PARALLEL_MIN_TERMS", defaults.parallel_min_terms)?;

    // A set-but-blank converter is treated as unset.
    let doc_converter = non_blank("AFFINITY_DOC_CONVERTER")
        .and_then(|raw| ConverterCommand::parse(&raw))
        .unwrap_or(defaults.doc_converter);

    Ok(AppConfig {
        log_level,
        lexicon_file_name,
        lexicon_path,
        parallel_min_terms,
        doc_converter,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
