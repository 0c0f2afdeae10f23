//! Environment-driven configuration.

use std::path::PathBuf;

use samhsa_loader::CODE_LIST_DIR;
use samhsa_types::Generation;

use crate::error::ConfigError;

/// Variable naming the code list directory.
pub const CODES_PATH_ENV: &str = "SAMHSA_CODES_PATH";

/// Variable selecting the rule generation.
pub const GENERATION_ENV: &str = "SAMHSA_GENERATION";

/// Matcher settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Directory containing the code list CSVs.
    pub codes_path: PathBuf,
    /// Rule generation used for procedure and package fields.
    pub generation: Generation,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            codes_path: PathBuf::from(CODE_LIST_DIR),
            generation: Generation::default(),
        }
    }
}

impl MatcherConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset
    /// or empty values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(CODES_PATH_ENV).filter(|value| !value.trim().is_empty()) {
            config.codes_path = PathBuf::from(path);
        }

        if let Some(name) = lookup(GENERATION_ENV).filter(|value| !value.trim().is_empty()) {
            config.generation =
                Generation::from_name(&name).ok_or_else(|| ConfigError::InvalidGeneration {
                    variable: GENERATION_ENV.to_string(),
                    value: name.clone(),
                })?;
        }

        Ok(config)
    }
}
