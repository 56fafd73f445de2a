//! Application configuration types.
//!
//! The top-level [`Config`] struct is deserialized from TOML. Every section
//! defaults sensibly so an empty file is valid. The database URL normally
//! comes from `DATABASE_URL`; the file only supplies a fallback.

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::Error;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
}

impl Config {
    /// Deserialize a `Config` from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| Error::Config(format!("config parse error: {e}")))
    }

    /// Load configuration from a TOML file.
    ///
    /// Unlike [`Config::load_or_default`], a missing file is an error here:
    /// the caller asked for this path explicitly.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml(&contents)
    }

    /// Load configuration from `path` if given, otherwise return defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Pick the database URL, preferring an explicit override (flag or
    /// environment) over the config file.
    pub fn resolve_database_url(&self, override_url: Option<&str>) -> Result<String> {
        override_url
            .or(self.database.url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(String::from)
            .ok_or_else(|| {
                Error::Config(
                    "no database URL configured (set DATABASE_URL or database.url)".into(),
                )
            })
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.database.busy_timeout_ms == 0 {
            warnings.push(
                "database.busy_timeout_ms is 0; a locked database fails immediately".into(),
            );
        }

        if let Some(ref url) = self.database.url {
            if url.trim().is_empty() {
                warnings.push("database.url is set but empty".into());
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Database connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    #[serde(default = "default_busy_timeout")]
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            busy_timeout_ms: default_busy_timeout(),
        }
    }
}

fn default_busy_timeout() -> u64 {
    5000
}
