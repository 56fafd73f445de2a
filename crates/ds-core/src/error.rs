//! Unified error type for dimstore.
//!
//! Every library crate funnels its failures into [`Error`]. The binary wraps
//! these with `anyhow` context naming the operation and filename, and any
//! error reaching the top level ends the process with exit code 1.

use std::fmt;
use std::path::{Path, PathBuf};

/// Boxed cause carried by variants that wrap a driver or decoder error.
///
/// It is rendered inline in the message and not exposed through `source()`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Unified error type covering all failure modes in dimstore.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The database could not be opened, or a statement failed in transport.
    #[error("Connection error: {cause}")]
    Connection {
        /// The underlying driver error.
        cause: BoxError,
    },

    /// An image file could not be opened or its header is not recognized.
    #[error("Decode error [{}]: {cause}", .path.display())]
    Decode {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O or decoder error.
        cause: BoxError,
    },

    /// The schema statement could not be executed.
    #[error("Schema error: {cause}")]
    Schema {
        /// The underlying driver error.
        cause: BoxError,
    },

    /// An insert collided with an existing primary key.
    #[error("{entity} already exists: {key}")]
    Constraint {
        /// The kind of record (e.g. "image").
        entity: String,
        /// The key that already exists.
        key: String,
    },

    /// No record matched the lookup key.
    #[error("{entity} not found: {key}")]
    NotFound {
        /// The kind of record (e.g. "image").
        entity: String,
        /// The key that was looked up.
        key: String,
    },

    /// Configuration could not be loaded or is incomplete.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Stable snake_case label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Connection { .. } => "connection",
            Error::Decode { .. } => "decode",
            Error::Schema { .. } => "schema",
            Error::Constraint { .. } => "constraint",
            Error::NotFound { .. } => "not_found",
            Error::Config(_) => "config",
        }
    }

    /// Convenience constructor for [`Error::Connection`].
    pub fn connection(cause: impl Into<BoxError>) -> Self {
        Error::Connection {
            cause: cause.into(),
        }
    }

    /// Convenience constructor for [`Error::Decode`].
    pub fn decode(path: impl AsRef<Path>, cause: impl Into<BoxError>) -> Self {
        Error::Decode {
            path: path.as_ref().to_path_buf(),
            cause: cause.into(),
        }
    }

    /// Convenience constructor for [`Error::Schema`].
    pub fn schema(cause: impl Into<BoxError>) -> Self {
        Error::Schema {
            cause: cause.into(),
        }
    }

    /// Convenience constructor for [`Error::Constraint`].
    pub fn constraint(entity: impl Into<String>, key: impl fmt::Display) -> Self {
        Error::Constraint {
            entity: entity.into(),
            key: key.to_string(),
        }
    }

    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(entity: impl Into<String>, key: impl fmt::Display) -> Self {
        Error::NotFound {
            entity: entity.into(),
            key: key.to_string(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
