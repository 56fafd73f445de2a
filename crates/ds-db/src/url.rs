//! Connection-string parsing.
//!
//! `DATABASE_URL` names an SQLite database. Plain paths, `sqlite:` URLs,
//! SQLite `file:` URIs, and in-memory forms are accepted. Any other
//! `scheme://` is rejected up front so a server URL meant for another engine
//! fails with a clear message instead of creating a stray file.

use std::path::PathBuf;

use ds_core::{Error, Result};

/// Where a connection string points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// A private in-memory database.
    Memory,
    /// A database file on disk.
    File(PathBuf),
    /// An SQLite `file:` URI, passed through untouched.
    Uri(String),
}

impl DatabaseTarget {
    /// Parse a connection string.
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(Error::connection("database URL is empty"));
        }

        if matches!(url, ":memory:" | "sqlite::memory:" | "sqlite://:memory:") {
            return Ok(Self::Memory);
        }

        if url.starts_with("file:") {
            return Ok(Self::Uri(url.to_string()));
        }

        if let Some(rest) = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
        {
            if rest.is_empty() {
                return Err(Error::connection(format!(
                    "database URL '{url}' has no path"
                )));
            }
            return Ok(Self::File(PathBuf::from(rest)));
        }

        if let Some((scheme, _)) = url.split_once("://") {
            return Err(Error::connection(format!(
                "unsupported database scheme '{scheme}' (expected sqlite)"
            )));
        }

        Ok(Self::File(PathBuf::from(url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_forms() {
        for url in [":memory:", "sqlite::memory:", "sqlite://:memory:"] {
            assert_eq!(DatabaseTarget::parse(url).unwrap(), DatabaseTarget::Memory);
        }
    }

    #[test]
    fn sqlite_scheme_absolute() {
        let target = DatabaseTarget::parse("sqlite:///var/lib/images.db").unwrap();
        assert_eq!(
            target,
            DatabaseTarget::File(PathBuf::from("/var/lib/images.db"))
        );
    }

    #[test]
    fn sqlite_scheme_relative() {
        let target = DatabaseTarget::parse("sqlite://images.db").unwrap();
        assert_eq!(target, DatabaseTarget::File(PathBuf::from("images.db")));

        let target = DatabaseTarget::parse("sqlite:images.db").unwrap();
        assert_eq!(target, DatabaseTarget::File(PathBuf::from("images.db")));
    }

    #[test]
    fn plain_path() {
        let target = DatabaseTarget::parse(" ./data/images.db ").unwrap();
        assert_eq!(
            target,
            DatabaseTarget::File(PathBuf::from("./data/images.db"))
        );
    }

    #[test]
    fn file_uri_passthrough() {
        let url = "file:images.db?mode=ro";
        assert_eq!(
            DatabaseTarget::parse(url).unwrap(),
            DatabaseTarget::Uri(url.to_string())
        );
    }

    #[test]
    fn foreign_scheme_rejected() {
        let err = DatabaseTarget::parse("postgres://user@localhost/images").unwrap_err();
        assert!(matches!(err, Error::Connection { .. }));
        assert!(err.to_string().contains("postgres"));
    }

    #[test]
    fn empty_rejected() {
        assert!(DatabaseTarget::parse("").is_err());
        assert!(DatabaseTarget::parse("sqlite://").is_err());
    }
}
