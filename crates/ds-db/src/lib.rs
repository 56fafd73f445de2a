//! ds-db: database access for dimstore.
//!
//! SQLite storage for image records: connection-string parsing, opening the
//! single connection, idempotent schema creation, typed models, queries, and
//! the [`RecordStore`] trait the command dispatcher is written against.
//!
//! # Example
//!
//! ```
//! use ds_core::Dimensions;
//! use ds_db::{RecordStore, SqliteStore};
//!
//! let store = SqliteStore::open_memory().unwrap();
//! store.ensure_schema().unwrap();
//! store.insert("cat.jpg", Dimensions::new(640, 480).unwrap()).unwrap();
//! assert_eq!(store.fetch("cat.jpg").unwrap().dimensions.width, 640);
//! ```

pub mod connection;
pub mod models;
pub mod queries;
pub mod schema;
pub mod store;
pub mod url;

pub use models::ImageRecord;
pub use store::{RecordStore, SqliteStore};
pub use url::DatabaseTarget;
