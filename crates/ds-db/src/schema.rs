//! Schema creation.
//!
//! There is exactly one table and no versioning: the statement is idempotent
//! and running it again leaves an existing table untouched.

use ds_core::{Error, Result};
use rusqlite::Connection;

/// Name of the table holding image records.
pub const IMAGES_TABLE: &str = "images";

const CREATE_IMAGES: &str = r#"
CREATE TABLE IF NOT EXISTS images (
    filename     TEXT PRIMARY KEY,
    pixel_width  INTEGER NOT NULL,
    pixel_height INTEGER NOT NULL
)
"#;

/// Create the `images` table if it does not exist.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_IMAGES).map_err(Error::schema)?;
    tracing::debug!(table = IMAGES_TABLE, "Schema ensured");
    Ok(())
}
