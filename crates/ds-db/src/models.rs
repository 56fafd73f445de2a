//! Rust structs mapping to database tables.

use ds_core::Dimensions;
use rusqlite::types::Type;

/// One row of the `images` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub filename: String,
    pub dimensions: Dimensions,
}

impl ImageRecord {
    /// Build a record from a row with columns `filename, pixel_width, pixel_height`.
    ///
    /// Stored dimensions outside `1..=u32::MAX` are reported as a conversion
    /// failure rather than truncated.
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        let filename: String = row.get(0)?;
        let width: u32 = row.get(1)?;
        let height: u32 = row.get(2)?;
        let dimensions = Dimensions::new(width, height).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                Type::Integer,
                format!("stored dimensions {width}x{height} are not positive").into(),
            )
        })?;

        Ok(Self {
            filename,
            dimensions,
        })
    }
}
