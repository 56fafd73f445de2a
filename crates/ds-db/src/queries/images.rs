//! Image record insert and lookup.

use ds_core::{Dimensions, Error, Result};
use rusqlite::{Connection, ErrorCode};

use crate::models::ImageRecord;

const COLS: &str = "filename, pixel_width, pixel_height";

/// Insert a new image record.
///
/// A filename that is already registered yields [`Error::Constraint`]; the
/// existing row is left as it was.
pub fn insert_image(
    conn: &Connection,
    filename: &str,
    dimensions: Dimensions,
) -> Result<ImageRecord> {
    conn.execute(
        "INSERT INTO images (filename, pixel_width, pixel_height) VALUES (?1, ?2, ?3)",
        rusqlite::params![filename, dimensions.width, dimensions.height],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation => {
            Error::constraint("image", filename)
        }
        other => Error::connection(other),
    })?;

    Ok(ImageRecord {
        filename: filename.to_string(),
        dimensions,
    })
}

/// Get an image record by exact filename.
pub fn get_image(conn: &Connection, filename: &str) -> Result<Option<ImageRecord>> {
    let q = format!("SELECT {COLS} FROM images WHERE filename = ?1");
    let result = conn.query_row(&q, [filename], ImageRecord::from_row);
    match result {
        Ok(record) => Ok(Some(record)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::connection(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::open_memory;
    use crate::schema::ensure_schema;

    fn setup() -> Connection {
        let conn = open_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn
    }

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[test]
    fn insert_and_get() {
        let conn = setup();
        let record = insert_image(&conn, "photo.png", dims(100, 200)).unwrap();
        assert_eq!(record.filename, "photo.png");

        let fetched = get_image(&conn, "photo.png").unwrap().unwrap();
        assert_eq!(fetched, record);
        assert_eq!(fetched.dimensions.width, 100);
        assert_eq!(fetched.dimensions.height, 200);
    }

    #[test]
    fn get_missing_returns_none() {
        let conn = setup();
        assert!(get_image(&conn, "missing.png").unwrap().is_none());
    }

    #[test]
    fn lookup_is_exact_match() {
        let conn = setup();
        insert_image(&conn, "dir/cat.jpg", dims(640, 480)).unwrap();

        assert!(get_image(&conn, "cat.jpg").unwrap().is_none());
        assert!(get_image(&conn, "DIR/CAT.JPG").unwrap().is_none());
        assert!(get_image(&conn, "dir/cat.jpg").unwrap().is_some());
    }

    #[test]
    fn duplicate_insert_is_constraint_error() {
        let conn = setup();
        insert_image(&conn, "photo.png", dims(100, 200)).unwrap();

        let err = insert_image(&conn, "photo.png", dims(1, 1)).unwrap_err();
        assert!(matches!(err, Error::Constraint { .. }));
        assert_eq!(err.to_string(), "image already exists: photo.png");

        let kept = get_image(&conn, "photo.png").unwrap().unwrap();
        assert_eq!(kept.dimensions, dims(100, 200));
    }

    #[test]
    fn missing_table_is_connection_error() {
        let conn = open_memory().unwrap();
        let err = get_image(&conn, "photo.png").unwrap_err();
        assert!(matches!(err, Error::Connection { .. }));
        assert!(err.to_string().contains("no such table"));

        let err = insert_image(&conn, "photo.png", dims(1, 1)).unwrap_err();
        assert!(matches!(err, Error::Connection { .. }));
    }

    #[test]
    fn corrupt_row_is_reported() {
        let conn = setup();
        conn.execute(
            "INSERT INTO images (filename, pixel_width, pixel_height) VALUES ('bad.png', 0, -5)",
            [],
        )
        .unwrap();

        let err = get_image(&conn, "bad.png").unwrap_err();
        assert!(matches!(err, Error::Connection { .. }));
    }
}
