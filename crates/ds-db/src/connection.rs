//! Opening the single SQLite connection.

use std::time::Duration;

use ds_core::{Error, Result};
use rusqlite::Connection;

use crate::url::DatabaseTarget;

/// Open a connection for the given connection string.
///
/// Missing parent directories are not created: a database that cannot be
/// reached is a startup failure. The connection is verified with a trivial
/// query before it is returned.
pub fn open(url: &str, busy_timeout: Duration) -> Result<Connection> {
    let target = DatabaseTarget::parse(url)?;
    tracing::debug!(?target, "Opening database");

    let conn = match &target {
        DatabaseTarget::Memory => Connection::open_in_memory(),
        DatabaseTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !parent.is_dir() {
                    return Err(Error::connection(format!(
                        "directory {} does not exist",
                        parent.display()
                    )));
                }
            }
            Connection::open(path)
        }
        DatabaseTarget::Uri(uri) => Connection::open(uri),
    }
    .map_err(Error::connection)?;

    conn.busy_timeout(busy_timeout).map_err(Error::connection)?;
    ping(&conn)?;

    Ok(conn)
}

/// Open a private in-memory database (useful for tests).
pub fn open_memory() -> Result<Connection> {
    open(":memory:", Duration::ZERO)
}

/// Run a trivial query to confirm the connection is usable.
pub fn ping(conn: &Connection) -> Result<()> {
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
        .map_err(Error::connection)?;
    Ok(())
}
