//! Command dispatch.
//!
//! One command per process: [`dispatch`] routes it to the record store and
//! dimension reader, writes the result to `out`, and hands any failure back
//! with context naming the operation and filename. Deciding the exit code is
//! left to the caller.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use ds_db::schema::IMAGES_TABLE;
use ds_db::RecordStore;
use ds_probe::DimensionReader;

/// Usage text printed for `help`, unknown commands, and no command at all.
pub const USAGE: &str = "\
Usage:
    ddl - creates tables in database
    add  [filename] - adds metadata about an image to the database
    read [filename] - retrieves metadata about an image
";

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the schema.
    Ddl,
    /// Read an image's header and insert its dimensions.
    Add(String),
    /// Print the stored dimensions for a filename.
    Read(String),
    /// Print the usage text.
    Help,
}

/// Run `command` against `store` and `reader`, writing output to `out`.
pub fn dispatch<S, R, W>(command: &Command, store: &S, reader: &R, out: &mut W) -> Result<()>
where
    S: RecordStore + ?Sized,
    R: DimensionReader + ?Sized,
    W: Write,
{
    match command {
        Command::Ddl => {
            tracing::info!(table = IMAGES_TABLE, "Creating table");
            store.ensure_schema().context("Unable to create table")?;
            writeln!(out, "Table {IMAGES_TABLE} is ready")?;
        }
        Command::Add(filename) => {
            add(filename, store, reader, out)
                .with_context(|| format!("Problem inserting record for {filename}"))?;
        }
        Command::Read(filename) => {
            tracing::info!(filename = %filename, "Reading image record");
            let record = store
                .fetch(filename)
                .with_context(|| format!("Problem selecting record for {filename}"))?;
            writeln!(out, "Image {} dimensions: {}", record.filename, record.dimensions)?;
        }
        Command::Help => {
            out.write_all(USAGE.as_bytes())?;
        }
    }

    Ok(())
}

fn add<S, R, W>(filename: &str, store: &S, reader: &R, out: &mut W) -> Result<()>
where
    S: RecordStore + ?Sized,
    R: DimensionReader + ?Sized,
    W: Write,
{
    let path = Path::new(filename);
    tracing::info!(filename = %filename, reader = reader.name(), "Adding image");
    if !reader.supports(path) {
        tracing::debug!(filename = %filename, "Extension not recognized; sniffing content");
    }

    let dimensions = reader.read_dimensions(path)?;
    let record = store.insert(filename, dimensions)?;
    writeln!(out, "Added image {}: {}", record.filename, record.dimensions)?;
    Ok(())
}
