//! # ds-probe
//!
//! Header-only image probing.
//!
//! This crate reports the pixel width and height of an image file by parsing
//! only its header, never the compressed pixel data.
//!
//! ## Quick start
//!
//! ```no_run
//! use ds_probe::{DimensionReader, HeaderReader};
//! use std::path::Path;
//!
//! let reader = HeaderReader::new();
//! let dims = reader.read_dimensions(Path::new("cat.jpg")).unwrap();
//! println!("{}x{}", dims.width, dims.height);
//! ```

pub mod header;
pub mod reader;

pub use header::HeaderReader;
pub use reader::DimensionReader;
