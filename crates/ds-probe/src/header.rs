//! Header-only [`DimensionReader`] backed by the `image` crate.

use std::path::Path;

use ds_core::{Dimensions, Error};
use image::{ImageFormat, ImageReader};

use crate::reader::DimensionReader;

/// Reads dimensions from image headers.
///
/// The format is sniffed from the leading magic bytes, with the file
/// extension as fallback, and only the header is parsed. Every raster format
/// the `image` crate can decode is accepted (JPEG, PNG, GIF, BMP, WebP, TIFF
/// and others).
pub struct HeaderReader;

impl HeaderReader {
    /// Create a new `HeaderReader`.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeaderReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DimensionReader for HeaderReader {
    fn name(&self) -> &'static str {
        "header"
    }

    fn supports(&self, path: &Path) -> bool {
        ImageFormat::from_path(path).is_ok()
    }

    fn read_dimensions(&self, path: &Path) -> ds_core::Result<Dimensions> {
        let reader = ImageReader::open(path)
            .map_err(|e| Error::decode(path, e))?
            .with_guessed_format()
            .map_err(|e| Error::decode(path, e))?;

        let format = reader.format();
        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| Error::decode(path, e))?;

        tracing::debug!(path = %path.display(), ?format, width, height, "Read image header");

        Dimensions::new(width, height).ok_or_else(|| {
            Error::decode(
                path,
                format!("image reports a zero dimension ({width}x{height})"),
            )
        })
    }
}
