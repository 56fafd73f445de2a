//! The [`DimensionReader`] trait defining the interface for header probing.

use std::path::Path;

use ds_core::Dimensions;

/// Reads the pixel dimensions of an image file without decoding its pixels.
pub trait DimensionReader {
    /// Human-readable name identifying this reader implementation.
    fn name(&self) -> &'static str;

    /// Read the width and height of the image at `path`.
    ///
    /// Fails with [`ds_core::Error::Decode`] when the file cannot be opened or
    /// is not a recognized, well-formed image.
    fn read_dimensions(&self, path: &Path) -> ds_core::Result<Dimensions>;

    /// Check whether this reader recognizes the file's extension.
    ///
    /// A return value of `false` does not mean [`DimensionReader::read_dimensions`]
    /// will fail: content sniffing takes precedence over the extension.
    fn supports(&self, path: &Path) -> bool;
}
