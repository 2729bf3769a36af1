use std::fs;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ImageError, RgbaImage};
use thiserror::Error;

/// Failure at the save boundary. Surfaced to the user as an error dialog;
/// nothing propagates past the handler that triggered the save.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not encode PNG: {0}")]
    Encode(#[from] ImageError),
    #[error("could not write file: {0}")]
    Io(#[from] std::io::Error),
}

/// Encodes the rendered surface as PNG bytes. Separate from the file write
/// so encoding can be exercised without touching the filesystem.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();
    image.write_with_encoder(PngEncoder::new(&mut bytes))?;
    Ok(bytes)
}

/// Writes the image to `path` in PNG format, whatever the path's extension.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), SaveError> {
    let bytes = encode_png(image)?;
    fs::write(path, bytes)?;
    Ok(())
}
