//! PNG serialization and file export for rendered canvases

use crate::io::error::{AvatarError, Result};
use crate::raster::Canvas;
use image::ImageFormat;
use std::io::Cursor;
use std::path::Path;

/// Serialize the canvas into PNG bytes
///
/// # Errors
///
/// Returns an error if the encoder rejects the image buffer
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    canvas
        .image()
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|source| AvatarError::ImageEncode { source })?;
    Ok(cursor.into_inner())
}

/// Encode the canvas and write it to `output_path`
///
/// # Errors
///
/// Returns an error if:
/// - The canvas cannot be encoded as PNG
/// - The file cannot be created or written
pub fn export_canvas_as_png(canvas: &Canvas, output_path: &Path) -> Result<()> {
    let bytes = encode_png(canvas)?;

    std::fs::write(output_path, &bytes).map_err(|e| AvatarError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write png",
        source: e,
    })?;

    log::info!("Wrote {} bytes to {}", bytes.len(), output_path.display());
    Ok(())
}
