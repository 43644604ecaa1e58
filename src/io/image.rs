//! PNG export of the finished mosaic

use crate::io::error::{MosaicError, Result};
use image::{ImageFormat, RgbaImage};
use std::path::Path;

/// Write `canvas` to `output_path` as PNG
///
/// The file is always PNG-encoded, whatever its extension says.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(canvas: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::info!(
        "Wrote {}x{} mosaic to {}",
        canvas.width(),
        canvas.height(),
        output_path.display()
    );

    Ok(())
}
