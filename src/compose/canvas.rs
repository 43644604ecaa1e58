//! Canvas sizing and allocation with overflow checks

use crate::compose::stamp::TileSize;
use crate::io::error::{MosaicError, Result};
use image::RgbaImage;

/// Bytes per canvas pixel
pub const CHANNELS_PER_PIXEL: usize = 4;

// Safety limit to prevent excessive memory allocation
/// Maximum canvas size in bytes (RGBA, 4 bytes per pixel)
pub const MAX_CANVAS_BYTES: u64 = 4 * 1024 * 1024 * 1024;

/// Compute the canvas size for a `width` x `height` source
///
/// # Errors
///
/// Returns `AllocationTooLarge` if either dimension overflows `u32`, the byte
/// length overflows `usize`, or the canvas exceeds [`MAX_CANVAS_BYTES`]
pub fn canvas_dimensions(width: u32, height: u32, tile_size: TileSize) -> Result<(u32, u32)> {
    let wide = u64::from(width) * u64::from(tile_size.get());
    let tall = u64::from(height) * u64::from(tile_size.get());
    let too_large = || MosaicError::AllocationTooLarge {
        width: wide,
        height: tall,
    };

    let canvas_width = u32::try_from(wide).map_err(|_overflow| too_large())?;
    let canvas_height = u32::try_from(tall).map_err(|_overflow| too_large())?;

    let bytes = wide
        .checked_mul(tall)
        .and_then(|pixels| pixels.checked_mul(CHANNELS_PER_PIXEL as u64))
        .ok_or_else(too_large)?;
    if bytes > MAX_CANVAS_BYTES || usize::try_from(bytes).is_err() {
        return Err(too_large());
    }

    Ok((canvas_width, canvas_height))
}

/// Allocate a transparent black canvas for a `width` x `height` source
///
/// # Errors
///
/// Returns `AllocationTooLarge` if the canvas size is out of range or the
/// allocator refuses the reservation
pub fn allocate_canvas(width: u32, height: u32, tile_size: TileSize) -> Result<RgbaImage> {
    let (canvas_width, canvas_height) = canvas_dimensions(width, height, tile_size)?;
    let too_large = || MosaicError::AllocationTooLarge {
        width: u64::from(canvas_width),
        height: u64::from(canvas_height),
    };

    let len = (canvas_width as usize)
        .checked_mul(canvas_height as usize)
        .and_then(|pixels| pixels.checked_mul(CHANNELS_PER_PIXEL))
        .ok_or_else(too_large)?;

    let mut raw: Vec<u8> = Vec::new();
    raw.try_reserve_exact(len).map_err(|_reserve| too_large())?;
    raw.resize(len, 0);

    log::debug!("Allocated {canvas_width}x{canvas_height} canvas ({len} bytes)");

    RgbaImage::from_raw(canvas_width, canvas_height, raw).ok_or_else(too_large)
}
