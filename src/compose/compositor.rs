//! Canvas compositor: stamps the tile into every cell and tints it
//!
//! The canvas is addressed row-major. Source pixel `(x, y)` owns the cell
//! `[x * tile, (x + 1) * tile) x [y * tile, (y + 1) * tile)` and nothing else,
//! so the canvas splits into one horizontal band of `tile` rows per source
//! row. Bands are painted in parallel, each worker holding the only mutable
//! borrow of its band.

use crate::compose::blend::{Opacity, blend_row, tint_row};
use crate::compose::canvas::{CHANNELS_PER_PIXEL, allocate_canvas, canvas_dimensions};
use crate::compose::stamp::TileSize;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use image::{Rgba, RgbaImage};
use rayon::prelude::*;

/// Build the full mosaic canvas
///
/// # Errors
///
/// Returns an error if:
/// - `stamp` is not `tile_size` x `tile_size`
/// - `source` has no pixels
/// - The canvas would be too large to allocate
pub fn build_mosaic(
    source: &RgbaImage,
    stamp: &RgbaImage,
    tile_size: TileSize,
    opacity: Opacity,
) -> Result<RgbaImage> {
    build_mosaic_with_progress(source, stamp, tile_size, opacity, || {})
}

/// Build the full mosaic canvas, calling `on_band` after each source row
///
/// `on_band` runs on worker threads, once per completed band, in no
/// particular order.
///
/// # Errors
///
/// Same as [`build_mosaic`]
pub fn build_mosaic_with_progress<F>(
    source: &RgbaImage,
    stamp: &RgbaImage,
    tile_size: TileSize,
    opacity: Opacity,
    on_band: F,
) -> Result<RgbaImage>
where
    F: Fn() + Sync,
{
    check_stamp(stamp, tile_size)?;
    check_source(source)?;

    let mut canvas = allocate_canvas(source.width(), source.height(), tile_size)?;
    let canvas_width = canvas.width();
    let band_len = band_len(canvas_width, tile_size);

    log::info!(
        "Compositing {}x{} cells onto {}x{} canvas",
        source.width(),
        source.height(),
        canvas_width,
        canvas.height()
    );

    let pixels: &mut [u8] = &mut canvas;
    pixels
        .par_chunks_mut(band_len)
        .enumerate()
        .try_for_each(|(row, band)| -> Result<()> {
            let cell_y = u32::try_from(row).map_err(|_overflow| MosaicError::IndexOutOfRange {
                buffer: "source",
                position: (0, row as u64),
                dimensions: source.dimensions(),
            })?;
            paint_band(band, canvas_width, source, stamp, cell_y, opacity)?;
            on_band();
            Ok(())
        })?;

    Ok(canvas)
}

/// Repaint the single cell belonging to source pixel `(x, y)`
///
/// Writes only inside that cell's rectangle of `canvas`.
///
/// # Errors
///
/// Returns an error if:
/// - `stamp` is not `tile_size` x `tile_size`
/// - `canvas` does not have the mosaic dimensions for `source`
/// - `(x, y)` is outside `source`
pub fn paint_cell(
    canvas: &mut RgbaImage,
    source: &RgbaImage,
    stamp: &RgbaImage,
    tile_size: TileSize,
    (x, y): (u32, u32),
    opacity: Opacity,
) -> Result<()> {
    check_stamp(stamp, tile_size)?;

    let expected = canvas_dimensions(source.width(), source.height(), tile_size)?;
    if canvas.dimensions() != expected {
        return Err(invalid_parameter(
            "canvas",
            &format!("{}x{}", canvas.width(), canvas.height()),
            &format!("expected {}x{} for this source", expected.0, expected.1),
        ));
    }

    let tint = tint_color(source, x, y)?;
    let canvas_width = canvas.width();
    let band_len = band_len(canvas_width, tile_size);
    let start = y as usize * band_len;
    let out_of_range = MosaicError::IndexOutOfRange {
        buffer: "canvas",
        position: (u64::from(x), u64::from(y)),
        dimensions: expected,
    };

    let pixels: &mut [u8] = canvas;
    let band = pixels
        .get_mut(start..start + band_len)
        .ok_or(out_of_range)?;

    paint_cell_in_band(band, canvas_width, stamp, x, tint, opacity)
}

fn check_stamp(stamp: &RgbaImage, tile_size: TileSize) -> Result<()> {
    let edge = tile_size.get();
    if stamp.dimensions() == (edge, edge) {
        Ok(())
    } else {
        Err(invalid_parameter(
            "stamp",
            &format!("{}x{}", stamp.width(), stamp.height()),
            &format!("stamp must be {edge}x{edge}"),
        ))
    }
}

fn check_source(source: &RgbaImage) -> Result<()> {
    if source.width() == 0 || source.height() == 0 {
        return Err(invalid_parameter(
            "source",
            &format!("{}x{}", source.width(), source.height()),
            &"source image has no pixels",
        ));
    }
    Ok(())
}

// Bytes in one band: `tile` full canvas rows
fn band_len(canvas_width: u32, tile_size: TileSize) -> usize {
    canvas_width as usize * CHANNELS_PER_PIXEL * tile_size.get() as usize
}

// Source RGB with full coverage; the overlay opacity supplies the blend factor
fn tint_color(source: &RgbaImage, x: u32, y: u32) -> Result<Rgba<u8>> {
    let [r, g, b, _] = source
        .get_pixel_checked(x, y)
        .ok_or(MosaicError::IndexOutOfRange {
            buffer: "source",
            position: (u64::from(x), u64::from(y)),
            dimensions: source.dimensions(),
        })?
        .0;
    Ok(Rgba([r, g, b, u8::MAX]))
}

fn paint_band(
    band: &mut [u8],
    canvas_width: u32,
    source: &RgbaImage,
    stamp: &RgbaImage,
    cell_y: u32,
    opacity: Opacity,
) -> Result<()> {
    for cell_x in 0..source.width() {
        let tint = tint_color(source, cell_x, cell_y)?;
        paint_cell_in_band(band, canvas_width, stamp, cell_x, tint, opacity)?;
    }
    Ok(())
}

fn paint_cell_in_band(
    band: &mut [u8],
    canvas_width: u32,
    stamp: &RgbaImage,
    cell_x: u32,
    tint: Rgba<u8>,
    opacity: Opacity,
) -> Result<()> {
    let stride = canvas_width as usize * CHANNELS_PER_PIXEL;
    let cell_len = stamp.width() as usize * CHANNELS_PER_PIXEL;
    let left = cell_x as usize * cell_len;

    for (row, stamp_row) in stamp.as_raw().chunks_exact(cell_len).enumerate() {
        let start = row * stride + left;
        let dst = band
            .get_mut(start..start + cell_len)
            .ok_or(MosaicError::IndexOutOfRange {
                buffer: "canvas",
                position: (u64::from(cell_x), row as u64),
                dimensions: (canvas_width, stamp.height()),
            })?;

        blend_row(dst, stamp_row, None);
        tint_row(dst, tint, opacity);
    }

    Ok(())
}
