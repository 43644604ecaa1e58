//! Image-to-mosaic transform
//!
//! This module contains the compositing core:
//! - Source-over blending of 8-bit RGBA pixels
//! - Stamp preparation (square resample of the whole source)
//! - Canvas sizing with allocation limits
//! - Parallel per-cell compositing

/// Source-over compositing primitives
pub mod blend;
/// Canvas sizing and allocation
pub mod canvas;
/// Per-cell stamping and tinting
pub mod compositor;
/// Square stamp preparation
pub mod stamp;

pub use blend::Opacity;
pub use stamp::{ResampleFilter, TileSize};

use crate::io::error::Result;
use image::RgbaImage;

/// Parameters of a single mosaic transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MosaicConfig {
    /// Edge length of every cell, and of the stamp
    pub tile_size: TileSize,
    /// Coverage of the per-cell color overlay
    pub opacity: Opacity,
    /// Filter used to shrink the source into the stamp
    pub filter: ResampleFilter,
}

impl MosaicConfig {
    /// Configuration with default opacity and filter
    pub const fn new(tile_size: TileSize) -> Self {
        Self {
            tile_size,
            opacity: Opacity::DEFAULT,
            filter: ResampleFilter::Triangle,
        }
    }
}

/// Prepare the stamp and composite the whole mosaic
///
/// # Errors
///
/// Returns an error if the source has no pixels or the canvas would be too
/// large to allocate
pub fn make_mosaic(source: &RgbaImage, config: &MosaicConfig) -> Result<RgbaImage> {
    make_mosaic_with_progress(source, config, || {})
}

/// Like [`make_mosaic`], calling `on_band` after each source row is composited
///
/// # Errors
///
/// Same as [`make_mosaic`]
pub fn make_mosaic_with_progress<F>(
    source: &RgbaImage,
    config: &MosaicConfig,
    on_band: F,
) -> Result<RgbaImage>
where
    F: Fn() + Sync,
{
    // Reject oversized canvases before spending time on the resample
    canvas::canvas_dimensions(source.width(), source.height(), config.tile_size)?;

    let stamp = stamp::prepare_stamp(source, config.tile_size, config.filter)?;
    compositor::build_mosaic_with_progress(
        source,
        &stamp,
        config.tile_size,
        config.opacity,
        on_band,
    )
}
