//! Image-to-mosaic transform: every source pixel becomes a tinted miniature of the whole image
//!
//! The source is resampled once into a square stamp. Each source pixel then
//! owns one cell of the output canvas, which receives the stamp followed by a
//! translucent overlay of that pixel's color.

#![forbid(unsafe_code)]

/// Compositing core: blending, stamp preparation and the parallel compositor
pub mod compose;
/// Input/output operations and error handling
pub mod io;

pub use compose::{MosaicConfig, Opacity, ResampleFilter, TileSize, make_mosaic};
pub use io::error::{MosaicError, Result};
