//! Tile preparation: the square miniature of the source stamped into every cell

use crate::io::error::{MosaicError, Result};
use image::RgbaImage;
use image::imageops::{self, FilterType};
use std::fmt;

/// Smallest accepted tile edge length in pixels
pub const MIN_TILE_SIZE: u32 = 2;

/// Validated edge length of a square mosaic cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileSize(u32);

impl TileSize {
    /// Create a tile size
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileSize` if `value` is below [`MIN_TILE_SIZE`]
    pub const fn new(value: u32) -> Result<Self> {
        if value < MIN_TILE_SIZE {
            return Err(MosaicError::InvalidTileSize {
                value,
                minimum: MIN_TILE_SIZE,
            });
        }
        Ok(Self(value))
    }

    /// Edge length in pixels
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resampling filter used to shrink the source into a stamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ResampleFilter {
    /// Nearest neighbour
    Nearest,
    /// Bilinear
    #[default]
    Triangle,
    /// Catmull-Rom cubic
    CatmullRom,
    /// Gaussian
    Gaussian,
    /// Lanczos with window 3
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => Self::Nearest,
            ResampleFilter::Triangle => Self::Triangle,
            ResampleFilter::CatmullRom => Self::CatmullRom,
            ResampleFilter::Gaussian => Self::Gaussian,
            ResampleFilter::Lanczos3 => Self::Lanczos3,
        }
    }
}

/// Resample `source` to exactly `tile_size` x `tile_size`
///
/// The source aspect ratio is discarded so that the stamp tiles uniformly.
/// Alpha is resampled alongside the color channels, so an opaque source
/// yields an opaque stamp.
///
/// # Errors
///
/// Returns `InvalidParameter` if `source` has no pixels
pub fn prepare_stamp(
    source: &RgbaImage,
    tile_size: TileSize,
    filter: ResampleFilter,
) -> Result<RgbaImage> {
    if source.width() == 0 || source.height() == 0 {
        return Err(crate::io::error::invalid_parameter(
            "source",
            &format!("{}x{}", source.width(), source.height()),
            &"source image has no pixels",
        ));
    }

    let edge = tile_size.get();
    log::debug!(
        "Preparing {edge}x{edge} stamp from {}x{} source with {filter:?} filter",
        source.width(),
        source.height()
    );

    Ok(imageops::resize(source, edge, edge, filter.into()))
}
