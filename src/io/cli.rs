//! Command-line interface for turning one image into a mosaic PNG

use crate::compose::blend::DEFAULT_OVERLAY_OPACITY;
use crate::compose::{MosaicConfig, Opacity, ResampleFilter, TileSize, make_mosaic_with_progress};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_png;
use crate::io::progress::ProgressManager;
use crate::io::source::ImageSource;
use clap::Parser;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "mosaic-maker")]
#[command(
    author,
    version,
    about = "Create a mosaic PNG where every pixel becomes a tinted copy of the whole image"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Edge length in pixels of each mosaic cell (minimum 2)
    #[arg(value_name = "TILE_SIZE")]
    pub tile_size: u32,

    /// Input image path or http(s) URL (PNG, JPEG or GIF)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output PNG file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Coverage of the color overlay on each cell, from 0.0 to 1.0
    #[arg(short, long, default_value_t = DEFAULT_OVERLAY_OPACITY)]
    pub opacity: f32,

    /// Resampling filter used to shrink the image into a tile
    #[arg(short, long, value_enum, default_value_t = ResampleFilter::Triangle)]
    pub filter: ResampleFilter,

    /// Number of worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate the numeric arguments into a mosaic configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileSize` or `InvalidOpacity` for out-of-range values
    pub fn mosaic_config(&self) -> Result<MosaicConfig> {
        Ok(MosaicConfig {
            tile_size: TileSize::new(self.tile_size)?,
            opacity: Opacity::new(self.opacity)?,
            filter: self.filter,
        })
    }
}

/// Orchestrates a single load, composite and export run
pub struct MosaicRunner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl MosaicRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the transform according to CLI arguments
    ///
    /// Arguments are validated before any input is read or any buffer is
    /// allocated.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, loading, compositing or
    /// export fails
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let config = self.cli.mosaic_config()?;
        let source = ImageSource::resolve(&self.cli.input)?;

        let image = source.load()?;
        self.progress_manager
            .start(Path::new(&self.cli.input), image.height());

        let canvas = self.composite(&image, &config)?;
        export_png(&canvas, &self.cli.output)?;

        self.progress_manager.finish(start_time.elapsed());
        Ok(())
    }

    fn composite(&self, image: &RgbaImage, config: &MosaicConfig) -> Result<RgbaImage> {
        let on_band = || self.progress_manager.tick_row();

        match self.cli.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| invalid_parameter("threads", &threads, &e))?;
                pool.install(|| make_mosaic_with_progress(image, config, on_band))
            }
            None => make_mosaic_with_progress(image, config, on_band),
        }
    }
}
