//! Source image resolution and decoding from local files or URLs

use crate::io::configuration::{HTTP_TIMEOUT_SECS, REMOTE_SCHEMES};
use crate::io::error::{MosaicError, Result, invalid_image};
use image::{ImageFormat, RgbaImage};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Formats accepted as mosaic input
pub const SUPPORTED_FORMATS: [ImageFormat; 3] =
    [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Gif];

/// Where the source image bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Local file
    File(PathBuf),
    /// Remote `http`/`https` resource
    Url(String),
}

impl ImageSource {
    /// Resolve a user-supplied input
    ///
    /// An existing local path wins; otherwise the input must be an `http` or
    /// `https` URL.
    ///
    /// # Errors
    ///
    /// Returns `InputNotFound` if the input is neither
    pub fn resolve(input: &str) -> Result<Self> {
        let path = Path::new(input);
        if path.exists() {
            return Ok(Self::File(path.to_path_buf()));
        }

        let lowered = input.to_ascii_lowercase();
        if REMOTE_SCHEMES
            .iter()
            .any(|scheme| lowered.starts_with(scheme))
        {
            return Ok(Self::Url(input.to_string()));
        }

        Err(MosaicError::InputNotFound {
            input: input.to_string(),
        })
    }

    /// Read the raw bytes of the source
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The HTTP request fails or answers with a non-success status
    pub fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            Self::File(path) => std::fs::read(path).map_err(|e| MosaicError::FileSystem {
                path: path.clone(),
                operation: "read",
                source: e,
            }),
            Self::Url(url) => fetch_url(url),
        }
    }

    /// Fetch and decode the source into 8-bit RGBA
    ///
    /// # Errors
    ///
    /// Returns an error if fetching fails, or `InvalidImage` if the bytes are
    /// not a PNG, JPEG or GIF image
    pub fn load(&self) -> Result<RgbaImage> {
        let bytes = self.fetch()?;
        let image = decode_image(&bytes, &self.to_string())?;
        log::info!(
            "Loaded {}x{} source from {self}",
            image.width(),
            image.height()
        );
        Ok(image)
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Decode in-memory bytes into 8-bit RGBA
///
/// `origin` only labels error messages.
///
/// # Errors
///
/// Returns `InvalidImage` if the format is unrecognised, unsupported, or the
/// data is corrupt
pub fn decode_image(bytes: &[u8], origin: &str) -> Result<RgbaImage> {
    let format = image::guess_format(bytes).map_err(|e| invalid_image(&origin, &e))?;
    if !SUPPORTED_FORMATS.contains(&format) {
        return Err(invalid_image(
            &origin,
            &format!("unsupported format {format:?} (expected PNG, JPEG or GIF)"),
        ));
    }

    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| invalid_image(&origin, &e))?;
    Ok(decoded.to_rgba8())
}

fn fetch_url(url: &str) -> Result<Vec<u8>> {
    let fetch_error = |e: reqwest::Error| MosaicError::Fetch {
        url: url.to_string(),
        source: e,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .map_err(fetch_error)?;

    log::debug!("Fetching {url}");
    let response = client.get(url).send().map_err(fetch_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(MosaicError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.bytes().map_err(fetch_error)?.to_vec())
}
