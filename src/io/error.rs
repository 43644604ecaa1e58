//! Error types for mosaic construction and its input/output collaborators

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Tile edge length below the supported minimum
    InvalidTileSize {
        /// Rejected tile size
        value: u32,
        /// Smallest accepted tile size
        minimum: u32,
    },

    /// Overlay opacity outside `[0, 1]` or not a number
    InvalidOpacity {
        /// Rejected opacity
        value: f32,
    },

    /// Input is neither an existing file nor a reachable URL
    InputNotFound {
        /// Input as given by the caller
        input: String,
    },

    /// Remote input could not be fetched
    Fetch {
        /// URL that was requested
        url: String,
        /// Underlying HTTP error
        source: reqwest::Error,
    },

    /// Remote input answered with a non-success status
    HttpStatus {
        /// URL that was requested
        url: String,
        /// Status code returned by the server
        status: u16,
    },

    /// Input bytes could not be decoded as a supported image
    InvalidImage {
        /// Where the bytes came from (path or URL)
        origin: String,
        /// Description of the decode failure
        reason: String,
    },

    /// Requested canvas does not fit in addressable memory
    AllocationTooLarge {
        /// Requested canvas width in pixels
        width: u64,
        /// Requested canvas height in pixels
        height: u64,
    },

    /// Internal coordinate fell outside a buffer
    IndexOutOfRange {
        /// Buffer being addressed
        buffer: &'static str,
        /// Offending coordinate (x, y)
        position: (u64, u64),
        /// Buffer dimensions (width, height)
        dimensions: (u32, u32),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileSize { value, minimum } => {
                write!(f, "Invalid tile size {value} (minimum {minimum})")
            }
            Self::InvalidOpacity { value } => {
                write!(f, "Invalid overlay opacity {value} (expected 0.0 to 1.0)")
            }
            Self::InputNotFound { input } => {
                write!(f, "File does not exist: '{input}'")
            }
            Self::Fetch { url, source } => {
                write!(f, "Failed to fetch '{url}': {source}")
            }
            Self::HttpStatus { url, status } => {
                write!(f, "Failed to fetch '{url}': server answered with status {status}")
            }
            Self::InvalidImage { origin, reason } => {
                write!(f, "Invalid image '{origin}': {reason}")
            }
            Self::AllocationTooLarge { width, height } => {
                write!(f, "Mosaic of {width}x{height} pixels is too large to allocate")
            }
            Self::IndexOutOfRange {
                buffer,
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the {} buffer ({}x{})",
                    position.0, position.1, buffer, dimensions.0, dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid image error for bytes from `origin`
pub fn invalid_image(origin: &impl ToString, reason: &impl ToString) -> MosaicError {
    MosaicError::InvalidImage {
        origin: origin.to_string(),
        reason: reason.to_string(),
    }
}
