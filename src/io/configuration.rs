//! Input/output constants and runtime configuration defaults

// Remote input settings
/// Request timeout for fetching remote source images
pub const HTTP_TIMEOUT_SECS: u64 = 30;
/// URL schemes treated as remote input
pub const REMOTE_SCHEMES: [&str; 2] = ["http://", "https://"];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Minimum number of source rows before a progress bar is worth drawing
pub const MIN_PROGRESS_ROWS: u32 = 2;
