//! Input/output collaborators around the mosaic core
//!
//! This module contains everything outside the pure transform:
//! - Command-line parsing and run orchestration
//! - Source resolution and decoding from files or URLs
//! - PNG export and progress display
//! - Error types and configuration constants

/// Command-line arguments and the run orchestrator
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error taxonomy and result alias
pub mod error;
/// PNG export
pub mod image;
/// Terminal progress display
pub mod progress;
/// Source image resolution and decoding
pub mod source;
