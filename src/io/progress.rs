//! Terminal progress display for the compositing pass

use crate::io::configuration::{MIN_PROGRESS_ROWS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar counting composited source rows
///
/// Safe to tick from rayon worker threads.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar drawn on stderr
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr()),
        }
    }

    /// Create a progress manager that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Configure the bar for a source with `rows` rows
    pub fn start(&self, input: &Path, rows: u32) {
        if rows < MIN_PROGRESS_ROWS {
            self.bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        self.bar.set_style(ROW_STYLE.clone());
        self.bar.set_length(u64::from(rows));
        self.bar.set_position(0);
        self.bar.set_prefix(
            input
                .file_name()
                .unwrap_or(input.as_os_str())
                .to_string_lossy()
                .to_string(),
        );
    }

    /// Record one completed source row
    pub fn tick_row(&self) {
        self.bar.inc(1);
    }

    /// Number of rows recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish the bar with the elapsed time
    pub fn finish(&self, elapsed: Duration) {
        self.bar
            .finish_with_message(format!("done in {:.2}s", elapsed.as_secs_f64()));
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}
