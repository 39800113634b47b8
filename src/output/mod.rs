//! Output formatting for check and update results
//!
//! Only human-readable text is produced; see [`TextFormatter`].

mod text;

pub use text::TextFormatter;

/// Configuration for output formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether this is a dry-run
    pub dry_run: bool,
    /// Whether to use colors
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(dry_run: bool, color: bool) -> Self {
        Self { dry_run, color }
    }

    /// Create the formatter for this configuration
    pub fn formatter(&self) -> TextFormatter {
        TextFormatter::new(self.dry_run, self.color)
    }
}
