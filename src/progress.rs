//! Terminal progress while npm is queried
//!
//! Uses indicatif on stderr. A bar is always cleared before the next status
//! line or prompt is written, so stdout stays readable when piped.

use crate::domain::DependencyGroup;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
const SCAN_TEMPLATE: &str = "{spinner:.cyan} {msg}";
const LOOKUP_TEMPLATE: &str = "{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}/{len}";

/// Progress indicator for one scan or one group's lookups
pub struct Progress {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Indicator that never draws anything
    pub fn disabled() -> Self {
        Self::new(false)
    }

    fn show(&mut self, bar: ProgressBar, template: &str, message: String) {
        if let Ok(style) = ProgressStyle::with_template(template) {
            bar.set_style(style.tick_chars(TICK_CHARS).progress_chars("█▓▒░"));
        }
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(80));
        self.bar = Some(bar);
    }

    /// Spinner shown while `npm ls` runs
    pub fn scanning(&mut self) {
        if self.enabled {
            self.show(
                ProgressBar::new_spinner(),
                SCAN_TEMPLATE,
                "Scanning installed dependencies...".to_string(),
            );
        }
    }

    /// Bar counting finished latest-version lookups for a group
    pub fn lookups(&mut self, group: DependencyGroup, total: usize) {
        if self.enabled && total > 0 {
            self.show(
                ProgressBar::new(total as u64),
                LOOKUP_TEMPLATE,
                format!("Looking up {}", group),
            );
        }
    }

    /// Record one finished lookup
    pub fn tick(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    pub fn clear(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    #[cfg(test)]
    fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(ProgressBar::position)
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.clear();
    }
}
