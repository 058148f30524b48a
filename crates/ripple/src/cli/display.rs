//! Common display utilities for CLI commands.

use colored::Colorize;
use ripple::DependencyGraph;
use serde::Serialize;
use tracing::warn;

/// How command results are rendered.
#[derive(Debug, Clone)]
pub struct Output {
    /// Print JSON to stdout instead of text.
    pub json: bool,
    /// Maximum items listed per group in text output.
    pub max_display: usize,
}

impl Output {
    /// Print `value` as pretty JSON.
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> ripple::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print a list of unit ids with bullet points, truncated to `max_display`.
    ///
    /// Shows "... and N more" when truncated, or `empty_message` when empty.
    pub fn print_units<S: AsRef<str>>(&self, units: &[S], empty_message: &str) {
        if units.is_empty() {
            println!("    {}", empty_message.dimmed());
            return;
        }

        for unit in units.iter().take(self.max_display) {
            println!("    {} {}", "•".dimmed(), unit.as_ref());
        }

        if units.len() > self.max_display {
            println!(
                "    {} ... and {} more",
                "•".dimmed(),
                units.len() - self.max_display
            );
        }
    }
}

/// Warn when a queried unit does not appear anywhere in the graph.
///
/// Unknown units are still valid queries (they are leaves), but usually
/// indicate a typo.
pub fn warn_if_unknown(graph: &DependencyGraph<String>, unit: &str) {
    if !graph.contains(&unit.to_string()) {
        warn!(unit, "Unit does not appear in the graph");
    }
}
