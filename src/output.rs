//! CLI output formatting.
//!
//! One line per icon, then a summary or a warning:
//!
//! ```text
//! Generated: build_icons/android/mipmap-mdpi/ic_launcher.png (48x48)
//! Failed: build_icons/android/playstore-icon.png: IO error: ...
//!
//! Generated 12 icons in 'build_icons'
//! ```
//!
//! Each `format_*` function is pure (returns strings, no I/O) so exact
//! wording is testable; the `print_*` wrappers write to stdout.

use crate::emit::{EmitReport, IconOutcome};
use crate::pipeline::PipelineError;
use std::path::Path;

/// Printed before exiting non-zero whenever a run produced nothing.
pub const EMPTY_WARNING: &str = "No icons were generated. Check the input path.";

/// One status line per size-table entry.
pub fn format_outcome(outcome: &IconOutcome) -> String {
    match outcome {
        IconOutcome::Generated { dest, size } => {
            format!("Generated: {} ({}x{})", dest.display(), size, size)
        }
        IconOutcome::Failed { dest, error } => {
            format!("Failed: {}: {}", dest.display(), error)
        }
    }
}

/// Closing summary for a run that produced at least one file.
pub fn format_summary(generated: usize, output_dir: &Path) -> String {
    format!("Generated {} icons in '{}'", generated, output_dir.display())
}

/// Lines for a fatal (pre-emit) pipeline error.
///
/// `InputNotFound` gets a second line spelling out the lookup order, since
/// the resolver checks more places than the path the user typed.
pub fn format_fatal(error: &PipelineError) -> Vec<String> {
    match error {
        PipelineError::InputNotFound(_) => vec![
            format!("{error}"),
            "    (searched the path as given, the working directory, and the install directory)"
                .to_string(),
        ],
        PipelineError::Load(_) => vec![format!("{error}")],
    }
}

pub fn print_report(report: &EmitReport) {
    for outcome in &report.outcomes {
        println!("{}", format_outcome(outcome));
    }
}

pub fn print_fatal(error: &PipelineError) {
    for line in format_fatal(error) {
        println!("{line}");
    }
}
