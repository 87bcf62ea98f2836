//! End-to-end run: resolve input → decode → optional crop → emit icons.
//!
//! Errors here are the fatal kind — without a source image there is nothing
//! to emit. Per-icon failures never surface as errors; they live inside the
//! returned [`EmitReport`].

use crate::emit::{self, EmitReport};
use crate::imaging::{BackendError, IconBackend, RustBackend, square_crop};
use crate::locate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input image not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("could not open input image: {0}")]
    Load(#[from] BackendError),
}

/// Everything one run needs to know, parsed from the CLI.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Input image path, resolved via [`locate::resolve_input`].
    pub input: PathBuf,
    /// Root of the generated directory tree.
    pub output_dir: PathBuf,
    /// Center-crop the source to a square before resizing.
    pub crop_square: bool,
}

/// Run the full pipeline with the production backend.
pub fn run(options: &RunOptions) -> Result<EmitReport, PipelineError> {
    run_with_backend(&RustBackend::new(), options)
}

/// Run the pipeline against a specific backend (allows testing with mock).
pub fn run_with_backend(
    backend: &impl IconBackend,
    options: &RunOptions,
) -> Result<EmitReport, PipelineError> {
    let resolved = locate::resolve_input(&options.input)
        .ok_or_else(|| PipelineError::InputNotFound(options.input.clone()))?;

    let source = backend.load_rgba(&resolved)?;
    let prepared = if options.crop_square {
        square_crop(source)
    } else {
        source
    };

    Ok(emit::emit_icons(backend, &prepared, &options.output_dir))
}
