//! # icon-mill
//!
//! Generates the full Android/iOS launcher icon set from a single source
//! image: find the input, optionally center-crop it to a square, then write
//! one resized PNG per entry of a built-in size table (mipmap densities,
//! Play Store icon, AppIcon sizes).
//!
//! # Architecture: Linear Pipeline
//!
//! ```text
//! resolve input → decode to RGBA → optional square crop → emit icons
//! ```
//!
//! One pass, single-threaded, no state between runs. Failures that prevent
//! obtaining a source image abort the run; failures scoped to a single output
//! file are recorded in that entry's outcome and the remaining entries still
//! run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`sizes`] | The built-in size table: (relative output path, pixel size) records |
//! | [`locate`] | Input lookup across candidate locations in fixed precedence |
//! | [`imaging`] | Image work: pure crop math, backend trait, image-crate backend |
//! | [`emit`] | The per-entry resize/encode loop with isolated failures |
//! | [`pipeline`] | End-to-end run wiring the stages together |
//! | [`output`] | CLI output formatting — pure `format_*` functions, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Exact-Stretch Resizing
//!
//! Every output is resized to exactly `size × size`, even with `--no-crop`.
//! Skipping the crop on a non-square source therefore distorts proportions
//! rather than producing non-square files — launcher icon slots are square,
//! so the dimensional contract is kept and the aspect trade-off is the
//! caller's choice.
//!
//! ## Backend Trait
//!
//! Decode and encode go through [`imaging::IconBackend`] so the emitter's
//! semantics (destinations, sizes, overwrite, failure isolation) are testable
//! with a recording mock — no pixels encoded, no fixtures on disk.

pub mod emit;
pub mod imaging;
pub mod locate;
pub mod output;
pub mod pipeline;
pub mod sizes;
