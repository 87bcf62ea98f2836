//! The icon emitter — one resized PNG per size-table entry.
//!
//! Failure policy: anything that goes wrong for a single entry (directory
//! creation, resize, encode, write) is captured in that entry's outcome and
//! the loop continues. Only the caller decides what a fully-empty report
//! means.

use crate::imaging::{BackendError, IconBackend};
use crate::sizes::{ICON_SPECS, IconSpec};
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to one size-table entry.
#[derive(Debug)]
pub enum IconOutcome {
    Generated { dest: PathBuf, size: u32 },
    Failed { dest: PathBuf, error: BackendError },
}

/// Per-entry outcomes for a full emitter run, in table order.
#[derive(Debug, Default)]
pub struct EmitReport {
    pub outcomes: Vec<IconOutcome>,
}

impl EmitReport {
    /// Number of files actually written.
    pub fn generated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, IconOutcome::Generated { .. }))
            .count()
    }
}

/// Emit the built-in icon set for `image` under `output_root`.
pub fn emit_icons(
    backend: &impl IconBackend,
    image: &RgbaImage,
    output_root: &Path,
) -> EmitReport {
    emit_with_table(backend, image, output_root, ICON_SPECS)
}

/// Emit one icon per table entry; isolated per-entry failures.
pub fn emit_with_table(
    backend: &impl IconBackend,
    image: &RgbaImage,
    output_root: &Path,
    table: &[IconSpec],
) -> EmitReport {
    let mut outcomes = Vec::with_capacity(table.len());

    for spec in table {
        let dest = output_root.join(spec.rel_path);
        outcomes.push(match write_entry(backend, image, spec.size, &dest) {
            Ok(()) => IconOutcome::Generated { dest, size: spec.size },
            Err(error) => IconOutcome::Failed { dest, error },
        });
    }

    EmitReport { outcomes }
}

fn write_entry(
    backend: &impl IconBackend,
    image: &RgbaImage,
    size: u32,
    dest: &Path,
) -> Result<(), BackendError> {
    if let Some(parent) = dest.parent() {
        // Tolerates already-existing directories.
        fs::create_dir_all(parent)?;
    }
    backend.write_icon(image, size, dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::RustBackend;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};

    #[test]
    fn emits_every_table_entry() {
        let tmp = tempfile::TempDir::new().unwrap();
        let backend = MockBackend::new();
        let img = RgbaImage::new(300, 300);

        let report = emit_icons(&backend, &img, tmp.path());

        assert_eq!(report.outcomes.len(), ICON_SPECS.len());
        assert_eq!(report.generated(), ICON_SPECS.len());
    }

    #[test]
    fn destinations_and_sizes_follow_the_table() {
        let tmp = tempfile::TempDir::new().unwrap();
        let backend = MockBackend::new();
        let img = RgbaImage::new(300, 300);

        emit_icons(&backend, &img, tmp.path());

        let ops = backend.get_operations();
        assert_eq!(ops.len(), ICON_SPECS.len());
        for (op, spec) in ops.iter().zip(ICON_SPECS) {
            match op {
                RecordedOp::WriteIcon { dest, size, .. } => {
                    assert_eq!(
                        dest,
                        &tmp.path().join(spec.rel_path).to_string_lossy().to_string()
                    );
                    assert_eq!(*size, spec.size);
                }
                other => panic!("unexpected op: {other:?}"),
            }
        }
    }

    #[test]
    fn one_failure_leaves_siblings_intact() {
        let tmp = tempfile::TempDir::new().unwrap();
        // "playstore" matches exactly one table entry
        let backend = MockBackend::failing_on("playstore");
        let img = RgbaImage::new(300, 300);

        let report = emit_icons(&backend, &img, tmp.path());

        assert_eq!(report.generated(), ICON_SPECS.len() - 1);
        let failed: Vec<_> = report
            .outcomes
            .iter()
            .filter_map(|o| match o {
                IconOutcome::Failed { dest, .. } => Some(dest.clone()),
                IconOutcome::Generated { .. } => None,
            })
            .collect();
        assert_eq!(failed, vec![tmp.path().join("android/playstore-icon.png")]);
    }

    #[test]
    fn all_failures_report_zero_generated() {
        let tmp = tempfile::TempDir::new().unwrap();
        // Every destination ends in .png
        let backend = MockBackend::failing_on(".png");
        let img = RgbaImage::new(10, 10);

        let report = emit_icons(&backend, &img, tmp.path());
        assert_eq!(report.generated(), 0);
        assert_eq!(report.outcomes.len(), ICON_SPECS.len());
    }

    #[test]
    fn creates_nested_output_directories() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path().join("build_icons");
        let table = [
            IconSpec { rel_path: "android/mipmap-mdpi/ic_launcher.png", size: 8 },
            IconSpec { rel_path: "ios/AppIcon-20.png", size: 16 },
        ];

        let report = emit_with_table(&RustBackend::new(), &RgbaImage::new(32, 32), &root, &table);

        assert_eq!(report.generated(), 2);
        assert!(root.join("android/mipmap-mdpi/ic_launcher.png").is_file());
        assert!(root.join("ios/AppIcon-20.png").is_file());
    }

    #[test]
    fn rerun_overwrites_previous_outputs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path().to_path_buf();
        let table = [IconSpec { rel_path: "ios/AppIcon-20.png", size: 20 }];
        let backend = RustBackend::new();

        emit_with_table(&backend, &RgbaImage::new(64, 64), &root, &table);
        let report = emit_with_table(&backend, &RgbaImage::new(64, 64), &root, &table);

        assert_eq!(report.generated(), 1);
        assert_eq!(
            image::image_dimensions(root.join("ios/AppIcon-20.png")).unwrap(),
            (20, 20)
        );
    }
}
