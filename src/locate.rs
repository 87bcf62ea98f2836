//! Input image lookup.
//!
//! A user-supplied path is tried against an ordered list of candidate
//! locations; the first that exists wins. No extension guessing, no
//! case-insensitive matching, no globs. Existence is the only check here —
//! a directory resolves fine and then fails at decode.

use std::env;
use std::path::{Path, PathBuf};

/// Candidate locations for `given`, in precedence order:
///
/// 1. the path as given (absolute, or relative to the working directory)
/// 2. explicitly joined to the working directory
/// 3. joined to the directory the binary was installed to
///
/// Joining an absolute `given` is a no-op (`PathBuf::join` replaces), so an
/// absolute input collapses to a single effective candidate.
fn candidate_paths(given: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![given.to_path_buf()];
    if let Ok(cwd) = env::current_dir() {
        candidates.push(cwd.join(given));
    }
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join(given));
    }
    candidates
}

/// First existing candidate, made absolute where the filesystem allows.
fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|p| p.exists())
        .map(|p| p.canonicalize().unwrap_or_else(|_| p.clone()))
}

/// Resolve a user-supplied input path to an existing file.
///
/// Returns `None` when no candidate location exists.
pub fn resolve_input(given: &Path) -> Option<PathBuf> {
    first_existing(&candidate_paths(given))
}
