//! Locating the most recent session memory letter.
//!
//! Letters live in `.memory/` and follow the `letter_<date>.md` naming
//! convention. "Most recent" is the lexicographically greatest filename,
//! which matches chronological order as long as names embed zero-padded
//! dates. That is a policy choice inherited from the pipeline this tool
//! feeds, not a robust chronological sort; files with unsortable names
//! will be picked in plain string order.

use crate::config::LETTER_PATTERN;
use crate::error::{LetterpressError, Result};
use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::{Path, PathBuf};

/// A selected memory letter: where it came from and what it says.
///
/// Created once per run by [`find_latest`], consumed by the generator,
/// and discarded when the run ends.
#[derive(Debug, Clone)]
pub struct MemorySource {
    /// Path of the selected letter file.
    pub path: PathBuf,

    /// Filename without the `.md` extension, used in the draft filename.
    pub stem: String,

    /// Full text content of the letter.
    pub content: String,
}

/// Find the most recent letter in `memory_dir` and read it.
///
/// Fails with `DirectoryNotFound` if the directory is absent and with
/// `NoMatchingFiles` if nothing matches `letter_*.md`. Both checks run
/// before any network activity.
pub fn find_latest(memory_dir: &Path) -> Result<MemorySource> {
    if !memory_dir.is_dir() {
        return Err(LetterpressError::DirectoryNotFound(memory_dir.to_path_buf()));
    }

    let matcher = letter_matcher();

    let entries = fs::read_dir(memory_dir).map_err(|e| LetterpressError::ReadError {
        path: memory_dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut names: Vec<String> = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && matcher.is_match(name)
        {
            names.push(name.to_string());
        }
    }

    if names.is_empty() {
        return Err(LetterpressError::NoMatchingFiles(memory_dir.to_path_buf()));
    }

    // Descending name sort; the first entry is the latest letter.
    names.sort_unstable_by(|a, b| b.cmp(a));
    let latest = &names[0];

    let path = memory_dir.join(latest);
    let content = fs::read_to_string(&path).map_err(|e| LetterpressError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| latest.clone());

    Ok(MemorySource { path, stem, content })
}

fn letter_matcher() -> GlobMatcher {
    // The pattern is a compile-time constant; it always parses.
    Glob::new(LETTER_PATTERN)
        .expect("letter pattern is valid")
        .compile_matcher()
}
