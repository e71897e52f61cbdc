//! Writing generated drafts to the drafts directory.
//!
//! The destination filename is derived from the run date and the source
//! letter's stem, so repeated runs on the same day against the same letter
//! overwrite the prior draft. The write itself goes through a temp file and
//! rename in the destination directory so a crash never leaves a partial
//! draft at the final path; the overwrite semantics at that path are
//! unchanged (last writer wins, no versioning).

use crate::error::{LetterpressError, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Draft filename for a given date and source stem: `blog_<date>_<stem>.md`.
pub fn draft_filename(date: NaiveDate, stem: &str) -> String {
    format!("blog_{}_{}.md", date.format("%Y-%m-%d"), stem)
}

/// Write `content` to `drafts_dir`, creating the directory if needed.
///
/// Returns the path of the written draft.
pub fn write_draft(
    drafts_dir: &Path,
    date: NaiveDate,
    stem: &str,
    content: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(drafts_dir).map_err(|e| {
        LetterpressError::WriteError(format!(
            "failed to create drafts directory '{}': {}",
            drafts_dir.display(),
            e
        ))
    })?;

    let filename = draft_filename(date, stem);
    let path = drafts_dir.join(&filename);

    // Temp file in the same directory so the rename stays on one filesystem.
    let temp_path = drafts_dir.join(format!(".{}.tmp", filename));
    fs::write(&temp_path, content).map_err(|e| {
        LetterpressError::WriteError(format!(
            "failed to write temporary file '{}': {}",
            temp_path.display(),
            e
        ))
    })?;

    fs::rename(&temp_path, &path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LetterpressError::WriteError(format!("failed to replace '{}': {}", path.display(), e))
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn filename_derives_from_date_and_stem() {
        assert_eq!(
            draft_filename(date("2024-05-10"), "letter_2024-05-09"),
            "blog_2024-05-10_letter_2024-05-09.md"
        );
    }

    #[test]
    fn write_draft_produces_expected_path_and_content() {
        let temp = TempDir::new().unwrap();
        let drafts = temp.path().join("drafts");

        let path = write_draft(&drafts, date("2024-05-10"), "letter_2024-05-09", "draft body")
            .unwrap();

        assert_eq!(path, drafts.join("blog_2024-05-10_letter_2024-05-09.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "draft body");
    }

    #[test]
    fn drafts_directory_is_created_if_absent() {
        let temp = TempDir::new().unwrap();
        let drafts = temp.path().join("nested").join("drafts");
        assert!(!drafts.exists());

        write_draft(&drafts, date("2024-05-10"), "letter_a", "content").unwrap();

        assert!(drafts.is_dir());
    }

    #[test]
    fn second_run_does_not_fail_on_existing_directory() {
        let temp = TempDir::new().unwrap();
        let drafts = temp.path().join("drafts");

        write_draft(&drafts, date("2024-05-10"), "letter_a", "first").unwrap();
        write_draft(&drafts, date("2024-05-11"), "letter_a", "second").unwrap();

        assert!(drafts.join("blog_2024-05-10_letter_a.md").exists());
        assert!(drafts.join("blog_2024-05-11_letter_a.md").exists());
    }

    #[test]
    fn same_day_same_stem_overwrites_prior_draft() {
        let temp = TempDir::new().unwrap();
        let drafts = temp.path().join("drafts");

        let first = write_draft(&drafts, date("2024-05-10"), "letter_a", "old draft").unwrap();
        let second = write_draft(&drafts, date("2024-05-10"), "letter_a", "new draft").unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&second).unwrap(), "new draft");
    }

    #[test]
    fn no_temp_file_remains_after_write() {
        let temp = TempDir::new().unwrap();
        let drafts = temp.path().join("drafts");

        write_draft(&drafts, date("2024-05-10"), "letter_a", "content").unwrap();

        let leftovers: Vec<_> = fs::read_dir(&drafts)
            .unwrap()
            .flatten()
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
