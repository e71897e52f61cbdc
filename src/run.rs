//! Run orchestration: locate, generate, write.
//!
//! One linear pass per process. Each stage returns a `Result`; the first
//! failure aborts the run and propagates to `main`, which owns exit behavior.
//! A failed run has no partial state worth resuming — it is simply re-run.

use crate::config::{self, Config};
use crate::error::Result;
use crate::generator::Generator;
use crate::locator;
use crate::writer;
use chrono::Local;
use std::path::PathBuf;

/// Execute one generation run and return the path of the written draft.
pub fn run(config: &Config) -> Result<PathBuf> {
    println!("🎨 Letterpress: generating blog draft...");

    let source = locator::find_latest(&config.memory_dir)?;
    println!("📖 Reading: {}", source.path.display());

    // Resolve the credential after locating but before any network call.
    let api_key = config::resolve_api_key()?;
    let generator = Generator::new(api_key, config);

    println!("🤖 Calling Anthropic API...");
    let draft = generator.generate(&source.content)?;

    let today = Local::now().date_naive();
    let path = writer::write_draft(&config.drafts_dir, today, &source.stem, &draft)?;
    println!("✅ Blog draft generated: {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LetterpressError;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn test_config(root: &std::path::Path) -> Config {
        Config {
            memory_dir: root.join(".memory"),
            drafts_dir: root.join("drafts"),
            ..Config::default()
        }
    }

    #[test]
    #[serial]
    fn missing_memory_dir_fails_before_anything_else() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());

        let err = run(&config).unwrap_err();
        assert!(matches!(err, LetterpressError::DirectoryNotFound(_)));
        assert!(!config.drafts_dir.exists());
    }

    #[test]
    #[serial]
    fn empty_memory_dir_fails_with_no_matching_files() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());
        fs::create_dir(&config.memory_dir).unwrap();

        let err = run(&config).unwrap_err();
        assert!(matches!(err, LetterpressError::NoMatchingFiles(_)));
    }

    #[test]
    #[serial]
    fn missing_credential_fails_before_network_call() {
        let temp = TempDir::new().unwrap();
        let config = test_config(temp.path());
        fs::create_dir(&config.memory_dir).unwrap();
        fs::write(config.memory_dir.join("letter_2024-05-09.md"), "notes").unwrap();

        unsafe { std::env::remove_var(config::API_KEY_ENV) };

        let err = run(&config).unwrap_err();
        assert!(matches!(err, LetterpressError::MissingCredential(_)));
        assert!(!config.drafts_dir.exists());
    }
}
