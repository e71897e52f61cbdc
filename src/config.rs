//! Configuration for letterpress.
//!
//! All generation parameters are fixed values: the tool takes no arguments and
//! reads no config file. The one environment-sourced value, the API credential,
//! is resolved explicitly here and passed into the generator at construction so
//! the resolution policy stays in one place and is substitutable in tests.

use crate::error::{LetterpressError, Result};
use std::path::PathBuf;

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Directory scanned for session memory letters.
pub const MEMORY_DIR: &str = ".memory";

/// Directory that receives generated drafts.
pub const DRAFTS_DIR: &str = "drafts";

/// Filename pattern for memory letters.
pub const LETTER_PATTERN: &str = "letter_*.md";

/// Model used for draft generation.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Maximum output length for a generated draft.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Base URL of the generation API.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Fixed configuration for a single run.
///
/// Values never vary between runs of a released binary; the struct exists so
/// tests can point the pipeline at temporary directories and a stub server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for `letter_*.md` files.
    pub memory_dir: PathBuf,

    /// Directory drafts are written to (created if absent).
    pub drafts_dir: PathBuf,

    /// Model identifier sent with the generation request.
    pub model: String,

    /// Maximum output tokens for the generation request.
    pub max_tokens: u32,

    /// Base URL of the generation API.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            memory_dir: PathBuf::from(MEMORY_DIR),
            drafts_dir: PathBuf::from(DRAFTS_DIR),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Resolve the API credential from the process environment.
///
/// Fails with `MissingCredential` when the variable is unset or empty. Called
/// before any network activity so a misconfigured environment never produces
/// a half-run.
pub fn resolve_api_key() -> Result<String> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(LetterpressError::MissingCredential(API_KEY_ENV.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn default_config_uses_fixed_values() {
        let config = Config::default();
        assert_eq!(config.memory_dir, PathBuf::from(".memory"));
        assert_eq!(config.drafts_dir, PathBuf::from("drafts"));
        assert_eq!(config.model, "claude-3-5-sonnet-20241022");
        assert_eq!(config.max_tokens, 4096);
        assert_eq!(config.base_url, "https://api.anthropic.com");
    }

    #[test]
    #[serial]
    fn resolve_api_key_missing_is_an_error() {
        unsafe { std::env::remove_var(API_KEY_ENV) };
        let result = resolve_api_key();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    #[serial]
    fn resolve_api_key_empty_is_an_error() {
        unsafe { std::env::set_var(API_KEY_ENV, "") };
        let result = resolve_api_key();
        unsafe { std::env::remove_var(API_KEY_ENV) };
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn resolve_api_key_present_is_returned() {
        unsafe { std::env::set_var(API_KEY_ENV, "sk-test-key") };
        let key = resolve_api_key().unwrap();
        unsafe { std::env::remove_var(API_KEY_ENV) };
        assert_eq!(key, "sk-test-key");
    }
}
