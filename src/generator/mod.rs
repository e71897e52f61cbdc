//! Blog draft generation.
//!
//! The generator owns the API credential and the fixed generation parameters.
//! Per run it builds one prompt from the selected memory letter and issues one
//! synchronous request; whatever text comes back is the draft, verbatim. No
//! schema validation and no retries.

pub mod api;
pub mod prompt;

use crate::config::Config;
use crate::error::{LetterpressError, Result};
use api::{ApiClient, MessageParam, MessageRequest};
use chrono::Local;

/// Turns memory letter content into blog draft text via the Anthropic API.
pub struct Generator {
    client: ApiClient,
    model: String,
    max_tokens: u32,
}

impl Generator {
    /// Create a generator with an already-resolved credential.
    ///
    /// Credential resolution happens at the call site (see
    /// `config::resolve_api_key`) so tests can substitute any key.
    pub fn new(api_key: String, config: &Config) -> Self {
        Generator {
            client: ApiClient::new(api_key, config.base_url.clone()),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// Generate a blog draft from memory letter content.
    pub fn generate(&self, memory_content: &str) -> Result<String> {
        let date = Local::now().format("%Y-%m-%d").to_string();
        self.generate_dated(memory_content, &date)
    }

    /// Like [`generate`](Self::generate), with the prompt date supplied by
    /// the caller.
    pub fn generate_dated(&self, memory_content: &str, date: &str) -> Result<String> {
        let request = MessageRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![MessageParam::user(prompt::build_prompt(
                memory_content,
                date,
            ))],
        };

        let response = self.client.create_message(&request)?;

        response
            .text()
            .map(str::to_owned)
            .ok_or_else(|| {
                LetterpressError::UpstreamError("response contained no text content".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config(base_url: &str) -> Config {
        Config {
            memory_dir: PathBuf::from(".memory"),
            drafts_dir: PathBuf::from("drafts"),
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 64,
            base_url: base_url.to_string(),
        }
    }

    #[test]
    fn generate_surfaces_transport_failure_as_upstream_error() {
        // Nothing listens here; exactly one attempt, then a fatal error.
        let generator = Generator::new("sk-test".to_string(), &test_config("http://127.0.0.1:1"));
        let err = generator
            .generate_dated("session notes", "2024-05-10")
            .unwrap_err();
        assert!(matches!(err, LetterpressError::UpstreamError(_)));
    }
}
