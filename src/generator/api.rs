//! Minimal client for the Anthropic Messages API.
//!
//! One blocking request per run: no retries, no backoff, no streaming. The
//! request and response types cover only the fields this tool sends and
//! reads; unknown response fields are ignored.

use crate::error::{LetterpressError, Result};
use serde::{Deserialize, Serialize};

/// API version header value.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Messages endpoint path.
const MESSAGES_PATH: &str = "/v1/messages";

/// Request body for a message creation call.
#[derive(Debug, Serialize)]
pub struct MessageRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<MessageParam>,
}

/// A single input message (role + content string).
#[derive(Debug, Serialize)]
pub struct MessageParam {
    pub role: String,
    pub content: String,
}

impl MessageParam {
    /// A user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        MessageParam {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response body for a message creation call.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub content: Vec<ContentBlock>,
}

impl MessageResponse {
    /// Text of the first `text` content block, if any.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text.as_str())
    }
}

/// One block of response content.
#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

/// Blocking HTTP client for the Messages API.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given credential and API base URL.
    pub fn new(api_key: String, base_url: String) -> Self {
        ApiClient {
            http: reqwest::blocking::Client::new(),
            api_key,
            base_url,
        }
    }

    /// Send one message creation request.
    ///
    /// Any failure (transport error, non-2xx status, undecodable body) is an
    /// `UpstreamError`; the run is over either way.
    pub fn create_message(&self, request: &MessageRequest) -> Result<MessageResponse> {
        let url = format!("{}{}", self.base_url, MESSAGES_PATH);

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(request)
            .send()
            .map_err(|e| LetterpressError::UpstreamError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(LetterpressError::UpstreamError(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }

        response
            .json::<MessageResponse>()
            .map_err(|e| LetterpressError::UpstreamError(format!("malformed response: {}", e)))
    }
}
