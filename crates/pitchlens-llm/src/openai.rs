//! OpenAI-compatible chat-completion provider
//!
//! Submits single-turn, single-user-message requests to a hosted
//! chat-completion endpoint and returns the first choice's text. One blocking
//! round-trip per call; no retry on transient failure, no timeout override
//! beyond the HTTP client's default.
//!
//! # Examples
//!
//! ```no_run
//! use pitchlens_llm::{ApiKey, OpenAiProvider};
//!
//! let key = ApiKey::new("sk-...");
//! let provider = OpenAiProvider::new("https://api.openai.com", "gpt-4o-mini", key);
//! ```

use crate::LlmError;
use pitchlens_domain::traits::CompletionProvider;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default sampling temperature (deterministic)
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

/// API credential, acquired once at process start and never mutated.
///
/// The `Debug` output is redacted and the buffer is cleared on drop.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw credential string
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the raw credential for request construction
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl Drop for ApiKey {
    fn drop(&mut self) {
        self.0.clear();
    }
}

/// Hosted chat-completion API provider
pub struct OpenAiProvider {
    endpoint: String,
    model: String,
    temperature: f32,
    api_key: ApiKey,
    client: reqwest::blocking::Client,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

/// A single chat message
#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// One completion choice
#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiProvider {
    /// Create a new provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g., "https://api.openai.com")
    /// - `model`: Model identifier (e.g., "gpt-4o-mini")
    /// - `api_key`: Bearer credential for the endpoint
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            api_key,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Create a provider against the default endpoint
    pub fn default_endpoint(model: impl Into<String>, api_key: ApiKey) -> Self {
        Self::new(DEFAULT_ENDPOINT, model, api_key)
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// The configured model identifier
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl CompletionProvider for OpenAiProvider {
    type Error = LlmError;

    /// Submit a single user-role message and return the first choice's text
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is unreachable, the credential is
    /// rejected, the model is unknown, or the response shape is malformed.
    fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        let url = format!("{}/v1/chat/completions", self.endpoint.trim_end_matches('/'));

        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose())
            .json(&request_body)
            .send()
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Authentication(body));
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!("HTTP {}: {}", status, body)));
        }

        let chat_response: ChatResponse = response
            .json()
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))
    }
}
