//! HTTP client for an OpenAI-compatible chat-completions endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::StructurerError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Low temperature keeps the extraction deterministic-ish across runs.
const COMPLETION_TEMPERATURE: f32 = 0.1;

/// Client for one-shot chat completions against an OpenAI-compatible API.
///
/// Use [`CompletionClient::new`] for the public endpoint or
/// [`CompletionClient::with_base_url`] to point at a proxy or a mock server
/// in tests. Requests carry only a connect timeout; a slow completion is
/// waited out rather than aborted.
pub struct CompletionClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
}

impl CompletionClient {
    /// Creates a client pointed at the public OpenAI endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`StructurerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str) -> Result<Self, StructurerError> {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for proxies or wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`StructurerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StructurerError::Extraction`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        base_url: &str,
    ) -> Result<Self, StructurerError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends to the path rather than replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| {
            StructurerError::Extraction(format!("invalid completion base URL '{base_url}': {e}"))
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
        })
    }

    /// Sends one completion request with the fixed extraction prompt and
    /// returns the first choice's message content verbatim. No retry, no
    /// streaming.
    ///
    /// # Errors
    ///
    /// - [`StructurerError::Api`] — non-2xx status, with the response body.
    /// - [`StructurerError::Http`] — network or TLS failure.
    /// - [`StructurerError::Extraction`] — response had no choices.
    pub async fn complete(&self, prompt: &str) -> Result<String, StructurerError> {
        let url = self
            .base_url
            .join("chat/completions")
            .map_err(|e| StructurerError::Extraction(format!("invalid completions path: {e}")))?;

        let body = ChatRequest {
            model: &self.model,
            temperature: COMPLETION_TEMPERATURE,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StructurerError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                StructurerError::Extraction("model response contained no choices".to_string())
            })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}
