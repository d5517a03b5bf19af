//! Completion service backed by an Ollama `generate` proxy.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config::{COMPLETION_MODEL, COMPLETION_TIMEOUT_MS, COMPLETION_URL};
use crate::core::CompletionService;
use crate::core::error::{CompletionError, FetchError};
use crate::utils::net::{TimedOut, with_timeout};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Result<String, CompletionError> {
        match (self.response, self.error) {
            (_, Some(error)) => Err(CompletionError::Service(error)),
            (Some(text), None) => Ok(text),
            (None, None) => Ok(String::new()),
        }
    }
}

/// Non-streaming client for `POST {endpoint}` with `{model, prompt, system}`.
#[derive(Clone, Debug)]
pub struct OllamaClient {
    endpoint: String,
    model: String,
    timeout_ms: u32,
}

impl OllamaClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            timeout_ms: COMPLETION_TIMEOUT_MS,
        }
    }

    async fn send(&self, prompt: &str, style: &str) -> Result<String, CompletionError> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            system: style,
            stream: false,
        };

        let response = Request::post(&self.endpoint)
            .json(&body)
            .map_err(|e| FetchError::JsonParseError(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::HttpError(response.status()).into());
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| FetchError::JsonParseError(e.to_string()))?;
        parsed.into_text()
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new(COMPLETION_URL, COMPLETION_MODEL)
    }
}

#[async_trait(?Send)]
impl CompletionService for OllamaClient {
    async fn generate(&self, prompt: &str, style: &str) -> Result<String, CompletionError> {
        match with_timeout(self.send(prompt, style), self.timeout_ms).await {
            Ok(result) => result,
            Err(TimedOut) => {
                log::warn!("Completion request exceeded {} ms", self.timeout_ms);
                Err(CompletionError::Timeout(self.timeout_ms))
            }
        }
    }
}
