//! HTTP client for OpenAI-compatible chat-completion endpoints.
//!
//! One POST per call, no retries. The wire format is the common
//! `/chat/completions` shape: a message list in, the assistant's text at
//! `choices[0].message.content` out.

use serde::{Deserialize, Serialize};

use crate::error::LlmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// A single chat-completion request. `top_p` is omitted from the wire when
/// unset; `stream` is always sent explicitly.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}

/// HTTP handle bound to an `(api_key, base_url)` pair at construction.
/// Its lifetime equals the owning [`Agent`](crate::Agent)'s.
#[derive(Debug)]
pub struct ChatClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl ChatClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("qagent/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                LlmError::ProviderConfiguration(format!("failed to build reqwest client: {e}"))
            })?;

        Ok(Self {
            api_key,
            base_url,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one chat-completion request and return the assistant's text.
    pub async fn chat(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        );

        let res = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::Network {
                message: format!("request to {url} failed"),
                source: Box::new(e),
            })?;

        let status = res.status();
        if !status.is_success() {
            let body = res
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(LlmError::Api {
                message: format!("chat completion returned {status}: {body}"),
                status_code: Some(status.as_u16()),
            });
        }

        let body: ChatCompletionResponse = res.json().await.map_err(|e| LlmError::Parse {
            message: "failed to parse chat completion response".to_string(),
            source: Some(Box::new(e)),
        })?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::Parse {
                message: "chat completion response contained no choices".to_string(),
                source: None,
            })
    }
}
