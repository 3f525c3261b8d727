//! Stateless chat-completion call-through.

use crate::agent::Agent;
use crate::client::{ChatMessage, ChatRequest};
use crate::error::LlmError;

/// Options for [`get_response`]. Defaults mirror the prompt-engineering
/// use case: deterministic sampling and a 2048-token cap.
#[derive(Debug, Clone)]
pub struct ChatOptions {
    /// Overrides the agent's bound model when set.
    pub model: Option<String>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            model: None,
            temperature: 0.0,
            top_p: 1.0,
            max_tokens: 2048,
        }
    }
}

/// Issue one system + user chat-completion request through `agent`.
///
/// The `system_prompt` argument is forwarded verbatim: an empty string is
/// sent as an empty system message rather than falling back to the agent's
/// stored prompt. This deliberately differs from [`Agent::ask`], which
/// always sends the stored prompt.
///
/// Fails fast with [`LlmError::EmptyPrompt`] when `user_prompt` is empty;
/// no request is made in that case.
pub async fn get_response(
    agent: &Agent,
    system_prompt: &str,
    user_prompt: &str,
    options: &ChatOptions,
) -> Result<String, LlmError> {
    if user_prompt.is_empty() {
        return Err(LlmError::EmptyPrompt);
    }

    let model = options
        .model
        .clone()
        .unwrap_or_else(|| agent.model().to_string());

    let request = ChatRequest {
        model,
        messages: vec![
            ChatMessage::system(system_prompt),
            ChatMessage::user(user_prompt),
        ],
        temperature: options.temperature,
        max_tokens: options.max_tokens,
        top_p: Some(options.top_p),
        stream: false,
    };

    agent.client().chat(&request).await
}
