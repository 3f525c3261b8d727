//! Credential-bound chat agent.

use tracing::info;

use crate::client::{ChatClient, ChatMessage, ChatRequest};
use crate::config::{self, Config};
use crate::credentials::{self, Overrides};
use crate::error::LlmError;

/// System prompt used when the builder is not given one.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a capable assistant. Answer any question the user asks.";

const DEFAULT_PLATFORM: &str = "openai";

/// Sampling parameters for [`Agent::ask_with`].
#[derive(Debug, Clone)]
pub struct AskOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AskOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2048,
        }
    }
}

/// A resolved set of credentials plus the HTTP client bound to them.
///
/// Read-only after construction, except for the system prompt which may be
/// replaced via [`Agent::update_system_prompt`]. Construction fails rather
/// than producing an agent with a missing key, URL or model.
#[derive(Debug)]
pub struct Agent {
    model: String,
    platform: String,
    system_prompt: String,
    client: ChatClient,
}

impl Agent {
    pub fn builder() -> AgentBuilder {
        AgentBuilder::default()
    }

    /// Convenience constructor: resolve everything from `platform`'s config
    /// section, loading the config file when none is supplied.
    pub fn from_platform(platform: &str, config: Option<Config>) -> Result<Self, LlmError> {
        let mut builder = Self::builder().platform(platform);
        if let Some(config) = config {
            builder = builder.config(config);
        }
        builder.build()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// The HTTP client handle bound at construction time.
    pub fn client(&self) -> &ChatClient {
        &self.client
    }

    /// Ask a single-turn question with default sampling parameters
    /// (temperature 0.7, 2048 max tokens).
    pub async fn ask(&self, question: &str) -> Result<String, LlmError> {
        self.ask_with(question, &AskOptions::default()).await
    }

    /// Ask a single-turn question. The agent's stored system prompt is
    /// always sent; contrast with [`get_response`](crate::get_response),
    /// which forwards its system-prompt argument verbatim.
    pub async fn ask_with(
        &self,
        question: &str,
        options: &AskOptions,
    ) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(self.system_prompt.clone()),
                ChatMessage::user(question),
            ],
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            top_p: None,
            stream: false,
        };

        self.client.chat(&request).await
    }

    /// Replace the stored system prompt. No validation is applied.
    pub fn update_system_prompt(&mut self, system_prompt: impl Into<String>) {
        self.system_prompt = system_prompt.into();
        info!("system prompt updated");
    }
}

/// Builder for [`Agent`].
///
/// Explicit `api_key`/`base_url`/`model` values take precedence over the
/// platform's config section; see [`credentials::resolve`] for the layering.
#[derive(Debug, Default)]
pub struct AgentBuilder {
    overrides: Overrides,
    platform: Option<String>,
    config: Option<Config>,
    system_prompt: Option<String>,
}

impl AgentBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.overrides.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.overrides.base_url = Some(base_url.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.overrides.model = Some(model.into());
        self
    }

    /// Platform section to read from the config. Defaults to `"openai"`.
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Use a pre-loaded config instead of probing the filesystem.
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    /// Resolve credentials and bind the HTTP client.
    ///
    /// When no config was supplied, the config file is loaded via
    /// [`config::load_config`]; if that also fails, all three credential
    /// fields must have been set explicitly.
    pub fn build(self) -> Result<Agent, LlmError> {
        let platform = self
            .platform
            .unwrap_or_else(|| DEFAULT_PLATFORM.to_string());
        let config = self.config.or_else(|| config::load_config(None));

        let creds = credentials::resolve(&self.overrides, &platform, config.as_ref())?;
        let client = ChatClient::new(creds.api_key, creds.base_url)?;

        info!(
            platform = %platform,
            model = %creds.model,
            base_url = %client.base_url(),
            "agent ready"
        );

        Ok(Agent {
            model: creds.model,
            platform,
            system_prompt: self
                .system_prompt
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            client,
        })
    }
}
