//! # qagent
//!
//! Minimal glue for calling OpenAI-compatible chat-completion APIs from
//! notebook-style exercises without repeating client setup: per-platform
//! credentials come from a `config.json` file, an [`Agent`] binds them to
//! an HTTP client, and [`get_response`] is a stateless call-through for
//! prompt experiments.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qagent::Agent;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads the "openai" section of config.json.
//!     let agent = Agent::builder().platform("openai").build()?;
//!
//!     let answer = agent.ask("Share a fun fact about Rust programming.").await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! Explicit credentials always win over the config file:
//!
//! ```rust,no_run
//! use qagent::Agent;
//!
//! # fn main() -> Result<(), qagent::LlmError> {
//! let agent = Agent::builder()
//!     .api_key("sk-...")
//!     .base_url("https://api.openai.com/v1")
//!     .model("gpt-4o-mini")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod chat;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;

pub use agent::{Agent, AgentBuilder, AskOptions, DEFAULT_SYSTEM_PROMPT};
pub use chat::{ChatOptions, get_response};
pub use client::{ChatClient, ChatMessage, ChatRequest, ChatRole};
pub use config::{Config, PlatformConfig, load_config};
pub use credentials::{Credentials, Overrides};
pub use error::LlmError;
