use thiserror::Error;

/// Errors surfaced by configuration resolution and chat-completion calls.
///
/// Construction-time problems (incomplete credentials, an unbuildable HTTP
/// client) and call-time problems (transport, API, parsing) share this one
/// enum so callers can match on the failure programmatically.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Credential resolution left one or more fields empty.
    #[error(
        "missing {platform} credentials: {}. Pass api_key, base_url and model explicitly, or add a \"{platform}\" section to config.json (see config.json.example)",
        .fields.join(", ")
    )]
    MissingCredentials {
        platform: String,
        fields: Vec<&'static str>,
    },

    /// The request never produced an HTTP response.
    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The API answered with a non-success status.
    #[error("{message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    /// The response body could not be interpreted.
    #[error("{message}")]
    Parse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `get_response` was called with an empty user prompt.
    #[error("user prompt must not be empty")]
    EmptyPrompt,

    /// The underlying HTTP client could not be constructed.
    #[error("provider configuration error: {0}")]
    ProviderConfiguration(String),
}
