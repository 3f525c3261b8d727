//! Layered credential resolution.
//!
//! Each of `api_key`, `base_url` and `model` resolves independently:
//! an explicit override wins, otherwise the value comes from the platform's
//! config section. Empty strings count as absent at every layer.

use crate::config::Config;
use crate::error::LlmError;

/// Caller-supplied credential values. Highest precedence layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

/// A fully-populated credential record. Every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

/// Resolve credentials for `platform` from the override and config layers.
///
/// Returns the populated record, or [`LlmError::MissingCredentials`] naming
/// the platform and exactly the fields that no layer provided.
pub fn resolve(
    overrides: &Overrides,
    platform: &str,
    config: Option<&Config>,
) -> Result<Credentials, LlmError> {
    let section = config.and_then(|config| config.platform(platform));

    let api_key = pick(
        overrides.api_key.as_deref(),
        section.map(|s| s.api_key.as_str()),
    );
    let base_url = pick(
        overrides.base_url.as_deref(),
        section.map(|s| s.base_url.as_str()),
    );
    let model = pick(overrides.model.as_deref(), section.map(|s| s.model.as_str()));

    let mut missing = Vec::new();
    if api_key.is_none() {
        missing.push("api_key");
    }
    if base_url.is_none() {
        missing.push("base_url");
    }
    if model.is_none() {
        missing.push("model");
    }

    match (api_key, base_url, model) {
        (Some(api_key), Some(base_url), Some(model)) => Ok(Credentials {
            api_key,
            base_url,
            model,
        }),
        _ => Err(LlmError::MissingCredentials {
            platform: platform.to_string(),
            fields: missing,
        }),
    }
}

fn pick(explicit: Option<&str>, fallback: Option<&str>) -> Option<String> {
    explicit
        .filter(|value| !value.is_empty())
        .or_else(|| fallback.filter(|value| !value.is_empty()))
        .map(str::to_string)
}
