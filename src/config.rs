//! JSON config loading for per-platform API credentials.
//!
//! The config file is a top-level mapping from platform name to an object
//! with `api_key`, `base_url` and `model` fields. No schema is enforced
//! beyond that shape; missing fields deserialize to empty strings and are
//! rejected later, during credential resolution, where the error can name
//! the platform that needs them.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

const CONFIG_FILE: &str = "config.json";
const CONFIG_DIR: &str = "qagent";

/// Credentials and model selection for one named platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub model: String,
}

/// Parsed contents of `config.json`: platform name mapped to its section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Config(HashMap<String, PlatformConfig>);

impl Config {
    /// Look up the section for a named platform.
    pub fn platform(&self, name: &str) -> Option<&PlatformConfig> {
        self.0.get(name)
    }

    /// Iterate over all configured platforms.
    pub fn platforms(&self) -> impl Iterator<Item = (&str, &PlatformConfig)> {
        self.0.iter().map(|(name, section)| (name.as_str(), section))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Candidate locations probed when no explicit path is given, in priority
/// order. The first existing file wins.
fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = vec![
        PathBuf::from(CONFIG_FILE),
        Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_FILE),
        Path::new(CONFIG_DIR).join(CONFIG_FILE),
        Path::new("..").join(CONFIG_DIR).join(CONFIG_FILE),
    ];
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(CONFIG_DIR).join(CONFIG_FILE));
    }
    candidates
}

/// Load API configuration from a JSON file.
///
/// With `path` set, that file is used directly; otherwise a fixed priority
/// list of candidate locations is probed. All failures (no candidate found,
/// unreadable file, malformed JSON) are reported as diagnostics and yield
/// `None`; this function never returns an error to the caller.
pub fn load_config(path: Option<&Path>) -> Option<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match candidate_paths().into_iter().find(|p| p.exists()) {
            Some(path) => path,
            None => {
                warn!(
                    "no {CONFIG_FILE} found; copy config.json.example next to the crate root and fill in your API keys"
                );
                return None;
            }
        },
    };

    let path = std::path::absolute(&path).unwrap_or(path);
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read config file");
            return None;
        }
    };

    match serde_json::from_str::<Config>(&raw) {
        Ok(config) => {
            info!(path = %path.display(), "loaded config");
            Some(config)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "config file is not valid JSON");
            None
        }
    }
}
