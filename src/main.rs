//! Config self-test: load `config.json` and report what is usable.
//!
//! Prints one line per configured platform with a check or warning marker
//! depending on whether an API key is present. Key material is never
//! printed.

use qagent::load_config;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Some(config) = load_config(None) else {
        eprintln!("no usable config.json; copy config.json.example and fill in your API keys");
        std::process::exit(1);
    };

    if config.is_empty() {
        println!("config.json contains no platform sections");
        return;
    }

    println!("Configured API platforms:");
    for (platform, section) in config.platforms() {
        let marker = if section.api_key.is_empty() {
            "⚠️"
        } else {
            "✅"
        };
        let model = if section.model.is_empty() {
            "N/A"
        } else {
            section.model.as_str()
        };
        let base_url = if section.base_url.is_empty() {
            "N/A"
        } else {
            section.base_url.as_str()
        };
        println!("  {marker} {}: {model} @ {base_url}", platform.to_uppercase());
    }
}
