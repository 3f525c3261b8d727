use std::io::Write;

use qagent::load_config;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{contents}").expect("write config");
    file
}

#[test]
fn loads_platform_section_from_json() {
    let file = write_config(
        r#"{
            "openai": {
                "api_key": "sk-test",
                "base_url": "https://api.openai.com/v1",
                "model": "gpt-4o-mini"
            }
        }"#,
    );

    let config = load_config(Some(file.path())).expect("config should load");
    let openai = config.platform("openai").expect("openai section");
    assert_eq!(openai.api_key, "sk-test");
    assert_eq!(openai.base_url, "https://api.openai.com/v1");
    assert_eq!(openai.model, "gpt-4o-mini");
}

#[test]
fn malformed_json_yields_none() {
    let file = write_config("{invalid json");
    assert!(load_config(Some(file.path())).is_none());
}

#[test]
fn missing_file_yields_none() {
    let dir = tempfile::tempdir().expect("temp dir");
    assert!(load_config(Some(&dir.path().join("config.json"))).is_none());
}

#[test]
fn partial_sections_load_with_empty_fields() {
    // No schema is enforced at load time; resolution decides usability.
    let file = write_config(r#"{ "openai": { "api_key": "sk-test" } }"#);

    let config = load_config(Some(file.path())).expect("config should load");
    let openai = config.platform("openai").expect("openai section");
    assert_eq!(openai.api_key, "sk-test");
    assert!(openai.base_url.is_empty());
    assert!(openai.model.is_empty());
}

#[test]
fn unknown_platforms_are_preserved() {
    let file = write_config(
        r#"{
            "openai": { "api_key": "a", "base_url": "b", "model": "c" },
            "chatglm": { "api_key": "d", "base_url": "e", "model": "f" }
        }"#,
    );

    let config = load_config(Some(file.path())).expect("config should load");
    assert_eq!(config.platforms().count(), 2);
    assert!(config.platform("chatglm").is_some());
    assert!(config.platform("bedrock").is_none());
}
