use config::{File, FileFormat, Map};

use crate::config::app_config::AppConfig;

const FILE: &str = r#"
[server]
address = "0.0.0.0"
port = "3000"

[cors]
allowed_origin = "http://file.example"

[gemini]
model = "gemini-file"
api_key = "file-key"
"#;

fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn load(pairs: &[(&str, &str)]) -> AppConfig {
    AppConfig::from_sources(File::from_str(FILE, FileFormat::Toml), vars(pairs)).unwrap()
}

#[test]
fn defaults_apply_without_sources() {
    let config = AppConfig::from_sources(File::from_str("", FileFormat::Toml), Map::new()).unwrap();

    assert_eq!(config.bind_address(), "127.0.0.1:3000");
    assert_eq!(config.cors.allowed_origin, "http://localhost:5173");
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    assert_eq!(config.gemini.api_key, None);
}

#[test]
fn file_values_are_loaded() {
    let config = load(&[]);

    assert_eq!(config.bind_address(), "0.0.0.0:3000");
    assert_eq!(config.cors.allowed_origin, "http://file.example");
    assert_eq!(config.gemini.api_key.as_deref(), Some("file-key"));
}

#[test]
fn prefixed_env_overrides_file() {
    let config = load(&[
        ("QUIZMASTER__SERVER__PORT", "4000"),
        ("QUIZMASTER__CORS__ALLOWED_ORIGIN", "http://env.example"),
        ("QUIZMASTER__GEMINI__API_KEY", "env-key"),
    ]);

    assert_eq!(config.server.port, "4000");
    assert_eq!(config.cors.allowed_origin, "http://env.example");
    assert_eq!(config.gemini.api_key.as_deref(), Some("env-key"));
    assert_eq!(config.gemini.model, "gemini-file");
}

#[test]
fn plain_variables_override_prefixed_env() {
    let config = load(&[
        ("QUIZMASTER__SERVER__PORT", "4000"),
        ("PORT", "5000"),
        ("QUIZMASTER__GEMINI__API_KEY", "env-key"),
        ("GEMINI_API_KEY", "plain-key"),
    ]);

    assert_eq!(config.server.port, "5000");
    assert_eq!(config.gemini.api_key.as_deref(), Some("plain-key"));
}

#[test]
fn empty_prefixed_key_counts_as_missing() {
    let config = AppConfig::from_sources(
        File::from_str("", FileFormat::Toml),
        vars(&[("QUIZMASTER__GEMINI__API_KEY", "")]),
    )
    .unwrap();

    assert_eq!(config.gemini.api_key, None);
}

#[test]
fn empty_plain_key_falls_back_to_lower_layers() {
    let config = load(&[("GEMINI_API_KEY", "")]);
    assert_eq!(config.gemini.api_key.as_deref(), Some("file-key"));

    let config = AppConfig::from_sources(
        File::from_str("", FileFormat::Toml),
        vars(&[("GEMINI_API_KEY", "")]),
    )
    .unwrap();
    assert_eq!(config.gemini.api_key, None);
}
