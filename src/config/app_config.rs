use core::fmt;
use std::env;

use config::{Config, ConfigError, Environment, File, Map, Source};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::load().unwrap_or_else(|e| panic!("{}", e)));

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Runtime {
    Dev,
    Prod,
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Runtime::Dev => write!(f, "development"),
            Runtime::Prod => write!(f, "production"),
        }
    }
}

impl From<String> for Runtime {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PRODUCTION" => Runtime::Prod,
            _ => Runtime::Dev,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

fn default_address() -> String {
    "127.0.0.1".into()
}

fn default_port() -> String {
    "3000".into()
}

fn default_allowed_origin() -> String {
    "http://localhost:5173".into()
}

fn default_gemini_domain() -> String {
    "https://generativelanguage.googleapis.com".into()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_gemini_domain")]
    pub domain: String,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            domain: default_gemini_domain(),
            model: default_gemini_model(),
            api_key: None,
        }
    }
}

impl AppConfig {
    fn load() -> Result<Self, ConfigError> {
        let vars: Map<String, String> = env::vars().collect();
        let runtime: Runtime = vars.get("ENVIRONMENT").cloned().unwrap_or_default().into();
        let file = File::with_name(&format!("src/config/{}.toml", runtime)).required(false);

        let config = Self::from_sources(file, vars)?;

        debug!(
            "Loaded {} config: {} (api key present: {})",
            runtime,
            serde_json::to_string_pretty(&config).unwrap_or_default(),
            config.gemini.api_key.is_some()
        );

        Ok(config)
    }

    /// Layers `file`, then `QUIZMASTER__*` variables, then plain `PORT` and
    /// `GEMINI_API_KEY` from `vars`.
    pub fn from_sources<S>(file: S, vars: Map<String, String>) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let port = vars.get("PORT").cloned();
        let api_key = vars
            .get("GEMINI_API_KEY")
            .filter(|k| !k.is_empty())
            .cloned();

        let mut config: AppConfig = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("QUIZMASTER")
                    .separator("__")
                    .source(Some(vars)),
            )
            .set_override_option("server.port", port)?
            .set_override_option("gemini.api_key", api_key)?
            .build()?
            .try_deserialize()?;

        // An empty key counts as missing, whichever layer it came from.
        config.gemini.api_key = config.gemini.api_key.filter(|k| !k.is_empty());

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.address, self.server.port)
    }
}
