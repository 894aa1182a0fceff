//! Service configuration read from the environment.

use std::env;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DEFAULT_DATABASE: &str = "TripForU";
const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// When unset the service runs on in-memory stores.
    pub mongodb_uri: Option<String>,
    pub mongodb_database: String,
    /// When unset the AI endpoint answers 503.
    pub gemini: Option<GeminiConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            mongodb_uri: None,
            mongodb_database: DEFAULT_DATABASE.to_string(),
            gemini: None,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let gemini = non_empty_var("GEMINI_API_KEY").map(|api_key| GeminiConfig {
            api_key,
            model: non_empty_var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            api_base: non_empty_var("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            timeout_secs: non_empty_var("GEMINI_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_GEMINI_TIMEOUT_SECS),
        });

        Self {
            host: non_empty_var("HOST").unwrap_or(defaults.host),
            port: non_empty_var("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            mongodb_uri: non_empty_var("MONGODB_URI"),
            mongodb_database: non_empty_var("MONGODB_DATABASE").unwrap_or(defaults.mongodb_database),
            gemini,
        }
    }
}
