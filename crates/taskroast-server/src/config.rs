//! Service configuration.
//!
//! Everything is resolved from the environment once at startup and handed to
//! each component explicitly; nothing reads ambient state after that.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty.
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP bind address.
    pub bind_addr: String,

    /// Postgres connection string. The pipeline only ever reads.
    pub database_url: String,

    /// Pre-shared secret the scheduled trigger must present as a bearer
    /// token.
    pub cron_secret: String,

    /// Gemini API key.
    pub gemini_api_key: String,

    /// Gemini model override; the client's default applies when unset.
    pub gemini_model: Option<String>,

    /// Resend API key.
    pub resend_api_key: String,

    /// Sender address for roast emails.
    pub from_address: String,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: optional("TASKROAST_BIND_ADDR")
                .unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            database_url: required("DATABASE_URL")?,
            cron_secret: required("CRON_SECRET")?,
            gemini_api_key: required("GEMINI_API_KEY")?,
            gemini_model: optional("GEMINI_MODEL"),
            resend_api_key: required("RESEND_API_KEY")?,
            from_address: optional("ROAST_FROM_ADDRESS")
                .unwrap_or_else(|| "onboarding@resend.dev".to_string()),
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::Missing(name))
}

fn optional(name: &'static str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
