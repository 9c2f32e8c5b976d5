//! Environment configuration.
//!
//! All configuration comes from the process environment at startup:
//! - `API_KEY` - Google Generative AI key, required to serve against the
//!   real upstream. Never logged.
//! - `SESSION_SECRET` - cookie-signing secret. Falls back to an insecure
//!   default with a warning; a misconfiguration flag, not an error.
//! - `GEMINI_BASE_URL` / `GEMINI_MODEL` - upstream endpoint knobs.

use tracing::warn;

/// Fallback used when no `SESSION_SECRET` is set. Fine for local
/// development, unacceptable in a deployment.
const DEFAULT_SESSION_SECRET: &str = "default-secret-key";

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Generative AI API key, if set.
    pub api_key: Option<String>,
    /// Secret used to sign session cookies.
    pub session_secret: String,
    /// Base URL of the generation API.
    pub gemini_base_url: String,
    /// Model name passed to the generation API.
    pub gemini_model: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        let api_key = non_empty_var("API_KEY");

        let session_secret = non_empty_var("SESSION_SECRET").unwrap_or_else(|| {
            warn!("SESSION_SECRET is not set; using an insecure default. Set it in production.");
            DEFAULT_SESSION_SECRET.to_string()
        });

        let gemini_base_url = non_empty_var("GEMINI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());
        let gemini_model =
            non_empty_var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        Self {
            api_key,
            session_secret,
            gemini_base_url,
            gemini_model,
        }
    }
}

/// Read an environment variable, treating empty values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
