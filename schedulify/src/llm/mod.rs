//! Schedule generation via an external text-generation service.
//!
//! [`ScheduleGenerator`] is the seam between the request handlers and the
//! upstream model: the real implementation is [`GeminiGenerator`], tests
//! substitute a stub. One attempt per call, no retry, no added timeout.

mod gemini;
mod prompt;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::GeminiGenerator;
pub use prompt::compose_prompt;

/// Failure from the generation service.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The HTTP request itself failed (connect, TLS, body read).
    #[error("request to generation API failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("generation API returned {status}: {message}")]
    Api { status: u16, message: String },
    /// A 200 response carried no usable generated text.
    #[error("generation API returned no candidates")]
    EmptyResponse,
}

/// A service that turns a composed natural-language instruction into
/// generated schedule text.
#[async_trait]
pub trait ScheduleGenerator: Send + Sync {
    /// Generate text for the given prompt. One attempt; the caller
    /// decides how to surface failure.
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
