use async_trait::async_trait;
use thiserror::Error;

/// Every way a generation call can fail.
///
/// Callers are expected to treat this as one error kind and show its
/// `Display` text; the variants exist for logging and tests.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no API key configured (set GOOGLE_API_KEY)")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Request(String),

    #[error("model API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("prompt was blocked by the model: {0}")]
    Blocked(String),

    #[error("model response contained no text")]
    EmptyResponse,

    #[error("could not decode model response: {0}")]
    Decode(String),
}

impl GenerationError {
    /// Message shown by the UI shells when a plan could not be generated.
    pub fn user_message(&self) -> String {
        format!("Please try again. Error: {self}")
    }
}

/// The outbound text-generation call.
///
/// `GeminiGenerator` talks to the hosted API.
/// `MockGenerator` returns canned results for tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Send one prompt and return the full generated text.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
