//! Text generation provider abstraction.
//!
//! The handler only sees the `TextGenerator` trait; the Bedrock
//! implementation and the test mock live behind it.

pub mod bedrock;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

pub use bedrock::BedrockTextGenerator;
pub use mock::MockTextGenerator;

/// Error type for generation calls.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Model invocation failed: {0}")]
    Invoke(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}

/// Decoding parameters sent with every generation request. Fixed per
/// process, never derived from the inbound request.
#[derive(Debug, Clone)]
pub struct DecodingParams {
    pub max_token_count: i32,
    pub temperature: f32,
    pub top_p: f32,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a blog post about `topic`. The returned text may be empty
    /// when the model produced no usable content.
    async fn generate(&self, topic: &str) -> Result<String, GeneratorError>;
}
