//! Bedrock Titan text provider implementation.

use super::{DecodingParams, GeneratorError, TextGenerator};
use crate::config::GenerationConfig;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde::{Deserialize, Serialize};

pub struct BedrockTextGenerator {
    client: Client,
    model_id: String,
    params: DecodingParams,
}

impl BedrockTextGenerator {
    pub fn new(client: Client, config: &GenerationConfig) -> Self {
        Self {
            client,
            model_id: config.model_id.clone(),
            params: DecodingParams {
                max_token_count: config.max_token_count,
                temperature: config.temperature,
                top_p: config.top_p,
            },
        }
    }

    fn build_prompt(topic: &str) -> String {
        format!("Write a 200-word blog on the topic: {}.", topic)
    }
}

#[async_trait]
impl TextGenerator for BedrockTextGenerator {
    async fn generate(&self, topic: &str) -> Result<String, GeneratorError> {
        let request = TitanRequest {
            input_text: Self::build_prompt(topic),
            text_generation_config: TitanGenerationConfig {
                max_token_count: self.params.max_token_count,
                temperature: self.params.temperature,
                top_p: self.params.top_p,
            },
        };

        let body = serde_json::to_vec(&request)
            .map_err(|e| GeneratorError::Invoke(format!("Failed to encode request: {}", e)))?;

        tracing::debug!(
            model_id = %self.model_id,
            topic_len = topic.len(),
            "Sending request to Bedrock"
        );

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| GeneratorError::Invoke(e.to_string()))?;

        let parsed: TitanResponse = serde_json::from_slice(response.body().as_ref())
            .map_err(|e| GeneratorError::MalformedResponse(e.to_string()))?;

        // First result's outputText; an unexpected shape degrades to empty.
        let text = parsed
            .results
            .into_iter()
            .next()
            .map(|r| r.output_text)
            .unwrap_or_default();

        tracing::debug!(output_len = text.len(), "Received Bedrock response");

        Ok(text)
    }
}

// ============================================================================
// Titan API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TitanRequest {
    input_text: String,
    text_generation_config: TitanGenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TitanGenerationConfig {
    max_token_count: i32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TitanResponse {
    #[serde(default)]
    results: Vec<TitanTextResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TitanTextResult {
    #[serde(default)]
    output_text: String,
}
