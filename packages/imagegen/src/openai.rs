use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::config::ProviderConfig;
use crate::error::GenerationError;
use crate::http::{build_client, response_text};
use crate::traits::ImageGenerator;
use crate::types::{GeneratedImage, GenerationRequest, GenerationResponse};

/// Text-to-image backend speaking the OpenAI `images/generations` API.
///
/// Reference images are not sent; the prompt has to carry the design.
pub struct OpenAiImageGenerator {
    http: Client,
    config: ProviderConfig,
    api_key: String,
}

impl OpenAiImageGenerator {
    pub fn new(
        config: ProviderConfig,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        Ok(Self {
            http: build_client(timeout)?,
            config,
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/images/generations", self.config.base())
    }
}

pub(crate) fn build_payload(model: &str, request: &GenerationRequest) -> Value {
    json!({
        "model": model,
        "prompt": request.prompt,
        "n": 1,
        "size": request.size(),
    })
}

#[derive(Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Deserialize)]
struct ImageData {
    b64_json: Option<String>,
    revised_prompt: Option<String>,
}

pub(crate) fn parse_response(body: &str) -> Result<GenerationResponse, GenerationError> {
    let parsed: ImagesResponse = serde_json::from_str(body)?;

    let mut text = None;
    let mut images = Vec::new();
    for item in parsed.data {
        if text.is_none() {
            text = item.revised_prompt;
        }
        if let Some(data) = item.b64_json.filter(|d| !d.is_empty()) {
            images.push(GeneratedImage {
                mime_type: "image/png".into(),
                data,
            });
        }
    }

    Ok(GenerationResponse { text, images })
}

#[async_trait]
impl ImageGenerator for OpenAiImageGenerator {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        debug!(model = %self.config.model, size = %request.size(), "Sending image generation request");

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&build_payload(&self.config.model, request))
            .send()
            .await?;

        let body = response_text(self.name(), response).await?;
        parse_response(&body)
    }
}
