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

/// Multimodal chat-style backend speaking the Gemini `generateContent` API.
///
/// Reference images travel as inline data parts next to the prompt text and
/// the model is asked for both text and image modalities.
pub struct GeminiGenerator {
    http: Client,
    config: ProviderConfig,
    api_key: String,
}

impl GeminiGenerator {
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
        let model = self.config.model.trim();
        let model_path = if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        };
        format!("{}/{}:generateContent", self.config.base(), model_path)
    }
}

pub(crate) fn build_payload(request: &GenerationRequest) -> Value {
    let mut parts = vec![json!({ "text": request.prompt })];
    for image in &request.images {
        parts.push(json!({
            "inlineData": {
                "mimeType": image.mime_type,
                "data": image.data,
            }
        }));
    }

    let mut payload = json!({
        "contents": [{ "role": "user", "parts": parts }],
        "generationConfig": {
            "responseModalities": ["TEXT", "IMAGE"],
            "imageConfig": { "aspectRatio": request.aspect_ratio() },
        },
    });
    if let Some(system) = &request.system_instruction {
        payload["systemInstruction"] = json!({ "parts": [{ "text": system }] });
    }
    payload
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

pub(crate) fn parse_response(body: &str) -> Result<GenerationResponse, GenerationError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)?;

    let mut texts = Vec::new();
    let mut images = Vec::new();
    for part in parsed
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
    {
        if let Some(text) = part.text.filter(|t| !t.trim().is_empty()) {
            texts.push(text);
        }
        if let Some(inline) = part.inline_data.filter(|d| !d.data.is_empty()) {
            images.push(GeneratedImage {
                mime_type: inline.mime_type,
                data: inline.data,
            });
        }
    }

    Ok(GenerationResponse {
        text: (!texts.is_empty()).then(|| texts.join("\n")),
        images,
    })
}

#[async_trait]
impl ImageGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        debug!(
            model = %self.config.model,
            attachments = request.images.len(),
            "Sending generateContent request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&build_payload(request))
            .send()
            .await?;

        let body = response_text(self.name(), response).await?;
        parse_response(&body)
    }
}
