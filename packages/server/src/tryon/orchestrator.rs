//! Drives one virtual try-on from validation to the persisted result.
//!
//! Stage order: validate, resolve the garment and build prompts, then try the
//! primary provider, the fallback provider, or (without a credential) the
//! placeholder renderer, and finally persist. Primary failures are absorbed
//! into the fallback; a fallback failure is fatal.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use imagegen::{
    GeminiGenerator, GenerationError, GenerationRequest, ImageGenerator, InputImage,
    OpenAiImageGenerator,
};
use sea_orm::{ConnectionTrait, DbErr};
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use super::catalog::describe_garment;
use super::mock::render_placeholder;
use super::prompt::{Components, PromptInput, PromptPair, SYSTEM_INSTRUCTION, build_prompts};
use super::style::{BlouseStyle, Pose, join_values};
use crate::config::{GenerationConfig, TryOnConfig};
use crate::entity::tryon_result;
use crate::models::tryon::TryOnRequest;
use crate::store::TryOnStore;

#[derive(Debug, Error)]
pub enum TryOnError {
    #[error("Invalid pose_style. Must be one of: {allowed}")]
    InvalidPose { allowed: String },

    #[error("Invalid blouse_style. Must be one of: {allowed}")]
    InvalidBlouseStyle { allowed: String },

    #[error("Image generation failed: {0}")]
    Generation(#[source] GenerationError),

    #[error("Placeholder rendering failed: {0}")]
    Placeholder(#[from] image::ImageError),

    #[error("Database error: {0}")]
    Store(#[from] DbErr),
}

/// Which stage produced the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationSource {
    Primary,
    Fallback,
    Placeholder,
}

/// The provider pair used when a credential is configured.
#[derive(Clone)]
pub struct Generators {
    pub primary: Arc<dyn ImageGenerator>,
    pub fallback: Arc<dyn ImageGenerator>,
}

impl Generators {
    /// Build the HTTP-backed providers, or `None` without a usable credential.
    pub fn from_config(config: &GenerationConfig) -> Result<Option<Self>, GenerationError> {
        let Some(api_key) = config.credential() else {
            return Ok(None);
        };
        let timeout = Duration::from_secs(config.timeout_secs);

        Ok(Some(Self {
            primary: Arc::new(GeminiGenerator::new(
                config.primary.clone(),
                api_key,
                timeout,
            )?),
            fallback: Arc::new(OpenAiImageGenerator::new(
                config.fallback.clone(),
                api_key,
                timeout,
            )?),
        }))
    }
}

/// Request fields after validation and normalization.
#[derive(Debug, Clone)]
struct ValidatedRequest {
    pose: Pose,
    blouse: BlouseStyle,
    images: Vec<InputImage>,
    components: Components,
    saree_item_id: Option<String>,
    session_id: Option<String>,
}

/// Outcome of a single provider call.
enum Attempt {
    Generated(String),
    Empty,
    Failed(GenerationError),
}

pub struct TryOnOutcome {
    pub result: tryon_result::Model,
    pub prompts: PromptPair,
    pub source: GenerationSource,
}

pub struct Orchestrator {
    generators: Option<Generators>,
    allowed_poses: Vec<Pose>,
    timeout: Duration,
    width: u32,
    height: u32,
}

impl Orchestrator {
    pub fn new(
        generators: Option<Generators>,
        tryon: &TryOnConfig,
        generation: &GenerationConfig,
    ) -> Self {
        Self {
            generators,
            allowed_poses: tryon.allowed_poses.clone(),
            timeout: Duration::from_secs(generation.timeout_secs),
            width: generation.image_width,
            height: generation.image_height,
        }
    }

    pub fn from_config(
        tryon: &TryOnConfig,
        generation: &GenerationConfig,
    ) -> Result<Self, GenerationError> {
        let generators = Generators::from_config(generation)?;
        Ok(Self::new(generators, tryon, generation))
    }

    /// Override the per-call provider timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// True when no credential is configured and placeholders are produced.
    pub fn uses_placeholders(&self) -> bool {
        self.generators.is_none()
    }

    fn validate(&self, request: TryOnRequest) -> Result<ValidatedRequest, TryOnError> {
        let pose = request
            .pose_style
            .parse::<Pose>()
            .ok()
            .filter(|pose| self.allowed_poses.contains(pose))
            .ok_or_else(|| TryOnError::InvalidPose {
                allowed: join_values(&self.allowed_poses),
            })?;
        let blouse = request
            .blouse_style
            .parse::<BlouseStyle>()
            .map_err(|_| TryOnError::InvalidBlouseStyle {
                allowed: join_values(BlouseStyle::ALL),
            })?;

        let body = supplied(request.saree_body_base64);
        let pallu = supplied(request.saree_pallu_base64);
        let border = supplied(request.saree_border_base64);
        let components = Components {
            body: body.is_some(),
            pallu: pallu.is_some(),
            border: border.is_some(),
        };
        let images = [body, pallu, border]
            .into_iter()
            .flatten()
            .map(|data| InputImage::from_base64(&data))
            .collect();

        Ok(ValidatedRequest {
            pose,
            blouse,
            images,
            components,
            saree_item_id: non_empty(request.saree_item_id),
            session_id: non_empty(request.session_id),
        })
    }

    #[instrument(skip_all, fields(pose = %request.pose_style, blouse = %request.blouse_style))]
    pub async fn run<C: ConnectionTrait>(
        &self,
        conn: &C,
        request: TryOnRequest,
    ) -> Result<TryOnOutcome, TryOnError> {
        let request = self.validate(request)?;
        let store = TryOnStore::new(conn);

        let garment = describe_garment(&store, request.saree_item_id.as_deref()).await;
        let prompts = build_prompts(&PromptInput {
            pose: request.pose,
            blouse: request.blouse,
            garment: &garment,
            components: request.components,
            session_id: request.session_id.as_deref(),
            width: self.width,
            height: self.height,
        });

        let (image, source) = self.generate(&request, &prompts).await?;

        let result = tryon_result::Model {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: uuid::Uuid::new_v4().to_string(),
            result_image_base64: image,
            pose_style: request.pose,
            blouse_style: request.blouse,
            has_body: request.components.body,
            has_pallu: request.components.pallu,
            has_border: request.components.border,
            saree_item_id: request.saree_item_id,
            is_favorite: false,
            created_at: Utc::now(),
        };
        let result = store.insert_result(result).await?;
        info!(tryon_id = %result.id, ?source, "Virtual try-on completed");

        Ok(TryOnOutcome {
            result,
            prompts,
            source,
        })
    }

    async fn generate(
        &self,
        request: &ValidatedRequest,
        prompts: &PromptPair,
    ) -> Result<(String, GenerationSource), TryOnError> {
        let Some(generators) = &self.generators else {
            let image = render_placeholder(request.pose, request.blouse, self.width, self.height)?;
            return Ok((image, GenerationSource::Placeholder));
        };

        let primary_request = GenerationRequest {
            prompt: prompts.for_primary(!request.images.is_empty()).to_string(),
            system_instruction: Some(SYSTEM_INSTRUCTION.to_string()),
            images: request.images.clone(),
            width: self.width,
            height: self.height,
        };
        match self.attempt(generators.primary.as_ref(), &primary_request).await {
            Attempt::Generated(image) => return Ok((image, GenerationSource::Primary)),
            Attempt::Empty => {
                warn!(
                    provider = generators.primary.name(),
                    "Primary provider returned no images, trying fallback"
                );
            }
            Attempt::Failed(e) => {
                warn!(
                    provider = generators.primary.name(),
                    transport = e.is_transport(),
                    error = %e,
                    "Primary provider failed, trying fallback"
                );
            }
        }

        let fallback_request = GenerationRequest {
            prompt: prompts.text_only.clone(),
            system_instruction: None,
            images: Vec::new(),
            width: self.width,
            height: self.height,
        };
        match self.attempt(generators.fallback.as_ref(), &fallback_request).await {
            Attempt::Generated(image) => Ok((image, GenerationSource::Fallback)),
            Attempt::Empty => {
                error!(
                    provider = generators.fallback.name(),
                    "Fallback provider returned no images"
                );
                Err(TryOnError::Generation(GenerationError::Empty))
            }
            Attempt::Failed(e) => {
                error!(
                    provider = generators.fallback.name(),
                    error = %e,
                    "Fallback generation also failed"
                );
                Err(TryOnError::Generation(e))
            }
        }
    }

    async fn attempt(&self, generator: &dyn ImageGenerator, request: &GenerationRequest) -> Attempt {
        info!(
            provider = generator.name(),
            attachments = request.images.len(),
            "Requesting image generation"
        );
        match tokio::time::timeout(self.timeout, generator.generate(request)).await {
            Err(_) => Attempt::Failed(GenerationError::Timeout(self.timeout)),
            Ok(Err(e)) => Attempt::Failed(e),
            Ok(Ok(response)) => match response.into_first_image() {
                Some(image) => Attempt::Generated(image.data),
                None => Attempt::Empty,
            },
        }
    }
}

/// An image field counts as supplied unless it is absent or `""`.
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
