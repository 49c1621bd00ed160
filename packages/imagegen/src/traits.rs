use async_trait::async_trait;

use crate::error::GenerationError;
use crate::types::{GenerationRequest, GenerationResponse};

/// A backend able to turn a prompt (and optional reference images) into images.
///
/// An `Ok` response may legitimately carry no images; deciding whether that is
/// a failure is left to the caller.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Short provider label used in logs.
    fn name(&self) -> &str;

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError>;
}
