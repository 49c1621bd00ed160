use serde::Deserialize;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_IMAGE_MODEL: &str = "gemini-2.5-flash-image-preview";
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const OPENAI_IMAGE_MODEL: &str = "gpt-image-1";

/// Endpoint and model selection for one generation backend.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_base: String,
    pub model: String,
}

impl ProviderConfig {
    pub fn gemini() -> Self {
        Self {
            api_base: GEMINI_API_BASE.into(),
            model: GEMINI_IMAGE_MODEL.into(),
        }
    }

    pub fn openai() -> Self {
        Self {
            api_base: OPENAI_API_BASE.into(),
            model: OPENAI_IMAGE_MODEL.into(),
        }
    }

    /// `api_base` without a trailing slash.
    pub(crate) fn base(&self) -> &str {
        self.api_base.trim().trim_end_matches('/')
    }
}
