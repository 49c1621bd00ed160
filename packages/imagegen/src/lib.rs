//! Provider-agnostic image generation.
//!
//! Callers build a [`GenerationRequest`], hand it to any [`ImageGenerator`] and
//! get back zero or more base64-encoded images. Two HTTP adapters ship with the
//! crate: [`GeminiGenerator`] for multimodal chat-style models and
//! [`OpenAiImageGenerator`] for plain text-to-image endpoints.

pub mod config;
pub mod error;
pub mod gemini;
mod http;
pub mod openai;
pub mod traits;
pub mod types;

pub use config::ProviderConfig;
pub use error::GenerationError;
pub use gemini::GeminiGenerator;
pub use openai::OpenAiImageGenerator;
pub use traits::ImageGenerator;
pub use types::{GeneratedImage, GenerationRequest, GenerationResponse, InputImage};
