pub mod client;
pub mod gemini_adapter;
pub mod templates;
pub mod types;

pub use client::{split_ideas, GenerationClient, PLACEHOLDER};
pub use gemini_adapter::{GeminiBackend, GeminiConfig};
pub use templates::{GenerationRequest, Template};
pub use types::{GenerateContentRequest, GenerateContentResponse, GenerationError, GenerativeBackend};
