use thiserror::Error;

/// Errors surfaced to whoever asked for content. Underlying causes are
/// logged, never carried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("API key not set. Please provide your API key.")] Unconfigured,
    #[error("Failed to generate content. Please try again.")] GenerationFailed,
    #[error("Failed to parse generated content")] ParseFailed,
}
