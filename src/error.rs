use thiserror::Error;

/// Errors that can occur around nutrition calculation
///
/// The calculation pipeline itself degrades to warnings; these errors cover
/// invalid input, configuration, I/O and the text-generation collaborator.
#[derive(Error, Debug)]
pub enum NutritionError {
    /// Request or argument failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request to a remote service failed
    #[error("Failed to fetch: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Curated nutrition mapping could not be loaded
    #[error("Invalid nutrition mapping: {0}")]
    MappingError(String),

    /// LLM provider setup or request failed
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Generated text could not be coerced into the expected shape
    #[error("Generation failed: {0}")]
    GenerationError(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Reading an input file failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input JSON could not be decoded
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
