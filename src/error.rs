use thiserror::Error;

/// Errors raised by the outer surfaces (generation, configuration, CLI input).
///
/// The parsing core never fails: malformed recipe text degrades to
/// placeholders instead of producing one of these.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// HTTP request to a generation provider failed
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The provider answered, but not with something we can use
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// No recipe text to work with
    #[error("Empty recipe text: {0}")]
    EmptyInput(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Reading recipe text from disk or stdin failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvError(#[from] std::env::VarError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
