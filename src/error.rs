use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForcedelError {
    #[error("Unknown script type: {0} (expected powershell or batch)")]
    UnknownScriptType(String),

    #[error("Unsupported output language: {0} (expected en or fa)")]
    UnsupportedLanguage(String),

    #[error("AI analysis unavailable: {0}")]
    AnalysisUnavailable(String),

    #[error("AI analysis timeout after {timeout} seconds")]
    AnalysisTimeout { timeout: u64 },

    #[error("Invalid AI response: {0}")]
    InvalidResponse(String),

    #[error("AI service returned an empty response")]
    EmptyResponse,

    #[error("AI service returned status {status}")]
    ServiceStatus { status: u16 },

    #[error("LLM client error: {0}")]
    LlmClientError(String),

    #[error("Refusing to overwrite existing file: {path}")]
    ArtifactExists { path: String },

    #[error("Invalid command line arguments: {0}")]
    InvalidArguments(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
