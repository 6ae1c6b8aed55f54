pub mod analyzer;
pub mod cli;
pub mod error;
pub mod export;
pub mod generator;
pub mod localization;
pub mod models;

pub use error::ForcedelError;

// Re-export commonly used types
pub use models::{
    AnalysisRequest, AnalysisResult, Artifact, ArtifactKind, GenerationRequest, OutputLanguage,
    RiskLevel, ScriptVariant, TextDirection,
};

pub use analyzer::{ClassificationTracker, ClassifierConfig, RiskClassifier};
pub use generator::{generate_registry_file, generate_script};
pub use export::ArtifactWriter;

pub use cli::CliHandler;
