pub mod script;
pub mod analysis;

pub use script::{
    Artifact, ArtifactKind, GenerationRequest, OutputLanguage, ScriptVariant, TextDirection,
    DEFAULT_TARGET_PATH,
};
pub use analysis::{AnalysisRequest, AnalysisResult, RiskLevel};
