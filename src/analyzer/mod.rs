// Analyzer module - AI safety check for the target path

pub mod classifier;
pub mod llm_client;
pub mod prompts;
pub mod tracker;

pub use classifier::{ClassifierConfig, RiskClassifier};
pub use llm_client::{create_llm_client, GeminiClient, LlmConfig, LlmProvider, RigLlmClient, DEFAULT_MODEL};
pub use prompts::PromptTemplate;
pub use tracker::{ClassificationTracker, RequestToken};
