use crate::analyzer::llm_client::{create_llm_client, provider_key_var, LlmConfig, LlmProvider, DEFAULT_MODEL};
use crate::analyzer::prompts::PromptTemplate;
use crate::error::ForcedelError;
use crate::localization::LocalizedStrings;
use crate::models::{AnalysisRequest, AnalysisResult, OutputLanguage};
use std::sync::Arc;
use tokio::time::{timeout, Duration};

/// Generic credential variable; provider-specific ones are only a fallback.
pub const API_KEY_VAR: &str = "API_KEY";
pub const ENDPOINT_VAR: &str = "FORCEDEL_API_ENDPOINT";

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: Option<String>,
    /// No timeout unless the caller asks for one.
    pub timeout_seconds: Option<u64>,
}

impl ClassifierConfig {
    pub fn new<S: Into<String>>(model: S) -> Self {
        Self {
            api_key: None,
            model: model.into(),
            endpoint: None,
            timeout_seconds: None,
        }
    }

    pub fn from_env(model: &str) -> Self {
        Self::from_lookup(model, |var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(model: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let api_key = non_empty(API_KEY_VAR)
            .or_else(|| provider_key_var(model).and_then(|var| non_empty(var)));

        Self {
            api_key,
            model: model.to_string(),
            endpoint: non_empty(ENDPOINT_VAR),
            timeout_seconds: None,
        }
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout(mut self, seconds: Option<u64>) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// An empty credential counts as absent.
    pub fn has_credential(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

enum ProviderState {
    Unconfigured,
    Unavailable(String),
    Ready(Arc<dyn LlmProvider + Send + Sync>),
}

/// Best-effort safety opinion about deleting a path. `classify` always
/// resolves to a valid `AnalysisResult`; failures become the low-risk
/// fallback and are only logged.
pub struct RiskClassifier {
    state: ProviderState,
    timeout: Option<Duration>,
}

impl RiskClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        let timeout = config.timeout_seconds.map(Duration::from_secs);

        let state = match config.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => {
                let llm_config = LlmConfig::new(config.model.as_str(), key)
                    .with_endpoint(config.endpoint.clone());
                match create_llm_client(llm_config) {
                    Ok(client) => ProviderState::Ready(client.into()),
                    Err(e) => {
                        log::warn!("AI client setup failed: {}", e);
                        ProviderState::Unavailable(e.to_string())
                    }
                }
            }
            _ => ProviderState::Unconfigured,
        };

        Self { state, timeout }
    }

    pub fn unconfigured() -> Self {
        Self {
            state: ProviderState::Unconfigured,
            timeout: None,
        }
    }

    pub fn with_provider(provider: Arc<dyn LlmProvider + Send + Sync>) -> Self {
        Self {
            state: ProviderState::Ready(provider),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn is_configured(&self) -> bool {
        !matches!(self.state, ProviderState::Unconfigured)
    }

    pub fn get_model_info(&self) -> String {
        match &self.state {
            ProviderState::Unconfigured => "AI analysis disabled (no API key)".to_string(),
            ProviderState::Unavailable(reason) => format!("AI analysis unavailable: {}", reason),
            ProviderState::Ready(provider) => match self.timeout {
                Some(limit) => format!("Model: {}, Timeout: {}s", provider.get_model_name(), limit.as_secs()),
                None => format!("Model: {}, Timeout: none", provider.get_model_name()),
            },
        }
    }

    pub async fn classify_request(&self, request: &AnalysisRequest) -> AnalysisResult {
        self.classify(&request.path, request.output_language).await
    }

    pub async fn classify(&self, path: &str, language: OutputLanguage) -> AnalysisResult {
        let strings = LocalizedStrings::new(language);

        let provider = match &self.state {
            ProviderState::Unconfigured => {
                log::info!("No API key configured; skipping AI analysis");
                return AnalysisResult::fallback(strings.skipped_message());
            }
            ProviderState::Unavailable(reason) => {
                log::warn!("AI analysis failed: {}", reason);
                return AnalysisResult::fallback(strings.failed_message());
            }
            ProviderState::Ready(provider) => Arc::clone(provider),
        };

        match self.request_verdict(provider.as_ref(), path, language).await {
            Ok(result) => {
                log::info!("AI analysis complete - risk level: {}", result.risk_level.as_str());
                result
            }
            Err(e) => {
                log::warn!("AI analysis failed: {}", e);
                AnalysisResult::fallback(strings.failed_message())
            }
        }
    }

    async fn request_verdict(
        &self,
        provider: &(dyn LlmProvider + Send + Sync),
        path: &str,
        language: OutputLanguage,
    ) -> Result<AnalysisResult, ForcedelError> {
        let prompt = PromptTemplate::build_path_safety_prompt(path, &language);
        let schema = PromptTemplate::response_schema(&language);

        log::debug!("Requesting AI verdict from {}", provider.get_model_name());

        let text = match self.timeout {
            Some(limit) => timeout(limit, provider.generate(&prompt, &schema))
                .await
                .map_err(|_| ForcedelError::AnalysisTimeout {
                    timeout: limit.as_secs(),
                })??,
            None => provider.generate(&prompt, &schema).await?,
        };

        Self::parse_verdict(&text)
    }

    /// Strict parse of the model's reply into `AnalysisResult`.
    pub fn parse_verdict(text: &str) -> Result<AnalysisResult, ForcedelError> {
        if text.trim().is_empty() {
            return Err(ForcedelError::EmptyResponse);
        }

        let result: AnalysisResult = serde_json::from_str(text.trim())
            .map_err(|e| ForcedelError::InvalidResponse(e.to_string()))?;

        if !result.is_valid() {
            return Err(ForcedelError::InvalidResponse("empty message".to_string()));
        }

        Ok(result)
    }
}
