use crate::analyzer::prompts::PromptTemplate;
use crate::error::ForcedelError;
use rig::client::CompletionClient;
use rig::completion::{AssistantContent, CompletionModel};
use rig::providers::{anthropic, openai};
use serde::Deserialize;
use serde_json::{json, Value};
use std::future::Future;
use std::pin::Pin;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub model_name: String,
    pub api_key: String,
    /// Base URL override. Only the Gemini client honours it.
    pub endpoint: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl LlmConfig {
    pub fn new<S: Into<String>>(model_name: S, api_key: S) -> Self {
        Self {
            model_name: model_name.into(),
            api_key: api_key.into(),
            endpoint: None,
            max_tokens: Some(400),
            temperature: Some(0.2),
        }
    }

    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.endpoint = endpoint;
        self
    }
}

/// Text-generation capability behind the safety check: one prompt plus the
/// structured-output schema in, the raw structured text out.
pub trait LlmProvider: Send + Sync {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        schema: &'a Value,
    ) -> Pin<Box<dyn Future<Output = Result<String, ForcedelError>> + Send + 'a>>;
    fn get_model_name(&self) -> &str;
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

fn extract_text(response: GeminiResponse) -> Option<String> {
    let parts = response
        .candidates?
        .into_iter()
        .next()?
        .content?
        .parts?;

    let text: String = parts.into_iter().filter_map(|part| part.text).collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Some chat models wrap JSON in a markdown fence even when told not to.
pub fn strip_code_fence(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.starts_with("```") {
        let without_start = trimmed.trim_start_matches("```");
        let without_lang = without_start
            .strip_prefix("json")
            .or_else(|| without_start.strip_prefix("JSON"))
            .unwrap_or(without_start);
        return without_lang.trim().trim_end_matches("```").trim().to_string();
    }
    trimmed.to_string()
}

pub struct GeminiClient {
    config: LlmConfig,
    http: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Result<Self, ForcedelError> {
        let http = reqwest::Client::builder().build()?;
        let base_url = config
            .endpoint
            .clone()
            .unwrap_or_else(|| GEMINI_API_BASE.to_string());

        Ok(Self {
            config,
            http,
            base_url,
        })
    }

    pub fn endpoint_url(&self) -> String {
        let model = self
            .config
            .model_name
            .strip_prefix("gemini/")
            .unwrap_or(&self.config.model_name);
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn send_generate_request(&self, prompt: &str, schema: &Value) -> Result<String, ForcedelError> {
        let mut generation_config = json!({
            "responseMimeType": "application/json",
            "responseSchema": schema,
        });
        if let Some(temperature) = self.config.temperature {
            generation_config["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = self.config.max_tokens {
            generation_config["maxOutputTokens"] = json!(max_tokens);
        }

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": generation_config
        });

        log::debug!("POST {}", self.endpoint_url());

        let response = self
            .http
            .post(self.endpoint_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForcedelError::ServiceStatus {
                status: status.as_u16(),
            });
        }

        let parsed: GeminiResponse = response.json().await?;
        extract_text(parsed).ok_or(ForcedelError::EmptyResponse)
    }
}

impl LlmProvider for GeminiClient {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        schema: &'a Value,
    ) -> Pin<Box<dyn Future<Output = Result<String, ForcedelError>> + Send + 'a>> {
        Box::pin(self.send_generate_request(prompt, schema))
    }

    fn get_model_name(&self) -> &str {
        &self.config.model_name
    }
}

pub struct RigLlmClient {
    config: LlmConfig,
    provider: RigProvider,
}

enum RigProvider {
    OpenAI(openai::Client),
    Anthropic(anthropic::Client),
}

impl RigLlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, ForcedelError> {
        let model_name = config.model_name.trim();

        let provider = if is_openai_model(model_name) {
            RigProvider::OpenAI(openai::Client::new(&config.api_key))
        } else if is_claude_model(model_name) {
            RigProvider::Anthropic(anthropic::Client::new(&config.api_key))
        } else {
            return Err(unsupported_model(model_name));
        };

        Ok(Self { config, provider })
    }

    fn model_id(&self) -> &str {
        let name = self.config.model_name.trim();
        name.strip_prefix("openai/")
            .or_else(|| name.strip_prefix("anthropic/"))
            .unwrap_or(name)
    }

    async fn make_api_request(&self, prompt: &str, schema: &Value) -> Result<String, ForcedelError> {
        let system_prompt = PromptTemplate::build_system_prompt(schema);

        let text = match &self.provider {
            RigProvider::OpenAI(client) => {
                let model = client.completion_model(self.model_id());
                self.send_completion_request(model, prompt, system_prompt).await?
            }
            RigProvider::Anthropic(client) => {
                let model = client.completion_model(self.model_id());
                self.send_completion_request(model, prompt, system_prompt).await?
            }
        };

        let cleaned = strip_code_fence(&text);
        if cleaned.is_empty() {
            return Err(ForcedelError::EmptyResponse);
        }
        Ok(cleaned)
    }

    async fn send_completion_request<M: CompletionModel>(
        &self,
        model: M,
        prompt: &str,
        system_prompt: String,
    ) -> Result<String, ForcedelError> {
        let mut builder = model.completion_request(prompt).preamble(system_prompt);

        // Reasoning models reject a temperature parameter
        if let Some(temp) = self.config.temperature {
            let id = self.model_id();
            if !id.starts_with("gpt-5") && !id.starts_with('o') {
                builder = builder.temperature(temp as f64);
            }
        }

        if let Some(max_tokens) = self.config.max_tokens {
            builder = builder.max_tokens(max_tokens as u64);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ForcedelError::LlmClientError(format!("Request failed: {}", e)))?;

        let mut extracted_text = String::new();
        for content in response.choice.iter() {
            if let AssistantContent::Text(text_content) = content {
                extracted_text.push_str(&text_content.text);
            }
        }

        Ok(extracted_text)
    }
}

impl LlmProvider for RigLlmClient {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        schema: &'a Value,
    ) -> Pin<Box<dyn Future<Output = Result<String, ForcedelError>> + Send + 'a>> {
        Box::pin(self.make_api_request(prompt, schema))
    }

    fn get_model_name(&self) -> &str {
        &self.config.model_name
    }
}

fn unsupported_model(model_name: &str) -> ForcedelError {
    ForcedelError::LlmClientError(format!(
        "Unsupported model '{}'. Use Gemini (gemini-*), OpenAI (gpt-*) or Anthropic (claude-*) models",
        model_name
    ))
}

pub fn create_llm_client(config: LlmConfig) -> Result<Box<dyn LlmProvider + Send + Sync>, ForcedelError> {
    let model_name = config.model_name.trim().to_string();

    if is_gemini_model(&model_name) {
        Ok(Box::new(GeminiClient::new(config)?))
    } else if is_openai_model(&model_name) || is_claude_model(&model_name) {
        Ok(Box::new(RigLlmClient::new(config)?))
    } else {
        Err(unsupported_model(&model_name))
    }
}

/// Provider-specific variable consulted when the generic credential is unset.
pub fn provider_key_var(model: &str) -> Option<&'static str> {
    if is_gemini_model(model) {
        Some("GEMINI_API_KEY")
    } else if is_openai_model(model) {
        Some("OPENAI_API_KEY")
    } else if is_claude_model(model) {
        Some("ANTHROPIC_API_KEY")
    } else {
        None
    }
}

pub fn is_openai_model(model: &str) -> bool {
    let candidate = model.strip_prefix("openai/").unwrap_or(model);
    let candidate = candidate.strip_prefix("ft:").unwrap_or(candidate);

    candidate.starts_with("gpt-")
        || candidate.starts_with("chatgpt-")
        || candidate.starts_with("o1")
        || candidate.starts_with("o3")
        || candidate.starts_with("o4")
}

pub fn is_claude_model(model: &str) -> bool {
    let candidate = model.strip_prefix("anthropic/").unwrap_or(model);
    candidate.starts_with("claude-")
}

pub fn is_gemini_model(model: &str) -> bool {
    let candidate = model.strip_prefix("gemini/").unwrap_or(model);
    candidate.starts_with("gemini-")
}
