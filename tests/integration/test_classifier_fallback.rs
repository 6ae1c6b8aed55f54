use forcedel::analyzer::LlmProvider;
use forcedel::error::ForcedelError;
use forcedel::{AnalysisRequest, ClassifierConfig, OutputLanguage, RiskClassifier, RiskLevel};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const SKIPPED_EN: &str = "API Key not configured. Skipping AI analysis.";
const FAILED_EN: &str = "Error communicating with AI. Please check manually.";
const SKIPPED_FA: &str = "کلید API تنظیم نشده است. تحلیل هوش مصنوعی نادیده گرفته شد.";
const FAILED_FA: &str = "خطا در ارتباط با هوش مصنوعی. لطفا خودتان بررسی کنید.";

enum Reply {
    Text(&'static str),
    Error,
    Sleep(Duration),
}

struct ScriptedProvider {
    reply: Reply,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }
}

impl LlmProvider for ScriptedProvider {
    fn generate<'a>(
        &'a self,
        _prompt: &'a str,
        _schema: &'a Value,
    ) -> Pin<Box<dyn Future<Output = Result<String, ForcedelError>> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            match &self.reply {
                Reply::Text(text) => Ok(text.to_string()),
                Reply::Error => Err(ForcedelError::LlmClientError("connection refused".to_string())),
                Reply::Sleep(duration) => {
                    tokio::time::sleep(*duration).await;
                    Ok(r#"{"isSafe": true, "message": "late", "riskLevel": "LOW"}"#.to_string())
                }
            }
        })
    }

    fn get_model_name(&self) -> &str {
        "scripted"
    }
}

#[tokio::test]
async fn missing_key_skips_without_calling() {
    let classifier = RiskClassifier::new(&ClassifierConfig::new("gemini-2.5-flash").with_api_key(""));
    assert!(!classifier.is_configured());

    let result = classifier.classify(r"C:\Windows", OutputLanguage::English).await;
    assert_eq!(result.message, SKIPPED_EN);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.is_safe);

    let result = classifier.classify(r"C:\Windows", OutputLanguage::Persian).await;
    assert_eq!(result.message, SKIPPED_FA);
}

#[tokio::test]
async fn provider_error_yields_localized_failure() {
    let provider = ScriptedProvider::new(Reply::Error);
    let classifier = RiskClassifier::with_provider(provider.clone());

    let result = classifier.classify(r"C:\temp", OutputLanguage::English).await;
    assert_eq!(result.message, FAILED_EN);

    let result = classifier.classify(r"C:\temp", OutputLanguage::Persian).await;
    assert_eq!(result.message, FAILED_FA);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.is_safe);

    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn inconsistent_verdict_is_passed_through() {
    let provider = ScriptedProvider::new(Reply::Text(
        r#"{"isSafe": true, "message": "Odd but valid.", "riskLevel": "HIGH"}"#,
    ));
    let classifier = RiskClassifier::with_provider(provider);

    let request = AnalysisRequest::new(r"C:\Windows", OutputLanguage::English);
    let result = classifier.classify_request(&request).await;

    assert!(result.is_safe);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.message, "Odd but valid.");
}

#[tokio::test]
async fn slow_provider_times_out_to_failure() {
    let provider = ScriptedProvider::new(Reply::Sleep(Duration::from_secs(5)));
    let classifier =
        RiskClassifier::with_provider(provider).with_timeout(Duration::from_millis(50));

    let result = classifier.classify(r"C:\temp", OutputLanguage::English).await;
    assert_eq!(result.message, FAILED_EN);
}

#[tokio::test]
async fn no_timeout_waits_for_reply() {
    let provider = ScriptedProvider::new(Reply::Sleep(Duration::from_millis(50)));
    let classifier = RiskClassifier::with_provider(provider);

    let result = classifier.classify(r"C:\temp", OutputLanguage::English).await;
    assert_eq!(result.message, "late");
}
