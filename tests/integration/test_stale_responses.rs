use forcedel::analyzer::LlmProvider;
use forcedel::error::ForcedelError;
use forcedel::{AnalysisResult, ClassificationTracker, OutputLanguage, RiskClassifier, RiskLevel};
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// Replies for each path are released by the test through a oneshot channel.
#[derive(Default)]
struct GatedProvider {
    gates: Mutex<HashMap<String, oneshot::Receiver<&'static str>>>,
}

impl GatedProvider {
    fn gate(&self, path: &str) -> oneshot::Sender<&'static str> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(path.to_string(), rx);
        tx
    }
}

impl LlmProvider for GatedProvider {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        _schema: &'a Value,
    ) -> Pin<Box<dyn Future<Output = Result<String, ForcedelError>> + Send + 'a>> {
        let gate = {
            let mut gates = self.gates.lock().unwrap();
            let key = gates.keys().find(|path| prompt.contains(path.as_str())).cloned();
            key.and_then(|k| gates.remove(&k))
        };

        Box::pin(async move {
            let rx = gate.ok_or_else(|| ForcedelError::LlmClientError("no gate".to_string()))?;
            let text = rx
                .await
                .map_err(|_| ForcedelError::LlmClientError("gate dropped".to_string()))?;
            Ok(text.to_string())
        })
    }

    fn get_model_name(&self) -> &str {
        "gated"
    }
}

const HIGH: &str = r#"{"isSafe": false, "message": "Windows folder.", "riskLevel": "HIGH"}"#;
const LOW: &str = r#"{"isSafe": true, "message": "Temp folder.", "riskLevel": "LOW"}"#;

fn spawn_classify(
    classifier: &Arc<RiskClassifier>,
    path: &'static str,
) -> tokio::task::JoinHandle<AnalysisResult> {
    let classifier = Arc::clone(classifier);
    tokio::spawn(async move { classifier.classify(path, OutputLanguage::English).await })
}

#[tokio::test]
async fn older_reply_arriving_last_is_discarded() {
    let provider = Arc::new(GatedProvider::default());
    let release_old = provider.gate("OldPath");
    let release_new = provider.gate("NewPath");

    let classifier = Arc::new(RiskClassifier::with_provider(provider));
    let tracker = ClassificationTracker::new();

    let old_token = tracker.begin();
    let old = spawn_classify(&classifier, r"C:\OldPath");
    let new_token = tracker.begin();
    let new = spawn_classify(&classifier, r"C:\NewPath");

    release_new.send(LOW).unwrap();
    assert!(tracker.complete(new_token, new.await.unwrap()));

    release_old.send(HIGH).unwrap();
    assert!(!tracker.complete(old_token, old.await.unwrap()));

    let current = tracker.current().unwrap();
    assert_eq!(current.risk_level, RiskLevel::Low);
    assert_eq!(current.message, "Temp folder.");
    assert!(!tracker.is_pending());
}

#[tokio::test]
async fn replies_in_order_leave_latest_verdict() {
    let provider = Arc::new(GatedProvider::default());
    let release_old = provider.gate("OldPath");
    let release_new = provider.gate("NewPath");

    let classifier = Arc::new(RiskClassifier::with_provider(provider));
    let tracker = ClassificationTracker::new();

    let old_token = tracker.begin();
    let old = spawn_classify(&classifier, r"C:\OldPath");
    let new_token = tracker.begin();
    let new = spawn_classify(&classifier, r"C:\NewPath");

    release_old.send(LOW).unwrap();
    assert!(!tracker.complete(old_token, old.await.unwrap()));
    assert!(tracker.is_pending());
    assert!(tracker.current().is_none());

    release_new.send(HIGH).unwrap();
    assert!(tracker.complete(new_token, new.await.unwrap()));
    assert_eq!(tracker.current().map(|r| r.risk_level), Some(RiskLevel::High));
}

#[tokio::test]
async fn run_returns_none_when_superseded() {
    let provider = Arc::new(GatedProvider::default());
    let release_old = provider.gate("OldPath");

    let classifier = Arc::new(RiskClassifier::with_provider(provider));
    let tracker = Arc::new(ClassificationTracker::new());

    let old = {
        let (classifier, tracker) = (Arc::clone(&classifier), Arc::clone(&tracker));
        tokio::spawn(async move {
            tracker
                .run(&classifier, r"C:\OldPath", OutputLanguage::English)
                .await
        })
    };
    // Let the spawned run register its request before superseding it.
    while !tracker.is_pending() {
        tokio::task::yield_now().await;
    }

    let newer = tracker.begin();
    release_old.send(HIGH).unwrap();

    assert!(old.await.unwrap().is_none());
    assert!(tracker.is_latest(newer));
    assert!(tracker.current().is_none());
}
