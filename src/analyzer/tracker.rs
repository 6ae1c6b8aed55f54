use crate::analyzer::classifier::RiskClassifier;
use crate::models::{AnalysisResult, OutputLanguage};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Identifies one classification request. Tokens only ever increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
struct Slot {
    latest: u64,
    pending: bool,
    result: Option<AnalysisResult>,
}

/// Holds the verdict for the most recently requested path.
///
/// Every edit of the path calls `begin`, which invalidates whatever is in
/// flight. A result is only stored when its token is still the latest, so a
/// slow reply for an old path can never replace the verdict for a newer one.
#[derive(Debug, Default)]
pub struct ClassificationTracker {
    slot: Mutex<Slot>,
}

impl ClassificationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a new request and clears the displayed result.
    pub fn begin(&self) -> RequestToken {
        let mut slot = self.lock();
        slot.latest += 1;
        slot.pending = true;
        slot.result = None;
        RequestToken(slot.latest)
    }

    /// Stores `result` if `token` is still current. Returns whether it was kept.
    pub fn complete(&self, token: RequestToken, result: AnalysisResult) -> bool {
        let mut slot = self.lock();
        if token.0 != slot.latest {
            log::debug!(
                "Discarding stale verdict for request {} (latest is {})",
                token.0,
                slot.latest
            );
            return false;
        }

        slot.pending = false;
        slot.result = Some(result);
        true
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.lock().latest == token.0
    }

    pub fn is_pending(&self) -> bool {
        self.lock().pending
    }

    pub fn current(&self) -> Option<AnalysisResult> {
        self.lock().result.clone()
    }

    /// Classifies `path` and records the outcome. Returns `None` when a newer
    /// request started before this one finished.
    pub async fn run(
        &self,
        classifier: &RiskClassifier,
        path: &str,
        language: OutputLanguage,
    ) -> Option<AnalysisResult> {
        let token = self.begin();
        let result = classifier.classify(path, language).await;

        if self.complete(token, result.clone()) {
            Some(result)
        } else {
            None
        }
    }
}
