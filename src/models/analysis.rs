use serde::{Deserialize, Serialize};
use crate::models::OutputLanguage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub path: String,
    pub output_language: OutputLanguage,
}

/// Verdict of the safety check. `is_safe` and `risk_level` come from the
/// model independently and are not required to agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalysisResult {
    pub is_safe: bool,
    pub message: String,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl AnalysisRequest {
    pub fn new<S: Into<String>>(path: S, output_language: OutputLanguage) -> Self {
        Self {
            path: path.into(),
            output_language,
        }
    }
}

impl AnalysisResult {
    pub fn new<S: Into<String>>(risk_level: RiskLevel, is_safe: bool, message: S) -> Self {
        Self {
            is_safe,
            message: message.into(),
            risk_level,
        }
    }

    /// Low-risk result carrying a fixed message, used when no verdict was obtained.
    pub fn fallback<S: Into<String>>(message: S) -> Self {
        Self::new(RiskLevel::Low, true, message)
    }

    pub fn is_valid(&self) -> bool {
        !self.message.trim().is_empty()
    }
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }

    pub fn as_emoji(&self) -> &'static str {
        match self {
            RiskLevel::Low => "✅",
            RiskLevel::Medium => "⚠️",
            RiskLevel::High => "🚨",
        }
    }
}
