use crate::models::{OutputLanguage, RiskLevel, ScriptVariant};

pub mod locale;
pub mod strings;

pub use locale::LocaleDetector;

pub struct LocalizedStrings {
    pub output_language: OutputLanguage,
}

impl LocalizedStrings {
    pub fn new(output_language: OutputLanguage) -> Self {
        Self { output_language }
    }

    pub fn get(&self, key: &str) -> &'static str {
        match self.output_language {
            OutputLanguage::English => strings::ENGLISH_STRINGS.get(key).unwrap_or(&""),
            OutputLanguage::Persian => strings::PERSIAN_STRINGS.get(key).unwrap_or(&""),
        }
    }

    pub fn get_risk_level(&self, risk_level: &RiskLevel) -> &'static str {
        let key = format!("risk_level_{}", risk_level.as_str().to_lowercase());
        self.get(&key)
    }

    /// Badge title shown above the model's explanation.
    pub fn get_risk_title(&self, risk_level: &RiskLevel) -> &'static str {
        match risk_level {
            RiskLevel::Low => self.get("safety_safe"),
            RiskLevel::Medium => self.get("safety_medium"),
            RiskLevel::High => self.get("safety_high"),
        }
    }

    pub fn get_variant_description(&self, variant: &ScriptVariant) -> &'static str {
        let key = format!("variant_{}_desc", variant.as_str());
        self.get(&key)
    }

    pub fn get_section(&self, section: &str) -> &'static str {
        let key = format!("section_{}", section.to_lowercase());
        self.get(&key)
    }

    pub fn skipped_message(&self) -> &'static str {
        self.get("analysis_skipped")
    }

    pub fn failed_message(&self) -> &'static str {
        self.get("analysis_failed")
    }
}
