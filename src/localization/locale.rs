use crate::models::OutputLanguage;
use std::env;

const LOCALE_VARS: [&str; 4] = ["LC_ALL", "LC_MESSAGES", "LANG", "LANGUAGE"];

pub struct LocaleDetector;

impl LocaleDetector {
    /// Walks the locale variables in priority order using `lookup`.
    pub fn detect_with<F>(lookup: F) -> OutputLanguage
    where
        F: Fn(&str) -> Option<String>,
    {
        for var in LOCALE_VARS {
            if let Some(locale) = lookup(var) {
                if let Some(lang) = Self::parse_locale(&locale) {
                    return lang;
                }
            }
        }

        OutputLanguage::English
    }

    /// Parse a locale string and extract the language
    pub fn parse_locale(locale: &str) -> Option<OutputLanguage> {
        // fa_IR.UTF-8, fa_IR, fa, Persian_Iran.1256, farsi
        let locale_lower = locale.to_lowercase();

        if locale_lower.starts_with("fa")
            || locale_lower.contains("persian")
            || locale_lower.contains("farsi")
            || locale_lower.contains("iran")
        {
            return Some(OutputLanguage::Persian);
        }

        if locale_lower.starts_with("en")
            || locale_lower.contains("english")
            || locale_lower.contains("american")
            || locale_lower.contains("british")
            || locale_lower == "c"
            || locale_lower.starts_with("c.")
            || locale_lower == "posix"
        {
            return Some(OutputLanguage::English);
        }

        None
    }

    /// Get the current system locale string for debugging
    pub fn get_system_locale_info() -> String {
        LOCALE_VARS
            .iter()
            .map(|var| match env::var(var) {
                Ok(value) => format!("{}={}", var, value),
                Err(_) => format!("{}=(not set)", var),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
