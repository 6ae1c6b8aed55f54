use crate::analyzer::DEFAULT_MODEL;
use crate::error::ForcedelError;
use crate::localization::LocaleDetector;
use crate::models::{OutputLanguage, ScriptVariant, DEFAULT_TARGET_PATH};
use clap::Parser;
use std::path::PathBuf;

pub const OUTPUT_LANGUAGE_VAR: &str = "FORCEDEL_OUTPUT_LANGUAGE";
pub const MODEL_VAR: &str = "FORCEDEL_MODEL";

#[derive(Parser, Debug)]
#[command(name = "forcedel")]
#[command(about = "Generate Windows scripts that take ownership of a path and force-delete it")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Windows path to delete
    #[arg(default_value = DEFAULT_TARGET_PATH)]
    pub path: String,

    /// Script dialect to generate (powershell, batch)
    #[arg(short = 's', long, default_value = "powershell")]
    pub script_type: String,

    /// Also print the context-menu registry file
    #[arg(long)]
    pub registry: bool,

    /// Write the script and AddContextMenu.reg into this directory
    #[arg(short = 'o', long)]
    pub out_dir: Option<PathBuf>,

    /// Overwrite files that already exist in the output directory
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Ask the AI service whether deleting the path is safe
    #[arg(short = 'c', long)]
    pub check: bool,

    /// Language for the safety verdict (en, fa)
    /// If not specified, automatically detects from system locale
    #[arg(long)]
    pub output_lang: Option<String>,

    /// LLM model used for the safety check
    #[arg(short = 'm', long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum time for the safety check in seconds (1-300)
    #[arg(short = 't', long, value_parser = validate_timeout)]
    pub timeout: Option<u64>,

    /// Read one path per line from stdin and regenerate on every line
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Enable verbose output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug output including AI service communication
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    pub fn parse_args() -> Result<Self, ForcedelError> {
        let cli = Self::try_parse().map_err(|e| ForcedelError::InvalidArguments(e.to_string()))?;

        cli.validate()?;

        Ok(cli)
    }

    pub fn validate(&self) -> Result<(), ForcedelError> {
        if let Some(timeout) = self.timeout {
            if !(1..=300).contains(&timeout) {
                return Err(ForcedelError::InvalidArguments(
                    "Timeout must be between 1 and 300 seconds".to_string(),
                ));
            }
        }

        if self.force && self.out_dir.is_none() {
            return Err(ForcedelError::InvalidArguments(
                "--force requires --out-dir".to_string(),
            ));
        }

        self.get_script_variant()?;
        self.get_output_language()?;

        Ok(())
    }

    pub fn get_script_variant(&self) -> Result<ScriptVariant, ForcedelError> {
        ScriptVariant::from_str(&self.script_type)
    }

    pub fn get_model(&self) -> String {
        self.resolve_model_with(|var| std::env::var(var).ok())
    }

    pub fn resolve_model_with<F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(MODEL_VAR)
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| self.model.clone())
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn should_use_color(&self) -> bool {
        // Disable color if NO_COLOR environment variable is set
        std::env::var("NO_COLOR").is_err()
    }

    pub fn get_output_language(&self) -> Result<OutputLanguage, ForcedelError> {
        self.resolve_output_language_with(|var| std::env::var(var).ok())
    }

    /// Environment override, then `--output-lang`, then the system locale.
    pub fn resolve_output_language_with<F>(&self, lookup: F) -> Result<OutputLanguage, ForcedelError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(env_lang) = lookup(OUTPUT_LANGUAGE_VAR) {
            return OutputLanguage::from_str(&env_lang);
        }

        if let Some(ref lang) = self.output_lang {
            return OutputLanguage::from_str(lang);
        }

        Ok(LocaleDetector::detect_with(lookup))
    }

    /// Get debug information about language detection
    pub fn get_language_debug_info(&self) -> String {
        let mut info = Vec::new();

        match std::env::var(OUTPUT_LANGUAGE_VAR) {
            Ok(value) => info.push(format!("{}={}", OUTPUT_LANGUAGE_VAR, value)),
            Err(_) => info.push(format!("{}=(not set)", OUTPUT_LANGUAGE_VAR)),
        }

        info.push(format!(
            "CLI --output-lang={}",
            self.output_lang.as_deref().unwrap_or("(not set)")
        ));
        info.push(format!("System locale: {}", LocaleDetector::get_system_locale_info()));

        match self.get_output_language() {
            Ok(lang) => info.push(format!("Detected language: {}", lang.as_str())),
            Err(e) => info.push(format!("Language detection error: {}", e)),
        }

        info.join("\n")
    }
}

fn validate_timeout(s: &str) -> Result<u64, String> {
    let timeout: u64 = s.parse().map_err(|_| "Timeout must be a number")?;

    if (1..=300).contains(&timeout) {
        Ok(timeout)
    } else {
        Err("Timeout must be between 1 and 300 seconds".to_string())
    }
}
