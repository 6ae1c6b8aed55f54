use serde::{Deserialize, Serialize};
use crate::error::ForcedelError;

/// Path the generator is seeded with when the caller gives none.
pub const DEFAULT_TARGET_PATH: &str = r"C:\scratchdir";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScriptVariant {
    PowerShell,
    Batch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputLanguage {
    English,
    Persian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Inputs of the generator. Derived texts are recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub path: String,
    pub variant: ScriptVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactKind {
    Script(ScriptVariant),
    Registry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub file_name: &'static str,
    pub content: String,
    pub kind: ArtifactKind,
}

impl ScriptVariant {
    pub fn from_str(s: &str) -> Result<Self, ForcedelError> {
        match s.trim().to_lowercase().as_str() {
            "powershell" | "ps1" | "ps" | "shell" => Ok(ScriptVariant::PowerShell),
            "batch" | "bat" | "cmd" => Ok(ScriptVariant::Batch),
            other => Err(ForcedelError::UnknownScriptType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptVariant::PowerShell => "powershell",
            ScriptVariant::Batch => "batch",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScriptVariant::PowerShell => "POWERSHELL",
            ScriptVariant::Batch => "BATCH",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ScriptVariant::PowerShell => "ForceDelete.ps1",
            ScriptVariant::Batch => "ForceDelete.bat",
        }
    }
}

impl Default for ScriptVariant {
    fn default() -> Self {
        ScriptVariant::PowerShell
    }
}

impl OutputLanguage {
    pub fn from_str(s: &str) -> Result<Self, ForcedelError> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(OutputLanguage::English),
            "fa" | "persian" | "farsi" => Ok(OutputLanguage::Persian),
            other => Err(ForcedelError::UnsupportedLanguage(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLanguage::English => "en",
            OutputLanguage::Persian => "fa",
        }
    }

    /// Language name handed to the model in prompts.
    pub fn as_llm_language(&self) -> &'static str {
        match self {
            OutputLanguage::English => "English",
            OutputLanguage::Persian => "Persian (Farsi)",
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            OutputLanguage::English => TextDirection::Ltr,
            OutputLanguage::Persian => TextDirection::Rtl,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            OutputLanguage::English => OutputLanguage::Persian,
            OutputLanguage::Persian => OutputLanguage::English,
        }
    }
}

impl Default for OutputLanguage {
    fn default() -> Self {
        OutputLanguage::English
    }
}

impl GenerationRequest {
    pub fn new<S: Into<String>>(path: S, variant: ScriptVariant) -> Self {
        Self {
            path: path.into(),
            variant,
        }
    }

    pub fn set_path<S: Into<String>>(&mut self, path: S) {
        self.path = path.into();
    }

    pub fn set_variant(&mut self, variant: ScriptVariant) {
        self.variant = variant;
    }

    pub fn script(&self) -> String {
        crate::generator::generate_script(&self.path, self.variant)
    }

    pub fn registry_file(&self) -> String {
        crate::generator::generate_registry_file(&self.path)
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_PATH, ScriptVariant::default())
    }
}

impl Artifact {
    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }
}
