use crate::localization::LocalizedStrings;
use crate::models::{AnalysisResult, Artifact, ArtifactKind, GenerationRequest, OutputLanguage, RiskLevel, TextDirection};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const RIGHT_TO_LEFT_MARK: char = '\u{200F}';

pub struct ReportFormatter {
    use_colors: bool,
    localized_strings: LocalizedStrings,
}

impl ReportFormatter {
    pub fn new(use_colors: bool, output_language: OutputLanguage) -> Self {
        Self {
            use_colors,
            localized_strings: LocalizedStrings::new(output_language),
        }
    }

    pub fn format_request_summary(&self, request: &GenerationRequest) -> String {
        let strings = &self.localized_strings;
        format!(
            "{}: {}\n{}: {} ({})",
            strings.get("label_path"),
            request.path,
            strings.get("label_script_type"),
            request.variant.label(),
            strings.get_variant_description(&request.variant)
        )
    }

    /// Preview block for a generated artifact, e.g. `Preview: POWERSHELL`.
    pub fn format_preview(&self, artifact: &Artifact) -> String {
        let title = match artifact.kind {
            ArtifactKind::Script(variant) => format!(
                "{}: {}",
                self.localized_strings.get_section("preview"),
                variant.label()
            ),
            ArtifactKind::Registry => format!(
                "{} ({})",
                self.localized_strings.get_section("registry"),
                artifact.file_name
            ),
        };

        let mut output = self.format_section(&title, artifact.content.trim_end());
        if artifact.kind == ArtifactKind::Registry {
            output.push_str("\n\n");
            output.push_str(self.localized_strings.get("registry_note"));
        }
        output
    }

    pub fn format_analyzing(&self) -> String {
        self.format_progress(self.localized_strings.get("safety_analyzing"))
    }

    pub fn format_safety_badge(&self, result: &AnalysisResult) -> String {
        let color_code = if self.use_colors {
            match result.risk_level {
                RiskLevel::Low => "\x1b[1m\x1b[32m",    // Bold green
                RiskLevel::Medium => "\x1b[1m\x1b[33m", // Bold yellow
                RiskLevel::High => "\x1b[1m\x1b[31m",   // Bold red
            }
        } else {
            ""
        };
        let reset = if self.use_colors { RESET } else { "" };

        let section_title = self.localized_strings.get_section("safety_check");
        let title = self.localized_strings.get_risk_title(&result.risk_level);
        let level = self.localized_strings.get_risk_level(&result.risk_level);

        format!(
            "{}\n{}{} {} [{}]{}\n{}",
            section_title,
            color_code,
            result.risk_level.as_emoji(),
            self.directional(title),
            level,
            reset,
            self.directional(&result.message)
        )
    }

    pub fn format_saved(&self, path: &Path) -> String {
        format!("{}: {}", self.localized_strings.get("label_saved"), path.display())
    }

    pub fn format_progress(&self, message: &str) -> String {
        if self.use_colors {
            format!("\x1b[36m🔍 {}{}", message, RESET)
        } else {
            format!("🔍 {}", message)
        }
    }

    fn format_section(&self, title: &str, content: &str) -> String {
        if self.use_colors {
            format!("\x1b[1m\x1b[37m{}{}\n{}", title, RESET, content)
        } else {
            format!("{}\n{}\n{}", title, "─".repeat(title.chars().count()), content)
        }
    }

    /// Persian text gets a leading RLM so terminals lay it out right to left.
    fn directional(&self, text: &str) -> String {
        match self.localized_strings.output_language.direction() {
            TextDirection::Rtl => format!("{}{}", RIGHT_TO_LEFT_MARK, text),
            TextDirection::Ltr => text.to_string(),
        }
    }
}
