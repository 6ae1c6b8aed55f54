use crate::models::OutputLanguage;
use serde_json::{json, Value};

pub struct PromptTemplate;

impl PromptTemplate {
    pub fn build_path_safety_prompt(path: &str, output_language: &OutputLanguage) -> String {
        // JSON string quoting keeps quotes and backslashes in the path from
        // bleeding into the instructions.
        let quoted_path = Value::String(path.to_string()).to_string();

        format!(
            r#"PATH DELETION SAFETY CHECK

TARGET PATH: {}
OUTPUT LANGUAGE: {}

You are a Windows system administration expert. A user is about to take
ownership of this path and force-delete it, recursively if it is a folder.

Classify deleting this path into exactly one tier:
1. Safe (riskLevel LOW): user documents, temp folders, downloads, caches
2. Risky (riskLevel MEDIUM): program files, application data, unknown system files
3. Dangerous (riskLevel HIGH): Windows system folders, System32, boot files, root drives

Set isSafe to true only when deleting the path is unlikely to harm the system.
Write message as one or two short sentences explaining the verdict.

Respond with JSON only, matching the provided schema exactly.
IMPORTANT: Write the message in {}."#,
            quoted_path,
            output_language.as_llm_language(),
            output_language.as_llm_language()
        )
    }

    /// Preamble for providers without a native structured-output parameter.
    pub fn build_system_prompt(schema: &Value) -> String {
        format!(
            "You are a careful Windows administrator. Reply with a single JSON object \
             and nothing else. The object must match this JSON schema exactly:\n{}",
            schema
        )
    }

    /// Structured-output schema for `AnalysisResult`, in the OpenAPI subset the
    /// Gemini API accepts.
    pub fn response_schema(output_language: &OutputLanguage) -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "isSafe": { "type": "BOOLEAN" },
                "message": {
                    "type": "STRING",
                    "description": format!("A short explanation in {}", output_language.as_llm_language())
                },
                "riskLevel": { "type": "STRING", "enum": ["LOW", "MEDIUM", "HIGH"] }
            },
            "required": ["isSafe", "message", "riskLevel"]
        })
    }
}
