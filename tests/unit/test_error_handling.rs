use forcedel::analyzer::{create_llm_client, LlmConfig, RiskClassifier};
use forcedel::error::ForcedelError;
use forcedel::export::ArtifactWriter;
use forcedel::generator::script_artifact;
use forcedel::{GenerationRequest, OutputLanguage, ScriptVariant};

#[test]
fn unknown_script_type_is_rejected() {
    let result = ScriptVariant::from_str("vbscript");
    assert!(matches!(result, Err(ForcedelError::UnknownScriptType(ref s)) if s == "vbscript"));
}

#[test]
fn unsupported_output_language_is_rejected() {
    let result = OutputLanguage::from_str("de");
    assert!(matches!(result, Err(ForcedelError::UnsupportedLanguage(_))));
}

#[test]
fn llm_client_creation_fails_for_unsupported_model() {
    let client = create_llm_client(LlmConfig::new("llama-3", "test"));
    assert!(matches!(client, Err(ForcedelError::LlmClientError(_))));
}

#[test]
fn malformed_verdict_is_invalid_response() {
    let result = RiskClassifier::parse_verdict("{\"isSafe\": true}");
    assert!(matches!(result, Err(ForcedelError::InvalidResponse(_))));

    let result = RiskClassifier::parse_verdict("  ");
    assert!(matches!(result, Err(ForcedelError::EmptyResponse)));
}

#[test]
fn writer_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = script_artifact(&GenerationRequest::default());
    let writer = ArtifactWriter::new(dir.path());

    writer.write(&artifact).unwrap();
    let err = writer.write(&artifact).unwrap_err();
    assert!(matches!(err, ForcedelError::ArtifactExists { .. }));
}

#[test]
fn writer_without_create_dirs_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ArtifactWriter::new(dir.path().join("missing")).create_dirs(false);

    let err = writer
        .write(&script_artifact(&GenerationRequest::default()))
        .unwrap_err();
    assert!(matches!(err, ForcedelError::IoError(_)));
}

#[test]
fn error_messages_are_descriptive() {
    let err = ForcedelError::AnalysisTimeout { timeout: 5 };
    assert_eq!(err.to_string(), "AI analysis timeout after 5 seconds");

    let err = ForcedelError::ServiceStatus { status: 503 };
    assert!(err.to_string().contains("503"));
}
