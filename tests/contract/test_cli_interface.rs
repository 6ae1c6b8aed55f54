use clap::Parser;
use forcedel::cli::{Cli, CliHandler};
use forcedel::ScriptVariant;
use std::path::PathBuf;

#[test]
fn test_defaults_match_seed_values() {
    let cli = Cli::try_parse_from(["forcedel"]).unwrap();

    assert_eq!(cli.path, r"C:\scratchdir");
    assert_eq!(cli.get_script_variant().unwrap(), ScriptVariant::PowerShell);
    assert_eq!(cli.model, "gemini-2.5-flash");
    assert!(cli.timeout.is_none());
}

#[test]
fn test_long_flags() {
    let cli = Cli::try_parse_from([
        "forcedel",
        "--script-type",
        "batch",
        "--registry",
        "--out-dir",
        "build",
        "--force",
        "--check",
        "--output-lang",
        "fa",
        "--model",
        "claude-3-5-haiku-latest",
        "--timeout",
        "20",
        "--interactive",
        r"E:\Locked Folder",
    ])
    .unwrap();

    assert_eq!(cli.get_script_variant().unwrap(), ScriptVariant::Batch);
    assert!(cli.registry);
    assert_eq!(cli.out_dir, Some(PathBuf::from("build")));
    assert!(cli.force);
    assert!(cli.check);
    assert_eq!(cli.output_lang.as_deref(), Some("fa"));
    assert_eq!(cli.model, "claude-3-5-haiku-latest");
    assert_eq!(cli.timeout, Some(20));
    assert!(cli.interactive);
    assert_eq!(cli.path, r"E:\Locked Folder");
}

#[test]
fn test_invalid_arguments_are_rejected() {
    assert!(Cli::try_parse_from(["forcedel", "--timeout", "0"]).is_err());
    assert!(Cli::try_parse_from(["forcedel", "--timeout", "1000"]).is_err());
    assert!(Cli::try_parse_from(["forcedel", "--no-such-flag"]).is_err());
    assert!(Cli::try_parse_from(["forcedel", "a", "b"]).is_err());

    let cli = Cli::try_parse_from(["forcedel", "--script-type", "python"]).unwrap();
    assert!(cli.validate().is_err());
}

#[test]
fn test_classifier_config_carries_timeout() {
    let cli = Cli::try_parse_from(["forcedel", "-t", "15", "-m", "gemini-2.5-pro"]).unwrap();
    let handler = CliHandler::new(cli);

    let config = handler.classifier_config();
    assert_eq!(config.timeout_seconds, Some(15));
}

#[tokio::test]
async fn test_run_writes_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().to_str().unwrap();

    let cli = Cli::try_parse_from([
        "forcedel",
        "--output-lang",
        "en",
        "--script-type",
        "bat",
        "--out-dir",
        out_dir,
        r"C:\temp\locked",
    ])
    .unwrap();

    let code = CliHandler::new(cli).run().await.unwrap();

    assert_eq!(code, 0);
    assert!(dir.path().join("ForceDelete.bat").exists());
    assert!(dir.path().join("AddContextMenu.reg").exists());
}
