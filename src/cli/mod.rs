pub mod args;
pub mod reporter;

pub use args::Cli;
pub use reporter::ReportFormatter;

use crate::analyzer::{ClassificationTracker, ClassifierConfig, RequestToken, RiskClassifier};
use crate::error::ForcedelError;
use crate::export::ArtifactWriter;
use crate::generator::{registry_artifact, script_artifact};
use crate::models::{AnalysisResult, GenerationRequest, OutputLanguage, ScriptVariant};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn classifier_config(&self) -> ClassifierConfig {
        ClassifierConfig::from_env(&self.cli.get_model()).with_timeout(self.cli.timeout)
    }

    pub async fn run(&self) -> Result<i32, ForcedelError> {
        let variant = self.cli.get_script_variant()?;
        let mut language = self.cli.get_output_language()?;
        let mut formatter = ReportFormatter::new(self.cli.should_use_color(), language);

        log::debug!("Language detection:\n{}", self.cli.get_language_debug_info());

        let mut request = GenerationRequest::new(self.cli.path.clone(), variant);

        if self.cli.interactive {
            self.run_interactive(&mut request, &mut language, &mut formatter).await?;
        } else {
            self.show_request(&request, &formatter);

            if self.cli.check {
                let classifier = RiskClassifier::new(&self.classifier_config());
                log::info!("{}", classifier.get_model_info());

                eprintln!("{}", formatter.format_analyzing());
                let tracker = ClassificationTracker::new();
                if let Some(result) = tracker.run(&classifier, &request.path, language).await {
                    println!("\n{}", formatter.format_safety_badge(&result));
                }
            }
        }

        self.export(&request, &formatter)?;

        Ok(0)
    }

    fn show_request(&self, request: &GenerationRequest, formatter: &ReportFormatter) {
        if self.cli.is_verbose() {
            eprintln!("{}", formatter.format_request_summary(request));
        }

        println!("{}", formatter.format_preview(&script_artifact(request)));

        if self.cli.registry {
            println!("\n{}", formatter.format_preview(&registry_artifact(request)));
        }
    }

    fn export(&self, request: &GenerationRequest, formatter: &ReportFormatter) -> Result<(), ForcedelError> {
        let Some(ref out_dir) = self.cli.out_dir else {
            return Ok(());
        };

        let writer = ArtifactWriter::new(out_dir).overwrite(self.cli.force);
        for path in writer.write_all(&[script_artifact(request), registry_artifact(request)])? {
            eprintln!("{}", formatter.format_saved(&path));
        }

        Ok(())
    }

    /// One path per stdin line. Each line regenerates the preview right away;
    /// classifications run in the background and only the verdict for the
    /// most recent line is printed. `:lang` switches the verdict language and
    /// `:type <dialect>` switches the script dialect.
    async fn run_interactive(
        &self,
        request: &mut GenerationRequest,
        language: &mut OutputLanguage,
        formatter: &mut ReportFormatter,
    ) -> Result<(), ForcedelError> {
        let classifier = Arc::new(RiskClassifier::new(&self.classifier_config()));
        let tracker = ClassificationTracker::new();
        let (tx, mut rx) = mpsc::unbounded_channel::<(RequestToken, AnalysisResult)>();

        let mut lines = BufReader::new(tokio::io::stdin()).split(b'\n');

        self.show_request(request, formatter);
        if self.cli.check {
            self.spawn_classification(&classifier, &tracker, &tx, &request.path, *language, formatter);
        }

        loop {
            tokio::select! {
                segment = lines.next_segment() => {
                    let Some(bytes) = segment? else {
                        break;
                    };

                    match parse_input_line(&bytes) {
                        InputLine::Skip => continue,
                        InputLine::Path(path) => {
                            request.set_path(path);
                            self.show_request(request, formatter);
                        }
                        InputLine::Dialect(variant) => {
                            request.set_variant(variant);
                            self.show_request(request, formatter);
                            continue;
                        }
                        InputLine::ToggleLanguage => {
                            *language = language.toggle();
                            *formatter = ReportFormatter::new(self.cli.should_use_color(), *language);
                            log::info!("Output language switched to {}", language.as_str());
                        }
                    }

                    if self.cli.check {
                        self.spawn_classification(&classifier, &tracker, &tx, &request.path, *language, formatter);
                    }
                }
                Some((token, result)) = rx.recv() => {
                    if tracker.complete(token, result) {
                        if let Some(result) = tracker.current() {
                            println!("\n{}", formatter.format_safety_badge(&result));
                        }
                    }
                }
            }
        }

        drop(tx);
        while tracker.is_pending() {
            let Some((token, result)) = rx.recv().await else {
                break;
            };
            if tracker.complete(token, result) {
                if let Some(result) = tracker.current() {
                    println!("\n{}", formatter.format_safety_badge(&result));
                }
            }
        }

        Ok(())
    }

    fn spawn_classification(
        &self,
        classifier: &Arc<RiskClassifier>,
        tracker: &ClassificationTracker,
        tx: &mpsc::UnboundedSender<(RequestToken, AnalysisResult)>,
        path: &str,
        language: OutputLanguage,
        formatter: &ReportFormatter,
    ) {
        let token = tracker.begin();
        eprintln!("{}", formatter.format_analyzing());

        let classifier = Arc::clone(classifier);
        let tx = tx.clone();
        let path = path.to_string();
        tokio::spawn(async move {
            let result = classifier.classify(&path, language).await;
            // The receiver is gone once the session ended.
            let _ = tx.send((token, result));
        });
    }
}

/// What a single line of interactive input asks for.
#[derive(Debug, PartialEq, Eq)]
enum InputLine {
    Path(String),
    Dialect(ScriptVariant),
    ToggleLanguage,
    Skip,
}

/// Lines that are not valid UTF-8 are skipped with a warning so the session
/// keeps going and the final path still gets exported.
fn parse_input_line(bytes: &[u8]) -> InputLine {
    let line = match std::str::from_utf8(bytes) {
        Ok(line) => line.trim(),
        Err(e) => {
            log::warn!("Ignoring input line that is not valid UTF-8: {}", e);
            return InputLine::Skip;
        }
    };

    if line.is_empty() {
        return InputLine::Skip;
    }

    if line == ":lang" {
        return InputLine::ToggleLanguage;
    }

    if let Some(name) = line.strip_prefix(":type") {
        return match ScriptVariant::from_str(name) {
            Ok(variant) => InputLine::Dialect(variant),
            Err(e) => {
                log::warn!("{}", e);
                InputLine::Skip
            }
        };
    }

    InputLine::Path(line.to_string())
}
