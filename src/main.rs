use forcedel::{
    cli::{Cli, CliHandler},
    error::ForcedelError,
};
use std::process;

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.is_debug() {
        builder.filter_level(log::LevelFilter::Debug);
    } else if cli.is_verbose() {
        builder.filter_level(log::LevelFilter::Info);
    }
    // Keep HTTP client internals quiet unless debugging
    if !cli.is_debug() {
        builder.filter_module("hyper", log::LevelFilter::Warn);
        builder.filter_module("reqwest", log::LevelFilter::Warn);
    }
    builder.target(env_logger::Target::Stderr).init();
}

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("❌ Argument parsing failed: {}", e);
            process::exit(2);
        }
    };

    init_logging(&cli);

    let handler = CliHandler::new(cli);

    let exit_code = match handler.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            match e {
                ForcedelError::InvalidArguments(_)
                | ForcedelError::UnknownScriptType(_)
                | ForcedelError::UnsupportedLanguage(_) => 2,
                _ => 1, // General error
            }
        }
    };

    process::exit(exit_code);
}
