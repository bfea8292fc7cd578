use std::process::ExitCode;

use clap::Parser;
use emx_manuscript::{constants as C, Cli, Command, Settings};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> emx_manuscript::Result<()> {
    match cli.command {
        Command::Compile { path, json } => {
            let settings = Settings::load(cli.config.as_deref().map(std::path::Path::new))?;
            cmd::compile::run(&settings, &path, json)
        }
        Command::Count { path } => cmd::count::run(&path),
        Command::Filename { title } => cmd::filename::run(&title),
    }
}

/// Log events to stderr, filtered by `EMX_MANUSCRIPT_LOG`
fn init_logging() {
    let filter = EnvFilter::try_from_env(C::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new(C::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

mod cmd {
    pub mod compile;
    pub mod count;
    pub mod filename;
}
