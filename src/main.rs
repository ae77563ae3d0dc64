use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use gitpeek::cli::Cli;
use gitpeek::commands;
use gitpeek::config::Config;
use gitpeek::github::GitHubClient;
use gitpeek::ui;
use gitpeek::GitPeekError;

fn main() -> ExitCode {
    // A .env file in the working directory is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.log_filter());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::print_error(&e.to_string());
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<(), GitPeekError> {
    let api_url = cli.api_url.clone();
    let timeout = cli.timeout;

    let Some(operation) = cli.into_operation() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    operation.validate()?;

    let config =
        Config::load(api_url, timeout).map_err(|e| GitPeekError::Config(format!("{e:#}")))?;
    let client = GitHubClient::new(&config)?;

    let mut out = io::stdout().lock();
    commands::execute(&operation, &client, &mut out)
}
