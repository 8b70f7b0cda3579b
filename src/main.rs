use anyhow::{Context, Result};
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

use logtally::report::usage_text;
use logtally::utils::{program_name, setup_logging};
use logtally::{parse_config, LogtallyError};

fn run() -> Result<()> {
    let config = parse_config(env::args_os())?;
    debug!(action = "parse", component = "cli", path = ?config.path, top_n = config.top_n, "Parsed arguments");

    let report = logtally::run(&config)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&report)
        .and_then(|()| stdout.flush())
        .context("Failed to write report to stdout")?;

    Ok(())
}

fn main() -> ExitCode {
    setup_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<LogtallyError>() {
            Some(e) => {
                match e {
                    LogtallyError::Usage(source) => {
                        debug!(action = "parse", component = "cli", error = %source, "Rejected arguments");
                        print!("{}", usage_text(&program_name()));
                    }
                    LogtallyError::FileAccess { source, .. } => {
                        debug!(action = "open", component = "log_analysis", error = %source, "Log file not readable");
                        eprintln!("Error: {}", e);
                    }
                }
                ExitCode::from(e.exit_code())
            }
            None => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}
