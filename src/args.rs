use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::LogtallyError;

pub const DEFAULT_TOP_N: usize = 5;

const TOP_FLAG: &str = "--top";

// Help and version flags are disabled: any shape other than
// `<file>` or `<file> --top N` must be a usage error.
#[derive(Parser, Debug)]
#[command(
    name = "logtally",
    about = "Summarize log levels and the most frequent messages in a log file",
    disable_help_flag = true,
    disable_version_flag = true,
    long_about = None
)]
pub struct Args {
    /// Log file to analyze
    #[arg(value_name = "LOG_FILE_PATH", allow_hyphen_values = true)]
    pub file: PathBuf,

    /// Number of top messages to display
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub top: Option<i32>,
}

/// Validated run parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub path: PathBuf,
    pub top_n: usize,
}

impl Args {
    pub fn into_config(self) -> RunConfig {
        let top_n = match self.top {
            None => DEFAULT_TOP_N,
            Some(n) => usize::try_from(n.max(1)).unwrap_or(1),
        };

        RunConfig {
            path: self.file,
            top_n,
        }
    }
}

/// Only `<prog> <file>` and `<prog> <file> --top <N>` are accepted, with the
/// file first and `--top` spelled out as its own argument.
fn check_shape(argv: &[OsString]) -> Result<(), clap::Error> {
    match argv.len() {
        2 => Ok(()),
        4 if argv[2] == TOP_FLAG => Ok(()),
        4 => Err(Args::command().error(
            ErrorKind::UnknownArgument,
            format!("expected `{TOP_FLAG}` after the log file path"),
        )),
        _ => Err(Args::command().error(
            ErrorKind::WrongNumberOfValues,
            "expected `<log_file_path>` or `<log_file_path> --top N`",
        )),
    }
}

pub fn parse_config<I, T>(argv: I) -> Result<RunConfig, LogtallyError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    check_shape(&argv).map_err(LogtallyError::Usage)?;

    Args::try_parse_from(argv)
        .map(Args::into_config)
        .map_err(LogtallyError::Usage)
}
