use std::fmt;

use crate::message::is_space;

/// Severity of a single log line.
///
/// The set is closed: tokens outside the vocabulary never produce a new
/// level, they fall through to [`Level::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Unknown,
}

/// Order in which levels are listed in the report.
pub const CANONICAL_ORDER: [Level; 7] = [
    Level::Info,
    Level::Warn,
    Level::Error,
    Level::Debug,
    Level::Trace,
    Level::Fatal,
    Level::Unknown,
];

// WARNING is accepted as an alias and folds into WARN.
const VOCABULARY: [(&str, Level); 7] = [
    ("TRACE", Level::Trace),
    ("DEBUG", Level::Debug),
    ("INFO", Level::Info),
    ("WARN", Level::Warn),
    ("WARNING", Level::Warn),
    ("ERROR", Level::Error),
    ("FATAL", Level::Fatal),
];

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Unknown => "UNKNOWN",
        }
    }

    /// Matches a whole token against the vocabulary, ignoring ASCII case.
    pub fn from_token(token: &[u8]) -> Option<Level> {
        VOCABULARY
            .iter()
            .find(|(name, _)| token.eq_ignore_ascii_case(name.as_bytes()))
            .map(|(_, level)| *level)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the level of the first whitespace-delimited token that names one,
/// or [`Level::Unknown`] when no token does.
pub fn classify<L: AsRef<[u8]> + ?Sized>(line: &L) -> Level {
    line.as_ref()
        .split(|b| is_space(*b))
        .filter(|token| !token.is_empty())
        .find_map(Level::from_token)
        .unwrap_or(Level::Unknown)
}
