use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::args::RunConfig;
use crate::error::LogtallyError;
use crate::rank::rank;
use crate::report::render;
use crate::stats::Stats;

/// Feeds every line of `reader` into a fresh [`Stats`].
///
/// Lines are split on `\n` only and kept as raw bytes, so invalid UTF-8
/// never fails the run and a `\r` left over from CRLF input is treated as
/// trailing whitespace.
pub fn ingest_reader<R: BufRead>(mut reader: R) -> io::Result<Stats> {
    let mut stats = Stats::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        stats.ingest(&buf);
    }

    Ok(stats)
}

pub fn analyze_log_file(path: &Path) -> Result<Stats, LogtallyError> {
    let start_time = Instant::now();
    info!(action = "start", component = "log_analysis", path = ?path, "Starting log file analysis");

    let file_access = |source: io::Error| LogtallyError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_access)?;
    debug!(action = "open", component = "log_analysis", path = ?path, "Opened log file");

    let stats = ingest_reader(BufReader::new(file)).map_err(file_access)?;

    info!(
        action = "complete",
        component = "log_analysis",
        total_lines = stats.total_lines,
        distinct_levels = stats.level_counts.len(),
        distinct_messages = stats.distinct_messages(),
        duration_ms = start_time.elapsed().as_millis(),
        "Log file analysis completed"
    );

    Ok(stats)
}

/// Runs the whole pipeline and returns the rendered report. Nothing is
/// rendered unless the file was read to the end.
pub fn run(config: &RunConfig) -> Result<Vec<u8>, LogtallyError> {
    let stats = analyze_log_file(&config.path)?;

    let rank_start = Instant::now();
    let ranked = rank(&stats.message_counts, config.top_n);
    info!(
        action = "rank",
        component = "ranker",
        top_n = config.top_n,
        ranked = ranked.len(),
        duration_ms = rank_start.elapsed().as_millis(),
        "Ranked messages"
    );

    Ok(render(&stats, &ranked))
}
