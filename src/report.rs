use crate::level::CANONICAL_ORDER;
use crate::rank::RankedEntry;
use crate::stats::Stats;

/// Renders the summary as raw bytes so messages are written exactly as they
/// appeared in the log.
pub fn render(stats: &Stats, ranked: &[RankedEntry<'_>]) -> Vec<u8> {
    let mut out = format!(
        "\nSummary\n-------\nTotal lines: {}\n\nLog levels:\n",
        stats.total_lines
    )
    .into_bytes();

    // Level is a closed set, so the canonical order lists every level.
    for level in CANONICAL_ORDER {
        if let Some(count) = stats.level_counts.get(&level).filter(|c| **c > 0) {
            out.extend_from_slice(format!("  {}: {}\n", level, count).as_bytes());
        }
    }

    out.extend_from_slice(b"\nTop messages:\n");
    if ranked.is_empty() {
        out.extend_from_slice(b"  (No messages found)\n");
    }
    for (i, entry) in ranked.iter().enumerate() {
        out.extend_from_slice(format!("  {}) ", i + 1).as_bytes());
        out.extend_from_slice(entry.message);
        out.extend_from_slice(format!(" ({})\n", entry.count).as_bytes());
    }
    out.push(b'\n');

    out
}

pub fn usage_text(program: &str) -> String {
    format!(
        "Usage:\n  {program} <log_file_path> [--top N]\n\nExamples:\n  {program} sample_logs/sample.log\n  {program} sample_logs/sample.log --top 10\n"
    )
}
