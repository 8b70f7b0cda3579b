const DELIMITER: &[u8] = b" - ";

/// Whitespace as the C locale sees it, vertical tab included.
pub fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

pub fn trim(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|b| !is_space(*b)).unwrap_or(s.len());
    let end = s.iter().rposition(|b| !is_space(*b)).map_or(start, |i| i + 1);
    &s[start..end]
}

/// Returns the bytes after the first `" - "`, or the whole line when there
/// is no delimiter. Either way the result is trimmed and may be empty.
///
/// Works on raw bytes so that lines which are not valid UTF-8 keep their
/// exact content.
pub fn extract_message<L: AsRef<[u8]> + ?Sized>(line: &L) -> &[u8] {
    let line = line.as_ref();
    match line.windows(DELIMITER.len()).position(|w| w == DELIMITER) {
        Some(pos) => trim(&line[pos + DELIMITER.len()..]),
        None => trim(line),
    }
}
