use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(file)
}

fn logtally(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_logtally"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run logtally")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn three_sample_lines_with_default_top() {
    let path = fixture("sample_logs/sample.log");
    let output = logtally(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "
Summary
-------
Total lines: 3

Log levels:
  INFO: 1
  WARN: 1
  ERROR: 1

Top messages:
  1) ORA-12541: TNS no listener (1)
  2) Slow query detected (1)
  3) User login ok (1)

"
    );
    assert_eq!(stderr(&output), "");
}

#[test]
fn mixed_file_top_five() {
    let path = fixture("tests/fixtures/mixed.log");
    let output = logtally(&[path.to_str().unwrap(), "--top", "5"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "
Summary
-------
Total lines: 20

Log levels:
  INFO: 8
  WARN: 4
  ERROR: 5
  DEBUG: 3

Top messages:
  1) Cache miss (3)
  2) ORA-12541: TNS no listener (3)
  3) User login ok (3)
  4) Invalid token (2)
  5) Packet loss detected (2)

"
    );
}

#[test]
fn missing_file_exits_with_two() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.log");
    let output = logtally(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains(path.to_str().unwrap()));
}

#[test]
fn directory_path_exits_with_two() {
    let dir = TempDir::new().unwrap();
    let output = logtally(&[dir.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
}

#[test]
fn no_arguments_prints_usage() {
    let output = logtally(&[]);

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.starts_with("Usage:\n"));
    assert!(out.contains("<log_file_path> [--top N]"));
    assert!(out.contains("sample_logs/sample.log --top 10"));
}

#[test]
fn malformed_arguments_print_usage() {
    let path = fixture("sample_logs/sample.log");
    let path = path.to_str().unwrap();

    for args in [
        vec![path, "--top"],
        vec![path, "--top", "many"],
        vec![path, "extra"],
        vec![path, "--limit", "3"],
        vec![path, "--top", "3", "extra"],
        vec!["--top", "3", path],
        vec![path, "--top=3"],
        vec!["--", path],
        vec![path, "--top", "3000000000"],
    ] {
        let output = logtally(&args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
        assert!(stdout(&output).starts_with("Usage:\n"), "{args:?}");
    }
}

#[test]
fn top_zero_clamps_to_one() {
    let path = fixture("tests/fixtures/mixed.log");
    let output = logtally(&[path.to_str().unwrap(), "--top", "0"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.ends_with("Top messages:\n  1) Cache miss (3)\n\n"));
}

#[test]
fn negative_top_clamps_to_one() {
    let path = fixture("sample_logs/sample.log");
    let output = logtally(&[path.to_str().unwrap(), "--top", "-4"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).ends_with("Top messages:\n  1) ORA-12541: TNS no listener (1)\n\n"));
}

#[test]
fn top_zero_without_messages_prints_placeholder() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.log");
    fs::write(&path, "   \n\t\n").unwrap();

    let output = logtally(&[path.to_str().unwrap(), "--top", "0"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Total lines: 2\n"));
    assert!(stdout(&output).contains("  UNKNOWN: 2\n"));
    assert!(stdout(&output).ends_with("Top messages:\n  (No messages found)\n\n"));
}

#[test]
fn empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.log");
    fs::write(&path, "").unwrap();

    let output = logtally(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "\nSummary\n-------\nTotal lines: 0\n\nLog levels:\n\nTop messages:\n  (No messages found)\n\n"
    );
}

#[test]
fn path_starting_with_hyphen_is_a_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("-dash.log"), "INFO svc - hello\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_logtally"))
        .arg("-dash.log")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run logtally");

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("  1) hello (1)\n"));
}

#[test]
fn invalid_utf8_messages_are_counted_and_printed_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bytes.log");
    fs::write(&path, b"ERROR x - bad \xff\nERROR x - bad \xfe\nERROR x - bad \xff\n").unwrap();

    let output = logtally(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output
        .stdout
        .ends_with(b"Top messages:\n  1) bad \xff (2)\n  2) bad \xfe (1)\n\n"));
}
