//! The binary as a user runs it: stdin input, exit codes, error tags.

use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ascii-graph"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

const PEAK: &str = "x;y\n0;0\n1;20\n2;40\n3;20\n4;0\n";

#[test]
fn csv_dash_reads_stdin() {
    let out = run(&["csv", "-", "--plain", "--cols", "30", "--rows", "12"], PEAK);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let first = stdout.lines().next().unwrap();
    assert!(first.starts_with("40 "), "{first:?}");
    assert!(first.contains('='));
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn csv_without_file_argument_reads_stdin() {
    let out = run(&["csv", "--plain", "--cols", "30", "--rows", "12"], "0;0\n1;20\n2;40\n");
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().starts_with("40 "));
}

#[test]
fn bad_stdin_row_exits_with_tag() {
    let out = run(&["csv", "-", "--plain", "--cols", "30", "--rows", "12"], "0;0\n1;oops\n");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("MalformedRow:"), "{stderr:?}");
}

#[test]
fn zero_gap_exits_with_tag() {
    let out = run(&["range", "0", "10", "0", "--plain"], "");
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("InvalidGap:"), "{stderr:?}");
}

#[test]
fn oversized_grid_exits_with_tag() {
    let out = run(&["range", "0", "10", "1", "--plain", "--cols", "100000", "--rows", "10"], "");
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("GraphTooLarge:"), "{stderr:?}");
}
