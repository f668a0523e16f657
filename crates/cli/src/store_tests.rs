// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;
use testdiff_compare::run_comparison;

fn temp_store() -> (tempfile::TempDir, ProgramStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgramStore::new(dir.path().join("programs"));
    (dir, store)
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_output_round_trip() {
    let (_dir, store) = temp_store();

    store
        .write_output("myprog", OutputKind::Expected, &lines(&["a", "b", "c"]))
        .unwrap();

    let read = store.read_output("myprog", OutputKind::Expected).unwrap();
    assert_eq!(read, lines(&["a", "b", "c"]));

    // Persisted newline-joined with no trailing newline.
    let raw = fs::read_to_string(store.program_dir("myprog").join("expected.txt")).unwrap();
    assert_eq!(raw, "a\nb\nc");
}

#[test]
fn test_trailing_newlines_stripped_on_read() {
    let (_dir, store) = temp_store();
    store.ensure_program("myprog").unwrap();
    fs::write(store.program_dir("myprog").join("actual.txt"), "a\nb\n\n").unwrap();

    let read = store.read_output("myprog", OutputKind::Actual).unwrap();
    assert_eq!(read, lines(&["a", "b"]));
}

#[test]
fn test_empty_file_reads_as_empty_sequence() {
    let (_dir, store) = temp_store();
    store.ensure_program("myprog").unwrap();
    fs::write(store.program_dir("myprog").join("expected.txt"), "").unwrap();

    let read = store.read_output("myprog", OutputKind::Expected).unwrap();
    assert!(read.is_empty());
}

#[test]
fn test_missing_record_is_a_precondition_failure() {
    let (_dir, store) = temp_store();
    store.ensure_program("myprog").unwrap();

    let err = store.read_output("myprog", OutputKind::Expected).unwrap_err();
    assert!(matches!(
        err,
        StoreError::MissingRecord {
            kind: OutputKind::Expected,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "no expected output recorded for 'myprog'"
    );
}

#[rstest]
#[case("")]
#[case(".")]
#[case("..")]
#[case("a/b")]
#[case("a\\b")]
fn test_invalid_program_names(#[case] name: &str) {
    let (_dir, store) = temp_store();

    assert!(matches!(
        store.ensure_program(name),
        Err(StoreError::InvalidName(_))
    ));
}

#[test]
fn test_list_programs_sorted() {
    let (_dir, store) = temp_store();
    store.ensure_program("zeta").unwrap();
    store.ensure_program("alpha").unwrap();
    store.ensure_program("mid").unwrap();

    assert_eq!(
        store.list_programs().unwrap(),
        lines(&["alpha", "mid", "zeta"])
    );
}

#[test]
fn test_missing_root_lists_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProgramStore::new(dir.path().join("nowhere"));

    assert!(store.list_programs().unwrap().is_empty());
}

#[test]
fn test_report_round_trip() {
    let (_dir, store) = temp_store();
    let (report, _) = run_comparison(&["a"], &["b"], "myprog");

    store.save_reports("myprog", &report).unwrap();

    assert!(store.has_report("myprog", ReportFormat::Text));
    assert!(store.has_report("myprog", ReportFormat::Html));
    assert_eq!(store.read_report("myprog", ReportFormat::Text).unwrap(), report.text);
    assert_eq!(store.read_report("myprog", ReportFormat::Html).unwrap(), report.html);
}

#[test]
fn test_missing_report_is_not_found() {
    let (_dir, store) = temp_store();
    store.ensure_program("myprog").unwrap();

    let err = store.read_report("myprog", ReportFormat::Text).unwrap_err();
    assert!(matches!(err, StoreError::MissingReport { .. }));
    assert_eq!(err.to_string(), "no text diff found for 'myprog'");
}

#[test]
fn test_delete_reports_keeps_recordings() {
    let (_dir, store) = temp_store();
    store
        .write_output("myprog", OutputKind::Expected, &lines(&["a"]))
        .unwrap();
    let (report, _) = run_comparison(&["a"], &["a"], "myprog");
    store.save_reports("myprog", &report).unwrap();

    store.delete_reports("myprog").unwrap();
    // Deleting again is fine.
    store.delete_reports("myprog").unwrap();

    assert!(!store.has_report("myprog", ReportFormat::Text));
    assert!(!store.has_report("myprog", ReportFormat::Html));
    assert!(store.read_output("myprog", OutputKind::Expected).is_ok());
}

#[test]
fn test_delete_program_removes_directory() {
    let (_dir, store) = temp_store();
    store
        .write_output("myprog", OutputKind::Expected, &lines(&["a"]))
        .unwrap();

    store.delete_program("myprog").unwrap();

    assert!(!store.program_dir("myprog").exists());
    // Deleting a program that never existed is fine too.
    store.delete_program("ghost").unwrap();
}
