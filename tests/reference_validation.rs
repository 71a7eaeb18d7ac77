//! Integration tests for cross-document reference validation.

use rfcdoc::rfc::references::{check_references, Severity};
use rfcdoc::rfc::testing::samples;
use tempfile::tempdir;

#[test]
fn missing_file_and_resolved_anchor_in_one_document() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("target.rfc"), samples::REFERENCE_TARGET).expect("write");

    let report = check_references(samples::REFERENCES, dir.path());
    assert_eq!(report.references_found, 2);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].severity, Severity::Error);
    assert_eq!(
        report.diagnostics[0].message,
        "Referenced file not found: missing.rfc"
    );
}

#[test]
fn numbered_anchor_resolves_against_subsection() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("target.rfc"), samples::REFERENCE_TARGET).expect("write");

    let report = check_references("see: target.rfc#2-1\n", dir.path());
    assert_eq!(report.references_found, 1);
    assert!(report.is_clean());
}

#[test]
fn relative_paths_resolve_against_the_base_directory() {
    let dir = tempdir().expect("tempdir");
    std::fs::create_dir(dir.path().join("notes")).expect("mkdir");
    std::fs::write(dir.path().join("notes/plan.rfc"), "1. Plan\n").expect("write");

    let report = check_references("see: notes/plan.rfc\n", dir.path());
    assert!(report.is_clean());

    // Same reference from a different base directory fails.
    let report = check_references("see: notes/plan.rfc\n", &dir.path().join("notes"));
    assert_eq!(report.diagnostics.len(), 1);
}

#[test]
fn diagnostics_carry_the_reference_range() {
    let dir = tempdir().expect("tempdir");
    let text = "intro line\nread this: see: gone.rfc now\n";
    let report = check_references(text, dir.path());
    assert_eq!(report.diagnostics.len(), 1);
    let diagnostic = &report.diagnostics[0];
    assert_eq!(diagnostic.line, 1);
    let line = "read this: see: gone.rfc now";
    assert_eq!(&line[diagnostic.start..diagnostic.end], "see: gone.rfc");
}

#[test]
fn reports_serialize_to_json() {
    let dir = tempdir().expect("tempdir");
    let report = check_references("see: absent.rfc\n", dir.path());
    let json = serde_json::to_string(&report).expect("serialize");
    assert!(json.contains("\"references_found\":1"));
    assert!(json.contains("\"severity\":\"error\""));
}

#[test]
fn anchorless_reference_to_existing_file_is_clean() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("plain.rfc"), "no sections\n").expect("write");
    let report = check_references("see: plain.rfc\n", dir.path());
    assert!(report.is_clean());
    assert_eq!(report.references_found, 1);
}
