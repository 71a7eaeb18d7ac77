//! Integration tests for the structure scanner.
//!
//! Inputs come from the canonical samples in `rfc::testing::samples`; tests
//! verify recovered names, levels, prefixes and ordering rather than counts
//! alone.

use rfcdoc::rfc::scanner::{scan, Section};
use rfcdoc::rfc::testing::samples;
use rfcdoc::rfc::toc::render_toc_lines;

#[test]
fn scans_numbered_document() {
    let sections = scan(samples::NUMBERED_NO_TOC);
    let summary: Vec<(&str, usize, &str)> = sections
        .iter()
        .map(|s| (s.name.as_str(), s.level, s.prefix.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Intro", 1, "1."),
            ("Main", 1, "2."),
            ("Sub", 2, "2.1"),
            ("End", 1, "3."),
        ]
    );
}

#[test]
fn scans_mixed_notations() {
    let sections = scan(samples::MIXED_NOTATIONS);
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0].name, "OVERVIEW");
    assert_eq!(sections[0].prefix, "");
    assert_eq!(sections[1].name, "Scope");
    assert_eq!(sections[1].prefix, "1.");
    assert_eq!(sections[2].name, "Aside");
    assert_eq!(sections[2].prefix, ":");
}

#[test]
fn sections_are_sorted_by_line() {
    let sections = scan(samples::NUMBERED_NO_TOC);
    assert!(sections.windows(2).all(|w| w[0].line < w[1].line));
}

#[test]
fn toc_render_round_trips_the_scan() {
    // One rendered line per section, in scan order, after the three-line
    // header prelude.
    let text = samples::NUMBERED_NO_TOC;
    let lines: Vec<&str> = text.lines().collect();
    let sections = scan(text);
    let refs: Vec<&Section> = sections.iter().collect();
    let rendered = render_toc_lines(&refs, &lines);
    assert_eq!(rendered.len(), sections.len() + 3);
    for (entry, section) in rendered[3..].iter().zip(&sections) {
        assert!(entry.trim().ends_with(section.name.as_str()));
    }
}

#[test]
fn scanning_never_fails_on_arbitrary_text() {
    assert!(scan("").is_empty());
    assert!(scan("\n\n\n").is_empty());
    assert!(scan("completely unstructured\nprose with [1] and see: x\n").is_empty());
}

#[test]
fn sections_serialize_for_outline_output() {
    let sections = scan(samples::NUMBERED_NO_TOC);
    let json = serde_json::to_string(&sections).expect("serialize");
    assert!(json.contains("\"name\":\"Sub\""));
    assert!(json.contains("\"level\":2"));
}
