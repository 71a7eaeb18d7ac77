//! Reference Validator
//!
//! Scans `see: path#anchor` occurrences, resolves each path against the
//! source document's directory, and checks anchors against the target's
//! recovered section names under several slug conventions. Missing files,
//! unmatched anchors and I/O failures all surface as diagnostics attached to
//! the reference's range; nothing is thrown past this boundary.

use crate::rfc::patterns;
use crate::rfc::scanner;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Diagnostic severity, mirroring the editor-facing scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One finding attached to a reference's source range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Zero-based source line of the reference.
    pub line: usize,
    /// Byte column span of the reference within its line.
    pub start: usize,
    pub end: usize,
}

/// Outcome of a reference check over one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ReferenceReport {
    pub diagnostics: Vec<Diagnostic>,
    /// Every scanned reference, valid or not.
    pub references_found: usize,
}

impl ReferenceReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Validate every cross-document reference in `text`, resolving paths
/// relative to `base_dir`.
pub fn check_references(text: &str, base_dir: &Path) -> ReferenceReport {
    let mut report = ReferenceReport::default();

    for (line_index, line) in text.lines().enumerate() {
        for caps in patterns::reference_pattern().captures_iter(line) {
            report.references_found += 1;
            let whole = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            let path_text = &caps[1];
            let anchor = caps.get(2).map(|m| m.as_str());

            let push = |report: &mut ReferenceReport, message: String| {
                report.diagnostics.push(Diagnostic {
                    severity: Severity::Error,
                    message,
                    line: line_index,
                    start: whole.start(),
                    end: whole.end(),
                });
            };

            let resolved = base_dir.join(path_text);
            if !resolved.is_file() {
                push(
                    &mut report,
                    format!("Referenced file not found: {path_text}"),
                );
                continue;
            }

            let anchor = match anchor {
                Some(a) => a,
                None => continue,
            };
            match fs::read_to_string(&resolved) {
                Ok(target) => {
                    if !anchor_matches(&target, anchor) {
                        push(
                            &mut report,
                            format!("Anchor not found in target file: #{anchor}"),
                        );
                    }
                }
                Err(err) => {
                    push(
                        &mut report,
                        format!("Could not read referenced file: {path_text}: {err}"),
                    );
                }
            }
        }
    }

    report
}

/// Test an anchor against the target text under the four equivalence
/// classes, in order, short-circuiting on the first match.
pub fn anchor_matches(target: &str, anchor: &str) -> bool {
    let segments: Vec<&str> = anchor.split('-').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return false;
    }

    // (a) Numbered: all-digit segments joined with literal dots, matched as
    // a heading numeral regardless of title text. The trailing dot after the
    // final group is optional, matching both `2.1 Sub` and `2.1. Sub`.
    if segments
        .iter()
        .all(|s| s.chars().all(|c| c.is_ascii_digit()))
    {
        let pattern = format!(r"^{}\.?(\s|$)", segments.join(r"\."));
        if let Ok(re) = Regex::new(&pattern) {
            if target.lines().any(|line| re.is_match(line)) {
                return true;
            }
        }
    }

    let sections = scanner::scan(target);
    let words = segments.join(" ");

    // (b) Exact uppercase slug.
    let upper = words.to_uppercase();
    if sections
        .iter()
        .any(|s| s.prefix.is_empty() && s.name == upper)
    {
        return true;
    }

    // (c) Exact alternative/title-case slug.
    let title = title_case(&segments);
    if sections.iter().any(|s| s.prefix == ":" && s.name == title) {
        return true;
    }

    // (d) Case-insensitive substring over any section name.
    let needle = words.to_lowercase();
    sections
        .iter()
        .any(|s| s.name.to_lowercase().contains(&needle))
}

fn title_case(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
