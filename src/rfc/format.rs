//! Layout normalization and the full formatting sequence.
//!
//! Normalization is the only transform driven by configuration: trailing
//! whitespace, blank-line runs and the final newline are brought to the
//! configured shape. The full formatting operation sequences
//! normalize → TOC synthesis → footnote renumbering and adds no algorithm of
//! its own.

use crate::config::{FormattingRules, RfcConfig};
use crate::rfc::{footnotes, toc};

/// Normalize document layout according to the formatting rules.
///
/// Idempotent: a second application over its own output is a no-op.
pub fn normalize(text: &str, rules: &FormattingRules) -> String {
    let mut lines: Vec<String> = text
        .lines()
        .map(|line| {
            if rules.trim_trailing_whitespace {
                line.trim_end().to_string()
            } else {
                line.to_string()
            }
        })
        .collect();

    // Collapse blank runs beyond the configured maximum.
    let mut collapsed: Vec<String> = Vec::with_capacity(lines.len());
    let mut blank_run = 0usize;
    for line in lines.drain(..) {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > rules.max_blank_lines {
                continue;
            }
            collapsed.push(String::new());
        } else {
            blank_run = 0;
            collapsed.push(line);
        }
    }

    if rules.ensure_final_newline {
        while collapsed.last().is_some_and(|line| line.is_empty()) {
            collapsed.pop();
        }
        let mut result = collapsed.join("\n");
        result.push('\n');
        result
    } else {
        let mut result = collapsed.join("\n");
        if text.ends_with('\n') {
            result.push('\n');
        }
        result
    }
}

/// The full formatting operation: normalize layout, refresh the table of
/// contents, renumber footnotes.
pub fn format_document(text: &str, config: &RfcConfig) -> String {
    let normalized = normalize(text, &config.formatting);
    let with_toc = toc::process_toc(&normalized);
    footnotes::process_footnotes(&with_toc).text
}
