//! Numbering Repair Engine
//!
//! A single-pass, line-oriented state machine. Two explicit stacks of
//! [`CounterFrame`]s track "where we are": one for dotted section numerals,
//! one for nested list counters. Numbering is recomputed from structural
//! position, never incrementally patched, so manually introduced gaps and
//! duplicates are simply overwritten.
//!
//! State rules:
//!   - a numbered section heading resets the list stack and advances the
//!     section stack at the depth encoded by its numeral's group count
//!     (the numeral's values are discarded);
//!   - an ordered list item advances the list stack at its indentation
//!     bucket; the canonical marker style cycles numeric, lettered, numeric,
//!     lettered by nesting level;
//!   - a blank line closes the current list scope;
//!   - everything else passes through without touching either stack.

use crate::rfc::patterns::{self, LineKind, SectionLine};
use crate::rfc::toc;

/// Numbering style carried by one level of a counter stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterStyle {
    Numeric,
    Lettered,
    Roman,
    SectionDotted,
}

/// One open nesting level: its depth, style, and current count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub depth: usize,
    pub style: CounterStyle,
    pub value: usize,
}

/// Result of a numbering repair pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingFix {
    pub text: String,
    /// Lines whose leading numeral token differed from its recomputed value.
    pub lines_changed: usize,
}

/// Indentation columns per list nesting bucket.
const COLS_PER_BUCKET: usize = 4;

/// Recompute every section and ordered-list numeral in the document.
pub fn fix_numbering(text: &str) -> NumberingFix {
    let ends_with_newline = text.ends_with('\n');
    let lines: Vec<&str> = text.lines().collect();
    let toc_block = toc::locate_toc_block(&lines);

    let mut section_stack: Vec<CounterFrame> = Vec::new();
    let mut list_stack: Vec<CounterFrame> = Vec::new();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut lines_changed = 0;

    for (index, line) in lines.iter().enumerate() {
        // TOC entries repeat heading text but are not headings.
        if toc_block.is_some_and(|b| b.contains_line(index)) {
            out.push((*line).to_string());
            continue;
        }

        match patterns::classify_line(line) {
            LineKind::Blank => {
                list_stack.clear();
                out.push((*line).to_string());
            }
            LineKind::Section(SectionLine::Numbered(heading)) => {
                list_stack.clear();
                advance_section(&mut section_stack, heading.depth());
                let prefix = render_section_prefix(&section_stack);
                let rewritten = format!("{}{}", prefix, &line[heading.marker_len()..]);
                if rewritten != *line {
                    lines_changed += 1;
                }
                out.push(rewritten);
            }
            LineKind::Section(_) => {
                // Uppercase and alternative headings carry no numeral to
                // repair, but they still open a new list scope.
                list_stack.clear();
                out.push((*line).to_string());
            }
            LineKind::ListItem(marker) if marker.is_ordered() => {
                let bucket = marker.indent_cols / COLS_PER_BUCKET;
                advance_list(&mut list_stack, bucket);
                let frame = list_stack
                    .last()
                    .copied()
                    .unwrap_or(CounterFrame {
                        depth: bucket,
                        style: CounterStyle::Numeric,
                        value: 1,
                    });
                let rewritten = format!(
                    "{}{}{}",
                    &line[..marker.indent_end],
                    render_marker(frame.style, frame.value),
                    &line[marker.marker_end..]
                );
                if rewritten != *line {
                    lines_changed += 1;
                }
                out.push(rewritten);
            }
            LineKind::ListItem(_)
            | LineKind::Quote
            | LineKind::CodeBlock
            | LineKind::Metadata
            | LineKind::Text => {
                out.push((*line).to_string());
            }
        }
    }

    let mut text = out.join("\n");
    if ends_with_newline {
        text.push('\n');
    }
    NumberingFix {
        text,
        lines_changed,
    }
}

/// Advance the section stack at `depth` (1-based, contiguous). Deeper frames
/// are popped; missing intermediate levels are opened at 1.
fn advance_section(stack: &mut Vec<CounterFrame>, depth: usize) {
    stack.truncate(depth);
    if stack.len() == depth {
        if let Some(frame) = stack.last_mut() {
            frame.value += 1;
        }
    } else {
        while stack.len() < depth {
            stack.push(CounterFrame {
                depth: stack.len() + 1,
                style: CounterStyle::SectionDotted,
                value: 1,
            });
        }
    }
}

/// Advance the list stack at the given indentation bucket. Buckets need not
/// be contiguous; the style of a new frame follows the numeric/lettered
/// cycle by nesting level.
fn advance_list(stack: &mut Vec<CounterFrame>, bucket: usize) {
    while stack.last().is_some_and(|frame| frame.depth > bucket) {
        stack.pop();
    }
    match stack.last_mut() {
        Some(frame) if frame.depth == bucket => frame.value += 1,
        _ => {
            let style = if stack.len() % 2 == 0 {
                CounterStyle::Numeric
            } else {
                CounterStyle::Lettered
            };
            stack.push(CounterFrame {
                depth: bucket,
                style,
                value: 1,
            });
        }
    }
}

/// Dotted prefix for the current section stack, e.g. `2.1.`.
fn render_section_prefix(stack: &[CounterFrame]) -> String {
    let mut prefix = stack
        .iter()
        .map(|frame| frame.value.to_string())
        .collect::<Vec<_>>()
        .join(".");
    prefix.push('.');
    prefix
}

/// Canonical marker token for one list counter, trailing dot included.
fn render_marker(style: CounterStyle, value: usize) -> String {
    match style {
        CounterStyle::Numeric | CounterStyle::SectionDotted => format!("{value}."),
        CounterStyle::Lettered => {
            let letter = (b'a' + ((value - 1) % 26) as u8) as char;
            format!("{letter}.")
        }
        CounterStyle::Roman => format!("{}.", to_roman(value)),
    }
}

/// Lowercase roman numeral for `value` (1-based).
fn to_roman(value: usize) -> String {
    const TABLE: [(usize, &str); 13] = [
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];
    let mut remaining = value;
    let mut out = String::new();
    for (weight, digits) in TABLE {
        while remaining >= weight {
            out.push_str(digits);
            remaining -= weight;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recomputes_section_numerals_from_group_count() {
        let text = "1. Intro\n\n5. Main\n\n5.3. Sub\n";
        let fix = fix_numbering(text);
        assert_eq!(fix.text, "1. Intro\n\n2. Main\n\n2.1. Sub\n");
        assert_eq!(fix.lines_changed, 2);
    }

    #[test]
    fn second_pass_changes_nothing() {
        let text = "1. Intro\n\n5. Main\n\n5.3. Sub\n\n    3. item\n    9. item\n";
        let first = fix_numbering(text);
        let second = fix_numbering(&first.text);
        assert_eq!(second.lines_changed, 0);
        assert_eq!(second.text, first.text);
    }

    #[test]
    fn nested_lists_cycle_numeric_then_lettered() {
        let text = "1. Section\n\n    4. first\n        c. nested\n        f. nested\n    9. second\n";
        let fix = fix_numbering(text);
        assert_eq!(
            fix.text,
            "1. Section\n\n    1. first\n        a. nested\n        b. nested\n    2. second\n"
        );
    }

    #[test]
    fn blank_line_closes_the_list_scope() {
        let text = "    1. one\n    2. two\n\n    7. restart\n";
        let fix = fix_numbering(text);
        assert_eq!(fix.text, "    1. one\n    2. two\n\n    1. restart\n");
    }

    #[test]
    fn sections_reset_list_numbering() {
        let text = "1. First\n    3. item\n2. Second\n    3. item\n";
        let fix = fix_numbering(text);
        assert_eq!(fix.text, "1. First\n    1. item\n2. Second\n    1. item\n");
    }

    #[test]
    fn roman_and_lettered_markers_are_repaired_to_depth_style() {
        let text = "    iv. one\n    ix. two\n";
        let fix = fix_numbering(text);
        assert_eq!(fix.text, "    1. one\n    2. two\n");
        assert_eq!(fix.lines_changed, 2);
    }

    #[test]
    fn missing_intermediate_section_levels_open_at_one() {
        let text = "1. Top\n\n1.1.1. Deep\n";
        let fix = fix_numbering(text);
        assert_eq!(fix.text, "1. Top\n\n1.1.1. Deep\n");
        assert_eq!(fix.lines_changed, 0);
    }

    #[test]
    fn toc_entries_are_not_renumbered() {
        let text = "TABLE OF CONTENTS\n-----------------\n\n1. Intro\n2. Main\n\n1. Intro\n\n5. Main\n";
        let fix = fix_numbering(text);
        let lines: Vec<&str> = fix.text.lines().collect();
        assert_eq!(lines[3], "1. Intro");
        assert_eq!(lines[4], "2. Main");
        assert_eq!(lines[6], "1. Intro");
        assert_eq!(lines[8], "2. Main");
    }

    #[test]
    fn body_and_quotes_pass_through() {
        let text = "1. Section\n\nplain prose with 5. in it\n> 9. quoted\n";
        let fix = fix_numbering(text);
        assert_eq!(fix.text, text);
        assert_eq!(fix.lines_changed, 0);
    }

    #[test]
    fn roman_rendering_is_exercised_by_the_style_table() {
        assert_eq!(render_marker(CounterStyle::Roman, 4), "iv.");
        assert_eq!(render_marker(CounterStyle::Roman, 1987), "mcmlxxxvii.");
        assert_eq!(render_marker(CounterStyle::Lettered, 2), "b.");
        assert_eq!(render_marker(CounterStyle::Numeric, 12), "12.");
    }
}
