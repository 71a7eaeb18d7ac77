//! TOC Synthesizer
//!
//! Renders the canonical table-of-contents block from a section scan,
//! locates any previously generated block, and replaces or inserts it.
//! Re-running on already-synthesized text reproduces byte-identical output.
//!
//! Block recognition has to contend with the fact that rendered entries
//! repeat the heading text, so a level-1 entry like `1. Intro` itself
//! satisfies the section predicates. Two rules keep the transform
//! idempotent and lossless:
//!   - a contiguous run below the header only counts as the entry list when
//!     every line in it is either indented or a heading-shaped line that
//!     reappears later in the document (entries mirror real headings; body
//!     headings do not mirror anything), and
//!   - sections whose lines fall inside the located block are excluded from
//!     the freshly rendered list.

use crate::rfc::patterns;
use crate::rfc::scanner::{self, Section};

/// Literal header line that identifies a TOC block.
pub const TOC_HEADER: &str = "TABLE OF CONTENTS";

/// Indent applied to every entry whose section level is greater than one.
const ENTRY_INDENT: &str = "    ";

/// Line range `[start, end)` occupied by an existing TOC block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocBlock {
    pub start: usize,
    pub end: usize,
}

impl TocBlock {
    pub fn contains_line(&self, line: usize) -> bool {
        line >= self.start && line < self.end
    }
}

/// Locate an existing TOC block: the first line literally equal to the
/// header, extended over its underline and entry list.
pub fn locate_toc_block(lines: &[&str]) -> Option<TocBlock> {
    let header = lines
        .iter()
        .position(|line| line.trim_end() == TOC_HEADER)?;
    let len = lines.len();

    let mut i = header + 1;
    if i < len && patterns::is_underline(lines[i].trim_end()) {
        i += 1;
    }
    let prelude_end = i;

    // First non-blank run below the prelude.
    let mut j = prelude_end;
    while j < len && patterns::is_blank(lines[j]) {
        j += 1;
    }
    if j == len {
        return Some(TocBlock {
            start: header,
            end: prelude_end,
        });
    }
    let mut k = j;
    while k < len && !patterns::is_blank(lines[k]) {
        k += 1;
    }

    let end = if run_is_entry_list(lines, j, k) {
        k
    } else {
        // The run belongs to the body; the block is just the header and its
        // underline.
        prelude_end
    };
    Some(TocBlock { start: header, end })
}

/// Whether the contiguous non-blank run `[start, end)` reads as a rendered
/// entry list rather than document body.
fn run_is_entry_list(lines: &[&str], start: usize, end: usize) -> bool {
    if start >= end {
        return false;
    }
    (start..end).all(|idx| {
        let line = lines[idx];
        if line.starts_with(ENTRY_INDENT) {
            return true;
        }
        // A column-zero entry repeats a heading that must exist somewhere
        // outside the run.
        patterns::is_section_line(line) && mirrors_heading(lines, start, end, line)
    })
}

/// Whether a heading-shaped entry line has a counterpart heading outside the
/// run. Numbered entries are matched by title so a stale numeral in the body
/// (the very thing the repair engine exists to fix) still counts as the
/// mirror; the other notations are matched verbatim. The mirror may precede
/// the block: a document whose first heading doubles as its title sits above
/// the insertion point.
fn mirrors_heading(lines: &[&str], start: usize, end: usize, line: &str) -> bool {
    let mut outside = lines[..start].iter().chain(lines[end..].iter());
    if let Some(entry) = patterns::match_numbered_section(line) {
        outside.any(|other| {
            patterns::match_numbered_section(other)
                .map(|heading| heading.title.trim() == entry.title.trim())
                .unwrap_or(false)
        })
    } else {
        outside.any(|other| other.trim_end() == line.trim_end())
    }
}

/// Render the canonical TOC lines for the given sections, in scan order.
/// Each entry is the raw heading line trimmed, indented one tier when the
/// section nests below the top level.
pub fn render_toc_lines(sections: &[&Section], lines: &[&str]) -> Vec<String> {
    let mut rendered = Vec::with_capacity(sections.len() + 3);
    rendered.push(TOC_HEADER.to_string());
    rendered.push("-".repeat(TOC_HEADER.len()));
    rendered.push(String::new());
    for section in sections {
        let text = lines
            .get(section.line)
            .map(|line| line.trim())
            .unwrap_or(&section.name)
            .to_string();
        if section.level > 1 {
            rendered.push(format!("{ENTRY_INDENT}{text}"));
        } else {
            rendered.push(text);
        }
    }
    rendered
}

/// Synthesize or refresh the table of contents. No sections means no-op.
pub fn process_toc(text: &str) -> String {
    let sections = scanner::scan(text);
    if sections.is_empty() {
        return text.to_string();
    }

    let ends_with_newline = text.ends_with('\n');
    let lines: Vec<&str> = text.lines().collect();
    let block = locate_toc_block(&lines);

    let visible: Vec<&Section> = match block {
        Some(b) => sections.iter().filter(|s| !b.contains_line(s.line)).collect(),
        None => sections.iter().collect(),
    };
    if visible.is_empty() {
        // Every heading sits inside the existing block; nothing to list.
        return text.to_string();
    }

    let rendered = render_toc_lines(&visible, &lines);
    let mut out: Vec<String> = Vec::with_capacity(lines.len() + rendered.len() + 2);
    match block {
        Some(b) => {
            out.extend(lines[..b.start].iter().map(|s| s.to_string()));
            out.extend(rendered);
            out.extend(lines[b.end..].iter().map(|s| s.to_string()));
        }
        None => {
            let at = insertion_point(&lines);
            out.extend(lines[..at].iter().map(|s| s.to_string()));
            if at > 0 && !patterns::is_blank(lines[at - 1]) {
                out.push(String::new());
            }
            out.extend(rendered);
            out.push(String::new());
            out.extend(lines[at..].iter().map(|s| s.to_string()));
        }
    }

    let mut result = out.join("\n");
    if ends_with_newline {
        result.push('\n');
    }
    result
}

/// Where a fresh TOC goes: after the metadata block, else after the first
/// blank line following a title/underline pair, else line 3.
fn insertion_point(lines: &[&str]) -> usize {
    // Metadata run, searched only above the first section heading.
    let mut idx = 0;
    while idx < lines.len() && !patterns::is_section_line(lines[idx]) {
        if patterns::is_metadata(lines[idx]) {
            let mut end = idx + 1;
            while end < lines.len() && patterns::is_metadata(lines[end]) {
                end += 1;
            }
            return end;
        }
        idx += 1;
    }

    // Title/underline pair at the very top.
    if lines.len() >= 2 && !patterns::is_blank(lines[0]) && patterns::is_underline(lines[1].trim_end())
    {
        let mut i = 2;
        while i < lines.len() && !patterns::is_blank(lines[i]) {
            i += 1;
        }
        if i < lines.len() {
            return i + 1;
        }
        return i;
    }

    3.min(lines.len())
}
