//! Structure Scanner
//!
//! Walks document text once and recovers the ordered list of section
//! headings. The three notations are matched independently per line; since
//! the patterns are mutually exclusive a single pass yields the merged,
//! line-sorted result directly.
//!
//! Scanning is total: malformed or absent structure yields an empty list,
//! never an error.

use crate::rfc::patterns;
use serde::Serialize;

/// A recovered section heading.
///
/// `level` is nesting depth (1 = top). `prefix` is empty for uppercase
/// sections, `":"` for alternative sections, and the dotted numeral exactly
/// as it appeared (e.g. `2.1.`) for numbered sections. `line` is the
/// zero-based source line index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub level: usize,
    pub line: usize,
    pub prefix: String,
}

impl Section {
    /// The heading as it reads in the document, numeral included, trimmed.
    pub fn display_text(&self) -> String {
        if self.prefix.is_empty() || self.prefix == ":" {
            self.name.clone()
        } else {
            format!("{} {}", self.prefix, self.name)
        }
    }
}

/// Scan the whole document for section headings, in source-line order.
pub fn scan(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    for (line_index, line) in text.lines().enumerate() {
        if let Some(heading) = patterns::match_numbered_section(line) {
            sections.push(Section {
                name: heading.title.trim().to_string(),
                level: heading.depth(),
                line: line_index,
                prefix: heading.prefix(),
            });
            continue;
        }
        if let Some(name) = patterns::match_uppercase_section(line) {
            sections.push(Section {
                name: name.to_string(),
                level: 1,
                line: line_index,
                prefix: String::new(),
            });
            continue;
        }
        if let Some(name) = patterns::match_alternative_section(line) {
            sections.push(Section {
                name: name.trim().to_string(),
                level: 1,
                line: line_index,
                prefix: ":".to_string(),
            });
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_all_three_notations_in_line_order() {
        let text = "OVERVIEW\n\nSome prose.\n\n1. Intro\n\n2.1 Sub\n\n: Aside\n";
        let sections = scan(text);
        assert_eq!(sections.len(), 4);

        assert_eq!(sections[0].name, "OVERVIEW");
        assert_eq!(sections[0].level, 1);
        assert_eq!(sections[0].prefix, "");
        assert_eq!(sections[0].line, 0);

        assert_eq!(sections[1].name, "Intro");
        assert_eq!(sections[1].prefix, "1.");
        assert_eq!(sections[1].level, 1);

        assert_eq!(sections[2].name, "Sub");
        assert_eq!(sections[2].prefix, "2.1");
        assert_eq!(sections[2].level, 2);

        assert_eq!(sections[3].name, "Aside");
        assert_eq!(sections[3].prefix, ":");

        // Ordering invariant: ascending source line.
        assert!(sections.windows(2).all(|w| w[0].line < w[1].line));
    }

    #[test]
    fn unstructured_text_yields_empty_list() {
        let text = "just a paragraph\nand another line\n";
        assert!(scan(text).is_empty());
    }

    #[test]
    fn display_text_restores_the_heading() {
        let sections = scan("2.1 Sub\n\nOVERVIEW\n\n: Aside\n");
        assert_eq!(sections[0].display_text(), "2.1 Sub");
        assert_eq!(sections[1].display_text(), "OVERVIEW");
        assert_eq!(sections[2].display_text(), "Aside");
    }

    #[test]
    fn indented_numerals_are_not_sections() {
        assert!(scan("    1. list item\n").is_empty());
    }
}
