//! Pattern Library
//!
//! The fixed set of line-level recognizers shared by every engine. All
//! patterns are compiled once behind `once_cell::sync::Lazy` statics; the
//! recognizers themselves are pure functions over a single line of text.
//!
//! Classification is mutually exclusive by construction: a line can satisfy
//! at most one of the three section notations, and [`classify_line`] applies
//! the predicates in a fixed order so every line receives exactly one
//! [`LineKind`] tag.

use once_cell::sync::Lazy;
use regex::Regex;

/// A line consisting solely of uppercase letters, spaces and hyphens.
/// The colon is deliberately absent from the class so metadata and
/// `NOTE:`-style lines never qualify.
static UPPERCASE_SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z -]*$").unwrap());

/// Dotted-numeral heading: one or more digit groups, an optional trailing
/// dot, whitespace, then the title. A single group without its trailing dot
/// (`1990 was a year`) is rejected by [`match_numbered_section`].
static NUMBERED_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)*)(\.?)[ \t]+(\S.*)$").unwrap());

/// Alternative section notation: a colon-space prefix at column zero.
static ALT_SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^: (\S.*)$").unwrap());

/// Metadata line: a short key (optionally colon-terminated) separated from
/// its value by a run of two or more spaces.
static METADATA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*:? {2,}\S.*$").unwrap());

/// Footnote declaration: the bracketed number at column zero plus its text.
static FOOTNOTE_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(\d+)\][ \t]+(.*)$").unwrap());

/// Any bracketed-number token, declaration and in-text reference alike.
static FOOTNOTE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(\d+)\]").unwrap());

/// Cross-document reference: `see: path` with an optional `#anchor`.
static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"see:[ \t]*([A-Za-z0-9_~./\\-]+)(?:#([A-Za-z0-9_-]+))?").unwrap());

/// Ordered list marker: digits, a roman numeral run, or a single letter,
/// followed by a dot and whitespace. Alternation order matters: `iv.` must
/// capture the whole roman run, not a single letter.
static ORDERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]*)(\d+|[ivxlcdm]+|[IVXLCDM]+|[A-Za-z])\.[ \t]+\S").unwrap());

/// Unordered list marker: `-` or `*` bullet.
static BULLET_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([ \t]*)([-*])[ \t]+\S").unwrap());

/// Quote line: optional indentation then `>`.
static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*>").unwrap());

/// Title underline: a run of `=` or `-` characters.
static UNDERLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[=-]{3,}$").unwrap());

/// Indentation at or beyond this column counts as a code block when the line
/// is not a list item.
const CODE_BLOCK_COLUMN: usize = 8;

/// Which of the three section notations a heading uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStyle {
    Uppercase,
    Numbered,
    Alternative,
}

/// A successfully matched dotted-numeral heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedHeading<'a> {
    /// The numeral string without any trailing dot, e.g. `2.1`.
    pub numeral: &'a str,
    pub has_trailing_dot: bool,
    pub title: &'a str,
}

impl NumberedHeading<'_> {
    /// Nesting depth encoded by the numeral: number of digit groups.
    pub fn depth(&self) -> usize {
        self.numeral.split('.').count()
    }

    /// Byte length of the leading numeral token, trailing dot included.
    pub fn marker_len(&self) -> usize {
        self.numeral.len() + usize::from(self.has_trailing_dot)
    }

    /// The numeral exactly as it appeared, trailing dot included.
    pub fn prefix(&self) -> String {
        if self.has_trailing_dot {
            format!("{}.", self.numeral)
        } else {
            self.numeral.to_string()
        }
    }
}

/// Marker style recognized on a list item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    Numeric,
    Lettered,
    Roman,
    Bullet,
}

/// A list item marker with the byte spans needed to rewrite it in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    /// Byte offset where the indentation ends and the marker begins.
    pub indent_end: usize,
    /// Byte offset just past the marker token (the dot for ordered markers,
    /// the bullet character for unordered ones).
    pub marker_end: usize,
    /// Indentation width in columns (tab = 4).
    pub indent_cols: usize,
    pub style: MarkerStyle,
}

impl ListMarker {
    pub fn is_ordered(&self) -> bool {
        self.style != MarkerStyle::Bullet
    }
}

/// A matched section heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionLine<'a> {
    Uppercase { name: &'a str },
    Numbered(NumberedHeading<'a>),
    Alternative { name: &'a str },
}

/// Tagged classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Quote,
    Metadata,
    Section(SectionLine<'a>),
    ListItem(ListMarker),
    CodeBlock,
    Text,
}

/// Indentation width in columns, counting a tab as four columns.
pub fn indent_cols(indent: &str) -> usize {
    indent.chars().map(|c| if c == '\t' { 4 } else { 1 }).sum()
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

pub fn is_quote(line: &str) -> bool {
    QUOTE.is_match(line)
}

pub fn is_metadata(line: &str) -> bool {
    METADATA.is_match(line)
}

pub fn is_underline(line: &str) -> bool {
    UNDERLINE.is_match(line)
}

pub fn match_uppercase_section(line: &str) -> Option<&str> {
    if UPPERCASE_SECTION.is_match(line) {
        Some(line.trim())
    } else {
        None
    }
}

/// Match a dotted-numeral heading. A single digit group only qualifies when
/// its trailing dot is present, so ordinary prose starting with a number is
/// not a heading.
pub fn match_numbered_section(line: &str) -> Option<NumberedHeading<'_>> {
    let caps = NUMBERED_SECTION.captures(line)?;
    let numeral = caps.get(1).map(|m| m.as_str())?;
    let has_trailing_dot = !caps[2].is_empty();
    if !has_trailing_dot && !numeral.contains('.') {
        return None;
    }
    Some(NumberedHeading {
        numeral,
        has_trailing_dot,
        title: caps.get(3).map(|m| m.as_str())?,
    })
}

pub fn match_alternative_section(line: &str) -> Option<&str> {
    ALT_SECTION
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether the line satisfies any of the three section predicates.
pub fn is_section_line(line: &str) -> bool {
    match_numbered_section(line).is_some()
        || match_uppercase_section(line).is_some()
        || match_alternative_section(line).is_some()
}

/// Match a list item marker (ordered or bullet) with its indentation.
pub fn parse_list_marker(line: &str) -> Option<ListMarker> {
    if let Some(caps) = ORDERED_MARKER.captures(line) {
        let indent = caps.get(1)?;
        let marker = caps.get(2)?;
        let token = marker.as_str();
        let style = if token.chars().all(|c| c.is_ascii_digit()) {
            MarkerStyle::Numeric
        } else if token.len() > 1 || token.chars().all(|c| "ivxlcdmIVXLCDM".contains(c)) {
            MarkerStyle::Roman
        } else {
            MarkerStyle::Lettered
        };
        return Some(ListMarker {
            indent_end: indent.end(),
            marker_end: marker.end() + 1, // include the dot
            indent_cols: indent_cols(indent.as_str()),
            style,
        });
    }
    if let Some(caps) = BULLET_MARKER.captures(line) {
        let indent = caps.get(1)?;
        let marker = caps.get(2)?;
        return Some(ListMarker {
            indent_end: indent.end(),
            marker_end: marker.end(),
            indent_cols: indent_cols(indent.as_str()),
            style: MarkerStyle::Bullet,
        });
    }
    None
}

/// Footnote declaration on a line: `(original number, text)`.
pub fn match_footnote_declaration(line: &str) -> Option<(&str, &str)> {
    let caps = FOOTNOTE_DECLARATION.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// The shared `[n]` token pattern used by the footnote rewrite pass.
pub fn footnote_token() -> &'static Regex {
    &FOOTNOTE_TOKEN
}

/// The `see: path#anchor` pattern used by the reference validator.
pub fn reference_pattern() -> &'static Regex {
    &REFERENCE
}

/// Classify one line into exactly one [`LineKind`].
///
/// Order matters: metadata is tested before the uppercase predicate because
/// an all-caps key/value pair would otherwise read as a heading, and list
/// markers are tested before the code-block column rule so deeply nested
/// list items stay list items.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if is_blank(line) {
        return LineKind::Blank;
    }
    if is_quote(line) {
        return LineKind::Quote;
    }
    if let Some(heading) = match_numbered_section(line) {
        return LineKind::Section(SectionLine::Numbered(heading));
    }
    if is_metadata(line) {
        return LineKind::Metadata;
    }
    if let Some(name) = match_uppercase_section(line) {
        return LineKind::Section(SectionLine::Uppercase { name });
    }
    if let Some(name) = match_alternative_section(line) {
        return LineKind::Section(SectionLine::Alternative { name });
    }
    if let Some(marker) = parse_list_marker(line) {
        return LineKind::ListItem(marker);
    }
    let leading: String = line
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect();
    if indent_cols(&leading) >= CODE_BLOCK_COLUMN {
        return LineKind::CodeBlock;
    }
    LineKind::Text
}
