//! Footnote Renumberer
//!
//! Establishes declaration order, builds an old-to-new number mapping, and
//! rewrites the text in a single left-to-right pass. The mapping is keyed by
//! the string form of the original number: originals are arbitrary and need
//! not be contiguous, sorted, or small.

use crate::rfc::patterns;
use std::collections::HashMap;

/// Result of a footnote renumbering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteFix {
    pub text: String,
    /// Number of declarations found; the new numbers are exactly `1..=count`.
    pub declarations: usize,
}

/// Renumber footnotes into declaration order.
///
/// Every `[n]` token whose number maps to a declaration is rewritten to the
/// declaration's 1-based rank; tokens with no matching declaration pass
/// through untouched. Zero footnotes is a valid no-op.
pub fn process_footnotes(text: &str) -> FootnoteFix {
    let mut mapping: HashMap<String, usize> = HashMap::new();
    for line in text.lines() {
        if let Some((original, _)) = patterns::match_footnote_declaration(line) {
            let next = mapping.len() + 1;
            mapping.entry(original.to_string()).or_insert(next);
        }
    }

    let declarations = mapping.len();
    if declarations == 0 {
        return FootnoteFix {
            text: text.to_string(),
            declarations,
        };
    }

    let rewritten = patterns::footnote_token().replace_all(text, |caps: &regex::Captures<'_>| {
        match mapping.get(&caps[1]) {
            Some(new_number) => format!("[{new_number}]"),
            None => caps[0].to_string(),
        }
    });

    FootnoteFix {
        text: rewritten.into_owned(),
        declarations,
    }
}
