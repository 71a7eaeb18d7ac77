//! Canonical sample documents for tests.
//!
//! Integration tests pull their inputs from here instead of copying document
//! text around, so the samples stay the single source of truth for what a
//! well-formed (or deliberately broken) structural document looks like.

/// Sample documents, one constant per shape under test.
pub mod samples {
    /// Title, metadata, numbered sections at two depths, no TOC.
    pub const NUMBERED_NO_TOC: &str = "\
Payments Design
===============

Author     Jane Doe
Status:    Draft

1. Intro

Opening prose.

2. Main

Main prose.

2.1 Sub

Nested prose.

3. End

Closing prose.
";

    /// All three heading notations mixed.
    pub const MIXED_NOTATIONS: &str = "\
OVERVIEW

General remarks.

1. Scope

Scope prose.

: Aside

An alternative-notation section.
";

    /// Footnotes declared out of numeric order, referenced in the body.
    pub const SCRAMBLED_FOOTNOTES: &str = "\
1. Intro

First claim[3] and a second one[1], then more[5], another[2], last[4].

[3] Declared first
[1] Declared second
[5] Declared third
[2] Declared fourth
[4] Declared fifth
";

    /// Sections and lists with deliberately broken numbering.
    pub const BROKEN_NUMBERING: &str = "\
1. Intro

5. Main

    4. first item
    9. second item
        c. nested one
        f. nested two

5.3. Sub

3. End
";

    /// References to a present and a missing target.
    pub const REFERENCES: &str = "\
1. Intro

Background reading: see: target.rfc#2-1 and see: missing.rfc
";

    /// The content referenced by [`REFERENCES`].
    pub const REFERENCE_TARGET: &str = "\
1. Intro

2. Details

2.1 Subsection One

Prose.
";
}
