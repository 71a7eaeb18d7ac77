//! Core engines for the rfc structural document format.
//!
//! The modules here mirror the one-way data flow of the system: raw text is
//! scanned into `Section` records by [`scanner`], which feed the table of
//! contents synthesizer ([`toc`]) and the numbering repair engine
//! ([`numbering`]). Footnote renumbering ([`footnotes`]) and reference
//! validation ([`references`]) run their own independent passes over the raw
//! text. [`format`] sequences the individual transforms into the full
//! formatting operation, and [`processor`] is the uniform entry point used by
//! the CLI and by embedding callers.

pub mod footnotes;
pub mod format;
pub mod numbering;
pub mod patterns;
pub mod processor;
pub mod references;
pub mod scanner;
pub mod testing;
pub mod toc;
