//! # rfcdoc
//!
//! Tools for structural plain-text documents: a line-oriented format that
//! encodes titles, hierarchical sections, metadata, lists, code blocks,
//! quotes, footnotes and cross-document references using only whitespace and
//! punctuation conventions.
//!
//! Every transformation is a pure function from document text to document
//! text (or to a result record). Structure is re-derived from scratch on each
//! invocation; nothing is cached between calls.

pub mod config;
pub mod rfc;
