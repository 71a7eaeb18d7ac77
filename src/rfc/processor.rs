//! Operation dispatch for structural documents.
//!
//! This is the single entry point shared by the CLI and embedding callers:
//! it gates applicability on the configured file extensions, reads the
//! document, runs the requested engine, and returns a typed output. Every
//! error is a value; nothing here panics on user input.

use crate::config::RfcConfig;
use crate::rfc::references::ReferenceReport;
use crate::rfc::scanner::Section;
use crate::rfc::{footnotes, format, numbering, references, scanner, toc};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// The operations exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// normalize → TOC synthesis → footnote renumbering
    Format,
    /// Synthesize or refresh the table of contents only.
    Toc,
    /// Renumber footnotes into declaration order.
    Footnotes,
    /// Repair section and list numbering.
    Numbering,
    /// Validate cross-document references.
    CheckReferences,
    /// List the recovered section structure.
    Outline,
}

impl Operation {
    /// Parse an operation name as accepted on the command line.
    pub fn from_name(name: &str) -> Result<Self, ProcessingError> {
        match name {
            "format" => Ok(Operation::Format),
            "toc" => Ok(Operation::Toc),
            "footnotes" => Ok(Operation::Footnotes),
            "numbering" => Ok(Operation::Numbering),
            "check-refs" => Ok(Operation::CheckReferences),
            "outline" => Ok(Operation::Outline),
            other => Err(ProcessingError::UnknownOperation(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Format => "format",
            Operation::Toc => "toc",
            Operation::Footnotes => "footnotes",
            Operation::Numbering => "numbering",
            Operation::CheckReferences => "check-refs",
            Operation::Outline => "outline",
        }
    }
}

/// Errors surfaced by the processing boundary.
#[derive(Debug)]
pub enum ProcessingError {
    /// The path is not recognized as a structural document.
    NotApplicable(PathBuf),
    UnknownOperation(String),
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::NotApplicable(path) => {
                write!(f, "Not a structural document: {}", path.display())
            }
            ProcessingError::UnknownOperation(name) => {
                write!(f, "Unknown operation: {name}")
            }
            ProcessingError::Io { path, source } => {
                write!(f, "I/O error on {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Typed output of one operation.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutput {
    /// A rewritten whole-document text.
    Text(String),
    /// Rewritten text plus the number of lines whose numbering changed.
    Numbering { text: String, lines_changed: usize },
    /// Reference diagnostics.
    References(ReferenceReport),
    /// The recovered section list.
    Outline(Vec<Section>),
}

impl OperationOutput {
    /// The rewritten text, when this operation produces one.
    pub fn text(&self) -> Option<&str> {
        match self {
            OperationOutput::Text(text) => Some(text),
            OperationOutput::Numbering { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Whether operations apply to this path at all.
pub fn is_structural_file(path: &Path, config: &RfcConfig) -> bool {
    let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    config
        .documents
        .extensions
        .iter()
        .any(|known| known.eq_ignore_ascii_case(extension))
}

/// Run an operation over in-memory text. `base_dir` is the directory used to
/// resolve cross-document references.
pub fn run_on_text(
    operation: Operation,
    text: &str,
    base_dir: &Path,
    config: &RfcConfig,
) -> OperationOutput {
    match operation {
        Operation::Format => OperationOutput::Text(format::format_document(text, config)),
        Operation::Toc => OperationOutput::Text(toc::process_toc(text)),
        Operation::Footnotes => OperationOutput::Text(footnotes::process_footnotes(text).text),
        Operation::Numbering => {
            let fix = numbering::fix_numbering(text);
            OperationOutput::Numbering {
                text: fix.text,
                lines_changed: fix.lines_changed,
            }
        }
        Operation::CheckReferences => {
            OperationOutput::References(references::check_references(text, base_dir))
        }
        Operation::Outline => OperationOutput::Outline(scanner::scan(text)),
    }
}

/// Run an operation on a document file. The extension is checked before any
/// scanning occurs.
pub fn run_on_file(
    operation: Operation,
    path: &Path,
    config: &RfcConfig,
) -> Result<OperationOutput, ProcessingError> {
    if !is_structural_file(path, config) {
        return Err(ProcessingError::NotApplicable(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| ProcessingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(run_on_text(operation, &text, base_dir, config))
}
