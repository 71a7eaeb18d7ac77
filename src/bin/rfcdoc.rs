//! Command-line interface for rfcdoc
//! This binary runs the structural document operations (formatting, TOC
//! synthesis, footnote renumbering, numbering repair, reference checking,
//! outline listing) over `.rfc` files.
//!
//! Usage:
//!   rfcdoc `<path>` [--op `<operation>`] [--write] [--format `<format>`] [--config `<file>`]

use clap::{Arg, ArgAction, Command};
use rfcdoc::config::Loader;
use rfcdoc::rfc::processor::{self, Operation, OperationOutput};
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let matches = Command::new("rfcdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for formatting and checking structural plain-text documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the document")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("op")
                .long("op")
                .short('o')
                .help("Operation: format, toc, footnotes, numbering, check-refs, outline")
                .default_value("format"),
        )
        .arg(
            Arg::new("write")
                .long("write")
                .short('w')
                .help("Rewrite the document in place instead of printing to stdout")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Report output format: text or json")
                .default_value("text"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let op_name = matches.get_one::<String>("op").expect("op has a default");
    let report_format = matches
        .get_one::<String>("format")
        .expect("format has a default");
    let write = matches.get_flag("write");

    let mut loader = Loader::new();
    if let Some(config_path) = matches.get_one::<String>("config") {
        loader = loader.with_file(config_path);
    }
    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        process::exit(1);
    });

    let operation = Operation::from_name(op_name).unwrap_or_else(|e| {
        eprintln!("{e}");
        eprintln!("Available operations: format, toc, footnotes, numbering, check-refs, outline");
        process::exit(1);
    });

    let output = processor::run_on_file(operation, Path::new(path), &config).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    match output {
        OperationOutput::Text(text) => emit_text(path, &text, write),
        OperationOutput::Numbering {
            text,
            lines_changed,
        } => {
            emit_text(path, &text, write);
            eprintln!("{lines_changed} line(s) renumbered");
        }
        OperationOutput::References(report) => {
            if report_format == "json" {
                println!("{}", to_json(&report));
            } else {
                for diagnostic in &report.diagnostics {
                    eprintln!(
                        "{}:{}: {}",
                        path,
                        diagnostic.line + 1,
                        diagnostic.message
                    );
                }
                println!(
                    "{} reference(s) checked, {} problem(s)",
                    report.references_found,
                    report.diagnostics.len()
                );
            }
            if !report.is_clean() {
                process::exit(1);
            }
        }
        OperationOutput::Outline(sections) => {
            if report_format == "json" {
                println!("{}", to_json(&sections));
            } else {
                for section in &sections {
                    let indent = "    ".repeat(section.level.saturating_sub(1));
                    println!("{}{}", indent, section.display_text());
                }
            }
        }
    }
}

fn emit_text(path: &str, text: &str, write: bool) {
    if write {
        if let Err(e) = fs::write(path, text) {
            eprintln!("Could not write {path}: {e}");
            process::exit(1);
        }
    } else {
        print!("{text}");
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {e}");
        process::exit(1);
    })
}
