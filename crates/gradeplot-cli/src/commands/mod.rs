//! CLI command implementations.

pub mod plot;
pub mod resolve;
pub mod schemes;

use colored::Colorize;
use gradeplot::{Diagnostic, LabelInput, Severity};

use crate::cli::LabelArgs;

/// Build the library input from the command line.
///
/// No positional labels and no `--input-json` means the values are absent.
pub(crate) fn label_input(args: &LabelArgs) -> gradeplot::Result<LabelInput> {
    match &args.input_json {
        Some(json) => LabelInput::from_json(json),
        None if args.labels.is_empty() => Ok(LabelInput::Absent),
        None => Ok(LabelInput::flat(args.labels.iter().map(String::as_str))),
    }
}

/// Print diagnostics coloured by severity.
pub(crate) fn print_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    println!("{}", "Diagnostics:".yellow().bold());
    for diag in diagnostics {
        let tag = match diag.severity {
            Severity::Warning => format!("[{}]", diag.severity.label()).yellow().bold(),
            Severity::Info => format!("[{}]", diag.severity.label()).blue().bold(),
        };
        println!("  {} {}: {}", tag, diag.kind.label().white(), diag.message);
        if let Some(scheme) = diag.suggested_scheme {
            println!("      {} --force {}", "try".dimmed(), scheme.to_string().cyan());
        }
    }
    println!();
}
