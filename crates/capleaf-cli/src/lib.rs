//! CLI logic for the capleaf extractor.
//!
//! This module contains the core CLI logic: configuration loading, label
//! extraction, printing, and the optional module and Markdown outputs.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::io::Write;

use log::info;

use capleaf::{CapleafError, Emitter, Extractor, markdown};

/// Run the capleaf CLI application
///
/// Labels are printed to `stdout`, one per line, before any file is written.
/// Confirmation lines for the module and Markdown outputs go to `stderr`.
///
/// # Arguments
///
/// * `args` - Command-line arguments
/// * `stdout` - Destination of the label list
/// * `stderr` - Destination of status lines
///
/// # Errors
///
/// Returns `CapleafError` for:
/// - Configuration loading errors
/// - Diagram read or parse errors
/// - Module write errors
/// - Markdown update errors
pub fn run(
    args: &Args,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<(), CapleafError> {
    info!(
        input_path = args.input,
        ts_out:? = args.ts_out,
        md:? = args.md;
        "Processing diagram"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(sort) = args.sort_override() {
        app_config = app_config.with_sort(sort);
    }

    let emitter = Emitter::new(app_config.emit().clone())?;
    let extractor = Extractor::new(app_config.extract().clone());

    let labels = extractor.extract(&args.input)?;

    for label in &labels {
        writeln!(stdout, "{label}")?;
    }
    stdout.flush()?;

    if let Some(ts_out) = &args.ts_out {
        emitter.emit(&labels, ts_out)?;
        writeln!(stderr, "Wrote {} capabilities to {ts_out}", labels.len())?;
    }

    if let Some(md) = &args.md {
        let update = markdown::update_file(md, &labels)?;
        writeln!(stderr, "{update} ({md})")?;
    }

    info!(capabilities = labels.len(); "Completed successfully");

    Ok(())
}

/// Process exit status for a failed run.
///
/// `2` is left to clap for command-line usage errors.
pub fn exit_code(err: &CapleafError) -> i32 {
    match err {
        CapleafError::Read { .. } | CapleafError::Parse { .. } => 1,
        CapleafError::Write(_) => 3,
        CapleafError::Markdown(_) => 4,
        CapleafError::Config(_) => 5,
        CapleafError::Io(_) => 6,
    }
}
