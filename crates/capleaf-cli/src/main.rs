//! capleaf CLI entry point.

use std::{io, process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, info};

use capleaf_cli::{Args, error_adapter::to_reportable, exit_code};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting capleaf");
    debug!(args:?; "Parsed arguments");

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();

    if let Err(err) = capleaf_cli::run(&args, &mut stdout, &mut stderr) {
        let reporter = miette::GraphicalReportHandler::new();
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &to_reportable(&err))
            .expect("Writing to String buffer is infallible");

        debug!(code = exit_code(&err); "Run failed");
        eprint!("{writer}");

        process::exit(exit_code(&err));
    }
}
