//! Command-line argument definitions for the capleaf CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input diagram, the optional module
//! and Markdown outputs, label ordering, configuration file selection, and
//! logging verbosity.

use clap::Parser;

/// Command-line arguments for the capleaf extractor
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the diagrams.net XML export
    #[arg(help = "Path to the input diagram")]
    pub input: String,

    /// Write the labels as a JavaScript/TypeScript module to this path
    #[arg(short = 'o', long = "ts-out", visible_alias = "output")]
    pub ts_out: Option<String>,

    /// Update the capability list of this Markdown file in place
    #[arg(long)]
    pub md: Option<String>,

    /// Sort labels case-insensitively
    #[arg(long, overrides_with = "no_sort")]
    pub sort: bool,

    /// Keep labels in document order
    #[arg(long, overrides_with = "sort")]
    pub no_sort: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// The sort toggle given on the command line, if any.
    pub fn sort_override(&self) -> Option<bool> {
        match (self.sort, self.no_sort) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(["capleaf"].iter().chain(args)).expect("valid arguments")
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["diagram.xml"]);
        assert_eq!(args.input, "diagram.xml");
        assert!(args.ts_out.is_none());
        assert!(args.md.is_none());
        assert_eq!(args.sort_override(), None);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_output_aliases() {
        for flag in ["--ts-out", "--output", "-o"] {
            let args = parse(&["diagram.xml", flag, "out.ts"]);
            assert_eq!(args.ts_out.as_deref(), Some("out.ts"), "{flag}");
        }
    }

    #[test]
    fn test_last_sort_flag_wins() {
        assert_eq!(parse(&["d.xml", "--sort"]).sort_override(), Some(true));
        assert_eq!(parse(&["d.xml", "--no-sort"]).sort_override(), Some(false));
        assert_eq!(
            parse(&["d.xml", "--sort", "--no-sort"]).sort_override(),
            Some(false)
        );
        assert_eq!(
            parse(&["d.xml", "--no-sort", "--sort"]).sort_override(),
            Some(true)
        );
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        let err = Args::try_parse_from(["capleaf"]).expect_err("input is required");
        assert_eq!(err.exit_code(), 2);
    }
}
