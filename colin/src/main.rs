//! # colin
//!
//! A CLI tool for counting meaningful lines of code.
//!
//! ## Overview
//!
//! colin is built on top of colinlib. It counts the lines of a file or a
//! directory tree that are not blank, not a lone brace and not a comment.
//! Block comments are tracked across lines, so a line is only skipped when
//! nothing on it sits outside `/* ... */`.
//!
//! ## Usage
//!
//! ```bash
//! # Count the current directory
//! colin .
//!
//! # One row per top-level entry, each covering everything beneath it
//! colin src --mode aggregate
//!
//! # One row per file
//! colin src --mode flat --output json
//!
//! # Only skip blank lines
//! colin src --filters empty
//!
//! # Show which lines were filtered out of a file
//! colin analyze src/main.rs --show rejected
//!
//! # Count standard input
//! cat src/main.rs | colin -
//! ```

mod render;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command, ValueEnum};
use colinlib::{
    EntryCount, EntryFilter, FilterKind, FilterSet, LineCounter, LineData, LineDataAnalyzer,
    SearchMode,
};
use tracing::{debug, info};

use render::{Format, OutputMode, Show};

const STDIN_PATH: &str = "-";

/// How `count` groups its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CountMode {
    /// One number for the whole path
    Total,
    /// One row per top-level entry
    Aggregate,
    /// One row per file
    Flat,
}

impl CountMode {
    fn search_mode(self) -> Option<SearchMode> {
        match self {
            CountMode::Total => None,
            CountMode::Aggregate => Some(SearchMode::Aggregate),
            CountMode::Flat => Some(SearchMode::Flat),
        }
    }
}

/// Arguments shared by the root command and its subcommands
fn common_args() -> Vec<Arg> {
    let filter_names: Vec<&str> = FilterKind::ALL.iter().map(|k| k.name()).collect();

    vec![
        Arg::new("path")
            .help("File or directory to analyze, '-' for standard input")
            .default_value("."),
        Arg::new("filters")
            .short('F')
            .long("filters")
            .default_value("standard")
            .help(format!(
                "Comma-separated filters: {} (or 'standard', 'none')",
                filter_names.join(", ")
            )),
        Arg::new("exclude")
            .short('e')
            .long("exclude")
            .action(ArgAction::Append)
            .help("Exclude entries matching glob pattern"),
        Arg::new("skip-hidden")
            .long("skip-hidden")
            .action(ArgAction::SetTrue)
            .help("Skip files and directories whose name starts with '.'"),
        Arg::new("output")
            .short('o')
            .long("output")
            .value_parser(value_parser!(Format))
            .default_value("table")
            .help("Output format"),
    ]
}

fn mode_arg() -> Arg {
    Arg::new("mode")
        .short('m')
        .long("mode")
        .value_parser(value_parser!(CountMode))
        .default_value("total")
        .help("total: one number; aggregate: one row per top-level entry; flat: one row per file")
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("colin")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Counts meaningful lines of code, skipping blanks, lone braces and comments")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-v, -vv, -vvv)"),
        )
        .args(common_args())
        .arg(mode_arg())
        .subcommand(
            Command::new("count")
                .about("Count meaningful lines (default command)")
                .args(common_args())
                .arg(mode_arg()),
        )
        .subcommand(
            Command::new("analyze")
                .about("List the lines of each file along with how they were classified")
                .args(common_args())
                .arg(
                    Arg::new("show")
                        .short('s')
                        .long("show")
                        .value_parser(value_parser!(Show))
                        .default_value("rejected")
                        .help("Which lines to print"),
                ),
        )
}

fn setup_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug,walkdir=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

/// Build the filter set from matches
fn build_filters(matches: &ArgMatches) -> anyhow::Result<FilterSet> {
    let list = matches
        .get_one::<String>("filters")
        .map(|s| s.as_str())
        .unwrap_or("standard");

    if list.eq_ignore_ascii_case("standard") {
        Ok(FilterSet::standard())
    } else {
        Ok(FilterSet::parse_list(list)?)
    }
}

/// Build the entry filter from matches
fn build_entry_filter(matches: &ArgMatches) -> anyhow::Result<EntryFilter> {
    let patterns: Vec<&str> = matches
        .get_many::<String>("exclude")
        .map(|values| values.map(String::as_str).collect())
        .unwrap_or_default();

    Ok(EntryFilter::new()
        .skip_hidden(matches.get_flag("skip-hidden"))
        .exclude_many(&patterns)?)
}

fn extract_path(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".")
}

fn extract_output(matches: &ArgMatches) -> OutputMode {
    matches
        .get_one::<Format>("output")
        .copied()
        .unwrap_or(Format::Table)
        .output_mode()
}

fn base_path(path: &str) -> PathBuf {
    if Path::new(path).is_dir() {
        PathBuf::from(path)
    } else {
        Path::new(path)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }
}

/// Handler for the count command
fn count_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = extract_path(matches);
    let output = extract_output(matches);
    let filters = build_filters(matches)?;
    debug!(?filters, "using filters");

    let counter = LineCounter::new()
        .filters(filters)
        .entries(build_entry_filter(matches)?);

    if path == STDIN_PATH {
        let lines = counter
            .apply_to_reader(std::io::stdin().lock())
            .context("failed to read standard input")?;
        return render::render_total("<stdin>", lines, output);
    }

    let mode = matches
        .get_one::<CountMode>("mode")
        .copied()
        .unwrap_or(CountMode::Total);

    match mode.search_mode() {
        None => {
            let lines = counter.apply_to(path)?;
            info!(path, lines, "counted");
            render::render_total(path, lines, output)
        }
        Some(mode) => {
            let entries: Vec<EntryCount> = counter
                .apply_to_directory(path, mode)?
                .collect::<colinlib::Result<_>>()?;
            info!(path, entries = entries.len(), "counted entries");
            render::render_entries(&entries, &base_path(path), output)
        }
    }
}

/// Handler for the analyze command
fn analyze_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = extract_path(matches);
    let output = extract_output(matches);
    let show = matches
        .get_one::<Show>("show")
        .copied()
        .unwrap_or(Show::Rejected);

    let analyzer = LineDataAnalyzer::new()
        .filters(build_filters(matches)?)
        .entries(build_entry_filter(matches)?);

    let records: Vec<LineData> = if path == STDIN_PATH {
        vec![analyzer
            .apply_to_reader("<stdin>", std::io::stdin().lock())
            .context("failed to read standard input")?]
    } else if Path::new(path).is_dir() {
        analyzer
            .apply_to_directory(path, SearchMode::Flat)?
            .collect::<colinlib::Result<_>>()?
    } else {
        vec![analyzer.apply_to(path)?]
    };

    render::render_analysis(&records, show, &base_path(path), output)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    setup_logging(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("count", sub)) => count_handler(sub),
        Some(("analyze", sub)) => analyze_handler(sub),
        // Root command without a subcommand counts
        _ => count_handler(&matches),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            if !output.is_empty() && !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
