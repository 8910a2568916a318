//! Template rendering for CLI output using outstanding

use std::path::Path;

use clap::ValueEnum;
use colinlib::{EntryCount, LineData};
use console::Style;
use outstanding::{render_auto, render_with_output, Theme};
use serde::Serialize;

/// Include templates at compile time
const ENTRIES_TABLE_TEMPLATE: &str = include_str!("../templates/entries_table.jinja");
const TOTAL_TEMPLATE: &str = include_str!("../templates/total.jinja");
const ANALYSIS_TEMPLATE: &str = include_str!("../templates/analysis.jinja");

const NAME_WIDTH: usize = 50;
const CELL_WIDTH: usize = 10;

/// Re-export OutputMode for callers
pub use outstanding::OutputMode;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned table, styled when writing to a terminal
    Table,
    /// Pretty-printed JSON
    Json,
}

impl Format {
    pub fn output_mode(self) -> OutputMode {
        match self {
            Format::Table => OutputMode::Auto,
            Format::Json => OutputMode::Json,
        }
    }
}

/// Which lines `analyze` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Show {
    /// Lines that were counted
    Passed,
    /// Lines that were filtered out
    Rejected,
    /// Every line, marked with its verdict
    All,
}

/// JSON shape for a per-entry listing
#[derive(Debug, Serialize)]
struct EntriesReport<'a> {
    entries: &'a [EntryCount],
    total: u64,
}

/// JSON shape for a single total
#[derive(Debug, Serialize)]
struct TotalReport<'a> {
    path: &'a str,
    lines: u64,
}

/// Data context for the entries table template
#[derive(Debug, Serialize)]
struct EntriesTableContext {
    /// Pre-padded header row
    header: String,
    /// Separator line (dashes)
    separator: String,
    /// Pre-padded data rows
    rows: Vec<String>,
    /// Pre-padded total row
    total: String,
}

/// One analyzed line, ready for display
#[derive(Debug, Serialize)]
struct AnalysisLine {
    /// Verdict marker followed by the line
    text: String,
    /// Theme style name
    style: &'static str,
}

#[derive(Debug, Serialize)]
struct AnalysisRecord {
    header: String,
    lines: Vec<AnalysisLine>,
}

#[derive(Debug, Serialize)]
struct AnalysisContext {
    records: Vec<AnalysisRecord>,
}

/// Truncate a name to fit within max_len, adding ".." prefix if needed
fn truncate_name(name: &str, max_len: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() > max_len {
        let tail: String = chars[chars.len() - max_len + 2..].iter().collect();
        format!("..{tail}")
    } else {
        name.to_string()
    }
}

/// Convert a path to a relative path from the base directory
fn make_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| path.to_string_lossy().to_string())
}

/// Pad a name and a right-aligned cell into one table row
fn format_row(name: &str, cell: impl std::fmt::Display) -> String {
    format!(
        "{:<name_width$}{:>cell_width$}",
        truncate_name(name, NAME_WIDTH - 2),
        cell,
        name_width = NAME_WIDTH,
        cell_width = CELL_WIDTH
    )
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new()
        .add("category", Style::new().bold())
        .add("passed", Style::new().green())
        .add("rejected", Style::new().dim())
}

/// Render the count for one path.
pub fn render_total(path: &str, lines: u64, output_mode: OutputMode) -> anyhow::Result<String> {
    let theme = create_theme();

    if matches!(output_mode, OutputMode::Json) {
        return Ok(render_auto(
            TOTAL_TEMPLATE,
            &TotalReport { path, lines },
            &theme,
            output_mode,
        )?);
    }

    let context = serde_json::json!({ "total": format_row(path, lines) });
    Ok(render_with_output(
        TOTAL_TEMPLATE,
        &context,
        &theme,
        output_mode,
    )?)
}

/// Render one row per entry followed by a total row.
pub fn render_entries(
    entries: &[EntryCount],
    base: &Path,
    output_mode: OutputMode,
) -> anyhow::Result<String> {
    let theme = create_theme();
    let total: u64 = entries.iter().map(|e| e.lines).sum();

    if matches!(output_mode, OutputMode::Json) {
        return Ok(render_auto(
            ENTRIES_TABLE_TEMPLATE,
            &EntriesReport { entries, total },
            &theme,
            output_mode,
        )?);
    }

    let context = EntriesTableContext {
        header: format_row("Entry", "Lines"),
        separator: "-".repeat(NAME_WIDTH + CELL_WIDTH),
        rows: entries
            .iter()
            .map(|e| format_row(&make_relative(&e.path, base), e.lines))
            .collect(),
        total: format_row(&format!("Total ({} entries)", entries.len()), total),
    };

    Ok(render_with_output(
        ENTRIES_TABLE_TEMPLATE,
        &context,
        &theme,
        output_mode,
    )?)
}

fn analysis_record(record: &LineData, show: Show, base: &Path) -> AnalysisRecord {
    let name = make_relative(&record.entry_name, base);
    let name = if name.is_empty() {
        record.entry_name.to_string_lossy().to_string()
    } else {
        name
    };

    let lines = record
        .verdicts()
        .filter(|(_, passed)| match show {
            Show::Passed => *passed,
            Show::Rejected => !*passed,
            Show::All => true,
        })
        .map(|(line, passed)| {
            let (marker, style) = if passed {
                ('+', "passed")
            } else {
                ('-', "rejected")
            };
            AnalysisLine {
                text: format!("{marker} {line}"),
                style,
            }
        })
        .collect();

    AnalysisRecord {
        header: format!(
            "{} ({} of {} lines counted)",
            name,
            record.passed(),
            record.total()
        ),
        lines,
    }
}

/// Render analyzed lines, one block per record.
pub fn render_analysis(
    records: &[LineData],
    show: Show,
    base: &Path,
    output_mode: OutputMode,
) -> anyhow::Result<String> {
    let theme = create_theme();

    if matches!(output_mode, OutputMode::Json) {
        return Ok(render_auto(
            ANALYSIS_TEMPLATE,
            &records,
            &theme,
            output_mode,
        )?);
    }

    let context = AnalysisContext {
        records: records
            .iter()
            .map(|r| analysis_record(r, show, base))
            .collect(),
    };

    Ok(render_with_output(
        ANALYSIS_TEMPLATE,
        &context,
        &theme,
        output_mode,
    )?)
}
