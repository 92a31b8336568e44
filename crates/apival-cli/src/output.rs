//! Output formatting for comparison reports

use apival_compare::{ComparisonRecord, ComparisonSummary};
use apival_report::ValidationReport;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::json;
use std::fmt::Write;

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Plain `key: value` lines
    Plain,
}

/// Presentation switches shared by every renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include path and match columns
    pub show_paths: bool,
    /// Style output with terminal colors
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_paths: false,
            color: true,
        }
    }
}

fn headers(options: RenderOptions) -> Vec<&'static str> {
    if options.show_paths {
        vec!["Path", "Expected", "Actual", "Match"]
    } else {
        vec!["Expected", "Actual"]
    }
}

fn row(record: &ComparisonRecord, options: RenderOptions) -> Vec<String> {
    let mut cells = Vec::with_capacity(4);
    if options.show_paths {
        cells.push(record.path.clone());
    }
    cells.push(record.expected.clone());
    cells.push(record.actual.clone());
    if options.show_paths {
        cells.push(if record.matched { "yes" } else { "no" }.to_string());
    }
    cells
}

fn new_table(options: RenderOptions) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if !options.color {
        table.force_no_tty();
    }
    table
}

fn records_table(records: &[ComparisonRecord], options: RenderOptions) -> Table {
    let mut table = new_table(options);
    table.set_header(headers(options));
    for record in records {
        let color = if record.matched {
            Color::Green
        } else {
            Color::Red
        };
        table.add_row(
            row(record, options)
                .into_iter()
                .map(|text| Cell::new(text).fg(color)),
        );
    }
    table
}

fn plain_records(records: &[ComparisonRecord], options: RenderOptions) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push_str("---\n");
        }
        for (header, value) in headers(options).iter().zip(row(record, options)) {
            let _ = writeln!(out, "{}: {}", header, value);
        }
    }
    out
}

fn summary_line(summary: &ComparisonSummary) -> String {
    format!(
        "{} compared, {} matched, {} mismatched",
        summary.total, summary.matched, summary.mismatched
    )
}

/// Render a list of comparison records
pub fn render_records(
    records: &[ComparisonRecord],
    format: OutputFormat,
    options: RenderOptions,
) -> serde_json::Result<String> {
    let summary = ComparisonSummary::from_records(records);
    match format {
        OutputFormat::Table => {
            if records.is_empty() {
                return Ok("Nothing to compare.\n".to_string());
            }
            Ok(format!(
                "{}\n{}\n",
                records_table(records, options),
                summary_line(&summary)
            ))
        }
        OutputFormat::Json => {
            let doc = json!({ "records": records, "summary": summary });
            Ok(serde_json::to_string_pretty(&doc)? + "\n")
        }
        OutputFormat::Plain => {
            let mut out = plain_records(records, options);
            if !records.is_empty() {
                out.push_str("---\n");
            }
            let _ = writeln!(out, "{}", summary_line(&summary));
            Ok(out)
        }
    }
}

/// Render a saved validation response with its comparison table
pub fn render_report(
    report: &ValidationReport,
    records: &[ComparisonRecord],
    format: OutputFormat,
    options: RenderOptions,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => {
            let doc = json!({
                "validation": report.validation,
                "status_code": report.status_code,
                "endpoint": report.endpoint,
                "test_id": report.test_id,
                "bug_title": report.bug_title,
                "discrepancies": report.discrepancy_lines(),
                "records": records,
                "summary": ComparisonSummary::from_records(records),
            });
            Ok(serde_json::to_string_pretty(&doc)? + "\n")
        }
        OutputFormat::Plain => {
            let mut out = String::new();
            let _ = writeln!(out, "Validation: {}", report.validation);
            let _ = writeln!(out, "Status: {}", report.status_code);
            let _ = writeln!(out, "Endpoint: {}", report.endpoint);
            if report.is_failed() {
                let _ = writeln!(out, "Bug: {}", report.bug_title);
                for line in report.discrepancy_lines() {
                    let _ = writeln!(out, "Discrepancy: {}", line);
                }
            }
            out.push_str("---\n");
            out.push_str(&render_records(records, format, options)?);
            Ok(out)
        }
        OutputFormat::Table => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "{}  Status: {}",
                verdict_badge(report, options),
                report.status_code
            );
            out.push('\n');

            if report.is_failed() {
                let _ = writeln!(out, "{}", paint_failure(&report.bug_title, options));
                for line in report.discrepancy_lines() {
                    let _ = writeln!(out, "  • {}", line);
                }
            } else {
                let _ = writeln!(
                    out,
                    "{}",
                    paint_success("Validation Passed Successfully", options)
                );
                let _ = writeln!(out, "All expected values match the generated output.");
            }
            out.push('\n');

            let mut details = new_table(options);
            details.set_header(vec!["Request Details", ""]);
            details.add_row(vec!["Endpoint".to_string(), report.endpoint.clone()]);
            let status_color = if report.status_is_success() {
                Color::Green
            } else {
                Color::Red
            };
            details.add_row(vec![
                Cell::new("Status Code"),
                Cell::new(report.status_code).fg(status_color),
            ]);
            let _ = writeln!(out, "{}", details);
            out.push('\n');

            let _ = writeln!(out, "Response Comparison");
            out.push_str(&render_records(records, format, options)?);
            Ok(out)
        }
    }
}

/// Pretty-printed JSON of the full response
pub fn render_raw(report: &ValidationReport) -> serde_json::Result<String> {
    Ok(serde_json::to_string_pretty(report)? + "\n")
}

fn verdict_badge(report: &ValidationReport, options: RenderOptions) -> String {
    let label = format!("[{}]", report.validation);
    if report.is_failed() {
        paint_failure(&label, options)
    } else {
        paint_success(&label, options)
    }
}

fn paint_success(text: &str, options: RenderOptions) -> String {
    if options.color {
        format!("✅ {}", text.green().bold())
    } else {
        text.to_string()
    }
}

fn paint_failure(text: &str, options: RenderOptions) -> String {
    if options.color {
        format!("❌ {}", text.red().bold())
    } else {
        text.to_string()
    }
}
