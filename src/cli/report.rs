//! Report formatting and printing utilities.
//!
//! Output goes to caller-supplied writers so the formatting can be tested;
//! the command layer passes stdout/stderr.

use std::io::Write;

use colored::Colorize;

use crate::{
    coverage::LanguageCoverage,
    issues::{Issue, Report, Severity},
    translate::{Plan, ProcessingReport, ProgressEvent},
    utils::truncate_display,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum display width for keys and translated text in progress lines.
const MAX_TEXT_WIDTH: usize = 40;

fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

/// Print one issue in cargo style.
pub fn print_issue_to<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    let location = match issue.language() {
        Some(language) => format!("\"{}\" [{}]", truncate_display(issue.key(), MAX_TEXT_WIDTH), language),
        None => format!("\"{}\"", truncate_display(issue.key(), MAX_TEXT_WIDTH)),
    };
    let _ = writeln!(writer, "  {} {}", "-->".blue(), location);

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }
}

/// Print issues, sorted by rule then key.
pub fn print_issues_to<W: Write>(issues: &[Issue], writer: &mut W) {
    let mut sorted: Vec<&Issue> = issues.iter().collect();
    sorted.sort_by(|a, b| a.rule().cmp(&b.rule()).then_with(|| a.key().cmp(b.key())));
    for issue in sorted {
        print_issue_to(issue, writer);
    }
}

fn progress_prefix(index: usize, total: usize) -> String {
    let width = total.to_string().len();
    let percent = if total == 0 { 100 } else { index * 100 / total };
    format!("[{:>width$}/{}] {:>3}%", index, total, percent, width = width)
}

/// Print a single progress event.
///
/// Warnings and failures go to `err`, everything else to `out`.
pub fn print_progress_to<O: Write, E: Write>(event: &ProgressEvent<'_>, out: &mut O, err: &mut E) {
    match *event {
        ProgressEvent::Planned { total } => {
            let _ = writeln!(
                out,
                "Translating {}",
                plural(total, "entry", "entries").bold()
            );
        }
        ProgressEvent::Warning { issue } => print_issue_to(issue, err),
        ProgressEvent::Started { .. } => {}
        ProgressEvent::Translated {
            index,
            total,
            task,
            text,
        } => {
            let _ = writeln!(
                out,
                "{} {} {} {} {} {}",
                progress_prefix(index, total).dimmed(),
                SUCCESS_MARK.green(),
                task.language.cyan(),
                truncate_display(&task.key, MAX_TEXT_WIDTH),
                "→".dimmed(),
                truncate_display(text, MAX_TEXT_WIDTH)
            );
        }
        ProgressEvent::Passthrough { index, total, task } => {
            let _ = writeln!(
                out,
                "{} {} {} {} {}",
                progress_prefix(index, total).dimmed(),
                SUCCESS_MARK.green(),
                task.language.cyan(),
                truncate_display(&task.key, MAX_TEXT_WIDTH),
                "(copied, no letters)".dimmed()
            );
        }
        ProgressEvent::Failed {
            index,
            total,
            task,
            reason,
        } => {
            let _ = writeln!(
                err,
                "{} {} {} {}: {}",
                progress_prefix(index, total).dimmed(),
                FAILURE_MARK.red(),
                task.language.cyan(),
                truncate_display(&task.key, MAX_TEXT_WIDTH),
                reason.red()
            );
        }
    }
}

/// Print what a translation run would do.
pub fn print_plan_to<W: Write>(plan: &Plan, writer: &mut W) {
    for task in &plan.tasks {
        let _ = writeln!(
            writer,
            "  {} {}",
            task.language.cyan(),
            truncate_display(&task.key, MAX_TEXT_WIDTH)
        );
    }
    let _ = writeln!(
        writer,
        "{} would be translated ({} up to date, {} unsupported, {} excluded)",
        plural(plan.tasks.len(), "entry", "entries").bold(),
        plan.up_to_date,
        plan.unsupported,
        plan.not_translatable
    );
}

/// Print the final translation summary.
pub fn print_summary_to<W: Write>(report: &ProcessingReport, writer: &mut W) {
    let counts = format!(
        "{} translated, {} copied, {} failed, {} skipped ({} up to date, {} unsupported, {} excluded), {}",
        report.translated,
        report.passthrough,
        report.failed,
        report.skipped(),
        report.up_to_date,
        report.unsupported,
        report.not_translatable,
        plural(report.calls, "request", "requests")
    );

    if report.has_failures() {
        let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), counts.red());
    } else {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), counts.green());
    }
}

/// Print a coverage table.
pub fn print_coverage_to<W: Write>(
    source_language: &str,
    rows: &[LanguageCoverage],
    writer: &mut W,
) {
    let lang_width = rows
        .iter()
        .map(|r| r.language.len())
        .max()
        .unwrap_or(0)
        .max("language".len());

    let _ = writeln!(
        writer,
        "{}",
        format!(
            "{:<lang_width$}  {:>10}  {:>7}  {:>5}  {:>11}  {:>8}  {:>6}",
            "language", "translated", "pending", "error", "unsupported", "excluded", "done"
        )
        .bold()
    );

    for row in rows {
        let done = format!("{:.0}%", row.percent());
        let done = if row.translated == row.total() {
            done.green()
        } else {
            done.yellow()
        };
        let language = if row.language == source_language {
            format!("{:<lang_width$}", format!("{}*", row.language))
        } else {
            format!("{:<lang_width$}", row.language)
        };
        let _ = writeln!(
            writer,
            "{}  {:>10}  {:>7}  {:>5}  {:>11}  {:>8}  {:>6}",
            language, row.translated, row.pending, row.failed, row.unsupported, row.excluded, done
        );
    }
    let _ = writeln!(writer, "{}", "* source language".dimmed());
}
