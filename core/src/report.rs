use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::model::priority::Priority;
use crate::model::store::{ListKind, TaskStore};

/// Which daily ledger(s) a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportContent {
    Todo,
    Done,
    All,
}

/// Numbered fixed-width listing of one task list, or a placeholder line
/// when it is empty. Entries are expected pre-sorted.
pub fn format_task_list(entries: &[(String, Priority)], label: &str) -> String {
    if entries.is_empty() {
        return format!("No {} tasks.", label);
    }
    let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0) + 2;
    let mut out = format!("{} Tasks:\n", label);
    out.push_str(&format!("{:<4} {:<width$} Priority\n", "ID", "Task"));
    out.push_str(&format!(
        "{} {} {}\n",
        "-".repeat(4),
        "-".repeat(width),
        "-".repeat(8)
    ));
    for (idx, (name, priority)) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{:<5}{:<task_width$}{}\n",
            idx + 1,
            name,
            priority.title_case(),
            task_width = width + 1
        ));
    }
    out
}

pub fn report_file_name(date: NaiveDate) -> String {
    format!("{}_tasks.txt", date.format("%Y-%m-%d"))
}

/// Writes the dated daily report from the day's ledgers (not the full
/// store). Returns the path written, or None when both ledgers are empty.
pub fn write_report(
    store: &TaskStore,
    dir: &Path,
    content: ReportContent,
    date: NaiveDate,
) -> Result<Option<PathBuf>> {
    if store.daily_ledger_empty() {
        return Ok(None);
    }

    let mut body = format!("{} Tasks were:\n\n", date.format("%Y-%m-%d"));
    if matches!(content, ReportContent::Todo | ReportContent::All) {
        body.push_str(&format_task_list(&store.entries(ListKind::DailyAdded), "To-Do"));
        body.push('\n');
    }
    if matches!(content, ReportContent::Done | ReportContent::All) {
        body.push_str(&format_task_list(&store.entries(ListKind::DailyCompleted), "Done"));
        body.push('\n');
    }

    let path = dir.join(report_file_name(date));
    let file =
        File::create(&path).with_context(|| format!("writing report {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(body.as_bytes())?;
    writer.flush()?;
    Ok(Some(path))
}
