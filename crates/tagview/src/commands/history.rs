//! History command handler.
//!
//! Decodes the backend's loosely-shaped history payload into normalized
//! rows and prints the most recent window.

use serde::Serialize;
use tabled::Tabled;
use tagview_api::DashboardClient;
use tagview_core::history::{decode_history, tag_ids, HistoryRow};

use crate::cli::{GlobalOpts, HistoryArgs};
use crate::error::CliError;
use crate::output;

// ── Flattened record ────────────────────────────────────────────────

#[derive(Serialize)]
struct HistoryRecord {
    timestamp_ms: i64,
    time: String,
    values: Vec<(String, f64)>,
}

#[derive(Tabled)]
struct HistoryTableRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Values")]
    values: String,
}

impl From<&HistoryRecord> for HistoryTableRow {
    fn from(r: &HistoryRecord) -> Self {
        Self {
            time: r.time.clone(),
            values: r
                .values
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("  "),
        }
    }
}

fn format_time(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ms.to_string())
}

fn to_record(row: &HistoryRow, selected: &[String]) -> HistoryRecord {
    let values = row
        .values
        .iter()
        .filter(|(k, _)| selected.is_empty() || selected.iter().any(|s| s == *k))
        .map(|(k, v)| (k.clone(), *v))
        .collect();
    HistoryRecord {
        timestamp_ms: row.timestamp_ms,
        time: format_time(row.timestamp_ms),
        values,
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &DashboardClient,
    args: HistoryArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let payload = client.history(&args.edge).await?;
    let rows = decode_history(&payload);

    if rows.is_empty() && !global.quiet {
        eprintln!("No history data for edge {}", args.edge);
    }

    // Warn about requested tags the series doesn't contain.
    let known = tag_ids(&rows);
    for tag in &args.tags {
        if !known.contains(tag) {
            tracing::warn!(tag, "tag not present in history series");
        }
    }

    let start = rows.len().saturating_sub(args.limit);
    let records: Vec<HistoryRecord> = rows[start..]
        .iter()
        .map(|r| to_record(r, &args.tags))
        .collect();

    let rendered = output::render_list(&global.output, &records, |r| HistoryTableRow::from(r), |r| {
        r.time.clone()
    });
    output::print_output(&rendered, global.quiet);
    Ok(())
}
