// ── History payload decoding ──
//
// The history endpoint is loosely typed: depending on backend version it
// returns either a map of tag name → point list, or a flat row array
// (sometimes nested under "rows"/"data"), with the timestamp field spelled
// any of `timestamp`, `time`, `t`, `ts`. This module sniffs the shape once
// and hands the rest of the system a single normalized form; nothing in
// the resolution engine ever touches a raw history value.

use std::collections::{BTreeMap, BTreeSet};

use chrono::DateTime;
use serde::Serialize;
use serde_json::Value;

use crate::customize::parse::parse_float_loose;

/// Chart widgets show at most this many of the most recent points.
pub const CHART_POINT_LIMIT: usize = 20;

/// Accepted spellings of the timestamp field, in priority order.
const TIMESTAMP_KEYS: [&str; 4] = ["timestamp", "time", "t", "ts"];

/// Epoch values below this are seconds; at or above, milliseconds.
const EPOCH_MS_THRESHOLD: f64 = 2_000_000_000.0;

/// One normalized history row: a timestamp and the numeric values sampled
/// at it, keyed by tag id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub timestamp_ms: i64,
    pub values: BTreeMap<String, f64>,
}

/// Decode a raw history payload into sorted, normalized rows. Points whose
/// timestamp is missing or unparseable are dropped; a payload of an
/// unrecognized shape decodes to no rows. Never errors.
pub fn decode_history(payload: &Value) -> Vec<HistoryRow> {
    let mut by_timestamp: BTreeMap<i64, BTreeMap<String, f64>> = BTreeMap::new();

    // Shape priority: a bare row array (or one nested under "rows"/"data")
    // first, then the object-of-per-tag-series form.
    let row_array = payload
        .as_array()
        .or_else(|| payload.get("rows").and_then(Value::as_array))
        .or_else(|| payload.get("data").and_then(Value::as_array));

    if let Some(rows) = row_array {
        // [ {timestamp, tagA: 1, tagB: 2}, ... ]
        for row in rows {
            let Some(obj) = row.as_object() else { continue };
            let Some(ts) = point_timestamp(row) else {
                continue;
            };
            let values = by_timestamp.entry(ts).or_default();
            for (key, value) in obj {
                if TIMESTAMP_KEYS.contains(&key.as_str()) {
                    continue;
                }
                if let Some(n) = value.as_f64() {
                    values.insert(key.clone(), n);
                }
            }
        }
    } else if let Value::Object(map) = payload {
        // { "<tag>": [ {timestamp, value}, ... ], ... }
        for (tag_name, points) in map {
            let Some(points) = points.as_array() else {
                continue;
            };
            for point in points {
                let Some(ts) = point_timestamp(point) else {
                    continue;
                };
                let Some(value) = point.get("value").and_then(Value::as_f64) else {
                    continue;
                };
                by_timestamp
                    .entry(ts)
                    .or_default()
                    .insert(tag_name.clone(), value);
            }
        }
    }

    by_timestamp
        .into_iter()
        .map(|(timestamp_ms, values)| HistoryRow {
            timestamp_ms,
            values,
        })
        .collect()
}

/// All tag ids present anywhere in the rows, sorted.
pub fn tag_ids(rows: &[HistoryRow]) -> Vec<String> {
    let ids: BTreeSet<&str> = rows
        .iter()
        .flat_map(|r| r.values.keys().map(String::as_str))
        .collect();
    ids.into_iter().map(str::to_owned).collect()
}

// ── Chart window ───────────────────────────────────────────────────

/// A labeled chart point ready for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// The last `limit` points of one tag's series, labeled with wall-clock
/// times. Rows without a value for the tag are skipped.
pub fn chart_points(rows: &[HistoryRow], tag_id: &str, limit: usize) -> Vec<ChartPoint> {
    let points: Vec<&HistoryRow> = rows
        .iter()
        .filter(|r| r.values.contains_key(tag_id))
        .collect();
    let start = points.len().saturating_sub(limit);
    points[start..]
        .iter()
        .map(|row| ChartPoint {
            label: format_timestamp(row.timestamp_ms),
            value: row.values[tag_id],
        })
        .collect()
}

/// Synthetic relative labels (`-19s` … `-0s`) for a series that has no
/// real timestamps to show.
pub fn relative_labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("-{}s", count - 1 - i)).collect()
}

fn format_timestamp(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| ms.to_string())
}

/// Read a point's timestamp from the first accepted field, normalized to
/// epoch milliseconds. Numbers are epoch seconds or milliseconds; strings
/// are RFC 3339 or numeric.
fn point_timestamp(point: &Value) -> Option<i64> {
    let raw = TIMESTAMP_KEYS.iter().find_map(|k| point.get(*k))?;
    match raw {
        Value::Number(n) => n.as_f64().map(normalize_epoch_ms),
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.timestamp_millis())
            .or_else(|| parse_float_loose(s).map(normalize_epoch_ms)),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn normalize_epoch_ms(n: f64) -> i64 {
    if n < EPOCH_MS_THRESHOLD {
        (n * 1000.0) as i64
    } else {
        n as i64
    }
}
