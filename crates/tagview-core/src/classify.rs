// ── Tag value classification ──
//
// Infers a tag's semantic data type from its name and converts raw wire
// values to match. Classification is pattern-based and order-sensitive:
// the boolean table is consulted before the number table, first match
// wins, and anything unmatched is a string. Conversion never fails --
// malformed telemetry degrades to a safe default instead of taking the
// dashboard down.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::customize::parse::parse_float_loose;
use crate::model::{Tag, TagDataType, TagValue};

// ── Pattern tables ─────────────────────────────────────────────────
//
// Anchored to the plant's telemetry naming conventions: pump bit fields,
// I/O prefixes, and index ranges within array-style channel names.

static BOOLEAN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"^pump\d+_bits",
        r"^PC_IO_",
        r"^DC_out_100ms\[\d+\]$",
        r"^DC_in_100ms\[\d+\]\.2[4-6]$",
        r"^DC_out_100ms\[\d+\]\.\d+$",
        r"^DC_in_100ms\[\d+\]\.1[5-8]$",
        r"^DC_in_100ms\[\d+\]\.2[1-6]$",
        r"^DC_in_100ms\[\d+\]\.(4|5)$",
    ])
});

static NUMBER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"_spm$",
        r"_feed$",
        r"^DC_out_100ms\[\d+\]$",
        r"^DC_in_100ms\[8[4-8]\]$",
    ])
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("invalid classifier pattern"))
        .collect()
}

// ── Classification ─────────────────────────────────────────────────

/// Classification result: the inferred type plus a best-effort
/// human-readable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTypeInfo {
    pub data_type: TagDataType,
    pub description: String,
}

/// Infer a tag's data type from its name. Pure function of the name.
pub fn determine_tag_type(tag_name: &str) -> TagDataType {
    if BOOLEAN_PATTERNS.iter().any(|p| p.is_match(tag_name)) {
        return TagDataType::Boolean;
    }
    if NUMBER_PATTERNS.iter().any(|p| p.is_match(tag_name)) {
        return TagDataType::Number;
    }
    TagDataType::String
}

/// Classify a tag name into its type and derived description.
pub fn classify(tag_name: &str) -> TagTypeInfo {
    let data_type = determine_tag_type(tag_name);
    TagTypeInfo {
        data_type,
        description: describe(tag_name, data_type),
    }
}

/// Best-effort description derived from substring matches on the name.
fn describe(tag_name: &str, data_type: TagDataType) -> String {
    if tag_name.contains("pump") && tag_name.contains("bits") {
        return "Pump status bit".into();
    }
    if tag_name.starts_with("PC_IO_") {
        return "Digital input/output state".into();
    }
    if tag_name.contains("_spm") {
        return "Speed, revolutions per minute".into();
    }
    if tag_name.contains("_feed") {
        return "Feed rate value".into();
    }
    if tag_name.contains("DC_out_100ms") {
        return if data_type == TagDataType::Boolean {
            "Digital output state".into()
        } else {
            "Digital output value".into()
        };
    }
    if tag_name.contains("DC_in_100ms") {
        return if data_type == TagDataType::Boolean {
            "Digital input state".into()
        } else {
            "Digital input value".into()
        };
    }
    format!("Parameter {tag_name}")
}

// ── Conversion ─────────────────────────────────────────────────────

/// Convert a raw wire value into a [`TagValue`] matching the tag's
/// classified type. Total: every input, including nulls, NaN-strings, and
/// nested JSON, maps to a value of the right variant.
pub fn convert(value: &Value, tag_name: &str) -> TagValue {
    match determine_tag_type(tag_name) {
        TagDataType::Boolean => TagValue::Bool(to_bool(value)),
        TagDataType::Number => TagValue::Number(to_number(value)),
        TagDataType::String => TagValue::Text(to_text(value)),
    }
}

/// Boolean rule: numeric `1` is true, any other number false. Numeric-looking
/// strings are parsed first; the rest compare case-insensitively to "true".
fn to_bool(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => match parse_float_loose(s) {
            Some(n) => n == 1.0,
            None => s.eq_ignore_ascii_case("true"),
        },
        Value::Bool(b) => *b,
        Value::Null => false,
        // Composite values are truthy, matching the wire format's coercion.
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_float_loose(s).unwrap_or(0.0),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    }
}

fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── Tag construction ───────────────────────────────────────────────

/// Build a [`Tag`] from a wire record, resolving type, value, and
/// description in one place. This is the single "tag defaults" step --
/// consumers never re-derive any of these per call site.
pub fn resolve_tag(tag_name: &str, raw_value: &Value) -> Tag {
    let info = classify(tag_name);
    Tag {
        id: tag_name.to_owned(),
        name: tag_name.to_owned(),
        data_type: info.data_type,
        value: convert(raw_value, tag_name),
        unit: None,
        description: Some(info.description),
    }
}
