// ── Widget parameters ──
//
// A parameter bag is a small string-keyed map of scalars parsed from a
// customization value. A handful of names are recognized by widgets
// (min, max, width, height, x, y, color, color_text, url, isstatus);
// everything else rides along untouched.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Parsed widget parameters keyed by lower-cased option name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetParams {
    entries: BTreeMap<String, ParamValue>,
}

impl WidgetParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: ParamValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    // ── Typed accessors for the recognized option names ─────────────

    pub fn min(&self) -> Option<f64> {
        self.get("min").and_then(ParamValue::as_number)
    }

    pub fn max(&self) -> Option<f64> {
        self.get("max").and_then(ParamValue::as_number)
    }

    pub fn width(&self) -> Option<f64> {
        self.get("width").and_then(ParamValue::as_number)
    }

    pub fn height(&self) -> Option<f64> {
        self.get("height").and_then(ParamValue::as_number)
    }

    pub fn x(&self) -> Option<f64> {
        self.get("x").and_then(ParamValue::as_number)
    }

    pub fn y(&self) -> Option<f64> {
        self.get("y").and_then(ParamValue::as_number)
    }

    pub fn color(&self) -> Option<&str> {
        self.get("color").and_then(ParamValue::as_str)
    }

    pub fn color_text(&self) -> Option<&str> {
        self.get("color_text").and_then(ParamValue::as_str)
    }

    pub fn url(&self) -> Option<&str> {
        self.get("url").and_then(ParamValue::as_str)
    }

    pub fn is_status(&self) -> Option<bool> {
        self.get("isstatus").and_then(ParamValue::as_bool)
    }
}

impl FromIterator<(String, ParamValue)> for WidgetParams {
    fn from_iter<I: IntoIterator<Item = (String, ParamValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Left-to-right shallow overlay: later sets override earlier ones on
/// shared keys, keys unique to earlier sets survive.
pub fn merge<I>(sets: I) -> WidgetParams
where
    I: IntoIterator<Item = WidgetParams>,
{
    let mut merged = WidgetParams::new();
    for set in sets {
        for (key, value) in set.entries {
            merged.entries.insert(key, value);
        }
    }
    merged
}

/// Repair or prune logically invalid fields. Never rejects the bag:
/// an inverted min/max range is swapped, non-positive sizes are dropped.
/// Idempotent.
pub fn validate(mut params: WidgetParams) -> WidgetParams {
    if let (Some(min), Some(max)) = (params.min(), params.max()) {
        if min > max {
            warn!(min, max, "inverted min/max range, swapping");
            params.insert("min", ParamValue::Number(max));
            params.insert("max", ParamValue::Number(min));
        }
    }

    for key in ["width", "height"] {
        if let Some(size) = params.get(key).and_then(ParamValue::as_number) {
            if size <= 0.0 {
                warn!(key, size, "non-positive size parameter dropped");
                params.remove(key);
            }
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bag(pairs: &[(&str, ParamValue)]) -> WidgetParams {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    #[test]
    fn merge_later_sets_win() {
        let merged = merge([
            bag(&[
                ("min", ParamValue::Number(0.0)),
                ("color", ParamValue::Text("red".into())),
            ]),
            bag(&[("min", ParamValue::Number(5.0))]),
        ]);
        assert_eq!(merged.min(), Some(5.0));
        assert_eq!(merged.color(), Some("red"));
    }

    #[test]
    fn merge_of_nothing_is_empty() {
        assert!(merge(std::iter::empty::<WidgetParams>()).is_empty());
    }

    #[test]
    fn validate_swaps_inverted_range() {
        let repaired = validate(bag(&[
            ("min", ParamValue::Number(10.0)),
            ("max", ParamValue::Number(2.0)),
        ]));
        assert_eq!(repaired.min(), Some(2.0));
        assert_eq!(repaired.max(), Some(10.0));
    }

    #[test]
    fn validate_drops_non_positive_sizes() {
        let repaired = validate(bag(&[
            ("width", ParamValue::Number(0.0)),
            ("height", ParamValue::Number(-5.0)),
            ("min", ParamValue::Number(1.0)),
        ]));
        assert_eq!(repaired.width(), None);
        assert_eq!(repaired.height(), None);
        assert_eq!(repaired.min(), Some(1.0));
    }

    #[test]
    fn validate_keeps_valid_bags_untouched() {
        let bag = bag(&[
            ("min", ParamValue::Number(0.0)),
            ("max", ParamValue::Number(100.0)),
            ("width", ParamValue::Number(50.0)),
        ]);
        assert_eq!(validate(bag.clone()), bag);
    }

    #[test]
    fn validate_is_idempotent() {
        let once = validate(bag(&[
            ("min", ParamValue::Number(10.0)),
            ("max", ParamValue::Number(2.0)),
            ("width", ParamValue::Number(-1.0)),
        ]));
        assert_eq!(validate(once.clone()), once);
    }

    #[test]
    fn typed_accessors_read_recognized_names() {
        let bag = bag(&[
            ("x", ParamValue::Number(4.0)),
            ("y", ParamValue::Number(8.0)),
            ("url", ParamValue::Text("https://cdn.example/bg.png".into())),
            ("isstatus", ParamValue::Bool(true)),
            ("color_text", ParamValue::Text("white".into())),
        ]);
        assert_eq!(bag.x(), Some(4.0));
        assert_eq!(bag.y(), Some(8.0));
        assert_eq!(bag.url(), Some("https://cdn.example/bg.png"));
        assert_eq!(bag.is_status(), Some(true));
        assert_eq!(bag.color_text(), Some("white"));
        assert_eq!(bag.min(), None);
    }

    #[test]
    fn non_numeric_min_max_are_left_alone() {
        let bag = bag(&[
            ("min", ParamValue::Text("low".into())),
            ("max", ParamValue::Number(2.0)),
        ]);
        assert_eq!(validate(bag.clone()), bag);
    }
}
