// ── Widget catalog ──
//
// The closed set of renderable widget types, their families, and the
// name/alias resolution that maps free-form store spellings onto them.
// An unrecognized name resolves to `None`, never to a panic or a silent
// fallback -- the resolution engine turns that into its "not implemented"
// state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::model::TagDataType;

/// Canonical widget type. Fourteen identifiers across three families.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WidgetType {
    // Boolean widgets
    LedIndicator,
    SwitchToggle,
    StatusLight,
    AlarmPanel,

    // Number widgets
    Thermometer,
    Gauge,
    Speedometer,
    LiquidFill,
    BarChart,
    AreaChart,

    // Large-integer widgets
    DigitalDisplay,
    Counter,
    Histogram,
    RadarChart,
}

/// Family grouping, mirroring the catalog's three sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetFamily {
    Boolean,
    Number,
    LargeInteger,
}

static BOOLEAN_TYPES: [TagDataType; 1] = [TagDataType::Boolean];
static NUMBER_TYPES: [TagDataType; 1] = [TagDataType::Number];

impl WidgetType {
    pub fn family(self) -> WidgetFamily {
        match self {
            Self::LedIndicator | Self::SwitchToggle | Self::StatusLight | Self::AlarmPanel => {
                WidgetFamily::Boolean
            }
            Self::Thermometer
            | Self::Gauge
            | Self::Speedometer
            | Self::LiquidFill
            | Self::BarChart
            | Self::AreaChart => WidgetFamily::Number,
            Self::DigitalDisplay | Self::Counter | Self::Histogram | Self::RadarChart => {
                WidgetFamily::LargeInteger
            }
        }
    }

    /// Tag data types this widget can render. String tags match nothing.
    pub fn accepts(self) -> &'static [TagDataType] {
        match self.family() {
            WidgetFamily::Boolean => &BOOLEAN_TYPES,
            WidgetFamily::Number | WidgetFamily::LargeInteger => &NUMBER_TYPES,
        }
    }

    pub fn is_compatible_with(self, data_type: TagDataType) -> bool {
        self.accepts().contains(&data_type)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::LedIndicator => "LED indicator",
            Self::SwitchToggle => "Switch toggle",
            Self::StatusLight => "Status light",
            Self::AlarmPanel => "Alarm panel",
            Self::Thermometer => "Thermometer",
            Self::Gauge => "Gauge",
            Self::Speedometer => "Speedometer",
            Self::LiquidFill => "Liquid fill",
            Self::BarChart => "Bar chart",
            Self::AreaChart => "Area chart",
            Self::DigitalDisplay => "Digital display",
            Self::Counter => "Counter",
            Self::Histogram => "Histogram",
            Self::RadarChart => "Radar chart",
        }
    }

    /// Whether this widget needs a history series rather than a lone value.
    pub fn wants_history(self) -> bool {
        matches!(
            self,
            Self::AreaChart | Self::BarChart | Self::Histogram | Self::RadarChart
        )
    }
}

// ── Name resolution ────────────────────────────────────────────────

/// Store spellings that differ from the canonical identifier.
fn alias(normalized: &str) -> Option<&'static str> {
    let canonical = match normalized {
        "vertical_bar" => "bar_chart",
        "chart" | "area" => "area_chart",
        "half_circle" | "halfcircle" => "speedometer",
        "progress_bar" => "progress_bar",
        "led" => "led_indicator",
        "switch" => "switch_toggle",
        "status" => "status_light",
        "alarm" => "alarm_panel",
        "temp" | "temperature" => "thermometer",
        "liquid" => "liquid_fill",
        "digital" => "digital_display",
        "count" => "counter",
        "histogram" => "histogram",
        "radar" => "radar_chart",
        _ => return None,
    };
    Some(canonical)
}

/// Lower-case a free-form widget name and fold whitespace runs and hyphens
/// into underscores: `"LED Indicator"` → `"led_indicator"`.
pub fn normalize_widget_name(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_whitespace = false;
    for ch in lower.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
            out.push(if ch == '-' { '_' } else { ch });
        }
    }
    out
}

/// Resolve a free-form name or alias to a catalog member. `None` means
/// "unmatched" and must surface as a widget-not-found outcome, not an error.
pub fn resolve_widget_name(raw: &str) -> Option<WidgetType> {
    let normalized = normalize_widget_name(raw);
    let canonical = alias(&normalized).unwrap_or(&normalized);
    WidgetType::from_str(canonical).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn canonical_identifiers_resolve_to_themselves() {
        for widget in WidgetType::iter() {
            assert_eq!(resolve_widget_name(&widget.to_string()), Some(widget));
        }
    }

    #[test]
    fn catalog_has_fourteen_members() {
        assert_eq!(WidgetType::iter().count(), 14);
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(resolve_widget_name("vertical_bar"), Some(WidgetType::BarChart));
        assert_eq!(resolve_widget_name("chart"), Some(WidgetType::AreaChart));
        assert_eq!(resolve_widget_name("half-circle"), Some(WidgetType::Speedometer));
        assert_eq!(resolve_widget_name("halfcircle"), Some(WidgetType::Speedometer));
        assert_eq!(resolve_widget_name("temp"), Some(WidgetType::Thermometer));
        assert_eq!(resolve_widget_name("led"), Some(WidgetType::LedIndicator));
    }

    #[test]
    fn names_normalize_case_spaces_and_hyphens() {
        assert_eq!(normalize_widget_name("LED Indicator"), "led_indicator");
        assert_eq!(normalize_widget_name("Vertical  bar"), "vertical_bar");
        assert_eq!(normalize_widget_name("half-circle"), "half_circle");
        assert_eq!(resolve_widget_name("LED Indicator"), Some(WidgetType::LedIndicator));
        assert_eq!(resolve_widget_name("Vertical bar"), Some(WidgetType::BarChart));
    }

    #[test]
    fn unknown_names_are_unmatched() {
        assert_eq!(resolve_widget_name("sparkline"), None);
        assert_eq!(resolve_widget_name(""), None);
        // Aliased spelling with no catalog member behind it.
        assert_eq!(resolve_widget_name("progress_bar"), None);
    }

    #[test]
    fn boolean_family_accepts_only_booleans() {
        assert!(WidgetType::LedIndicator.is_compatible_with(TagDataType::Boolean));
        assert!(!WidgetType::LedIndicator.is_compatible_with(TagDataType::Number));
        assert!(!WidgetType::LedIndicator.is_compatible_with(TagDataType::String));
    }

    #[test]
    fn numeric_families_accept_only_numbers() {
        assert!(WidgetType::Gauge.is_compatible_with(TagDataType::Number));
        assert!(!WidgetType::Gauge.is_compatible_with(TagDataType::Boolean));
        assert!(WidgetType::Counter.is_compatible_with(TagDataType::Number));
        assert!(!WidgetType::Counter.is_compatible_with(TagDataType::String));
    }

    #[test]
    fn chart_widgets_want_history() {
        assert!(WidgetType::AreaChart.wants_history());
        assert!(!WidgetType::Gauge.wants_history());
        assert!(!WidgetType::LedIndicator.wants_history());
    }
}
