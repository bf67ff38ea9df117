// ── Color handling ──
//
// Customization entries name colors in free text: English names, Russian
// operator spellings, light/dark shades, status words, or raw hex/rgb.
// Everything funnels through `normalize_color` before reaching a widget.

use std::collections::BTreeMap;

use tracing::warn;

use crate::model::edge::id_hash;
use crate::model::EdgeType;

/// Fallback accent color when a name is missing or unrecognized.
pub const DEFAULT_WIDGET_COLOR: &str = "#f97316";

/// Extra chart colors used after the four edge-type accents.
const ADDITIONAL_COLORS: [&str; 7] = [
    "#3b82f6", "#10b981", "#ec4899", "#14b8a6", "#f97316", "#22c55e", "#eab308",
];

/// Known color names to hex. Covers the spellings operators actually put
/// in the store, including the Russian ones.
fn color_by_name(name: &str) -> Option<&'static str> {
    let hex = match name {
        // Base colors
        "red" => "#ef4444",
        "green" => "#22c55e",
        "blue" => "#3b82f6",
        "yellow" => "#eab308",
        "orange" => "#f97316",
        "purple" => "#a855f7",
        "pink" => "#ec4899",
        "cyan" => "#06b6d4",

        // Russian operator spellings
        "красный" => "#ef4444",
        "зеленый" => "#22c55e",
        "синий" => "#3b82f6",
        "желтый" => "#eab308",
        "оранжевый" => "#f97316",
        "фиолетовый" => "#a855f7",
        "розовый" => "#ec4899",
        "голубой" => "#06b6d4",

        // Shades
        "light-red" => "#fca5a5",
        "dark-red" => "#b91c1c",
        "light-green" => "#86efac",
        "dark-green" => "#15803d",
        "light-blue" => "#93c5fd",
        "dark-blue" => "#1e40af",
        "light-orange" => "#fdba74",
        "dark-orange" => "#c2410c",

        // Status words
        "success" => "#22c55e",
        "warning" => "#f59e0b",
        "danger" => "#ef4444",
        "error" => "#dc2626",
        "info" => "#3b82f6",

        // Grayscale
        "gray" => "#6b7280",
        "white" => "#ffffff",
        "black" => "#000000",

        _ => return None,
    };
    Some(hex)
}

/// Normalize a color name or code to something a renderer can use.
/// Hex and rgb()/rgba() pass through; known names map to hex; anything
/// else falls back to `default` with a warning.
pub fn normalize_color(color: Option<&str>, default: &str) -> String {
    let Some(color) = color else {
        return default.to_owned();
    };

    let trimmed = color.trim().to_lowercase();
    if trimmed.starts_with('#') || trimmed.starts_with("rgb") {
        return trimmed;
    }

    match color_by_name(&trimmed) {
        Some(hex) => hex.to_owned(),
        None => {
            warn!(color, default, "unknown color name, using default");
            default.to_owned()
        }
    }
}

// ── Chart palette ──────────────────────────────────────────────────

const EDGE_TYPE_ORDER: [EdgeType; 4] = [
    EdgeType::Star,
    EdgeType::Supernova,
    EdgeType::NeutronStar,
    EdgeType::BlackHole,
];

/// Stable chart color for an index: the four edge-type accents first,
/// then the additional palette, wrapping around.
pub fn color_by_index(index: usize) -> &'static str {
    let total = EDGE_TYPE_ORDER.len() + ADDITIONAL_COLORS.len();
    let i = index % total;
    if i < EDGE_TYPE_ORDER.len() {
        EDGE_TYPE_ORDER[i].color()
    } else {
        ADDITIONAL_COLORS[i - EDGE_TYPE_ORDER.len()]
    }
}

/// Stable chart color for an edge id (hash-indexed into the palette).
pub fn edge_color_by_id(edge_id: &str) -> &'static str {
    color_by_index(id_hash(edge_id) as usize)
}

/// Per-tag color assignments for a chart legend, by position.
pub fn color_map_for_tags<S: AsRef<str>>(tag_ids: &[S]) -> BTreeMap<String, &'static str> {
    tag_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_ref().to_owned(), color_by_index(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_map_to_hex() {
        assert_eq!(normalize_color(Some("red"), DEFAULT_WIDGET_COLOR), "#ef4444");
        assert_eq!(normalize_color(Some("  Green "), DEFAULT_WIDGET_COLOR), "#22c55e");
        assert_eq!(normalize_color(Some("синий"), DEFAULT_WIDGET_COLOR), "#3b82f6");
        assert_eq!(normalize_color(Some("dark-red"), DEFAULT_WIDGET_COLOR), "#b91c1c");
    }

    #[test]
    fn hex_and_rgb_pass_through() {
        assert_eq!(normalize_color(Some("#ABCDEF"), "#000000"), "#abcdef");
        assert_eq!(
            normalize_color(Some("rgb(1, 2, 3)"), "#000000"),
            "rgb(1, 2, 3)"
        );
    }

    #[test]
    fn unknown_and_missing_fall_back() {
        assert_eq!(normalize_color(Some("chartreuse-ish"), "#111111"), "#111111");
        assert_eq!(normalize_color(None, "#111111"), "#111111");
    }

    #[test]
    fn palette_wraps_around() {
        assert_eq!(color_by_index(0), color_by_index(11));
        assert_eq!(color_by_index(4), ADDITIONAL_COLORS[0]);
    }

    #[test]
    fn edge_color_is_stable() {
        assert_eq!(edge_color_by_id("rig-1"), edge_color_by_id("rig-1"));
    }

    #[test]
    fn color_map_assigns_by_position() {
        let map = color_map_for_tags(&["a", "b"]);
        assert_eq!(map["a"], color_by_index(0));
        assert_eq!(map["b"], color_by_index(1));
    }
}
