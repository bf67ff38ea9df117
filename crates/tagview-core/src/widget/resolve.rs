// ── Widget resolution engine ──
//
// Turns the raw customization entries of an edge into concrete widget
// instances for a tag. Each widget-key entry independently becomes one
// instance: Entry → Parsed → {Image | NamedWidget} → {Resolved |
// Unresolved | Incompatible}. Absence of any widget-key entry is the
// tag-level `NoCustomization` outcome, reported as `None` from
// `resolve_best` / an empty list from `resolve_all`.
//
// Nothing in here returns an error: a bad store row degrades a single
// widget, never the view.

use serde::Serialize;

use crate::customize::params::{merge, validate, ParamValue, WidgetParams};
use crate::customize::parse::{is_widget_key, parse_value, ParsedKind};
use crate::customize::safety::is_safe_url;
use crate::model::{Tag, TagCustomization, TagDataType};
use crate::widget::catalog::{resolve_widget_name, WidgetType};

/// One resolved widget instance for a tag, keyed by the customization key
/// that produced it. A tag with several widget-key entries yields several
/// instances, each with independently merged parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetInstance {
    /// The store key this instance came from.
    pub key: String,
    pub params: WidgetParams,
    pub outcome: WidgetOutcome,
}

/// Terminal state of a single widget-key entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WidgetOutcome {
    /// A catalog widget, compatible with the tag's data type.
    Widget { widget: WidgetType },
    /// An image reference. `url` is `None` when the reference was empty or
    /// failed the safety filter -- render the empty state, not the image.
    Image { url: Option<String> },
    /// The name matched nothing in the catalog. Render a
    /// "widget not implemented" message naming the identifier.
    NotImplemented {
        name: String,
        data_type: TagDataType,
    },
    /// The widget exists but cannot render this tag's data type.
    Incompatible {
        widget: WidgetType,
        expected: &'static [TagDataType],
        actual: TagDataType,
    },
}

impl WidgetInstance {
    pub fn is_renderable(&self) -> bool {
        matches!(
            self.outcome,
            WidgetOutcome::Widget { .. } | WidgetOutcome::Image { .. }
        )
    }
}

// ── Resolution ─────────────────────────────────────────────────────

/// Resolve every widget instance for `tag` from an edge's customization
/// entries. Entries for other tags and reserved control/styling keys are
/// ignored. An empty result means the tag was never customized.
pub fn resolve_all(tag: &Tag, entries: &[TagCustomization]) -> Vec<WidgetInstance> {
    entries
        .iter()
        .filter(|c| c.tag_id == tag.id && is_widget_key(&c.key))
        .map(|c| resolve_entry(tag, c, entries))
        .collect()
}

/// Resolve the single best widget for `tag`: the first widget-key entry.
/// `None` means no customization at all -- distinct from a widget-key
/// entry whose name failed to resolve.
pub fn resolve_best(tag: &Tag, entries: &[TagCustomization]) -> Option<WidgetInstance> {
    entries
        .iter()
        .find(|c| c.tag_id == tag.id && is_widget_key(&c.key))
        .map(|c| resolve_entry(tag, c, entries))
}

/// True when the tag has at least one widget-key entry. Tags without one
/// are excluded from customized views (a filtering policy, not an error).
pub fn has_customization(tag_id: &str, entries: &[TagCustomization]) -> bool {
    entries
        .iter()
        .any(|c| c.tag_id == tag_id && is_widget_key(&c.key))
}

/// The image URL of the tag's first widget-key entry, if it parses as an
/// image and passes the safety filter. `None` covers every other case --
/// no customization, a non-image value, an empty reference, or a blocked
/// URL -- because callers render all of them the same way.
pub fn image_url_for_tag(tag_id: &str, entries: &[TagCustomization]) -> Option<String> {
    let entry = entries
        .iter()
        .find(|c| c.tag_id == tag_id && is_widget_key(&c.key))?;
    let url = parse_value(&entry.value).image_url()?.to_owned();
    is_safe_url(&url).then_some(url)
}

/// All widget keys declared for a tag, in store order.
pub fn widget_keys_for_tag(tag_id: &str, entries: &[TagCustomization]) -> Vec<String> {
    entries
        .iter()
        .filter(|c| c.tag_id == tag_id && is_widget_key(&c.key))
        .map(|c| c.key.clone())
        .collect()
}

fn resolve_entry(tag: &Tag, entry: &TagCustomization, entries: &[TagCustomization]) -> WidgetInstance {
    let parsed = parse_value(&entry.value);
    let params = params_for_key(&tag.id, entries, &entry.key);

    let outcome = match parsed.kind {
        ParsedKind::Image { url } => WidgetOutcome::Image {
            url: url.filter(|u| is_safe_url(u)),
        },
        ParsedKind::Params(_) | ParsedKind::Scalar => {
            let name = widget_name_for_entry(entry, &parsed.raw);
            match resolve_widget_name(&name) {
                None => WidgetOutcome::NotImplemented {
                    name,
                    data_type: tag.data_type,
                },
                Some(widget) if !widget.is_compatible_with(tag.data_type) => {
                    WidgetOutcome::Incompatible {
                        widget,
                        expected: widget.accepts(),
                        actual: tag.data_type,
                    }
                }
                Some(widget) => WidgetOutcome::Widget { widget },
            }
        }
    };

    WidgetInstance {
        key: entry.key.clone(),
        params,
        outcome,
    }
}

/// The store convention for naming a widget: the key itself names the
/// widget, unless the key is literally `widget` (any case), in which case
/// the value carries the name. Isolated here because the convention lives
/// in the external store and may shift under us.
fn widget_name_for_entry(entry: &TagCustomization, trimmed_value: &str) -> String {
    if entry.key.eq_ignore_ascii_case("widget") {
        trimmed_value.to_owned()
    } else {
        entry.key.clone()
    }
}

/// Merged, validated parameters for one widget key: parsed parameter bags
/// from entries sharing the key first, then tag-global `color` /
/// `color_text` overrides from the tag's other entries. Globals win last.
pub fn params_for_key(
    tag_id: &str,
    entries: &[TagCustomization],
    widget_key: &str,
) -> WidgetParams {
    let mut sets: Vec<WidgetParams> = Vec::new();

    for entry in entries.iter().filter(|c| c.tag_id == tag_id) {
        if entry.key != widget_key {
            continue;
        }
        if let ParsedKind::Params(params) = parse_value(&entry.value).kind {
            sets.push(params);
        }
    }

    for entry in entries.iter().filter(|c| c.tag_id == tag_id) {
        if entry.key == widget_key {
            continue;
        }
        let lower = entry.key.to_lowercase();
        if lower == "color" || lower == "color_text" {
            let mut set = WidgetParams::new();
            set.insert(lower, ParamValue::Text(entry.value.clone()));
            sets.push(set);
        }
    }

    validate(merge(sets))
}
