// ── Wire-to-domain conversions ──
//
// Bridges raw backend responses into canonical domain types. The current
// values endpoint returns a flat map of tag name → JSON value; the edge
// catalog returns bare id strings. Everything else is derived here, once,
// so consumers never normalize wire data themselves.

use serde_json::{Map, Value};

use crate::classify::resolve_tag;
use crate::model::{Edge, Tag};

/// Build the tag list for one edge from a current-values response.
/// Every entry converts -- malformed values degrade per the classifier's
/// fail-safe rules rather than dropping the tag.
pub fn tags_from_current(current: &Map<String, Value>) -> Vec<Tag> {
    current
        .iter()
        .map(|(name, value)| resolve_tag(name, value))
        .collect()
}

/// Build `Edge` records from the catalog's bare id list.
pub fn edges_from_ids<S: AsRef<str>>(ids: &[S]) -> Vec<Edge> {
    ids.iter().map(|id| Edge::from_id(id.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TagDataType, TagValue};
    use serde_json::json;

    #[test]
    fn current_map_becomes_classified_tags() {
        let Value::Object(current) = json!({
            "PC_IO_2.30": 1,
            "Pump1_Wref_spm": 88.5,
            "free_text": "hello",
        }) else {
            unreachable!()
        };

        let tags = tags_from_current(&current);
        assert_eq!(tags.len(), 3);

        let io = tags.iter().find(|t| t.id == "PC_IO_2.30").expect("io tag");
        assert_eq!(io.data_type, TagDataType::Boolean);
        assert_eq!(io.value, TagValue::Bool(true));

        let spm = tags
            .iter()
            .find(|t| t.id == "Pump1_Wref_spm")
            .expect("spm tag");
        assert_eq!(spm.value, TagValue::Number(88.5));

        let text = tags.iter().find(|t| t.id == "free_text").expect("text tag");
        assert_eq!(text.value, TagValue::Text("hello".into()));
    }

    #[test]
    fn edges_from_bare_ids() {
        let edges = edges_from_ids(&["rig-1", "rig-2"]);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].id, "rig-1");
        assert_eq!(edges[0].name, "Edge rig-1");
    }
}
