// ── Customization records ──
//
// Raw (scope, key, value) triples from the external customization store.
// Values are opaque strings here; their format is decided by
// `crate::customize::parse`. Entries are immutable once fetched, and a
// single (edge_id, tag_id) pair may own several entries under different
// keys -- that is how one tag carries several simultaneous widgets.

use serde::{Deserialize, Serialize};

/// Edge-scoped customization record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCustomization {
    pub edge_id: String,
    pub key: String,
    pub value: String,
}

/// Block-scoped customization record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCustomization {
    pub block_id: String,
    pub key: String,
    pub value: String,
}

/// Tag-scoped customization record -- the scope the resolution engine
/// actually works against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCustomization {
    pub edge_id: String,
    pub tag_id: String,
    pub key: String,
    pub value: String,
}

impl TagCustomization {
    pub fn new(
        edge_id: impl Into<String>,
        tag_id: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            edge_id: edge_id.into(),
            tag_id: tag_id.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}
