// ── Edge domain types ──
//
// An Edge is a monitored entity owning a set of tags. The catalog endpoint
// returns bare id strings; everything else about an edge is derived.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical edge type. Assigned from a stable hash of the edge id so the
/// same edge always renders with the same icon and color, regardless of the
/// order the catalog returns it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    Star,
    Supernova,
    NeutronStar,
    BlackHole,
}

impl EdgeType {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Star => "⭐",
            Self::Supernova => "💥",
            Self::NeutronStar => "⚡",
            Self::BlackHole => "🕳️",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::Supernova => "Supernova",
            Self::NeutronStar => "Neutron star",
            Self::BlackHole => "Black hole",
        }
    }

    /// Accent color used for this edge type in charts and lists.
    pub fn color(self) -> &'static str {
        match self {
            Self::Star => "#f59e0b",
            Self::Supernova => "#ef4444",
            Self::NeutronStar => "#8b5cf6",
            Self::BlackHole => "#1f2937",
        }
    }

    fn from_index(index: u32) -> Self {
        match index % 4 {
            0 => Self::Star,
            1 => Self::Supernova,
            2 => Self::NeutronStar,
            _ => Self::BlackHole,
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A monitored entity. Purely derived from its id; recomputed on each fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub name: String,
    pub edge_type: EdgeType,
}

impl Edge {
    /// Build an `Edge` from a bare catalog identifier.
    pub fn from_id(id: impl Into<String>) -> Self {
        let id = id.into();
        let edge_type = EdgeType::from_index(id_hash(&id));
        Self {
            name: format!("Edge {id}"),
            id,
            edge_type,
        }
    }
}

/// Stable 32-bit accumulator hash over the id's UTF-16 code units.
/// Wrapping `h = (h << 5) - h + unit` per unit, absolute value taken at the end.
pub(crate) fn id_hash(id: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in id.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_type_is_stable_for_same_id() {
        let a = Edge::from_id("drill-07");
        let b = Edge::from_id("drill-07");
        assert_eq!(a.edge_type, b.edge_type);
    }

    #[test]
    fn edge_name_includes_id() {
        let edge = Edge::from_id("rig42");
        assert_eq!(edge.name, "Edge rig42");
        assert_eq!(edge.id, "rig42");
    }

    #[test]
    fn hash_is_order_sensitive() {
        assert_ne!(id_hash("ab"), id_hash("ba"));
    }

    #[test]
    fn empty_id_hashes_to_zero() {
        assert_eq!(id_hash(""), 0);
        assert_eq!(Edge::from_id("").edge_type, EdgeType::Star);
    }
}
