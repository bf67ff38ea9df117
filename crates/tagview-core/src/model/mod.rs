// ── Domain model ──

pub mod customization;
pub mod edge;
pub mod tag;

pub use customization::{BlockCustomization, EdgeCustomization, TagCustomization};
pub use edge::{Edge, EdgeType};
pub use tag::{Tag, TagDataType, TagValue};
