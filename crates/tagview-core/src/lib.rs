//! Domain model and widget-resolution engine for the tagview dashboard.
//!
//! This crate owns the pure, synchronous heart of the system: given a
//! tag's raw telemetry value and the customization entries of its edge, it
//! decides which widgets render the tag and with what parameters.
//!
//! - **[`classify`]** — Name-pattern classification of tags into
//!   boolean/number/string, with fail-safe conversion of raw wire values.
//!   Malformed telemetry never crashes rendering.
//!
//! - **[`customize`]** — The store's raw-value mini-grammar
//!   (`{key=value;...}` bags, `{url:...}` image references, opaque
//!   scalars), parameter merging and repair, and the image-URL safety
//!   filter.
//!
//! - **[`widget`]** — The closed fourteen-member widget catalog with
//!   alias resolution, and the resolution engine that turns customization
//!   entries into [`WidgetInstance`]s. Every failure mode is a value
//!   (`NotImplemented`, `Incompatible`, missing image URL), never an
//!   error: a bad store row degrades one widget, not the view.
//!
//! - **[`history`]** — Shape-sniffing decode of loosely-typed history
//!   payloads into normalized rows, isolated from the engine.
//!
//! - **[`color`]** — Color-name normalization and the shared chart
//!   palette.
//!
//! Everything here is a pure function over inputs already in memory; no
//! I/O, no locks, no shared mutable state. Resolution can run concurrently
//! across tags and edges by construction, and a stale result is discarded,
//! not cancelled.

pub mod classify;
pub mod color;
pub mod convert;
pub mod customize;
pub mod history;
pub mod model;
pub mod widget;

// ── Primary re-exports ──────────────────────────────────────────────
pub use classify::{classify, determine_tag_type, resolve_tag, TagTypeInfo};
pub use convert::{edges_from_ids, tags_from_current};
pub use customize::{
    is_safe_url, is_widget_key, parse_value, ParamValue, ParsedKind, ParsedValue, WidgetParams,
};
pub use history::{chart_points, decode_history, ChartPoint, HistoryRow, CHART_POINT_LIMIT};
pub use model::{
    BlockCustomization, Edge, EdgeCustomization, EdgeType, Tag, TagCustomization, TagDataType,
    TagValue,
};
pub use widget::{
    has_customization, image_url_for_tag, resolve_all, resolve_best, resolve_widget_name,
    WidgetFamily, WidgetInstance, WidgetOutcome, WidgetType,
};
