// ── Customization parsing, parameters, and safety ──

pub mod params;
pub mod parse;
pub mod safety;

pub use params::{merge, validate, ParamValue, WidgetParams};
pub use parse::{is_widget_key, parse_value, ParsedKind, ParsedValue};
pub use safety::is_safe_url;
