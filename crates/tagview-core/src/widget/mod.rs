// ── Widget catalog and resolution ──

pub mod catalog;
pub mod resolve;

pub use catalog::{normalize_widget_name, resolve_widget_name, WidgetFamily, WidgetType};
pub use resolve::{
    has_customization, image_url_for_tag, params_for_key, resolve_all, resolve_best,
    widget_keys_for_tag, WidgetInstance, WidgetOutcome,
};
