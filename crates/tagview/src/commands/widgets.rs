//! Widget resolution command handler.
//!
//! Fetches current values and the tag customization store for an edge,
//! runs the resolution engine over every tag, and prints each widget
//! instance -- including the degraded states a dashboard renders as
//! warnings.

use serde::Serialize;
use tabled::Tabled;
use tagview_api::DashboardClient;
use tagview_core::{
    resolve_all, tags_from_current, Tag, WidgetInstance, WidgetOutcome, WidgetParams,
};

use crate::cli::{GlobalOpts, WidgetsArgs};
use crate::error::CliError;
use crate::output;

// ── Flattened record ────────────────────────────────────────────────

/// One resolved instance, flattened for output. Tags without any
/// customization appear only under `--all`, with no key or widget.
#[derive(Serialize)]
struct ResolvedRecord {
    tag: String,
    data_type: String,
    key: Option<String>,
    state: &'static str,
    widget: Option<String>,
    detail: String,
    params: WidgetParams,
}

impl ResolvedRecord {
    fn from_instance(tag: &Tag, instance: WidgetInstance) -> Self {
        let (state, widget, detail) = match &instance.outcome {
            WidgetOutcome::Widget { widget } => (
                "resolved",
                Some(widget.to_string()),
                widget.display_name().to_owned(),
            ),
            WidgetOutcome::Image { url: Some(url) } => {
                ("image", None, url.clone())
            }
            WidgetOutcome::Image { url: None } => {
                ("image", None, "no usable image URL".to_owned())
            }
            WidgetOutcome::NotImplemented { name, data_type } => (
                "not implemented",
                None,
                format!("widget \"{name}\" is not implemented (tag type: {data_type})"),
            ),
            WidgetOutcome::Incompatible {
                widget,
                expected,
                actual,
            } => {
                let expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
                (
                    "incompatible",
                    Some(widget.to_string()),
                    format!(
                        "{} expects {}, tag is {actual}",
                        widget.display_name(),
                        expected.join("/"),
                    ),
                )
            }
        };

        Self {
            tag: tag.id.clone(),
            data_type: tag.data_type.to_string(),
            key: Some(instance.key),
            state,
            widget,
            detail,
            params: instance.params,
        }
    }

    fn uncustomized(tag: &Tag) -> Self {
        Self {
            tag: tag.id.clone(),
            data_type: tag.data_type.to_string(),
            key: None,
            state: "no customization",
            widget: None,
            detail: "hidden from customized views".to_owned(),
            params: WidgetParams::new(),
        }
    }
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct WidgetRow {
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Widget / Detail")]
    detail: String,
    #[tabled(rename = "Params")]
    params: String,
}

impl From<&ResolvedRecord> for WidgetRow {
    fn from(r: &ResolvedRecord) -> Self {
        let params = r
            .params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            tag: r.tag.clone(),
            key: r.key.clone().unwrap_or_else(|| "-".into()),
            state: r.state.to_owned(),
            detail: r.detail.clone(),
            params,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &DashboardClient,
    args: WidgetsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let current = client.current(&args.edge).await?;
    let customizations = client.tag_customizations_for_edge(&args.edge).await?;

    let tags = tags_from_current(&current);
    let mut records: Vec<ResolvedRecord> = Vec::new();

    for tag in &tags {
        let instances = resolve_all(tag, &customizations);
        if instances.is_empty() {
            // NoCustomization: excluded from customized views by default.
            if args.all {
                records.push(ResolvedRecord::uncustomized(tag));
            }
            continue;
        }
        for instance in instances {
            records.push(ResolvedRecord::from_instance(tag, instance));
        }
    }

    let rendered = output::render_list(&global.output, &records, |r| WidgetRow::from(r), |r| {
        format!("{}/{}", r.tag, r.key.as_deref().unwrap_or("-"))
    });
    output::print_output(&rendered, global.quiet);
    Ok(())
}
