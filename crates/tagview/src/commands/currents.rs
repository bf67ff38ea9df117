//! Current tag values command handler.

use tabled::Tabled;
use tagview_api::DashboardClient;
use tagview_core::{tags_from_current, Tag};

use crate::cli::{CurrentsArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "Tag")]
    id: String,
    #[tabled(rename = "Type")]
    data_type: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Tag> for TagRow {
    fn from(t: &Tag) -> Self {
        Self {
            id: t.id.clone(),
            data_type: t.data_type.to_string(),
            value: match (&t.value, &t.unit) {
                (v, Some(unit)) => format!("{v} {unit}"),
                (v, None) => v.to_string(),
            },
            description: t.description.clone().unwrap_or_default(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &DashboardClient,
    args: CurrentsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let current = client.current(&args.edge).await?;
    let tags = tags_from_current(&current);

    let rendered = output::render_list(&global.output, &tags, |t| TagRow::from(t), |t| t.id.clone());
    output::print_output(&rendered, global.quiet);
    Ok(())
}
