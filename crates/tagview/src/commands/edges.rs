//! Edge catalog command handler.

use tabled::Tabled;
use tagview_api::DashboardClient;
use tagview_core::{edges_from_ids, Edge};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct EdgeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    edge_type: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Edge> for EdgeRow {
    fn from(e: &Edge) -> Self {
        Self {
            id: e.id.clone(),
            edge_type: format!("{} {}", e.edge_type.icon(), e.edge_type),
            name: e.name.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(client: &DashboardClient, global: &GlobalOpts) -> Result<(), CliError> {
    let ids = client.list_edges().await?;
    let edges = edges_from_ids(&ids);

    let rendered = output::render_list(&global.output, &edges, |e| EdgeRow::from(e), |e| e.id.clone());
    output::print_output(&rendered, global.quiet);
    Ok(())
}
