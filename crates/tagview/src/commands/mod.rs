//! Command dispatch: bridges CLI args -> API fetches -> core resolution -> output.

pub mod config_cmd;
pub mod currents;
pub mod edges;
pub mod history;
pub mod widgets;

use tagview_api::DashboardClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &DashboardClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Edges => edges::handle(client, global).await,
        Command::Currents(args) => currents::handle(client, args, global).await,
        Command::Widgets(args) => widgets::handle(client, args, global).await,
        Command::History(args) => history::handle(client, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
