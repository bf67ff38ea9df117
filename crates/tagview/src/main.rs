mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tagview_api::{DashboardClient, TlsMode};
use tagview_config::{load_config_or_default, profile_to_transport, resolve_profile, Profile};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a backend connection
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "tagview", &mut std::io::stdout());
            Ok(())
        }

        // All other commands talk to the backend
        cmd => {
            let client = build_client(&cli.global)?;
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &client, &cli.global).await
        }
    }
}

/// Build a `DashboardClient` from the config file, profile, and CLI overrides.
fn build_client(global: &cli::GlobalOpts) -> Result<DashboardClient, CliError> {
    let cfg = load_config_or_default();

    // An explicit --server wins over any profile.
    let (url, mut transport) = if let Some(ref server) = global.server {
        let profile = Profile {
            server: server.clone(),
            ca_cert: None,
            insecure: Some(global.insecure),
            timeout: Some(global.timeout),
            poll_interval: None,
        };
        profile_to_transport(&profile, &cfg.defaults)?
    } else {
        match resolve_profile(&cfg, global.profile.as_deref()) {
            Ok((_, profile)) => profile_to_transport(profile, &cfg.defaults)?,
            Err(_) if global.profile.is_none() => return Err(CliError::NoServer),
            Err(e) => return Err(e.into()),
        }
    };

    // CLI flags override profile-level transport settings.
    if global.insecure {
        transport.tls = TlsMode::DangerAcceptInvalid;
    }
    transport.timeout = std::time::Duration::from_secs(global.timeout);

    Ok(DashboardClient::new(url, &transport)?)
}
