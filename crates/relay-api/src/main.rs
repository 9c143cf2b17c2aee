//! Relay CLI and HTTP/WebSocket server entry point.
//!
//! Binary name: `relay`
//!
//! Parses CLI arguments, loads configuration, opens the database, then
//! dispatches to a command handler or starts the server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;
use relay_infra::config::load_config;
use relay_infra::filesystem::resolve_data_dir;
use relay_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_directive, TracingOptions};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need tracing or app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "relay", &mut std::io::stdout());
        return Ok(());
    }

    let options = TracingOptions::new(verbosity_directive(cli.verbose, cli.quiet))
        .with_otel(cli.otel)
        .with_json(cli.log_json);
    init_tracing(&options).map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(resolve_data_dir);
    let mut config = load_config(&data_dir).await;
    cli.apply_overrides(&mut config);

    let state = AppState::init(&data_dir, config).await?;

    match cli.command {
        Commands::Serve { .. } => serve(state).await?,
        Commands::Seed => cli::admin::seed(&state, cli.json).await?,
        Commands::Reset { yes } => cli::admin::reset(&state, yes, cli.json).await?,
        Commands::Whoami => cli::user::whoami(&state, cli.json).await?,
        Commands::History { user_id } => {
            cli::history::show_history(&state, user_id, cli.json).await?
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Seed users, then serve HTTP and WebSocket until Ctrl+C or SIGTERM.
async fn serve(state: AppState) -> anyhow::Result<()> {
    let inserted = state.chat_service.seed().await?;
    if inserted > 0 {
        tracing::info!(inserted, "Seeded users");
    }

    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!(
        "  {} Relay listening on {} (data in {})",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan(),
        state.data_dir.display()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
