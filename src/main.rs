//! Route registry service.
//!
//! ```text
//!   feature modules ──add_router──▶ ┌──────────────────────────────┐
//!                                   │        RouterRegistry        │
//!                                   │  pending descriptors         │
//!   config ──validators───────────▶ │  validators per category     │
//!                                   │  type handlers per category  │
//!                                   └──────────────┬───────────────┘
//!                                                  │ register_all (once)
//!                                                  ▼
//!                                   ┌──────────────────────────────┐
//!                                   │  AppHost (axum Router)       │
//!                                   └──────────────┬───────────────┘
//!                                                  ▼
//!                                      HttpServer (timeout, trace)
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use route_registry::config::{self, AppConfig};
use route_registry::lifecycle::startup::{build_application, StartupError};
use route_registry::observability::{logging, metrics};
use route_registry::{registry, HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "route-registry")]
#[command(about = "HTTP service whose routes are bound through the router registry", long_about = None)]
struct Cli {
    /// Config file. Defaults to config.<ENV>.toml in the working directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register routes and serve (default)
    Serve,
    /// Run the registration pass, print the report and exit
    Check,
}

fn load(cli: &Cli) -> Result<AppConfig, config::ConfigError> {
    match &cli.config {
        Some(path) => config::load_config(path),
        None => {
            let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());
            config::loader::load_for_env(&std::env::current_dir()?, &env)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load(&cli)?;

    logging::init_tracing(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "route-registry starting");

    let checking = matches!(cli.command, Some(Commands::Check));

    // the recorder must be in place before the registration pass counts routes
    if config.observability.metrics_enabled && !checking {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(err) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %err,
                "Failed to parse metrics address"
            ),
        }
    }

    let (app, report) = build_application(&config)?;

    if checking {
        let stats = registry::global().get_statistics();
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({
            "report": report,
            "statistics": stats,
        }))?);
        if !report.is_clean() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let address = config.server.bind_address.clone();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(app, &config.server);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
