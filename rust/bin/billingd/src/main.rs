//! `billingd`: the billing records server binary.
//!
//! Usage:
//!   billingd [-c <context-name-or-path>] [--listen <addr>]
//!
//! The context name resolves to `/etc/billing/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly.
//! Without `-c`, built-in defaults are used.

mod config;
mod routes;

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use billing_core::Module;

use config::ServerConfig;

/// Billing records server.
#[derive(Parser, Debug)]
#[command(name = "billingd", about = "Billing records server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Listen address (overrides the config file).
    #[arg(long = "listen")]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let server_config = match &cli.config {
        Some(name) => {
            let path = ServerConfig::resolve_path(name);
            info!("Loading configuration from {}", path.display());
            ServerConfig::load(&path)?
        }
        None => ServerConfig::default(),
    };

    let mut service_config = server_config.service;
    if let Some(listen) = cli.listen {
        service_config.listen = listen;
    }

    // Initialize storage.
    if let Some(dir) = &service_config.data_dir {
        std::fs::create_dir_all(dir)?;
    }
    let sqlite_path = service_config.resolve_sqlite_path();
    let sql: Arc<dyn billing_sql::SQLStore> = Arc::new(
        billing_sql::SqliteStore::open(&sqlite_path)
            .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?,
    );
    info!("SQL store opened at {}", sqlite_path.display());

    let users_module = users::UsersModule::new(Arc::clone(&sql))?;
    info!("Users module initialized");

    let module_routes = vec![(users_module.name(), users_module.routes())];
    let app = routes::build_router(module_routes, service_config.request_timeout());

    // Start server.
    let listener = tokio::net::TcpListener::bind(&service_config.listen).await?;
    info!("billingd listening on {}", service_config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
