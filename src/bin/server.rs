use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use todolist::config::{self, CliArgs};
use todolist::repo::{SharedStore, SqliteTodoStore};
use todolist::{create_app, db, run_migrations};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sets up the global tracing subscriber
///
/// `RUST_LOG` wins over the defaults picked from the debug flag. The
/// returned guard flushes buffered log lines when dropped.
fn init_tracing(debug: bool, json: bool) -> WorkerGuard {
    let default_directives = if debug {
        "todolist=debug,todolist_server=debug,tower_http=debug"
    } else {
        "todolist=info,todolist_server=info,tower_http=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(fmt::layer().json().with_writer(writer)).init();
    } else {
        registry.with(fmt::layer().with_writer(writer)).init();
    }

    guard
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        return;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let args = CliArgs::parse();
    let _guard = init_tracing(args.debug, args.json_logs);

    info!("Starting todolist API server");

    let config = config::get_config(&args);

    let pool = db::init_pool(&config.database_url)
        .with_context(|| format!("Failed to open database {}", config.database_url))?;
    {
        let mut conn = pool.get().context("Failed to get a database connection")?;
        run_migrations(&mut conn)?;
    }

    let store: SharedStore = Arc::new(SqliteTodoStore::new(pool));
    let app = create_app(store).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}
