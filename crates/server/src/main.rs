use clap::Parser;
use docdb_core::config;
use docdb_core::storage::Database;
use docdb_server::api::create_router;
use docdb_server::api::handlers::AppState;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docdb", about = "Schemaless JSON document database")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Primary database directory (the index lives at `<database>.index`)
    #[arg(short, long, default_value = config::DEFAULT_DATABASE_PATH)]
    database: String,

    /// Rebuild the fingerprint index from the primary store before serving
    #[arg(long, default_value_t = false)]
    reindex: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    "docdb_server=info"
                        .parse()
                        .expect("valid directive literal"),
                )
                .add_directive(
                    "docdb_core=info"
                        .parse()
                        .expect("valid directive literal"),
                ),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }
    let db_path = std::path::Path::new(&args.database);
    if db_path.exists() && !db_path.is_dir() {
        eprintln!(
            "Error: database path '{}' exists but is not a directory",
            args.database
        );
        std::process::exit(1);
    }

    let db = Arc::new(Database::open(&args.database)?);

    if args.reindex {
        let indexed = db.reindex()?;
        tracing::info!(documents = indexed, "index rebuilt from primary store");
    }

    let state = AppState {
        db: db.clone(),
        start_time: Instant::now(),
    };
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let document_count = db.document_count().unwrap_or(0);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = args.port,
        database = %args.database,
        documents = document_count,
        "docdb ready"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await?;

    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully, draining in-flight requests...");
}
