use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use articledb::api::{create_router, AppState};
use articledb::core::config::Config;
use articledb::storage::layout::StorageLayout;
use articledb::Database;

#[derive(Parser)]
#[command(name = "articledb")]
#[command(about = "Article store with keyword search", long_about = None)]
struct Args {
    /// Directory holding the snapshot file
    #[arg(long, env = "ARTICLES_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    /// HTTP bind address
    #[arg(long, env = "ARTICLES_BIND_ADDR", default_value = "0.0.0.0:3001")]
    bind_addr: SocketAddr,

    /// Import the snapshot file before serving
    #[arg(long, env = "ARTICLES_LOAD_ON_START")]
    load_on_start: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            data_dir: args.data_dir,
            bind_addr: args.bind_addr,
            load_on_start: args.load_on_start,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config: Config = Args::parse().into();
    let storage = StorageLayout::new(config.data_dir.clone())?;
    let db = Arc::new(Database::new());

    if config.load_on_start {
        match db.load_snapshot(&storage) {
            Ok(count) => info!("Loaded {} articles from {}", count, storage.snapshot_path().display()),
            Err(e) if e.is_not_found() => warn!("No snapshot to load, starting empty"),
            Err(e) => return Err(e.into()),
        }
    }

    let app = create_router(AppState { db, storage });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server running at http://{}/", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
