// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::Result;
use item_daemon::config::{self, StoreBackend, StoreOverrides, UserConfig};
use item_daemon::cors::{build_cors_layer, parse_cors_origins, DEFAULT_CORS_ORIGINS};
use item_daemon::logging::{default_log_dir, init_logging, parse_rotation, LogConfig};
use item_daemon::server::{build_router, shutdown_signal};
use item_daemon::store::build_store;
use item_daemon::ItemResource;
use tokio::net::TcpListener;
use tracing::{info, warn};

const DEFAULT_ADDR: &str = "127.0.0.1:5000";

/// Item Daemon - JSON CRUD service for inventory items
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, env = "ITEM_DAEMON_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,

    /// Comma-separated list of allowed CORS origins.
    /// Use "*" to allow all origins.
    /// Example: --cors-origins=https://app.example.com,http://localhost:5173
    #[arg(
        long,
        env = "ITEM_DAEMON_CORS_ORIGINS",
        default_value = DEFAULT_CORS_ORIGINS,
        value_delimiter = ','
    )]
    cors_origins: Vec<String>,

    /// Enable JSON log format (for production/log aggregation)
    #[arg(long, env = "ITEM_DAEMON_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "ITEM_DAEMON_LOG_ROTATION", default_value = "daily")]
    log_rotation: String,

    /// Custom log directory (default: ~/.item-daemon/logs)
    #[arg(long, env = "ITEM_DAEMON_LOG_DIR")]
    log_dir: Option<String>,

    /// Item store backend (default: memory, or the config file's choice)
    #[arg(long, env = "ITEM_DAEMON_STORE", value_enum)]
    store: Option<StoreBackend>,

    /// Base URL of the `PostgREST` endpoint, e.g. <https://xyz.supabase.co>
    #[arg(long, env = "ITEM_DAEMON_STORE_URL")]
    store_url: Option<String>,

    /// Table holding the items (default: items)
    #[arg(long, env = "ITEM_DAEMON_STORE_TABLE")]
    store_table: Option<String>,

    /// Service key sent to the `PostgREST` endpoint
    #[arg(long, env = "ITEM_DAEMON_STORE_KEY", hide_env_values = true)]
    store_key: Option<String>,

    /// Start the memory store with demo items (`--seed` or `--seed=false`;
    /// unset defers to the config file)
    #[arg(
        long,
        env = "ITEM_DAEMON_SEED",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    seed: Option<bool>,
}

fn report_server_error(addr: SocketAddr, log_file: &Path, e: &std::io::Error) {
    if e.kind() == std::io::ErrorKind::AddrInUse {
        eprintln!();
        eprintln!("Error: Failed to start server - address {addr} is already in use");
        eprintln!();
        eprintln!("Another instance of item-daemon may already be running.");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  1. Kill the existing process:   pkill item-daemon");
        eprintln!("  2. Use a different port:        item-daemon --addr 127.0.0.1:5001");
        eprintln!("  3. Check what's using the port: lsof -i :{}", addr.port());
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return;
    }
    eprintln!();
    eprintln!("Error: Failed to start server: {e}");
    eprintln!();
    eprintln!("Logs: {}", log_file.display());
    eprintln!();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_config = LogConfig {
        log_dir: args.log_dir.map_or_else(default_log_dir, PathBuf::from),
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };
    let log_file = log_config.log_file();

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    // Load user-level config (~/.item-daemon/config.toml); file is optional.
    let user_cfg = config::load_user_config().unwrap_or_else(|e| {
        warn!("Failed to load user config, using defaults: {e}");
        UserConfig::default()
    });

    let overrides = StoreOverrides {
        backend: args.store,
        url: args.store_url,
        table: args.store_table,
        api_key: args.store_key,
        seed: args.seed,
    };
    let store_settings = config::resolve_store_settings(overrides, &user_cfg)?;
    let store = build_store(&store_settings)?;
    let resource = ItemResource::new(store);

    let addr: SocketAddr = args.addr.parse()?;

    let cors_origins = parse_cors_origins(&args.cors_origins);
    info!("CORS origins: {}", cors_origins.join(", "));

    let app = build_router(resource).layer(build_cors_layer(cors_origins));

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_server_error(addr, &log_file, &e);
            return Err(e.into());
        }
    };

    info!("Starting item daemon on http://{}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Err(e) = served {
        report_server_error(addr, &log_file, &e);
        return Err(e.into());
    }

    info!("Item daemon stopped");
    Ok(())
}
