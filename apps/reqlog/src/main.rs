//! reqlog service
//!
//! Loads `figure.ini` (or the path given as first argument), opens the file
//! logger and serves a line protocol on the configured port. Each connection
//! logs through its own child logger tagged with a fresh trace id.

use anyhow::{Context, Result};
use reqlog_core::{
    generate_trace_id, log_debug, log_info, log_warn, AppConfig, Logger, SharedLogger,
    DEFAULT_CONFIG_FILE,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info};

/// Initialize tracing for the service's own diagnostics (console only)
///
/// RUST_LOG takes precedence over the default filter.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqlog_core=debug"));

    let console_layer = fmt::layer()
        .with_ansi(true)
        .compact()
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let config = AppConfig::load(&config_path).with_context(|| {
        format!("Failed to load configuration from {}", config_path.display())
    })?;

    // Without a log file there are no diagnostics, so this aborts startup
    let logger: SharedLogger = Arc::new(
        Logger::new(&config.save_path, config.level).context("Log file is unavailable")?,
    );

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    let local_addr = listener.local_addr()?;

    info!("Starting reqlog v{} on {}", env!("CARGO_PKG_VERSION"), local_addr);
    log_info!(logger, "listening on", local_addr);

    serve(listener, Arc::clone(&logger)).await;

    log_info!(logger, "shutting down");
    if let Err(e) = logger.close() {
        error!("Failed to close log file: {}", e);
    }
    info!("Shutdown complete");
    Ok(())
}

/// Accept connections until Ctrl-C.
async fn serve(listener: TcpListener, logger: SharedLogger) {
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    let conn_logger = logger.with_correlation_id(generate_trace_id());
                    tokio::spawn(handle_connection(stream, peer, conn_logger));
                }
                Err(e) => log_warn!(logger, "accept failed:", e),
            },
            result = &mut shutdown => {
                if let Err(e) = result {
                    error!("Failed to listen for shutdown signal: {}", e);
                }
                info!("Shutdown signal received");
                return;
            }
        }
    }
}

/// Log every received line and acknowledge it.
async fn handle_connection(stream: TcpStream, peer: SocketAddr, logger: Logger) {
    log_debug!(logger, "connection opened from", peer);

    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                log_info!(logger, "received", line);
                if let Err(e) = writer.write_all(b"ok\n").await {
                    log_warn!(logger, "write to", peer, "failed:", e);
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                log_warn!(logger, "read from", peer, "failed:", e);
                break;
            }
        }
    }

    log_debug!(logger, "connection closed", peer);
}
