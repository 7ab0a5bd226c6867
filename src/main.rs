// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use sui_relay_server::{
    api::router,
    config::{
        Config, Overrides, COMMAND_TIMEOUT_ENV, CONFIG_FILE_ENV, HOST_ENV, LOG_FORMAT_ENV,
        PORT_ENV, SUI_EXECUTABLE_ENV,
    },
    logging::{self, LogFormat},
    state::AppState,
};

#[derive(Parser, Debug)]
#[command(name = "sui-relay-server")]
#[command(about = "HTTP API relaying queries and transfers to the sui client")]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = CONFIG_FILE_ENV)]
    config: Option<PathBuf>,

    /// Server host
    #[arg(long, env = HOST_ENV)]
    host: Option<String>,

    /// Server port [default: 8080]
    #[arg(short, long, env = PORT_ENV)]
    port: Option<u16>,

    /// Path to the sui executable [default: sui, looked up in PATH]
    #[arg(long, env = SUI_EXECUTABLE_ENV)]
    sui_path: Option<PathBuf>,

    /// Kill a sui command after this many seconds (0 disables)
    #[arg(long, env = COMMAND_TIMEOUT_ENV)]
    command_timeout_secs: Option<u64>,

    /// Log output format: json or pretty
    #[arg(long, env = LOG_FORMAT_ENV, default_value = "pretty")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_format);

    let config = Config::load(args.config.as_deref())?.apply(Overrides {
        host: args.host,
        port: args.port,
        executable_path: args.sui_path,
        command_timeout_secs: args.command_timeout_secs,
    });

    let state = AppState::from_config(&config.sui);
    let app = router(state);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        addr = %listener.local_addr()?,
        sui = %config.sui.executable().display(),
        timeout = ?config.sui.command_timeout(),
        "Sui relay server listening (docs at /docs)"
    );

    let shutdown = CancellationToken::new();
    tokio::spawn(wait_for_signal(shutdown.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .context("HTTP server failed")?;

    info!("server stopped");
    Ok(())
}

/// Cancel `token` on Ctrl-C or SIGTERM.
async fn wait_for_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to listen for SIGTERM");
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

    info!("shutdown signal received");
    token.cancel();
}
