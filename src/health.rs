// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Liveness probe endpoint.

use axum::routing::get;
use axum::Router;
use tracing::info;

async fn healthz() -> &'static str {
    "ok"
}

/// Serve the liveness endpoint on `addr` until the process exits
pub async fn serve(addr: &str) -> anyhow::Result<()> {
    let app = Router::new().route("/healthz", get(healthz));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Liveness endpoint listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
