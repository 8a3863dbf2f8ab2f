// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::{info, warn};

use vcluster_enroller::config::Config;
use vcluster_enroller::health;
use vcluster_enroller::reconcilers::StatefulSetReconciler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting vCluster enroller operator");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: argocd_namespace={}",
        config.argocd_namespace
    );
    match &config.watch_namespace {
        Some(ns) => info!("Watching namespace {}", ns),
        None => info!("Watching all namespaces"),
    }

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let reconciler = StatefulSetReconciler::new(client, config.clone());

    // Run the reconciler and the liveness endpoint concurrently
    tokio::try_join!(reconciler.run(), health::serve(&config.health_addr))?;

    // This should never be reached as the reconciler runs forever
    warn!("Reconciler stopped unexpectedly");
    Ok(())
}
