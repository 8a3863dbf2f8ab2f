// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use std::env;

use crate::constants::{DEFAULT_ARGOCD_NAMESPACE, DEFAULT_HEALTH_ADDR};

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace the ArgoCD cluster secrets are written to
    pub argocd_namespace: String,
    /// Restrict watching to a single namespace; all namespaces when unset
    pub watch_namespace: Option<String>,
    /// Bind address of the liveness probe endpoint
    pub health_addr: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let argocd_namespace = env::var("ARGOCD_NAMESPACE")
            .unwrap_or_else(|_| DEFAULT_ARGOCD_NAMESPACE.to_string());
        let watch_namespace = env::var("WATCH_NAMESPACE").ok().filter(|ns| !ns.is_empty());
        let health_addr =
            env::var("HEALTH_ADDR").unwrap_or_else(|_| DEFAULT_HEALTH_ADDR.to_string());

        Ok(Config {
            argocd_namespace,
            watch_namespace,
            health_addr,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            argocd_namespace: DEFAULT_ARGOCD_NAMESPACE.to_string(),
            watch_namespace: None,
            health_addr: DEFAULT_HEALTH_ADDR.to_string(),
        }
    }
}
