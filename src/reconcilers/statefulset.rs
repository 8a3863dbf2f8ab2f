// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! StatefulSet reconciler - watches vCluster StatefulSets and keeps their
//! ArgoCD registrations in sync with the StatefulSet lifecycle.

use crate::config::Config;
use crate::constants::{labels, FINALIZER, OPERATOR_NAME};
use crate::enroll::{enroll_vcluster, remove_vcluster, RemovalOutcome};
use crate::error::{EnrollerError, Result};
use futures::StreamExt;
use k8s_openapi::api::apps::v1::StatefulSet;
use kube::{
    api::{Patch, PatchParams},
    runtime::{controller::Action, Controller},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub struct StatefulSetReconciler {
    client: Client,
    config: Config,
}

impl StatefulSetReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let statefulsets: Api<StatefulSet> = match &self.config.watch_namespace {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        };
        let watcher_config = WatcherConfig::default().labels(labels::VCLUSTER_APP);
        let context = Arc::new(self);

        Controller::new(statefulsets, watcher_config)
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled statefulset: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }
}

async fn reconcile(
    statefulset: Arc<StatefulSet>,
    ctx: Arc<StatefulSetReconciler>,
) -> Result<Action> {
    let name = statefulset.name_any();
    let namespace = statefulset.namespace().unwrap_or_default();

    debug!("Reconciling statefulset: {}/{}", namespace, name);

    let api: Api<StatefulSet> = Api::namespaced(ctx.client.clone(), &namespace);

    if statefulset.metadata.deletion_timestamp.is_some() {
        // Cleanup is best-effort: a failed delete must never block the
        // StatefulSet's own removal, so the finalizer comes off regardless.
        match remove_vcluster(&ctx.client, &ctx.config, &name).await {
            RemovalOutcome::Success => {
                info!("Removed ArgoCD registration for {}/{}", namespace, name);
            }
            RemovalOutcome::Failed { message } => {
                warn!(
                    "Could not remove ArgoCD registration for {}/{}: {}",
                    namespace, name, message
                );
            }
        }
        remove_finalizer(&api, &statefulset).await?;
        return Ok(Action::await_change());
    }

    if !statefulset.finalizers().iter().any(|f| f == FINALIZER) {
        debug!("Adding finalizer to {}/{}", namespace, name);
        add_finalizer(&api, &statefulset).await?;
        return Ok(Action::requeue(Duration::from_secs(1)));
    }

    enroll_vcluster(&ctx.client, &ctx.config, &name, &namespace).await?;

    Ok(Action::await_change())
}

fn error_policy(
    statefulset: Arc<StatefulSet>,
    error: &EnrollerError,
    _ctx: Arc<StatefulSetReconciler>,
) -> Action {
    let name = statefulset.name_any();
    match error {
        EnrollerError::Retryable { delay_secs, .. } => {
            warn!("Transient error reconciling {}: {}", name, error);
            Action::requeue(Duration::from_secs(*delay_secs))
        }
        _ => {
            // Permanent failure: wait for the StatefulSet to change instead
            // of retrying into the same error.
            error!("Giving up on {}: {}", name, error);
            Action::await_change()
        }
    }
}

async fn add_finalizer(api: &Api<StatefulSet>, statefulset: &StatefulSet) -> Result<()> {
    let name = statefulset.name_any();
    let mut finalizers = statefulset.finalizers().to_vec();
    finalizers.push(FINALIZER.to_string());

    let patch = serde_json::json!({ "metadata": { "finalizers": finalizers } });
    api.patch(&name, &PatchParams::apply(OPERATOR_NAME), &Patch::Merge(&patch))
        .await
        .map_err(|e| {
            EnrollerError::retryable(format!("failed to add finalizer to {}: {}", name, e))
        })?;
    Ok(())
}

async fn remove_finalizer(api: &Api<StatefulSet>, statefulset: &StatefulSet) -> Result<()> {
    let name = statefulset.name_any();
    let remaining: Vec<String> = statefulset
        .finalizers()
        .iter()
        .filter(|f| f.as_str() != FINALIZER)
        .cloned()
        .collect();

    let patch = serde_json::json!({ "metadata": { "finalizers": remaining } });
    api.patch(&name, &PatchParams::apply(OPERATOR_NAME), &Patch::Merge(&patch))
        .await
        .map_err(|e| {
            EnrollerError::retryable(format!("failed to remove finalizer from {}: {}", name, e))
        })?;
    Ok(())
}
