// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Enrollment and removal of vClusters as ArgoCD-managed clusters.
//!
//! Both operations are idempotent and re-read the cluster on every call; the
//! only durable state is the presence and content of the secrets themselves.

use k8s_openapi::api::core::v1::Secret;
use kube::api::{DeleteParams, PostParams};
use kube::{Api, Client};
use tracing::{info, instrument, warn};

use crate::argocd;
use crate::config::Config;
use crate::error::{EnrollerError, Result};
use crate::names;

/// Outcome of removing a vCluster's registration.
///
/// Removal never surfaces an error: a failed cleanup must not block deletion
/// of the StatefulSet that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    Success,
    Failed { message: String },
}

/// Create or refresh the ArgoCD cluster secret for a vCluster StatefulSet.
///
/// Uses create-then-replace-on-conflict rather than check-then-branch, so
/// concurrent duplicate reconciliations converge without error.
#[instrument(skip(client, config))]
pub async fn enroll_vcluster(
    client: &Client,
    config: &Config,
    statefulset_name: &str,
    namespace: &str,
) -> Result<()> {
    let vcluster = names::vcluster_name(statefulset_name);
    let credential_name = names::credential_secret_name(vcluster);

    info!(
        "Enrolling vcluster {}/{} in ArgoCD",
        namespace, vcluster
    );

    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);
    let credential = secrets.get(&credential_name).await.map_err(|e| {
        EnrollerError::retryable(format!(
            "failed to read vcluster secret {}/{}: {}",
            namespace, credential_name, e
        ))
    })?;

    let body = argocd::build_cluster_secret(vcluster, namespace, &config.argocd_namespace, &credential)?;
    let registration_name = names::registration_secret_name(vcluster);

    let registrations: Api<Secret> =
        Api::namespaced(client.clone(), &config.argocd_namespace);

    match registrations.create(&PostParams::default(), &body).await {
        Ok(_) => {
            info!(
                "Created ArgoCD cluster secret {} for vcluster {}",
                registration_name, vcluster
            );
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 409 => {
            info!(
                "ArgoCD cluster secret {} already exists, replacing",
                registration_name
            );
            registrations
                .replace(&registration_name, &PostParams::default(), &body)
                .await
                .map_err(|e| {
                    EnrollerError::retryable(format!(
                        "failed to replace ArgoCD secret {}: {}",
                        registration_name, e
                    ))
                })?;
            info!(
                "Replaced ArgoCD cluster secret {} for vcluster {}",
                registration_name, vcluster
            );
            Ok(())
        }
        Err(e) => Err(EnrollerError::retryable(format!(
            "failed to create ArgoCD secret {}: {}",
            registration_name, e
        ))),
    }
}

/// Delete the ArgoCD cluster secret for a vCluster StatefulSet.
///
/// Already-absent is the desired end state and counts as success.
#[instrument(skip(client, config))]
pub async fn remove_vcluster(
    client: &Client,
    config: &Config,
    statefulset_name: &str,
) -> RemovalOutcome {
    let vcluster = names::vcluster_name(statefulset_name);
    let registration_name = names::registration_secret_name(vcluster);

    info!(
        "Removing ArgoCD cluster secret {} for vcluster {}",
        registration_name, vcluster
    );

    let registrations: Api<Secret> =
        Api::namespaced(client.clone(), &config.argocd_namespace);

    match registrations
        .delete(&registration_name, &DeleteParams::default())
        .await
    {
        Ok(_) => {
            info!("Deleted ArgoCD cluster secret {}", registration_name);
            RemovalOutcome::Success
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!(
                "ArgoCD cluster secret {} not found, already deleted",
                registration_name
            );
            RemovalOutcome::Success
        }
        Err(e) => {
            warn!(
                "Failed to delete ArgoCD cluster secret {}: {}",
                registration_name, e
            );
            RemovalOutcome::Failed {
                message: e.to_string(),
            }
        }
    }
}
