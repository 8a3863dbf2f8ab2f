// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Naming scheme tying a vCluster's StatefulSet to its secrets.

/// Prefix vCluster deployments put in front of the StatefulSet name
const STATEFULSET_PREFIX: &str = "vcluster-";
/// Prefix of the credential secret the vCluster publishes in its own namespace
const CREDENTIAL_PREFIX: &str = "vc-";
/// Prefix of the ArgoCD cluster secret the enroller owns
const REGISTRATION_PREFIX: &str = "vcluster-";

/// Extract the vCluster name from its StatefulSet name.
///
/// Strips one leading `vcluster-` if present; otherwise the StatefulSet
/// name is the vCluster name.
pub fn vcluster_name(statefulset_name: &str) -> &str {
    statefulset_name
        .strip_prefix(STATEFULSET_PREFIX)
        .unwrap_or(statefulset_name)
}

/// Name of the credential secret a vCluster exposes in its own namespace
pub fn credential_secret_name(vcluster_name: &str) -> String {
    format!("{}{}", CREDENTIAL_PREFIX, vcluster_name)
}

/// Name of the ArgoCD cluster secret registering a vCluster
pub fn registration_secret_name(vcluster_name: &str) -> String {
    format!("{}{}", REGISTRATION_PREFIX, vcluster_name)
}
