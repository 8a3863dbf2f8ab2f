// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes labels used by the enroller
pub mod labels {
    /// Label selector matching the StatefulSets that back vClusters
    pub const VCLUSTER_APP: &str = "app=vcluster";
    /// ArgoCD label key marking a secret as a cluster registration
    pub const ARGOCD_SECRET_TYPE: &str = "argocd.argoproj.io/secret-type";
    pub const ARGOCD_SECRET_TYPE_CLUSTER: &str = "cluster";
    /// Marks registration secrets as managed by this operator
    pub const MANAGED_BY: &str = "vcluster-operator";
    pub const MANAGED_BY_VALUE: &str = "true";
}

/// The operator name used for patch field management
pub const OPERATOR_NAME: &str = "vcluster-enroller";

/// Finalizer placed on watched StatefulSets so deletions reach the cleanup path
pub const FINALIZER: &str = "vcluster-enroller.io/cleanup";

/// Requeue delay for transient enrollment failures, in seconds
pub const RETRY_DELAY_SECS: u64 = 60;

/// Namespace ArgoCD cluster secrets go to unless overridden
pub const DEFAULT_ARGOCD_NAMESPACE: &str = "argocd";

/// Default bind address of the liveness endpoint
pub const DEFAULT_HEALTH_ADDR: &str = "0.0.0.0:8080";
