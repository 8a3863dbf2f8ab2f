// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Construction of the ArgoCD cluster secret that registers a vCluster.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::api::ObjectMeta;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::constants::labels;
use crate::error::{EnrollerError, Result};
use crate::names;

/// Data fields the vCluster credential secret must carry
const CA_FIELD: &str = "certificate-authority";
const CERT_FIELD: &str = "client-certificate";
const KEY_FIELD: &str = "client-key";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TlsClientConfig {
    ca_data: String,
    cert_data: String,
    key_data: String,
    insecure: bool,
}

/// The `config` payload ArgoCD expects in a cluster secret
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClusterConfig {
    tls_client_config: TlsClientConfig,
}

/// Base64-encode a byte string
pub fn encode(data: &[u8]) -> String {
    BASE64.encode(data)
}

/// Base64-decode into a UTF-8 string
pub fn decode(data: &str) -> Result<String> {
    let bytes = BASE64
        .decode(data)
        .map_err(|e| EnrollerError::Encoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| EnrollerError::Encoding(e.to_string()))
}

/// In-cluster API server URL of a vCluster
fn server_url(vcluster_name: &str, namespace: &str) -> String {
    format!(
        "https://{}.{}.svc.cluster.local",
        vcluster_name, namespace
    )
}

/// Build the ArgoCD cluster secret registering `vcluster_name`.
///
/// The credential secret's three TLS fields are carried into the
/// `tlsClientConfig` payload as the base64 text ArgoCD expects. Fails when
/// any of them is absent.
pub fn build_cluster_secret(
    vcluster_name: &str,
    namespace: &str,
    argocd_namespace: &str,
    credential: &Secret,
) -> Result<Secret> {
    let config = ClusterConfig {
        tls_client_config: TlsClientConfig {
            ca_data: credential_field(credential, CA_FIELD)?,
            cert_data: credential_field(credential, CERT_FIELD)?,
            key_data: credential_field(credential, KEY_FIELD)?,
            insecure: false,
        },
    };
    let config_json = serde_json::to_vec(&config)
        .map_err(|e| EnrollerError::Fatal(format!("failed to serialize cluster config: {}", e)))?;

    let labels = BTreeMap::from([
        (
            labels::ARGOCD_SECRET_TYPE.to_string(),
            labels::ARGOCD_SECRET_TYPE_CLUSTER.to_string(),
        ),
        (
            labels::MANAGED_BY.to_string(),
            labels::MANAGED_BY_VALUE.to_string(),
        ),
    ]);

    let data = BTreeMap::from([
        (
            "name".to_string(),
            ByteString(vcluster_name.as_bytes().to_vec()),
        ),
        (
            "server".to_string(),
            ByteString(server_url(vcluster_name, namespace).into_bytes()),
        ),
        ("config".to_string(), ByteString(config_json)),
    ]);

    Ok(Secret {
        metadata: ObjectMeta {
            name: Some(names::registration_secret_name(vcluster_name)),
            namespace: Some(argocd_namespace.to_string()),
            labels: Some(labels),
            ..Default::default()
        },
        data: Some(data),
        ..Default::default()
    })
}

/// Look up a credential field and re-encode it as base64 text.
///
/// The API server hands us decoded bytes; ArgoCD wants the wire form.
fn credential_field(credential: &Secret, field: &'static str) -> Result<String> {
    let value = credential
        .data
        .as_ref()
        .and_then(|d| d.get(field))
        .ok_or_else(|| EnrollerError::MalformedCredential {
            namespace: credential.metadata.namespace.clone().unwrap_or_default(),
            name: credential.metadata.name.clone().unwrap_or_default(),
            field,
        })?;
    Ok(encode(&value.0))
}
