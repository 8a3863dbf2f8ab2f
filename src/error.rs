// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

use crate::constants::RETRY_DELAY_SECS;

#[derive(Error, Debug)]
pub enum EnrollerError {
    /// Transient failure; the controller requeues after `delay_secs`.
    #[error("{reason} (will retry in {delay_secs}s)")]
    Retryable { reason: String, delay_secs: u64 },

    /// Permanent failure; retrying will not help.
    #[error("{0}")]
    Fatal(String),

    /// The vCluster credential secret is missing a required field.
    #[error("credential secret {namespace}/{name} is missing field '{field}'")]
    MalformedCredential {
        namespace: String,
        name: String,
        field: &'static str,
    },

    /// A base64 payload could not be decoded.
    #[error("invalid base64 payload: {0}")]
    Encoding(String),
}

impl EnrollerError {
    /// A retryable error with the standard requeue delay
    pub fn retryable(reason: impl Into<String>) -> Self {
        EnrollerError::Retryable {
            reason: reason.into(),
            delay_secs: RETRY_DELAY_SECS,
        }
    }

    /// True when the controller must not retry
    pub fn is_fatal(&self) -> bool {
        !matches!(self, EnrollerError::Retryable { .. })
    }
}

pub type Result<T> = std::result::Result<T, EnrollerError>;
