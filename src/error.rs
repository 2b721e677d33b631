// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenewalError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Pod {0} does not exist.")]
    PodNotFound(String),

    #[error("Unknown error: {0}")]
    PodLookupError(kube::Error),

    #[error("Exec in pod failed: {0}")]
    ExecError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid secret document: {0}")]
    InvalidSecret(serde_yaml::Error),

    #[error("Failed to serialize secret document: {0}")]
    SerializeError(serde_yaml::Error),
}

impl RenewalError {
    /// Errors that end the run with a message and exit status 1 instead of propagating
    pub fn is_pod_lookup_failure(&self) -> bool {
        matches!(
            self,
            RenewalError::PodNotFound(_) | RenewalError::PodLookupError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RenewalError>;
