// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{admin_pod, namespaces, secret, KUBECONFIG_PATH, KUBECTL};
use crate::types::PodReference;
use std::path::PathBuf;

/// Everything a renewal run needs to know about where things live.
///
/// Production values are fixed; `Default` reproduces them.
#[derive(Debug, Clone)]
pub struct Config {
    /// Kubeconfig used by the API client
    pub kubeconfig_path: PathBuf,
    /// Pod the renewal command runs in
    pub admin_pod: PodReference,
    pub renew_command: Vec<String>,
    /// Substring in the renewal output meaning nothing changed
    pub not_due_marker: String,
    pub secret_name: String,
    /// Namespace the secret is copied into
    pub target_namespace: String,
    /// Local dump of the secret, left in place after the run
    pub secret_file: PathBuf,
    pub kubectl: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            kubeconfig_path: PathBuf::from(KUBECONFIG_PATH),
            admin_pod: PodReference::new(admin_pod::NAME, namespaces::SOURCE),
            renew_command: admin_pod::RENEW_COMMAND
                .iter()
                .map(|s| s.to_string())
                .collect(),
            not_due_marker: admin_pod::NOT_DUE_MARKER.to_string(),
            secret_name: secret::NAME.to_string(),
            target_namespace: namespaces::TARGET.to_string(),
            secret_file: PathBuf::from(secret::DUMP_FILE),
            kubectl: KUBECTL.to_string(),
        }
    }
}

impl Config {
    /// Namespace holding the original secret, which is the admin pod's namespace
    pub fn source_namespace(&self) -> &str {
        &self.admin_pod.namespace
    }
}
