// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Renew the certificate in the admin pod and copy the secret to the target namespace.

use crate::config::Config;
use crate::error::{RenewalError, Result};
use crate::kubectl::Kubectl;
use crate::kubernetes::ClusterOps;
use crate::types::SecretDocument;
use tracing::{error, info, instrument};

/// How a run that did not fail ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalOutcome {
    /// certbot had nothing to renew, no secret was touched
    NotDue,
    /// The renewed secret was applied to the target namespace
    SecretCopied,
    /// `kubectl apply` exited non-zero
    ApplyFailed,
    /// The target namespace listing could not be decoded, nothing was applied
    ReplaceAborted,
}

/// Process exit status for the result of a run.
///
/// Completed runs exit 0 whatever their outcome, pod lookup failures exit 1.
/// `None` means the error is fatal and should be propagated out of `main`.
pub fn exit_status(result: &Result<RenewalOutcome>) -> Option<u8> {
    match result {
        Ok(_) => Some(0),
        Err(e) if e.is_pod_lookup_failure() => Some(1),
        Err(_) => None,
    }
}

/// One renewal run against a cluster and a `kubectl`.
pub struct CertificateRenewal<C, K> {
    cluster: C,
    kubectl: K,
    config: Config,
}

impl<C: ClusterOps, K: Kubectl> CertificateRenewal<C, K> {
    pub fn new(cluster: C, kubectl: K, config: Config) -> Self {
        Self {
            cluster,
            kubectl,
            config,
        }
    }

    /// Run every step in order.
    ///
    /// Pod lookup failures come back as errors for which
    /// [`RenewalError::is_pod_lookup_failure`] holds; any other error is fatal.
    #[instrument(skip(self), fields(pod = %self.config.admin_pod))]
    pub async fn run(&self) -> Result<RenewalOutcome> {
        self.ensure_admin_pod().await?;

        let output = self
            .cluster
            .exec(&self.config.admin_pod, &self.config.renew_command)
            .await?;

        if output.contains(&self.config.not_due_marker) {
            info!("EuroFAANG Certificate not yet due for renewal");
            return Ok(RenewalOutcome::NotDue);
        }

        let document = self.export_secret().await?;
        self.publish_secret(&document).await
    }

    async fn ensure_admin_pod(&self) -> Result<()> {
        let pod = &self.config.admin_pod;

        match self.cluster.find_pod(pod).await? {
            Some(_) => {
                info!("Found admin pod {}", pod);
                Ok(())
            }
            None => Err(RenewalError::PodNotFound(pod.name.clone())),
        }
    }

    /// Dump the source secret, validate it and rewrite it for the target namespace
    async fn export_secret(&self) -> Result<SecretDocument> {
        let path = &self.config.secret_file;

        self.kubectl
            .dump_secret(
                &self.config.secret_name,
                self.config.source_namespace(),
                path,
            )
            .await?;

        let mut document = SecretDocument::load(path)?;
        info!("Secret schema is valid.");

        document.retarget(&self.config.target_namespace);
        document.save(path)?;

        Ok(document)
    }

    async fn publish_secret(&self, document: &SecretDocument) -> Result<RenewalOutcome> {
        let namespace = &document.metadata.namespace;

        match self.delete_existing_secret(namespace).await {
            Ok(()) => {}
            Err(RenewalError::KubeError(kube::Error::SerdeError(e))) => {
                error!("{}", e);
                return Ok(RenewalOutcome::ReplaceAborted);
            }
            Err(e) => return Err(e),
        }

        match self.kubectl.apply_file(&self.config.secret_file).await? {
            Some(0) => {
                info!("TLS Secret copied to {} namespace", namespace);
                Ok(RenewalOutcome::SecretCopied)
            }
            _ => {
                error!(
                    "ERROR copying {} to {} namespace",
                    self.config.secret_name, namespace
                );
                Ok(RenewalOutcome::ApplyFailed)
            }
        }
    }

    /// Remove the first secret in the target namespace carrying our secret's name
    async fn delete_existing_secret(&self, namespace: &str) -> Result<()> {
        let name = &self.config.secret_name;

        let names = self.cluster.list_secret_names(namespace).await?;
        if names.iter().any(|n| n == name) {
            self.cluster.delete_secret(namespace, name).await?;
            info!("Deleted old {} in {}", name, namespace);
        }

        Ok(())
    }
}
