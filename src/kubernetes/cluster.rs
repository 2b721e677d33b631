// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster API calls made during a renewal run

use crate::error::{RenewalError, Result};
use crate::types::{ExecOutput, PodReference};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Pod, Secret};
use kube::{
    api::{AttachParams, DeleteParams, ListParams},
    Api, Client, ResourceExt,
};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info, instrument};

/// The cluster operations the renewal needs.
///
/// `KubeCluster` talks to a real API server; tests substitute recording fakes.
#[async_trait]
pub trait ClusterOps: Send + Sync {
    /// Look up a pod, `None` when it does not exist
    async fn find_pod(&self, pod: &PodReference) -> Result<Option<Pod>>;

    /// Run `command` in the pod without stdin or TTY and capture its output
    async fn exec(&self, pod: &PodReference, command: &[String]) -> Result<ExecOutput>;

    /// Names of all secrets in `namespace`, in list order
    async fn list_secret_names(&self, namespace: &str) -> Result<Vec<String>>;

    async fn delete_secret(&self, namespace: &str, name: &str) -> Result<()>;
}

pub struct KubeCluster {
    client: Client,
}

impl KubeCluster {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterOps for KubeCluster {
    #[instrument(skip(self), fields(pod = %pod))]
    async fn find_pod(&self, pod: &PodReference) -> Result<Option<Pod>> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), &pod.namespace);

        pods.get_opt(&pod.name)
            .await
            .map_err(RenewalError::PodLookupError)
    }

    #[instrument(skip(self), fields(pod = %pod))]
    async fn exec(&self, pod: &PodReference, command: &[String]) -> Result<ExecOutput> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), &pod.namespace);
        let params = AttachParams::default()
            .stdin(false)
            .stdout(true)
            .stderr(true)
            .tty(false);

        debug!("Executing {:?}", command);
        let mut attached = pods.exec(&pod.name, command.to_vec(), &params).await?;

        // Drain both streams together so a full stderr pipe cannot stall stdout
        let (stdout, stderr) =
            tokio::try_join!(read_stream(attached.stdout()), read_stream(attached.stderr()))?;

        attached
            .join()
            .await
            .map_err(|e| RenewalError::ExecError(format!("exec task failed: {}", e)))?;

        Ok(ExecOutput { stdout, stderr })
    }

    #[instrument(skip(self))]
    async fn list_secret_names(&self, namespace: &str) -> Result<Vec<String>> {
        let secrets: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        let secret_list = secrets.list(&ListParams::default()).await?;

        Ok(secret_list.items.iter().map(|s| s.name_any()).collect())
    }

    #[instrument(skip(self))]
    async fn delete_secret(&self, namespace: &str, name: &str) -> Result<()> {
        let secrets: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        secrets.delete(name, &DeleteParams::default()).await?;

        info!("Deleted secret {}/{}", namespace, name);
        Ok(())
    }
}

async fn read_stream(stream: Option<impl AsyncRead + Unpin>) -> Result<String> {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        stream.read_to_end(&mut buf).await?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
