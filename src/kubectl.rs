// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Invocations of the `kubectl` command-line client

use crate::error::Result;
use async_trait::async_trait;
use std::fs::File;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument};

/// The two `kubectl` calls the renewal makes.
#[async_trait]
pub trait Kubectl: Send + Sync {
    /// Write `kubectl get secret <name> -o yaml` for `namespace` to `path`.
    ///
    /// The exit status is not inspected; a failed dump shows up as an
    /// invalid document when the file is read back.
    async fn dump_secret(&self, name: &str, namespace: &str, path: &Path) -> Result<()>;

    /// Run `kubectl apply -f <path>` and return its exit code, `None` if killed by a signal
    async fn apply_file(&self, path: &Path) -> Result<Option<i32>>;
}

/// Runs the real binary
pub struct KubectlCommand {
    binary: String,
}

impl KubectlCommand {
    pub fn new(binary: &str) -> Self {
        Self {
            binary: binary.to_string(),
        }
    }
}

#[async_trait]
impl Kubectl for KubectlCommand {
    #[instrument(skip(self))]
    async fn dump_secret(&self, name: &str, namespace: &str, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let status = Command::new(&self.binary)
            .args(["get", "secret", name])
            .arg(format!("--namespace={}", namespace))
            .args(["-o", "yaml"])
            .stdout(Stdio::from(file))
            .status()
            .await?;

        debug!("{} get secret exited with {}", self.binary, status);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn apply_file(&self, path: &Path) -> Result<Option<i32>> {
        let status = Command::new(&self.binary)
            .arg("apply")
            .arg("-f")
            .arg(path)
            .status()
            .await?;

        debug!("{} apply exited with {}", self.binary, status);
        Ok(status.code())
    }
}
