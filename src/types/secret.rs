// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The TLS secret as dumped by `kubectl get secret -o yaml`.
//!
//! Decoding doubles as schema validation: every field is required, every
//! value must be a string, and unknown keys are rejected.

use crate::error::{RenewalError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SecretDocument {
    pub api_version: String,
    pub data: TlsData,
    pub kind: String,
    pub metadata: SecretMetadata,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TlsData {
    #[serde(rename = "tls.crt")]
    pub tls_crt: String,
    #[serde(rename = "tls.key")]
    pub tls_key: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SecretMetadata {
    pub creation_timestamp: String,
    pub name: String,
    pub namespace: String,
    pub resource_version: String,
    pub self_link: String,
    pub uid: String,
}

impl SecretDocument {
    /// Parse and validate a YAML secret
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // Going through `Value` keeps scalars typed, so `resourceVersion: 42` is rejected
        let value: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(RenewalError::InvalidSecret)?;
        serde_yaml::from_value(value).map_err(RenewalError::InvalidSecret)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(RenewalError::SerializeError)
    }

    /// Read the secret dump from disk and validate it
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        debug!("Read {} bytes of secret YAML", contents.len());
        Self::from_yaml(&contents)
    }

    /// Overwrite `path` with this document
    #[instrument(skip(self))]
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Point the secret at another namespace, leaving every other field as is
    pub fn retarget(&mut self, namespace: &str) {
        self.metadata.namespace = namespace.to_string();
    }
}
