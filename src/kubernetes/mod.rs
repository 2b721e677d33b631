// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and the cluster calls made by a renewal run.

pub mod client;
pub mod cluster;

pub use client::create_client_from_file;
pub use cluster::{ClusterOps, KubeCluster};
