// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use std::process::ExitCode;
use tracing::{error, info};

use cert_renewer::config::Config;
use cert_renewer::kubectl::KubectlCommand;
use cert_renewer::kubernetes::{create_client_from_file, KubeCluster};
use cert_renewer::renewal::{exit_status, CertificateRenewal};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::default();
    info!(
        "Renewing certificate in pod {} and copying {} to namespace {}",
        config.admin_pod, config.secret_name, config.target_namespace
    );

    // Create Kubernetes client
    let client = create_client_from_file(&config.kubeconfig_path).await?;

    let cluster = KubeCluster::new(client);
    let kubectl = KubectlCommand::new(&config.kubectl);
    let renewal = CertificateRenewal::new(cluster, kubectl, config);

    let result = renewal.run().await;
    match exit_status(&result) {
        Some(code) => {
            match &result {
                Ok(outcome) => info!("Renewal finished: {:?}", outcome),
                Err(e) => error!("{}", e),
            }
            Ok(ExitCode::from(code))
        }
        None => result.map(|_| ExitCode::FAILURE).map_err(Into::into),
    }
}
