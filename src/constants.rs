// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubeconfig used to reach the cluster API
pub const KUBECONFIG_PATH: &str = "./config";

/// Namespaces involved in a renewal run
pub mod namespaces {
    /// Holds the admin pod and the freshly renewed secret
    pub const SOURCE: &str = "default";
    /// Receives the copy of the secret
    pub const TARGET: &str = "dcc-eurofaang-3736-frontend";
}

/// The pod carrying the certificate tooling
pub mod admin_pod {
    pub const NAME: &str = "k8s-admin";

    /// Renewal command executed inside the pod
    pub const RENEW_COMMAND: [&str; 3] = ["/bin/sh", "-c", "certbot renew"];

    /// Printed by certbot when nothing had to be renewed
    pub const NOT_DUE_MARKER: &str = "Cert not yet due for renewal";
}

/// The TLS secret and its on-disk dump
pub mod secret {
    pub const NAME: &str = "tls-secret";
    pub const DUMP_FILE: &str = "eurofaang_tls_secret.yaml";
}

/// Command-line cluster client used for dump and apply
pub const KUBECTL: &str = "kubectl";
