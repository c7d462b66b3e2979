// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metadata_patcher::config::Config;
use metadata_patcher::patcher::{Patcher, RunOutcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = Config::from_env().inspect_err(|e| error!("{}", e))?;
    info!(
        "Configuration loaded: pod={}, job={}, namespace={}",
        config.pod_name, config.job_name, config.namespace
    );

    // In-cluster service account, or local kubeconfig when run outside a cluster
    let client = Client::try_default()
        .await
        .inspect_err(|e| error!("Failed to create Kubernetes client: {}", e))?;

    let patcher = Patcher::new(client, config);
    match patcher.run().await.inspect_err(|e| error!("{}", e))? {
        RunOutcome::Completed { .. } => info!("Metadata patcher finished"),
        RunOutcome::NothingToPatch { iteration } => {
            info!("Nothing to patch (iteration {}), stopping", iteration)
        }
    }

    Ok(())
}
