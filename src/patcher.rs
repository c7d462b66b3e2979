// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Iteration loop that patches the pod and job with fresh metadata.

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::{patch_metadata, PatchTarget};
use crate::patch::MetadataPatch;
use crate::placeholders::PlaceholderContext;
use kube::Client;
use tokio::time::sleep;
use tracing::{info, warn};

/// How a full run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every iteration ran; `failed_patches` counts rejected patch calls
    Completed { iterations: u32, failed_patches: u32 },
    /// No labels or annotations were available, detected in `iteration`
    NothingToPatch { iteration: u32 },
}

/// How a single iteration ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationOutcome {
    Patched { failed: u32 },
    NothingToPatch,
}

pub struct Patcher {
    client: Client,
    config: Config,
}

impl Patcher {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Run all configured iterations, pausing between them
    pub async fn run(&self) -> Result<RunOutcome> {
        let iterations = self.config.iterations;
        let delay = self.config.delay;

        info!(
            "Starting metadata update with {} iterations and {:?} delay between iterations",
            iterations, delay
        );

        let mut failed_patches = 0;
        for iteration in 1..=iterations {
            match self.run_iteration(iteration).await? {
                IterationOutcome::NothingToPatch => {
                    return Ok(RunOutcome::NothingToPatch { iteration });
                }
                IterationOutcome::Patched { failed } => {
                    failed_patches = add_failures(failed_patches, failed)
                }
            }

            if iteration < iterations && !delay.is_zero() {
                info!("Waiting {:?} before next iteration...", delay);
                sleep(delay).await;
            }
        }

        if failed_patches > 0 {
            warn!(
                "Completed all {} iterations with {} failed patch calls",
                iterations, failed_patches
            );
        } else {
            info!("Completed all {} iterations", iterations);
        }

        Ok(RunOutcome::Completed {
            iterations,
            failed_patches,
        })
    }

    /// Build this iteration's patch and send it to the pod, then the job.
    /// Only serialization failures are returned as errors; rejected patch
    /// calls are logged and counted.
    pub async fn run_iteration(&self, iteration: u32) -> Result<IterationOutcome> {
        info!("--- Iteration {}/{} ---", iteration, self.config.iterations);

        // Labels and annotations share one context per iteration
        let ctx = PlaceholderContext::generate();
        let Some(patch) = MetadataPatch::build(
            self.config.labels_json.as_deref(),
            self.config.annotations_json.as_deref(),
            &ctx,
        ) else {
            info!("No labels or annotations provided. Exiting.");
            return Ok(IterationOutcome::NothingToPatch);
        };

        let document = patch.to_json()?;
        info!("Preparing to patch with payload: {}", document);

        let mut failed = 0;
        for (target, name) in self.targets() {
            match patch_metadata(&self.client, &self.config.namespace, target, name, &document)
                .await
            {
                Ok(()) => info!("Successfully patched {}: {}", target, name),
                Err(e) => {
                    warn!("Failed to patch {} {}: {}", target, name, e);
                    failed += 1;
                }
            }
        }

        Ok(IterationOutcome::Patched { failed })
    }

    fn targets(&self) -> [(PatchTarget, &str); 2] {
        [
            (PatchTarget::Pod, self.config.pod_name.as_str()),
            (PatchTarget::Job, self.config.job_name.as_str()),
        ]
    }
}

/// Running total of rejected patch calls, pinned at `u32::MAX`
fn add_failures(total: u32, failed: u32) -> u32 {
    total.saturating_add(failed)
}
