// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::env as vars;
use crate::error::{PatcherError, Result};
use std::env;
use std::time::Duration;
use tracing::warn;

/// Patcher configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pod_name: String,
    pub job_name: String,
    /// Namespace holding both the pod and the job
    pub namespace: String,
    /// Raw CUSTOM_LABELS text, `None` when unset or empty
    pub labels_json: Option<String>,
    /// Raw CUSTOM_ANNOTATIONS text, `None` when unset or empty
    pub annotations_json: Option<String>,
    pub iterations: u32,
    /// Pause between iterations; zero means no pause
    pub delay: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let (pod_name, job_name, namespace) = match (
            get(vars::POD_NAME),
            get(vars::JOB_NAME),
            get(vars::POD_NAMESPACE),
        ) {
            (Some(pod), Some(job), Some(ns)) => (pod, job, ns),
            (pod, job, ns) => {
                let missing: Vec<&str> = [
                    (vars::POD_NAME, pod.is_none()),
                    (vars::JOB_NAME, job.is_none()),
                    (vars::POD_NAMESPACE, ns.is_none()),
                ]
                .into_iter()
                .filter(|(_, is_missing)| *is_missing)
                .map(|(name, _)| name)
                .collect();
                return Err(PatcherError::MissingEnv(missing.join(", ")));
            }
        };

        Ok(Config {
            pod_name,
            job_name,
            namespace,
            labels_json: get(vars::CUSTOM_LABELS),
            annotations_json: get(vars::CUSTOM_ANNOTATIONS),
            iterations: parse_iterations(get(vars::ITERATIONS).as_deref()),
            delay: parse_delay(get(vars::DELAY).as_deref()),
        })
    }
}

/// Parse the iteration count, falling back to 1 on anything unusable
pub fn parse_iterations(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 1;
    };

    match raw.parse::<i64>() {
        Err(_) => {
            warn!("Invalid ITERATIONS value '{}', using default 1", raw);
            1
        }
        Ok(n) if n < 1 => {
            warn!("ITERATIONS must be at least 1, using default 1");
            1
        }
        Ok(n) => u32::try_from(n).unwrap_or_else(|_| {
            warn!("ITERATIONS value '{}' is too large, using {}", raw, u32::MAX);
            u32::MAX
        }),
    }
}

/// Parse the inter-iteration delay, falling back to no delay
pub fn parse_delay(raw: Option<&str>) -> Duration {
    let Some(raw) = raw else {
        return Duration::ZERO;
    };

    humantime::parse_duration(raw.trim()).unwrap_or_else(|e| {
        warn!("Invalid DELAY value '{}', using no delay: {}", raw, e);
        Duration::ZERO
    })
}
