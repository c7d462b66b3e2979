// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Merge-patching the metadata of the pod and job

use crate::constants::FIELD_MANAGER;
use crate::error::Result;
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::{Patch, PatchParams},
    Api, Client,
};
use std::fmt;
use tracing::{debug, instrument};

/// Kind of resource a patch is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchTarget {
    Pod,
    Job,
}

impl PatchTarget {
    pub fn kind(&self) -> &'static str {
        match self {
            PatchTarget::Pod => "Pod",
            PatchTarget::Job => "Job",
        }
    }
}

impl fmt::Display for PatchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Send `document` as a JSON merge patch to the named resource
#[instrument(skip(client, document), fields(kind = %target))]
pub async fn patch_metadata(
    client: &Client,
    namespace: &str,
    target: PatchTarget,
    name: &str,
    document: &serde_json::Value,
) -> Result<()> {
    let pp = PatchParams {
        field_manager: Some(FIELD_MANAGER.to_string()),
        ..Default::default()
    };
    let patch = Patch::Merge(document);

    match target {
        PatchTarget::Pod => {
            let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
            pods.patch(name, &pp, &patch).await?;
        }
        PatchTarget::Job => {
            let jobs: Api<Job> = Api::namespaced(client.clone(), namespace);
            jobs.patch(name, &pp, &patch).await?;
        }
    }

    debug!("Merge patch accepted for {} {}/{}", target, namespace, name);
    Ok(())
}
