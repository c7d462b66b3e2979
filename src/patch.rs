// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Merge-patch document assembly from user-supplied labels and annotations.

use crate::error::Result;
use crate::placeholders::PlaceholderContext;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// The `{"metadata": {...}}` merge-patch body sent to every target
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MetadataPatch {
    pub metadata: PatchMetadata,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl MetadataPatch {
    /// Parse both JSON blobs and substitute placeholders with `ctx`.
    /// Returns `None` when there is nothing to apply.
    pub fn build(
        labels_json: Option<&str>,
        annotations_json: Option<&str>,
        ctx: &PlaceholderContext,
    ) -> Option<Self> {
        let labels = parse_metadata_map(labels_json, "CUSTOM_LABELS").map(|labels| {
            let labels = ctx.substitute(&labels);
            info!("Found labels to apply: {:?}", labels);
            labels
        });

        let annotations =
            parse_metadata_map(annotations_json, "CUSTOM_ANNOTATIONS").map(|annotations| {
                let annotations = ctx.substitute(&annotations);
                info!("Found annotations to apply: {:?}", annotations);
                annotations
            });

        if labels.is_none() && annotations.is_none() {
            return None;
        }

        Some(MetadataPatch {
            metadata: PatchMetadata {
                labels,
                annotations,
            },
        })
    }

    /// Serialize to the wire document
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Parse a JSON object of string pairs.
///
/// Absent input, `null` and `{}` all give `None`. A `null` value becomes
/// the empty string. Anything unparsable is logged and skipped rather than
/// treated as an error.
pub fn parse_metadata_map(raw: Option<&str>, field: &str) -> Option<BTreeMap<String, String>> {
    let raw = raw?;

    match serde_json::from_str::<Option<BTreeMap<String, Option<String>>>>(raw) {
        Ok(map) => map
            .map(|m| {
                m.into_iter()
                    .map(|(key, value)| (key, value.unwrap_or_default()))
                    .collect::<BTreeMap<_, _>>()
            })
            .filter(|m| !m.is_empty()),
        Err(e) => {
            warn!("Could not parse {} JSON: {}. Skipping {}.", field, e, field);
            None
        }
    }
}
