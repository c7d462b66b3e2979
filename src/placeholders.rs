// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Placeholder tokens substituted into label and annotation pairs.

use crate::constants::placeholders::{FALLBACK_RANDSTRING, RANDOM_BYTES, RANDSTRING, TIMESTAMP};
use chrono::{SecondsFormat, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use std::collections::BTreeMap;
use tracing::warn;

/// Values for one iteration's placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderContext {
    pub timestamp: String,
    pub random: String,
}

impl PlaceholderContext {
    pub fn new(timestamp: impl Into<String>, random: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            random: random.into(),
        }
    }

    /// Fresh context with the current time and a new random token
    pub fn generate() -> Self {
        Self::new(timestamp_now(), random_token())
    }

    /// Replace every placeholder occurrence in `text`
    pub fn apply(&self, text: &str) -> String {
        text.replace(TIMESTAMP, &self.timestamp)
            .replace(RANDSTRING, &self.random)
    }

    /// Substitute placeholders in both keys and values.
    ///
    /// Keys that end up identical after substitution collapse into one entry;
    /// the pair whose original key sorts last wins.
    pub fn substitute(&self, input: &BTreeMap<String, String>) -> BTreeMap<String, String> {
        input
            .iter()
            .map(|(key, value)| (self.apply(key), self.apply(value)))
            .collect()
    }
}

/// Current UTC time as RFC 3339 with second precision, e.g. `2024-01-01T00:00:00Z`
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// 8 hex characters from the OS random source
pub fn random_token() -> String {
    token_from(|buf| OsRng.try_fill_bytes(buf))
}

fn token_from<F, E>(fill: F) -> String
where
    F: FnOnce(&mut [u8]) -> std::result::Result<(), E>,
    E: std::fmt::Display,
{
    let mut bytes = [0u8; RANDOM_BYTES];
    match fill(&mut bytes) {
        Ok(()) => hex::encode(bytes),
        Err(e) => {
            warn!("Failed to generate random string: {}", e);
            FALLBACK_RANDSTRING.to_string()
        }
    }
}
