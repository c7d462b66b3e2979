// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read at startup
pub mod env {
    pub const POD_NAME: &str = "POD_NAME";
    pub const JOB_NAME: &str = "JOB_NAME";
    pub const POD_NAMESPACE: &str = "POD_NAMESPACE";
    /// JSON object of label key/value pairs
    pub const CUSTOM_LABELS: &str = "CUSTOM_LABELS";
    /// JSON object of annotation key/value pairs
    pub const CUSTOM_ANNOTATIONS: &str = "CUSTOM_ANNOTATIONS";
    pub const ITERATIONS: &str = "ITERATIONS";
    /// Pause between iterations, e.g. "5s"
    pub const DELAY: &str = "DELAY";
}

/// Tokens substituted into label and annotation keys and values
pub mod placeholders {
    pub const TIMESTAMP: &str = "<TIMESTAMP>";
    pub const RANDSTRING: &str = "<RANDSTRING>";
    /// Used when the OS random source is unavailable
    pub const FALLBACK_RANDSTRING: &str = "00000000";
    /// Number of random bytes behind a token (two hex chars each)
    pub const RANDOM_BYTES: usize = 4;
}

/// The field manager recorded on every patch
pub const FIELD_MANAGER: &str = "metadata-patcher";
