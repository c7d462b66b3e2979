// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes API access for the pod and job being patched.

pub mod targets;

pub use targets::{patch_metadata, PatchTarget};
