// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Values passed between the renewal steps.

pub mod pod;
pub mod secret;

pub use pod::{ExecOutput, PodReference};
pub use secret::SecretDocument;
