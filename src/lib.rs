// Copyright 2026 Factseal Contributors
// SPDX-License-Identifier: Apache-2.0

//! Factseal library: fetch five pinned public documents, extract one fact
//! from each, and verify the composed identifier against a known digest.
//!
//! Loading this crate has no side effects; the pipeline runs only when a
//! driver calls into [`verify`].

pub mod acquisition;
pub mod cli;
pub mod error;
pub mod extractors;
pub mod sources;
pub mod text;
pub mod verify;
