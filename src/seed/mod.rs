//! Seed generation module
//!
//! This module produces random seed strings backed by a cryptographically secure entropy
//! source. Seeds are lowercase hex and are not reproducible across calls; they are meant to be
//! handed to the picker, which derives its own deterministic stream from them.

/// Entropy-backed seed generator
mod generator;
/// Configuration and error types for seed generation
mod types;

pub use generator::{SeedGenerator, SeedSource, generate_seed};
pub use types::*;
