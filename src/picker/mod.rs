//! Ticket code picker module
//!
//! This module derives a single code from a pool of equal-length ticket codes. Codes are
//! sanitized and validated, the seed string is hashed into a 32-bit integer, and that integer
//! seeds a deterministic generator which picks one character per position until the pool has
//! been narrowed down to a single candidate.
//!
//! - `sanitize`: whitespace stripping and pool validation.
//! - `seeding`: seed string to integer derivation and the seeded generator.
//! - `narrowing`: the position-by-position narrowing loop and the `CodePicker` trait.

/// Position-by-position narrowing over the candidate pool
mod narrowing;
/// Sanitization and validation of raw ticket codes
mod sanitize;
/// Seed derivation for the deterministic generator
mod seeding;
/// Configuration and error types for the picker
mod types;

pub use narrowing::{CodePicker, Picker, characters_at_position, generate_code, random_character};
pub use sanitize::{code_length, sanitize_ticket_codes, validate_ticket_codes};
pub use seeding::{seed_to_integer, seeded_rng};
pub use types::*;
