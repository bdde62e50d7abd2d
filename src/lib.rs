//! Deterministic ticket code picker.
//!
//! Derives one code from a pool of equal-length ticket codes by narrowing the pool position by
//! position, with every choice drawn from a generator seeded by a caller-supplied seed string.
//! The same ticket codes and seed always produce the same code.
//!
//! ```
//! use ticket_picker::{generate_code, generate_seed};
//!
//! let seed = generate_seed(16)?;
//! let code = generate_code(&["ABC123", "XYZ789", "LMN456"], &seed)?;
//! assert_eq!(code, generate_code(&["ABC123", "XYZ789", "LMN456"], &seed)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Narrowing a ticket code pool down to one code
pub mod picker;
/// Entropy-backed seed generation
pub mod seed;

pub use picker::{CodePicker, Picker, PickerConfig, PickerError, generate_code};
pub use seed::{DEFAULT_SEED_LENGTH, SeedConfig, SeedError, SeedGenerator, SeedSource, generate_seed};
