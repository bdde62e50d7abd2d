//! Entropy-backed seed generator.
//!
//! Seeds are drawn from a cryptographically secure source, hex encoded and truncated to the
//! requested length. Each call draws fresh entropy, so two seeds are never expected to match.

use rand::TryCryptoRng;
use rand::rngs::OsRng;
use tracing::{debug, error};

use super::types::{DEFAULT_SEED_LENGTH, SeedConfig, SeedError};

/// Anything that can hand out seed strings
pub trait SeedSource {
	/// Generate a seed of exactly `length` characters.
	fn generate_seed(&mut self, length: usize) -> Result<String, SeedError>;

	/// Generate a seed of the default length.
	fn generate_default_seed(&mut self) -> Result<String, SeedError> {
		self.generate_seed(DEFAULT_SEED_LENGTH)
	}
}

/// Seed generator drawing from a cryptographically secure entropy source
#[derive(Debug)]
pub struct SeedGenerator<R = OsRng> {
	/// Source of random bytes
	source: R,
	/// Generator configuration
	config: SeedConfig,
}

impl SeedGenerator<OsRng> {
	/// Creates a generator backed by the operating system's entropy source
	pub fn new() -> Self {
		Self::with_source(OsRng)
	}
}

impl Default for SeedGenerator<OsRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: TryCryptoRng> SeedGenerator<R> {
	/// Creates a generator backed by the given entropy source
	pub fn with_source(source: R) -> Self {
		Self {
			source,
			config: SeedConfig::default(),
		}
	}

	/// Sets the generator configuration
	pub fn with_config(mut self, config: SeedConfig) -> Self {
		self.config = config;
		self
	}

	pub fn config(&self) -> &SeedConfig {
		&self.config
	}
}

impl<R: TryCryptoRng> SeedSource for SeedGenerator<R> {
	fn generate_seed(&mut self, length: usize) -> Result<String, SeedError> {
		if length < 1 {
			return Err(SeedError::invalid_length());
		}

		// Two hex digits per byte.
		let byte_count = length.div_ceil(2);
		let mut bytes = vec![0u8; byte_count];
		self.source.try_fill_bytes(&mut bytes).map_err(|e| {
			error!("Failed to draw {} bytes of entropy: {}", byte_count, e);
			SeedError::EntropyUnavailable(e.to_string())
		})?;

		let mut seed = hex::encode(&bytes);
		seed.truncate(length);

		debug!("Generated seed of length {}", length);
		Ok(seed)
	}

	fn generate_default_seed(&mut self) -> Result<String, SeedError> {
		let length = self.config.default_length;
		self.generate_seed(length)
	}
}

/// Generate a seed of `length` characters using the operating system's entropy source.
pub fn generate_seed(length: usize) -> Result<String, SeedError> {
	SeedGenerator::new().generate_seed(length)
}
