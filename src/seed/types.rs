/// Length of a seed produced by `generate_default_seed`.
pub const DEFAULT_SEED_LENGTH: usize = 16;

/// Configuration for seed generation
#[derive(Debug, Clone)]
pub struct SeedConfig {
	/// Length used when no explicit length is requested
	pub default_length: usize,
}

impl Default for SeedConfig {
	fn default() -> Self {
		Self {
			default_length: DEFAULT_SEED_LENGTH,
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
	#[error("{0}")]
	InvalidInput(String),

	#[error("Entropy unavailable: {0}")]
	EntropyUnavailable(String),
}

impl SeedError {
	pub(crate) fn invalid_length() -> Self {
		Self::InvalidInput("Seed length must be at least 1.".to_string())
	}
}
