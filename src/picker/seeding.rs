use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Derives a 32-bit integer from a seed string.
///
/// The seed is hashed with SHA-256 and the first eight hex digits of the digest are read as an
/// unsigned integer. Those digits are the first four digest bytes, big-endian.
pub fn seed_to_integer(seed: &str) -> u32 {
	let digest = Sha256::digest(seed.as_bytes());
	u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Builds the deterministic generator for a seed string.
///
/// The same seed string always yields the same stream of draws.
pub fn seeded_rng(seed: &str) -> ChaCha8Rng {
	ChaCha8Rng::seed_from_u64(u64::from(seed_to_integer(seed)))
}
