//! Position-by-position narrowing.
//!
//! Starting from an empty prefix, the picker looks at every candidate consistent with the prefix,
//! collects the distinct characters at the next position and draws one of them. The loop ends
//! once the prefix reaches the common code length, or earlier when only one candidate is left,
//! in which case that candidate is returned as is without further draws.

use itertools::Itertools;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, error, trace};

use super::sanitize::{code_length, sanitize_ticket_codes, validate_ticket_codes};
use super::seeding::seeded_rng;
use super::types::{PickerConfig, PickerError};

/// Anything that can derive a code from ticket codes and a seed
pub trait CodePicker {
	/// Derive a code from the given ticket codes, seeded by `seed`.
	fn generate_code<S: AsRef<str>>(
		&self,
		ticket_codes: &[S],
		seed: &str,
	) -> Result<String, PickerError>;
}

/// Picker narrowing a pool of ticket codes down to a single code
#[derive(Debug, Clone, Default)]
pub struct Picker {
	config: PickerConfig,
}

impl Picker {
	/// Creates a picker with the given configuration
	pub fn new(config: PickerConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &PickerConfig {
		&self.config
	}

	/// Sanitizes and validates `ticket_codes`, then narrows them down using draws from `rng`.
	///
	/// Draws are taken sequentially from `rng`; nothing is drawn once a single candidate is left.
	pub fn narrow<S, R>(&self, ticket_codes: &[S], rng: &mut R) -> Result<String, PickerError>
	where
		S: AsRef<str>,
		R: Rng + ?Sized,
	{
		let sanitized = sanitize_ticket_codes(ticket_codes);
		validate_ticket_codes(&sanitized)?;
		let length = code_length(&sanitized)?;

		debug!(
			"Narrowing {} ticket codes of length {}",
			sanitized.len(),
			length
		);

		let mut code = String::new();
		let mut position = 0;

		while position < length {
			let pool: Vec<&str> = sanitized
				.iter()
				.map(String::as_str)
				.filter(|candidate| candidate.starts_with(code.as_str()))
				.collect();

			if let [survivor] = pool.as_slice() {
				debug!("Single ticket code left at position {}", position);
				return Ok(survivor.to_string());
			}

			let candidates = characters_at_position(&pool, position);
			let picked = random_character(&candidates, rng).ok_or_else(|| {
				error!("No characters available at position {}", position);
				PickerError::NoCharactersAtPosition(position)
			})?;

			if self.config.log_draws {
				debug!(
					"Picked {:?} from {} candidates at position {}",
					picked,
					candidates.len(),
					position
				);
			} else {
				trace!(
					"Picked {:?} from {} candidates at position {}",
					picked,
					candidates.len(),
					position
				);
			}

			code.push(picked);
			position += 1;
		}

		Ok(code)
	}
}

impl CodePicker for Picker {
	fn generate_code<S: AsRef<str>>(
		&self,
		ticket_codes: &[S],
		seed: &str,
	) -> Result<String, PickerError> {
		let mut rng = seeded_rng(seed);
		self.narrow(ticket_codes, &mut rng)
	}
}

/// Derive a code from `ticket_codes` and `seed` with a default picker.
pub fn generate_code<S: AsRef<str>>(ticket_codes: &[S], seed: &str) -> Result<String, PickerError> {
	Picker::default().generate_code(ticket_codes, seed)
}

/// Distinct characters found at `position` across the codes, in first-seen order.
///
/// Codes too short to have a character at `position` are skipped.
pub fn characters_at_position<S: AsRef<str>>(ticket_codes: &[S], position: usize) -> Vec<char> {
	ticket_codes
		.iter()
		.filter_map(|code| code.as_ref().chars().nth(position))
		.unique()
		.collect()
}

/// Uniformly draws one of the characters, or `None` if there are none.
pub fn random_character<R: Rng + ?Sized>(characters: &[char], rng: &mut R) -> Option<char> {
	characters.choose(rng).copied()
}
