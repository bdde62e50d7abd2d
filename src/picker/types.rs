/// Configuration for the picker
#[derive(Debug, Clone, Default)]
pub struct PickerConfig {
	/// Log every positional draw at debug level instead of trace
	pub log_draws: bool,
}

/// Errors raised while deriving a code from ticket codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
	#[error("Ticket codes must not be empty or consist solely of whitespace.")]
	EmptyTicketCode,

	#[error("Ticket codes must all be the same length after removing whitespace.")]
	InconsistentLength,

	#[error("No ticket codes provided.")]
	NoTicketCodes,

	#[error("No characters available at position {0}. Check your ticket codes.")]
	NoCharactersAtPosition(usize),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_messages() {
		assert_eq!(
			PickerError::EmptyTicketCode.to_string(),
			"Ticket codes must not be empty or consist solely of whitespace."
		);
		assert_eq!(
			PickerError::InconsistentLength.to_string(),
			"Ticket codes must all be the same length after removing whitespace."
		);
		assert_eq!(PickerError::NoTicketCodes.to_string(), "No ticket codes provided.");
		assert_eq!(
			PickerError::NoCharactersAtPosition(4).to_string(),
			"No characters available at position 4. Check your ticket codes."
		);
	}
}
