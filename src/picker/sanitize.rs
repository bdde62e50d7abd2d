use itertools::Itertools;
use tracing::warn;

use super::types::PickerError;

/// Returns a copy of the ticket codes with every whitespace character removed.
///
/// Order is preserved and the input is left untouched.
pub fn sanitize_ticket_codes<S: AsRef<str>>(ticket_codes: &[S]) -> Vec<String> {
	ticket_codes
		.iter()
		.map(|code| code.as_ref().chars().filter(|c| !c.is_whitespace()).collect())
		.collect()
}

/// Checks that no sanitized code is empty and that all codes share one length.
///
/// An empty pool passes; it is rejected by [`code_length`].
pub fn validate_ticket_codes<S: AsRef<str>>(ticket_codes: &[S]) -> Result<(), PickerError> {
	if ticket_codes.iter().any(|code| code.as_ref().is_empty()) {
		warn!("Rejected ticket codes: found an empty code after sanitization");
		return Err(PickerError::EmptyTicketCode);
	}

	if !ticket_codes
		.iter()
		.map(|code| code.as_ref().chars().count())
		.all_equal()
	{
		warn!("Rejected ticket codes: lengths differ after sanitization");
		return Err(PickerError::InconsistentLength);
	}

	Ok(())
}

/// Length in characters of the first code, which validation has made the common length.
pub fn code_length<S: AsRef<str>>(ticket_codes: &[S]) -> Result<usize, PickerError> {
	ticket_codes
		.first()
		.map(|code| code.as_ref().chars().count())
		.ok_or_else(|| {
			warn!("Rejected ticket codes: pool is empty");
			PickerError::NoTicketCodes
		})
}
