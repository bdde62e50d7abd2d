use std::sync::Once;

use ticket_picker::{
	CodePicker, Picker, PickerConfig, PickerError, SeedConfig, SeedError, SeedGenerator,
	SeedSource, generate_code, generate_seed,
};

static TRACING: Once = Once::new();

fn init_tracing() {
	TRACING.call_once(|| {
		tracing_subscriber::fmt()
			.with_env_filter(
				tracing_subscriber::EnvFilter::from_default_env()
					.add_directive(tracing::Level::DEBUG.into()),
			)
			.with_target(false)
			.with_test_writer()
			.init();
	});
}

#[test]
fn generated_seed_drives_reproducible_code() {
	init_tracing();
	let mut generator = SeedGenerator::new();
	let seed = generator.generate_default_seed().unwrap();
	assert_eq!(seed.len(), 16);

	let picker = Picker::new(PickerConfig { log_draws: true });
	let ticket_codes = vec![
		"AB12 CD34".to_string(),
		"AB12 CD35".to_string(),
		"ZX98 YW76".to_string(),
	];

	let code = picker.generate_code(&ticket_codes, &seed).unwrap();
	assert_eq!(code, picker.generate_code(&ticket_codes, &seed).unwrap());
	assert!(["AB12CD34", "AB12CD35", "ZX98YW76"].contains(&code.as_str()));
}

#[test]
fn any_string_works_as_seed() {
	init_tracing();
	let ticket_codes = ["ABC123", "XYZ789", "LMN456"];
	for seed in ["", "reproducible-seed", "ünïcödé", "a much longer seed string with spaces"] {
		let code = generate_code(&ticket_codes, seed).unwrap();
		assert_eq!(code, generate_code(&ticket_codes, seed).unwrap());
	}
}

#[test]
fn validation_errors_surface_through_public_api() {
	init_tracing();
	assert_eq!(
		generate_code(&["ABC", "DE F", "GH"], "seed"),
		Err(PickerError::InconsistentLength)
	);
	assert_eq!(
		generate_code(&["   ", "ABC", "XYZ"], "seed"),
		Err(PickerError::EmptyTicketCode)
	);
	assert_eq!(
		generate_code(&Vec::<String>::new(), "seed"),
		Err(PickerError::NoTicketCodes)
	);
}

#[test]
fn seed_length_contract() {
	init_tracing();
	for length in 1..=40 {
		assert_eq!(generate_seed(length).unwrap().len(), length);
	}
	assert!(matches!(generate_seed(0), Err(SeedError::InvalidInput(_))));

	let mut generator = SeedGenerator::new().with_config(SeedConfig { default_length: 8 });
	assert_eq!(generator.generate_default_seed().unwrap().len(), 8);
}

#[test]
fn successive_seeds_differ() {
	init_tracing();
	assert_ne!(generate_seed(16).unwrap(), generate_seed(16).unwrap());
}
