//! Differential fuzz target for the Luhn engines.
//!
//! Tests that:
//! - Every forced engine returns the same digit or the same error
//! - The streaming accumulator agrees with the text API
//! - Validation reports the digit computed over the prefix

#![no_main]

use libfuzzer_sys::fuzz_target;
use luhn::{CheckDigit, Engine, Luhn, LuhnForce, compute_check_digit, engine_for};

fuzz_target!(|data: &[u8]| {
  let Ok(text) = core::str::from_utf8(data) else {
    // Non-UTF-8 bytes can only reach the byte-level stream API.
    assert!(Luhn::check_digit(data).is_err());
    return;
  };

  let auto = luhn::compute_check_digit_from_text(text);
  for force in LuhnForce::ALL {
    assert_eq!(
      luhn::compute_check_digit_from_text_with(text, force),
      auto,
      "engine {force} disagrees on {text:?}"
    );
    assert_eq!(engine_for(text, force).is_ok(), auto.is_ok(), "engine_for {force} on {text:?}");
  }

  assert_eq!(Luhn::check_digit(data), auto, "stream disagrees on {text:?}");

  if let Ok(Engine::Fixed) = engine_for(text, LuhnForce::Auto) {
    if let Ok(value) = text.parse::<u64>() {
      assert_eq!(auto, Ok(compute_check_digit(value)));
    }
  }

  if let Some((prefix, _)) = text.split_at_checked(text.len().saturating_sub(1)) {
    if let Ok((ok, expected)) = luhn::validate_luhn_from_text(text) {
      assert_eq!(luhn::compute_check_digit_from_text(prefix), Ok(expected));
      assert_eq!(ok, text.as_bytes().last() == Some(&(b'0' + expected)));
    }
  }
});
