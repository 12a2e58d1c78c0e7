//! Basic Luhn usage: fixed-width, text, and streaming APIs.
//!
//! Run with: `cargo run --example basic -p luhn`

use std::io::Write;

use luhn::{CheckDigit, CheckDigitCombine, Luhn, LuhnForce, engine_for};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  println!("=== Luhn Basic Examples ===\n");

  fixed_width_examples();
  text_examples()?;
  streaming_examples()?;

  Ok(())
}

/// Fixed-width: payloads that fit a u64 never fail.
fn fixed_width_examples() {
  println!("--- Fixed Width (u64) ---\n");

  let payload = 37_828_224_631_000u64;
  let cd = luhn::compute_check_digit(payload);
  println!("check digit of {payload}: {cd}");
  assert_eq!(cd, 5);

  let full = payload * 10 + u64::from(cd);
  println!("{full} valid: {}", luhn::validate_luhn(full));
  assert!(luhn::validate_luhn(full));
  println!();
}

/// Text: any length, ASCII digits only.
fn text_examples() -> Result<(), luhn::InvalidInputError> {
  println!("--- Text (any length) ---\n");

  let inputs = [
    "10",
    "18446744073709551615",
    "1844674407370955161518446744073709551615184467440737095516151844674",
  ];
  for text in inputs {
    let cd = luhn::compute_check_digit_from_text(text)?;
    let engine = engine_for(text, LuhnForce::Auto)?;
    println!("{text}: check digit {cd} via {engine}");
  }

  let (ok, expected) = luhn::validate_luhn_from_text("422222222223")?;
  println!("422222222223 valid: {ok} (expected final digit {expected})");
  assert!(!ok);

  match luhn::validate_luhn_from_text("6*011111111111110") {
    Ok(_) => unreachable!("non-digit input must be rejected"),
    Err(err) => println!("6*011111111111110: {err}"),
  }
  println!();
  Ok(())
}

/// Streaming: digits in pieces, merged accumulators, io::Write.
fn streaming_examples() -> Result<(), Box<dyn std::error::Error>> {
  println!("--- Streaming ---\n");

  let mut acc = Luhn::new();
  acc.update(b"3782822")?;
  acc.update(b"4631000")?;
  println!("streamed check digit: {}", acc.finalize());

  let mut head = Luhn::new();
  head.update(b"3782822")?;
  let mut tail = Luhn::new();
  tail.update(b"4631000")?;
  let merged = Luhn::combine(&head, &tail);
  println!("combined check digit: {}", merged.finalize());
  assert_eq!(merged, acc);

  let mut writer = Luhn::new();
  write!(writer, "{}", 42_222_222_222u64)?;
  println!("written check digit:  {}", writer.finalize());
  assert_eq!(writer.finalize(), 2);

  Ok(())
}
