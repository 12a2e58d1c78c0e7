//! Property tests tying every engine to the digit-at-a-time reference.
//!
//! 1. **Fixed engine**: `compute_check_digit(v)` equals the reference over
//!    `v`'s decimal text, and appending it always validates.
//! 2. **Engine agreement**: auto, chunked and reference selection give the
//!    same digit for any digit string, including every chunk-boundary length.
//! 3. **Streaming**: arbitrary update boundaries and combine agree with
//!    one-shot.

#![cfg(all(test, not(miri)))]

extern crate std;

use std::{string::String, vec::Vec};

use proptest::prelude::*;
use traits::{CheckDigit, CheckDigitCombine, InvalidInputError};

use super::{
  config::LuhnForce,
  digits::{CHUNK_DIGITS, compute_check_digit_from_text_with, validate_luhn_from_text_with},
  fixed::{compute_check_digit, validate_luhn},
  reference::check_digit_reference,
  stream::Luhn,
};

fn digit_string(max_len: usize) -> impl Strategy<Value = String> {
  proptest::collection::vec(0u8..10, 1..=max_len).prop_map(|ds| ds.into_iter().map(|d| char::from(b'0' + d)).collect())
}

/// Lengths clustered around multiples of the chunk width.
fn boundary_len() -> impl Strategy<Value = usize> {
  (1usize..=5, 0usize..=2, prop::bool::ANY).prop_map(|(chunks, off, below)| {
    let base = chunks.strict_mul(CHUNK_DIGITS);
    if below { base.strict_sub(off) } else { base.strict_add(off) }
  })
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(512))]

  // ───────────────────────────────────────────────────────────────────────
  // Fixed engine
  // ───────────────────────────────────────────────────────────────────────

  #[test]
  fn fixed_matches_reference(v in any::<u64>()) {
    let text = std::format!("{v}");
    prop_assert_eq!(Some(compute_check_digit(v)), check_digit_reference(text.as_bytes()));
  }

  #[test]
  fn appended_check_digit_validates(v in 0u64..=(u64::MAX / 10)) {
    let cd = compute_check_digit(v);
    prop_assert!(cd <= 9);
    let full = v * 10 + u64::from(cd);
    prop_assert!(validate_luhn(full));
    for d in (0..10u8).filter(|&d| d != cd) {
      prop_assert!(!validate_luhn(v * 10 + u64::from(d)), "v={} d={}", v, d);
    }
  }

  // ───────────────────────────────────────────────────────────────────────
  // Text engines
  // ───────────────────────────────────────────────────────────────────────

  #[test]
  fn engines_agree(text in digit_string(200)) {
    let expected = check_digit_reference(text.as_bytes());
    for force in LuhnForce::ALL {
      prop_assert_eq!(compute_check_digit_from_text_with(&text, force).ok(), expected, "force={}", force);
    }
  }

  #[test]
  fn engines_agree_at_chunk_boundaries(len in boundary_len(), seed in any::<u64>()) {
    let mut x = seed | 1;
    let text: String = (0..len)
      .map(|_| {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        char::from(b'0' + (x % 10) as u8)
      })
      .collect();
    let expected = check_digit_reference(text.as_bytes());
    for force in LuhnForce::ALL {
      prop_assert_eq!(compute_check_digit_from_text_with(&text, force).ok(), expected, "len={} force={}", len, force);
    }
  }

  #[test]
  fn text_matches_fixed_when_it_fits(v in any::<u64>()) {
    let text = std::format!("{v}");
    prop_assert_eq!(compute_check_digit_from_text_with(&text, LuhnForce::Auto), Ok(compute_check_digit(v)));
    prop_assert_eq!(compute_check_digit_from_text_with(&text, LuhnForce::Chunked), Ok(compute_check_digit(v)));
  }

  #[test]
  fn validate_reports_expected_digit(text in digit_string(120), last in 0u8..10) {
    let mut candidate = text.clone();
    candidate.push(char::from(b'0' + last));
    let expected = check_digit_reference(text.as_bytes()).unwrap_or(u8::MAX);
    for force in LuhnForce::ALL {
      prop_assert_eq!(validate_luhn_from_text_with(&candidate, force), Ok((last == expected, expected)));
    }
  }

  #[test]
  fn any_non_digit_is_rejected(text in digit_string(64), pos in any::<usize>(), bad in any::<char>()) {
    prop_assume!(!bad.is_ascii_digit());
    let mut chars: Vec<char> = text.chars().collect();
    let pos = pos.strict_rem(chars.len().strict_add(1));
    chars.insert(pos, bad);
    let corrupted: String = chars.into_iter().collect();
    for force in LuhnForce::ALL {
      prop_assert_eq!(compute_check_digit_from_text_with(&corrupted, force), Err(InvalidInputError::new()));
      prop_assert_eq!(validate_luhn_from_text_with(&corrupted, force), Err(InvalidInputError::new()));
    }
  }

  // ───────────────────────────────────────────────────────────────────────
  // Streaming
  // ───────────────────────────────────────────────────────────────────────

  #[test]
  fn streaming_chunking_equivalence(text in digit_string(300), sizes in proptest::collection::vec(1usize..=40, 1..16)) {
    let bytes = text.as_bytes();
    let oneshot = Luhn::check_digit(bytes);

    let mut acc = Luhn::new();
    let mut rest = bytes;
    let mut i = 0usize;
    while !rest.is_empty() {
      let take = sizes[i % sizes.len()].min(rest.len());
      let (head, tail) = rest.split_at(take);
      acc.update(head).unwrap();
      rest = tail;
      i = i.strict_add(1);
    }

    prop_assert_eq!(Ok(acc.finalize()), oneshot);
    prop_assert_eq!(oneshot.ok(), check_digit_reference(bytes));
  }

  #[test]
  fn combine_equals_concatenation(a in digit_string(80), b in digit_string(80)) {
    let mut pa = Luhn::new();
    pa.update(a.as_bytes()).unwrap();
    let mut pb = Luhn::new();
    pb.update(b.as_bytes()).unwrap();

    let mut whole = Luhn::new();
    whole.update(a.as_bytes()).unwrap();
    whole.update(b.as_bytes()).unwrap();

    prop_assert_eq!(Luhn::combine(&pa, &pb), whole);
  }
}
