//! Fuzz target for the streaming accumulator.
//!
//! Tests that:
//! - Incremental updates produce the same result as one-shot
//! - Combine produces correct results
//! - A rejected update leaves the state untouched

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use luhn::{CheckDigit, CheckDigitCombine, Luhn};

#[derive(Arbitrary, Debug)]
struct Input {
  digits: Vec<u8>,
  split_point: usize,
  garbage: Vec<u8>,
}

fuzz_target!(|input: Input| {
  // Map raw bytes onto ASCII digits so the interesting paths are reached.
  let data: Vec<u8> = input.digits.iter().map(|b| b'0' + b % 10).collect();
  let split = input.split_point.strict_rem(data.len().strict_add(1));
  let (a, b) = data.split_at(split);

  let mut oneshot = Luhn::new();
  oneshot.update(&data).expect("digits only");

  let mut incremental = Luhn::new();
  incremental.update(a).expect("digits only");
  incremental.update(b).expect("digits only");
  assert_eq!(oneshot, incremental, "incremental mismatch");

  let mut pa = Luhn::new();
  pa.update(a).expect("digits only");
  let mut pb = Luhn::new();
  pb.update(b).expect("digits only");
  assert_eq!(Luhn::combine(&pa, &pb), oneshot, "combine mismatch");

  let before = incremental;
  if incremental.update(&input.garbage).is_err() {
    assert_eq!(incremental, before, "rejected update changed state");
  }
});
