//! Digit-at-a-time reference implementation.
//!
//! Walks the ASCII digits from the rightmost byte, flipping parity on every
//! byte. No integer parsing and no chunking, so it is the oracle the fixed
//! and chunked engines are checked against. Also reachable at runtime through
//! [`LuhnForce::Reference`](crate::LuhnForce::Reference).

// SAFETY: indexing uses `i` in `0..digits.len()`, counted down from the length.
// Clippy cannot prove this in const fn contexts.
#![allow(clippy::indexing_slicing)]

use crate::fixed::{finish, weigh};

/// Luhn check digit of an ASCII digit string, computed one byte at a time.
///
/// Returns `None` if any byte is not `b'0'..=b'9'`. An empty slice yields
/// `Some(0)`; callers that treat empty input as invalid reject it first.
#[must_use]
pub const fn check_digit_reference(digits: &[u8]) -> Option<u8> {
  let mut sum: u64 = 0;
  let mut double = true;
  let mut i = digits.len();
  while i > 0 {
    i -= 1;
    let b = digits[i];
    if !b.is_ascii_digit() {
      return None;
    }
    sum = (sum + weigh((b - b'0') as u64, double)) % 10;
    double = !double;
  }
  Some(finish(sum))
}
