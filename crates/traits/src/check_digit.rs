//! Check-digit accumulator traits.
//!
//! Traits for decimal check-digit schemes such as Luhn (mod 10).
//!
//! - **Streaming**: digits can arrive in arbitrary pieces
//! - **Combine**: accumulators over adjacent runs merge without re-reading digits
//! - **Fallible**: every byte is validated; a rejected slice leaves state untouched

use crate::InvalidInputError;

/// Decimal check-digit algorithm over ASCII digit streams.
///
/// # Usage
///
/// ```rust,ignore
/// use luhn::{CheckDigit, Luhn};
///
/// // One-shot
/// let cd = Luhn::check_digit(b"37828224631000")?;
///
/// // Streaming
/// let mut acc = Luhn::new();
/// acc.update(b"3782822")?;
/// acc.update(b"4631000")?;
/// assert_eq!(acc.finalize(), cd);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `update()` must validate the whole slice before changing state
/// - `finalize()` must be idempotent
/// - `reset()` must restore the accumulator to its initial state
pub trait CheckDigit: Clone + Default {
  /// Create an empty accumulator.
  #[must_use]
  fn new() -> Self;

  /// Append ASCII decimal digits.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidInputError`] if any byte is not `b'0'..=b'9'`. The
  /// accumulator is unchanged in that case.
  fn update(&mut self, digits: &[u8]) -> Result<(), InvalidInputError>;

  /// Append several non-contiguous runs of digits, in order.
  ///
  /// # Errors
  ///
  /// Stops at the first run containing a non-digit byte. Runs before it
  /// have already been applied.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) -> Result<(), InvalidInputError> {
    for buf in bufs {
      self.update(buf)?;
    }
    Ok(())
  }

  /// Check digit for every digit consumed so far.
  ///
  /// An empty accumulator yields `0`.
  #[must_use]
  fn finalize(&self) -> u8;

  /// Reset the accumulator to its initial state.
  fn reset(&mut self);

  /// Number of digits consumed.
  #[must_use]
  fn len(&self) -> u64;

  /// True if no digit has been consumed.
  #[inline]
  #[must_use]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Compute the check digit of `digits` in one shot.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidInputError`] for empty input or any non-digit byte.
  #[inline]
  fn check_digit(digits: &[u8]) -> Result<u8, InvalidInputError> {
    if digits.is_empty() {
      return Err(InvalidInputError::new());
    }
    let mut acc = Self::new();
    acc.update(digits)?;
    Ok(acc.finalize())
  }
}

/// Check-digit accumulators that can merge adjacent runs.
///
/// For digit strings `A` and `B`:
///
/// ```text
/// combine(acc(A), acc(B)) == acc(A || B)
/// ```
///
/// This lets independently processed pieces of a long number be joined
/// without revisiting their digits.
pub trait CheckDigitCombine: CheckDigit {
  /// Merge `prefix` (the more significant digits) with `suffix`.
  #[must_use]
  fn combine(prefix: &Self, suffix: &Self) -> Self;
}
