//! Error types for check-digit computation.
//!
//! Check-digit algorithms have exactly one failure mode: the input is not a
//! non-empty run of ASCII decimal digits. The error is deliberately opaque;
//! callers decide whether to reject the input or prompt again.

use core::fmt;

/// Input was empty or contained a byte that is not an ASCII decimal digit.
///
/// Signs, whitespace, separators and letters are all rejected the same way.
/// No partial result accompanies this error.
///
/// # Examples
///
/// ```
/// use traits::InvalidInputError;
///
/// fn digit(b: u8) -> Result<u8, InvalidInputError> {
///   if b.is_ascii_digit() {
///     Ok(b - b'0')
///   } else {
///     Err(InvalidInputError::new())
///   }
/// }
///
/// assert_eq!(digit(b'7'), Ok(7));
/// assert!(digit(b'-').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct InvalidInputError;

impl InvalidInputError {
  /// Create a new invalid-input error.
  ///
  /// This is the only way to construct this error from outside the crate,
  /// ensuring forward compatibility if fields are added in the future.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for InvalidInputError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for InvalidInputError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("invalid input")
  }
}

impl core::error::Error for InvalidInputError {}
