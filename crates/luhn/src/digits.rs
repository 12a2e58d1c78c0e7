//! Arbitrary-length Luhn engine over ASCII digit strings.
//!
//! # Paths
//!
//! 1. **Fixed**: parse the whole string as a `u64`. Anything up to 19 digits,
//!    and 20-digit values up to `u64::MAX`, take this path and delegate to
//!    [`compute_check_digit`].
//! 2. **Chunked**: only when the whole-string parse overflows. The string is
//!    cut into [`CHUNK_DIGITS`]-byte pieces counted from the right, so the
//!    leftmost piece holds the `len % 18` remainder. Each piece is parsed and
//!    weighed independently and the sums are added.
//!
//! A malformed string fails the first parse with a format error and is
//! rejected outright; it never reaches the chunked path.
//!
//! # Parity across chunks
//!
//! Every chunk is weighed with parity reset to "double" at its rightmost
//! digit. That is exact only because the chunk width is even: the rightmost
//! digit of each chunk sits an even distance from the rightmost digit of the
//! whole string. Changing the width to an odd number requires carrying parity
//! across chunks instead (see [`Luhn`](crate::Luhn), which does).

use traits::InvalidInputError;

use crate::{
  config::LuhnForce,
  fixed::{compute_check_digit, finish, weighted_sum},
  reference::check_digit_reference,
};

/// Width of one chunk on the overflow path.
///
/// `10^18 - 1` is the widest all-nines value that always fits a `u64`.
pub const CHUNK_DIGITS: usize = 18;

const _: () = assert!(CHUNK_DIGITS % 2 == 0, "parity reset per chunk requires an even chunk width");
const _: () = assert!(10u64.checked_pow(CHUNK_DIGITS as u32).is_some());

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ParseError {
  /// Empty, or a byte outside `b'0'..=b'9'`.
  Format,
  /// Every byte is a digit but the value exceeds `u64::MAX`.
  Overflow,
}

/// Strict unsigned decimal parse: digits only, no sign, no whitespace.
///
/// `str::parse::<u64>` accepts a leading `+`, which must be rejected here.
/// A format error anywhere wins over overflow.
pub(crate) fn parse_u64(digits: &[u8]) -> Result<u64, ParseError> {
  if digits.is_empty() {
    return Err(ParseError::Format);
  }

  let mut value: Option<u64> = Some(0);
  for &b in digits {
    if !b.is_ascii_digit() {
      return Err(ParseError::Format);
    }
    value = value
      .and_then(|v| v.checked_mul(10))
      .and_then(|v| v.checked_add(u64::from(b - b'0')));
  }
  value.ok_or(ParseError::Overflow)
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine selection
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Selected {
  /// The whole string parsed into this value.
  Fixed(u64),
  Chunked,
  Reference,
}

/// Decide which engine serves `digits`.
///
/// Under [`LuhnForce::Auto`] the decision requires the full parse, so a
/// format error is reported here. The forced engines validate as they run.
pub(crate) fn select(digits: &[u8], force: LuhnForce) -> Result<Selected, InvalidInputError> {
  if digits.is_empty() {
    return Err(InvalidInputError::new());
  }

  match force {
    LuhnForce::Auto => match parse_u64(digits) {
      Ok(value) => Ok(Selected::Fixed(value)),
      Err(ParseError::Overflow) => Ok(Selected::Chunked),
      Err(ParseError::Format) => Err(InvalidInputError::new()),
    },
    LuhnForce::Chunked => Ok(Selected::Chunked),
    LuhnForce::Reference => Ok(Selected::Reference),
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chunked engine
// ─────────────────────────────────────────────────────────────────────────────

/// Chunked check digit of a non-empty digit string.
///
/// Chunks are taken from the right, so the least significant chunk is
/// weighed first and the short remainder chunk, if any, comes last. Any
/// chunk failing to parse discards the partial sum.
fn chunked_check_digit(digits: &[u8]) -> Result<u8, InvalidInputError> {
  let mut sum: u64 = 0;
  let mut rest = digits;

  while !rest.is_empty() {
    let (head, chunk) = rest.split_at(rest.len().saturating_sub(CHUNK_DIGITS));
    let value = parse_u64(chunk).map_err(|_| InvalidInputError::new())?;
    // Parity restarts at "double" here; exact because CHUNK_DIGITS is even.
    sum = (sum + weighted_sum(value)) % 10;
    rest = head;
  }

  Ok(finish(sum))
}

pub(crate) fn check_digit_bytes(digits: &[u8], force: LuhnForce) -> Result<u8, InvalidInputError> {
  match select(digits, force)? {
    Selected::Fixed(value) => Ok(compute_check_digit(value)),
    Selected::Chunked => chunked_check_digit(digits),
    Selected::Reference => check_digit_reference(digits).ok_or(InvalidInputError::new()),
  }
}

pub(crate) fn validate_bytes(digits: &[u8], force: LuhnForce) -> Result<(bool, u8), InvalidInputError> {
  let Some((&last, prefix)) = digits.split_last() else {
    return Err(InvalidInputError::new());
  };
  if !last.is_ascii_digit() {
    return Err(InvalidInputError::new());
  }
  let claimed = last - b'0';
  let expected = check_digit_bytes(prefix, force)?;
  Ok((claimed == expected, expected))
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Compute the Luhn check digit of an arbitrarily long decimal string.
///
/// # Errors
///
/// Returns [`InvalidInputError`] if `text` is empty or contains anything but
/// ASCII digits (signs, whitespace and separators included).
///
/// # Examples
///
/// ```
/// assert_eq!(luhn::compute_check_digit_from_text("10"), Ok(9));
/// // Past u64::MAX: served by the chunked engine.
/// assert_eq!(luhn::compute_check_digit_from_text("18446744073709551615"), Ok(3));
/// assert!(luhn::compute_check_digit_from_text("").is_err());
/// ```
#[inline]
pub fn compute_check_digit_from_text(text: &str) -> Result<u8, InvalidInputError> {
  check_digit_bytes(text.as_bytes(), LuhnForce::Auto)
}

/// [`compute_check_digit_from_text`] with an explicit engine override.
///
/// # Errors
///
/// Same as [`compute_check_digit_from_text`], for every `force`.
#[inline]
pub fn compute_check_digit_from_text_with(text: &str, force: LuhnForce) -> Result<u8, InvalidInputError> {
  check_digit_bytes(text.as_bytes(), force)
}

/// Validate a decimal string whose last digit is a Luhn check digit.
///
/// Returns whether the claimed digit matches, together with the digit
/// computed over the preceding characters. The computed digit is returned
/// even on a mismatch.
///
/// # Errors
///
/// Returns [`InvalidInputError`] if `text` is empty, if its last character is
/// not an ASCII digit, or if the preceding characters are empty or contain a
/// non-digit.
///
/// # Examples
///
/// ```
/// assert_eq!(luhn::validate_luhn_from_text("109"), Ok((true, 9)));
/// assert_eq!(luhn::validate_luhn_from_text("422222222223"), Ok((false, 2)));
/// assert!(luhn::validate_luhn_from_text("6*011111111111110").is_err());
/// ```
#[inline]
pub fn validate_luhn_from_text(text: &str) -> Result<(bool, u8), InvalidInputError> {
  validate_bytes(text.as_bytes(), LuhnForce::Auto)
}

/// [`validate_luhn_from_text`] with an explicit engine override.
///
/// # Errors
///
/// Same as [`validate_luhn_from_text`], for every `force`.
#[inline]
pub fn validate_luhn_from_text_with(text: &str, force: LuhnForce) -> Result<(bool, u8), InvalidInputError> {
  validate_bytes(text.as_bytes(), force)
}
