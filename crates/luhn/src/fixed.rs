//! Fixed-width Luhn engine over `u64`.
//!
//! Digits are peeled off the value least-significant first with `% 10` and
//! `/ 10`. The first digit peeled sits next to where the check digit would be
//! appended, so it is the first one doubled.
//!
//! Leading zeros are invisible to this engine, which is harmless: a zero
//! contributes nothing whether or not it is doubled.

/// Contribution of a single digit to the Luhn sum.
///
/// A doubled digit above 4 would produce two decimal digits; their digit sum
/// is `2d - 9`.
#[inline(always)]
#[must_use]
pub(crate) const fn weigh(digit: u64, double: bool) -> u64 {
  if !double {
    digit
  } else if digit > 4 {
    2 * digit - 9
  } else {
    2 * digit
  }
}

/// Luhn-weighted digit sum of `value`, parity starting at "double".
///
/// At most 20 digits each contributing at most 9, so the sum cannot overflow.
#[inline]
#[must_use]
pub(crate) const fn weighted_sum(mut value: u64) -> u64 {
  let mut sum: u64 = 0;
  let mut double = true;
  while value > 0 {
    sum += weigh(value % 10, double);
    double = !double;
    value /= 10;
  }
  sum
}

/// Turn a Luhn sum into the digit that brings it to a multiple of ten.
#[inline(always)]
#[must_use]
pub(crate) const fn finish(sum: u64) -> u8 {
  ((10 - sum % 10) % 10) as u8
}

/// Compute the Luhn check digit of `value`.
///
/// Every `u64` is a valid digit sequence, so this never fails. Zero yields
/// zero.
///
/// # Examples
///
/// ```
/// assert_eq!(luhn::compute_check_digit(37828224631000), 5);
/// assert_eq!(luhn::compute_check_digit(0), 0);
/// ```
#[inline]
#[must_use]
pub const fn compute_check_digit(value: u64) -> u8 {
  finish(weighted_sum(value))
}

/// Check whether the last decimal digit of `candidate` is the Luhn check
/// digit of the digits before it.
///
/// # Examples
///
/// ```
/// assert!(luhn::validate_luhn(378282246310005));
/// assert!(!luhn::validate_luhn(378282246310006));
/// ```
#[inline]
#[must_use]
pub const fn validate_luhn(candidate: u64) -> bool {
  compute_check_digit(candidate / 10) as u64 == candidate % 10
}
