//! Streaming Luhn accumulator.
//!
//! Digits arrive left to right, but Luhn parity is anchored at the right end,
//! which is unknown until the stream stops. The accumulator therefore keeps
//! two sums: one as if the latest digit will be doubled, one as if it will
//! not. Appending a digit moves every earlier digit one place further from
//! the end, which swaps the two.
//!
//! Keeping parity explicit also makes [`CheckDigitCombine`] possible: the
//! suffix length decides whether the prefix's sums swap.

use traits::{CheckDigit, CheckDigitCombine, InvalidInputError};

use crate::fixed::{finish, weigh};

/// Streaming Luhn check-digit accumulator.
///
/// # Examples
///
/// ```rust
/// use luhn::{CheckDigit, CheckDigitCombine, Luhn};
///
/// let mut acc = Luhn::new();
/// acc.update(b"3782822")?;
/// acc.update(b"4631000")?;
/// assert_eq!(acc.finalize(), 5);
/// assert!(acc.verify(5));
///
/// let mut a = Luhn::new();
/// a.update(b"3782822")?;
/// let mut b = Luhn::new();
/// b.update(b"4631000")?;
/// assert_eq!(Luhn::combine(&a, &b), acc);
/// # Ok::<(), luhn::InvalidInputError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Luhn {
  /// Sum mod 10 if the latest digit ends up doubled.
  doubled: u8,
  /// Sum mod 10 if the latest digit ends up taken as-is.
  single: u8,
  len: u64,
}

impl Luhn {
  /// True if `claimed` is the check digit of everything consumed so far.
  #[inline]
  #[must_use]
  pub fn verify(&self, claimed: u8) -> bool {
    self.finalize() == claimed
  }

  #[inline(always)]
  fn push(&mut self, digit: u8) {
    let d = u64::from(digit);
    let doubled = (u64::from(self.single) + weigh(d, true)) % 10;
    let single = (u64::from(self.doubled) + d) % 10;
    self.doubled = doubled as u8;
    self.single = single as u8;
  }
}

impl CheckDigit for Luhn {
  #[inline]
  fn new() -> Self {
    Self {
      doubled: 0,
      single: 0,
      len: 0,
    }
  }

  fn update(&mut self, digits: &[u8]) -> Result<(), InvalidInputError> {
    if !digits.iter().all(u8::is_ascii_digit) {
      return Err(InvalidInputError::new());
    }
    for &b in digits {
      self.push(b - b'0');
    }
    self.len = self.len.saturating_add(digits.len() as u64);
    Ok(())
  }

  #[inline]
  fn finalize(&self) -> u8 {
    finish(u64::from(self.doubled))
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::new();
  }

  #[inline]
  fn len(&self) -> u64 {
    self.len
  }
}

impl CheckDigitCombine for Luhn {
  fn combine(prefix: &Self, suffix: &Self) -> Self {
    // An odd-length suffix shifts every prefix digit by an odd distance.
    let (p_doubled, p_single) = if suffix.len % 2 == 0 {
      (prefix.doubled, prefix.single)
    } else {
      (prefix.single, prefix.doubled)
    };
    Self {
      doubled: (p_doubled + suffix.doubled) % 10,
      single: (p_single + suffix.single) % 10,
      len: prefix.len.saturating_add(suffix.len),
    }
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Luhn {
  /// Fold `buf` into the accumulator.
  ///
  /// A non-digit byte fails the whole write with
  /// [`ErrorKind::InvalidData`](std::io::ErrorKind::InvalidData) and leaves
  /// the accumulator unchanged.
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self
      .update(buf)
      .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
