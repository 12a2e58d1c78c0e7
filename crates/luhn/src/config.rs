//! Engine selection overrides for the text API.
//!
//! The default selector tries a whole-string `u64` parse and only falls back
//! to 18-digit chunks on overflow. [`LuhnForce`] lets callers pin a specific
//! engine, e.g. to benchmark the chunked path on short inputs or to
//! cross-check against the reference walk. Every force produces the same
//! digit and the same errors for every input.

use core::{fmt, str::FromStr};

use traits::InvalidInputError;

/// Forced engine selection for the text API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LuhnForce {
  /// Whole-string `u64` parse, chunked fallback on overflow.
  #[default]
  Auto,
  /// Always parse in 18-digit chunks, even when the value would fit a `u64`.
  Chunked,
  /// Digit-at-a-time reference walk (slow, obviously correct).
  Reference,
}

impl LuhnForce {
  /// All force modes, in declaration order.
  pub const ALL: [Self; 3] = [Self::Auto, Self::Chunked, Self::Reference];

  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Chunked => "chunked",
      Self::Reference => "reference",
    }
  }
}

impl fmt::Display for LuhnForce {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for LuhnForce {
  type Err = InvalidInputError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let value = s.trim();

    if value.eq_ignore_ascii_case("auto") {
      return Ok(Self::Auto);
    }
    if value.eq_ignore_ascii_case("chunked")
      || value.eq_ignore_ascii_case("portable")
      || value.eq_ignore_ascii_case("scalar")
    {
      return Ok(Self::Chunked);
    }
    if value.eq_ignore_ascii_case("reference")
      || value.eq_ignore_ascii_case("bitwise")
      || value.eq_ignore_ascii_case("digitwise")
    {
      return Ok(Self::Reference);
    }

    Err(InvalidInputError::new())
  }
}
