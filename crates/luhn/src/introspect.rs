//! Engine introspection for the text API.
//!
//! Reports which engine would serve a given input without computing the
//! check digit. Useful for checking where the fixed/chunked transition falls
//! and for labelling benchmark output.
//!
//! # Examples
//!
//! ```
//! use luhn::{Engine, LuhnForce, engine_for};
//!
//! assert_eq!(engine_for("18446744073709551615", LuhnForce::Auto), Ok(Engine::Fixed));
//! assert_eq!(engine_for("18446744073709551616", LuhnForce::Auto), Ok(Engine::Chunked));
//! println!("{}", Engine::Chunked); // "chunked/18"
//! ```

use core::fmt;

use traits::InvalidInputError;

use crate::{
  config::LuhnForce,
  digits::{Selected, select},
};

/// Engine serving a text input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Engine {
  /// Whole string parsed into a single `u64`.
  Fixed,
  /// 18-digit chunks, parity reset per chunk.
  Chunked,
  /// Digit-at-a-time walk.
  Reference,
}

impl Engine {
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Fixed => "fixed/u64",
      Self::Chunked => "chunked/18",
      Self::Reference => "reference/digit",
    }
  }
}

impl fmt::Display for Engine {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Returns the engine that would compute the check digit of `text`.
///
/// # Errors
///
/// Returns [`InvalidInputError`] for exactly the inputs the computation
/// itself would reject: empty input or any non-digit character.
pub fn engine_for(text: &str, force: LuhnForce) -> Result<Engine, InvalidInputError> {
  let digits = text.as_bytes();
  match select(digits, force)? {
    Selected::Fixed(_) => Ok(Engine::Fixed),
    // Forced and overflowing selections have not looked at every byte yet.
    selected => {
      if !digits.iter().all(u8::is_ascii_digit) {
        return Err(InvalidInputError::new());
      }
      Ok(match selected {
        Selected::Reference => Engine::Reference,
        _ => Engine::Chunked,
      })
    }
  }
}
