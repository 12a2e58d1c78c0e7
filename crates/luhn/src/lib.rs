//! Luhn (mod 10) check digits.
//!
//! Two tiers over the same algorithm:
//!
//! | Input | Functions | Failure modes |
//! |-------|-----------|---------------|
//! | `u64` | [`compute_check_digit`], [`validate_luhn`] | none |
//! | `&str` of ASCII digits, any length | [`compute_check_digit_from_text`], [`validate_luhn_from_text`] | [`InvalidInputError`] |
//! | streamed digits | [`Luhn`] ([`CheckDigit`], [`CheckDigitCombine`]) | [`InvalidInputError`] |
//!
//! The text functions parse the whole string into a `u64` when it fits and
//! fall back to 18-digit chunks only when it overflows. [`engine_for`]
//! reports which path a given input takes; [`LuhnForce`] pins one.
//!
//! # Example
//!
//! ```rust
//! use luhn::{CheckDigit, Luhn};
//!
//! // Fixed width
//! assert_eq!(luhn::compute_check_digit(37828224631000), 5);
//! assert!(luhn::validate_luhn(378282246310005));
//!
//! // Arbitrary length
//! assert_eq!(luhn::compute_check_digit_from_text("18446744073709551615"), Ok(3));
//! assert_eq!(luhn::validate_luhn_from_text("422222222223"), Ok((false, 2)));
//!
//! // Streaming
//! let mut acc = Luhn::new();
//! acc.update(b"1844674407")?;
//! acc.update(b"3709551615")?;
//! assert_eq!(acc.finalize(), 3);
//! # Ok::<(), luhn::InvalidInputError>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` and never allocates. The default `std` feature only
//! adds `std::io::Write` for [`Luhn`]:
//!
//! ```toml
//! [dependencies]
//! luhn = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod config;
mod digits;
mod fixed;
mod introspect;
mod reference;
mod stream;

// Proptest uses file I/O for failure persistence that Miri cannot interpret.
#[cfg(all(test, not(miri)))]
mod proptests;

pub use config::LuhnForce;
pub use digits::{
  CHUNK_DIGITS, compute_check_digit_from_text, compute_check_digit_from_text_with, validate_luhn_from_text,
  validate_luhn_from_text_with,
};
pub use fixed::{compute_check_digit, validate_luhn};
pub use introspect::{Engine, engine_for};
pub use stream::Luhn;
// Re-export traits for convenience
pub use traits::{CheckDigit, CheckDigitCombine, InvalidInputError};
