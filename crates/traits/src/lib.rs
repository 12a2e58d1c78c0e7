//! Core check-digit traits for cardcheck.
//!
//! This crate provides the traits that check-digit implementations conform
//! to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`CheckDigit`] | Streaming decimal check digits | Luhn |
//! | [`CheckDigitCombine`] | Merge accumulators of adjacent digit runs | Luhn |
//!
//! # Error Types
//!
//! - [`InvalidInputError`] - Empty input or a non-digit byte
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod check_digit;
pub mod error;

pub use check_digit::{CheckDigit, CheckDigitCombine};
pub use error::InvalidInputError;
