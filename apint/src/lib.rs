//! Arbitrary precision signed integers
//!
//! This is the user-facing crate of the `apint` system. It supplies the
//! immutable [Apint] value type, which wraps exactly one normalized
//! `IntBuf` from `apint_core` and exposes the operator surface, the
//! primitive and float conversions, and the radix string conversions.
//!
//! ```
//! use apint::Apint;
//!
//! let x = Apint::from_str_radix("100000000000000000000000000000000000", 10).unwrap();
//! let y = Apint::from_str_radix("1000000000000000", 10).unwrap();
//! assert_eq!((x / y).to_string(), "100000000000000000000");
//! assert_eq!((Apint::from(1u8) << 64u32).to_string_radix(16).unwrap(), "10000000000000000");
//! ```
//!
//! Almost all fallible functions return a handleable `Option` or `Result`.
//! The exceptions are division and remainder by zero and constructing from
//! a NaN or infinite float, which panic because they are programmer errors
//! rather than recoverable conditions.

#![no_std]
#![forbid(unsafe_code)]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]

extern crate alloc;

#[doc(hidden)]
pub use apint_core;
#[doc(hidden)]
pub use apint_core::apint_internals;
pub use apint_core::{Digit, IDigit, IntBuf, SerdeError, BITS};

mod apint_struct;
mod cmp;
mod convert;
mod ops;
#[cfg(feature = "rand_support")]
mod rand;
#[cfg(feature = "serde_support")]
mod serde;
mod strings;

pub use apint_struct::Apint;
