//! Core word-buffer engine of the `apint` system
//!
//! This crate supplies the `IntBuf` scratch buffer type: a growable
//! little-endian array of `Digit`s interpreted as a two's complement signed
//! integer, together with the arithmetic, multiplication, division, shift,
//! and radix conversion kernels that operate on it. `IntBuf` is the mutable
//! working representation; the immutable public value type lives in the
//! `apint` crate and is constructed only from normalized buffers.
//!
//! Almost all fallible functions in this crate return a handleable `Option`
//! or `Result`. The exceptions are the division entry points, which panic on
//! a zero divisor because that is a programmer error rather than a
//! recoverable condition.

#![no_std]
#![forbid(unsafe_code)]
// We are using special indexing everywhere
#![allow(clippy::needless_range_loop)]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]

extern crate alloc;

#[doc(hidden)]
pub use apint_internals;
pub use apint_internals::{Digit, Half, IDigit, Quarter, SerdeError, BITS};

pub(crate) mod data;
pub use data::IntBuf;

mod logic;
