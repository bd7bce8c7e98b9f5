use alloc::vec;
use alloc::vec::Vec;

use apint_internals::*;

/// A growable little-endian buffer of `Digit`s interpreted as a two's
/// complement signed integer of `len() * BITS` bits. The empty buffer
/// represents the value 0.
///
/// # Design
///
/// `IntBuf` is the mutable scratch representation of the `apint` system.
/// A buffer is born as a copy of another buffer, a small literal, or a
/// parse result; it is mutated by exactly one kernel call chain; it is
/// normalized; and it is then handed to the public value type, which
/// asserts the normalization invariant and treats it as immutable from
/// then on. The `Vec` ownership is the entire concurrency argument: no
/// buffer is ever aliased by two live owners, so no locking exists
/// anywhere in the system.
///
/// Invariants of the normalized form:
///
/// - `len()` is the minimum number of digits such that sign extending the
///   most significant digit reproduces the represented value. No digit can
///   be dropped without changing the value or its sign.
/// - Scratch buffers produced mid-kernel may carry redundant leading sign
///   extension digits; functions document whether they accept or produce
///   unnormalized contents.
///
/// Growth reallocates through the `Vec`; logical shrinking only ever
/// happens through `Vec::truncate`, which never reallocates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntBuf {
    pub(crate) digits: Vec<Digit>,
}

impl IntBuf {
    /// Returns the zero-valued empty buffer
    #[inline]
    pub const fn zero() -> Self {
        IntBuf { digits: Vec::new() }
    }

    /// Returns a buffer of `count` zeroed digits. Unnormalized unless
    /// `count == 0`.
    pub fn zeroed(count: usize) -> Self {
        IntBuf {
            digits: vec![0; count],
        }
    }

    /// Returns a buffer with a copy of `digits` as its raw contents
    pub fn from_digits(digits: &[Digit]) -> Self {
        IntBuf {
            digits: digits.to_vec(),
        }
    }

    /// Returns the normalized buffer representing `x`
    pub fn from_idigit(x: IDigit) -> Self {
        if x == 0 {
            IntBuf::zero()
        } else {
            IntBuf {
                digits: vec![x as Digit],
            }
        }
    }

    /// Returns the number of digits
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns a view of the raw digits, least significant first
    #[inline]
    pub fn as_digits(&self) -> &[Digit] {
        &self.digits
    }

    /// The most significant digit, or 0 for the empty buffer
    #[inline]
    pub fn msd(&self) -> Digit {
        match self.digits.last() {
            Some(d) => *d,
            None => 0,
        }
    }

    /// The digit that sign extension of this buffer produces: all-ones if
    /// the buffer is negative, all-zeros otherwise
    #[inline]
    pub fn sign_word(&self) -> Digit {
        sign_extension(self.msd())
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        (self.msd() & SIGN_BIT) != 0
    }

    /// If the represented value is 0. Works on unnormalized buffers.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| *d == 0)
    }

    /// If this buffer holds the minimum signed value for its current
    /// width: the top digit is exactly the half-range boundary and all
    /// lower digits are zero. The positive magnitude of such a value does
    /// not fit in the same number of digits.
    pub fn is_imin(&self) -> bool {
        match self.digits.split_last() {
            Some((msd, lower)) => *msd == SIGN_BIT && lower.iter().all(|d| *d == 0),
            None => false,
        }
    }

    /// Grows to `new_count` digits, filling the new high digits with
    /// `fill`. Requests at or below the current length are no-ops; a
    /// buffer is never shrunk by this family of functions.
    pub fn resize_fill(&mut self, new_count: usize, fill: Digit) {
        if new_count > self.digits.len() {
            self.digits.resize(new_count, fill);
        }
    }

    /// Grows to `new_count` digits with zero fill
    #[inline]
    pub fn resize_zero(&mut self, new_count: usize) {
        self.resize_fill(new_count, 0);
    }

    /// Grows to `new_count` digits with sign extension fill
    #[inline]
    pub fn resize_sign(&mut self, new_count: usize) {
        self.resize_fill(new_count, self.sign_word());
    }

    /// Computes the minimum number of digits that still uniquely
    /// determines both the magnitude and the sign of the raw contents
    pub fn min_count(&self) -> usize {
        let mut count = self.digits.len();
        if count == 0 {
            return 0
        }
        let ext = sign_extension(self.digits[count - 1]);
        if ext == 0 {
            while count > 0 {
                let d = self.digits[count - 1];
                if d != 0 {
                    // a set sign bit needs one more zero digit above it
                    return if (d & SIGN_BIT) != 0 { count + 1 } else { count }
                }
                count -= 1;
            }
            0
        } else {
            while count > 0 {
                let d = self.digits[count - 1];
                if d != MAX {
                    return if (d & SIGN_BIT) != 0 { count } else { count + 1 }
                }
                count -= 1;
            }
            // all digits are all-ones, the value is -1
            1
        }
    }

    /// Truncates to the normalized form
    #[inline]
    pub fn normalize(&mut self) {
        let min = self.min_count();
        self.digits.truncate(min);
    }

    /// If the buffer is already in normalized form
    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.min_count() == self.digits.len()
    }

    /// Constructs the normalized buffer for an unsigned magnitude and a
    /// sign. `mag` may carry redundant high zero digits. When `negative`
    /// is set the result is the two's complement negation of the
    /// magnitude, grown by one digit when the magnitude does not fit the
    /// signed range of its own width.
    pub fn from_magnitude(mag: &[Digit], negative: bool) -> Self {
        let mut count = mag.len();
        while count > 0 && mag[count - 1] == 0 {
            count -= 1;
        }
        if count == 0 {
            return IntBuf::zero()
        }
        let mut buf = IntBuf::from_digits(&mag[..count]);
        let msb_set = (buf.digits[count - 1] & SIGN_BIT) != 0;
        if negative {
            // a magnitude of exactly the half-range boundary already has
            // the bit pattern of its own negation
            if !buf.is_imin() {
                if msb_set {
                    buf.digits.push(0);
                }
                buf.negate_raw();
            }
        } else if msb_set {
            buf.digits.push(0);
        }
        buf
    }

    /// Returns the number of trailing zero bits. The zero value reports 0,
    /// matching its zero-length representation.
    pub fn trailing_zeros(&self) -> usize {
        let mut zeros = 0;
        for d in &self.digits {
            if *d == 0 {
                zeros += BITS;
            } else {
                zeros += d.trailing_zeros() as usize;
                break
            }
        }
        zeros
    }
}

#[cfg(feature = "zeroize_support")]
impl zeroize::Zeroize for IntBuf {
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.digits)
    }
}
