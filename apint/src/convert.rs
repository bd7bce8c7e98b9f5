use apint_core::{Digit, IDigit, IntBuf, BITS};

use crate::Apint;

// Construction from the fixed width primitives. Everything at or below the
// digit width goes through the one-digit literal constructor; wider sources
// are split into digits and minimized.

macro_rules! from_small_signed {
    ($($iX:ident)*) => {
        $(
            impl From<$iX> for Apint {
                fn from(x: $iX) -> Apint {
                    Apint {
                        buf: IntBuf::from_idigit(x as IDigit),
                    }
                }
            }
        )*
    };
}

macro_rules! from_small_unsigned {
    ($($uX:ident)*) => {
        $(
            impl From<$uX> for Apint {
                fn from(x: $uX) -> Apint {
                    Apint {
                        buf: IntBuf::from_idigit(x as IDigit),
                    }
                }
            }
        )*
    };
}

from_small_signed!(i8 i16 i32 i64 isize);
from_small_unsigned!(u8 u16 u32);

impl From<i128> for Apint {
    fn from(x: i128) -> Apint {
        let mut buf = IntBuf::from_digits(&[x as Digit, (x >> BITS) as Digit]);
        buf.normalize();
        Apint::from_buf(buf)
    }
}

impl From<u64> for Apint {
    fn from(x: u64) -> Apint {
        Apint::from_buf(IntBuf::from_magnitude(&[x], false))
    }
}

impl From<usize> for Apint {
    fn from(x: usize) -> Apint {
        Apint::from(x as u64)
    }
}

impl From<u128> for Apint {
    fn from(x: u128) -> Apint {
        Apint::from_buf(IntBuf::from_magnitude(
            &[x as Digit, (x >> BITS) as Digit],
            false,
        ))
    }
}

impl From<bool> for Apint {
    fn from(x: bool) -> Apint {
        Apint {
            buf: IntBuf::from_idigit(x as IDigit),
        }
    }
}

/// # Float conversion and checked narrowing
impl Apint {
    /// Converts a finite `f64` by rounding to the nearest integer, ties
    /// away from zero. The float's mantissa is installed into a buffer and
    /// shifted by the unbiased binary exponent.
    ///
    /// ```
    /// use apint::Apint;
    ///
    /// assert_eq!(Apint::from_f64(-2.5), Apint::from(-3));
    /// assert_eq!(Apint::from_f64(1e21).to_string(), "1000000000000000000000");
    /// ```
    ///
    /// # Panics
    ///
    /// If `f` is NaN or infinite.
    pub fn from_f64(f: f64) -> Apint {
        assert!(f.is_finite(), "NaN or infinity cannot be represented");
        let f = round_ties_away(f);
        if f == 0.0 {
            return Apint::zero()
        }
        let bits = f.to_bits();
        let negative = (bits >> 63) != 0;
        let exponent = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1u64 << 52) - 1);
        // a nonzero rounded value has a magnitude of at least 1, so the
        // float is normal and the implicit mantissa bit is set
        let mantissa = fraction | (1u64 << 52);
        let shift = exponent - 1023 - 52;
        let buf = IntBuf::from_magnitude(&[mantissa], negative);
        let buf = if shift < 0 {
            // the dropped low bits are zero because the value is integral
            buf.shr_signed((-shift) as usize)
        } else {
            buf.shl_signed(shift as usize)
        };
        Apint::from_buf(buf)
    }

    /// `f32` version of [Apint::from_f64]
    ///
    /// # Panics
    ///
    /// If `f` is NaN or infinite.
    pub fn from_f32(f: f32) -> Apint {
        assert!(f.is_finite(), "NaN or infinity cannot be represented");
        Apint::from_f64(f as f64)
    }

    /// Converts an `f64` that must already be an exact integer, returning
    /// `None` for NaN, infinite, or fractional inputs
    pub fn try_from_f64(f: f64) -> Option<Apint> {
        if !f.is_finite() || round_ties_away(f) != f {
            return None
        }
        Some(Apint::from_f64(f))
    }

    /// `f32` version of [Apint::try_from_f64]
    pub fn try_from_f32(f: f32) -> Option<Apint> {
        if !f.is_finite() {
            return None
        }
        let f = f as f64;
        if round_ties_away(f) != f {
            return None
        }
        Some(Apint::from_f64(f))
    }

    /// Returns the value as an `i64` if it fits
    pub fn to_i64(&self) -> Option<i64> {
        match self.buf.len() {
            0 => Some(0),
            1 => Some(self.buf.as_digits()[0] as i64),
            _ => None,
        }
    }

    /// Returns the value as an `i128` if it fits
    pub fn to_i128(&self) -> Option<i128> {
        let digits = self.buf.as_digits();
        match digits.len() {
            0 => Some(0),
            1 => Some((digits[0] as i64) as i128),
            2 => Some((((digits[1] as i64) as i128) << BITS) | (digits[0] as i128)),
            _ => None,
        }
    }
}

/// Round to nearest with ties away from zero, the same convention as
/// `f64::round`, which is unavailable without `std`. Values with a
/// magnitude of 2^52 or more are already integral.
#[inline]
fn round_ties_away(f: f64) -> f64 {
    debug_assert!(f.is_finite());
    let mag = if f < 0.0 { -f } else { f };
    if mag >= 4503599627370496.0 {
        return f
    }
    let truncated = mag as u64 as f64;
    let rounded = if mag - truncated >= 0.5 {
        truncated + 1.0
    } else {
        truncated
    };
    if f < 0.0 {
        -rounded
    } else {
        rounded
    }
}
