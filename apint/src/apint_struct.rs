use apint_core::{Digit, IntBuf};

/// An arbitrary precision signed integer
///
/// `Apint` owns exactly one normalized `IntBuf` and is immutable: every
/// operator returns a new value. Because no mutation ever happens after
/// construction, values can be freely shared across threads without any
/// locking.
///
/// The operator surface matches a native signed integer: `+ - * / % & | ^
/// ~ << >>`, unary negation, total ordering, and a hash consistent with
/// equality. Division truncates toward zero and the remainder takes the
/// sign of the dividend, exactly like `i64`.
///
/// ```
/// use apint::Apint;
///
/// let x = Apint::from(-3i32) * Apint::from(1u128 << 100);
/// assert_eq!(x.to_string(), "-3802951800684688204490109616128");
/// assert_eq!((&x % &Apint::from(10u8)).to_string(), "-8");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Apint {
    pub(crate) buf: IntBuf,
}

impl Apint {
    /// Wraps a buffer that must already be in normalized form
    #[inline]
    pub(crate) fn from_buf(buf: IntBuf) -> Self {
        debug_assert!(buf.is_normalized());
        Apint { buf }
    }

    /// The value 0
    #[inline]
    pub const fn zero() -> Self {
        Apint {
            buf: IntBuf::zero(),
        }
    }

    /// The value 1
    pub fn one() -> Self {
        Apint {
            buf: IntBuf::from_idigit(1),
        }
    }

    /// The value -1
    pub fn negative_one() -> Self {
        Apint {
            buf: IntBuf::from_idigit(-1),
        }
    }

    /// If `self` is zero. Normalized zero has no digits, so this is a
    /// length check.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.buf.is_negative()
    }

    pub(crate) fn is_one(&self) -> bool {
        matches!(self.buf.as_digits(), [1])
    }

    pub(crate) fn is_negative_one(&self) -> bool {
        matches!(self.buf.as_digits(), [Digit::MAX])
    }

    /// Returns -1, 0, or 1 according to the sign of `self`
    pub fn signum(&self) -> Apint {
        if self.is_zero() {
            Apint::zero()
        } else if self.is_negative() {
            Apint::negative_one()
        } else {
            Apint::one()
        }
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Apint {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// The number of bits in the representation: the digit count times the
    /// digit width. Zero has a bit width of 0.
    #[inline]
    pub fn bit_width(&self) -> usize {
        self.buf.len() * apint_core::BITS
    }

    /// The number of trailing zero bits. Zero reports 0, matching its
    /// empty representation.
    #[inline]
    pub fn trailing_zeros(&self) -> usize {
        self.buf.trailing_zeros()
    }

    /// A borrowable view of the underlying digits, least significant
    /// first, for interop with fixed width integer APIs
    #[inline]
    pub fn as_digits(&self) -> &[Digit] {
        self.buf.as_digits()
    }

    /// Simultaneously computes the truncating quotient and the remainder.
    ///
    /// ```
    /// use apint::Apint;
    ///
    /// let (q, r) = Apint::from(-7).quotient_and_remainder(&Apint::from(2));
    /// assert_eq!(q, Apint::from(-3));
    /// assert_eq!(r, Apint::from(-1));
    /// ```
    ///
    /// # Panics
    ///
    /// If `div` is zero.
    pub fn quotient_and_remainder(&self, div: &Apint) -> (Apint, Apint) {
        assert!(!div.is_zero(), "division by zero");
        if self.is_zero() {
            return (Apint::zero(), Apint::zero())
        }
        if div.is_one() {
            return (self.clone(), Apint::zero())
        }
        if div.is_negative_one() {
            return (-self, Apint::zero())
        }
        let (quo, rem) = IntBuf::divide(&self.buf, &div.buf);
        (Apint::from_buf(quo), Apint::from_buf(rem))
    }
}

#[cfg(feature = "zeroize_support")]
impl zeroize::Zeroize for Apint {
    /// Zeroizes the digits and leaves `self` as the value 0
    fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.buf)
    }
}
