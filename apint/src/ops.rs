use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use apint_core::IntBuf;

use crate::Apint;

// Every operator copies or constructs a scratch buffer, drives it through
// the kernel, normalizes, and wraps the result. The zero and +-1 fast
// paths skip the kernels entirely.

impl Apint {
    fn add_value(&self, rhs: &Apint) -> Apint {
        if rhs.is_zero() {
            return self.clone()
        }
        if self.is_zero() {
            return rhs.clone()
        }
        let mut buf = self.buf.clone();
        buf.add_signed(&rhs.buf);
        buf.normalize();
        Apint::from_buf(buf)
    }

    fn sub_value(&self, rhs: &Apint) -> Apint {
        if rhs.is_zero() {
            return self.clone()
        }
        let mut buf = self.buf.clone();
        buf.sub_signed(&rhs.buf);
        buf.normalize();
        Apint::from_buf(buf)
    }

    fn mul_value(&self, rhs: &Apint) -> Apint {
        if self.is_zero() || rhs.is_zero() {
            return Apint::zero()
        }
        if self.is_one() {
            return rhs.clone()
        }
        if rhs.is_one() {
            return self.clone()
        }
        let mut buf = IntBuf::multiply_signed(&self.buf, &rhs.buf);
        buf.normalize();
        Apint::from_buf(buf)
    }

    fn div_value(&self, rhs: &Apint) -> Apint {
        assert!(!rhs.is_zero(), "division by zero");
        if self.is_zero() {
            return Apint::zero()
        }
        if rhs.is_one() {
            return self.clone()
        }
        if rhs.is_negative_one() {
            return -self
        }
        Apint::from_buf(IntBuf::quotient(&self.buf, &rhs.buf))
    }

    fn rem_value(&self, rhs: &Apint) -> Apint {
        assert!(!rhs.is_zero(), "remainder by zero");
        if self.is_zero() || rhs.is_one() || rhs.is_negative_one() {
            return Apint::zero()
        }
        Apint::from_buf(IntBuf::remainder(&self.buf, &rhs.buf))
    }

    fn and_value(&self, rhs: &Apint) -> Apint {
        if self.is_zero() || rhs.is_zero() {
            return Apint::zero()
        }
        let mut buf = self.buf.clone();
        buf.and_signed(&rhs.buf);
        buf.normalize();
        Apint::from_buf(buf)
    }

    fn or_value(&self, rhs: &Apint) -> Apint {
        if rhs.is_zero() {
            return self.clone()
        }
        if self.is_zero() {
            return rhs.clone()
        }
        let mut buf = self.buf.clone();
        buf.or_signed(&rhs.buf);
        buf.normalize();
        Apint::from_buf(buf)
    }

    fn xor_value(&self, rhs: &Apint) -> Apint {
        if rhs.is_zero() {
            return self.clone()
        }
        if self.is_zero() {
            return rhs.clone()
        }
        let mut buf = self.buf.clone();
        buf.xor_signed(&rhs.buf);
        buf.normalize();
        Apint::from_buf(buf)
    }

    fn neg_value(&self) -> Apint {
        if self.is_zero() {
            return Apint::zero()
        }
        let mut buf = self.buf.clone();
        buf.negate_signed();
        buf.normalize();
        Apint::from_buf(buf)
    }

    fn not_value(&self) -> Apint {
        // the complement of a normalized 0 or -1 degenerates to a
        // different digit count, so the kernel never sees them
        if self.is_zero() {
            return Apint::negative_one()
        }
        if self.is_negative_one() {
            return Apint::zero()
        }
        let mut buf = self.buf.clone();
        buf.not_raw();
        Apint::from_buf(buf)
    }

    pub(crate) fn shl_amount(&self, s: usize) -> Apint {
        Apint::from_buf(self.buf.shl_signed(s))
    }

    pub(crate) fn shr_amount(&self, s: usize) -> Apint {
        Apint::from_buf(self.buf.shr_signed(s))
    }
}

macro_rules! forward_binop {
    ($($imp:ident, $method:ident, $inner:ident);*;) => {
        $(
            impl $imp<Apint> for Apint {
                type Output = Apint;

                fn $method(self, rhs: Apint) -> Apint {
                    Apint::$inner(&self, &rhs)
                }
            }

            impl<'a> $imp<&'a Apint> for Apint {
                type Output = Apint;

                fn $method(self, rhs: &'a Apint) -> Apint {
                    Apint::$inner(&self, rhs)
                }
            }

            impl<'a> $imp<Apint> for &'a Apint {
                type Output = Apint;

                fn $method(self, rhs: Apint) -> Apint {
                    Apint::$inner(self, &rhs)
                }
            }

            impl<'a, 'b> $imp<&'b Apint> for &'a Apint {
                type Output = Apint;

                fn $method(self, rhs: &'b Apint) -> Apint {
                    Apint::$inner(self, rhs)
                }
            }
        )*
    };
}

forward_binop!(
    Add, add, add_value;
    Sub, sub, sub_value;
    Mul, mul, mul_value;
    Div, div, div_value;
    Rem, rem, rem_value;
    BitAnd, bitand, and_value;
    BitOr, bitor, or_value;
    BitXor, bitxor, xor_value;
);

macro_rules! forward_assign {
    ($($imp:ident, $method:ident, $inner:ident);*;) => {
        $(
            impl $imp<Apint> for Apint {
                fn $method(&mut self, rhs: Apint) {
                    *self = Apint::$inner(self, &rhs);
                }
            }

            impl<'a> $imp<&'a Apint> for Apint {
                fn $method(&mut self, rhs: &'a Apint) {
                    *self = Apint::$inner(self, rhs);
                }
            }
        )*
    };
}

forward_assign!(
    AddAssign, add_assign, add_value;
    SubAssign, sub_assign, sub_value;
    MulAssign, mul_assign, mul_value;
    DivAssign, div_assign, div_value;
    RemAssign, rem_assign, rem_value;
    BitAndAssign, bitand_assign, and_value;
    BitOrAssign, bitor_assign, or_value;
    BitXorAssign, bitxor_assign, xor_value;
);

impl Neg for Apint {
    type Output = Apint;

    fn neg(self) -> Apint {
        self.neg_value()
    }
}

impl<'a> Neg for &'a Apint {
    type Output = Apint;

    fn neg(self) -> Apint {
        self.neg_value()
    }
}

impl Not for Apint {
    type Output = Apint;

    fn not(self) -> Apint {
        self.not_value()
    }
}

impl<'a> Not for &'a Apint {
    type Output = Apint;

    fn not(self) -> Apint {
        self.not_value()
    }
}

// Shift amounts can be any primitive integer. A negative amount shifts in
// the opposite direction by the magnitude; amounts that do not fit in a
// `usize` saturate, which for right shifts is already the 0 or -1 collapse.

macro_rules! shift_unsigned {
    ($($uX:ident)*) => {
        $(
            impl<'a> Shl<$uX> for &'a Apint {
                type Output = Apint;

                fn shl(self, s: $uX) -> Apint {
                    self.shl_amount(s.try_into().unwrap_or(usize::MAX))
                }
            }

            impl<'a> Shr<$uX> for &'a Apint {
                type Output = Apint;

                fn shr(self, s: $uX) -> Apint {
                    self.shr_amount(s.try_into().unwrap_or(usize::MAX))
                }
            }

            impl Shl<$uX> for Apint {
                type Output = Apint;

                fn shl(self, s: $uX) -> Apint {
                    (&self) << s
                }
            }

            impl Shr<$uX> for Apint {
                type Output = Apint;

                fn shr(self, s: $uX) -> Apint {
                    (&self) >> s
                }
            }

            impl ShlAssign<$uX> for Apint {
                fn shl_assign(&mut self, s: $uX) {
                    *self = (&*self) << s;
                }
            }

            impl ShrAssign<$uX> for Apint {
                fn shr_assign(&mut self, s: $uX) {
                    *self = (&*self) >> s;
                }
            }
        )*
    };
}

macro_rules! shift_signed {
    ($($iX:ident)*) => {
        $(
            impl<'a> Shl<$iX> for &'a Apint {
                type Output = Apint;

                fn shl(self, s: $iX) -> Apint {
                    let mag = s.unsigned_abs().try_into().unwrap_or(usize::MAX);
                    if s < 0 {
                        self.shr_amount(mag)
                    } else {
                        self.shl_amount(mag)
                    }
                }
            }

            impl<'a> Shr<$iX> for &'a Apint {
                type Output = Apint;

                fn shr(self, s: $iX) -> Apint {
                    let mag = s.unsigned_abs().try_into().unwrap_or(usize::MAX);
                    if s < 0 {
                        self.shl_amount(mag)
                    } else {
                        self.shr_amount(mag)
                    }
                }
            }

            impl Shl<$iX> for Apint {
                type Output = Apint;

                fn shl(self, s: $iX) -> Apint {
                    (&self) << s
                }
            }

            impl Shr<$iX> for Apint {
                type Output = Apint;

                fn shr(self, s: $iX) -> Apint {
                    (&self) >> s
                }
            }

            impl ShlAssign<$iX> for Apint {
                fn shl_assign(&mut self, s: $iX) {
                    *self = (&*self) << s;
                }
            }

            impl ShrAssign<$iX> for Apint {
                fn shr_assign(&mut self, s: $iX) {
                    *self = (&*self) >> s;
                }
            }
        )*
    };
}

shift_unsigned!(u8 u16 u32 u64 u128 usize);
shift_signed!(i8 i16 i32 i64 i128 isize);
