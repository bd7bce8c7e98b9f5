use core::cmp;

use apint_internals::*;

use crate::IntBuf;

/// # Addition and subtraction
impl IntBuf {
    /// Add-assigns `rhs` to `self`, interpreting both as signed values.
    /// `self` grows to `max(self.len(), rhs.len()) + 1` digits so that the
    /// carry and any sign change always have room; the result may carry
    /// redundant sign extension digits.
    pub fn add_signed(&mut self, rhs: &IntBuf) {
        let new_count = cmp::max(self.len(), rhs.len()) + 1;
        self.resize_sign(new_count);
        let rhs_ext = rhs.sign_word();
        let mut carry = 0;
        for i in 0..rhs.len() {
            let tmp = widen_add(self.digits[i], rhs.digits[i], carry);
            self.digits[i] = tmp.0;
            carry = tmp.1;
        }
        if rhs_ext == 0 {
            // the operand is non-negative, only the carry propagates past
            // its explicit digits
            for i in rhs.len()..new_count {
                if carry == 0 {
                    break
                }
                let tmp = widen_add(self.digits[i], carry, 0);
                self.digits[i] = tmp.0;
                carry = tmp.1;
            }
        } else {
            for i in rhs.len()..new_count {
                let tmp = widen_add(self.digits[i], rhs_ext, carry);
                self.digits[i] = tmp.0;
                carry = tmp.1;
            }
        }
    }

    /// Subtract-assigns `rhs` from `self`, interpreting both as signed
    /// values. Grows the same way as [IntBuf::add_signed].
    pub fn sub_signed(&mut self, rhs: &IntBuf) {
        let new_count = cmp::max(self.len(), rhs.len()) + 1;
        self.resize_sign(new_count);
        let rhs_ext = rhs.sign_word();
        let mut borrow = 0;
        for i in 0..rhs.len() {
            let (d, b0) = self.digits[i].overflowing_sub(rhs.digits[i]);
            let (d, b1) = d.overflowing_sub(borrow);
            self.digits[i] = d;
            borrow = (b0 | b1) as Digit;
        }
        if rhs_ext == 0 {
            for i in rhs.len()..new_count {
                if borrow == 0 {
                    break
                }
                let (d, b) = self.digits[i].overflowing_sub(borrow);
                self.digits[i] = d;
                borrow = b as Digit;
            }
        } else {
            for i in rhs.len()..new_count {
                let (d, b0) = self.digits[i].overflowing_sub(rhs_ext);
                let (d, b1) = d.overflowing_sub(borrow);
                self.digits[i] = d;
                borrow = (b0 | b1) as Digit;
            }
        }
    }

    /// Adds the single digit `y` and returns the carry out of the top
    /// digit. The represented value only stays correct when the carry out
    /// is zero; callers size the buffer so that it is.
    pub(crate) fn add_digit(&mut self, y: Digit) -> Digit {
        let mut carry = y;
        for i in 0..self.len() {
            if carry == 0 {
                break
            }
            let (d, c) = self.digits[i].overflowing_add(carry);
            self.digits[i] = d;
            carry = c as Digit;
        }
        carry
    }

    /// Two's complement negation of the raw contents: complement plus one
    /// with carry propagation, with no growth. Negating the minimum signed
    /// value of the current width wraps; use [IntBuf::negate_signed] for
    /// value-correct negation.
    pub fn negate_raw(&mut self) {
        let mut carry = true;
        for d in self.digits.iter_mut() {
            let (t, c) = (!*d).overflowing_add(carry as Digit);
            *d = t;
            carry = c;
        }
    }

    /// Value-correct signed negation. The minimum signed value of the
    /// current width grows by one zero digit instead of negating: the
    /// unchanged bit pattern then reads as the positive magnitude.
    pub fn negate_signed(&mut self) {
        if self.is_imin() {
            let new_count = self.len() + 1;
            self.resize_zero(new_count);
        } else {
            self.negate_raw();
        }
    }
}
