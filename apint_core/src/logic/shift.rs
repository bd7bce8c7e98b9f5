use alloc::vec::Vec;

use apint_internals::*;

use crate::IntBuf;

/// # Arithmetic shifts
///
/// Both directions interpret the buffer as a signed value and produce a
/// fresh normalized buffer. Negative shift amounts are handled by the
/// value type, which maps them to the opposite direction.
impl IntBuf {
    /// Arithmetic right shift by `s` bits. Vacated high bits fill with the
    /// sign; a shift at or past the total bit width collapses the result
    /// to 0 or -1.
    pub fn shr_signed(&self, s: usize) -> IntBuf {
        if self.is_empty() {
            return IntBuf::zero()
        }
        if s >= self.len() * BITS {
            return if self.is_negative() {
                IntBuf::from_idigit(-1)
            } else {
                IntBuf::zero()
            }
        }
        let shift_digits = s / BITS;
        let shift_bits = s % BITS;
        if shift_bits == 0 {
            // dropping low digits preserves normalization
            return IntBuf::from_digits(&self.digits[shift_digits..])
        }
        let ext = self.sign_word();
        let count = self.len() - shift_digits;
        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            let lo = self.digits[shift_digits + i] >> shift_bits;
            let hi_src = if shift_digits + i + 1 < self.len() {
                self.digits[shift_digits + i + 1]
            } else {
                ext
            };
            out.push(lo | (hi_src << (BITS - shift_bits)));
        }
        let mut buf = IntBuf { digits: out };
        // the top digit may have degenerated into pure sign extension
        buf.normalize();
        buf
    }

    /// Arithmetic left shift by `s` bits. Zero low digits are inserted for
    /// the digit-granular part; the buffer grows by one digit whenever the
    /// bit-granular part would push significant bits (including the sign)
    /// past the current top digit, detected by comparing the top digit's
    /// leading sign-matching bits against the shift amount.
    pub fn shl_signed(&self, s: usize) -> IntBuf {
        if self.is_empty() {
            return IntBuf::zero()
        }
        let shift_digits = s / BITS;
        let shift_bits = s % BITS;
        let mut out: Vec<Digit>;
        if shift_bits == 0 {
            out = Vec::with_capacity(self.len() + shift_digits);
            out.resize(shift_digits, 0);
            out.extend_from_slice(&self.digits);
        } else {
            let msd = self.msd();
            let leading = if self.is_negative() {
                (!msd).leading_zeros() as usize
            } else {
                msd.leading_zeros() as usize
            };
            let grows = leading <= shift_bits;
            let count = self.len() + shift_digits + (grows as usize);
            out = Vec::with_capacity(count);
            out.resize(shift_digits, 0);
            let ext = self.sign_word();
            let mut low = 0;
            for i in 0..(count - shift_digits) {
                let src = if i < self.len() { self.digits[i] } else { ext };
                out.push((src << shift_bits) | low);
                low = src >> (BITS - shift_bits);
            }
        }
        IntBuf { digits: out }
    }
}
