use core::cmp;

use crate::IntBuf;

/// # Bitwise operations
///
/// The binary operations grow the receiver to cover the operand and then
/// combine the receiver's tail against the operand's sign extension digit,
/// so two's complement semantics hold for mixed-length operands.
impl IntBuf {
    pub fn and_signed(&mut self, rhs: &IntBuf) {
        let new_count = cmp::max(self.len(), rhs.len());
        self.resize_sign(new_count);
        for i in 0..rhs.len() {
            self.digits[i] &= rhs.digits[i];
        }
        let ext = rhs.sign_word();
        for i in rhs.len()..new_count {
            self.digits[i] &= ext;
        }
    }

    pub fn or_signed(&mut self, rhs: &IntBuf) {
        let new_count = cmp::max(self.len(), rhs.len());
        self.resize_sign(new_count);
        for i in 0..rhs.len() {
            self.digits[i] |= rhs.digits[i];
        }
        let ext = rhs.sign_word();
        for i in rhs.len()..new_count {
            self.digits[i] |= ext;
        }
    }

    pub fn xor_signed(&mut self, rhs: &IntBuf) {
        let new_count = cmp::max(self.len(), rhs.len());
        self.resize_sign(new_count);
        for i in 0..rhs.len() {
            self.digits[i] ^= rhs.digits[i];
        }
        let ext = rhs.sign_word();
        for i in rhs.len()..new_count {
            self.digits[i] ^= ext;
        }
    }

    /// Digit-wise complement. Does not produce the correct successor
    /// representation for the empty buffer or for -1; the value type
    /// special cases those two before calling this.
    pub fn not_raw(&mut self) {
        for d in self.digits.iter_mut() {
            *d = !*d;
        }
    }
}
