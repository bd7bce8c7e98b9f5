use core::cmp::Ordering;

use crate::IntBuf;

/// # Comparison
impl IntBuf {
    /// Compares two signed buffers, assuming both are in normalized form.
    /// A negative value is less than any non-negative value; among two
    /// negatives a longer buffer is the more negative one, so lengths
    /// compare inverted before the digit-wise pass.
    pub fn cmp_signed(&self, other: &IntBuf) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (true, true) => match self.len().cmp(&other.len()) {
                Ordering::Less => Ordering::Greater,
                Ordering::Greater => Ordering::Less,
                Ordering::Equal => self.cmp_digits(other),
            },
            (false, false) => match self.len().cmp(&other.len()) {
                Ordering::Equal => self.cmp_digits(other),
                ord => ord,
            },
        }
    }

    /// Digit-wise unsigned comparison of two equal-length buffers, most
    /// significant first
    fn cmp_digits(&self, other: &IntBuf) -> Ordering {
        debug_assert_eq!(self.len(), other.len());
        for i in (0..self.len()).rev() {
            match self.digits[i].cmp(&other.digits[i]) {
                Ordering::Equal => (),
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}
