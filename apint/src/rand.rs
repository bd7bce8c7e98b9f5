use alloc::vec;
use alloc::vec::Vec;

use apint_core::apint_internals::{Digit, MAX};
use apint_core::{IntBuf, BITS};

use crate::Apint;

/// `rand_support` functions
impl Apint {
    /// Creates a uniformly random value of the signed two's complement
    /// `width`-bit range using a `rand_core::RngCore` random number
    /// generator, sign extending from bit `width - 1` and normalizing. A
    /// `width` of 0 always produces 0.
    ///
    /// ```
    /// // Example using the `rand_xoshiro` crate.
    /// use apint::Apint;
    /// use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
    ///
    /// let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    /// let x = Apint::rand_using(&mut rng, 100).unwrap();
    /// assert!(x.bit_width() <= 128);
    /// ```
    pub fn rand_using<R>(rng: &mut R, width: usize) -> Result<Apint, rand_core::Error>
    where
        R: rand_core::RngCore,
    {
        if width == 0 {
            return Ok(Apint::zero())
        }
        let count = (width + BITS - 1) / BITS;
        let mut bytes = vec![0u8; count * (BITS / 8)];
        rng.try_fill_bytes(&mut bytes)?;
        let mut digits: Vec<Digit> = Vec::with_capacity(count);
        for chunk in bytes.chunks_exact(BITS / 8) {
            let mut d: Digit = 0;
            for (i, b) in chunk.iter().enumerate() {
                d |= (*b as Digit) << (8 * i);
            }
            digits.push(d);
        }
        // sign extend from the requested width
        let extra = width % BITS;
        if extra != 0 {
            let last = count - 1;
            if (digits[last] >> (extra - 1)) & 1 != 0 {
                digits[last] |= MAX << extra;
            } else {
                digits[last] &= (1 << extra) - 1;
            }
        }
        let mut buf = IntBuf::from_digits(&digits);
        buf.normalize();
        Ok(Apint::from_buf(buf))
    }
}
