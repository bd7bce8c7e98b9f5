use alloc::string::String;
use alloc::vec::Vec;

use apint_internals::*;

use crate::IntBuf;

/// # Radix string conversion
impl IntBuf {
    /// Parses a digit string (no sign indicator; a leading `-` is stripped
    /// by the caller and supplied as `negative`) into a normalized buffer
    /// by repeated multiply-accumulate. Letters are accepted in either
    /// case.
    ///
    /// # Errors
    ///
    /// `InvalidRadix` if `radix` is outside `2..=36`, `Empty` for an empty
    /// input, and `InvalidChar` if any character is not a digit of
    /// `radix`.
    pub fn parse_radix(src: &[u8], radix: u8, negative: bool) -> Result<IntBuf, SerdeError> {
        if radix < 2 || radix > 36 {
            return Err(SerdeError::InvalidRadix)
        }
        if src.is_empty() {
            return Err(SerdeError::Empty)
        }
        if src == b"0" {
            return Ok(IntBuf::zero())
        }
        let bits = bits_upper_bound(src.len(), radix)?;
        let count = (bits + BITS - 1) / BITS;
        let mut buf = IntBuf::zeroed(count);
        for c in src {
            let digit = match char_to_digit(*c, radix) {
                Some(d) => d,
                None => return Err(SerdeError::InvalidChar),
            };
            // the upper bound estimate leaves room, so neither carry can
            // fall off the top
            let carry = buf.short_mul(radix as Half);
            debug_assert_eq!(carry, 0);
            let carry = buf.add_digit(digit as Digit);
            debug_assert_eq!(carry, 0);
        }
        if buf.is_zero() {
            return Ok(IntBuf::zero())
        }
        if negative {
            buf.negate_raw();
            if !buf.is_negative() {
                // the magnitude occupied the full width
                let new_count = buf.len() + 1;
                buf.resize_fill(new_count, MAX);
            }
        } else if buf.is_negative() {
            let new_count = buf.len() + 1;
            buf.resize_zero(new_count);
        }
        buf.normalize();
        Ok(buf)
    }

    /// Formats the signed value as a digit string in `radix`, most
    /// significant digit first, with a `-` prefix for negative values.
    /// Works on a disposable copy of the magnitude by repeated division;
    /// zero formats as "0" without entering the loop.
    ///
    /// # Errors
    ///
    /// `InvalidRadix` if `radix` is outside `2..=36`.
    pub fn format_radix(&self, radix: u8, upper: bool) -> Result<String, SerdeError> {
        if radix < 2 || radix > 36 {
            return Err(SerdeError::InvalidRadix)
        }
        if self.is_zero() {
            return Ok(String::from("0"))
        }
        let negative = self.is_negative();
        let mut mag = self.clone();
        if negative {
            // for the minimum signed value this wraps to the same bit
            // pattern, which reads correctly as an unsigned magnitude
            mag.negate_raw();
        }
        let estimate = chars_upper_bound(mag.len() * BITS, radix)?;
        let mut chars = Vec::with_capacity(estimate + 1);
        while !mag.is_zero() {
            let rem = mag.short_udiv_half_assign(radix as Half);
            chars.push(digit_to_char(rem as u8, upper));
        }
        if negative {
            chars.push(b'-');
        }
        chars.reverse();
        // cannot panic: every byte pushed is an ASCII digit or sign
        Ok(String::from_utf8(chars).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basics() {
        assert!(IntBuf::parse_radix(b"0", 10, false).unwrap().is_empty());
        assert!(IntBuf::parse_radix(b"000", 10, true).unwrap().is_empty());
        assert_eq!(
            IntBuf::parse_radix(b"255", 10, false).unwrap().as_digits(),
            &[255]
        );
        assert_eq!(
            IntBuf::parse_radix(b"fF", 16, false).unwrap().as_digits(),
            &[255]
        );
        assert_eq!(
            IntBuf::parse_radix(b"10", 10, true).unwrap().as_digits(),
            &[(-10 as IDigit) as Digit]
        );
        assert_eq!(IntBuf::parse_radix(b"", 10, false), Err(SerdeError::Empty));
        assert_eq!(
            IntBuf::parse_radix(b"12x", 10, false),
            Err(SerdeError::InvalidChar)
        );
        assert_eq!(
            IntBuf::parse_radix(b"11", 37, false),
            Err(SerdeError::InvalidRadix)
        );
    }

    #[test]
    fn parse_width_boundaries() {
        // 2^63 needs a second digit when positive but not when negated
        let p = IntBuf::parse_radix(b"9223372036854775808", 10, false).unwrap();
        assert_eq!(p.as_digits(), &[SIGN_BIT, 0]);
        let n = IntBuf::parse_radix(b"9223372036854775808", 10, true).unwrap();
        assert_eq!(n.as_digits(), &[SIGN_BIT]);
        // 2^64 - 1 negated crosses into a second digit
        let n = IntBuf::parse_radix(b"ffffffffffffffff", 16, true).unwrap();
        assert_eq!(n.as_digits(), &[1, MAX]);
    }

    #[test]
    fn format_basics() {
        assert_eq!(IntBuf::zero().format_radix(10, false).unwrap(), "0");
        let x = IntBuf::from_idigit(-255);
        assert_eq!(x.format_radix(16, false).unwrap(), "-ff");
        assert_eq!(x.format_radix(16, true).unwrap(), "-FF");
        assert_eq!(x.format_radix(2, false).unwrap(), "-11111111");
        let imin = IntBuf::from_idigit(IDigit::MIN);
        assert_eq!(
            imin.format_radix(10, false).unwrap(),
            "-9223372036854775808"
        );
        assert_eq!(IntBuf::from_idigit(35).format_radix(36, false).unwrap(), "z");
    }
}
