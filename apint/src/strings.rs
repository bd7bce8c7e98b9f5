use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use apint_core::{IntBuf, SerdeError};

use crate::Apint;

/// # String conversion
impl Apint {
    /// Parses a signed digit string in the given radix. A single leading
    /// `-` marks a negative value; letters are accepted in either case.
    ///
    /// ```
    /// use apint::Apint;
    ///
    /// let x = Apint::from_str_radix("-8000000000000000", 16).unwrap();
    /// assert_eq!(x, Apint::from(i64::MIN));
    /// assert!(Apint::from_str_radix("", 10).is_err());
    /// assert!(Apint::from_str_radix("12f", 10).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidRadix` if `radix` is outside `2..=36`, `Empty` for an empty
    /// input (a bare `-` included), and `InvalidChar` for any character
    /// that is not a digit of `radix`.
    pub fn from_str_radix(src: &str, radix: u8) -> Result<Apint, SerdeError> {
        let src = src.as_bytes();
        let (digits, negative) = match src.first() {
            Some(b'-') => (&src[1..], true),
            _ => (src, false),
        };
        let buf = IntBuf::parse_radix(digits, radix, negative)?;
        Ok(Apint::from_buf(buf))
    }

    /// Formats the value in the given radix with lowercase digit letters
    /// and a `-` prefix for negative values
    ///
    /// # Errors
    ///
    /// `InvalidRadix` if `radix` is outside `2..=36`.
    pub fn to_string_radix(&self, radix: u8) -> Result<String, SerdeError> {
        self.buf.format_radix(radix, false)
    }

    /// [Apint::to_string_radix] with uppercase digit letters
    pub fn to_string_radix_upper(&self, radix: u8) -> Result<String, SerdeError> {
        self.buf.format_radix(radix, true)
    }

    fn fmt_radix(&self, f: &mut fmt::Formatter<'_>, radix: u8, upper: bool, prefix: &str) -> fmt::Result {
        // cannot fail: the radix comes from the `fmt` impls below
        let s = self.buf.format_radix(radix, upper).unwrap();
        match s.strip_prefix('-') {
            Some(mag) => f.pad_integral(false, prefix, mag),
            None => f.pad_integral(true, prefix, &s),
        }
    }
}

impl FromStr for Apint {
    type Err = SerdeError;

    /// Radix 10 parsing, the `FromStr` counterpart of
    /// [Apint::from_str_radix]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Apint::from_str_radix(s, 10)
    }
}

impl fmt::Display for Apint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 10, false, "")
    }
}

impl fmt::Debug for Apint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::LowerHex for Apint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 16, false, "0x")
    }
}

impl fmt::UpperHex for Apint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 16, true, "0x")
    }
}

impl fmt::Octal for Apint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 8, false, "0o")
    }
}

impl fmt::Binary for Apint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 2, false, "0b")
    }
}
