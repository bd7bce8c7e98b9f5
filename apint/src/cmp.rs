use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::Apint;

// `PartialEq` is derived on the struct: two normalized buffers are equal
// exactly when their digits are equal.

impl PartialOrd for Apint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Apint {
    /// Total order consistent with the numeric value
    fn cmp(&self, other: &Self) -> Ordering {
        self.buf.cmp_signed(&other.buf)
    }
}

impl Hash for Apint {
    /// Hashes every digit. Equal values are digit-for-digit identical in
    /// normalized form, so this is consistent with equality.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buf.as_digits().hash(state);
    }
}
