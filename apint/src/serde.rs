use core::fmt;

use serde::{de, de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

use crate::Apint;

/// A `serde_support` impl
impl Serialize for Apint {
    /// Serializes `self` as a signed radix 10 string in both human
    /// readable and compact forms, equivalent to what `to_string_radix(10)`
    /// produces.
    ///
    /// ```
    /// // Example using the `ron` crate.
    /// use apint::Apint;
    /// use ron::to_string;
    ///
    /// let x = Apint::from(-123456789i64);
    /// assert_eq!(to_string(&x).unwrap(), "\"-123456789\"");
    /// ```
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // cannot fail: 10 is a valid radix
        serializer.serialize_str(&self.to_string_radix(10).unwrap())
    }
}

struct ApintVisitor;

impl<'de> Visitor<'de> for ApintVisitor {
    type Value = Apint;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a signed radix 10 integer string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Apint, E>
    where
        E: de::Error,
    {
        Apint::from_str_radix(v, 10).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Apint {
    fn deserialize<D>(deserializer: D) -> Result<Apint, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ApintVisitor)
    }
}
