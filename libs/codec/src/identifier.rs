//! The 128-bit identifier value behind both textual forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ulid::Ulid;

use crate::codec::{self, BASE32_LEN, MAX_TIMESTAMP_MS, RANDOM_BITS};
use crate::CodecError;

const RANDOM_MASK: u128 = (1 << RANDOM_BITS) - 1;

/// A 128-bit identifier: a 48-bit millisecond timestamp followed by 80 random
/// bits.
///
/// Displays as 26 Crockford Base32 symbols; `{:x}` gives the 32-digit hex
/// form. Ordering follows the numeric value, which matches the lexicographic
/// order of the Base32 form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(u128);

impl Identifier {
    /// The all-zero identifier.
    pub const NIL: Self = Self(0);

    /// Creates an identifier from its numeric value.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Creates an identifier from a timestamp and a random part.
    ///
    /// Bits above 48 in the timestamp and above 80 in the random part are
    /// discarded.
    #[must_use]
    pub const fn from_parts(timestamp_ms: u64, random: u128) -> Self {
        let time = (timestamp_ms & MAX_TIMESTAMP_MS) as u128;
        Self((time << RANDOM_BITS) | (random & RANDOM_MASK))
    }

    /// Parses an identifier from hex. See [`codec::encode`] for the accepted
    /// input.
    pub fn from_hex(hex: &str) -> Result<Self, CodecError> {
        codec::parse_hex(hex).map(Self)
    }

    /// Parses an identifier from its 26-symbol Base32 form.
    pub fn from_base32(id: &str) -> Result<Self, CodecError> {
        codec::parse_base32(id).map(Self)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u128 {
        self.0
    }

    /// Returns the timestamp portion in milliseconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp_ms(&self) -> u64 {
        (self.0 >> RANDOM_BITS) as u64
    }

    /// Returns the 80-bit random portion.
    #[must_use]
    pub const fn random(&self) -> u128 {
        self.0 & RANDOM_MASK
    }

    /// Formats the identifier as 26 Base32 symbols.
    #[must_use]
    pub fn to_base32(&self) -> String {
        codec::to_base32(self.0)
    }

    /// Formats the identifier as 32 lowercase hex digits.
    #[must_use]
    pub fn to_hex(&self) -> String {
        codec::to_hex(self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base32())
    }
}

impl fmt::LowerHex for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for Identifier {
    type Err = CodecError;

    /// Parses the Base32 form, or hex when the input is not 26 characters.
    ///
    /// Exactly 26 hex digits are read as (lowercase) Base32, not as hex; use
    /// [`Identifier::from_hex`] when the input is known to be hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() == BASE32_LEN {
            Self::from_base32(s)
        } else {
            Self::from_hex(s)
        }
    }
}

impl From<u128> for Identifier {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<Identifier> for u128 {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl From<Ulid> for Identifier {
    fn from(ulid: Ulid) -> Self {
        Self(ulid.0)
    }
}

impl From<Identifier> for Ulid {
    fn from(id: Identifier) -> Self {
        Ulid(id.0)
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_base32())
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_base32(&s).map_err(serde::de::Error::custom)
    }
}
