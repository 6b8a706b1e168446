//! Typed 32-bit archive name hash

use crate::lookup3::hashlittle;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Hash of an archive entry's original path.
///
/// Displayed and serialized as eight lowercase hex digits (`204f79bf`),
/// which is also the form used as JSON object keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameHash(u32);

/// Error returned when parsing a [`NameHash`] from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNameHashError {
    /// Input was empty or longer than eight hex digits
    #[error("invalid name hash length: {0} digits")]
    InvalidLength(usize),

    /// Input contained a non-hex character
    #[error("invalid name hash digits: {0:?}")]
    InvalidDigits(String),
}

impl NameHash {
    /// Wrap a raw hash value read from an archive table
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Hash raw path bytes
    pub fn from_bytes(path: &[u8]) -> Self {
        Self(hashlittle(path, 0))
    }

    /// Hash a path exactly as given; no case or separator normalisation
    /// is applied.
    pub fn from_path(path: &str) -> Self {
        Self::from_bytes(path.as_bytes())
    }

    /// Raw hash value
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for NameHash {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<NameHash> for u32 {
    fn from(hash: NameHash) -> Self {
        hash.0
    }
}

impl fmt::Display for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl fmt::LowerHex for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl FromStr for NameHash {
    type Err = ParseNameHashError;

    /// Parse from hex, with or without a `0x` prefix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.is_empty() || digits.len() > 8 {
            return Err(ParseNameHashError::InvalidLength(digits.len()));
        }

        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ParseNameHashError::InvalidDigits(s.to_string()))
    }
}

impl Serialize for NameHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NameHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
