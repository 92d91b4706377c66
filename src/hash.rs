//! 32-byte hashes as they appear on the wire and as explorers display them
//!
//! Transaction ids and block hashes are serialized little-endian but shown
//! big-endian. `Hash256` keeps the wire order and reverses bytes (never hex
//! characters) when asked for the display form.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::Error;

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// A 32-byte hash stored in wire order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    pub fn from_wire_bytes(bytes: [u8; 32]) -> Self {
        Hash256(bytes)
    }

    pub fn from_display_bytes(mut bytes: [u8; 32]) -> Self {
        bytes.reverse();
        Hash256(bytes)
    }

    /// Double SHA-256, the hash Bitcoin uses for ids
    pub fn hash(data: &[u8]) -> Self {
        Hash256(sha256(&sha256(data)))
    }

    /// Parse the big-endian hex form an explorer shows
    pub fn from_display_hex(s: &str) -> Result<Self, Error> {
        let raw = hex::decode(s.trim())?;
        let bytes: [u8; 32] = raw
            .try_into()
            .map_err(|_| Error::InvalidHash(s.to_string()))?;
        Ok(Self::from_display_bytes(bytes))
    }

    pub fn as_wire_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Reversed copy for big-endian display
    pub fn to_display_bytes(&self) -> [u8; 32] {
        let mut bytes = self.0;
        bytes.reverse();
        bytes
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_display_bytes()))
    }
}

impl FromStr for Hash256 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_hex(s)
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
