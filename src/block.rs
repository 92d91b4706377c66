//! The Block header in Bitcoin
//! Reference: https://en.bitcoin.it/wiki/Block_hashing_algorithm

use serde::Serialize;

use crate::error::{DecodeError, Result};
use crate::hash::Hash256;
use crate::reader::Reader;
use crate::writer::encode_int;

/// Serialized header size
pub const HEADER_SIZE: usize = 80;

/// Mainnet genesis block header
pub const GENESIS_HEADER_HEX: &str = "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a29ab5f49ffff001d1dac2b7c";

/// Bitcoin Block Header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockHeader {
    pub version: u32,
    pub prev_block: Hash256,
    pub merkle_root: Hash256,
    pub timestamp: u32,
    /// Compact difficulty target, as stored
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    pub fn decode(reader: &mut Reader<'_>) -> std::result::Result<Self, DecodeError> {
        Ok(BlockHeader {
            version: reader.read_u32_le()?,
            prev_block: reader.read_hash()?,
            merkle_root: reader.read_hash()?,
            timestamp: reader.read_u32_le()?,
            bits: reader.read_u32_le()?,
            nonce: reader.read_u32_le()?,
        })
    }

    /// Decode exactly one header; extra bytes are an error
    pub fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, DecodeError> {
        let mut reader = Reader::new(bytes);
        let header = Self::decode(&mut reader)?;
        reader.finish()?;
        Ok(header)
    }

    pub fn from_hex(header_hex: &str) -> Result<Self> {
        let raw = hex::decode(header_hex.trim())?;
        Ok(Self::from_bytes(&raw)?)
    }

    /// Encode block header to bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE);
        out.extend(encode_int(self.version as u64, 4));
        out.extend_from_slice(self.prev_block.as_wire_bytes());
        out.extend_from_slice(self.merkle_root.as_wire_bytes());
        out.extend(encode_int(self.timestamp as u64, 4));
        out.extend(encode_int(self.bits as u64, 4));
        out.extend(encode_int(self.nonce as u64, 4));
        out
    }

    /// Block hash (double SHA-256 of the header)
    pub fn block_hash(&self) -> Hash256 {
        Hash256::hash(&self.encode())
    }
}
