//! Bounds-checked cursor over a raw byte buffer
//!
//! Every read either consumes exactly the bytes it needs or fails with
//! `DecodeError::OutOfBounds` and leaves the position where it was.

use crate::error::DecodeError;
use crate::hash::Hash256;

/// Forward-only reader over borrowed bytes
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Reader { data, pos: 0 }
    }

    /// Offset of the next unread byte
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn out_of_bounds(&self, needed: u64) -> DecodeError {
        DecodeError::OutOfBounds {
            offset: self.pos,
            needed,
            available: self.remaining(),
        }
    }

    /// Borrow the next `len` bytes
    pub fn read_bytes(&mut self, len: u64) -> Result<&'a [u8], DecodeError> {
        let n = usize::try_from(len)
            .ok()
            .filter(|&n| n <= self.remaining())
            .ok_or_else(|| self.out_of_bounds(len))?;
        let out = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_bytes(N as u64)?);
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Look at the byte `ahead` positions past the cursor without consuming it
    pub fn peek(&self, ahead: usize) -> Option<u8> {
        self.data.get(self.pos + ahead).copied()
    }

    pub fn read_u16_le(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Decode a variable-length integer
    pub fn read_varint(&mut self) -> Result<u64, DecodeError> {
        let start = self.pos;
        let first = self.read_u8()?;

        let value = match first {
            0xfd => self.read_u16_le().map(u64::from),
            0xfe => self.read_u32_le().map(u64::from),
            0xff => self.read_u64_le(),
            n => Ok(n as u64),
        };

        // Report the whole varint as the failed read, not just its payload
        value.map_err(|err| {
            self.pos = start;
            match err {
                DecodeError::OutOfBounds { needed, .. } => self.out_of_bounds(needed + 1),
                other => other,
            }
        })
    }

    /// Read a varint length followed by that many bytes
    pub fn read_var_bytes(&mut self) -> Result<&'a [u8], DecodeError> {
        let start = self.pos;
        let len = self.read_varint()?;
        self.read_bytes(len).inspect_err(|_| self.pos = start)
    }

    /// Read a 32-byte hash in wire order
    pub fn read_hash(&mut self) -> Result<Hash256, DecodeError> {
        Ok(Hash256::from_wire_bytes(self.read_array()?))
    }

    /// Succeeds only if every byte has been consumed
    pub fn finish(&self) -> Result<(), DecodeError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::TrailingData {
                consumed: self.pos,
                remaining: self.remaining(),
            })
        }
    }
}
