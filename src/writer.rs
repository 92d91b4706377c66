//! Wire encoding helpers, the inverse of `Reader`

/// Encode a variable-length integer using the smallest width
pub fn encode_varint(n: u64) -> Vec<u8> {
    if n < 0xfd {
        vec![n as u8]
    } else if n <= 0xffff {
        let mut result = vec![0xfd];
        result.extend_from_slice(&(n as u16).to_le_bytes());
        result
    } else if n <= 0xffff_ffff {
        let mut result = vec![0xfe];
        result.extend_from_slice(&(n as u32).to_le_bytes());
        result
    } else {
        let mut result = vec![0xff];
        result.extend_from_slice(&n.to_le_bytes());
        result
    }
}

/// Encode a little-endian integer into `nbytes` bytes.
///
/// High bytes that do not fit are dropped; widths past 8 are zero-padded.
pub fn encode_int(n: u64, nbytes: usize) -> Vec<u8> {
    let bytes = n.to_le_bytes();
    (0..nbytes)
        .map(|i| bytes.get(i).copied().unwrap_or(0))
        .collect()
}

/// Encode a varint length prefix followed by the bytes themselves
pub fn encode_var_bytes(data: &[u8]) -> Vec<u8> {
    let mut result = encode_varint(data.len() as u64);
    result.extend_from_slice(data);
    result
}
