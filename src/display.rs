//! Human-readable and JSON rendering of decoded records

use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeSeq, Serializer};

use crate::block::BlockHeader;
use crate::hash::Hash256;
use crate::transaction::Tx;

const RULE: &str = "--------------------------------------------------";

pub(crate) fn as_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

pub(crate) fn as_hex_list<S: Serializer>(
    items: &[Vec<u8>],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(items.len()))?;
    for item in items {
        seq.serialize_element(&hex::encode(item))?;
    }
    seq.end()
}

impl fmt::Display for Tx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parsed Transaction:")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "TXID: {}", self.txid())?;
        writeln!(f, "Version: 0x{:08x}", self.version)?;
        if self.segwit {
            writeln!(f, "SegWit: true")?;
        }

        writeln!(f, "\nInputs:")?;
        for (i, input) in self.tx_ins.iter().enumerate() {
            writeln!(f, "\nInput {}:", i + 1)?;
            writeln!(f, "  Previous TXID: {}", input.prev_txid)?;
            writeln!(f, "  Previous Vout: {}", input.prev_vout)?;
            writeln!(f, "  Script: 0x{}", hex::encode(&input.script_sig))?;
            writeln!(f, "  Sequence: 0x{:08x}", input.sequence)?;
            for item in &input.witness {
                writeln!(f, "  Witness: 0x{}", hex::encode(item))?;
            }
        }

        writeln!(f, "\nOutputs:")?;
        for (i, output) in self.tx_outs.iter().enumerate() {
            writeln!(f, "\nOutput {}:", i + 1)?;
            writeln!(f, "  Value: {} satoshis", output.value)?;
            writeln!(f, "  Script: 0x{}", hex::encode(&output.script_pubkey))?;
        }

        write!(f, "\nLocktime: 0x{:08x}", self.locktime)
    }
}

/// A fetched header together with where it came from
#[derive(Debug, Clone, Serialize)]
pub struct HeaderReport {
    pub height: u64,
    pub hash: Hash256,
    pub header: BlockHeader,
}

impl fmt::Display for HeaderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.header.encode();
        writeln!(f, "Block Height: {}", self.height)?;
        writeln!(f, "Block Hash: {}", self.hash)?;
        writeln!(f, "Block Header (hex): {}", hex::encode(&raw))?;
        writeln!(f, "Header Length: {} bytes", raw.len())?;
        writeln!(f, "  Version: 0x{:08x}", self.header.version)?;
        writeln!(f, "  Previous Block: {}", self.header.prev_block)?;
        writeln!(f, "  Merkle Root: {}", self.header.merkle_root)?;
        writeln!(f, "  Timestamp: {}", self.header.timestamp)?;
        writeln!(f, "  Bits: 0x{:08x}", self.header.bits)?;
        write!(f, "  Nonce: {}", self.header.nonce)
    }
}
