//! The Transaction object in Bitcoin
//! Reference: https://en.bitcoin.it/wiki/Transaction

use serde::Serialize;

use crate::display::{as_hex, as_hex_list};
use crate::error::{DecodeError, Result};
use crate::hash::Hash256;
use crate::reader::Reader;
use crate::writer::{encode_int, encode_var_bytes, encode_varint};

/// How `Tx::from_bytes_with` treats the buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Accept the segregated-witness marker, flag and witness stacks
    pub witness: bool,
    /// Fail with `TrailingData` if bytes remain after the locktime
    pub strict: bool,
}

/// Bitcoin Transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tx {
    pub version: u32,
    pub tx_ins: Vec<TxIn>,
    pub tx_outs: Vec<TxOut>,
    pub locktime: u32,
    pub segwit: bool,
}

impl Tx {
    /// Decode a transaction in the legacy (non-witness) layout.
    ///
    /// Fields are read in wire order and any short read aborts the whole
    /// decode. Bytes after the locktime are left in `reader`.
    pub fn decode(reader: &mut Reader<'_>) -> std::result::Result<Self, DecodeError> {
        let version = reader.read_u32_le()?;
        let tx_ins = Self::decode_inputs(reader)?;
        let tx_outs = Self::decode_outputs(reader)?;
        let locktime = reader.read_u32_le()?;

        Ok(Tx {
            version,
            tx_ins,
            tx_outs,
            locktime,
            segwit: false,
        })
    }

    /// Decode a transaction that may use the segregated-witness layout.
    ///
    /// A zero input count is taken as the witness marker and must be followed
    /// by flag `0x01`; legacy transactions decode exactly as `decode` does.
    pub fn decode_with_witness(reader: &mut Reader<'_>) -> std::result::Result<Self, DecodeError> {
        let version = reader.read_u32_le()?;

        // Detect segwit
        let segwit = reader.peek(0) == Some(0x00);
        if segwit {
            reader.read_u8()?;
            let flag = reader.read_u8()?;
            if flag != 0x01 {
                return Err(DecodeError::InvalidWitnessFlag(flag));
            }
        }

        let mut tx_ins = Self::decode_inputs(reader)?;
        let tx_outs = Self::decode_outputs(reader)?;

        if segwit {
            for tx_in in &mut tx_ins {
                let num_items = reader.read_varint()?;
                let mut items = Vec::new();
                for _ in 0..num_items {
                    items.push(reader.read_var_bytes()?.to_vec());
                }
                tx_in.witness = items;
            }
        }

        let locktime = reader.read_u32_le()?;

        Ok(Tx {
            version,
            tx_ins,
            tx_outs,
            locktime,
            segwit,
        })
    }

    fn decode_inputs(reader: &mut Reader<'_>) -> std::result::Result<Vec<TxIn>, DecodeError> {
        let num_inputs = reader.read_varint()?;
        // Counts come from untrusted input, so grow as entries are read
        let mut tx_ins = Vec::new();
        for _ in 0..num_inputs {
            tx_ins.push(TxIn::decode(reader)?);
        }
        Ok(tx_ins)
    }

    fn decode_outputs(reader: &mut Reader<'_>) -> std::result::Result<Vec<TxOut>, DecodeError> {
        let num_outputs = reader.read_varint()?;
        let mut tx_outs = Vec::new();
        for _ in 0..num_outputs {
            tx_outs.push(TxOut::decode(reader)?);
        }
        Ok(tx_outs)
    }

    /// Decode from the start of `bytes`, returning the transaction and the
    /// number of bytes it occupied. Trailing bytes are not an error here.
    pub fn decode_prefix(
        bytes: &[u8],
        options: DecodeOptions,
    ) -> std::result::Result<(Self, usize), DecodeError> {
        let mut reader = Reader::new(bytes);
        let tx = if options.witness {
            Self::decode_with_witness(&mut reader)?
        } else {
            Self::decode(&mut reader)?
        };
        Ok((tx, reader.position()))
    }

    pub fn from_bytes_with(
        bytes: &[u8],
        options: DecodeOptions,
    ) -> std::result::Result<Self, DecodeError> {
        let (tx, consumed) = Self::decode_prefix(bytes, options)?;
        if options.strict && consumed != bytes.len() {
            return Err(DecodeError::TrailingData {
                consumed,
                remaining: bytes.len() - consumed,
            });
        }
        Ok(tx)
    }

    /// Legacy decode that ignores trailing bytes
    pub fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, DecodeError> {
        Self::from_bytes_with(bytes, DecodeOptions::default())
    }

    /// Legacy decode that rejects trailing bytes
    pub fn from_bytes_strict(bytes: &[u8]) -> std::result::Result<Self, DecodeError> {
        Self::from_bytes_with(
            bytes,
            DecodeOptions {
                strict: true,
                ..DecodeOptions::default()
            },
        )
    }

    /// Decode from hex text, the form explorers hand out
    pub fn from_hex(tx_hex: &str, options: DecodeOptions) -> Result<Self> {
        let raw = hex::decode(tx_hex.trim())?;
        Ok(Self::from_bytes_with(&raw, options)?)
    }

    /// Encode transaction to bytes
    pub fn encode(&self, include_witness: bool) -> Vec<u8> {
        let with_witness = self.segwit && include_witness;
        let mut out = Vec::new();

        out.extend(encode_int(self.version as u64, 4));

        // Segwit marker
        if with_witness {
            out.extend_from_slice(&[0x00, 0x01]);
        }

        out.extend(encode_varint(self.tx_ins.len() as u64));
        for tx_in in &self.tx_ins {
            out.extend(tx_in.encode());
        }

        out.extend(encode_varint(self.tx_outs.len() as u64));
        for tx_out in &self.tx_outs {
            out.extend(tx_out.encode());
        }

        if with_witness {
            for tx_in in &self.tx_ins {
                out.extend(encode_varint(tx_in.witness.len() as u64));
                for item in &tx_in.witness {
                    out.extend(encode_var_bytes(item));
                }
            }
        }

        out.extend(encode_int(self.locktime as u64, 4));
        out
    }

    /// Transaction id: double SHA-256 of the witness-stripped encoding
    pub fn txid(&self) -> Hash256 {
        Hash256::hash(&self.encode(false))
    }

    /// Witness transaction id; equals `txid` for legacy transactions
    pub fn wtxid(&self) -> Hash256 {
        Hash256::hash(&self.encode(true))
    }

    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.tx_ins.len() == 1
            && self.tx_ins[0].prev_txid.is_zero()
            && self.tx_ins[0].prev_vout == 0xffffffff
    }

    /// Sum of all output values in satoshis, `None` on overflow
    pub fn total_output_value(&self) -> Option<u64> {
        self.tx_outs
            .iter()
            .try_fold(0u64, |acc, out| acc.checked_add(out.value))
    }
}

/// Transaction Input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxIn {
    pub prev_txid: Hash256,
    pub prev_vout: u32,
    #[serde(serialize_with = "as_hex")]
    pub script_sig: Vec<u8>,
    pub sequence: u32,
    #[serde(serialize_with = "as_hex_list", skip_serializing_if = "Vec::is_empty")]
    pub witness: Vec<Vec<u8>>,
}

impl TxIn {
    pub fn decode(reader: &mut Reader<'_>) -> std::result::Result<Self, DecodeError> {
        let prev_txid = reader.read_hash()?;
        let prev_vout = reader.read_u32_le()?;
        let script_sig = reader.read_var_bytes()?.to_vec();
        let sequence = reader.read_u32_le()?;

        Ok(TxIn {
            prev_txid,
            prev_vout,
            script_sig,
            sequence,
            witness: Vec::new(),
        })
    }

    /// Encode to bytes, without the witness
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(self.prev_txid.as_wire_bytes());
        out.extend(encode_int(self.prev_vout as u64, 4));
        out.extend(encode_var_bytes(&self.script_sig));
        out.extend(encode_int(self.sequence as u64, 4));
        out
    }
}

/// Transaction Output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxOut {
    /// Amount in satoshis
    pub value: u64,
    #[serde(serialize_with = "as_hex")]
    pub script_pubkey: Vec<u8>,
}

impl TxOut {
    pub fn decode(reader: &mut Reader<'_>) -> std::result::Result<Self, DecodeError> {
        let value = reader.read_u64_le()?;
        let script_pubkey = reader.read_var_bytes()?.to_vec();
        Ok(TxOut {
            value,
            script_pubkey,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend(encode_int(self.value, 8));
        out.extend(encode_var_bytes(&self.script_pubkey));
        out
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::Error;
    use proptest::prelude::*;

    const OUTPUTS: &str = "04dd2300000000000017a91472df0f82c4bcfe01a274bd521e5d4c66586b7a5b870000000000000000436a41008914d260fa17bb8e27deb77c826e1d5708589eca8da50003e800040d500b1d8e8ef31e21c99d1db9a6444d3adf1270000000000002185af35f4752e23200000033030000000000001600147a85598118e8afa0ca099917bf2ce7eb756e9c3a44a101000000000016001447862865a0a50a0784b8637b42d76090573b470f";

    /// Mainnet transaction spending output 0 of bc9c2565...b556cb
    pub(crate) fn mainnet_hex() -> String {
        format!(
            "02000000\
             01cb56b529a400837fc69be6962045ff28efba870a6219b07dc310c34265259cbc0000000000ffffffff\
             {OUTPUTS}00000000"
        )
    }

    pub(crate) const MAINNET_TXID: &str =
        "d3f4e8641a3c9578bb167af5aec730bf0223a613bef1b9c49de4dd60150707b5";

    const LEGACY_HEX: &str = "0100000001813f79011acb80925dfe69b3def355fe914bd1d96a3f5f71bf8303c6a989c7d1000000006b483045022100ed81ff192e75a3fd2304004dcadb746fa5e24c5031ccfcf21320b0277457c98f02207a986d955c6e0cb35d446a89d3f56100f4d7f67801c31967743a9c8e10615bed01210349fc4e631e3624a545de3f89f5d8684c7b8138bd94bdd531d2e213bf016b278afeffffff02a135ef01000000001976a914bc3b654dca7e56b04dca18f2566cdaf02e8d9ada88ac99c39800000000001976a9141c4bc762dd5423e332166702cb75f40df79fea1288ac19430600";

    const SEGWIT_HEX: &str = "010000000001026c4224e4d6bab0cfdfd67870e084cda34e42d3544b3c77d310df40831fa4f5061700000023220020fb24ee0fec024ff3ff03c44d16ca523b78fd33ebaab99176e98b3f5e0e78da9dffffffffe8faf73aee5a09b1b678277fc63150dff639c97521e9088d6721a2b995f33664010000002322002083e1adc1eb82945fa99500bcd9df963b0e731524fd8eb25ef205e88d3bd7ab77ffffffff03a0370a00000000001976a914b00ff32bbc990acde3e5ac022e6d4120fb168f1e88ac7f791300000000001976a914128afed7e8d4e6f3a9d2d38ad560c307ebf392ba88ac54115c00000000001976a914c65d16caa1d8c1c46cc1bfac92eff06b02d8afcc88ac04004830450221009d93dc766b4a3417d7daccffe39719cd0344779c19d589d3a078625139a7dcd50220267c1b9b365d0eaa3b036771cbfc994c2b1c5b29e5107f023f036360cb60c8b50147304402206346b5c2bfa243c9cd0c5056abedfadc79e4a2b67b918315fc3faf79dfd12d7602203f729a665afd02ceb4b07898c06c81f0dfc378f66409ed828a4b5fe84f9287550169522102b951c91d97118489d1980ec472d89b5bc98fb98d0bafa17aca238d18a758b8642103d45b78e2a683330c62878e44610a5d1c8d40bd1f261b1110940b1b8a5aecd3e82103796ecd1667be6e20af571c46517e4ecf5e83052df864266658dd7f88e63efa6153ae0400483045022100e396deff2fe6dd6081e35f9dced6e09ea1b8b4830ae322b5d58986596996893d0220485420653c118c1a13b48941166b242077530d2b3cab908abe67af6b96ef2850014730440220171e11f4d6a106464a94e29f46750803a7deb214e6fbe2140ec5d80577dded0e02203483ab0c685f66e17b4afa86ba053732b43ff1ca7654796e72b69bd224bf26c4016952210375e42f77749f92a6b54c8e85fab2209e6807e15a3768c024a5cab01dc301c0282103fd4969521bd2d0f8e147c16655ae9c29dc48cb4f124b7a6398db78b1cbc878a221036bc18f387d1e4ba80492854cee639bd4ab6e3a310d9faa6f17350bbdc4c029d053ae25680a00";

    const COINBASE_HEX: &str = "01000000010000000000000000000000000000000000000000000000000000000000000000ffffffff5e03d71b07254d696e656420627920416e74506f6f6c20626a31312f4542312f4144362f43205914293101fabe6d6d678e2c8c34afc36896e7d9402824ed38e856676ee94bfdb0c6c4bcd8b2e5666a0400000000000000c7270000a5e00e00ffffffff01faf20b58000000001976a914338c84849423992471bffb1a54a8d9b1d69dc28a88ac00000000";

    #[test]
    fn test_example_transaction() {
        // Previous txid padded to 32 bytes so vout reads bc000000
        let raw = hex::decode(format!(
            "02000000\
             01cb56b529a400837fc69be6962045ff28efba870a6219b07dc310c34265259c59bc00000000ffffffff\
             {OUTPUTS}00000000"
        ))
        .unwrap();
        let tx = Tx::from_bytes_strict(&raw).unwrap();

        assert_eq!(tx.version, 2);
        assert_eq!(tx.tx_ins.len(), 1);
        assert_eq!(tx.tx_ins[0].prev_vout, 188);
        assert!(tx.tx_ins[0].script_sig.is_empty());
        assert_eq!(tx.tx_ins[0].sequence, 0xffffffff);

        let shown = tx.tx_ins[0].prev_txid.to_string();
        assert!(shown.starts_with("59"));
        assert!(shown.ends_with("cb"));

        assert_eq!(tx.tx_outs.len(), 4);
        assert_eq!(tx.locktime, 0);
    }

    #[test]
    fn test_mainnet_decode() {
        let raw = hex::decode(mainnet_hex()).unwrap();
        assert_eq!(raw.len(), 221);
        let tx = Tx::from_bytes_strict(&raw).unwrap();

        assert_eq!(tx.version, 2);
        assert!(!tx.segwit);

        assert_eq!(tx.tx_ins.len(), 1);
        assert_eq!(
            tx.tx_ins[0].prev_txid.to_string(),
            "bc9c256542c310c37db019620a87baef28ff452096e69bc67f8300a429b556cb"
        );
        assert_eq!(tx.tx_ins[0].prev_vout, 0);

        let values: Vec<u64> = tx.tx_outs.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![9181, 0, 819, 106820]);
        let script_lens: Vec<usize> = tx.tx_outs.iter().map(|o| o.script_pubkey.len()).collect();
        assert_eq!(script_lens, vec![23, 67, 22, 22]);
        assert_eq!(tx.tx_outs[1].script_pubkey[0], 0x6a); // OP_RETURN
        assert_eq!(tx.total_output_value(), Some(116820));

        assert_eq!(tx.txid().to_string(), MAINNET_TXID);
        assert_eq!(tx.wtxid(), tx.txid());

        // Roundtrip encoding
        assert_eq!(tx.encode(true), raw);
    }

    #[test]
    fn test_legacy_decode() {
        // Example from Programming Bitcoin Chapter 5
        let raw = hex::decode(LEGACY_HEX).unwrap();
        let tx = Tx::from_bytes(&raw).unwrap();

        assert_eq!(tx.version, 1);
        assert_eq!(tx.tx_ins.len(), 1);
        assert_eq!(
            tx.tx_ins[0].prev_txid.to_string(),
            "d1c789a9c60383bf715f3f6ad9d14b91fe55f3deb369fe5d9280cb1a01793f81"
        );
        assert_eq!(tx.tx_ins[0].prev_vout, 0);
        assert_eq!(tx.tx_ins[0].script_sig.len(), 0x6b);
        assert_eq!(tx.tx_ins[0].sequence, 0xfffffffe);

        assert_eq!(tx.tx_outs.len(), 2);
        assert_eq!(tx.tx_outs[0].value, 32454049);
        assert_eq!(tx.tx_outs[1].value, 10011545);
        assert_eq!(tx.locktime, 410393);

        assert_eq!(
            tx.txid().to_string(),
            "452c629d67e41baec3ac6f04fe744b4b9617f8f859c63b3002f8684e7a4fee03"
        );
        assert_eq!(tx.encode(false), raw);
    }

    #[test]
    fn test_segwit_decode() {
        let raw = hex::decode(SEGWIT_HEX).unwrap();
        let options = DecodeOptions {
            witness: true,
            strict: true,
        };
        let tx = Tx::from_bytes_with(&raw, options).unwrap();

        assert_eq!(tx.version, 1);
        assert!(tx.segwit);

        assert_eq!(tx.tx_ins.len(), 2);
        assert_eq!(tx.tx_ins[0].witness.len(), 4);
        assert_eq!(tx.tx_ins[1].witness.len(), 4);
        assert!(tx.tx_ins[0].witness[0].is_empty());

        assert_eq!(tx.tx_outs.len(), 3);
        assert_eq!(tx.tx_outs[0].value, 669600);
        assert_eq!(tx.tx_outs[1].value, 1276287);
        assert_eq!(tx.tx_outs[2].value, 6033748);

        assert_eq!(
            tx.txid().to_string(),
            "3ecf9b3d965cfaa2c472f09b5f487fbd838e4e1f861e3542c541d39c5cb7bc25"
        );
        assert_eq!(
            tx.wtxid().to_string(),
            "bd72bea73929e5284527fc8c869b3f9431f9ef5386ed35724fbcbf67b38384d4"
        );

        assert_eq!(tx.encode(true), raw);
    }

    #[test]
    fn test_segwit_bytes_under_legacy_rules() {
        // The marker reads as zero inputs and the rest no longer lines up
        let raw = hex::decode(SEGWIT_HEX).unwrap();
        assert_eq!(
            Tx::from_bytes_strict(&raw),
            Err(DecodeError::TrailingData {
                consumed: 226,
                remaining: 546
            })
        );

        let tx = Tx::from_bytes(&raw).unwrap();
        assert!(tx.tx_ins.is_empty());
        assert!(!tx.segwit);
    }

    #[test]
    fn test_witness_mode_on_legacy_tx() {
        let raw = hex::decode(LEGACY_HEX).unwrap();
        let options = DecodeOptions {
            witness: true,
            strict: true,
        };
        assert_eq!(
            Tx::from_bytes_with(&raw, options).unwrap(),
            Tx::from_bytes(&raw).unwrap()
        );
    }

    #[test]
    fn test_invalid_witness_flag() {
        let raw = hex::decode("01000000000201").unwrap();
        let mut reader = Reader::new(&raw);
        assert_eq!(
            Tx::decode_with_witness(&mut reader),
            Err(DecodeError::InvalidWitnessFlag(0x02))
        );
    }

    #[test]
    fn test_truncated_never_partial() {
        let raw = hex::decode(mainnet_hex()).unwrap();
        for len in 0..raw.len() {
            let err = Tx::from_bytes(&raw[..len]).unwrap_err();
            assert!(
                matches!(err, DecodeError::OutOfBounds { .. }),
                "prefix of {len} bytes gave {err:?}"
            );
        }

        let raw = hex::decode(SEGWIT_HEX).unwrap();
        let options = DecodeOptions {
            witness: true,
            strict: false,
        };
        for len in (0..raw.len()).step_by(7) {
            assert!(matches!(
                Tx::from_bytes_with(&raw[..len], options),
                Err(DecodeError::OutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn test_oversized_buffer() {
        let mut raw = hex::decode(mainnet_hex()).unwrap();
        raw.extend_from_slice(&[0xde, 0xad, 0xbe]);

        // Lenient decode still succeeds
        let tx = Tx::from_bytes(&raw).unwrap();
        assert_eq!(tx.txid().to_string(), MAINNET_TXID);

        let (_, consumed) = Tx::decode_prefix(&raw, DecodeOptions::default()).unwrap();
        assert_eq!(consumed, 221);

        assert_eq!(
            Tx::from_bytes_strict(&raw),
            Err(DecodeError::TrailingData {
                consumed: 221,
                remaining: 3
            })
        );
    }

    #[test]
    fn test_script_length_past_end() {
        // One input whose script claims 0x6b bytes with only 2 present
        let raw = hex::decode(format!("0100000001{}000000006b4830", "00".repeat(32))).unwrap();
        assert_eq!(
            Tx::from_bytes(&raw),
            Err(DecodeError::OutOfBounds {
                offset: 42,
                needed: 0x6b,
                available: 2
            })
        );
    }

    #[test]
    fn test_is_coinbase() {
        let raw = hex::decode(LEGACY_HEX).unwrap();
        assert!(!Tx::from_bytes(&raw).unwrap().is_coinbase());

        let raw = hex::decode(COINBASE_HEX).unwrap();
        let mut tx = Tx::from_bytes_strict(&raw).unwrap();
        assert!(tx.is_coinbase());
        assert_eq!(tx.tx_outs[0].value, 1477178106);

        // Make not coinbase by deleting inputs
        tx.tx_ins.clear();
        assert!(!tx.is_coinbase());
    }

    #[test]
    fn test_from_hex() {
        let tx = Tx::from_hex(&format!("  {}\n", mainnet_hex()), DecodeOptions::default()).unwrap();
        assert_eq!(tx.tx_outs.len(), 4);

        let err = Tx::from_hex("0200000g", DecodeOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Hex(_)));

        let err = Tx::from_hex("0200", DecodeOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Decode(DecodeError::OutOfBounds { .. })));
    }

    #[test]
    fn test_total_output_value_overflow() {
        let out = TxOut {
            value: u64::MAX,
            script_pubkey: Vec::new(),
        };
        let tx = Tx {
            version: 1,
            tx_ins: vec![],
            tx_outs: vec![out.clone(), out],
            locktime: 0,
            segwit: false,
        };
        assert_eq!(tx.total_output_value(), None);
    }

    #[test]
    fn test_three_byte_counts_and_lengths() {
        let tx = Tx {
            version: 1,
            tx_ins: vec![TxIn {
                prev_txid: Hash256::from_wire_bytes([0x11; 32]),
                prev_vout: 3,
                script_sig: vec![0x51; 0xfd],
                sequence: 0xffff_fffe,
                witness: Vec::new(),
            }],
            tx_outs: vec![
                TxOut {
                    value: 1,
                    script_pubkey: Vec::new(),
                };
                0xfd
            ],
            locktime: 0,
            segwit: false,
        };

        let raw = tx.encode(false);
        // Script length after version, input count, outpoint
        assert_eq!(&raw[41..44], &[0xfd, 0xfd, 0x00]);
        assert_eq!(Tx::from_bytes_strict(&raw).unwrap(), tx);
    }

    fn tx_in_strategy() -> impl Strategy<Value = TxIn> {
        (
            any::<[u8; 32]>(),
            any::<u32>(),
            prop::collection::vec(any::<u8>(), 0..300),
            any::<u32>(),
        )
            .prop_map(|(hash, prev_vout, script_sig, sequence)| TxIn {
                prev_txid: Hash256::from_wire_bytes(hash),
                prev_vout,
                script_sig,
                sequence,
                witness: Vec::new(),
            })
    }

    fn tx_out_strategy() -> impl Strategy<Value = TxOut> {
        (any::<u64>(), prop::collection::vec(any::<u8>(), 0..300)).prop_map(
            |(value, script_pubkey)| TxOut {
                value,
                script_pubkey,
            },
        )
    }

    fn tx_strategy() -> impl Strategy<Value = Tx> {
        (
            any::<u32>(),
            prop::collection::vec(tx_in_strategy(), 0..4),
            prop::collection::vec(tx_out_strategy(), 0..4),
            any::<u32>(),
        )
            .prop_map(|(version, tx_ins, tx_outs, locktime)| Tx {
                version,
                tx_ins,
                tx_outs,
                locktime,
                segwit: false,
            })
    }

    proptest! {
        #[test]
        fn legacy_encoding_decodes_to_same_tx(tx in tx_strategy()) {
            let raw = tx.encode(false);
            prop_assert_eq!(Tx::from_bytes_strict(&raw), Ok(tx));
        }

        #[test]
        fn every_strict_prefix_is_out_of_bounds(tx in tx_strategy()) {
            let raw = tx.encode(false);
            for len in 0..raw.len() {
                let result = Tx::from_bytes(&raw[..len]);
                prop_assert!(
                    matches!(result, Err(DecodeError::OutOfBounds { .. })),
                    "prefix of {} bytes gave {:?}",
                    len,
                    result
                );
            }
        }
    }
}
