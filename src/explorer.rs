//! Client for esplora-style block explorer REST APIs (mempool.space, blockstream.info)
//!
//! The explorer hands out hex text; everything is converted to bytes here
//! before it reaches the decoders.

use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, warn};

use crate::block::BlockHeader;
use crate::config::Config;
use crate::display::HeaderReport;
use crate::error::{Error, Result};
use crate::hash::Hash256;
use crate::transaction::{DecodeOptions, Tx};

/// Fetches the body of a GET request as text
pub trait Transport {
    fn get_text(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP transport backed by reqwest
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("txparse/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get_text(&self, url: &str) -> Result<String> {
        debug!(%url, "GET");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}

/// Explorer client; fetches raw transactions and block headers
pub struct Explorer<T = HttpTransport> {
    base_url: String,
    transport: T,
    cache_dir: Option<PathBuf>,
}

impl Explorer<HttpTransport> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Explorer::new(config.api_url(), transport).with_cache_dir(config.cache_dir.clone()))
    }
}

impl<T: Transport> Explorer<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Explorer {
            base_url,
            transport,
            cache_dir: None,
        }
    }

    pub fn with_cache_dir(mut self, cache_dir: Option<PathBuf>) -> Self {
        self.cache_dir = cache_dir;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, path);
        Ok(self.transport.get_text(&url)?.trim().to_string())
    }

    fn cache_path(&self, txid: &str) -> Option<PathBuf> {
        self.cache_dir.as_ref().map(|dir| dir.join(txid))
    }

    fn cached(&self, txid: &str) -> Option<Vec<u8>> {
        let path = self.cache_path(txid)?;
        match fs::read(&path) {
            Ok(raw) => {
                debug!(%txid, path = %path.display(), "cache hit");
                Some(raw)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!(%txid, path = %path.display(), error = %err, "failed to read cached transaction");
                None
            }
        }
    }

    /// Write verified bytes to the cache
    fn store(&self, txid: &str, raw: &[u8]) {
        let Some(path) = self.cache_path(txid) else {
            return;
        };
        let written = path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|_| fs::write(&path, raw));
        if let Err(err) = written {
            warn!(%txid, path = %path.display(), error = %err, "failed to cache transaction");
        }
    }

    fn evict(&self, txid: &str) {
        let Some(path) = self.cache_path(txid) else {
            return;
        };
        if let Err(err) = fs::remove_file(&path) {
            warn!(%txid, path = %path.display(), error = %err, "failed to remove cached transaction");
        }
    }

    fn download(&self, txid: &str) -> Result<Vec<u8>> {
        Ok(hex::decode(self.get(&format!("tx/{txid}/hex"))?)?)
    }

    /// Raw transaction bytes for `txid`, from the cache if present.
    ///
    /// The bytes are not checked against `txid`; [`Explorer::fetch_tx`] does
    /// that and is the only path that writes the cache.
    pub fn tx_bytes(&self, txid: &str) -> Result<Vec<u8>> {
        let txid = normalize_txid(txid)?;
        match self.cached(&txid) {
            Some(raw) => Ok(raw),
            None => self.download(&txid),
        }
    }

    /// Fetch and decode a transaction, checking that it hashes to `txid`.
    ///
    /// A cached copy that fails to decode or hashes to another id is removed
    /// and fetched again. Downloaded bytes are cached only after they verify.
    pub fn fetch_tx(&self, txid: &str, options: DecodeOptions) -> Result<Tx> {
        let expected = normalize_txid(txid)?;

        if let Some(raw) = self.cached(&expected) {
            match verify_tx(&expected, &raw, options) {
                Ok(tx) => return Ok(tx),
                Err(err) => {
                    warn!(txid = %expected, error = %err, "discarding cached transaction");
                    self.evict(&expected);
                }
            }
        }

        let raw = self.download(&expected)?;
        let tx = verify_tx(&expected, &raw, options)?;
        self.store(&expected, &raw);
        Ok(tx)
    }

    /// Hash of the block at `height` on the best chain
    pub fn block_hash(&self, height: u64) -> Result<Hash256> {
        Hash256::from_display_hex(&self.get(&format!("block-height/{height}"))?)
    }

    /// Fetch the 80-byte header of `hash`, checking it hashes back to `hash`
    pub fn block_header(&self, hash: &Hash256) -> Result<BlockHeader> {
        let header = BlockHeader::from_hex(&self.get(&format!("block/{hash}/header"))?)?;

        let actual = header.block_hash();
        if actual != *hash {
            warn!(expected = %hash, %actual, "header does not hash to requested block");
            return Err(Error::BlockHashMismatch {
                expected: hash.to_string(),
                actual: actual.to_string(),
            });
        }

        Ok(header)
    }

    /// Height → hash → header
    pub fn header_at(&self, height: u64) -> Result<HeaderReport> {
        let hash = self.block_hash(height)?;
        let header = self.block_header(&hash)?;
        Ok(HeaderReport {
            height,
            hash,
            header,
        })
    }

    /// Headers for every height in `heights`, fetched lazily in order
    pub fn headers(
        &self,
        heights: RangeInclusive<u64>,
    ) -> impl Iterator<Item = Result<HeaderReport>> + '_ {
        heights.map(move |height| self.header_at(height))
    }
}

/// Decode `raw` and check it hashes to `expected`
fn verify_tx(expected: &str, raw: &[u8], options: DecodeOptions) -> Result<Tx> {
    let tx = Tx::from_bytes_with(raw, options)?;

    let actual = tx.txid().to_string();
    if actual != expected {
        warn!(%expected, %actual, "decoded transaction does not match requested id");
        return Err(Error::TxidMismatch {
            expected: expected.to_string(),
            actual,
        });
    }

    Ok(tx)
}

/// Lowercase a txid after checking it is 64 hex characters
fn normalize_txid(txid: &str) -> Result<String> {
    let txid = txid.trim();
    if txid.len() != 64 || !txid.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidTxid(txid.to_string()));
    }
    Ok(txid.to_lowercase())
}
