//! Decode raw Bitcoin transactions and block headers
//!
//! The decoders are pure functions over byte slices. The explorer client
//! fetches hex from an esplora-style REST API and hands bytes to them.

pub mod block;
pub mod config;
pub mod display;
pub mod error;
pub mod explorer;
pub mod hash;
pub mod logging;
pub mod reader;
pub mod transaction;
pub mod writer;

pub use error::{ConfigError, DecodeError, Error, Result};

pub use block::BlockHeader;
pub use config::{Config, Network};
pub use display::HeaderReport;
pub use explorer::{Explorer, HttpTransport, Transport};
pub use hash::Hash256;
pub use reader::Reader;
pub use transaction::{DecodeOptions, Tx, TxIn, TxOut};
