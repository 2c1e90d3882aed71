use tracing::trace;

use super::interleave;
use crate::common::codec::{encode, Mode};
use crate::common::ec::Tables;
use crate::common::error::QRResult;
use crate::common::metadata::{ECLevel, Version};

// Symbol
//------------------------------------------------------------------------------

/// Version, error correction level and the data codewords encoded for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    version: Version,
    ec_level: ECLevel,
    codewords: Vec<u8>,
}

impl Symbol {
    pub fn version(&self) -> Version {
        self.version
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Data codewords, empty until [`encode_data`] succeeds.
    pub fn codewords(&self) -> &[u8] {
        &self.codewords
    }
}

pub fn create_symbol(version: u8, ec_level: ECLevel) -> QRResult<Symbol> {
    let version = Version::new(version)?;
    Ok(Symbol { version, ec_level, codewords: Vec::new() })
}

/// Encodes `input` in `mode` into the symbol's data codewords. The previous buffer is
/// dropped only once encoding succeeds.
pub fn encode_data(input: &[u8], mode: Mode, symbol: &mut Symbol) -> QRResult<()> {
    symbol.codewords = encode(input, mode, symbol.version, symbol.ec_level)?;
    trace!(version = *symbol.version, codewords = symbol.codewords.len(), "Encoded symbol data");
    Ok(())
}

/// Interleaved data and error correction codewords of an encoded symbol.
pub fn build_final_message(tables: &Tables, symbol: &Symbol) -> QRResult<Vec<u8>> {
    interleave::build_final_message(tables, &symbol.codewords, symbol.version, symbol.ec_level)
}

pub fn release_symbol(symbol: Symbol) {
    trace!(version = *symbol.version, "Releasing symbol");
    drop(symbol);
}
