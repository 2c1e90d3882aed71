use std::sync::OnceLock;

use tracing::trace;

use super::division::poly_div;
use super::galois::GaloisField;
use super::generator::GeneratorPolynomials;
use crate::common::error::{QRError, QRResult};

// Error correction tables
//------------------------------------------------------------------------------

/// Immutable GF(256) and generator polynomial tables shared by every encode.
///
/// Build it once with [`initialize_tables`] (or borrow the process wide instance from
/// [`Tables::shared`]) and pass it by reference. The tables are never mutated after
/// construction, so a single instance can serve concurrent encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    gf: GaloisField,
    generators: GeneratorPolynomials,
}

pub fn initialize_tables() -> Tables {
    let gf = GaloisField::new();
    let generators = GeneratorPolynomials::new(&gf);
    Tables { gf, generators }
}

impl Tables {
    pub fn shared() -> &'static Tables {
        static SHARED: OnceLock<Tables> = OnceLock::new();
        SHARED.get_or_init(initialize_tables)
    }

    pub fn field(&self) -> &GaloisField {
        &self.gf
    }

    pub fn generators(&self) -> &GeneratorPolynomials {
        &self.generators
    }

    /// ECC: Error Correction Codewords of one block.
    ///
    /// Divides `message * x^ecc_count` by the generator of degree `ecc_count`; the
    /// remainder appended to the message forms a Reed-Solomon codeword.
    pub fn get_error_codewords(&self, message: &[u8], ecc_count: usize) -> QRResult<Vec<u8>> {
        if message.is_empty() {
            return Err(QRError::EmptyData);
        }
        let gen_poly = self.generators.get(ecc_count)?;
        trace!(msg_len = message.len(), ecc_count, "Computing error correction codewords");
        poly_div(&self.gf, message, gen_poly, message.len() - 1, ecc_count, ecc_count)
    }
}

impl Default for Tables {
    fn default() -> Self {
        initialize_tables()
    }
}
