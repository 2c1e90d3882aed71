use super::encoder::Tables;
use crate::common::error::QRResult;

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct Block<'a> {
    data: &'a [u8],
    ecc: Vec<u8>,
}

impl<'a> Block<'a> {
    pub fn new(tables: &Tables, data: &'a [u8], ecc_len: usize) -> QRResult<Self> {
        let ecc = tables.get_error_codewords(data, ecc_len)?;
        Ok(Self { data, ecc })
    }

    // Block length
    pub fn len(&self) -> usize {
        self.data.len() + self.ecc.len()
    }

    pub fn data(&self) -> &[u8] {
        self.data
    }

    pub fn ecc(&self) -> &[u8] {
        &self.ecc
    }
}
