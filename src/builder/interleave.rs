use std::ops::Deref;

use tracing::trace;

use crate::common::ec::{Block, Tables};
use crate::common::error::{QRError, QRResult};
use crate::common::metadata::{ECLevel, Version};

// Final message
//------------------------------------------------------------------------------

/// Splits the data codewords into blocks, appends Reed-Solomon codewords to each and
/// interleaves the result into the order the symbol reads them.
pub fn build_final_message(
    tables: &Tables,
    data: &[u8],
    version: Version,
    ec_level: ECLevel,
) -> QRResult<Vec<u8>> {
    let expected = version.data_capacity(ec_level);
    if data.len() != expected {
        return Err(QRError::LengthMismatch { expected, actual: data.len() });
    }

    let ecc_len = version.ecc_per_block(ec_level);
    let blocks = blockify(data, version, ec_level)
        .into_iter()
        .map(|b| Block::new(tables, b, ecc_len))
        .collect::<QRResult<Vec<_>>>()?;
    trace!(blocks = blocks.len(), ecc_len, "Computed error correction blocks");

    let total_len = blocks.iter().map(Block::len).sum();
    let mut res = Vec::with_capacity(total_len);
    res.extend(interleave(&blocks.iter().map(Block::data).collect::<Vec<_>>()));
    res.extend(interleave(&blocks.iter().map(Block::ecc).collect::<Vec<_>>()));

    debug_assert_eq!(res.len(), version.total_codewords(), "Final message doesn't fill symbol");
    Ok(res)
}

pub(crate) fn blockify(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<&[u8]> {
    let (block1_size, block1_count, block2_size, block2_count) =
        version.data_codewords_per_block(ec_level);

    let total_blocks = block1_count + block2_count;
    let total_block1_size = block1_size * block1_count;
    let total_size = total_block1_size + block2_size * block2_count;

    debug_assert!(
        total_size == data.len(),
        "Data len doesn't match total size of blocks: Data len {}, Total block size {}",
        data.len(),
        total_size
    );

    let mut data_blocks = Vec::with_capacity(total_blocks);
    data_blocks.extend(data[..total_block1_size].chunks(block1_size));
    if block2_size > 0 {
        data_blocks.extend(data[total_block1_size..].chunks(block2_size));
    }
    data_blocks
}

// Column wise read of the blocks, shorter blocks dropping out once exhausted
pub(crate) fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
    let max_block_size = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
    let mut res = Vec::with_capacity(total_size);
    for i in 0..max_block_size {
        for b in blocks {
            if i < b.len() {
                res.push(b[i]);
            }
        }
    }
    res
}
