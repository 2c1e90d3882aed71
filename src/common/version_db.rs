use super::metadata::{ECLevel, Version};

// Block geometry
//------------------------------------------------------------------------------

/// Reed-Solomon block layout of one (version, error correction level) pair.
///
/// Data codewords are split into `g1_blocks` blocks of `g1_words` codewords followed by
/// `g2_blocks` blocks of `g2_words` codewords. Every block carries `ecc_per_block` error
/// correction codewords.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct BlockSpec {
    pub ecc_per_block: usize,
    pub g1_blocks: usize,
    pub g1_words: usize,
    pub g2_blocks: usize,
    pub g2_words: usize,
}

impl BlockSpec {
    const fn new(ecc_per_block: usize, g1: (usize, usize), g2: (usize, usize)) -> Self {
        Self { ecc_per_block, g1_blocks: g1.0, g1_words: g1.1, g2_blocks: g2.0, g2_words: g2.1 }
    }

    pub fn total_blocks(&self) -> usize {
        self.g1_blocks + self.g2_blocks
    }

    pub fn data_codewords(&self) -> usize {
        self.g1_blocks * self.g1_words + self.g2_blocks * self.g2_words
    }

    pub fn ecc_codewords(&self) -> usize {
        self.total_blocks() * self.ecc_per_block
    }
}

pub fn block_spec(ver: Version, ecl: ECLevel) -> BlockSpec {
    BLOCK_SPECS[*ver as usize - 1][ecl as usize]
}

pub fn alignment_pattern_positions(ver: Version) -> &'static [i16] {
    ALIGNMENT_PATTERN_POSITIONS[*ver as usize - 1]
}

pub fn format_info(ecl: ECLevel, mask: u8) -> u32 {
    debug_assert!(mask < 8, "Invalid mask index {mask}");
    FORMAT_INFOS_QR[ecl as usize * 8 + mask as usize]
}

pub fn version_info(ver: Version) -> Option<u32> {
    match *ver {
        7..=40 => Some(VERSION_INFOS[*ver as usize - 7]),
        _ => None,
    }
}


// Global constants
//------------------------------------------------------------------------------

static BLOCK_SPECS: [[BlockSpec; 4]; 40] = [
    // Version 1
    [
        BlockSpec::new(7, (1, 19), (0, 0)),
        BlockSpec::new(10, (1, 16), (0, 0)),
        BlockSpec::new(13, (1, 13), (0, 0)),
        BlockSpec::new(17, (1, 9), (0, 0)),
    ],
    // Version 2
    [
        BlockSpec::new(10, (1, 34), (0, 0)),
        BlockSpec::new(16, (1, 28), (0, 0)),
        BlockSpec::new(22, (1, 22), (0, 0)),
        BlockSpec::new(28, (1, 16), (0, 0)),
    ],
    // Version 3
    [
        BlockSpec::new(15, (1, 55), (0, 0)),
        BlockSpec::new(26, (1, 44), (0, 0)),
        BlockSpec::new(18, (2, 17), (0, 0)),
        BlockSpec::new(22, (2, 13), (0, 0)),
    ],
    // Version 4
    [
        BlockSpec::new(20, (1, 80), (0, 0)),
        BlockSpec::new(18, (2, 32), (0, 0)),
        BlockSpec::new(26, (2, 24), (0, 0)),
        BlockSpec::new(16, (4, 9), (0, 0)),
    ],
    // Version 5
    [
        BlockSpec::new(26, (1, 108), (0, 0)),
        BlockSpec::new(24, (2, 43), (0, 0)),
        BlockSpec::new(18, (2, 15), (2, 16)),
        BlockSpec::new(22, (2, 11), (2, 12)),
    ],
    // Version 6
    [
        BlockSpec::new(18, (2, 68), (0, 0)),
        BlockSpec::new(16, (4, 27), (0, 0)),
        BlockSpec::new(24, (4, 19), (0, 0)),
        BlockSpec::new(28, (4, 15), (0, 0)),
    ],
    // Version 7
    [
        BlockSpec::new(20, (2, 78), (0, 0)),
        BlockSpec::new(18, (4, 31), (0, 0)),
        BlockSpec::new(18, (2, 14), (4, 15)),
        BlockSpec::new(26, (4, 13), (1, 14)),
    ],
    // Version 8
    [
        BlockSpec::new(24, (2, 97), (0, 0)),
        BlockSpec::new(22, (2, 38), (2, 39)),
        BlockSpec::new(22, (4, 18), (2, 19)),
        BlockSpec::new(26, (4, 14), (2, 15)),
    ],
    // Version 9
    [
        BlockSpec::new(30, (2, 116), (0, 0)),
        BlockSpec::new(22, (3, 36), (2, 37)),
        BlockSpec::new(20, (4, 16), (4, 17)),
        BlockSpec::new(24, (4, 12), (4, 13)),
    ],
    // Version 10
    [
        BlockSpec::new(18, (2, 68), (2, 69)),
        BlockSpec::new(26, (4, 43), (1, 44)),
        BlockSpec::new(24, (6, 19), (2, 20)),
        BlockSpec::new(28, (6, 15), (2, 16)),
    ],
    // Version 11
    [
        BlockSpec::new(20, (4, 81), (0, 0)),
        BlockSpec::new(30, (1, 50), (4, 51)),
        BlockSpec::new(28, (4, 22), (4, 23)),
        BlockSpec::new(24, (3, 12), (8, 13)),
    ],
    // Version 12
    [
        BlockSpec::new(24, (2, 92), (2, 93)),
        BlockSpec::new(22, (6, 36), (2, 37)),
        BlockSpec::new(26, (4, 20), (6, 21)),
        BlockSpec::new(28, (7, 14), (4, 15)),
    ],
    // Version 13
    [
        BlockSpec::new(26, (4, 107), (0, 0)),
        BlockSpec::new(22, (8, 37), (1, 38)),
        BlockSpec::new(24, (8, 20), (4, 21)),
        BlockSpec::new(22, (12, 11), (4, 12)),
    ],
    // Version 14
    [
        BlockSpec::new(30, (3, 115), (1, 116)),
        BlockSpec::new(24, (4, 40), (5, 41)),
        BlockSpec::new(20, (11, 16), (5, 17)),
        BlockSpec::new(24, (11, 12), (5, 13)),
    ],
    // Version 15
    [
        BlockSpec::new(22, (5, 87), (1, 88)),
        BlockSpec::new(24, (5, 41), (5, 42)),
        BlockSpec::new(30, (5, 24), (7, 25)),
        BlockSpec::new(24, (11, 12), (7, 13)),
    ],
    // Version 16
    [
        BlockSpec::new(24, (5, 98), (1, 99)),
        BlockSpec::new(28, (7, 45), (3, 46)),
        BlockSpec::new(24, (15, 19), (2, 20)),
        BlockSpec::new(30, (3, 15), (13, 16)),
    ],
    // Version 17
    [
        BlockSpec::new(28, (1, 107), (5, 108)),
        BlockSpec::new(28, (10, 46), (1, 47)),
        BlockSpec::new(28, (1, 22), (15, 23)),
        BlockSpec::new(28, (2, 14), (17, 15)),
    ],
    // Version 18
    [
        BlockSpec::new(30, (5, 120), (1, 121)),
        BlockSpec::new(26, (9, 43), (4, 44)),
        BlockSpec::new(28, (17, 22), (1, 23)),
        BlockSpec::new(28, (2, 14), (19, 15)),
    ],
    // Version 19
    [
        BlockSpec::new(28, (3, 113), (4, 114)),
        BlockSpec::new(26, (3, 44), (11, 45)),
        BlockSpec::new(26, (17, 21), (4, 22)),
        BlockSpec::new(26, (9, 13), (16, 14)),
    ],
    // Version 20
    [
        BlockSpec::new(28, (3, 107), (5, 108)),
        BlockSpec::new(26, (3, 41), (13, 42)),
        BlockSpec::new(30, (15, 24), (5, 25)),
        BlockSpec::new(28, (15, 15), (10, 16)),
    ],
    // Version 21
    [
        BlockSpec::new(28, (4, 116), (4, 117)),
        BlockSpec::new(26, (17, 42), (0, 0)),
        BlockSpec::new(28, (17, 22), (6, 23)),
        BlockSpec::new(30, (19, 16), (6, 17)),
    ],
    // Version 22
    [
        BlockSpec::new(28, (2, 111), (7, 112)),
        BlockSpec::new(28, (17, 46), (0, 0)),
        BlockSpec::new(30, (7, 24), (16, 25)),
        BlockSpec::new(24, (34, 13), (0, 0)),
    ],
    // Version 23
    [
        BlockSpec::new(30, (4, 121), (5, 122)),
        BlockSpec::new(28, (4, 47), (14, 48)),
        BlockSpec::new(30, (11, 24), (14, 25)),
        BlockSpec::new(30, (16, 15), (14, 16)),
    ],
    // Version 24
    [
        BlockSpec::new(30, (6, 117), (4, 118)),
        BlockSpec::new(28, (6, 45), (14, 46)),
        BlockSpec::new(30, (11, 24), (16, 25)),
        BlockSpec::new(30, (30, 16), (2, 17)),
    ],
    // Version 25
    [
        BlockSpec::new(26, (8, 106), (4, 107)),
        BlockSpec::new(28, (8, 47), (13, 48)),
        BlockSpec::new(30, (7, 24), (22, 25)),
        BlockSpec::new(30, (22, 15), (13, 16)),
    ],
    // Version 26
    [
        BlockSpec::new(28, (10, 114), (2, 115)),
        BlockSpec::new(28, (19, 46), (4, 47)),
        BlockSpec::new(28, (28, 22), (6, 23)),
        BlockSpec::new(30, (33, 16), (4, 17)),
    ],
    // Version 27
    [
        BlockSpec::new(30, (8, 122), (4, 123)),
        BlockSpec::new(28, (22, 45), (3, 46)),
        BlockSpec::new(30, (8, 23), (26, 24)),
        BlockSpec::new(30, (12, 15), (28, 16)),
    ],
    // Version 28
    [
        BlockSpec::new(30, (3, 117), (10, 118)),
        BlockSpec::new(28, (3, 45), (23, 46)),
        BlockSpec::new(30, (4, 24), (31, 25)),
        BlockSpec::new(30, (11, 15), (31, 16)),
    ],
    // Version 29
    [
        BlockSpec::new(30, (7, 116), (7, 117)),
        BlockSpec::new(28, (21, 45), (7, 46)),
        BlockSpec::new(30, (1, 23), (37, 24)),
        BlockSpec::new(30, (19, 15), (26, 16)),
    ],
    // Version 30
    [
        BlockSpec::new(30, (5, 115), (10, 116)),
        BlockSpec::new(28, (19, 47), (10, 48)),
        BlockSpec::new(30, (15, 24), (25, 25)),
        BlockSpec::new(30, (23, 15), (25, 16)),
    ],
    // Version 31
    [
        BlockSpec::new(30, (13, 115), (3, 116)),
        BlockSpec::new(28, (2, 46), (29, 47)),
        BlockSpec::new(30, (42, 24), (1, 25)),
        BlockSpec::new(30, (23, 15), (28, 16)),
    ],
    // Version 32
    [
        BlockSpec::new(30, (17, 115), (0, 0)),
        BlockSpec::new(28, (10, 46), (23, 47)),
        BlockSpec::new(30, (10, 24), (35, 25)),
        BlockSpec::new(30, (19, 15), (35, 16)),
    ],
    // Version 33
    [
        BlockSpec::new(30, (17, 115), (1, 116)),
        BlockSpec::new(28, (14, 46), (21, 47)),
        BlockSpec::new(30, (29, 24), (19, 25)),
        BlockSpec::new(30, (11, 15), (46, 16)),
    ],
    // Version 34
    [
        BlockSpec::new(30, (13, 115), (6, 116)),
        BlockSpec::new(28, (14, 46), (23, 47)),
        BlockSpec::new(30, (44, 24), (7, 25)),
        BlockSpec::new(30, (59, 16), (1, 17)),
    ],
    // Version 35
    [
        BlockSpec::new(30, (12, 121), (7, 122)),
        BlockSpec::new(28, (12, 47), (26, 48)),
        BlockSpec::new(30, (39, 24), (14, 25)),
        BlockSpec::new(30, (22, 15), (41, 16)),
    ],
    // Version 36
    [
        BlockSpec::new(30, (6, 121), (14, 122)),
        BlockSpec::new(28, (6, 47), (34, 48)),
        BlockSpec::new(30, (46, 24), (10, 25)),
        BlockSpec::new(30, (2, 15), (64, 16)),
    ],
    // Version 37
    [
        BlockSpec::new(30, (17, 122), (4, 123)),
        BlockSpec::new(28, (29, 46), (14, 47)),
        BlockSpec::new(30, (49, 24), (10, 25)),
        BlockSpec::new(30, (24, 15), (46, 16)),
    ],
    // Version 38
    [
        BlockSpec::new(30, (4, 122), (18, 123)),
        BlockSpec::new(28, (13, 46), (32, 47)),
        BlockSpec::new(30, (48, 24), (14, 25)),
        BlockSpec::new(30, (42, 15), (32, 16)),
    ],
    // Version 39
    [
        BlockSpec::new(30, (20, 117), (4, 118)),
        BlockSpec::new(28, (40, 47), (7, 48)),
        BlockSpec::new(30, (43, 24), (22, 25)),
        BlockSpec::new(30, (10, 15), (67, 16)),
    ],
    // Version 40
    [
        BlockSpec::new(30, (19, 118), (6, 119)),
        BlockSpec::new(28, (18, 47), (31, 48)),
        BlockSpec::new(30, (34, 24), (34, 25)),
        BlockSpec::new(30, (20, 15), (61, 16)),
    ],
];

static ALIGNMENT_PATTERN_POSITIONS: [&[i16]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

pub static FORMAT_INFOS_QR: [u32; 32] = [
    0b111011111000100, 0b111001011110011, 0b111110110101010, 0b111100010011101,
    0b110011000101111, 0b110001100011000, 0b110110001000001, 0b110100101110110,
    0b101010000010010, 0b101000100100101, 0b101111001111100, 0b101101101001011,
    0b100010111111001, 0b100000011001110, 0b100111110010111, 0b100101010100000,
    0b011010101011111, 0b011000001101000, 0b011111100110001, 0b011101000000110,
    0b010010010110100, 0b010000110000011, 0b010111011011010, 0b010101111101101,
    0b001011010001001, 0b001001110111110, 0b001110011100111, 0b001100111010000,
    0b000011101100010, 0b000001001010101, 0b000110100001100, 0b000100000111011,
];

pub static VERSION_INFOS: [u32; 34] = [
    0x07c94, 0x085bc, 0x09a99,
    0x0a4d3, 0x0bbf6, 0x0c762,
    0x0d847, 0x0e60d, 0x0f928,
    0x10b78, 0x1145d, 0x12a17,
    0x13532, 0x149a6, 0x15683,
    0x168c9, 0x177ec, 0x18ec4,
    0x191e1, 0x1afab, 0x1b08e,
    0x1cc1a, 0x1d33f, 0x1ed75,
    0x1f250, 0x209d5, 0x216f0,
    0x228ba, 0x2379f, 0x24b0b,
    0x2542e, 0x26a64, 0x27541,
    0x28c69,
];
