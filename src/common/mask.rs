use std::fmt::{Display, Error, Formatter};

use super::error::{QRError, QRResult};
use super::metadata::Color;
use crate::builder::QR;

// Mask pattern
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    Checkerboard = 0b000,
    HorizontalLines = 0b001,
    VerticalLines = 0b010,
    DiagonalLines = 0b011,
    LargeCheckerboard = 0b100,
    Fields = 0b101,
    Diamonds = 0b110,
    Meadow = 0b111,
}

impl MaskPattern {
    pub const ALL: [MaskPattern; 8] = [
        Self::Checkerboard,
        Self::HorizontalLines,
        Self::VerticalLines,
        Self::DiagonalLines,
        Self::LargeCheckerboard,
        Self::Fields,
        Self::Diamonds,
        Self::Meadow,
    ];

    pub fn new(pattern: u8) -> QRResult<Self> {
        Self::ALL.get(pattern as usize).copied().ok_or(QRError::InvalidMaskingPattern(pattern))
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether the module at column `x`, row `y` is inverted.
    pub fn applies(self, x: i16, y: i16) -> bool {
        let (x, y) = (x as i32, y as i32);
        match self {
            Self::Checkerboard => (x + y) & 1 == 0,
            Self::HorizontalLines => y & 1 == 0,
            Self::VerticalLines => x % 3 == 0,
            Self::DiagonalLines => (x + y) % 3 == 0,
            Self::LargeCheckerboard => ((y >> 1) + (x / 3)) & 1 == 0,
            Self::Fields => ((x * y) & 1) + ((x * y) % 3) == 0,
            Self::Diamonds => (((x * y) & 1) + ((x * y) % 3)) & 1 == 0,
            Self::Meadow => (((x + y) & 1) + ((x * y) % 3)) & 1 == 0,
        }
    }
}

impl Display for MaskPattern {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.index())
    }
}


// Penalty
//------------------------------------------------------------------------------

pub fn compute_total_penalty(qr: &QR) -> u32 {
    let adj_pen = compute_adjacent_penalty(qr);
    let blk_pen = compute_block_penalty(qr);
    let fp_pen_h = compute_finder_pattern_penalty(qr, true);
    let fp_pen_v = compute_finder_pattern_penalty(qr, false);
    let bal_pen = compute_balance_penalty(qr);
    adj_pen + blk_pen + fp_pen_h + fp_pen_v + bal_pen
}

// N1: 3 for a run of 5 same colored modules in a row or column, 1 per extra module
fn compute_adjacent_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width();
    let mut cols = vec![(Color::Dark, 0); w];
    for r in 0..w {
        let mut last = Color::Dark;
        let mut consec_row_len = 0;
        for (c, col) in cols.iter_mut().enumerate() {
            let clr = *qr.get(r as i16, c as i16);
            if r == 0 {
                *col = (clr, 0);
            }
            if c == 0 || last != clr {
                last = clr;
                consec_row_len = 0;
            }
            consec_row_len += 1;
            pen += run_penalty(consec_row_len);
            if col.0 != clr {
                col.0 = clr;
                col.1 = 0;
            }
            col.1 += 1;
            pen += run_penalty(col.1);
        }
    }
    pen
}

#[inline]
fn run_penalty(run_len: usize) -> u32 {
    match run_len {
        0..=4 => 0,
        5 => 3,
        _ => 1,
    }
}

// N2: 3 for every 2x2 block of a single color, overlaps counted
fn compute_block_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let clr = *qr.get(r, c);
            if clr == *qr.get(r + 1, c) && clr == *qr.get(r, c + 1) && clr == *qr.get(r + 1, c + 1)
            {
                pen += 3;
            }
        }
    }
    pen
}

// N3: 40 for every 1:1:3:1:1 dark-light pattern with 4 light modules on either side.
// Modules beyond the edge count as light.
fn compute_finder_pattern_penalty(qr: &QR, is_hor: bool) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    static PATTERN: [Color; 7] = [
        Color::Dark,
        Color::Light,
        Color::Dark,
        Color::Dark,
        Color::Dark,
        Color::Light,
        Color::Dark,
    ];
    for i in 0..w {
        let get = |j: i16| -> Color {
            if !(0..w).contains(&j) {
                Color::Light
            } else if is_hor {
                *qr.get(i, j)
            } else {
                *qr.get(j, i)
            }
        };
        for j in 0..w - 6 {
            if (j..j + 7).map(get).ne(PATTERN.iter().copied()) {
                continue;
            }
            if (j - 4..j).all(|x| get(x) == Color::Light) {
                pen += 40;
            }
            if (j + 7..j + 11).all(|x| get(x) == Color::Light) {
                pen += 40;
            }
        }
    }
    pen
}

// N4: 10 for every full 5% the dark ratio deviates from 50%
fn compute_balance_penalty(qr: &QR) -> u32 {
    let dark = qr.count_dark_modules() as i64;
    let w = qr.width() as i64;
    let total = w * w;
    let k = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
    (k.max(0) * 10) as u32
}
