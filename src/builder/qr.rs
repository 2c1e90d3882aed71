use std::ops::Deref;

use tracing::trace;

use crate::common::bitstream::BitStream;
use crate::common::error::{QRError, QRResult};
use crate::common::iter::EncRegionIter;
use crate::common::mask::{compute_total_penalty, MaskPattern};
use crate::common::metadata::{
    Color, ECLevel, Version, FORMAT_INFO_BIT_LEN, FORMAT_INFO_COORDS_QR_MAIN,
    FORMAT_INFO_COORDS_QR_SIDE, VERSION_INFO_BIT_LEN,
};
use crate::common::version_db::format_info;

// Module
//------------------------------------------------------------------------------

/// A single cell of the symbol, tagged with the region that owns it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Version(Color),
    Format(Color),
    Data(Color),
}

impl Module {
    /// Ternary value handed to renderers: light 0, dark 1, unset 2.
    pub fn value(&self) -> u8 {
        match self {
            Module::Empty => 2,
            _ => self.select(0, 1),
        }
    }
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Version(c) => c,
            Module::Format(c) => c,
            Module::Data(c) => c,
        }
    }
}

// QR symbol
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QR {
    grid: Vec<Module>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mask: Option<MaskPattern>,
}

impl QR {
    pub(crate) fn new(ver: Version, ecl: ECLevel) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::Empty; w * w], w, ver, ecl, mask: None }
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    /// Row major module values, light 0, dark 1, unset 2.
    pub fn to_ternary(&self) -> Vec<u8> {
        self.grid.iter().map(Module::value).collect()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Version(Color::Dark) => 'v',
                    Module::Version(Color::Light) => 'V',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r as usize) * self.w + c as usize
    }

    /// Module at row `r`, column `c`. Negative indices count from the far edge.
    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub(crate) fn set(&mut self, r: i16, c: i16, module: Module) {
        let index = self.coord_to_index(r, c);
        self.grid[index] = module;
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // Draws the 7x7 finder and its light separator on the inner sides
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (4 | -4, _) | (_, 4 | -4) => Module::Func(Color::Light),
                        (3 | -3, _) | (_, 3 | -3) => Module::Func(Color::Dark),
                        (2 | -2, _) | (_, 2 | -2) => Module::Func(Color::Light),
                        _ => Module::Func(Color::Dark),
                    },
                );
            }
        }
    }
}


// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_pattern(&mut self) {
        let last = self.w as i16 - 9;
        self.draw_line(6, 8, 6, last);
        self.draw_line(8, 6, last, 6);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                self.set(r1, j, Module::Func(Color::from(j & 1 == 0)));
            }
        } else {
            for i in r1..=r2 {
                self.set(i, c1, Module::Func(Color::from(i & 1 == 0)));
            }
        }
    }
}


// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self) {
        let poses = self.ver.alignment_pattern();
        for &r in poses {
            for &c in poses {
                self.draw_alignment_pattern_at(r, c)
            }
        }
    }

    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        let w = self.w as i16;
        // Centres overlapping the finder patterns
        if (r == 6 && (c == 6 || c - w == -7)) || (r - w == -7 && c == 6) {
            return;
        }
        for i in -2..=2 {
            for j in -2..=2 {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (-2 | 2, _) | (_, -2 | 2) | (0, 0) => Module::Func(Color::Dark),
                        _ => Module::Func(Color::Light),
                    },
                )
            }
        }
    }
}


// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
        self.draw_alignment_patterns();
        // Dark module above the bottom left finder
        self.set(-8, 8, Module::Func(Color::Dark));
    }
}

#[cfg(test)]
mod all_function_patterns_test {
    use crate::builder::QR;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_all_function_patterns() {
        let mut qr = QR::new(Version::new(3).unwrap(), ECLevel::L);
        qr.draw_all_function_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.............Ffffffff\n\
             fFFFFFfF.............FfFFFFFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFfffFfF.............FfFfffFf\n\
             fFFFFFfF.............FfFFFFFf\n\
             fffffffFfFfFfFfFfFfFfFfffffff\n\
             FFFFFFFF.............FFFFFFFF\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f......................\n\
             ......F......................\n\
             ......f.............fffff....\n\
             FFFFFFFFf...........fFFFf....\n\
             fffffffF............fFfFf....\n\
             fFFFFFfF............fFFFf....\n\
             fFfffFfF............fffff....\n\
             fFfffFfF.....................\n\
             fFfffFfF.....................\n\
             fFFFFFfF.....................\n\
             fffffffF.....................\n"
        );
    }
}

// Format & version info
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn draw_format_info(&mut self, mask: MaskPattern) {
        let info = format_info(self.ecl, mask.index());
        for coords in [&FORMAT_INFO_COORDS_QR_MAIN, &FORMAT_INFO_COORDS_QR_SIDE] {
            for (i, &(r, c)) in coords.iter().enumerate() {
                let bit = (info >> (FORMAT_INFO_BIT_LEN - 1 - i)) & 1 == 1;
                self.set(r, c, Module::Format(Color::from(bit)));
            }
        }
    }

    // Bit i sits at offset i / 3 along the long side, i % 3 across
    pub(crate) fn draw_version_info(&mut self) {
        let Some(info) = self.ver.info() else {
            return;
        };
        let w = self.w as i16;
        for i in 0..VERSION_INFO_BIT_LEN {
            let module = Module::Version(Color::from((info >> i) & 1 == 1));
            let (long, short) = ((i / 3) as i16, (i % 3) as i16);
            self.set(long, w - 11 + short, module);
            self.set(w - 11 + short, long, module);
        }
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl QR {
    /// Places `stream` MSB first along the zigzag scan, XORed with `mask`, then fills the
    /// remainder bits.
    pub(crate) fn draw_encoding_region(
        &mut self,
        stream: &[u8],
        mask: MaskPattern,
    ) -> QRResult<()> {
        let expected = self.ver.total_codewords();
        if stream.len() != expected {
            return Err(QRError::LengthMismatch { expected, actual: stream.len() });
        }

        let mut coords = EncRegionIter::new(self.ver);
        for bit in BitStream::from(stream) {
            let (r, c) = self.next_empty(&mut coords).ok_or(QRError::OutOfBounds)?;
            self.set(r, c, Module::Data(Color::from(bit ^ mask.applies(c, r))));
        }

        let mut remainder = 0;
        while let Some((r, c)) = self.next_empty(&mut coords) {
            self.set(r, c, Module::Data(Color::from(mask.applies(c, r))));
            remainder += 1;
        }
        debug_assert_eq!(remainder, self.ver.remainder_bits(), "Unexpected remainder bit count");
        debug_assert!(!self.grid.contains(&Module::Empty), "Empty module left after placement");

        self.mask = Some(mask);
        Ok(())
    }

    fn next_empty(&self, coords: &mut EncRegionIter) -> Option<(i16, i16)> {
        coords.find(|&(r, c)| matches!(self.get(r, c), Module::Empty))
    }
}

// Matrix construction & mask selection
//------------------------------------------------------------------------------

/// Builds the finished symbol for an interleaved codeword `stream`.
///
/// With `mask` unset every pattern is tried and the one with the lowest penalty is kept,
/// the lowest index winning ties.
pub fn build_matrix(
    ver: Version,
    ecl: ECLevel,
    mask: Option<MaskPattern>,
    stream: &[u8],
) -> QRResult<QR> {
    let mut base = QR::new(ver, ecl);
    base.draw_all_function_patterns();
    base.draw_version_info();

    let build = |mask: MaskPattern| -> QRResult<QR> {
        let mut qr = base.clone();
        qr.draw_format_info(mask);
        qr.draw_encoding_region(stream, mask)?;
        Ok(qr)
    };

    if let Some(mask) = mask {
        return build(mask);
    }

    let mut best = build(MaskPattern::ALL[0])?;
    let mut best_pen = compute_total_penalty(&best);
    trace!(mask = %MaskPattern::ALL[0], penalty = best_pen, "Scored mask");
    for &mask in &MaskPattern::ALL[1..] {
        let qr = build(mask)?;
        let pen = compute_total_penalty(&qr);
        trace!(mask = %mask, penalty = pen, "Scored mask");
        if pen < best_pen {
            best = qr;
            best_pen = pen;
        }
    }
    Ok(best)
}
