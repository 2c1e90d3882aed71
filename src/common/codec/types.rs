use std::borrow::Cow;

use encoding_rs::SHIFT_JIS;

use crate::common::error::{QRError, QRResult};
use crate::common::metadata::Version;

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
    Kanji = 0b1000,
    Eci = 0b0111,
}

impl Mode {
    #[inline]
    fn numeric_digit(char: u8) -> u16 {
        debug_assert!(Mode::Numeric.contains(char), "Invalid numeric data: {char}");
        (char - b'0') as u16
    }

    #[inline]
    fn alphanumeric_digit(char: u8) -> u16 {
        debug_assert!(Mode::Alphanumeric.contains(char), "Invalid alphanumeric data: {char}");
        match char {
            b'0'..=b'9' => (char - b'0') as u16,
            b'A'..=b'Z' => (char - b'A' + 10) as u16,
            b' ' => 36,
            b'$' => 37,
            b'%' => 38,
            b'*' => 39,
            b'+' => 40,
            b'-' => 41,
            b'.' => 42,
            b'/' => 43,
            b':' => 44,
            _ => unreachable!("Invalid alphanumeric {char}"),
        }
    }

    // Shift JIS double byte to its 13 bit kanji value
    #[inline]
    fn kanji_value(hi: u8, lo: u8) -> Option<u16> {
        if lo < 0x40 || lo == 0x7F || lo > 0xFC {
            return None;
        }
        let sjw = ((hi as u16) << 8) | lo as u16;
        let offset = match sjw {
            0x8140..=0x9FFC => sjw - 0x8140,
            0xE040..=0xEBBF => sjw - 0xC140,
            _ => return None,
        };
        Some((offset >> 8) * 0xC0 + (offset & 0xFF))
    }

    pub fn encode_chunk(&self, data: &[u8]) -> u16 {
        let len = data.len();
        match self {
            Self::Numeric => {
                debug_assert!(len <= 3, "Data is too long for numeric conversion: {len}");
                data.iter().fold(0_u16, |n, b| n * 10 + Self::numeric_digit(*b))
            }
            Self::Alphanumeric => {
                debug_assert!(len <= 2, "Data is too long for alphanumeric conversion: {len}");
                data.iter().fold(0_u16, |n, b| n * 45 + Self::alphanumeric_digit(*b))
            }
            Self::Byte | Self::Eci => {
                debug_assert!(len == 1, "Data is too long for byte conversion: {len}");
                data[0] as u16
            }
            Self::Kanji => {
                debug_assert!(len == 2, "Kanji chunk must be a double byte: {len}");
                Self::kanji_value(data[0], data[1]).unwrap_or_default()
            }
        }
    }

    // Bit length of a single encoded chunk of `len` bytes
    pub fn chunk_bits(&self, len: usize) -> usize {
        match self {
            Self::Numeric => (len * 10 + 2) / 3,
            Self::Alphanumeric => (len * 11 + 1) / 2,
            Self::Byte | Self::Eci => 8,
            Self::Kanji => 13,
        }
    }

    pub fn chunk_size(&self) -> usize {
        match self {
            Self::Numeric => 3,
            Self::Alphanumeric | Self::Kanji => 2,
            Self::Byte | Self::Eci => 1,
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        match self {
            Self::Numeric => byte.is_ascii_digit(),
            Self::Alphanumeric => {
                byte.is_ascii_digit() || byte.is_ascii_uppercase() || b" $%*+-./:".contains(&byte)
            }
            Self::Byte | Self::Eci => true,
            // Kanji is only checked on double bytes
            Self::Kanji => false,
        }
    }

    pub fn validate(&self, data: &[u8]) -> QRResult<()> {
        let valid = match self {
            Self::Kanji => {
                data.len() % 2 == 0
                    && data.chunks(2).all(|c| Self::kanji_value(c[0], c[1]).is_some())
            }
            _ => data.iter().all(|b| self.contains(*b)),
        };
        if valid {
            Ok(())
        } else {
            Err(QRError::InvalidChar)
        }
    }

    // Most compact single mode which can represent the whole input
    pub fn detect(data: &[u8]) -> Self {
        if data.iter().all(|b| Self::Numeric.contains(*b)) {
            Self::Numeric
        } else if data.iter().all(|b| Self::Alphanumeric.contains(*b)) {
            Self::Alphanumeric
        } else {
            Self::Byte
        }
    }

    pub fn encoded_len(&self, len: usize) -> usize {
        match *self {
            Self::Numeric => (len * 10).div_ceil(3),
            Self::Alphanumeric => (len * 11).div_ceil(2),
            Self::Byte | Self::Eci => len * 8,
            Self::Kanji => (len / 2) * 13,
        }
    }
}

#[cfg(test)]
mod mode_tests {
    use test_case::test_case;

    use super::Mode;
    use super::Mode::*;
    use crate::common::error::QRError;

    #[test]
    fn test_numeric_digit() {
        assert_eq!(Mode::numeric_digit(b'0'), 0);
        assert_eq!(Mode::numeric_digit(b'9'), 9);
    }

    #[test]
    #[should_panic]
    fn test_invalid_numeric_digit() {
        Mode::numeric_digit(b'A');
    }

    #[test]
    fn test_alphanumeric_digit() {
        assert_eq!(Mode::alphanumeric_digit(b'0'), 0);
        assert_eq!(Mode::alphanumeric_digit(b'9'), 9);
        assert_eq!(Mode::alphanumeric_digit(b'A'), 10);
        assert_eq!(Mode::alphanumeric_digit(b'Z'), 35);
        assert_eq!(Mode::alphanumeric_digit(b' '), 36);
        assert_eq!(Mode::alphanumeric_digit(b':'), 44);
    }

    #[test]
    #[should_panic]
    fn test_invalid_alphanumeric_digit() {
        Mode::alphanumeric_digit(b'a');
    }

    #[test]
    fn test_numeric_encoding() {
        assert_eq!(Numeric.encode_chunk("012".as_bytes()), 0b0000001100);
        assert_eq!(Numeric.encode_chunk("345".as_bytes()), 0b0101011001);
        assert_eq!(Numeric.encode_chunk("901".as_bytes()), 0b1110000101);
        assert_eq!(Numeric.encode_chunk("67".as_bytes()), 0b1000011);
        assert_eq!(Numeric.encode_chunk("8".as_bytes()), 0b1000);
    }

    #[test]
    #[should_panic]
    fn test_invalid_numeric_encoding() {
        Numeric.encode_chunk("1234".as_bytes());
    }

    #[test]
    fn test_alphanumeric_encoding() {
        assert_eq!(Alphanumeric.encode_chunk("AC".as_bytes()), 0b00111001110);
        assert_eq!(Alphanumeric.encode_chunk("-4".as_bytes()), 0b11100111001);
        assert_eq!(Alphanumeric.encode_chunk("2".as_bytes()), 0b000010);
    }

    #[test_case(0x93, 0x5F, 0x0D9F)]
    #[test_case(0xE4, 0xAA, 0x1AAA)]
    #[test_case(0x81, 0x40, 0x0000)]
    #[test_case(0xEB, 0xBF, 0x1FFF)]
    fn test_kanji_encoding(hi: u8, lo: u8, exp: u16) {
        assert_eq!(Kanji.encode_chunk(&[hi, lo]), exp);
    }

    #[test]
    fn test_chunk_bits() {
        assert_eq!(Numeric.chunk_bits(3), 10);
        assert_eq!(Numeric.chunk_bits(2), 7);
        assert_eq!(Numeric.chunk_bits(1), 4);
        assert_eq!(Alphanumeric.chunk_bits(2), 11);
        assert_eq!(Alphanumeric.chunk_bits(1), 6);
        assert_eq!(Byte.chunk_bits(1), 8);
        assert_eq!(Kanji.chunk_bits(2), 13);
    }

    #[test]
    fn test_is_numeric() {
        assert!(Numeric.contains(b'0'));
        assert!(Numeric.contains(b'9'));
        assert!(!Numeric.contains(b'A'));
        assert!(!Numeric.contains(b' '));
        assert!(!Numeric.contains(b':'));
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(Alphanumeric.contains(b'0'));
        assert!(Alphanumeric.contains(b'Z'));
        assert!(Alphanumeric.contains(b' '));
        assert!(Alphanumeric.contains(b':'));
        assert!(!Alphanumeric.contains(b'@'));
        assert!(!Alphanumeric.contains(b'a'));
    }

    #[test]
    fn test_validate() {
        assert_eq!(Numeric.validate(b"0123"), Ok(()));
        assert_eq!(Numeric.validate(b"01A3"), Err(QRError::InvalidChar));
        assert_eq!(Alphanumeric.validate(b"AC-42"), Ok(()));
        assert_eq!(Alphanumeric.validate(b"ac-42"), Err(QRError::InvalidChar));
        assert_eq!(Byte.validate(&[0x00, 0xFF]), Ok(()));
        assert_eq!(Kanji.validate(&[0x93, 0x5F, 0xE4, 0xAA]), Ok(()));
        assert_eq!(Kanji.validate(&[0x93, 0x5F, 0xE4]), Err(QRError::InvalidChar));
        assert_eq!(Kanji.validate(&[0x41, 0x42]), Err(QRError::InvalidChar));
        // Trail byte outside 0x40..=0xFC or 0x7F
        assert_eq!(Kanji.validate(&[0x82, 0x20]), Err(QRError::InvalidChar));
        assert_eq!(Kanji.validate(&[0x81, 0x7F]), Err(QRError::InvalidChar));
        assert_eq!(Kanji.validate(&[0x88, 0xFE]), Err(QRError::InvalidChar));
    }

    #[test_case(b"0123456789", Numeric)]
    #[test_case(b"HELLO WORLD", Alphanumeric)]
    #[test_case(b"Hello, world!", Byte)]
    #[test_case(b"12AB", Alphanumeric)]
    fn test_detect(data: &[u8], exp: Mode) {
        assert_eq!(Mode::detect(data), exp);
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(Numeric.encoded_len(3), 10);
        assert_eq!(Numeric.encoded_len(8), 27);
        assert_eq!(Alphanumeric.encoded_len(5), 28);
        assert_eq!(Byte.encoded_len(3), 24);
        assert_eq!(Kanji.encoded_len(4), 26);
    }
}

// Segment
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    mode: Mode,
    // Raw data, Shift JIS for kanji & encoded designator for ECI
    data: Cow<'a, [u8]>,
}

impl<'a> Segment<'a> {
    pub fn new(mode: Mode, data: &'a [u8]) -> QRResult<Self> {
        if mode == Mode::Eci {
            return Err(QRError::InvalidChar);
        }
        mode.validate(data)?;
        Ok(Self { mode, data: Cow::Borrowed(data) })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    // Characters written to the count field
    pub fn char_count(&self) -> usize {
        match self.mode {
            Mode::Kanji => self.data.len() / 2,
            _ => self.data.len(),
        }
    }

    pub fn bit_len(&self, ver: Version) -> usize {
        let encoded_bits = self.mode.encoded_len(self.data.len());
        MODE_INDICATOR_BITS + ver.char_cnt_bits(self.mode) + encoded_bits
    }
}

impl Segment<'static> {
    pub fn kanji_from_str(text: &str) -> QRResult<Self> {
        let (bytes, _, had_errors) = SHIFT_JIS.encode(text);
        if had_errors {
            return Err(QRError::InvalidChar);
        }
        Mode::Kanji.validate(&bytes)?;
        Ok(Self { mode: Mode::Kanji, data: Cow::Owned(bytes.into_owned()) })
    }

    // Assignment number packed as 0xxxxxxx, 10xxxxxx xxxxxxxx or 110xxxxx xxxxxxxx xxxxxxxx
    pub fn eci(designator: u32) -> QRResult<Self> {
        let data = match designator {
            0..=127 => vec![designator as u8],
            128..=16383 => vec![0x80 | (designator >> 8) as u8, designator as u8],
            16384..=999_999 => {
                vec![0xC0 | (designator >> 16) as u8, (designator >> 8) as u8, designator as u8]
            }
            _ => return Err(QRError::InvalidEciDesignator(designator)),
        };
        Ok(Self { mode: Mode::Eci, data: Cow::Owned(data) })
    }
}


// Global constants
//------------------------------------------------------------------------------

pub static MODE_INDICATOR_BITS: usize = 4;

pub static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];
