//! # qrsmith
//!
//! A Rust library for encoding QR code symbols (ISO/IEC 18004, versions 1 to 40) with
//! Reed-Solomon error correction.
//!
//! ## Features
//!
//! - **Data encoding**: Numeric, alphanumeric, byte and Kanji segments with optional ECI headers
//! - **Reed-Solomon error correction**: GF(256) tables built once and shared by reference
//! - **Matrix construction**: Function patterns, format & version info, zigzag data placement
//! - **Mask selection**: All eight masks scored with the four ISO penalty rules
//!
//! The finished symbol is a grid of modules. Turning it into pixels is left to the caller:
//! [`QR::to_ternary`] yields the row major grid as 0 (light) and 1 (dark).
//!
//! ## Quick Start
//!
//! ```rust
//! use qrsmith::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Smallest version that fits, EC level M, best mask
//! let qr = QRBuilder::new(b"Hello, World!").build()?;
//! assert_eq!(qr.width(), 21);
//! # Ok(())
//! # }
//! ```
//!
//! ### Full configuration
//!
//! ```rust
//! use qrsmith::{ECLevel, MaskPattern, Mode, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new(b"HELLO WORLD")
//!     .version(Version::new(2)?)      // if not provided, finds smallest version to fit data
//!     .ec_level(ECLevel::Q)           // if not provided, defaults to ECLevel::M
//!     .mode(Mode::Alphanumeric)       // if not provided, splits data into the most compact modes
//!     .mask(MaskPattern::new(3)?)     // if not provided, finds best mask by penalty score
//!     .build()?;
//! assert_eq!(qr.mask(), Some(MaskPattern::DiagonalLines));
//! # Ok(())
//! # }
//! ```
//!
//! ### Step by step
//!
//! ```rust
//! use qrsmith::{
//!     build_final_message, build_matrix, create_symbol, encode_data, initialize_tables,
//!     release_symbol, ECLevel, Mode,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tables = initialize_tables();
//! let mut symbol = create_symbol(1, ECLevel::H)?;
//! encode_data(b"01234567", Mode::Numeric, &mut symbol)?;
//! let stream = build_final_message(&tables, &symbol)?;
//! let qr = build_matrix(symbol.version(), symbol.ec_level(), None, &stream)?;
//! release_symbol(symbol);
//! assert!(qr.to_ternary().iter().all(|&m| m < 2));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error correction levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction

pub mod builder;
pub(crate) mod common;

pub use builder::{
    build_final_message, build_matrix, create_symbol, encode_data, release_symbol, Module,
    QRBuilder, Symbol, QR,
};
pub use common::codec::Mode;
pub use common::ec::{initialize_tables, GaloisField, GeneratorPolynomials, Tables};
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{Color, ECLevel, Version};
