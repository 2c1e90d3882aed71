use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Data encoding
    #[error("Empty data")]
    EmptyData,
    #[error("Capacity overflow")]
    CapacityOverflow,
    #[error("Invalid character")]
    InvalidChar,
    #[error("Invalid ECI designator: {0}")]
    InvalidEciDesignator(u32),

    // Tables
    #[error("Unsupported version: {0}")]
    UnsupportedVersion(u8),
    #[error("Unsupported generator polynomial degree: {0}")]
    UnsupportedDegree(usize),
    #[error("Invalid masking pattern: {0}")]
    InvalidMaskingPattern(u8),

    // Block & matrix construction
    #[error("Length mismatch: expected {expected}, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Out of bounds")]
    OutOfBounds,
}

pub type QRResult<T> = Result<T, QRError>;
