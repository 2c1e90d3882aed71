mod block;
mod division;
mod encoder;
mod galois;
mod generator;

pub(crate) use block::*;
pub use division::{poly_div, MAX_DIVIDEND_LEN};
pub use encoder::{initialize_tables, Tables};
pub use galois::GaloisField;
pub use generator::{GeneratorPolynomials, MAX_GEN_DEGREE};
