use super::galois::GaloisField;
use crate::common::error::{QRError, QRResult};

// Polynomial division
//------------------------------------------------------------------------------

// Synthetic division of `dividend * x^a_shift` by `divisor` over GF(256).
//
// The dividend holds field elements, highest degree first, `a_deg + 1` terms. The divisor
// holds exponents of α, highest degree first, `b_deg + 1` terms; an exponent of 0 is α^0,
// i.e. the coefficient 1. Returns the `b_deg` remainder coefficients.
pub fn poly_div(
    gf: &GaloisField,
    dividend: &[u8],
    divisor: &[u8],
    a_deg: usize,
    b_deg: usize,
    a_shift: usize,
) -> QRResult<Vec<u8>> {
    let len = a_deg + 1 + a_shift;
    if dividend.len() != a_deg + 1 || divisor.len() != b_deg + 1 || len > MAX_DIVIDEND_LEN {
        return Err(QRError::OutOfBounds);
    }

    let mut buf = dividend.to_vec();
    buf.resize(len, 0);

    // Dividend already shorter than divisor
    if a_deg + a_shift < b_deg {
        let mut rem = vec![0; b_deg - len];
        rem.extend(buf);
        return Ok(rem);
    }

    let steps = a_deg + a_shift - b_deg + 1;
    for i in 0..steps {
        let lead_coeff = buf[i];
        let Some(log_lead_coeff) = gf.log(lead_coeff) else {
            continue;
        };

        for (u, &v) in buf[i..=i + b_deg].iter_mut().zip(divisor.iter()) {
            *u ^= gf.exp(v as usize + log_lead_coeff as usize);
        }
        debug_assert_eq!(buf[i], 0, "Leading term not cancelled at step {i}");
    }

    Ok(buf.split_off(steps))
}


// Global constants
//------------------------------------------------------------------------------

// Covers the longest block (123 data codewords) plus the largest generator degree (68)
pub static MAX_DIVIDEND_LEN: usize = 256;
