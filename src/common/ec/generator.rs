use super::galois::GaloisField;
use crate::common::error::{QRError, QRResult};

// Generator polynomials
//------------------------------------------------------------------------------

/// Reed-Solomon generator polynomials (x - α^0)(x - α^1)...(x - α^(d-1)) for degree d in
/// 1..=68. Coefficients are stored as exponents of α, highest degree term first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPolynomials {
    // Coefficients of all degrees back to back. Degree d starts at d(d+1)/2 - 1.
    coeffs: Vec<u8>,
}

impl GeneratorPolynomials {
    pub fn new(gf: &GaloisField) -> Self {
        let total = (MAX_GEN_DEGREE * MAX_GEN_DEGREE + 3 * MAX_GEN_DEGREE) / 2;
        let mut coeffs = Vec::with_capacity(total);

        // (x - α^0)
        coeffs.extend([0, 0]);

        for deg in 2..=MAX_GEN_DEGREE {
            let prev_start = Self::offset(deg - 1);
            let root = (deg - 1) as u8;

            // Leading coefficient is always α^0
            coeffs.push(0);
            for i in 0..deg - 1 {
                let hi = coeffs[prev_start + i + 1];
                let lo = coeffs[prev_start + i];
                let sum = gf.exp(hi as usize) ^ gf.exp(lo as usize + root as usize);
                let log = gf.log(sum);
                debug_assert!(log.is_some(), "Zero coefficient in generator of degree {deg}");
                coeffs.push(log.unwrap_or_default());
            }
            let last = coeffs[prev_start + deg - 1];
            coeffs.push(((last as usize + root as usize) % 255) as u8);
        }

        debug_assert_eq!(coeffs.len(), total, "Generator table size mismatch");
        Self { coeffs }
    }

    #[inline]
    fn offset(degree: usize) -> usize {
        (degree * degree + degree) / 2 - 1
    }

    /// Exponents of the generator of `degree`; `degree + 1` entries, the first being 0.
    pub fn get(&self, degree: usize) -> QRResult<&[u8]> {
        if !(1..=MAX_GEN_DEGREE).contains(&degree) {
            return Err(QRError::UnsupportedDegree(degree));
        }
        let start = Self::offset(degree);
        Ok(&self.coeffs[start..start + degree + 1])
    }
}

#[cfg(test)]
mod generator_tests {
    use test_case::test_case;

    use super::{GeneratorPolynomials, MAX_GEN_DEGREE};
    use crate::common::ec::galois::GaloisField;
    use crate::common::error::QRError;

    #[test_case(1, &[0, 0])]
    #[test_case(2, &[0, 25, 1])]
    #[test_case(7, &[0, 87, 229, 146, 149, 238, 102, 21])]
    #[test_case(10, &[0, 251, 67, 46, 61, 118, 70, 64, 94, 32, 45])]
    fn test_get(degree: usize, exp: &[u8]) {
        let gf = GaloisField::new();
        let gens = GeneratorPolynomials::new(&gf);
        assert_eq!(gens.get(degree).unwrap(), exp);
    }

    #[test]
    fn test_unsupported_degree() {
        let gf = GaloisField::new();
        let gens = GeneratorPolynomials::new(&gf);
        assert_eq!(gens.get(0), Err(QRError::UnsupportedDegree(0)));
        assert_eq!(gens.get(69), Err(QRError::UnsupportedDegree(69)));
        assert_eq!(gens.get(MAX_GEN_DEGREE).unwrap().len(), MAX_GEN_DEGREE + 1);
    }

    // Every α^i for i < degree is a root of the generator
    #[test]
    fn test_roots() {
        let gf = GaloisField::new();
        let gens = GeneratorPolynomials::new(&gf);
        for degree in [13, 24, 30, 68] {
            let poly = gens.get(degree).unwrap();
            for root in 0..degree {
                let eval = poly.iter().fold(0u8, |acc, &c| {
                    gf.mul_exp(acc, root as u8) ^ gf.exp(c as usize)
                });
                assert_eq!(eval, 0, "α^{root} is not a root of degree {degree}");
            }
        }
    }
}

// Global constants
//------------------------------------------------------------------------------

pub static MAX_GEN_DEGREE: usize = 68;
