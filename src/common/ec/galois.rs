// GF(256) arithmetic
//------------------------------------------------------------------------------

/// Exp/log tables of GF(2^8) under the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaloisField {
    exp: [u8; 255],
    log: [u8; 256],
}

impl GaloisField {
    pub fn new() -> Self {
        let mut exp = [0u8; 255];
        let mut log = [0u8; 256];

        let mut a = 1u8;
        for (i, e) in exp.iter_mut().enumerate() {
            *e = a;
            log[a as usize] = i as u8;
            let is_degree_7 = a & 0x80 != 0;
            a <<= 1;
            if is_degree_7 {
                a ^= REDUCTION;
            }
        }

        Self { exp, log }
    }

    /// Element for α^power. Power is reduced mod 255.
    #[inline]
    pub fn exp(&self, power: usize) -> u8 {
        self.exp[power % 255]
    }

    /// Power of α for a nonzero element. Zero has no logarithm.
    #[inline]
    pub fn log(&self, elem: u8) -> Option<u8> {
        match elem {
            0 => None,
            e => Some(self.log[e as usize]),
        }
    }

    #[inline]
    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp(self.log[a as usize] as usize + self.log[b as usize] as usize)
    }

    // Multiplies an element by α^power
    #[inline]
    pub fn mul_exp(&self, elem: u8, power: u8) -> u8 {
        if elem == 0 {
            return 0;
        }
        self.exp(self.log[elem as usize] as usize + power as usize)
    }
}

impl Default for GaloisField {
    fn default() -> Self {
        Self::new()
    }
}



// Global constants
//------------------------------------------------------------------------------

// x^8 reduced by the primitive polynomial: x^4 + x^3 + x^2 + 1
static REDUCTION: u8 = 0b0001_1101;
