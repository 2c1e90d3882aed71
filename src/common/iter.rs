use super::metadata::Version;

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

// Visits every cell outside the vertical timing column in placement order: two column
// lanes from the right edge, alternating upward and downward, right column first.
// Function pattern cells are yielded too and left to the caller to skip.
pub struct EncRegionIter {
    right: i16,
    vert: i16,
    lane_col: i16,
    width: i16,
}

impl EncRegionIter {
    pub const fn new(version: Version) -> Self {
        let w = version.width() as i16;
        Self { right: w - 1, vert: 0, lane_col: 0, width: w }
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);

    fn next(&mut self) -> Option<Self::Item> {
        if self.right < 1 {
            return None;
        }

        let w = self.width;
        let c = self.right - self.lane_col;
        let upward = (self.right + 1) & 2 == 0;
        let r = if upward { w - 1 - self.vert } else { self.vert };

        self.lane_col += 1;
        if self.lane_col == 2 {
            self.lane_col = 0;
            self.vert += 1;
            if self.vert == w {
                self.vert = 0;
                self.right -= 2;
                // Skip vertical timing pattern
                if self.right == 6 {
                    self.right = 5;
                }
            }
        }

        Some((r, c))
    }
}
