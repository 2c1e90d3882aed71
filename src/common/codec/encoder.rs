pub use encode::*;

// Encoder
//------------------------------------------------------------------------------

pub mod encode {
    use tracing::trace;

    use super::writer::{pad_remaining_capacity, push_segment, push_terminator};
    use crate::common::bitstream::BitStream;
    use crate::common::codec::{Mode, Segment, MODE_INDICATOR_BITS};
    use crate::common::error::{QRError, QRResult};
    use crate::common::metadata::{ECLevel, Version};

    // Modes a character can switch between during segmentation
    const SEGMENT_MODES: [Mode; 3] = [Mode::Numeric, Mode::Alphanumeric, Mode::Byte];

    /// Packs `data` in a single `mode` segment into exactly `data_capacity(ver, ecl)`
    /// codewords: header, payload, terminator and padding.
    pub fn encode(data: &[u8], mode: Mode, ver: Version, ecl: ECLevel) -> QRResult<Vec<u8>> {
        let seg = Segment::new(mode, data)?;
        encode_segments(&[seg], ver, ecl)
    }

    pub fn encode_segments(segs: &[Segment], ver: Version, ecl: ECLevel) -> QRResult<Vec<u8>> {
        let bcap = ver.data_bit_capacity(ecl);
        let sz = encoded_bit_len(segs, ver)?;
        if sz > bcap {
            return Err(QRError::CapacityOverflow);
        }
        trace!(version = *ver, bits = sz, capacity = bcap, "Packing segments");

        let mut bs = BitStream::new(bcap);
        for seg in segs {
            push_segment(seg, ver, &mut bs);
        }
        push_terminator(&mut bs);
        pad_remaining_capacity(&mut bs);
        debug_assert_eq!(bs.len(), bcap, "Encoded stream doesn't fill capacity");
        Ok(bs.into_bytes())
    }

    /// Smallest version whose data capacity at `ecl` holds every segment.
    pub fn find_min_version(segs: &[Segment], ecl: ECLevel) -> QRResult<Version> {
        Version::all()
            .find(|&ver| {
                encoded_bit_len(segs, ver).is_ok_and(|sz| sz <= ver.data_bit_capacity(ecl))
            })
            .ok_or(QRError::CapacityOverflow)
    }

    /// Smallest version which holds `head` followed by `data` split into optimal mixed mode
    /// segments. Returns the version together with the full segment list.
    pub fn find_optimal_version_and_segments<'a>(
        head: &[Segment<'a>],
        data: &'a [u8],
        ecl: ECLevel,
    ) -> QRResult<(Version, Vec<Segment<'a>>)> {
        let mut segs = Vec::new();
        for ver in Version::all() {
            // Char count widths only change at versions 1, 10 and 27
            if matches!(*ver, 1 | 10 | 27) {
                segs = head.to_vec();
                segs.extend(compute_optimal_segments(data, ver)?);
            }
            if encoded_bit_len(&segs, ver).is_ok_and(|sz| sz <= ver.data_bit_capacity(ecl)) {
                return Ok((ver, segs));
            }
        }
        Err(QRError::CapacityOverflow)
    }

    /// Splits `data` into numeric, alphanumeric and byte runs with the fewest total bits
    /// at `ver`.
    ///
    /// Dynamic programming over every character: for each mode the cheapest way of ending
    /// the prefix in that mode is kept, in sixths of a bit so numeric and alphanumeric
    /// chars stay integral. Switching modes rounds the running cost up to whole bits and
    /// pays a new header.
    pub fn compute_optimal_segments(data: &[u8], ver: Version) -> QRResult<Vec<Segment<'_>>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let header_cost = |m: Mode| (MODE_INDICATOR_BITS + ver.char_cnt_bits(m)) * 6;
        let mut prev_cost = SEGMENT_MODES.map(header_cost);
        let mut cur_cost = [usize::MAX; 3];
        let mut min_path = vec![[usize::MAX; 3]; data.len()];
        for (i, &b) in data.iter().enumerate() {
            for (j, &to_mode) in SEGMENT_MODES.iter().enumerate() {
                if !to_mode.contains(b) {
                    continue;
                }
                // Bits taken by six chars, i.e. sixths of a bit per char
                let char_cost = to_mode.encoded_len(6);
                for (k, &from_mode) in SEGMENT_MODES.iter().enumerate() {
                    if prev_cost[k] == usize::MAX {
                        continue;
                    }
                    let run_cost = if to_mode == from_mode {
                        prev_cost[k]
                    } else {
                        prev_cost[k].div_ceil(6) * 6 + header_cost(to_mode)
                    };
                    let cost = run_cost + char_cost;
                    if cost < cur_cost[j] {
                        cur_cost[j] = cost;
                        min_path[i][j] = k;
                    }
                }
            }
            std::mem::swap(&mut prev_cost, &mut cur_cost);
            cur_cost.fill(usize::MAX);
        }

        let char_modes = trace_optimal_modes(&min_path, &prev_cost);
        build_segments(data, &char_modes)
    }

    // Backtracks min_path from the cheapest final mode
    fn trace_optimal_modes(min_path: &[[usize; 3]], last_cost: &[usize; 3]) -> Vec<Mode> {
        let mut mode_index = 0;
        for (i, &cost) in last_cost.iter().enumerate().skip(1) {
            if cost < last_cost[mode_index] {
                mode_index = i;
            }
        }
        let mut char_modes = vec![Mode::Byte; min_path.len()];
        for (i, path) in min_path.iter().enumerate().rev() {
            char_modes[i] = SEGMENT_MODES[mode_index];
            mode_index = path[mode_index];
        }
        char_modes
    }

    // Groups runs of equal char modes into segments
    fn build_segments<'a>(data: &'a [u8], char_modes: &[Mode]) -> QRResult<Vec<Segment<'a>>> {
        let mut segs = Vec::new();
        let mut seg_start = 0;
        for i in 1..=data.len() {
            if i == data.len() || char_modes[i] != char_modes[seg_start] {
                segs.push(Segment::new(char_modes[seg_start], &data[seg_start..i])?);
                seg_start = i;
            }
        }
        Ok(segs)
    }

    // Total bits of all segments, failing when a char count doesn't fit its field
    fn encoded_bit_len(segs: &[Segment], ver: Version) -> QRResult<usize> {
        segs.iter().try_fold(0, |acc, seg| {
            let len_bits = ver.char_cnt_bits(seg.mode());
            if seg.mode() != Mode::Eci && seg.char_count() >= (1 << len_bits) {
                return Err(QRError::CapacityOverflow);
            }
            Ok(acc + seg.bit_len(ver))
        })
    }

}

// Writer for encoded data
//------------------------------------------------------------------------------

pub(super) mod writer {
    use crate::common::bitstream::BitStream;
    use crate::common::codec::{Mode, Segment, MODE_INDICATOR_BITS, PADDING_CODEWORDS};
    use crate::common::metadata::Version;

    pub fn push_segment(seg: &Segment, ver: Version, out: &mut BitStream) {
        push_header(seg, ver, out);
        let mode = seg.mode();
        for chunk in seg.data().chunks(mode.chunk_size()) {
            out.push_bits(mode.encode_chunk(chunk), mode.chunk_bits(chunk.len()));
        }
    }

    fn push_header(seg: &Segment, ver: Version, out: &mut BitStream) {
        out.push_bits(seg.mode() as u8, MODE_INDICATOR_BITS);
        let len_bits = ver.char_cnt_bits(seg.mode());
        if len_bits == 0 {
            return;
        }
        let char_cnt = seg.char_count();
        debug_assert!(
            char_cnt < (1 << len_bits),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {len_bits}"
        );
        out.push_bits(char_cnt as u16, len_bits);
    }

    pub fn push_terminator(out: &mut BitStream) {
        let bit_len = out.len();
        let bit_capacity = out.capacity();
        if bit_len < bit_capacity {
            let term_len = std::cmp::min(4, bit_capacity - bit_len);
            out.push_bits(0u8, term_len);
        }
    }

    pub fn pad_remaining_capacity(out: &mut BitStream) {
        push_padding_bits(out);
        push_padding_codewords(out);
    }

    fn push_padding_bits(out: &mut BitStream) {
        let offset = out.len() & 7;
        if offset > 0 {
            let padding_bits_len = 8 - offset;
            out.push_bits(0u8, padding_bits_len);
        }
    }

    fn push_padding_codewords(out: &mut BitStream) {
        let offset = out.len() & 7;
        debug_assert!(offset == 0, "Bit offset should be zero before padding codewords: {offset}");

        let remain_byte_capacity = (out.capacity() - out.len()) >> 3;
        PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
            out.push_bits(pc, 8);
        });
    }

}
