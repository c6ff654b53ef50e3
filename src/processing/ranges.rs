//! Finding the runs of variable bits in a wildcard mask.

use crate::models::{is_bit_on, BitRange, MAX_LENGTH};

/// Return the maximal runs of set bits in `mask`, most significant first.
///
/// Runs are disjoint, separated by at least one clear bit and ascending by
/// `start`. A zero mask gives an empty list.
pub fn find_ranges(mask: u32) -> Vec<BitRange> {
    let mut ranges = Vec::new();
    let mut open: Option<u8> = None;

    for bit in 1..=MAX_LENGTH {
        match (is_bit_on(mask, bit), open) {
            (true, None) => open = Some(bit),
            (false, Some(start)) => {
                ranges.push(BitRange {
                    start,
                    end: bit - 1,
                });
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        ranges.push(BitRange {
            start,
            end: MAX_LENGTH,
        });
    }

    log::trace!("find_ranges({mask:#010x}) = {ranges:?}");
    ranges
}

/// Set aside the range ending on bit 32, if any.
///
/// Scanning runs MSB to LSB, so only the last range can reach bit 32.
pub fn split_trailing(mut ranges: Vec<BitRange>) -> (Vec<BitRange>, Option<BitRange>) {
    let trailing = match ranges.last() {
        Some(last) if last.is_trailing() => ranges.pop(),
        _ => None,
    };
    assert!(
        ranges.iter().all(|r| !r.is_trailing()),
        "only the last range may end on bit {MAX_LENGTH}: {ranges:?}"
    );
    (ranges, trailing)
}

/// Total number of enumerated bits across `ranges`.
pub fn variable_width(ranges: &[BitRange]) -> u32 {
    ranges.iter().map(BitRange::width).sum()
}
