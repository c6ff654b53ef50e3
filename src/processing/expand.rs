//! Expanding wildcard bit ranges into every candidate address.
//!
//! The output grows as `2^width` where `width` is the total number of
//! enumerated bits, so callers should run [`check_width`] first.

use crate::error::{Result, UnrollError};
use crate::models::{get_cidr_mask, BitRange, MAX_LENGTH};

/// Default limit on enumerated bits (about one million results).
pub const DEFAULT_MAX_WIDTH: u32 = 20;

/// Mask keeping every bit outside `range`.
pub fn preservation_mask(range: &BitRange) -> Result<u32> {
    Ok(get_cidr_mask(range.start - 1)? | !get_cidr_mask(range.end)?)
}

/// Reject an expansion that would enumerate more than `max_width` bits.
pub fn check_width(width: u32, max_width: u32) -> Result<()> {
    if width > max_width {
        log::warn!("Refusing to unroll {width} wildcard bits (limit {max_width})");
        return Err(UnrollError::WidthExceeded {
            width,
            max: max_width,
            count: 1u64 << width.min(63),
        });
    }
    Ok(())
}

/// Substitute every value of each range into every seed, one range at a time.
///
/// The trailing range must already be removed from `ranges`. Candidates are
/// grouped by originating seed and ascending by field value within a seed.
pub fn expand(ranges: &[BitRange], seeds: Vec<u32>) -> Result<Vec<u32>> {
    let mut candidates = seeds;

    for range in ranges {
        let keep = preservation_mask(range)?;
        let shift = (MAX_LENGTH - range.end) as u32;
        let fields = 1u64 << range.width();

        let mut next = Vec::with_capacity(candidates.len() * fields as usize);
        for seed in &candidates {
            let base = seed & keep;
            next.extend((0..fields).map(|field| base | ((field as u32) << shift)));
        }
        log::trace!(
            "expand {range}: {} seeds -> {} candidates",
            candidates.len(),
            next.len()
        );
        candidates = next;
    }

    Ok(candidates)
}
