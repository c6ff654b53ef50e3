//! Contiguous run of variable bits in a wildcard mask.

use super::ipv4::{get_cidr_mask, MAX_LENGTH};
use crate::error::{Result, UnrollError};
use serde::Serialize;
use std::fmt;

/// Closed interval `[start, end]` of prefix-style bit positions (1..=32).
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BitRange {
    /// First (most significant) bit of the run.
    pub start: u8,
    /// Last (least significant) bit of the run.
    pub end: u8,
}

impl BitRange {
    /// Create a new [`BitRange`], rejecting positions outside 1..=32 or `start > end`.
    pub fn new(start: u8, end: u8) -> Result<BitRange> {
        if start == 0 || start > end || end > MAX_LENGTH {
            return Err(UnrollError::InvalidRange { start, end });
        }
        Ok(BitRange { start, end })
    }

    /// Number of bits in the run.
    pub fn width(&self) -> u32 {
        (self.end - self.start + 1) as u32
    }

    /// A range ending on bit 32 folds into a subnet prefix instead of being enumerated.
    pub fn is_trailing(&self) -> bool {
        self.end == MAX_LENGTH
    }

    /// Mask with exactly the bits of this range set.
    pub fn field_mask(&self) -> Result<u32> {
        Ok(get_cidr_mask(self.end)? & !get_cidr_mask(self.start - 1)?)
    }
}

impl fmt::Display for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.start == self.end {
            write!(f, "bit {}", self.start)
        } else {
            write!(f, "bits {}-{}", self.start, self.end)
        }
    }
}
