//! Wildcard mask processing logic.
//!
//! This module contains the unrolling algorithm:
//! - [`ranges`] - Finding runs of variable bits in a mask
//! - [`expand`] - Enumerating every value of those runs
//! - [`normalize`] - Turning candidates into hosts or subnets
//! - [`unroll`] - The full pipeline

mod expand;
mod normalize;
mod ranges;
mod unroll;

// Re-export public functions
pub use expand::{check_width, expand, preservation_mask, DEFAULT_MAX_WIDTH};
pub use normalize::normalize;
pub use ranges::{find_ranges, split_trailing, variable_width};
pub use unroll::{unroll, unroll_addr, unroll_u32, unroll_with_limit, Unrolled};
