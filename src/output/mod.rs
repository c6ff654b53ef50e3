//! Output formatting for unrolled wildcards.
//!
//! This module handles formatting and outputting results:
//! - [`terminal`] - Plain listing with a summary line
//! - [`json`] - JSON output
//! - [`explain`] - Bit level view of a mask

mod explain;
mod json;
mod terminal;

pub use explain::{explain_lines, format_mask_bits, print_explain};
pub use json::{print_json, to_json};
pub use terminal::{format_field, format_unrolled, print_unrolled};
