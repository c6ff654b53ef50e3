//! Domain models for wildcard unrolling.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 subnet with CIDR notation support
//! - [`BitRange`] - A maximal run of variable bits in a wildcard mask
//! - [`NetworkResult`] - A single unrolled host or subnet

mod bit_range;
mod ipv4;
mod network;

// Re-export public types
pub use bit_range::BitRange;
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, is_bit_on, parse_ipv4, Ipv4, MAX_LENGTH,
};
pub use network::NetworkResult;
