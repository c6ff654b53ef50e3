//! The unroll pipeline: mask -> ranges -> candidates -> networks.

use super::expand::{check_width, expand, DEFAULT_MAX_WIDTH};
use super::normalize::normalize;
use super::ranges::{find_ranges, split_trailing, variable_width};
use crate::error::Result;
use crate::models::{parse_ipv4, NetworkResult};
use itertools::Itertools;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Result of unrolling one address/wildcard pair.
#[derive(Serialize, Debug, Clone)]
pub struct Unrolled {
    /// Base address.
    pub address: Ipv4Addr,
    pub mask: Ipv4Addr,
    pub count: usize,
    pub results: Vec<NetworkResult>,
}

impl Unrolled {
    /// Total addresses covered by all results.
    pub fn total_addresses(&self) -> u64 {
        self.results.iter().map(NetworkResult::size).sum()
    }

    /// Results ordered by network address, then prefix length.
    pub fn sorted(mut self) -> Unrolled {
        self.results = self
            .results
            .into_iter()
            .sorted_by_key(|n| (n.addr(), n.prefix_len()))
            .collect();
        self
    }
}

/// Unroll `address`/`mask` dotted-quad strings with the default width limit.
///
/// # Examples
/// ```
/// let out = wildcard_unroll::unroll("10.12.14.16", "0.1.0.0").unwrap();
/// let out: Vec<String> = out.iter().map(|n| n.to_string()).collect();
/// assert_eq!(out, vec!["10.12.14.16", "10.13.14.16"]);
/// ```
pub fn unroll(address: &str, mask: &str) -> Result<Vec<NetworkResult>> {
    unroll_with_limit(address, mask, DEFAULT_MAX_WIDTH)
}

/// Unroll `address`/`mask` strings, refusing more than `max_width` enumerated bits.
pub fn unroll_with_limit(address: &str, mask: &str, max_width: u32) -> Result<Vec<NetworkResult>> {
    let address = parse_ipv4("address", address)?;
    let mask = parse_ipv4("mask", mask)?;
    Ok(unroll_addr(address, mask, max_width)?.results)
}

/// Unroll already parsed addresses.
pub fn unroll_addr(address: Ipv4Addr, mask: Ipv4Addr, max_width: u32) -> Result<Unrolled> {
    let results = unroll_u32(u32::from(address), u32::from(mask), max_width)?;
    Ok(Unrolled {
        address,
        mask,
        count: results.len(),
        results,
    })
}

/// Unroll a raw 32-bit address and wildcard mask.
pub fn unroll_u32(address: u32, mask: u32, max_width: u32) -> Result<Vec<NetworkResult>> {
    let (ranges, trailing) = split_trailing(find_ranges(mask));
    let width = variable_width(&ranges);
    log::debug!(
        "unroll {}/{}: ranges={ranges:?} trailing={trailing:?} width={width}",
        Ipv4Addr::from(address),
        Ipv4Addr::from(mask)
    );
    check_width(width, max_width)?;

    let candidates = expand(&ranges, vec![address])?;
    let results = normalize(&candidates, trailing)?;
    log::info!(
        "Unrolled {}/{} into {} networks",
        Ipv4Addr::from(address),
        Ipv4Addr::from(mask),
        results.len()
    );
    Ok(results)
}
