//! Turning expanded candidates into hosts or subnets.

use crate::error::Result;
use crate::models::{BitRange, Ipv4, NetworkResult};
use std::net::Ipv4Addr;

/// Map each candidate to a [`NetworkResult`].
///
/// Without a trailing range every candidate is a single host. With one, the
/// trailing bits become host bits of a subnet with prefix `start - 1`.
pub fn normalize(candidates: &[u32], trailing: Option<BitRange>) -> Result<Vec<NetworkResult>> {
    match trailing {
        None => Ok(candidates
            .iter()
            .map(|&c| NetworkResult::Host(Ipv4Addr::from(c)))
            .collect()),
        Some(range) => {
            let prefix = range.start - 1;
            candidates
                .iter()
                .map(|&c| Ipv4::from_bits(c, prefix).map(NetworkResult::Subnet))
                .collect()
        }
    }
}
