//! Unroll discontiguous IPv4 wildcard masks into hosts or normalized subnets.
//!
//! ```
//! let nets = wildcard_unroll::unroll("10.12.14.16", "0.1.0.1").unwrap();
//! let nets: Vec<String> = nets.iter().map(|n| n.to_string()).collect();
//! assert_eq!(nets, vec!["10.12.14.16/31", "10.13.14.16/31"]);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use std::net::Ipv4Addr;

pub use config::Config;
pub use error::{Result, UnrollError};
pub use models::{BitRange, Ipv4, NetworkResult};
pub use processing::{unroll, unroll_with_limit, Unrolled};

/// Unroll every (address, mask) pair, stopping at the first failure.
pub fn unroll_all(
    pairs: &[(Ipv4Addr, Ipv4Addr)],
    max_width: u32,
    sort: bool,
) -> Result<Vec<Unrolled>> {
    pairs
        .iter()
        .map(|&(address, mask)| -> Result<Unrolled> {
            let unrolled = processing::unroll_addr(address, mask, max_width)?;
            Ok(if sort { unrolled.sorted() } else { unrolled })
        })
        .collect()
}
