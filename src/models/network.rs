//! Unrolled network result.

use super::Ipv4;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// One entry of an unrolled wildcard: a single host or a contiguous subnet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NetworkResult {
    /// A single address (equivalent to a /32).
    Host(Ipv4Addr),
    /// A subnet whose host bits are zeroed.
    Subnet(Ipv4),
}

impl NetworkResult {
    /// The result as a CIDR block; hosts become /32.
    pub fn to_ipv4(&self) -> Ipv4 {
        match *self {
            NetworkResult::Host(addr) => Ipv4 { addr, mask: 32 },
            NetworkResult::Subnet(net) => net,
        }
    }

    /// Network address of the result.
    pub fn addr(&self) -> Ipv4Addr {
        self.to_ipv4().addr
    }

    /// Prefix length of the result (32 for hosts).
    pub fn prefix_len(&self) -> u8 {
        self.to_ipv4().mask
    }

    /// Number of addresses covered.
    pub fn size(&self) -> u64 {
        self.to_ipv4().size()
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.to_ipv4().contains(addr)
    }
}

impl fmt::Display for NetworkResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NetworkResult::Host(addr) => write!(f, "{addr}"),
            NetworkResult::Subnet(net) => write!(f, "{net}"),
        }
    }
}

impl Serialize for NetworkResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
