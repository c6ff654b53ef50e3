//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing IPv4 subnets, along with the
//! prefix-length style bit helpers the unroller is built on. Bit positions
//! are 1-indexed from the most significant bit, so bit 1 is the top bit and
//! bit 32 is the lowest.

use crate::error::{Result, UnrollError};
use serde::Serialize;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// The top `len` bits are set, the rest are clear.
///
/// # Examples
/// ```
/// use wildcard_unroll::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(UnrollError::InvalidPrefix(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Returns true if the nth bit (prefix length style, 1..=32) is set in `number`.
///
/// Bits outside 1..=32 are never on.
pub fn is_bit_on(number: u32, bit: u8) -> bool {
    if bit == 0 || bit > MAX_LENGTH {
        return false;
    }
    number & (1u32 << (MAX_LENGTH - bit)) != 0
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Parse a dotted-quad string, naming the input `field` in the error.
pub fn parse_ipv4(field: &str, text: &str) -> Result<Ipv4Addr> {
    let text = text.trim();
    Ipv4Addr::from_str(text).map_err(|_| UnrollError::Parse {
        field: field.to_string(),
        value: text.to_string(),
    })
}

/// IPv4 subnet in CIDR notation.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Ipv4 {
    /// Build a subnet from a raw address, zeroing all bits below the prefix.
    pub fn from_bits(bits: u32, mask: u8) -> Result<Ipv4> {
        let addr = cut_addr(Ipv4Addr::from(bits), mask)?;
        Ok(Ipv4 { addr, mask })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating network address for {}: {}", self, e))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address: {}", e))
    }

    /// Number of addresses covered by the subnet.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask.min(MAX_LENGTH))
    }

    /// True if `addr` falls inside this subnet.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.lo() <= addr && addr <= self.hi()
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(1).unwrap(), 0x80000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(31).unwrap(), 0xFFFFFFFE);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_is_bit_on() {
        assert!(is_bit_on(0x80000000, 1));
        assert!(!is_bit_on(0x80000000, 2));
        assert!(is_bit_on(0x00000001, 32));
        assert!(is_bit_on(0x00010000, 16));
        assert!(!is_bit_on(0x00010000, 17));
        assert!(!is_bit_on(u32::MAX, 0));
        assert!(!is_bit_on(u32::MAX, 33));
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert_eq!(
            broadcast_addr(ip, 0).unwrap(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
    }

    #[test]
    fn test_parse_ipv4() {
        assert_eq!(
            parse_ipv4("address", " 10.12.14.16 ").unwrap(),
            Ipv4Addr::new(10, 12, 14, 16)
        );
        for bad in ["10.12.14", "10.12.14.256", "ten.0.0.1", "", "1.2.3.4.5"] {
            let err = parse_ipv4("mask", bad).unwrap_err();
            assert!(
                matches!(err, UnrollError::Parse { ref field, .. } if field == "mask"),
                "{bad} should fail as a mask parse error"
            );
        }
    }

    fn net(a: u8, b: u8, c: u8, d: u8, mask: u8) -> Ipv4 {
        Ipv4 {
            addr: Ipv4Addr::new(a, b, c, d),
            mask,
        }
    }

    #[test]
    fn test_ipv4_display() {
        assert_eq!(net(10, 12, 14, 16, 31).to_string(), "10.12.14.16/31");
        assert_eq!(net(0, 0, 0, 0, 0).to_string(), "0.0.0.0/0");
    }

    #[test]
    fn test_ipv4_lo_hi_contains() {
        let n = net(10, 0, 10, 64, 26);
        assert_eq!(n.lo(), Ipv4Addr::new(10, 0, 10, 64));
        assert_eq!(n.hi(), Ipv4Addr::new(10, 0, 10, 127));
        assert_eq!(n.size(), 64);
        assert!(n.contains(Ipv4Addr::new(10, 0, 10, 100)));
        assert!(!n.contains(Ipv4Addr::new(10, 0, 10, 128)));

        let all = net(0, 0, 0, 0, 0);
        assert_eq!(all.size(), 1u64 << 32);
        assert!(all.contains(Ipv4Addr::new(255, 255, 255, 255)));
    }

    #[test]
    fn test_ipv4_from_bits() {
        let net = Ipv4::from_bits(u32::from(Ipv4Addr::new(10, 12, 14, 17)), 31).unwrap();
        assert_eq!(net.to_string(), "10.12.14.16/31");
    }

    #[test]
    fn test_ipv4_cmp() {
        let ip1 = net(10, 0, 0, 1, 24);
        let ip2 = net(10, 0, 0, 2, 24);
        let ip3 = net(10, 0, 0, 1, 24);

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 >= ip3);
    }

    #[test]
    fn test_ipv4_serde() {
        let json = serde_json::to_string(&net(10, 13, 14, 16, 31)).unwrap();
        assert_eq!(json, "\"10.13.14.16/31\"");
    }
}
