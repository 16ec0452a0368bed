//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for addresses written with a prefix length, the strict
//! dotted-decimal parser used by the engine, and the bit-level helpers for
//! masks, network and broadcast addresses.

use crate::error::SubnetError;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse a dotted-decimal IPv4 address.
///
/// Exactly four `.` separated tokens are required, each made only of ASCII
/// digits with a value in `0..=255`. Leading zeros are accepted, signs and
/// whitespace are not.
///
/// The result is normalised: `010.001.000.009` parses to `10.1.0.9`, and
/// reports show the address in that form.
///
/// # Examples
/// ```
/// use subnet_calculator::models::parse_address;
/// assert_eq!(parse_address("10.0.0.1").unwrap().octets(), [10, 0, 0, 1]);
/// assert!(parse_address("999.1.1.1").is_err());
/// ```
pub fn parse_address(address: &str) -> Result<Ipv4Addr, SubnetError> {
    let invalid = || SubnetError::InvalidAddressFormat(address.to_string());

    let tokens: Vec<&str> = address.split('.').collect();
    if tokens.len() != 4 {
        return Err(invalid());
    }

    let mut octets = [0u8; 4];
    for (octet, token) in octets.iter_mut().zip(&tokens) {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // u8 parsing rejects anything above 255
        *octet = token.parse().map_err(|_| invalid())?;
    }

    Ok(Ipv4Addr::from(u32::from_be_bytes(octets)))
}

/// Parse a prefix length written as a decimal integer in `0..=32`.
///
/// Like [`parse_address`], surrounding whitespace is rejected.
pub fn parse_prefix(prefix: &str) -> Result<u8, SubnetError> {
    let invalid = || SubnetError::InvalidPrefixRange(prefix.to_string());

    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match prefix.parse::<u8>() {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(invalid()),
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// The shift is done in 64-bit space so `/0` yields an all-zero mask.
///
/// # Examples
/// ```
/// use subnet_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefixRange(len.to_string()))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, SubnetError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Number of addresses in a block, network and broadcast included.
pub fn num_hosts(len: u8) -> Result<u64, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefixRange(len.to_string()))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Number of usable host addresses in a block.
///
/// /31 and /32 blocks report zero usable hosts; RFC 3021 point-to-point
/// usage is not taken into account.
pub fn num_usable_hosts(len: u8) -> Result<u64, SubnetError> {
    let total = num_hosts(len)?;
    if len >= MAX_LENGTH - 1 {
        Ok(0)
    } else {
        // network and broadcast
        Ok(total - 2)
    }
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// The string must be exactly `address/prefix`, without surrounding
    /// whitespace.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, SubnetError> {
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(SubnetError::InvalidAddressFormat(addr_cidr.to_string()));
        }
        Ok(Ipv4 {
            addr: parse_address(parts[0])?,
            mask: parse_prefix(parts[1])?,
        })
    }
}

impl FromStr for Ipv4 {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
