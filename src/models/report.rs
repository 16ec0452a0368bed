//! Subnet report data model.

use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Report keys in display order.
pub const REPORT_KEYS: [&str; 12] = [
    "IP Address",
    "Network Address",
    "Usable Host IP Range",
    "Broadcast Address",
    "Total Number of Hosts",
    "Number of Usable Hosts",
    "Subnet Mask",
    "Wildcard Mask",
    "Binary Subnet Mask",
    "IP Class",
    "CIDR Notation",
    "IP Type",
];

/// First and last address of the usable host range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostRange {
    /// Lowest usable address.
    pub first: Ipv4Addr,
    /// Highest usable address.
    pub last: Ipv4Addr,
}

impl fmt::Display for HostRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.last)
    }
}

impl Serialize for HostRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Classful address class, taken from the first octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressClass {
    A,
    B,
    C,
    #[serde(rename = "D or E")]
    DOrE,
}

impl AddressClass {
    /// Class of an address with the given first octet.
    pub fn from_first_octet(octet: u8) -> AddressClass {
        match octet {
            0..=127 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            _ => AddressClass::DOrE,
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::DOrE => "D or E",
        };
        f.write_str(class)
    }
}

/// Private (RFC 1918) or public address.
///
/// Only the three RFC 1918 blocks count as private. Loopback and link-local
/// addresses are reported as public.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IpType {
    Private,
    Public,
}

impl IpType {
    /// Type of an address with the given first two octets.
    pub fn from_octets(first: u8, second: u8) -> IpType {
        match (first, second) {
            (10, _) => IpType::Private,
            (172, 16..=31) => IpType::Private,
            (192, 168) => IpType::Private,
            _ => IpType::Public,
        }
    }
}

impl fmt::Display for IpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpType::Private => f.write_str("Private"),
            IpType::Public => f.write_str("Public"),
        }
    }
}

/// Computed characteristics of one address/prefix pair.
///
/// Built by [`crate::processing::calculate`]; read-only for callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetReport {
    #[serde(rename = "IP Address")]
    pub(crate) address: Ipv4Addr,
    #[serde(rename = "Network Address")]
    pub(crate) network: Ipv4Addr,
    #[serde(rename = "Usable Host IP Range")]
    pub(crate) usable_range: HostRange,
    #[serde(rename = "Broadcast Address")]
    pub(crate) broadcast: Ipv4Addr,
    #[serde(rename = "Total Number of Hosts")]
    pub(crate) total_hosts: u64,
    #[serde(rename = "Number of Usable Hosts")]
    pub(crate) usable_hosts: u64,
    #[serde(rename = "Subnet Mask")]
    pub(crate) subnet_mask: Ipv4Addr,
    #[serde(rename = "Wildcard Mask")]
    pub(crate) wildcard_mask: Ipv4Addr,
    #[serde(rename = "Binary Subnet Mask")]
    pub(crate) binary_mask: String,
    #[serde(rename = "IP Class")]
    pub(crate) class: AddressClass,
    #[serde(rename = "CIDR Notation", serialize_with = "serialize_cidr")]
    pub(crate) prefix: u8,
    #[serde(rename = "IP Type")]
    pub(crate) ip_type: IpType,
}

fn serialize_cidr<S>(prefix: &u8, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("/{prefix}"))
}

/// Render mask octets as dot separated 8-digit binary groups.
pub fn binary_mask(mask: Ipv4Addr) -> String {
    mask.octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}

impl SubnetReport {
    /// The input address, normalised (`010.1.1.1` reads back as `10.1.1.1`).
    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network
    }

    pub fn usable_range(&self) -> HostRange {
        self.usable_range
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.broadcast
    }

    pub fn total_hosts(&self) -> u64 {
        self.total_hosts
    }

    pub fn usable_hosts(&self) -> u64 {
        self.usable_hosts
    }

    pub fn subnet_mask(&self) -> Ipv4Addr {
        self.subnet_mask
    }

    pub fn wildcard_mask(&self) -> Ipv4Addr {
        self.wildcard_mask
    }

    pub fn binary_mask(&self) -> &str {
        &self.binary_mask
    }

    pub fn class(&self) -> AddressClass {
        self.class
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The prefix written as `/n`.
    pub fn cidr_notation(&self) -> String {
        format!("/{}", self.prefix)
    }

    pub fn ip_type(&self) -> IpType {
        self.ip_type
    }

    /// Key/value pairs in [`REPORT_KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let values = [
            self.address.to_string(),
            self.network.to_string(),
            self.usable_range.to_string(),
            self.broadcast.to_string(),
            self.total_hosts.to_string(),
            self.usable_hosts.to_string(),
            self.subnet_mask.to_string(),
            self.wildcard_mask.to_string(),
            self.binary_mask.clone(),
            self.class.to_string(),
            self.cidr_notation(),
            self.ip_type.to_string(),
        ];
        REPORT_KEYS.into_iter().zip(values).collect()
    }
}
