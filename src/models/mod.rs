//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus mask helpers
//! - [`SubnetReport`] - the computed characteristics of a subnet

mod ipv4;
mod report;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, num_hosts, num_usable_hosts, parse_address,
    parse_prefix, Ipv4, MAX_LENGTH,
};
pub use report::{binary_mask, AddressClass, HostRange, IpType, SubnetReport, REPORT_KEYS};
