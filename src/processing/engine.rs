//! Subnet calculation engine.
//!
//! Pure functions from an address and prefix length to a [`SubnetReport`].
//! Nothing here logs or touches shared state.

use crate::error::SubnetError;
use crate::models::{
    binary_mask, broadcast_addr, cut_addr, get_cidr_mask, num_hosts, num_usable_hosts,
    parse_address, AddressClass, HostRange, IpType, Ipv4, SubnetReport, MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Calculate the subnet report for a dotted-decimal address and prefix.
///
/// # Errors
/// * [`SubnetError::InvalidAddressFormat`] - the address is not four decimal octets
/// * [`SubnetError::InvalidPrefixRange`] - the prefix is above 32
///
/// # Examples
/// ```
/// use subnet_calculator::calculate;
/// let report = calculate("192.168.1.10", 24).unwrap();
/// assert_eq!(report.network().to_string(), "192.168.1.0");
/// assert_eq!(report.usable_hosts(), 254);
/// ```
pub fn calculate(address: &str, prefix: u8) -> Result<SubnetReport, SubnetError> {
    let addr = parse_address(address)?;
    calculate_addr(addr, prefix)
}

/// Calculate the subnet report for an already parsed [`Ipv4`] block.
pub fn calculate_cidr(cidr: &Ipv4) -> Result<SubnetReport, SubnetError> {
    calculate_addr(cidr.addr, cidr.mask)
}

/// Calculate the subnet report for an address and prefix length.
pub fn calculate_addr(addr: Ipv4Addr, prefix: u8) -> Result<SubnetReport, SubnetError> {
    let mask_bits = get_cidr_mask(prefix)?;
    let network = cut_addr(addr, prefix)?;
    let broadcast = broadcast_addr(addr, prefix)?;

    // /31 and /32 have no hosts besides the block bounds
    let usable_range = if prefix < MAX_LENGTH - 1 {
        HostRange {
            first: Ipv4Addr::from(u32::from(network) + 1),
            last: Ipv4Addr::from(u32::from(broadcast) - 1),
        }
    } else {
        HostRange {
            first: network,
            last: broadcast,
        }
    };

    let subnet_mask = Ipv4Addr::from(mask_bits);
    let wildcard_mask = Ipv4Addr::from(subnet_mask.octets().map(|octet| 255 - octet));
    let [first, second, _, _] = addr.octets();

    Ok(SubnetReport {
        address: addr,
        network,
        usable_range,
        broadcast,
        total_hosts: num_hosts(prefix)?,
        usable_hosts: num_usable_hosts(prefix)?,
        subnet_mask,
        wildcard_mask,
        binary_mask: binary_mask(subnet_mask),
        class: AddressClass::from_first_octet(first),
        prefix,
        ip_type: IpType::from_octets(first, second),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_class_c_private() {
        let report = calculate("192.168.1.10", 24).unwrap();
        assert_eq!(report.address(), Ipv4Addr::new(192, 168, 1, 10));
        assert_eq!(report.network(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(report.broadcast(), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(
            report.usable_range().to_string(),
            "192.168.1.1 - 192.168.1.254"
        );
        assert_eq!(report.subnet_mask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(report.wildcard_mask(), Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(
            report.binary_mask(),
            "11111111.11111111.11111111.00000000"
        );
        assert_eq!(report.total_hosts(), 256);
        assert_eq!(report.usable_hosts(), 254);
        assert_eq!(report.class(), AddressClass::C);
        assert_eq!(report.cidr_notation(), "/24");
        assert_eq!(report.ip_type(), IpType::Private);
    }

    #[test]
    fn test_calculate_slash_30_public() {
        let report = calculate("8.8.8.8", 30).unwrap();
        assert_eq!(report.network().to_string(), "8.8.8.8");
        assert_eq!(report.broadcast().to_string(), "8.8.8.11");
        assert_eq!(report.usable_range().to_string(), "8.8.8.9 - 8.8.8.10");
        assert_eq!(report.subnet_mask().to_string(), "255.255.255.252");
        assert_eq!(report.wildcard_mask().to_string(), "0.0.0.3");
        assert_eq!(report.total_hosts(), 4);
        assert_eq!(report.usable_hosts(), 2);
        assert_eq!(report.class(), AddressClass::A);
        assert_eq!(report.ip_type(), IpType::Public);
    }

    #[test]
    fn test_calculate_172_range() {
        assert_eq!(
            calculate("172.16.5.5", 16).unwrap().ip_type(),
            IpType::Private
        );
        assert_eq!(
            calculate("172.32.5.5", 16).unwrap().ip_type(),
            IpType::Public
        );
        assert_eq!(calculate("172.16.5.5", 16).unwrap().class(), AddressClass::B);
    }

    #[test]
    fn test_calculate_prefix_zero() {
        let report = calculate("10.20.30.40", 0).unwrap();
        assert_eq!(report.subnet_mask(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(report.wildcard_mask(), Ipv4Addr::BROADCAST);
        assert_eq!(report.network(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(report.broadcast(), Ipv4Addr::BROADCAST);
        assert_eq!(report.total_hosts(), 1u64 << 32);
        assert_eq!(report.usable_hosts(), (1u64 << 32) - 2);
        assert_eq!(
            report.usable_range().to_string(),
            "0.0.0.1 - 255.255.255.254"
        );
    }

    #[test]
    fn test_calculate_prefix_32() {
        let report = calculate("203.0.113.7", 32).unwrap();
        assert_eq!(report.subnet_mask(), Ipv4Addr::BROADCAST);
        assert_eq!(report.network(), Ipv4Addr::new(203, 0, 113, 7));
        assert_eq!(report.broadcast(), Ipv4Addr::new(203, 0, 113, 7));
        assert_eq!(report.total_hosts(), 1);
        assert_eq!(report.usable_hosts(), 0);
        assert_eq!(
            report.usable_range().to_string(),
            "203.0.113.7 - 203.0.113.7"
        );
    }

    #[test]
    fn test_calculate_prefix_31() {
        let report = calculate("10.0.0.5", 31).unwrap();
        assert_eq!(report.network().to_string(), "10.0.0.4");
        assert_eq!(report.broadcast().to_string(), "10.0.0.5");
        assert_eq!(report.usable_range().to_string(), "10.0.0.4 - 10.0.0.5");
        assert_eq!(report.total_hosts(), 2);
        assert_eq!(report.usable_hosts(), 0);
    }

    #[test]
    fn test_class_uses_input_address() {
        // network of 200.1.1.1/1 is 128.0.0.0 (class B) but the input is class C
        let report = calculate("200.1.1.1", 1).unwrap();
        assert_eq!(report.network().to_string(), "128.0.0.0");
        assert_eq!(report.class(), AddressClass::C);
        assert_eq!(calculate("240.0.0.1", 4).unwrap().class(), AddressClass::DOrE);
    }

    #[test]
    fn test_address_is_normalised() {
        let report = calculate("010.001.000.009", 24).unwrap();
        assert_eq!(report.address(), Ipv4Addr::new(10, 1, 0, 9));
        assert_eq!(report.entries()[0], ("IP Address", "10.1.0.9".to_string()));
        assert_eq!(report.network().to_string(), "10.1.0.0");
    }

    #[test]
    fn test_calculate_invalid() {
        assert_eq!(
            calculate("999.1.1.1", 24),
            Err(SubnetError::InvalidAddressFormat("999.1.1.1".to_string()))
        );
        assert_eq!(
            calculate("1.1.1.1", 33),
            Err(SubnetError::InvalidPrefixRange("33".to_string()))
        );
        assert!(matches!(
            calculate("1.1.1", 24),
            Err(SubnetError::InvalidAddressFormat(_))
        ));
    }

    #[test]
    fn test_calculate_cidr() {
        let cidr = Ipv4::new("10.1.1.77/28").unwrap();
        let report = calculate_cidr(&cidr).unwrap();
        assert_eq!(report.network().to_string(), "10.1.1.64");
        assert_eq!(report.broadcast().to_string(), "10.1.1.79");
        assert_eq!(report, calculate("10.1.1.77", 28).unwrap());
    }

    #[test]
    fn test_block_properties_all_prefixes() {
        let addresses = [
            Ipv4Addr::new(0, 0, 0, 0),
            Ipv4Addr::new(8, 8, 8, 8),
            Ipv4Addr::new(127, 0, 0, 1),
            Ipv4Addr::new(172, 31, 255, 254),
            Ipv4Addr::new(192, 168, 1, 10),
            Ipv4Addr::new(255, 255, 255, 255),
        ];
        for addr in addresses {
            for prefix in 0..=MAX_LENGTH {
                let report = calculate_addr(addr, prefix).unwrap();
                let ip = u32::from(addr);
                let network = u32::from(report.network());
                let broadcast = u32::from(report.broadcast());
                let mask = u32::from(report.subnet_mask());

                assert!(network <= ip && ip <= broadcast, "{addr}/{prefix}");
                assert_eq!(
                    (broadcast - network) as u64 + 1,
                    report.total_hosts(),
                    "{addr}/{prefix}"
                );
                assert_eq!(network & mask, network, "{addr}/{prefix}");
                assert_eq!(
                    u32::from(report.wildcard_mask()),
                    !mask,
                    "{addr}/{prefix}"
                );
                assert_eq!(mask.count_ones(), prefix as u32, "{addr}/{prefix}");
            }
        }
    }
}
