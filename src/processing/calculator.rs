//! Subnet property derivation.
//!
//! Turns a validated [`AddressSpec`] into a [`SubnetResult`].

use crate::models::{
    broadcast_addr, get_cidr_mask, network_addr, total_hosts, AddressSpec, HostPolicy, HostRange,
    Prefix, SubnetResult,
};
use std::net::Ipv4Addr;

/// Stateless calculator; the only setting is how /31 and /32 are counted.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SubnetCalculator {
    policy: HostPolicy,
}

impl SubnetCalculator {
    pub fn new(policy: HostPolicy) -> SubnetCalculator {
        SubnetCalculator { policy }
    }

    /// Derive every subnet property of `spec`.
    ///
    /// Runs mask, network, broadcast, host range, total hosts and usable
    /// hosts in that order. Each step only reads earlier results.
    pub fn calculate(&self, spec: &AddressSpec) -> SubnetResult {
        let prefix = spec.prefix();
        let mask = get_cidr_mask(prefix);
        let network = network_addr(spec.addr(), mask);
        let broadcast = broadcast_addr(network, mask);
        let range = self.usable_host_range(network, broadcast, prefix);
        let total = total_hosts(prefix);
        let usable = self.usable_hosts(total, prefix);

        log::debug!(
            "calculate({spec}) mask={mask} network={network} broadcast={broadcast} total={total} usable={usable}"
        );

        SubnetResult::new(
            spec.addr(),
            prefix,
            mask,
            network,
            broadcast,
            range,
            total,
            usable,
        )
    }

    /// First and last assignable address between `network` and `broadcast`.
    ///
    /// Returns `None` for a /32, and for a /31 unless the policy is
    /// [`HostPolicy::Rfc3021`], in which case both addresses are hosts.
    pub fn usable_host_range(
        &self,
        network: Ipv4Addr,
        broadcast: Ipv4Addr,
        prefix: Prefix,
    ) -> Option<HostRange> {
        match (prefix.length(), self.policy) {
            (32, _) => None,
            (31, HostPolicy::Classic) => None,
            (31, HostPolicy::Rfc3021) => Some(HostRange {
                low: network,
                high: broadcast,
            }),
            // at least 4 addresses: network + 1 and broadcast - 1 stay in the last octet
            _ => Some(HostRange {
                low: Ipv4Addr::from(u32::from(network) + 1),
                high: Ipv4Addr::from(u32::from(broadcast) - 1),
            }),
        }
    }

    /// Assignable hosts out of `total`, never negative.
    pub fn usable_hosts(&self, total: u64, prefix: Prefix) -> u64 {
        match (prefix.length(), self.policy) {
            (31 | 32, HostPolicy::Classic) => 0,
            (31 | 32, HostPolicy::Rfc3021) => total,
            _ => total - 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(octets: [u8; 4], prefix: u8) -> SubnetResult {
        let spec = AddressSpec::new(octets, prefix).unwrap();
        SubnetCalculator::default().calculate(&spec)
    }

    fn calc_rfc3021(octets: [u8; 4], prefix: u8) -> SubnetResult {
        let spec = AddressSpec::new(octets, prefix).unwrap();
        SubnetCalculator::new(HostPolicy::Rfc3021).calculate(&spec)
    }

    #[test]
    fn test_calculate_slash_24() {
        let result = calc([192, 168, 1, 10], 24);
        assert_eq!(result.address(), Ipv4Addr::new(192, 168, 1, 10));
        assert_eq!(result.cidr(), "/24");
        assert_eq!(result.subnet_mask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(result.network_address(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(result.broadcast_address(), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(
            result.usable_host_range_display(),
            "192.168.1.1 - 192.168.1.254"
        );
        assert_eq!(result.total_hosts(), 256);
        assert_eq!(result.usable_hosts(), 254);
    }

    #[test]
    fn test_calculate_slash_8() {
        let result = calc([10, 0, 0, 1], 8);
        assert_eq!(result.subnet_mask(), Ipv4Addr::new(255, 0, 0, 0));
        assert_eq!(result.network_address(), Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(result.broadcast_address(), Ipv4Addr::new(10, 255, 255, 255));
        assert_eq!(
            result.usable_host_range(),
            Some(HostRange {
                low: Ipv4Addr::new(10, 0, 0, 1),
                high: Ipv4Addr::new(10, 255, 255, 254),
            })
        );
        assert_eq!(result.total_hosts(), 16777216);
        assert_eq!(result.usable_hosts(), 16777214);
    }

    #[test]
    fn test_calculate_slash_0() {
        let result = calc([203, 0, 113, 9], 0);
        assert_eq!(result.subnet_mask(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(result.network_address(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(result.broadcast_address(), Ipv4Addr::BROADCAST);
        assert_eq!(
            result.usable_host_range_display(),
            "0.0.0.1 - 255.255.255.254"
        );
        assert_eq!(result.total_hosts(), 4294967296);
        assert_eq!(result.usable_hosts(), 4294967294);
    }

    #[test]
    fn test_calculate_slash_30() {
        let result = calc([10, 1, 1, 6], 30);
        assert_eq!(result.network_address(), Ipv4Addr::new(10, 1, 1, 4));
        assert_eq!(result.broadcast_address(), Ipv4Addr::new(10, 1, 1, 7));
        assert_eq!(result.usable_host_range_display(), "10.1.1.5 - 10.1.1.6");
        assert_eq!(result.total_hosts(), 4);
        assert_eq!(result.usable_hosts(), 2);
    }

    #[test]
    fn test_calculate_slash_31() {
        let result = calc([10, 1, 1, 7], 31);
        assert_eq!(result.network_address(), Ipv4Addr::new(10, 1, 1, 6));
        assert_eq!(result.broadcast_address(), Ipv4Addr::new(10, 1, 1, 7));
        assert_eq!(result.usable_host_range(), None);
        assert_eq!(result.usable_host_range_display(), "No usable host range");
        assert_eq!(result.total_hosts(), 2);
        assert_eq!(result.usable_hosts(), 0);

        let result = calc_rfc3021([10, 1, 1, 7], 31);
        assert_eq!(result.usable_host_range_display(), "10.1.1.6 - 10.1.1.7");
        assert_eq!(result.usable_hosts(), 2);
    }

    #[test]
    fn test_calculate_slash_32() {
        let result = calc([172, 16, 5, 5], 32);
        assert_eq!(result.subnet_mask(), Ipv4Addr::BROADCAST);
        assert_eq!(result.network_address(), Ipv4Addr::new(172, 16, 5, 5));
        assert_eq!(result.broadcast_address(), Ipv4Addr::new(172, 16, 5, 5));
        assert_eq!(result.usable_host_range(), None);
        assert_eq!(result.total_hosts(), 1);
        assert_eq!(result.usable_hosts(), 0);

        let result = calc_rfc3021([172, 16, 5, 5], 32);
        assert_eq!(result.usable_host_range(), None);
        assert_eq!(result.usable_hosts(), 1);
    }

    #[test]
    fn test_slash_32_edge_addresses_do_not_wrap() {
        let result = calc([0, 0, 0, 0], 32);
        assert_eq!(result.usable_host_range(), None);
        let result = calc([255, 255, 255, 255], 32);
        assert_eq!(result.usable_host_range(), None);
        let result = calc_rfc3021([255, 255, 255, 254], 31);
        assert_eq!(
            result.usable_host_range_display(),
            "255.255.255.254 - 255.255.255.255"
        );
    }

    #[test]
    fn test_usable_range_keeps_upper_octets() {
        for prefix in 24..=30 {
            let result = calc([192, 168, 77, 200], prefix);
            let range = result.usable_host_range().unwrap();
            assert_eq!(range.low.octets()[..3], [192, 168, 77]);
            assert_eq!(range.high.octets()[..3], [192, 168, 77]);
            assert_eq!(
                range.low.octets()[3],
                result.network_address().octets()[3] + 1
            );
            assert_eq!(
                range.high.octets()[3],
                result.broadcast_address().octets()[3] - 1
            );
        }
    }

    #[test]
    fn test_usable_hosts_policy() {
        let classic = SubnetCalculator::default();
        let rfc = SubnetCalculator::new(HostPolicy::Rfc3021);
        let p = |len| Prefix::new(len).unwrap();
        assert_eq!(classic.usable_hosts(256, p(24)), 254);
        assert_eq!(rfc.usable_hosts(256, p(24)), 254);
        assert_eq!(classic.usable_hosts(2, p(31)), 0);
        assert_eq!(rfc.usable_hosts(2, p(31)), 2);
        assert_eq!(classic.usable_hosts(1, p(32)), 0);
        assert_eq!(rfc.usable_hosts(1, p(32)), 1);
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let spec = AddressSpec::new([100, 64, 3, 129], 26).unwrap();
        let calculator = SubnetCalculator::default();
        assert_eq!(calculator.calculate(&spec), calculator.calculate(&spec));
    }
}
