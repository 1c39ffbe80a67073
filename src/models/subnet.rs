//! Subnet calculation input and result types.

use super::ipv4::Prefix;
use crate::error::InputError;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Shown in place of a host range for /31 and /32 networks.
pub const NO_HOST_RANGE: &str = "No usable host range";

/// A validated address and prefix, ready for calculation.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct AddressSpec {
    addr: Ipv4Addr,
    prefix: Prefix,
}

impl AddressSpec {
    /// Build an [`AddressSpec`] from four octets and a prefix length.
    ///
    /// Octets are range checked by their type; the prefix must be `0..=32`.
    pub fn new(octets: [u8; 4], prefix: u8) -> Result<AddressSpec, InputError> {
        Ok(AddressSpec {
            addr: Ipv4Addr::from(octets),
            prefix: Prefix::new(prefix)?,
        })
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn octets(&self) -> [u8; 4] {
        self.addr.octets()
    }

    pub fn prefix(&self) -> Prefix {
        self.prefix
    }
}

impl FromStr for AddressSpec {
    type Err = InputError;

    /// Parse `A.B.C.D/N`, see [`crate::input::parse_address_spec`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::input::parse_address_spec(s)
    }
}

impl fmt::Display for AddressSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.addr, self.prefix)
    }
}

/// How /31 and /32 networks count their usable hosts.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default)]
pub enum HostPolicy {
    /// Network and broadcast are never usable: /31 and /32 have 0 usable hosts.
    #[default]
    Classic,
    /// RFC 3021 point-to-point: /31 has 2 usable hosts, /32 has 1.
    Rfc3021,
}

impl FromStr for HostPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(HostPolicy::Classic),
            "rfc3021" | "rfc-3021" => Ok(HostPolicy::Rfc3021),
            other => Err(format!(
                "unknown host policy '{other}' (expected classic or rfc3021)"
            )),
        }
    }
}

/// Inclusive range of assignable host addresses.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Serialize)]
pub struct HostRange {
    pub low: Ipv4Addr,
    pub high: Ipv4Addr,
}

impl fmt::Display for HostRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.low, self.high)
    }
}

/// Every property derived from an [`AddressSpec`].
///
/// Only built by [`SubnetCalculator`](crate::processing::SubnetCalculator);
/// read through the accessors.
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct SubnetResult {
    address: Ipv4Addr,
    prefix: Prefix,
    subnet_mask: Ipv4Addr,
    network_address: Ipv4Addr,
    broadcast_address: Ipv4Addr,
    usable_host_range: Option<HostRange>,
    total_hosts: u64,
    usable_hosts: u64,
}

impl SubnetResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        address: Ipv4Addr,
        prefix: Prefix,
        subnet_mask: Ipv4Addr,
        network_address: Ipv4Addr,
        broadcast_address: Ipv4Addr,
        usable_host_range: Option<HostRange>,
        total_hosts: u64,
        usable_hosts: u64,
    ) -> SubnetResult {
        SubnetResult {
            address,
            prefix,
            subnet_mask,
            network_address,
            broadcast_address,
            usable_host_range,
            total_hosts,
            usable_hosts,
        }
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    /// The prefix formatted as `/N`.
    pub fn cidr(&self) -> String {
        self.prefix.to_string()
    }

    pub fn subnet_mask(&self) -> Ipv4Addr {
        self.subnet_mask
    }

    pub fn network_address(&self) -> Ipv4Addr {
        self.network_address
    }

    pub fn broadcast_address(&self) -> Ipv4Addr {
        self.broadcast_address
    }

    /// `None` when the network has no distinct host addresses.
    pub fn usable_host_range(&self) -> Option<HostRange> {
        self.usable_host_range
    }

    /// `low - high`, or [`NO_HOST_RANGE`].
    pub fn usable_host_range_display(&self) -> String {
        match self.usable_host_range {
            Some(range) => range.to_string(),
            None => NO_HOST_RANGE.to_string(),
        }
    }

    pub fn total_hosts(&self) -> u64 {
        self.total_hosts
    }

    pub fn usable_hosts(&self) -> u64 {
        self.usable_hosts
    }
}
