//! IPv4 prefix and mask arithmetic.
//!
//! Provides the [`Prefix`] newtype for validated CIDR prefix lengths, along
//! with the bitwise helpers used to derive masks, network and broadcast
//! addresses.

use crate::error::InputError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// A CIDR prefix length, guaranteed to be in `0..=32`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Prefix(u8);

impl Prefix {
    /// Create a [`Prefix`], rejecting lengths above [`MAX_LENGTH`].
    pub fn new(len: u8) -> Result<Prefix, InputError> {
        if len > MAX_LENGTH {
            Err(InputError::InvalidPrefix(len.to_string()))
        } else {
            Ok(Prefix(len))
        }
    }

    pub fn length(self) -> u8 {
        self.0
    }

    /// Number of host bits, `32 - len`.
    pub fn host_bits(self) -> u8 {
        MAX_LENGTH - self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

/// Convert a CIDR prefix length to a subnet mask.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_calculator::models::{get_cidr_mask, Prefix};
/// let mask = get_cidr_mask(Prefix::new(24).unwrap());
/// assert_eq!(mask, Ipv4Addr::new(255, 255, 255, 0));
/// ```
pub fn get_cidr_mask(prefix: Prefix) -> Ipv4Addr {
    let right_len = prefix.host_bits();
    // u64 so that a 32 bit shift for /0 is defined
    let all_bits = u32::MAX as u64;
    let mask = (all_bits >> right_len) << right_len;

    Ipv4Addr::from(mask as u32)
}

/// Network address: `addr AND mask`.
pub fn network_addr(addr: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & u32::from(mask))
}

/// Broadcast address: `network OR NOT mask`.
pub fn broadcast_addr(network: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(network) | !u32::from(mask))
}

/// Number of addresses in a subnet, `2^(32 - prefix)`.
///
/// Returned as u64 since a /0 holds 2^32 addresses.
pub fn total_hosts(prefix: Prefix) -> u64 {
    1u64 << prefix.host_bits()
}
