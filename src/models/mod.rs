//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures:
//! - [`Prefix`] - validated CIDR prefix length and the mask arithmetic
//! - [`AddressSpec`] - validated calculator input
//! - [`SubnetResult`] - everything derived from an [`AddressSpec`]

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{broadcast_addr, get_cidr_mask, network_addr, total_hosts, Prefix, MAX_LENGTH};
pub use subnet::{AddressSpec, HostPolicy, HostRange, SubnetResult, NO_HOST_RANGE};
