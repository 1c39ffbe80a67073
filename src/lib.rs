// cargo watch -x 'fmt' -x 'test'

//! IPv4 subnet calculator.
//!
//! Derives the mask, network and broadcast address, usable host range and
//! host counts for an `A.B.C.D/N` input.

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
mod repl;

pub use config::{Config, OutputFormat};
pub use error::InputError;
pub use models::{AddressSpec, HostPolicy, HostRange, SubnetResult};
pub use processing::SubnetCalculator;
pub use repl::{run_repl, RunSummary};

/// Parse `A.B.C.D/N` and calculate it in one step.
///
/// # Examples
/// ```
/// use subnet_calculator::{calculate, HostPolicy};
/// let result = calculate("192.168.1.10/24", HostPolicy::Classic).unwrap();
/// assert_eq!(result.network_address().to_string(), "192.168.1.0");
/// assert_eq!(result.usable_hosts(), 254);
/// ```
pub fn calculate(input: &str, policy: HostPolicy) -> Result<SubnetResult, InputError> {
    let spec = input::parse_address_spec(input)?;
    Ok(SubnetCalculator::new(policy).calculate(&spec))
}
