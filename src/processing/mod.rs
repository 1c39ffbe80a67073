//! Subnet calculation logic.
//!
//! - [`calculator`] - derives mask, addresses, host range and host counts

mod calculator;

// Re-export public types
pub use calculator::SubnetCalculator;
