//! Errors raised while turning user text into an [`AddressSpec`](crate::models::AddressSpec).

use thiserror::Error;

/// Validation failure for `A.B.C.D/N` input.
///
/// None of these are fatal; the interactive loop reports them and prompts
/// again.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum InputError {
    /// wrong number of `/` or `.` separated parts, or undecodable bytes
    #[error("{reason}: '{input}' (expected A.B.C.D/N, e.g. 127.0.0.1/24)")]
    MalformedInput { input: String, reason: &'static str },
    /// octet is not a number or is outside `0..=255`; `position` is 1-based
    #[error("octet {position} must be a number between 0 and 255, got '{value}'")]
    InvalidOctet { position: usize, value: String },
    /// prefix is not a number or is outside `0..=32`
    #[error("CIDR prefix must be a number between 0 and 32, got '{0}'")]
    InvalidPrefix(String),
}
