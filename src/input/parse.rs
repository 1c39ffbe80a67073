//! Parsing of `A.B.C.D/N` user input.

use crate::error::InputError;
use crate::models::{AddressSpec, MAX_LENGTH};
use regex::Regex;
use std::sync::OnceLock;

/// Sentinel that ends the interactive loop (case-insensitive).
pub const EXIT_COMMAND: &str = "exit";

/// Regex for an unsigned decimal field.
static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_number_regex() -> &'static Regex {
    NUMBER_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

/// True when `line` is the exit sentinel.
pub fn is_exit_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_COMMAND)
}

/// Parse `A.B.C.D/N` into an [`AddressSpec`].
///
/// Surrounding whitespace is ignored, as is whitespace around each field.
/// Every octet must be in `0..=255` and the prefix in `0..=32`.
pub fn parse_address_spec(input: &str) -> Result<AddressSpec, InputError> {
    let input = input.trim();
    log::trace!("parse_address_spec({input})");

    let parts: Vec<&str> = input.split('/').collect();
    if parts.len() != 2 {
        return Err(InputError::MalformedInput {
            input: input.to_string(),
            reason: if parts.len() < 2 {
                "missing CIDR prefix"
            } else {
                "too many '/' separators"
            },
        });
    }

    let fields: Vec<&str> = parts[0].split('.').collect();
    if fields.len() != 4 {
        return Err(InputError::MalformedInput {
            input: input.to_string(),
            reason: "an IPv4 address needs exactly 4 octets",
        });
    }

    let mut octets = [0u8; 4];
    for (i, field) in fields.iter().enumerate() {
        octets[i] = parse_octet(i + 1, field)?;
    }
    let prefix = parse_prefix(parts[1])?;

    AddressSpec::new(octets, prefix)
}

fn parse_octet(position: usize, field: &str) -> Result<u8, InputError> {
    let field = field.trim();
    let invalid = || InputError::InvalidOctet {
        position,
        value: field.to_string(),
    };
    if !get_number_regex().is_match(field) {
        return Err(invalid());
    }
    // digits only, so the sole failure left is overflow past 255
    field.parse::<u8>().map_err(|_| invalid())
}

fn parse_prefix(field: &str) -> Result<u8, InputError> {
    let field = field.trim();
    let invalid = || InputError::InvalidPrefix(field.to_string());
    if !get_number_regex().is_match(field) {
        return Err(invalid());
    }
    match field.parse::<u8>() {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(invalid()),
    }
}
