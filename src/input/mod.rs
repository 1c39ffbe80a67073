//! User input handling.
//!
//! - [`parse`] - `A.B.C.D/N` parsing with octet and prefix bounds checks

mod parse;

pub use parse::{is_exit_command, parse_address_spec, EXIT_COMMAND};
