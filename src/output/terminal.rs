//! Terminal output.
//!
//! Renders the start-up banner and the result block for the interactive loop.

use crate::error::InputError;
use crate::models::SubnetResult;
use colored::Colorize;

/// Width of the label column in the result block.
const LABEL_WIDTH: usize = 19;

/// Format a label as a left-aligned field, e.g. `"CIDR:"` padded to `width`.
///
/// # Arguments
/// * `label` - The label text, without the trailing colon
/// * `width` - The minimum width of the field
pub fn format_label<T: ToString>(label: T, width: usize) -> String {
    let labelled = format!("{}:", label.to_string());
    format!("{labelled:<width$}")
}

/// The text shown once when the calculator starts.
pub fn banner() -> String {
    let title = "Subnet Calculator";
    [
        title.to_string(),
        "-".repeat(title.len()),
        "Enter an IP address and CIDR to calculate the subnet mask, network address, \
         broadcast address, usable host range, total hosts, and usable hosts."
            .to_string(),
        "Example: 127.0.0.1/24".to_string(),
        "Enter 'exit' to quit.".to_string(),
        String::new(),
    ]
    .join("\n")
}

/// Render a [`SubnetResult`] as a labelled block, one field per line.
pub fn render_text(result: &SubnetResult, color: bool) -> String {
    let rows = [
        ("IPv4 address", result.address().to_string()),
        ("CIDR", result.cidr()),
        ("Subnet Mask", result.subnet_mask().to_string()),
        ("Network Address", result.network_address().to_string()),
        ("Broadcast Address", result.broadcast_address().to_string()),
        ("Usable Host Range", result.usable_host_range_display()),
        ("Total Hosts", result.total_hosts().to_string()),
        ("Usable Hosts", result.usable_hosts().to_string()),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let label = format_label(label, LABEL_WIDTH);
        if color {
            out.push_str(&format!("{} {value}\n", label.cyan().bold()));
        } else {
            out.push_str(&format!("{label} {value}\n"));
        }
    }
    out
}

/// One line telling the user why their input was rejected.
pub fn render_error(err: &InputError, color: bool) -> String {
    let prefix = "Invalid input:";
    if color {
        format!("{} {err}", prefix.red().bold())
    } else {
        format!("{prefix} {err}")
    }
}
