//! JSON output for scripting.

use crate::models::SubnetResult;
use std::error::Error;

/// Serialize a [`SubnetResult`] as a single-line JSON object.
pub fn render_json(result: &SubnetResult) -> Result<String, Box<dyn Error>> {
    serde_json::to_string(result).map_err(|e| format!("Error serializing JSON: {e}").into())
}
