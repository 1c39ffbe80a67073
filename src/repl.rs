//! The interactive read → parse → calculate → render loop.

use crate::config::{Config, OutputFormat};
use crate::error::InputError;
use crate::input::{is_exit_command, parse_address_spec};
use crate::output::{render_error, render_json, render_text};
use crate::processing::SubnetCalculator;
use std::error::Error;
use std::io::{BufRead, Write};

/// What happened during one run of the loop.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct RunSummary {
    /// Inputs that produced a result.
    pub calculations: usize,
    /// Inputs rejected by validation.
    pub rejected: usize,
    /// True when the loop ended on `exit` rather than end of input.
    pub exited: bool,
}

/// Prompt on `output`, read lines from `input` until `exit` or end of input.
///
/// Validation errors are reported and the loop continues. Only I/O errors on
/// either stream are returned.
pub fn run_repl<R, W>(
    mut input: R,
    output: &mut W,
    config: &Config,
) -> Result<RunSummary, Box<dyn Error>>
where
    R: BufRead,
    W: Write,
{
    let calculator = SubnetCalculator::new(config.host_policy);
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(|e| format!("Error reading input: {e}"))?;
        if read == 0 {
            log::info!("End of input");
            // keep the shell prompt off our prompt line
            writeln!(output)?;
            break;
        }

        // undecodable bytes are bad input, not a broken stream
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                let err = InputError::MalformedInput {
                    input: String::from_utf8_lossy(&buf).trim().to_string(),
                    reason: "input is not valid UTF-8",
                };
                log::warn!("Rejected input: {e}");
                writeln!(output, "{}", render_error(&err, config.color))?;
                summary.rejected += 1;
                continue;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if is_exit_command(trimmed) {
            summary.exited = true;
            break;
        }

        match parse_address_spec(trimmed) {
            Ok(spec) => {
                let result = calculator.calculate(&spec);
                match config.output {
                    OutputFormat::Text => {
                        writeln!(output, "{}", render_text(&result, config.color))?
                    }
                    OutputFormat::Json => writeln!(output, "{}", render_json(&result)?)?,
                }
                summary.calculations += 1;
            }
            Err(e) => {
                log::warn!("Rejected input {trimmed:?}: {e}");
                writeln!(output, "{}", render_error(&e, config.color))?;
                summary.rejected += 1;
            }
        }
    }

    log::info!(
        "Session done: {} calculations, {} rejected",
        summary.calculations,
        summary.rejected
    );
    Ok(summary)
}
