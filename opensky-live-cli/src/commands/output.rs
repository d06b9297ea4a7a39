//! JSON output.

use serde::Serialize;

use opensky_live::tools::Envelope;

use crate::error::CliError;

/// Render an envelope as pretty JSON.
pub fn render<T: Serialize>(envelope: &Envelope<T>) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(envelope)?)
}

/// Print an envelope to stdout and return its `ok` flag.
pub fn emit<T: Serialize>(envelope: &Envelope<T>) -> Result<bool, CliError> {
    println!("{}", render(envelope)?);
    Ok(envelope.ok)
}
