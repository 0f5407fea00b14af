//! Output formatting for the CLI.
//!
//! Supports human-readable and JSON output.

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::cli::query::Query;
use crate::{GetResult, Value};

/// A single lookup result, ready for JSON output.
#[derive(Debug, Serialize)]
pub struct LookupResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oid: Option<String>,
    #[serde(rename = "type")]
    pub value_type: String,
    pub type_code: u16,
    pub value: serde_json::Value,
}

impl From<&GetResult> for LookupResult {
    fn from(result: &GetResult) -> Self {
        let ty = result.variable_type();
        Self {
            oid: result.oid().map(|o| o.to_string()),
            value_type: ty.to_string(),
            type_code: ty.as_u16(),
            value: result.value().map(json_value).unwrap_or(serde_json::Value::Null),
        }
    }
}

fn json_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Integer(v) => (*v).into(),
        Value::Counter32(v) | Value::Gauge32(v) | Value::TimeTicks(v) => (*v).into(),
        Value::Counter64(v) => (*v).into(),
        Value::OctetString(bytes) => match std::str::from_utf8(bytes) {
            Ok(s) => s.into(),
            Err(_) => hex_string(bytes).into(),
        },
        Value::Opaque(bytes) => hex_string(bytes).into(),
        Value::ObjectIdentifier(_) | Value::IpAddress(_) => value.to_string().into(),
        Value::Null | Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView => {
            serde_json::Value::Null
        }
    }
}

fn hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format one result as a human-readable line.
pub fn format_human(result: &GetResult) -> String {
    match result {
        GetResult::Value(vb) => {
            let value = match &vb.value {
                Value::OctetString(bytes) if std::str::from_utf8(bytes).is_ok() => {
                    format!("\"{}\"", vb.value)
                }
                other => other.to_string(),
            };
            format!("{} = {}: {}", vb.oid, vb.variable_type(), value)
        }
        GetResult::NoSuchObject => "No Such Object available".to_string(),
    }
}

/// Write verbose lookup details to stderr.
pub fn write_verbose_query(query: &Query, result: &GetResult, elapsed: Duration) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "--- {} ---", query);
    let _ = writeln!(stderr, "Type:      {}", result.variable_type());
    let _ = writeln!(stderr, "Time:      {:.3}ms", elapsed.as_secs_f64() * 1000.0);
}

/// Write lookup results to stdout in the chosen format.
pub fn write_results(format: OutputFormat, results: &[GetResult]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Human => {
            for result in results {
                writeln!(stdout, "{}", format_human(result))?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let out: Vec<LookupResult> = results.iter().map(LookupResult::from).collect();
            serde_json::to_writer_pretty(&mut stdout, &out)?;
            writeln!(stdout)
        }
    }
}
