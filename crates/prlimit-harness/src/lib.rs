//! Argument and output shaping for the prlimit CLI.
//!
//! The binary drives the loose `get_or_set_resource_limit` interface the
//! same way a host-language binding would, so the CLI doubles as an
//! end-to-end exercise of the translation layer. This crate holds the
//! word-to-field parsing and the JSON/plain rendering; the subcommand
//! wiring lives in `src/bin/prlimit_cli.rs`.

use prlimit_abi::{Field, LimitReport};
use serde_json::{json, Value};

/// Parses one limit word from the command line.
///
/// Accepted forms: a non-negative integer, `unlimited` (no ceiling), or
/// `keep` (leave the slot at its kernel-saved value, the null of the loose
/// interface).
pub fn parse_limit_word(word: &str) -> Result<Field, String> {
    if word.eq_ignore_ascii_case("unlimited") {
        return Ok(Field::Number(f64::INFINITY));
    }
    if word.eq_ignore_ascii_case("keep") {
        return Ok(Field::Null);
    }
    word.parse::<u64>()
        .map(|n| Field::Number(n as f64))
        .map_err(|_| format!("invalid limit '{word}' (expected a number, 'unlimited' or 'keep')"))
}

/// Renders one decoded limit value for display.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        None => "saved".to_owned(),
        Some(n) if n == f64::INFINITY => "unlimited".to_owned(),
        Some(n) => format!("{}", n as u64),
    }
}

/// Renders one decoded limit value as JSON.
///
/// Unbounded becomes the string `"unlimited"` rather than a float infinity,
/// which JSON cannot carry; the saved sentinel stays `null`.
pub fn json_value(value: Option<f64>) -> Value {
    match value {
        None => Value::Null,
        Some(n) if n == f64::INFINITY => json!("unlimited"),
        Some(n) => json!(n as u64),
    }
}

/// Renders a previous-limits report as a JSON object.
pub fn json_report(resource: &str, report: &LimitReport) -> Value {
    json!({
        "resource": resource,
        "soft": json_value(report.soft),
        "hard": json_value(report.hard),
    })
}
