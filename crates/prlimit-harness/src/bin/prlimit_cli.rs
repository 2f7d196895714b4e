//! CLI entrypoint for the prlimit harness.
//!
//! Drives the loose argument interface end to end: every subcommand builds
//! an untyped argument list and hands it to `get_or_set_resource_limit`,
//! exactly as a host-language binding would.

use clap::{Parser, Subcommand};

use prlimit_abi::{get_or_set_resource_limit, Arg, LimitReport, LimitSpec};
use prlimit_harness::{format_value, json_report, parse_limit_word};

/// Get or set process resource limits via prlimit(2).
#[derive(Debug, Parser)]
#[command(name = "prlimit-cli")]
#[command(about = "Get or set process resource limits via prlimit(2)")]
struct Cli {
    /// Target pid (0 = this process, negative = a process group).
    #[arg(long, default_value_t = 0)]
    pid: i32,
    /// Emit JSON instead of plain text.
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read the current soft/hard pair for one resource.
    Get {
        /// Resource name (case-insensitive) or raw numeric code.
        resource: String,
    },
    /// Atomically set the pair, printing the previous values.
    Set {
        /// Resource name (case-insensitive) or raw numeric code.
        resource: String,
        /// New soft limit: a number, 'unlimited', or 'keep'.
        soft: String,
        /// New hard limit: a number, 'unlimited', or 'keep'.
        hard: String,
    },
    /// Read every resource kind this build supports.
    List,
}

fn resource_arg(resource: &str) -> Arg {
    // A numeric spelling is a raw code, passed through unvalidated.
    match resource.parse::<i64>() {
        Ok(code) => Arg::Number(code as f64),
        Err(_) => Arg::Text(resource.to_owned()),
    }
}

fn emit(json: bool, resource: &str, report: &LimitReport) {
    if json {
        println!("{}", json_report(resource, report));
    } else {
        println!(
            "{resource}: soft={} hard={}",
            format_value(report.soft),
            format_value(report.hard)
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let pid = Arg::Number(f64::from(cli.pid));

    match &cli.command {
        Command::Get { resource } => {
            let report = get_or_set_resource_limit(&[pid, resource_arg(resource)])?;
            emit(cli.json, resource, &report);
        }
        Command::Set {
            resource,
            soft,
            hard,
        } => {
            let spec = LimitSpec {
                soft: parse_limit_word(soft)?,
                hard: parse_limit_word(hard)?,
            };
            let report =
                get_or_set_resource_limit(&[pid, resource_arg(resource), Arg::Limit(spec)])?;
            emit(cli.json, resource, &report);
        }
        Command::List => {
            let mut rows = Vec::new();
            for entry in prlimit_core::resource_table() {
                let args = [pid.clone(), Arg::Text(entry.name.to_owned())];
                let report = get_or_set_resource_limit(&args)?;
                if cli.json {
                    rows.push(json_report(entry.name, &report));
                } else {
                    emit(false, entry.name, &report);
                }
            }
            if cli.json {
                println!("{}", serde_json::Value::Array(rows));
            }
        }
    }

    Ok(())
}
