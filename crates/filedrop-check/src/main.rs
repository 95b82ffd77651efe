//! filedrop-check: run drop zone validation over file names.
//!
//! Feeds the given names through the same [`DropZone`] a browser zone
//! uses and prints the message the zone would show. Handy for checking a
//! zone configuration file before shipping it.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin filedrop-check -- [OPTIONS] [NAMES]...
//! ```
//!
//! Exit status is 0 when the batch is accepted or empty, 1 when it is
//! rejected, and 2 when the configuration cannot be loaded.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use filedrop_core::{DropZone, Message, Outcome, Rejection, Texts, ZoneConfig};
use serde::Serialize;

/// Check file names against a drop zone's count limit and extension
/// whitelist.
#[derive(Parser)]
#[command(name = "filedrop-check", version)]
struct Cli {
    /// File names making up one dropped batch.
    names: Vec<String>,

    /// JSON zone configuration. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum files per batch (0 for unlimited).
    #[arg(long)]
    count: Option<usize>,

    /// Accepted extension; repeat for several. Replaces the config's list.
    #[arg(long = "format", value_name = "EXT")]
    formats: Vec<String>,

    /// Milliseconds a success message stays visible [default: 1000].
    #[arg(long, value_name = "MS")]
    success_ms: Option<u32>,

    /// Milliseconds an error message stays visible [default: 2000].
    #[arg(long, value_name = "MS")]
    error_ms: Option<u32>,

    /// Print the outcome as JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn zone_config(&self) -> Result<ZoneConfig, filedrop_core::ConfigError> {
        let mut config = match &self.config {
            Some(path) => ZoneConfig::from_path(path)?,
            None => ZoneConfig::default(),
        };
        if let Some(count) = self.count {
            config.max_files = NonZeroUsize::new(count);
        }
        if !self.formats.is_empty() {
            config.formats.clone_from(&self.formats);
        }
        if let Some(ms) = self.success_ms {
            config.durations.success_ms = ms;
        }
        if let Some(ms) = self.error_ms {
            config.durations.error_ms = ms;
        }
        Ok(config)
    }
}

/// Machine-readable summary of one check.
#[derive(Serialize)]
struct Report<'a> {
    outcome: &'static str,
    rejection: Option<&'a Rejection>,
    message: Option<&'a Message>,
    dismiss_after_ms: Option<u64>,
}

fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.zone_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let mut zone = DropZone::new(config, Texts::default());
    let outcome = zone.drop(&cli.names);

    let report = Report {
        outcome: match outcome {
            Outcome::Accepted(_) => "accepted",
            Outcome::Rejected(..) => "rejected",
            Outcome::Empty => "empty",
        },
        rejection: match &outcome {
            Outcome::Rejected(r, _) => Some(r),
            _ => None,
        },
        message: zone.message(),
        dismiss_after_ms: outcome.scheduled().map(|s| millis(s.dismiss_after)),
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize report: {e}");
                return ExitCode::from(2);
            }
        }
    } else {
        match report.message {
            Some(message) => println!("[{}] {}", message.kind.as_str(), message.text),
            None => println!("[{}] nothing to upload", report.outcome),
        }
        if let Some(rejection) = report.rejection {
            eprintln!("  {rejection}");
        }
    }

    if matches!(outcome, Outcome::Rejected(..)) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
