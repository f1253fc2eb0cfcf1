//! Command-line interface definitions using clap
//!
//! This module defines the binary's arguments using clap's derive macros.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{RecordPolicy, StaticConfig};

/// shortmap - map long references to short ids over stdin/stdout
///
/// Reads `new <reference>` and `get <key>` lines from stdin and answers each
/// with one line on stdout.
#[derive(Parser, Debug)]
#[command(name = "shortmap")]
#[command(version)]
#[command(about = "Map long references to short ids over a line protocol", long_about = None)]
pub struct Cli {
    /// Append-only mapping log, replayed at startup (omit for an in-memory store)
    pub log_file: Option<PathBuf>,

    /// TOML config file (default: shortmap.toml if present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// How to treat log lines without a space separator: strict | skip
    #[arg(long)]
    pub record_policy: Option<RecordPolicy>,

    /// fsync the mapping log after every append
    #[arg(long)]
    pub sync: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut StaticConfig) {
        if let Some(ref path) = self.log_file {
            config.store.log_file = Some(path.to_string_lossy().into_owned());
        }
        if let Some(policy) = self.record_policy {
            config.store.record_policy = policy;
        }
        if self.sync {
            config.store.sync_on_write = true;
        }
    }
}
