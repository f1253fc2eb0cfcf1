//! Line-oriented command loop
//!
//! Reads commands until the input is exhausted and writes exactly one
//! response line per command, flushing after each so a caller on the other
//! end of a pipe sees it immediately.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::command::{Command, NULL_RESPONSE};
use crate::errors::{Result, ShortmapError};
use crate::storage::MappingStore;

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub commands: u64,
    pub created: u64,
    pub resolved: u64,
    pub misses: u64,
}

/// Execute one command against the store and produce the response line.
///
/// Malformed or unknown commands and unknown ids answer `NULL`. Errors that
/// would lose data (a failed log append) are returned.
pub fn execute_line(store: &mut MappingStore, line: &str, stats: &mut LoopStats) -> Result<String> {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(e) => {
            debug!("{}", e);
            stats.misses += 1;
            return Ok(NULL_RESPONSE.to_string());
        }
    };

    match command {
        Command::New(reference) => {
            let id = store.create(&reference)?;
            stats.created += 1;
            Ok(id)
        }
        Command::Get(key) => match store.resolve(&key) {
            Ok(reference) => {
                stats.resolved += 1;
                Ok(reference.to_string())
            }
            Err(ShortmapError::NotFound(msg)) => {
                debug!("{}", msg);
                stats.misses += 1;
                Ok(NULL_RESPONSE.to_string())
            }
            Err(e) => Err(e),
        },
        Command::Unknown(keyword) => {
            debug!("Unknown command '{}'", keyword);
            stats.misses += 1;
            Ok(NULL_RESPONSE.to_string())
        }
    }
}

/// Run the command loop until `reader` reaches end of input.
///
/// A line that is not valid UTF-8 is answered with `NULL`; only a failure to
/// read the input itself ends the loop with an error.
pub fn run_command_loop<R, W>(store: &mut MappingStore, mut reader: R, mut writer: W) -> Result<LoopStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = LoopStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(|e| {
            ShortmapError::file_operation(format!("Failed to read command input: {}", e))
        })?;
        if read == 0 {
            break;
        }
        stats.commands += 1;

        let result = match std::str::from_utf8(&buf) {
            Ok(line) => execute_line(store, line, &mut stats),
            Err(e) => Err(ShortmapError::malformed_command(format!(
                "input line is not valid UTF-8: {}",
                e
            ))),
        };

        let response = match result {
            Ok(response) => response,
            // 非法引用（如含有 \r）不影响后续命令
            Err(e) if !e.is_fatal() => {
                debug!("{}", e);
                stats.misses += 1;
                NULL_RESPONSE.to_string()
            }
            Err(e) => return Err(e),
        };

        writeln!(writer, "{}", response)?;
        writer.flush()?;
    }

    info!(
        "Input exhausted: {} commands, {} created, {} resolved, {} answered NULL",
        stats.commands, stats.created, stats.resolved, stats.misses
    );
    Ok(stats)
}
