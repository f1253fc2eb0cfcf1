//! User-facing interfaces
//!
//! Currently a single line protocol on stdin/stdout.

pub mod command;
pub mod repl;

pub use command::{Command, NULL_RESPONSE};
pub use repl::{LoopStats, execute_line, run_command_loop};
