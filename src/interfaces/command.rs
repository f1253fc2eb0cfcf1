//! Protocol command parsing
//!
//! One command per line: `<keyword><space><argument>`. The argument is the
//! rest of the line after the first space and may itself contain spaces.

use crate::errors::{Result, ShortmapError};

/// 无结果时的响应
pub const NULL_RESPONSE: &str = "NULL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new <reference>`
    New(String),
    /// `get <key>`
    Get(String),
    /// Any other keyword; always answered with `NULL`.
    Unknown(String),
}

impl Command {
    /// Parse a single input line.
    ///
    /// Surrounding whitespace is trimmed first, so `"new "` has no argument
    /// and is a `MalformedCommand`.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (keyword, argument) = line.split_once(' ').ok_or_else(|| {
            ShortmapError::malformed_command(format!(
                "expected '<command> <argument>', got '{}'",
                line
            ))
        })?;

        Ok(match keyword {
            "new" => Command::New(argument.to_string()),
            "get" => Command::Get(argument.to_string()),
            other => Command::Unknown(other.to_string()),
        })
    }
}
