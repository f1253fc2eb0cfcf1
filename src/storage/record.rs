//! Log record format
//!
//! One record per line: `<id><space><reference>\n`. The id never contains
//! whitespace; the reference is the rest of the line and may contain spaces.

use crate::errors::{Result, ShortmapError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub id: &'a str,
    pub reference: &'a str,
}

/// Parse one log line.
///
/// Only the line terminator (`\n` or `\r\n`) is stripped, so a reference
/// keeps leading and trailing spaces and `"id "` has an empty reference.
/// Whitespace-only lines yield `Ok(None)`; a line without a space separator
/// or with an empty id is a `MalformedRecord`.
pub fn parse_record(line: &str) -> Result<Option<Record<'_>>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    match line.split_once(' ') {
        Some((id, reference)) if !id.is_empty() => Ok(Some(Record { id, reference })),
        Some(_) => Err(ShortmapError::malformed_record(format!(
            "empty id in record '{}'",
            line
        ))),
        None => Err(ShortmapError::malformed_record(format!(
            "missing space separator in record '{}'",
            line
        ))),
    }
}

/// Format a record as a complete log line, newline included.
pub fn format_record(id: &str, reference: &str) -> String {
    format!("{} {}\n", id, reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_record() {
        let record = parse_record("abc12345 http://example.com").unwrap().unwrap();
        assert_eq!(record.id, "abc12345");
        assert_eq!(record.reference, "http://example.com");
    }

    #[test]
    fn test_parse_reference_keeps_internal_spaces() {
        let record = parse_record("abc12345 some reference with spaces\n")
            .unwrap()
            .unwrap();
        assert_eq!(record.reference, "some reference with spaces");
    }

    #[test]
    fn test_parse_crlf_line() {
        let record = parse_record("abc12345 http://example.com\r\n")
            .unwrap()
            .unwrap();
        assert_eq!(record.reference, "http://example.com");
    }

    #[test]
    fn test_parse_keeps_reference_edges() {
        let record = parse_record("abc12345 \n").unwrap().unwrap();
        assert_eq!(record.id, "abc12345");
        assert_eq!(record.reference, "");

        let record = parse_record("abc12345  padded \r\n").unwrap().unwrap();
        assert_eq!(record.reference, " padded ");
    }

    #[test]
    fn test_parse_empty_id() {
        let err = parse_record(" leading-space").unwrap_err();
        assert!(matches!(err, ShortmapError::MalformedRecord(_)));
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_record("").unwrap(), None);
        assert_eq!(parse_record("   \n").unwrap(), None);
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = parse_record("nospacehere").unwrap_err();
        assert!(matches!(err, ShortmapError::MalformedRecord(_)));
        assert!(err.message().contains("nospacehere"));
    }

    #[test]
    fn test_format_record() {
        assert_eq!(format_record("abc12345", "a b c"), "abc12345 a b c\n");
    }
}
