//! Append-only mapping log
//!
//! The file is opened once (created if absent), replayed fully to rebuild the
//! in-memory mapping, and then kept open for appends until the handle is
//! dropped.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::StoreOptions;
use super::record::{format_record, parse_record};
use crate::config::RecordPolicy;
use crate::errors::{Result, ShortmapError};

#[derive(Debug)]
pub struct AppendLog {
    path: PathBuf,
    file: File,
    sync_on_write: bool,
}

impl AppendLog {
    /// Open (or create) the log at `path` and replay it.
    ///
    /// Returns the open handle together with the mapping rebuilt from the
    /// file. Later records override earlier ones with the same id.
    pub fn open(path: &Path, options: &StoreOptions) -> Result<(Self, HashMap<String, String>)> {
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| {
                ShortmapError::file_operation(format!(
                    "Failed to open mapping log {}: {}",
                    path.display(),
                    e
                ))
            })?;

        let mapping = Self::replay(&file, path, options.record_policy)?;
        info!(
            "Loaded {} mappings from {}",
            mapping.len(),
            path.display()
        );

        Ok((
            AppendLog {
                path: path.to_path_buf(),
                file,
                sync_on_write: options.sync_on_write,
            },
            mapping,
        ))
    }

    fn replay(file: &File, path: &Path, policy: RecordPolicy) -> Result<HashMap<String, String>> {
        let mut mapping = HashMap::new();
        let mut skipped = 0usize;
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|e| {
                ShortmapError::file_operation(format!(
                    "Failed to read mapping log {}: {}",
                    path.display(),
                    e
                ))
            })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let parsed = std::str::from_utf8(&buf)
                .map_err(|e| ShortmapError::malformed_record(format!("invalid UTF-8: {}", e)))
                .and_then(parse_record);

            match parsed {
                Ok(Some(record)) => {
                    if let Some(previous) =
                        mapping.insert(record.id.to_string(), record.reference.to_string())
                    {
                        debug!(
                            "Line {}: id {} overrides earlier reference {}",
                            line_no, record.id, previous
                        );
                    }
                }
                Ok(None) => {}
                Err(e) => match policy {
                    RecordPolicy::Strict => {
                        return Err(ShortmapError::malformed_record(format!(
                            "{}:{}: {}",
                            path.display(),
                            line_no,
                            e.message()
                        )));
                    }
                    RecordPolicy::Skip => {
                        warn!("Skipping line {} of {}: {}", line_no, path.display(), e);
                        skipped += 1;
                    }
                },
            }
        }

        if skipped > 0 {
            warn!("Skipped {} malformed records in {}", skipped, path.display());
        }

        Ok(mapping)
    }

    /// Append one record and flush it before returning.
    pub fn append(&mut self, id: &str, reference: &str) -> Result<()> {
        let line = format_record(id, reference);
        self.file.write_all(line.as_bytes()).map_err(|e| {
            ShortmapError::file_operation(format!(
                "Failed to append to mapping log {}: {}",
                self.path.display(),
                e
            ))
        })?;
        self.file.flush()?;

        if self.sync_on_write {
            self.file.sync_data()?;
        }

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
