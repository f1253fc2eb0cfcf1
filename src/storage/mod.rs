//! Mapping store
//!
//! `MappingStore` owns the id → reference map and, when persistence is
//! enabled, the [`AppendLog`] mirroring it. Appending to the log is the only
//! mutation path; nothing is ever updated in place or removed.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::config::{RecordPolicy, StoreConfig};
use crate::errors::{Result, ShortmapError};
use crate::utils::{IdGenerator, UuidIdGenerator, derive_id, is_valid_id};

pub mod append_log;
pub mod record;

pub use append_log::AppendLog;
pub use record::{Record, format_record, parse_record};

/// Options applied when opening a persistent store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    pub record_policy: RecordPolicy,
    pub sync_on_write: bool,
}

impl From<&StoreConfig> for StoreOptions {
    fn from(config: &StoreConfig) -> Self {
        StoreOptions {
            record_policy: config.record_policy,
            sync_on_write: config.sync_on_write,
        }
    }
}

pub struct MappingStore {
    mapping: HashMap<String, String>,
    log: Option<AppendLog>,
    generator: Box<dyn IdGenerator>,
}

impl MappingStore {
    /// Empty store without persistence; mutations are not durable.
    pub fn in_memory() -> Self {
        MappingStore {
            mapping: HashMap::new(),
            log: None,
            generator: Box::new(UuidIdGenerator),
        }
    }

    /// Open a store, replaying `log_path` if one is given.
    pub fn open(log_path: Option<&Path>, options: &StoreOptions) -> Result<Self> {
        match log_path {
            Some(path) => {
                let (log, mapping) = AppendLog::open(path, options)?;
                Ok(MappingStore {
                    mapping,
                    log: Some(log),
                    generator: Box::new(UuidIdGenerator),
                })
            }
            None => {
                info!("No mapping log configured, mappings will not be persisted");
                Ok(Self::in_memory())
            }
        }
    }

    /// Replace the id generator.
    pub fn with_generator<G>(mut self, generator: G) -> Self
    where
        G: IdGenerator + 'static,
    {
        self.generator = Box::new(generator);
        self
    }

    /// Draw ids until one is not already a key of the mapping.
    pub fn generate_id(&mut self) -> String {
        let mut attempts = 1u64;
        loop {
            let id = self.generator.generate();
            if !self.mapping.contains_key(&id) {
                if attempts > 1 {
                    debug!("Generated id {} after {} attempts", id, attempts);
                }
                return id;
            }
            debug!("Id collision on {}, retrying", id);
            attempts += 1;
        }
    }

    /// Add or overwrite the entry for `id`.
    ///
    /// With persistence enabled the record is appended and flushed first;
    /// the in-memory map only changes once the write has succeeded.
    pub fn insert(&mut self, id: &str, reference: &str) -> Result<()> {
        if !is_valid_id(id) {
            return Err(ShortmapError::invalid_reference(format!(
                "id '{}' must be non-empty and contain no whitespace or '/'",
                id
            )));
        }
        if reference.contains(['\n', '\r']) {
            return Err(ShortmapError::invalid_reference(format!(
                "reference for id '{}' contains a line break",
                id
            )));
        }

        if let Some(log) = self.log.as_mut() {
            log.append(id, reference)?;
        }
        self.mapping.insert(id.to_string(), reference.to_string());
        Ok(())
    }

    /// Allocate a fresh id for `reference` and record it.
    pub fn create(&mut self, reference: &str) -> Result<String> {
        let id = self.generate_id();
        self.insert(&id, reference)?;
        debug!("Created {} -> {}", id, reference);
        Ok(id)
    }

    /// Look up a bare id or the last path segment of a URI.
    pub fn resolve(&self, key: &str) -> Result<&str> {
        let id = derive_id(key);
        self.mapping
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| ShortmapError::not_found(format!("no mapping for id '{}'", id)))
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn is_persistent(&self) -> bool {
        self.log.is_some()
    }

    pub fn log_path(&self) -> Option<&Path> {
        self.log.as_ref().map(AppendLog::path)
    }
}

impl std::fmt::Debug for MappingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingStore")
            .field("entries", &self.mapping.len())
            .field("log", &self.log_path())
            .finish()
    }
}
