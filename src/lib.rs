//! shortmap - a minimal short-id allocation service
//!
//! Long references are assigned random 8-character hex ids; ids (or URIs
//! ending in one) resolve back to the reference. Mappings can be mirrored to
//! an append-only log that is replayed at startup.
//!
//! # Architecture
//! - `storage`: `MappingStore` and its append-only log
//! - `interfaces`: the `new` / `get` line protocol
//! - `utils`: id generation and lookup-key derivation
//! - `config`: static configuration (TOML + environment)
//! - `cli`: command-line arguments
//! - `system`: logging initialization

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod storage;
pub mod system;
pub mod utils;
