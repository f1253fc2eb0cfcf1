pub mod id;

pub use id::{ID_LENGTH, IdGenerator, UuidIdGenerator, derive_id, is_valid_id};
