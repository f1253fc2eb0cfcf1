//! Short id generation and lookup-key derivation
//!
//! Ids are the first [`ID_LENGTH`] lowercase hex digits of a random UUID v4,
//! i.e. uniform over a 2^32 space. Uniqueness is not the generator's job:
//! [`MappingStore`](crate::storage::MappingStore) retries on collision.

use uuid::Uuid;

/// 短 ID 长度（十六进制字符数）
pub const ID_LENGTH: usize = 8;

/// Source of candidate ids.
///
/// Implementations are pure generators and never look at the store.
pub trait IdGenerator: Send {
    fn generate(&mut self) -> String;
}

/// Default generator backed by `uuid` v4.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&mut self) -> String {
        let mut hex = Uuid::new_v4().simple().to_string();
        hex.truncate(ID_LENGTH);
        hex
    }
}

/// Any `FnMut() -> String` works as a generator, which keeps tests short.
impl<F> IdGenerator for F
where
    F: FnMut() -> String + Send,
{
    fn generate(&mut self) -> String {
        self()
    }
}

/// Derive the lookup id from a bare id or a slash-delimited path/URI.
///
/// Returns the substring after the last `/`, or the whole key if it has none.
pub fn derive_id(key: &str) -> &str {
    match key.rfind('/') {
        Some(pos) => &key[pos + 1..],
        None => key,
    }
}

/// Check that `id` can be written to and read back from the log unchanged
/// and is reachable through [`derive_id`], which never yields a `/`.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && !id.contains(|c: char| c.is_whitespace() || c == '/')
}
