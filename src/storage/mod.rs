//! Durable key-value storage for the session record.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::LeadHubResult;

/// String-keyed, string-valued store that survives process restarts
/// (or, for [`MemoryStore`], pretends to).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> LeadHubResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> LeadHubResult<()>;
    /// Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> LeadHubResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> LeadHubResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> LeadHubResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> LeadHubResult<()> {
        (**self).remove(key)
    }
}
