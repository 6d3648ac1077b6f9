//! Key-Value Storage
//!
//! The dashboard keeps two kinds of state outside the process:
//!
//! - **tab storage**: lives as long as one browser tab (`sessionStorage`)
//! - **durable storage**: survives restarts (`localStorage`)
//!
//! Both are modelled by the same [`KeyValueStore`] trait so the session
//! manager never cares where its strings end up.
//!
//! # Backends
//!
//! - [`MemoryStore`]: in-process map, used for tab storage in the CLI and tests
//! - [`FileStore`]: JSON file on disk, used for durable storage natively
//!
//! The browser backend lives in the `sterling-ui` crate.

pub mod error;
pub mod memory;
#[cfg(feature = "native")]
pub mod file;

pub use error::{StoreError, StoreResult};
#[cfg(feature = "native")]
pub use file::FileStore;
pub use memory::MemoryStore;

/// String key-value store with the semantics of the Web Storage API
///
/// Methods take `&self`; backends use interior mutability so a store can be
/// shared between the session manager and whatever renders the page.
pub trait KeyValueStore {
    /// Read a value, `None` if the key is absent
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Remove every key
    fn clear(&self) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }

    fn clear(&self) -> StoreResult<()> {
        (**self).clear()
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }

    fn clear(&self) -> StoreResult<()> {
        (**self).clear()
    }
}
