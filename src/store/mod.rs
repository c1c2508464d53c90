//! @acp:module "Result Stores"
//! @acp:summary "Capability trait for persisting prime sums, plus built-in stores"
//! @acp:domain calculator
//! @acp:layer service
//!
//! A [`Store`] receives every prime sum the calculator produces. Any
//! `Fn(i64) -> Result<()>` closure is a store, which keeps test doubles and
//! ad-hoc sinks one line long.
//!
//! ## Built-in stores
//!
//! - [`MemoryStore`]: keeps values in memory
//! - [`JsonFileStore`]: appends timestamped records to a JSON file

pub mod file;

use std::sync::{Mutex, MutexGuard};

pub use file::{JsonFileStore, PersistedResult, ResultLog};

use crate::error::Result;

/// Store capability - implement to receive prime results
pub trait Store: Send + Sync {
    /// Persist a computed result
    fn persist(&self, value: i64) -> Result<()>;
}

impl<F> Store for F
where
    F: Fn(i64) -> Result<()> + Send + Sync,
{
    fn persist(&self, value: i64) -> Result<()> {
        self(value)
    }
}

/// @acp:summary "In-memory store recording values in persist order"
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<Vec<i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every persisted value
    pub fn values(&self) -> Vec<i64> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<i64>> {
        // a panic mid-push cannot leave the Vec inconsistent
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Store for MemoryStore {
    fn persist(&self, value: i64) -> Result<()> {
        self.lock().push(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    #[test]
    fn test_memory_store_records_in_order() {
        let store = MemoryStore::new();
        store.persist(3).unwrap();
        store.persist(7).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.values(), vec![3, 7]);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_closure_is_a_store() {
        let last = AtomicI64::new(0);
        let sink = |value: i64| -> Result<()> {
            last.store(value, Ordering::SeqCst);
            Ok(())
        };

        let store: &dyn Store = &sink;
        store.persist(13).unwrap();
        assert_eq!(last.load(Ordering::SeqCst), 13);
    }
}
