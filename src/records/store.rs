//! Lock-guarded record collection

use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::record::Record;

/// In-memory record store.
///
/// Reads share a read guard; create and delete take the write guard for the
/// whole check-then-mutate sequence, so no operation is observed half-done.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<Vec<Record>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze and append `value`.
    ///
    /// Fails with `Conflict` if a record with the same value is present.
    pub fn create(&self, value: &str) -> StoreResult<Record> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        if records.iter().any(|r| r.value == value) {
            return Err(StoreError::Conflict(value.to_string()));
        }

        let record = Record::new(value);
        records.push(record.clone());
        Ok(record)
    }

    /// Find the record whose value is exactly `value`
    pub fn get_by_value(&self, value: &str) -> StoreResult<Record> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        records
            .iter()
            .find(|r| r.value == value)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(value.to_string()))
    }

    /// Remove the record whose value is exactly `value`
    pub fn delete(&self, value: &str) -> StoreResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        let position = records
            .iter()
            .position(|r| r.value == value)
            .ok_or_else(|| StoreError::NotFound(value.to_string()))?;

        records.remove(position);
        Ok(())
    }

    /// Every record matching `predicate`, in insertion order
    pub fn list<P>(&self, predicate: P) -> StoreResult<Vec<Record>>
    where
        P: Fn(&Record) -> bool,
    {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        Ok(records.iter().filter(|r| predicate(r)).cloned().collect())
    }

    /// Number of stored records
    pub fn len(&self) -> StoreResult<usize> {
        self.records
            .read()
            .map(|r| r.len())
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_create_and_get() {
        let store = RecordStore::new();
        let created = store.create("racecar").unwrap();

        let fetched = store.get_by_value("racecar").unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.properties, created.properties);
    }

    #[test]
    fn test_duplicate_conflicts() {
        let store = RecordStore::new();
        store.create("hello").unwrap();

        let err = store.create("hello").unwrap_err();
        assert_eq!(err, StoreError::Conflict("hello".to_string()));
        assert_eq!(err.status_code(), 409);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_lookup_is_exact() {
        let store = RecordStore::new();
        store.create("Hello").unwrap();

        assert!(store.get_by_value("hello").is_err());
        assert!(store.create("hello").is_ok());
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_delete() {
        let store = RecordStore::new();
        store.create("hello").unwrap();

        store.delete("hello").unwrap();
        assert!(store.is_empty().unwrap());
        assert_eq!(
            store.get_by_value("hello"),
            Err(StoreError::NotFound("hello".to_string()))
        );
    }

    #[test]
    fn test_delete_missing() {
        let store = RecordStore::new();
        let err = store.delete("ghost").unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_recreate_after_delete() {
        let store = RecordStore::new();
        store.create("hello").unwrap();
        store.delete("hello").unwrap();
        assert!(store.create("hello").is_ok());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = RecordStore::new();
        for v in ["b", "a", "c"] {
            store.create(v).unwrap();
        }

        let all: Vec<String> = store.list(|_| true).unwrap().into_iter().map(|r| r.value).collect();
        assert_eq!(all, vec!["b", "a", "c"]);

        let none = store.list(|_| false).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_concurrent_creates_of_same_value() {
        let store = Arc::new(RecordStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.create("contended").is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_poisoned_lock_surfaces_as_internal() {
        let store = Arc::new(RecordStore::new());
        store.create("hello").unwrap();

        let poisoner = Arc::clone(&store);
        let _ = thread::spawn(move || {
            let _guard = poisoner.records.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        let internal = StoreError::Internal("Lock poisoned".into());
        assert_eq!(store.len(), Err(internal.clone()));
        assert_eq!(store.is_empty(), Err(internal.clone()));
        assert_eq!(store.get_by_value("hello"), Err(internal));
        assert_eq!(store.create("world").unwrap_err().status_code(), 500);
    }
}
