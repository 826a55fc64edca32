//! InMemoryRegistry - HashMap-backed record storage.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::{RecordStorage, RegistryError};
use crate::record::{Keyed, Record};

/// In-memory registry backed by a HashMap keyed by record id.
///
/// At most one record exists per id.
#[derive(Debug, Clone)]
pub struct InMemoryRegistry {
    records: HashMap<String, Record>,
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Create an empty registry with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any record is stored under `id`, whatever its label.
    pub fn contains_id(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }
}

impl RecordStorage for InMemoryRegistry {
    fn get_all(&self) -> HashSet<Record> {
        self.records.values().cloned().collect()
    }

    fn find_by_id(&self, id: &str) -> Option<Record> {
        self.records.get(id).cloned()
    }

    fn save(&mut self, record: Record) -> Result<Record, RegistryError> {
        if self.records.contains_key(record.key()) {
            debug!(id = record.key(), "save rejected: duplicate record");
            return Err(RegistryError::DuplicateRecord {
                id: record.key().to_string(),
            });
        }

        debug!(id = record.key(), label = record.label(), "record saved");
        self.records.insert(record.key().to_string(), record.clone());
        Ok(record)
    }

    fn delete(&mut self, record: &Record) -> Result<(), RegistryError> {
        if !self.exists(record) {
            debug!(id = record.key(), "delete rejected: record not found");
            return Err(RegistryError::RecordNotFound {
                id: record.key().to_string(),
            });
        }

        self.records.remove(record.key());
        debug!(id = record.key(), "record deleted");
        Ok(())
    }

    fn exists(&self, record: &Record) -> bool {
        self.records.get(record.key()) == Some(record)
    }
}
