//! Registry - keyed in-memory storage for records.
//!
//! ## Example
//!
//! ```
//! use imei_registry::{InMemoryRegistry, Record, RecordStorage, RegistryError};
//!
//! let mut registry = InMemoryRegistry::new();
//! let phone = Record::new("356938035643809", "iphoneSE");
//!
//! registry.save(phone.clone())?;
//! assert!(registry.exists(&phone));
//! assert_eq!(registry.find_by_id("356938035643809"), Some(phone.clone()));
//!
//! registry.delete(&phone)?;
//! assert!(registry.is_empty());
//! # Ok::<(), RegistryError>(())
//! ```

mod in_memory;

use std::collections::HashSet;
use std::fmt;

use crate::record::Record;

/// Error type for registry mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A record with the same id is already stored.
    DuplicateRecord { id: String },
    /// No stored record is equal to the one given.
    RecordNotFound { id: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateRecord { id } => write!(f, "record already stored: {}", id),
            RegistryError::RecordNotFound { id } => write!(f, "record not found: {}", id),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Storage for records unique by their id.
pub trait RecordStorage {
    /// All stored records. Order is unspecified.
    fn get_all(&self) -> HashSet<Record>;

    /// The record stored under `id`, if any.
    fn find_by_id(&self, id: &str) -> Option<Record>;

    /// Insert a record. Fails with `DuplicateRecord` if its id is taken.
    fn save(&mut self, record: Record) -> Result<Record, RegistryError>;

    /// Remove a stored record equal to `record`. Fails with `RecordNotFound` otherwise.
    fn delete(&mut self, record: &Record) -> Result<(), RegistryError>;

    /// Whether a record equal to `record` is stored.
    fn exists(&self, record: &Record) -> bool;
}

pub use in_memory::InMemoryRegistry;
