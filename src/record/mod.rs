//! Record - the immutable value stored in a registry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait for values that carry a natural business key.
pub trait Keyed {
    /// Returns the natural key that identifies this value.
    fn key(&self) -> &str;
}

/// An immutable record identified by a device identifier (e.g. an IMEI).
///
/// Equality and hashing are structural over both fields. A record with a
/// different label is a different record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    id: String,
    label: String,
}

impl Record {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Keyed for Record {
    fn key(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}
