mod record;
mod registry;

pub use record::{Keyed, Record};
pub use registry::{InMemoryRegistry, RecordStorage, RegistryError};
