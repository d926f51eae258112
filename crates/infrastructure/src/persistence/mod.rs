//! Response cache
//!
//! Successful planets responses are stored per request so repeated requests
//! for the same page are answered without the network.

mod file_storage;
mod memory_storage;
mod response_storage;

pub use file_storage::FilePlanetsResponseStorage;
pub use memory_storage::InMemoryPlanetsResponseStorage;
pub use response_storage::{CachedResponse, PlanetsResponseStorage, RequestKey, StorageError};
