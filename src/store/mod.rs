//! Store Layer
//!
//! Contract with the remote system of record, plus an in-memory implementation.

mod memory;
mod traits;


pub use memory::InMemoryStore;
pub use traits::{details_from_json, RemoteStore, StoreResponse, StoreResult};
