//! Storage collaborator boundary.
//!
//! The scoring engine performs no I/O of its own. Everything it reads arrives through
//! [`SignalStore`]; persistence, schema and write atomicity belong to the implementor.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use client::SignalStore;
pub use error::{StoreError, StoreResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSignalStore;
