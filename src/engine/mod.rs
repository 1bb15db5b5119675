//! Engine facade tying the store, scorer and diagnostics together.
//!
//! [`RelevanceEngine`] awaits its [`SignalStore`](crate::store::SignalStore) for fresh data on
//! every call and then runs the synchronous computations. Nothing is cached between calls.

pub mod error;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::{EngineError, EngineResult};
pub use service::RelevanceEngine;
