//! cachestat-core: Core traits and types for the cachestat library
//!
//! This crate provides the event vocabulary, configuration, and the two
//! seams of the library: [`StatsHandler`] for caches that emit events and
//! [`MeterProvider`] for metrics backends that record them.

mod error;
mod traits;
mod types;

pub use error::{Result, StatsError};
pub use traits::*;
pub use types::*;
