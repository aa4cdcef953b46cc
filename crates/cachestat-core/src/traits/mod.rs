//! Core traits for event reporting

mod handler;
mod provider;
#[cfg(feature = "tracing")]
mod tracing;

pub use handler::{NoopHandler, StatsHandler};
pub use provider::{Counter, Meter, MeterProvider, NoopProvider};

#[cfg(feature = "tracing")]
pub use self::tracing::TracingHandler;
