//! cachestat: Cache event reporting for metrics backends
//!
//! # Features
//!
//! - **Counter reporting** of hits, misses, per-tier hits/misses and loader calls
//! - **Pluggable backends** (OpenTelemetry, `metrics` crate, in-memory)
//! - **Fan-out** to several handlers at once
//! - **In-process tallies** without any backend
//!
//! # Quick Start
//!
//! ```rust
//! use cachestat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let provider = InMemoryProvider::new();
//!     let reporter = CacheEventReporter::new(
//!         "users",
//!         &provider,
//!         ReporterOpts::new().help("Cache events by tier and outcome"),
//!     )?;
//!
//!     reporter.report_local_miss();
//!     reporter.report_remote_hit();
//!
//!     assert_eq!(provider.instrument_total("cache_handle_total"), 2);
//!     Ok(())
//! }
//! ```

mod collector;
mod handlers;
mod provider;
mod reporter;

// Re-export core
pub use cachestat_core::*;

pub use collector::StatsCollector;
pub use handlers::Handlers;
pub use provider::{InMemoryProvider, InstrumentInfo, Recorded, default_provider};
pub use reporter::CacheEventReporter;

#[cfg(feature = "metrics")]
pub use provider::{MetricsProvider, validate_metric_name};

#[cfg(feature = "otel")]
pub use provider::{OtelMeterProvider, validate_instrument_name};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        CacheEvent, CacheEventReporter, Handlers, InMemoryProvider, MeterProvider, ReporterConfig,
        ReporterOpts, Result, StatsCollector, StatsError, StatsHandler,
    };

    #[cfg(feature = "metrics")]
    pub use crate::MetricsProvider;

    #[cfg(feature = "otel")]
    pub use crate::OtelMeterProvider;
}
