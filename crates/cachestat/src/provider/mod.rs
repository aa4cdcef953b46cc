//! Metrics backends a reporter can draw its counter from

use std::sync::Arc;

use cachestat_core::MeterProvider;

mod memory;
#[cfg(feature = "metrics")]
mod metrics;
#[cfg(feature = "otel")]
mod otel;

pub use memory::{InMemoryProvider, InstrumentInfo, Recorded};

#[cfg(feature = "metrics")]
pub use self::metrics::{MetricsProvider, validate_metric_name};

#[cfg(feature = "otel")]
pub use otel::{OtelMeterProvider, validate_instrument_name};

/// Provider used when the caller does not inject one
///
/// The process-wide OpenTelemetry provider when the `otel` feature is
/// enabled, otherwise [`NoopProvider`](cachestat_core::NoopProvider).
/// Reporters only see this when built with
/// [`CacheEventReporter::with_default_provider`](crate::CacheEventReporter::with_default_provider).
pub fn default_provider() -> Arc<dyn MeterProvider> {
    #[cfg(feature = "otel")]
    {
        Arc::new(OtelMeterProvider::global())
    }
    #[cfg(not(feature = "otel"))]
    {
        Arc::new(cachestat_core::NoopProvider)
    }
}
