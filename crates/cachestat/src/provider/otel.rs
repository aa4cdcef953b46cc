//! OpenTelemetry provider adapter

use std::fmt;
use std::sync::Arc;

use cachestat_core::{Counter, Label, Meter, MeterProvider, Result, StatsError};
use opentelemetry::{KeyValue, global, metrics as otel};

const MAX_NAME_LEN: usize = 255;

#[derive(Clone)]
enum Source {
    Global,
    Provider(Arc<dyn otel::MeterProvider + Send + Sync>),
}

/// Adapter over an OpenTelemetry meter provider
///
/// # Example
/// ```ignore
/// use cachestat::{CacheEventReporter, OtelMeterProvider, ReporterOpts};
///
/// // Install an SDK provider first, e.g. with an OTLP or Prometheus exporter
/// // opentelemetry::global::set_meter_provider(sdk_provider);
///
/// let provider = OtelMeterProvider::global();
/// let reporter = CacheEventReporter::new("users", &provider, ReporterOpts::new())?;
/// ```
#[derive(Clone)]
pub struct OtelMeterProvider {
    source: Source,
}

impl OtelMeterProvider {
    /// Wrap a specific provider, e.g. an `SdkMeterProvider`
    pub fn new<P>(provider: P) -> Self
    where
        P: otel::MeterProvider + Send + Sync + 'static,
    {
        Self {
            source: Source::Provider(Arc::new(provider)),
        }
    }

    /// Use whatever provider is installed in `opentelemetry::global`
    ///
    /// Resolved each time a meter is requested, so a provider installed
    /// later is still picked up by reporters created afterwards.
    pub fn global() -> Self {
        Self {
            source: Source::Global,
        }
    }
}

impl fmt::Debug for OtelMeterProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            Source::Global => "global",
            Source::Provider(_) => "provider",
        };
        f.debug_struct("OtelMeterProvider")
            .field("source", &source)
            .finish()
    }
}

impl MeterProvider for OtelMeterProvider {
    fn meter(&self, name: &'static str) -> Arc<dyn Meter> {
        let meter = match &self.source {
            Source::Global => global::meter(name),
            Source::Provider(provider) => otel::MeterProvider::meter(provider.as_ref(), name),
        };
        Arc::new(OtelMeter { scope: name, meter })
    }
}

struct OtelMeter {
    scope: &'static str,
    meter: otel::Meter,
}

impl fmt::Debug for OtelMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtelMeter")
            .field("scope", &self.scope)
            .finish()
    }
}

impl Meter for OtelMeter {
    fn create_counter(&self, name: &str, description: &str) -> Result<Arc<dyn Counter>> {
        validate_instrument_name(name)?;
        let counter = self
            .meter
            .u64_counter(name.to_string())
            .with_description(description.to_string())
            .build();
        Ok(Arc::new(OtelCounter {
            name: name.to_string(),
            counter,
        }))
    }
}

struct OtelCounter {
    name: String,
    counter: otel::Counter<u64>,
}

impl fmt::Debug for OtelCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtelCounter")
            .field("name", &self.name)
            .finish()
    }
}

impl Counter for OtelCounter {
    fn add(&self, delta: u64, labels: &[Label<'_>]) -> Result<()> {
        let attributes: Vec<KeyValue> = labels
            .iter()
            .map(|l| KeyValue::new(l.key, l.value.to_string()))
            .collect();
        self.counter.add(delta, &attributes);
        Ok(())
    }
}

/// Check a name against the OpenTelemetry instrument naming rules
///
/// The SDK only logs invalid names and hands back a no-op instrument, so
/// they are rejected here where the caller can see the error.
pub fn validate_instrument_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err(StatsError::invalid_name(name, "must not be empty")),
        Some(c) if !c.is_ascii_alphabetic() => {
            return Err(StatsError::invalid_name(
                name,
                "must start with an ASCII letter",
            ));
        }
        Some(_) => {}
    }
    if name.len() > MAX_NAME_LEN {
        return Err(StatsError::invalid_name(
            name,
            "must be at most 255 characters",
        ));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '/')) {
        return Err(StatsError::invalid_name(
            name,
            "may only contain ASCII letters, digits, '_', '.', '-' and '/'",
        ));
    }
    Ok(())
}
