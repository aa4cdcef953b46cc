//! Metrics backend seam
//!
//! A reporter asks a [`MeterProvider`] for a named [`Meter`], the meter for
//! a [`Counter`], and then only ever calls [`Counter::add`]. Implement
//! these three traits to plug in a metrics system.

use std::fmt::Debug;
use std::sync::Arc;

use crate::{Label, Result};

/// Source of named meters
pub trait MeterProvider: Debug + Send + Sync + 'static {
    /// Get the meter for an instrumentation scope
    fn meter(&self, name: &'static str) -> Arc<dyn Meter>;
}

/// Factory for instruments within one scope
pub trait Meter: Debug + Send + Sync {
    /// Create a monotonic counter
    fn create_counter(&self, name: &str, description: &str) -> Result<Arc<dyn Counter>>;
}

/// Monotonic counter instrument
///
/// Must be safe to call from many threads at once.
pub trait Counter: Debug + Send + Sync {
    /// Add `delta` to the series identified by `labels`
    fn add(&self, delta: u64, labels: &[Label<'_>]) -> Result<()>;
}

impl<P: MeterProvider + ?Sized> MeterProvider for Arc<P> {
    fn meter(&self, name: &'static str) -> Arc<dyn Meter> {
        (**self).meter(name)
    }
}

/// Provider whose counters discard every increment
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProvider;

#[derive(Debug)]
struct NoopInstrument;

impl MeterProvider for NoopProvider {
    fn meter(&self, _name: &'static str) -> Arc<dyn Meter> {
        Arc::new(NoopInstrument)
    }
}

impl Meter for NoopInstrument {
    fn create_counter(&self, _name: &str, _description: &str) -> Result<Arc<dyn Counter>> {
        Ok(Arc::new(NoopInstrument))
    }
}

impl Counter for NoopInstrument {
    #[inline]
    fn add(&self, _delta: u64, _labels: &[Label<'_>]) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_provider() {
        let meter = NoopProvider.meter("jetcache");
        let counter = meter.create_counter("anything", "").unwrap();
        assert!(counter.add(1, &[Label::new("k", "v")]).is_ok());
    }
}
