//! In-memory provider that keeps every increment for inspection

use std::sync::Arc;

use cachestat_core::{Counter, Label, Meter, MeterProvider, Result, StatsError};
use dashmap::DashMap;
use parking_lot::Mutex;

/// Series identity: instrument name plus ordered label pairs
type SeriesKey = (String, Vec<(String, String)>);

/// A single recorded increment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub meter: &'static str,
    pub instrument: String,
    pub delta: u64,
    pub labels: Vec<(String, String)>,
}

impl Recorded {
    /// Value of the label with `key`, if attached
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// An instrument created through the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentInfo {
    pub meter: &'static str,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Default)]
struct Registry {
    instruments: DashMap<(&'static str, String), String>,
    totals: DashMap<SeriesKey, u64>,
    records: Mutex<Vec<Recorded>>,
}

/// Provider that records increments in memory
///
/// Cloning shares the underlying storage, so a clone handed to a
/// reporter can be inspected through the original. Every increment is
/// kept until [`clear`](Self::clear), so this is not meant for long-running
/// processes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    registry: Arc<Registry>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated value of one series
    pub fn total(&self, instrument: &str, labels: &[(&str, &str)]) -> u64 {
        let key = (instrument.to_string(), owned_pairs(labels));
        self.registry.totals.get(&key).map(|v| *v).unwrap_or(0)
    }

    /// Accumulated value across every series of an instrument
    pub fn instrument_total(&self, instrument: &str) -> u64 {
        self.registry
            .totals
            .iter()
            .filter(|entry| entry.key().0 == instrument)
            .map(|entry| *entry.value())
            .sum()
    }

    /// Every increment in arrival order
    pub fn records(&self) -> Vec<Recorded> {
        self.registry.records.lock().clone()
    }

    /// Instruments created so far, sorted by meter and name
    pub fn instruments(&self) -> Vec<InstrumentInfo> {
        let mut out: Vec<_> = self
            .registry
            .instruments
            .iter()
            .map(|entry| InstrumentInfo {
                meter: entry.key().0,
                name: entry.key().1.clone(),
                description: entry.value().clone(),
            })
            .collect();
        out.sort_by(|a, b| (a.meter, &a.name).cmp(&(b.meter, &b.name)));
        out
    }

    /// Drop all recorded data, keeping created instruments
    pub fn clear(&self) {
        self.registry.totals.clear();
        self.registry.records.lock().clear();
    }
}

fn owned_pairs(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl MeterProvider for InMemoryProvider {
    fn meter(&self, name: &'static str) -> Arc<dyn Meter> {
        Arc::new(MemoryMeter {
            scope: name,
            registry: Arc::clone(&self.registry),
        })
    }
}

#[derive(Debug)]
struct MemoryMeter {
    scope: &'static str,
    registry: Arc<Registry>,
}

impl Meter for MemoryMeter {
    fn create_counter(&self, name: &str, description: &str) -> Result<Arc<dyn Counter>> {
        if name.is_empty() {
            return Err(StatsError::invalid_name(name, "must not be empty"));
        }
        self.registry
            .instruments
            .entry((self.scope, name.to_string()))
            .or_insert_with(|| description.to_string());

        Ok(Arc::new(MemoryCounter {
            scope: self.scope,
            name: name.to_string(),
            registry: Arc::clone(&self.registry),
        }))
    }
}

#[derive(Debug)]
struct MemoryCounter {
    scope: &'static str,
    name: String,
    registry: Arc<Registry>,
}

impl Counter for MemoryCounter {
    fn add(&self, delta: u64, labels: &[Label<'_>]) -> Result<()> {
        let labels: Vec<(String, String)> = labels
            .iter()
            .map(|l| (l.key.to_string(), l.value.to_string()))
            .collect();

        *self
            .registry
            .totals
            .entry((self.name.clone(), labels.clone()))
            .or_insert(0) += delta;

        self.registry.records.lock().push(Recorded {
            meter: self.scope,
            instrument: self.name.clone(),
            delta,
            labels,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_accumulates_per_series() {
        let provider = InMemoryProvider::new();
        let counter = provider
            .meter("scope")
            .create_counter("requests", "all requests")
            .unwrap();

        counter.add(1, &[Label::new("kind", "a")]).unwrap();
        counter.add(2, &[Label::new("kind", "a")]).unwrap();
        counter.add(5, &[Label::new("kind", "b")]).unwrap();

        assert_eq!(provider.total("requests", &[("kind", "a")]), 3);
        assert_eq!(provider.total("requests", &[("kind", "b")]), 5);
        assert_eq!(provider.total("requests", &[("kind", "c")]), 0);
        assert_eq!(provider.instrument_total("requests"), 8);
        assert_eq!(provider.records().len(), 3);
        assert_eq!(provider.records()[2].label("kind"), Some("b"));
    }

    #[test]
    fn test_instruments_listed_once() {
        let provider = InMemoryProvider::new();
        let meter = provider.meter("scope");
        meter.create_counter("requests", "first").unwrap();
        meter.create_counter("requests", "second").unwrap();

        assert_eq!(
            provider.instruments(),
            vec![InstrumentInfo {
                meter: "scope",
                name: "requests".to_string(),
                description: "first".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let provider = InMemoryProvider::new();
        let err = provider.meter("scope").create_counter("", "").unwrap_err();
        assert!(matches!(err, StatsError::InvalidInstrumentName { .. }));
        assert!(provider.instruments().is_empty());
    }

    #[test]
    fn test_clear() {
        let provider = InMemoryProvider::new();
        let counter = provider.meter("scope").create_counter("c", "").unwrap();
        counter.add(1, &[]).unwrap();
        provider.clear();
        assert_eq!(provider.instrument_total("c"), 0);
        assert!(provider.records().is_empty());
        assert_eq!(provider.instruments().len(), 1);
    }
}
