//! Provider adapter using the `metrics` crate
//!
//! Integrates with Prometheus, StatsD, and other exporters via the
//! `metrics` ecosystem. Increments go to whichever recorder is installed
//! when they happen.

use std::sync::Arc;

use cachestat_core::{Counter, Label, Meter, MeterProvider, Result, StatsError};

/// Provider backed by the `metrics` facade
///
/// # Example
/// ```ignore
/// use cachestat::{CacheEventReporter, MetricsProvider, ReporterOpts};
///
/// // Set up a metrics recorder (e.g., metrics_exporter_prometheus)
/// // metrics::set_global_recorder(recorder);
///
/// let reporter = CacheEventReporter::new("users", &MetricsProvider, ReporterOpts::new())?;
/// // Emits: cache_handle_total{cache_name="users",cache_type="total",method="hit"}
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsProvider;

impl MeterProvider for MetricsProvider {
    fn meter(&self, name: &'static str) -> Arc<dyn Meter> {
        Arc::new(MetricsMeter { scope: name })
    }
}

/// The facade has no scopes; the name is kept for diagnostics
#[derive(Debug)]
struct MetricsMeter {
    #[allow(dead_code)]
    scope: &'static str,
}

impl Meter for MetricsMeter {
    fn create_counter(&self, name: &str, description: &str) -> Result<Arc<dyn Counter>> {
        validate_metric_name(name)?;
        if !description.is_empty() {
            metrics::describe_counter!(name.to_string(), description.to_string());
        }
        Ok(Arc::new(MetricsCounter {
            name: name.to_string(),
        }))
    }
}

#[derive(Debug)]
struct MetricsCounter {
    name: String,
}

impl Counter for MetricsCounter {
    fn add(&self, delta: u64, labels: &[Label<'_>]) -> Result<()> {
        let labels: Vec<metrics::Label> = labels
            .iter()
            .map(|l| metrics::Label::new(l.key, l.value.to_string()))
            .collect();
        metrics::counter!(self.name.clone(), labels).increment(delta);
        Ok(())
    }
}

/// Check a name against the Prometheus metric naming rules
pub fn validate_metric_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(StatsError::invalid_name(name, "must not be empty"));
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == ':') {
        return Err(StatsError::invalid_name(
            name,
            "must start with an ASCII letter, '_' or ':'",
        ));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':') {
        return Err(StatsError::invalid_name(
            name,
            "may only contain ASCII letters, digits, '_' and ':'",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_util::MetricKind;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};

    #[test]
    fn test_metric_names() {
        assert!(validate_metric_name("cache_handle_total").is_ok());
        assert!(validate_metric_name("_private:x").is_ok());
        assert!(validate_metric_name("").is_err());
        assert!(validate_metric_name("9lives").is_err());
        assert!(validate_metric_name("http.cache").is_err());
    }

    #[test]
    fn test_counter_records_through_facade() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let counter = MetricsProvider
                .meter("jetcache")
                .create_counter("cache_handle_total", "cache events")
                .unwrap();
            let labels = [
                Label::new("cache_name", "users"),
                Label::new("method", "hit"),
            ];
            counter.add(1, &labels).unwrap();
            counter.add(2, &labels).unwrap();
        });

        let snapshot = snapshotter.snapshot().into_vec();
        let (key, _, _, value) = snapshot
            .iter()
            .find(|(key, _, _, _)| {
                key.kind() == MetricKind::Counter && key.key().name() == "cache_handle_total"
            })
            .expect("counter recorded");

        assert!(matches!(value, DebugValue::Counter(3)));
        let labels: Vec<_> = key
            .key()
            .labels()
            .map(|l| (l.key().to_string(), l.value().to_string()))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("cache_name".to_string(), "users".to_string()),
                ("method".to_string(), "hit".to_string()),
            ]
        );
    }
}
