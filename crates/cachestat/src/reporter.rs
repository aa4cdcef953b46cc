//! Counter-backed cache event reporter

use std::error::Error;
use std::sync::Arc;

use cachestat_core::{
    CacheEvent, CacheType, Counter, LabelSet, METER_NAME, MeterProvider, Method, ReporterConfig,
    Result, StatsHandler,
};
use tracing::debug;

use crate::provider::default_provider;

/// Forwards cache events to a counter as labelled increments
///
/// Every report adds exactly 1 to the counter, labelled with
/// `cache_name`, `cache_type` and `method` (plus `err` for query
/// failures). Reports never fail: backend errors are logged and dropped.
///
/// # Example
/// ```
/// use cachestat::{CacheEventReporter, InMemoryProvider, ReporterOpts, StatsHandler};
///
/// let provider = InMemoryProvider::new();
/// let reporter = CacheEventReporter::new("users", &provider, ReporterOpts::new())?;
///
/// reporter.report_hit();
/// assert_eq!(
///     provider.total(
///         "cache_handle_total",
///         &[("cache_name", "users"), ("cache_type", "total"), ("method", "hit")],
///     ),
///     1
/// );
/// # Ok::<(), cachestat::StatsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CacheEventReporter {
    cache_name: String,
    instrument_name: String,
    config: ReporterConfig,
    counter: Arc<dyn Counter>,
}

impl CacheEventReporter {
    /// Create a reporter for `cache_name`, drawing its counter from `provider`
    ///
    /// Fails if the provider cannot create the counter.
    pub fn new<P>(
        cache_name: impl Into<String>,
        provider: &P,
        config: impl Into<ReporterConfig>,
    ) -> Result<Self>
    where
        P: MeterProvider + ?Sized,
    {
        let cache_name = cache_name.into();
        let config = config.into();
        let instrument_name = config.instrument_name();

        let counter = provider
            .meter(METER_NAME)
            .create_counter(&instrument_name, &config.help)?;

        debug!(
            target: "cachestat",
            cache_name = %cache_name,
            instrument = %instrument_name,
            "Reporter Created"
        );

        Ok(Self {
            cache_name,
            instrument_name,
            config,
            counter,
        })
    }

    /// Create a reporter using [`default_provider`]
    pub fn with_default_provider(
        cache_name: impl Into<String>,
        config: impl Into<ReporterConfig>,
    ) -> Result<Self> {
        Self::new(cache_name, &*default_provider(), config)
    }

    /// Name attached as the `cache_name` label
    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    /// Resolved name of the counter instrument
    pub fn instrument_name(&self) -> &str {
        &self.instrument_name
    }

    /// Configuration the reporter was built with
    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    fn record(&self, cache_type: CacheType, method: Method, err: Option<&str>) {
        self.add(&LabelSet::new(&self.cache_name, cache_type, method, err));
    }

    fn add(&self, labels: &LabelSet<'_>) {
        if let Err(err) = self.counter.add(1, labels) {
            debug!(
                target: "cachestat",
                cache_name = %self.cache_name,
                instrument = %self.instrument_name,
                error = %err,
                "Cache Event Dropped"
            );
        }
    }
}

impl StatsHandler for CacheEventReporter {
    fn report_hit(&self) {
        self.record(CacheType::Total, Method::Hit, None);
    }

    fn report_miss(&self) {
        self.record(CacheType::Total, Method::Miss, None);
    }

    fn report_local_hit(&self) {
        self.record(CacheType::Local, Method::Hit, None);
    }

    fn report_local_miss(&self) {
        self.record(CacheType::Local, Method::Miss, None);
    }

    fn report_remote_hit(&self) {
        self.record(CacheType::Remote, Method::Hit, None);
    }

    fn report_remote_miss(&self) {
        self.record(CacheType::Remote, Method::Miss, None);
    }

    fn report_query(&self) {
        self.record(CacheType::Query, Method::Query, None);
    }

    fn report_query_failure(&self, err: &dyn Error) {
        let message = err.to_string();
        self.record(CacheType::Query, Method::QueryFail, Some(&message));
    }

    fn report(&self, event: &CacheEvent) {
        self.add(&event.labels(&self.cache_name));
    }
}
