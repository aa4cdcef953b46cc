//! In-process event tallies

use std::error::Error;
use std::sync::atomic::{AtomicU64, Ordering};

use cachestat_core::{CacheStats, StatsHandler};

/// Handler that counts events in process
///
/// Useful for periodic log lines or health endpoints when no metrics
/// backend is running. Failure messages are not kept.
#[derive(Debug, Default)]
pub struct StatsCollector {
    hits: AtomicU64,
    misses: AtomicU64,
    local_hits: AtomicU64,
    local_misses: AtomicU64,
    remote_hits: AtomicU64,
    remote_misses: AtomicU64,
    queries: AtomicU64,
    query_failures: AtomicU64,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tallies
    pub fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            local_hits: self.local_hits.load(Ordering::Relaxed),
            local_misses: self.local_misses.load(Ordering::Relaxed),
            remote_hits: self.remote_hits.load(Ordering::Relaxed),
            remote_misses: self.remote_misses.load(Ordering::Relaxed),
            queries: self.queries.load(Ordering::Relaxed),
            query_failures: self.query_failures.load(Ordering::Relaxed),
        }
    }

    /// Zero every tally
    pub fn reset(&self) {
        for counter in [
            &self.hits,
            &self.misses,
            &self.local_hits,
            &self.local_misses,
            &self.remote_hits,
            &self.remote_misses,
            &self.queries,
            &self.query_failures,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

impl StatsHandler for StatsCollector {
    fn report_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn report_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    fn report_local_hit(&self) {
        self.local_hits.fetch_add(1, Ordering::Relaxed);
    }

    fn report_local_miss(&self) {
        self.local_misses.fetch_add(1, Ordering::Relaxed);
    }

    fn report_remote_hit(&self) {
        self.remote_hits.fetch_add(1, Ordering::Relaxed);
    }

    fn report_remote_miss(&self) {
        self.remote_misses.fetch_add(1, Ordering::Relaxed);
    }

    fn report_query(&self) {
        self.queries.fetch_add(1, Ordering::Relaxed);
    }

    fn report_query_failure(&self, _err: &dyn Error) {
        self.query_failures.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cachestat_core::CacheEvent;

    #[test]
    fn test_collector_tallies() {
        let collector = StatsCollector::new();
        collector.report_hit();
        collector.report_hit();
        collector.report_miss();
        collector.report_local_hit();
        collector.report_remote_miss();
        collector.report_query();
        collector.report(&CacheEvent::QueryFail("timeout".into()));

        let stats = collector.snapshot();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.local_hits, 1);
        assert_eq!(stats.local_misses, 0);
        assert_eq!(stats.remote_misses, 1);
        assert_eq!(stats.queries, 1);
        assert_eq!(stats.query_failures, 1);
    }

    #[test]
    fn test_reset() {
        let collector = StatsCollector::new();
        collector.report_hit();
        collector.report_query();
        collector.reset();
        assert_eq!(collector.snapshot(), CacheStats::default());
    }
}
