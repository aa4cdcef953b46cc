//! Cache event statistics

/// Tallies of reported cache events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Hits across all tiers
    pub hits: u64,
    /// Misses across all tiers
    pub misses: u64,
    /// Local tier hits
    pub local_hits: u64,
    /// Local tier misses
    pub local_misses: u64,
    /// Remote tier hits
    pub remote_hits: u64,
    /// Remote tier misses
    pub remote_misses: u64,
    /// Loader invocations
    pub queries: u64,
    /// Loader failures
    pub query_failures: u64,
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

impl CacheStats {
    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        ratio(self.hits, self.total_requests())
    }

    /// Calculate miss ratio (0.0 to 1.0)
    pub fn miss_ratio(&self) -> f64 {
        if self.total_requests() == 0 {
            0.0
        } else {
            1.0 - self.hit_ratio()
        }
    }

    pub fn local_hit_ratio(&self) -> f64 {
        ratio(self.local_hits, self.local_hits + self.local_misses)
    }

    pub fn remote_hit_ratio(&self) -> f64 {
        ratio(self.remote_hits, self.remote_hits + self.remote_misses)
    }

    /// Share of loader calls that failed
    pub fn query_failure_ratio(&self) -> f64 {
        ratio(self.query_failures, self.queries + self.query_failures)
    }

    /// Total requests (hits + misses)
    pub fn total_requests(&self) -> u64 {
        self.hits + self.misses
    }

    /// Merge stats from another instance
    pub fn merge(&mut self, other: &CacheStats) {
        self.hits += other.hits;
        self.misses += other.misses;
        self.local_hits += other.local_hits;
        self.local_misses += other.local_misses;
        self.remote_hits += other.remote_hits;
        self.remote_misses += other.remote_misses;
        self.queries += other.queries;
        self.query_failures += other.query_failures;
    }
}
