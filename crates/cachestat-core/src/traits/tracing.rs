use crate::{CacheType, Method, StatsHandler};
use std::error::Error;
use tracing::debug;

/// Handler that logs events via `tracing`
#[derive(Debug, Clone, Default)]
pub struct TracingHandler {
    cache_name: String,
}

impl TracingHandler {
    /// Create new tracing handler for a named cache
    pub fn new(cache_name: impl Into<String>) -> Self {
        Self {
            cache_name: cache_name.into(),
        }
    }

    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn emit(&self, cache_type: CacheType, method: Method) {
        debug!(
            target: "cachestat",
            cache_name = %self.cache_name,
            cache_type = cache_type.as_str(),
            method = method.as_str(),
            "Cache Event"
        );
    }
}

impl StatsHandler for TracingHandler {
    fn report_hit(&self) {
        self.emit(CacheType::Total, Method::Hit);
    }

    fn report_miss(&self) {
        self.emit(CacheType::Total, Method::Miss);
    }

    fn report_local_hit(&self) {
        self.emit(CacheType::Local, Method::Hit);
    }

    fn report_local_miss(&self) {
        self.emit(CacheType::Local, Method::Miss);
    }

    fn report_remote_hit(&self) {
        self.emit(CacheType::Remote, Method::Hit);
    }

    fn report_remote_miss(&self) {
        self.emit(CacheType::Remote, Method::Miss);
    }

    fn report_query(&self) {
        self.emit(CacheType::Query, Method::Query);
    }

    fn report_query_failure(&self, err: &dyn Error) {
        debug!(
            target: "cachestat",
            cache_name = %self.cache_name,
            cache_type = CacheType::Query.as_str(),
            method = Method::QueryFail.as_str(),
            err = %err,
            "Cache Query Failed"
        );
    }
}
