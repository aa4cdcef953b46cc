//! Fan-out over several handlers

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use cachestat_core::{CacheEvent, StatsHandler};

/// Forwards every event to each member, in insertion order
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use cachestat::{Handlers, NoopHandler, StatsCollector, StatsHandler};
///
/// let collector = Arc::new(StatsCollector::new());
/// let handlers = Handlers::new()
///     .with(Arc::clone(&collector))
///     .with(NoopHandler);
///
/// handlers.report_miss();
/// assert_eq!(collector.snapshot().misses, 1);
/// ```
#[derive(Clone, Default)]
pub struct Handlers {
    handlers: Vec<Arc<dyn StatsHandler>>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler
    pub fn push(&mut self, handler: impl StatsHandler) {
        self.handlers.push(Arc::new(handler));
    }

    /// Add a handler, builder style
    pub fn with(mut self, handler: impl StatsHandler) -> Self {
        self.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn each(&self, f: impl Fn(&dyn StatsHandler)) {
        for handler in &self.handlers {
            f(handler.as_ref());
        }
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("len", &self.handlers.len())
            .finish()
    }
}

impl FromIterator<Arc<dyn StatsHandler>> for Handlers {
    fn from_iter<I: IntoIterator<Item = Arc<dyn StatsHandler>>>(iter: I) -> Self {
        Self {
            handlers: iter.into_iter().collect(),
        }
    }
}

impl StatsHandler for Handlers {
    fn report_hit(&self) {
        self.each(|h| h.report_hit());
    }

    fn report_miss(&self) {
        self.each(|h| h.report_miss());
    }

    fn report_local_hit(&self) {
        self.each(|h| h.report_local_hit());
    }

    fn report_local_miss(&self) {
        self.each(|h| h.report_local_miss());
    }

    fn report_remote_hit(&self) {
        self.each(|h| h.report_remote_hit());
    }

    fn report_remote_miss(&self) {
        self.each(|h| h.report_remote_miss());
    }

    fn report_query(&self) {
        self.each(|h| h.report_query());
    }

    fn report_query_failure(&self, err: &dyn Error) {
        self.each(|h| h.report_query_failure(err));
    }

    fn report(&self, event: &CacheEvent) {
        self.each(|h| h.report(event));
    }
}
