//! Handler trait cache implementations report events through

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::CacheEvent;

/// Receiver of cache lifecycle events
///
/// Every method is fire-and-forget: implementations must not panic or
/// block the caller's cache path.
pub trait StatsHandler: Send + Sync + 'static {
    /// Record a hit across all tiers
    fn report_hit(&self);

    /// Record a miss across all tiers
    fn report_miss(&self);

    /// Record a local tier hit
    fn report_local_hit(&self);

    /// Record a local tier miss
    fn report_local_miss(&self);

    /// Record a remote tier hit
    fn report_remote_hit(&self);

    /// Record a remote tier miss
    fn report_remote_miss(&self);

    /// Record a loader invocation
    fn report_query(&self);

    /// Record a loader failure
    fn report_query_failure(&self, err: &dyn Error);

    /// Record an event value
    fn report(&self, event: &CacheEvent) {
        match event {
            CacheEvent::Hit => self.report_hit(),
            CacheEvent::Miss => self.report_miss(),
            CacheEvent::LocalHit => self.report_local_hit(),
            CacheEvent::LocalMiss => self.report_local_miss(),
            CacheEvent::RemoteHit => self.report_remote_hit(),
            CacheEvent::RemoteMiss => self.report_remote_miss(),
            CacheEvent::Query => self.report_query(),
            CacheEvent::QueryFail(msg) => self.report_query_failure(&Message(msg)),
        }
    }
}

#[derive(Debug)]
struct Message<'a>(&'a str);

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Error for Message<'_> {}

impl<H: StatsHandler + ?Sized> StatsHandler for Arc<H> {
    fn report_hit(&self) {
        (**self).report_hit()
    }

    fn report_miss(&self) {
        (**self).report_miss()
    }

    fn report_local_hit(&self) {
        (**self).report_local_hit()
    }

    fn report_local_miss(&self) {
        (**self).report_local_miss()
    }

    fn report_remote_hit(&self) {
        (**self).report_remote_hit()
    }

    fn report_remote_miss(&self) {
        (**self).report_remote_miss()
    }

    fn report_query(&self) {
        (**self).report_query()
    }

    fn report_query_failure(&self, err: &dyn Error) {
        (**self).report_query_failure(err)
    }

    fn report(&self, event: &CacheEvent) {
        (**self).report(event)
    }
}

/// No-op handler (default)
///
/// Zero overhead when reporting is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandler;

impl StatsHandler for NoopHandler {
    #[inline]
    fn report_hit(&self) {}

    #[inline]
    fn report_miss(&self) {}

    #[inline]
    fn report_local_hit(&self) {}

    #[inline]
    fn report_local_miss(&self) {}

    #[inline]
    fn report_remote_hit(&self) {}

    #[inline]
    fn report_remote_miss(&self) {}

    #[inline]
    fn report_query(&self) {}

    #[inline]
    fn report_query_failure(&self, _err: &dyn Error) {}
}
