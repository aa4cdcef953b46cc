//! Cache events and the labels they are reported with

use std::fmt;
use std::ops::Deref;

/// Label key carrying the cache name
pub const CACHE_NAME: &str = "cache_name";
/// Label key carrying the cache tier
pub const CACHE_TYPE: &str = "cache_type";
/// Label key carrying the event outcome
pub const METHOD: &str = "method";
/// Label key carrying a query failure message
pub const ERR: &str = "err";

/// Cache tier an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheType {
    /// Aggregate across all tiers
    Total,
    /// In-process tier
    Local,
    /// Shared remote tier
    Remote,
    /// Loader behind the cache
    Query,
}

impl CacheType {
    /// Get tier as string label
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheType::Total => "total",
            CacheType::Local => "local",
            CacheType::Remote => "remote",
            CacheType::Query => "query",
        }
    }
}

impl fmt::Display for CacheType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome recorded for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Hit,
    Miss,
    Query,
    QueryFail,
}

impl Method {
    /// Get method as string label
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Hit => "hit",
            Method::Miss => "miss",
            Method::Query => "query",
            Method::QueryFail => "queryFail",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cache lifecycle event
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheEvent {
    Hit,
    Miss,
    LocalHit,
    LocalMiss,
    RemoteHit,
    RemoteMiss,
    Query,
    /// Loader failed; carries the error message
    QueryFail(String),
}

impl CacheEvent {
    /// Tier label for this event
    pub fn cache_type(&self) -> CacheType {
        match self {
            CacheEvent::Hit | CacheEvent::Miss => CacheType::Total,
            CacheEvent::LocalHit | CacheEvent::LocalMiss => CacheType::Local,
            CacheEvent::RemoteHit | CacheEvent::RemoteMiss => CacheType::Remote,
            CacheEvent::Query | CacheEvent::QueryFail(_) => CacheType::Query,
        }
    }

    /// Method label for this event
    pub fn method(&self) -> Method {
        match self {
            CacheEvent::Hit | CacheEvent::LocalHit | CacheEvent::RemoteHit => Method::Hit,
            CacheEvent::Miss | CacheEvent::LocalMiss | CacheEvent::RemoteMiss => Method::Miss,
            CacheEvent::Query => Method::Query,
            CacheEvent::QueryFail(_) => Method::QueryFail,
        }
    }

    /// Failure message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            CacheEvent::QueryFail(msg) => Some(msg),
            _ => None,
        }
    }

    /// Build the label set for this event under `cache_name`
    pub fn labels<'a>(&'a self, cache_name: &'a str) -> LabelSet<'a> {
        LabelSet::new(cache_name, self.cache_type(), self.method(), self.error())
    }
}

/// A key/value pair attached to a counter increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label<'a> {
    pub key: &'static str,
    pub value: &'a str,
}

impl<'a> Label<'a> {
    pub const fn new(key: &'static str, value: &'a str) -> Self {
        Self { key, value }
    }
}

/// Per-call label tuple, built on the stack
///
/// Always `cache_name`, `cache_type`, `method` in that order, followed by
/// `err` when the event carries one.
#[derive(Debug, Clone, Copy)]
pub struct LabelSet<'a> {
    labels: [Label<'a>; 4],
    len: usize,
}

impl<'a> LabelSet<'a> {
    pub fn new(
        cache_name: &'a str,
        cache_type: CacheType,
        method: Method,
        err: Option<&'a str>,
    ) -> Self {
        let labels = [
            Label::new(CACHE_NAME, cache_name),
            Label::new(CACHE_TYPE, cache_type.as_str()),
            Label::new(METHOD, method.as_str()),
            Label::new(ERR, err.unwrap_or_default()),
        ];
        let len = if err.is_some() { 4 } else { 3 };
        Self { labels, len }
    }
}

impl<'a> Deref for LabelSet<'a> {
    type Target = [Label<'a>];

    fn deref(&self) -> &Self::Target {
        &self.labels[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_type_as_str() {
        assert_eq!(CacheType::Total.as_str(), "total");
        assert_eq!(CacheType::Local.as_str(), "local");
        assert_eq!(CacheType::Remote.as_str(), "remote");
        assert_eq!(CacheType::Query.as_str(), "query");
    }

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Hit.as_str(), "hit");
        assert_eq!(Method::QueryFail.as_str(), "queryFail");
        assert_eq!(Method::QueryFail.to_string(), "queryFail");
    }

    #[test]
    fn test_event_mapping() {
        assert_eq!(CacheEvent::LocalMiss.cache_type(), CacheType::Local);
        assert_eq!(CacheEvent::LocalMiss.method(), Method::Miss);
        assert_eq!(CacheEvent::RemoteHit.cache_type(), CacheType::Remote);
        assert_eq!(CacheEvent::Query.method(), Method::Query);

        let fail = CacheEvent::QueryFail("timeout".into());
        assert_eq!(fail.cache_type(), CacheType::Query);
        assert_eq!(fail.method(), Method::QueryFail);
        assert_eq!(fail.error(), Some("timeout"));
        assert_eq!(CacheEvent::Hit.error(), None);
    }

    #[test]
    fn test_label_set_without_err() {
        let labels = CacheEvent::Hit.labels("users");
        assert_eq!(
            &*labels,
            &[
                Label::new(CACHE_NAME, "users"),
                Label::new(CACHE_TYPE, "total"),
                Label::new(METHOD, "hit"),
            ]
        );
    }

    #[test]
    fn test_label_set_with_err() {
        let event = CacheEvent::QueryFail("timeout".into());
        let labels = event.labels("users");
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[3], Label::new(ERR, "timeout"));
    }

    #[test]
    fn test_empty_err_is_still_attached() {
        let labels = LabelSet::new("c", CacheType::Query, Method::QueryFail, Some(""));
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[3].value, "");
    }
}
