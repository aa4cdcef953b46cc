//! Core types for cache event reporting

mod config;
mod event;
mod stats;

pub use config::{DEFAULT_METRIC_NAME, METER_NAME, ReporterConfig, ReporterOpts};
pub use event::{
    CACHE_NAME, CACHE_TYPE, CacheEvent, CacheType, ERR, Label, LabelSet, METHOD, Method,
};
pub use stats::CacheStats;
