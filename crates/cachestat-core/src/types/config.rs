//! Reporter configuration and builder

use serde::{Deserialize, Serialize};

/// Instrument name used when none is configured
pub const DEFAULT_METRIC_NAME: &str = "cache_handle_total";

/// Meter every reporter requests its counter from
pub const METER_NAME: &str = "jetcache";

/// Configuration for a cache event reporter
///
/// Deserializes with defaults for missing fields, so it can be embedded
/// in an application config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Prefix scoping the instrument name
    pub namespace: String,
    /// Grouping between namespace and name
    pub subsystem: String,
    /// Base instrument name
    pub name: String,
    /// Description attached to the instrument
    pub help: String,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            subsystem: String::new(),
            name: DEFAULT_METRIC_NAME.to_string(),
            help: String::new(),
        }
    }
}

impl ReporterConfig {
    /// Fully-qualified instrument name
    ///
    /// Non-empty `namespace`, `subsystem` and `name` joined with `_`.
    pub fn instrument_name(&self) -> String {
        [&self.namespace, &self.subsystem, &self.name]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("_")
    }
}

/// Builder for ReporterConfig with fluent API
///
/// Each setter overwrites its field, so the last call wins.
#[derive(Debug, Clone, Default)]
pub struct ReporterOpts(ReporterConfig);

impl ReporterOpts {
    /// Create new options builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set namespace
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.0.namespace = namespace.into();
        self
    }

    /// Set subsystem
    pub fn subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.0.subsystem = subsystem.into();
        self
    }

    /// Override the metric name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = name.into();
        self
    }

    /// Set help text
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.0.help = help.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> ReporterConfig {
        self.0
    }
}

impl From<ReporterOpts> for ReporterConfig {
    fn from(opts: ReporterOpts) -> Self {
        opts.0
    }
}
