//! Error types for cache event reporting

use thiserror::Error;

/// Main error type for reporter construction and metrics backends
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Instrument name rejected by the backend's naming rules
    #[error("invalid instrument name {name:?}: {reason}")]
    InvalidInstrumentName { name: String, reason: &'static str },

    /// Backend could not create the requested instrument
    #[error("provider error: {0}")]
    Provider(String),

    /// Backend failed to record an increment
    #[error("record error: {0}")]
    Record(String),
}

impl StatsError {
    /// Shorthand for an instrument name rejection
    pub fn invalid_name(name: impl Into<String>, reason: &'static str) -> Self {
        StatsError::InvalidInstrumentName {
            name: name.into(),
            reason,
        }
    }
}

/// Result type alias for reporter and provider operations
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StatsError::Provider("meter closed".to_string());
        assert_eq!(err.to_string(), "provider error: meter closed");

        let err = StatsError::invalid_name("1abc", "must start with an ASCII letter");
        assert_eq!(
            err.to_string(),
            "invalid instrument name \"1abc\": must start with an ASCII letter"
        );
    }

    #[test]
    fn test_error_clone() {
        let err = StatsError::Record("exporter gone".to_string());
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
