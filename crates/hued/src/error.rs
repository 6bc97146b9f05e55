//! Error types for color parsing, theme names and preference storage.

/// Errors raised while parsing color values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Input is not 3 or 6 hex digits (after an optional `#`).
    #[error("Invalid hex color '{input}': expected 3 or 6 hex digits")]
    InvalidFormat { input: String },

    /// A scaling percentage that is NaN or infinite.
    #[error("Invalid percentage '{percent}': expected a finite number")]
    InvalidPercent { percent: String },
}

impl ColorError {
    /// Create an invalid format error for the given input.
    pub fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }

    /// Create an invalid percentage error.
    pub fn invalid_percent(percent: f64) -> Self {
        Self::InvalidPercent {
            percent: percent.to_string(),
        }
    }
}

/// Error returned when a theme name is not one of `light`, `blue` or `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme '{0}' (expected light, blue or dark)")]
pub struct ThemeParseError(pub String);

/// Errors raised by a [`PreferenceStore`](crate::preference::PreferenceStore).
///
/// Storage failures are recoverable: callers keep running with whatever
/// theme is already applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    /// The backing store could not be read or written.
    #[error("Preference storage unavailable: {reason}")]
    StorageUnavailable { reason: String },
}

impl PreferenceError {
    /// Create a storage unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            reason: reason.into(),
        }
    }
}
