// src/errors.rs
// DOCUMENTATION: Custom error types for the finder flow
// PURPOSE: Centralized error handling for entire application

use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Covers the two terminal failures of location acquisition
/// plus the ambient failures (external API, validation, configuration).
/// Display strings double as the user-visible notices, so the wording of the
/// location failures is fixed and must not change.
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Geolocation not supported.")]
    GeolocationUnsupported,

    #[error("Location access denied.")]
    LocationDenied,

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl FinderError {
    /// Whether this error is one of the two terminal location-acquisition
    /// outcomes that surface as a blocking notice and halt the flow.
    pub fn is_location_failure(&self) -> bool {
        matches!(
            self,
            FinderError::GeolocationUnsupported | FinderError::LocationDenied
        )
    }
}
