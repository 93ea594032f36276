//! Error types for vehicle-status crate.

use thiserror::Error;

/// Errors that can occur during geodetic reverse projection.
///
/// Only malformed configuration is an error. An `Unset` configuration and
/// unmapped categorical inputs are defined states, not failures.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// UTM origin outside the valid coordinate ranges.
    #[error("invalid projection origin: latitude {latitude}, longitude {longitude}")]
    InvalidOrigin {
        /// Configured origin latitude in degrees.
        latitude: f64,
        /// Configured origin longitude in degrees.
        longitude: f64,
    },

    /// MGRS grid reference that cannot be decoded.
    #[error("malformed MGRS grid reference: {0}")]
    InvalidGrid(String),

    /// UTM zone number outside 1..=60.
    #[error("invalid UTM zone: {0}")]
    InvalidZone(u8),

    /// Latitude outside the transverse Mercator domain.
    #[error("latitude {0} outside projection domain")]
    LatitudeOutOfDomain(f64),
}

impl ProjectionError {
    /// Creates an invalid origin error.
    #[must_use]
    pub const fn invalid_origin(latitude: f64, longitude: f64) -> Self {
        Self::InvalidOrigin {
            latitude,
            longitude,
        }
    }

    /// Creates an invalid grid reference error.
    #[must_use]
    pub fn invalid_grid(grid: impl Into<String>) -> Self {
        Self::InvalidGrid(grid.into())
    }
}

/// Result type for projection operations.
pub type Result<T> = std::result::Result<T, ProjectionError>;
