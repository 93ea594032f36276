//! Geographic position types.
//!
//! A [`GeographicPoint`] is the result of reverse-projecting a local
//! Cartesian position into latitude/longitude/altitude.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Frame label for reverse-projected geographic positions.
///
/// Every point produced by the reverse projector carries this label,
/// regardless of which projection strategy computed it.
pub const GLOBAL_FRAME: &str = "global";

/// A geographic position with a frame label.
///
/// # Coordinate System
///
/// - Latitude: degrees, positive = North
/// - Longitude: degrees, positive = East
/// - Altitude: meters above the WGS84 ellipsoid
///
/// The default value is all-zero with an empty frame label; it marks a
/// geographic pose that has never been computed. Projector output always
/// carries the [`GLOBAL_FRAME`] label.
///
/// # Example
///
/// ```
/// use vehicle_types::{GeographicPoint, GLOBAL_FRAME};
///
/// let point = GeographicPoint::new(35.0, 139.0, 12.5);
/// assert_eq!(point.frame, GLOBAL_FRAME);
/// assert!(point.is_valid());
///
/// let never = GeographicPoint::default();
/// assert!(never.frame.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeographicPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Altitude in meters.
    pub altitude: f64,
    /// Reference frame label.
    pub frame: String,
}

impl GeographicPoint {
    /// Creates a geographic point in the global frame.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
            frame: GLOBAL_FRAME.to_owned(),
        }
    }

    /// Validates the coordinate ranges.
    ///
    /// Returns `true` if latitude is in [-90, 90], longitude is in
    /// [-180, 180], and neither is NaN.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
            && !self.latitude.is_nan()
            && !self.longitude.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_global_frame() {
        let p = GeographicPoint::new(35.0, 139.0, 0.0);
        assert_eq!(p.frame, "global");
    }

    #[test]
    fn default_is_zeroed_and_unlabelled() {
        let p = GeographicPoint::default();
        assert!((p.latitude - 0.0).abs() < 1e-12);
        assert!((p.longitude - 0.0).abs() < 1e-12);
        assert!((p.altitude - 0.0).abs() < 1e-12);
        assert!(p.frame.is_empty());
    }

    #[test]
    fn validity_ranges() {
        assert!(GeographicPoint::new(90.0, 180.0, 0.0).is_valid());
        assert!(!GeographicPoint::new(90.5, 0.0, 0.0).is_valid());
        assert!(!GeographicPoint::new(0.0, -180.5, 0.0).is_valid());
        assert!(!GeographicPoint::new(f64::NAN, 0.0, 0.0).is_valid());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn geographic_point_serialization() {
        let p = GeographicPoint::new(35.0, 139.0, 40.0);
        let json = serde_json::to_string(&p).ok();
        assert!(json.is_some());

        let parsed: Result<GeographicPoint, _> = serde_json::from_str(&json.unwrap_or_default());
        assert!(parsed.is_ok());
    }
}
