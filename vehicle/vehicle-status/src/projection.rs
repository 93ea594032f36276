//! Geodetic reverse projection of local Cartesian positions.
//!
//! The projection strategy is selected per call from a
//! [`ProjectionConfig`] value received at runtime: a closed tagged union
//! dispatched by pattern matching rather than trait objects, because the set
//! of strategies is small and closed.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use vehicle_types::GeographicPoint;

use crate::error::{ProjectionError, Result};
use crate::mgrs::MgrsSquare;
use crate::utm::{from_utm, to_utm, UtmCoord};

/// Runtime projection configuration.
///
/// Starts as `Unset` and is normally delivered at most once; repeated
/// delivery is last-write-wins. While `Unset`, reverse projection yields no
/// result rather than an error.
///
/// # Example
///
/// ```
/// use vehicle_status::ProjectionConfig;
///
/// let config = ProjectionConfig::utm(35.0, 139.0);
/// assert!(config.is_set());
/// assert!(!ProjectionConfig::default().is_set());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum ProjectionConfig {
    /// No projection configured yet.
    #[default]
    Unset,
    /// MGRS: local positions are offsets within a named 100 km square.
    Mgrs {
        /// Grid reference of the square, e.g. `54SUE`.
        grid: String,
    },
    /// UTM: local positions are offsets from a fixed geographic origin.
    Utm {
        /// Origin latitude in degrees.
        origin_latitude: f64,
        /// Origin longitude in degrees.
        origin_longitude: f64,
    },
}

impl ProjectionConfig {
    /// Creates an MGRS configuration.
    #[must_use]
    pub fn mgrs(grid: impl Into<String>) -> Self {
        Self::Mgrs { grid: grid.into() }
    }

    /// Creates a UTM configuration anchored at the given origin.
    #[must_use]
    pub const fn utm(origin_latitude: f64, origin_longitude: f64) -> Self {
        Self::Utm {
            origin_latitude,
            origin_longitude,
        }
    }

    /// Returns `true` once a strategy has been configured.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

/// Reverse-projects a local Cartesian position into a geographic point.
///
/// Returns `Ok(None)` while the configuration is `Unset`; callers propagate
/// "no geographic pose available" without treating it as a failure. The
/// produced point always carries the `"global"` frame label. Altitude is
/// taken directly from the local z coordinate.
///
/// # Errors
///
/// Returns a [`ProjectionError`] for malformed configuration: an origin
/// outside the valid coordinate ranges or an un-decodable grid reference.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use vehicle_status::{reverse_project, ProjectionConfig};
///
/// let config = ProjectionConfig::utm(35.0, 139.0);
/// let geo = reverse_project(&config, &Point3::origin()).unwrap().unwrap();
/// assert!((geo.latitude - 35.0).abs() < 1e-6);
/// assert!((geo.longitude - 139.0).abs() < 1e-6);
/// ```
pub fn reverse_project(
    config: &ProjectionConfig,
    point: &Point3<f64>,
) -> Result<Option<GeographicPoint>> {
    match config {
        ProjectionConfig::Unset => Ok(None),
        ProjectionConfig::Mgrs { grid } => {
            let square = MgrsSquare::parse(grid)?;
            let coord = UtmCoord {
                zone: square.zone,
                north: square.north,
                easting: square.easting + point.x,
                northing: square.northing + point.y,
            };
            let (latitude, longitude) = from_utm(&coord)?;
            Ok(Some(GeographicPoint::new(latitude, longitude, point.z)))
        }
        ProjectionConfig::Utm {
            origin_latitude,
            origin_longitude,
        } => {
            if !origin_latitude.is_finite()
                || !origin_longitude.is_finite()
                || origin_latitude.abs() > 90.0
                || origin_longitude.abs() > 180.0
            {
                return Err(ProjectionError::invalid_origin(
                    *origin_latitude,
                    *origin_longitude,
                ));
            }
            let origin = to_utm(*origin_latitude, *origin_longitude)?;
            let coord = UtmCoord {
                easting: origin.easting + point.x,
                northing: origin.northing + point.y,
                ..origin
            };
            let (latitude, longitude) = from_utm(&coord)?;
            Ok(Some(GeographicPoint::new(latitude, longitude, point.z)))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vehicle_types::GLOBAL_FRAME;

    #[test]
    fn unset_yields_no_result() {
        let result = reverse_project(&ProjectionConfig::Unset, &Point3::new(10.0, 20.0, 30.0));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn utm_origin_maps_to_itself() {
        let config = ProjectionConfig::utm(35.0, 139.0);
        let geo = reverse_project(&config, &Point3::origin()).unwrap().unwrap();
        assert_relative_eq!(geo.latitude, 35.0, epsilon = 1e-9);
        assert_relative_eq!(geo.longitude, 139.0, epsilon = 1e-9);
        assert_relative_eq!(geo.altitude, 0.0, epsilon = 1e-12);
        assert_eq!(geo.frame, GLOBAL_FRAME);
    }

    #[test]
    fn utm_local_offsets_move_north_and_east() {
        let config = ProjectionConfig::utm(35.0, 139.0);
        let geo = reverse_project(&config, &Point3::new(1000.0, 1000.0, 5.0))
            .unwrap()
            .unwrap();
        assert!(geo.latitude > 35.0);
        assert!(geo.longitude > 139.0);
        assert_relative_eq!(geo.altitude, 5.0, epsilon = 1e-12);
        // Roughly 1 km in each direction.
        assert!((geo.latitude - 35.0) < 0.02);
        assert!((geo.longitude - 139.0) < 0.02);
    }

    #[test]
    fn utm_round_trip_through_forward_projection() {
        let config = ProjectionConfig::utm(35.0, 139.0);
        let origin = to_utm(35.0, 139.0).unwrap();

        for local in [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(523.0, -812.0, 3.2),
            Point3::new(-4000.0, 2500.0, -1.0),
        ] {
            let geo = reverse_project(&config, &local).unwrap().unwrap();
            let forward = to_utm(geo.latitude, geo.longitude).unwrap();
            assert_relative_eq!(forward.easting - origin.easting, local.x, epsilon = 1e-4);
            assert_relative_eq!(forward.northing - origin.northing, local.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn mgrs_round_trip_through_forward_projection() {
        let config = ProjectionConfig::mgrs("54SUE");
        let square = MgrsSquare::parse("54SUE").unwrap();

        for local in [
            Point3::new(82_000.0, 50_000.0, 10.0),
            Point3::new(100.0, 99_000.0, 0.0),
        ] {
            let geo = reverse_project(&config, &local).unwrap().unwrap();
            let forward = to_utm(geo.latitude, geo.longitude).unwrap();
            assert_eq!(forward.zone, 54);
            assert_relative_eq!(forward.easting - square.easting, local.x, epsilon = 1e-4);
            assert_relative_eq!(forward.northing - square.northing, local.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn mgrs_square_lands_in_tokyo() {
        let config = ProjectionConfig::mgrs("54SUE");
        let geo = reverse_project(&config, &Point3::new(82_000.0, 50_000.0, 0.0))
            .unwrap()
            .unwrap();
        assert!(geo.latitude > 35.0 && geo.latitude < 36.0);
        assert!(geo.longitude > 139.0 && geo.longitude < 140.0);
        assert_eq!(geo.frame, GLOBAL_FRAME);
    }

    #[test]
    fn invalid_utm_origin_is_an_error() {
        let config = ProjectionConfig::utm(91.0, 139.0);
        assert!(reverse_project(&config, &Point3::origin()).is_err());

        let config = ProjectionConfig::utm(f64::NAN, 139.0);
        assert!(reverse_project(&config, &Point3::origin()).is_err());
    }

    #[test]
    fn invalid_grid_is_an_error() {
        let config = ProjectionConfig::mgrs("not-a-grid");
        assert!(reverse_project(&config, &Point3::origin()).is_err());
    }

    #[test]
    fn config_serialization() {
        let config = ProjectionConfig::mgrs("54SUE");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ProjectionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
