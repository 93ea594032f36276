//! Universal Transverse Mercator projection on the WGS84 ellipsoid.
//!
//! Both directions of the transform are provided: the forward direction is
//! needed to anchor a UTM origin and to resolve MGRS row northings, the
//! inverse is the heart of reverse projection. The implementation uses the
//! Krüger series in the third flattening `n`, truncated at `n^4`, which is
//! accurate to well under a millimeter anywhere inside a zone.

use crate::error::{ProjectionError, Result};

/// WGS84 semi-major axis in meters.
const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// UTM central scale factor.
const K0: f64 = 0.9996;
/// False easting applied to every zone.
const FALSE_EASTING: f64 = 500_000.0;
/// False northing applied in the southern hemisphere.
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// A position in UTM coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmCoord {
    /// Zone number, 1..=60.
    pub zone: u8,
    /// `true` for the northern hemisphere.
    pub north: bool,
    /// Easting in meters (includes the false easting).
    pub easting: f64,
    /// Northing in meters (includes the false northing when southern).
    pub northing: f64,
}

/// Returns the UTM zone number containing the given longitude.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn zone_for_longitude(longitude: f64) -> u8 {
    let zone = ((longitude + 180.0) / 6.0).floor() as i32 + 1;
    zone.clamp(1, 60) as u8
}

/// Returns the central meridian of a zone in degrees.
#[must_use]
pub fn central_meridian(zone: u8) -> f64 {
    f64::from(zone).mul_add(6.0, -183.0)
}

/// Precomputed Krüger series coefficients for WGS84.
struct Krueger {
    /// Rectifying radius.
    radius: f64,
    /// First eccentricity.
    ecc: f64,
    /// Forward series coefficients.
    alpha: [f64; 4],
    /// Inverse series coefficients.
    beta: [f64; 4],
    /// Conformal-to-geographic latitude coefficients.
    delta: [f64; 4],
}

impl Krueger {
    #[allow(clippy::similar_names)]
    fn wgs84() -> Self {
        let n = WGS84_F / (2.0 - WGS84_F);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n2 * n2;

        let radius = WGS84_A / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0);
        let ecc = (WGS84_F * (2.0 - WGS84_F)).sqrt();

        let alpha = [
            n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0 + 41.0 * n4 / 180.0,
            13.0 * n2 / 48.0 - 3.0 * n3 / 5.0 + 557.0 * n4 / 1440.0,
            61.0 * n3 / 240.0 - 103.0 * n4 / 140.0,
            49561.0 * n4 / 161_280.0,
        ];
        let beta = [
            n / 2.0 - 2.0 * n2 / 3.0 + 37.0 * n3 / 96.0 - n4 / 360.0,
            n2 / 48.0 + n3 / 15.0 - 437.0 * n4 / 1440.0,
            17.0 * n3 / 480.0 - 37.0 * n4 / 840.0,
            4397.0 * n4 / 161_280.0,
        ];
        let delta = [
            2.0 * n - 2.0 * n2 / 3.0 - 2.0 * n3 + 116.0 * n4 / 45.0,
            7.0 * n2 / 3.0 - 8.0 * n3 / 5.0 - 227.0 * n4 / 45.0,
            56.0 * n3 / 15.0 - 136.0 * n4 / 35.0,
            4279.0 * n4 / 630.0,
        ];

        Self {
            radius,
            ecc,
            alpha,
            beta,
            delta,
        }
    }
}

/// Projects a geographic position into UTM coordinates.
///
/// The zone is chosen from the longitude. Latitudes outside the UTM domain
/// (roughly beyond ±84°) are rejected.
///
/// # Errors
///
/// Returns [`ProjectionError::LatitudeOutOfDomain`] if the latitude is not
/// finite or lies outside ±84°, and [`ProjectionError::InvalidOrigin`] if
/// the longitude is not finite or outside ±180°.
pub fn to_utm(latitude: f64, longitude: f64) -> Result<UtmCoord> {
    if !latitude.is_finite() || latitude.abs() > 84.0 {
        return Err(ProjectionError::LatitudeOutOfDomain(latitude));
    }
    if !longitude.is_finite() || longitude.abs() > 180.0 {
        return Err(ProjectionError::invalid_origin(latitude, longitude));
    }

    let k = Krueger::wgs84();
    let zone = zone_for_longitude(longitude);
    let lam = (longitude - central_meridian(zone)).to_radians();
    let phi = latitude.to_radians();

    // Conformal latitude via the Gauss-Schreiber parameter t.
    let sin_phi = phi.sin();
    let t = (sin_phi.atanh() - k.ecc * (k.ecc * sin_phi).atanh()).sinh();

    let xi_prime = t.atan2(lam.cos());
    let eta_prime = (lam.sin() / t.hypot(lam.cos())).asinh();

    let mut xi = xi_prime;
    let mut eta = eta_prime;
    for (j, a) in (1..).zip(k.alpha) {
        let arg = 2.0 * f64::from(j);
        xi += a * (arg * xi_prime).sin() * (arg * eta_prime).cosh();
        eta += a * (arg * xi_prime).cos() * (arg * eta_prime).sinh();
    }

    let north = latitude >= 0.0;
    let easting = (K0 * k.radius).mul_add(eta, FALSE_EASTING);
    let mut northing = K0 * k.radius * xi;
    if !north {
        northing += FALSE_NORTHING_SOUTH;
    }

    Ok(UtmCoord {
        zone,
        north,
        easting,
        northing,
    })
}

/// Projects UTM coordinates back into a geographic position.
///
/// Returns `(latitude, longitude)` in degrees.
///
/// # Errors
///
/// Returns [`ProjectionError::InvalidZone`] if the zone number is outside
/// 1..=60.
pub fn from_utm(coord: &UtmCoord) -> Result<(f64, f64)> {
    if coord.zone < 1 || coord.zone > 60 {
        return Err(ProjectionError::InvalidZone(coord.zone));
    }

    let k = Krueger::wgs84();
    let false_northing = if coord.north {
        0.0
    } else {
        FALSE_NORTHING_SOUTH
    };

    let xi = (coord.northing - false_northing) / (K0 * k.radius);
    let eta = (coord.easting - FALSE_EASTING) / (K0 * k.radius);

    let mut xi_prime = xi;
    let mut eta_prime = eta;
    for (j, b) in (1..).zip(k.beta) {
        let arg = 2.0 * f64::from(j);
        xi_prime -= b * (arg * xi).sin() * (arg * eta).cosh();
        eta_prime -= b * (arg * xi).cos() * (arg * eta).sinh();
    }

    // Conformal latitude back to geographic latitude.
    let chi = (xi_prime.sin() / eta_prime.cosh()).asin();
    let mut phi = chi;
    for (j, d) in (1..).zip(k.delta) {
        let arg = 2.0 * f64::from(j);
        phi += d * (arg * chi).sin();
    }

    let lam = eta_prime.sinh().atan2(xi_prime.cos());
    let latitude = phi.to_degrees();
    let longitude = central_meridian(coord.zone) + lam.to_degrees();

    Ok((latitude, longitude))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zone_numbering() {
        assert_eq!(zone_for_longitude(-180.0), 1);
        assert_eq!(zone_for_longitude(-0.001), 30);
        assert_eq!(zone_for_longitude(0.0), 31);
        assert_eq!(zone_for_longitude(139.0), 54);
        assert_eq!(zone_for_longitude(180.0), 60);
    }

    #[test]
    fn central_meridians() {
        assert!((central_meridian(31) - 3.0).abs() < 1e-12);
        assert!((central_meridian(54) - 141.0).abs() < 1e-12);
    }

    #[test]
    fn equator_on_central_meridian() {
        let coord = to_utm(0.0, 3.0).unwrap();
        assert_eq!(coord.zone, 31);
        assert!(coord.north);
        assert_relative_eq!(coord.easting, 500_000.0, epsilon = 1e-6);
        assert_relative_eq!(coord.northing, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn one_degree_of_latitude_on_central_meridian() {
        // One degree of meridian arc at the equator is about 110.57 km; UTM
        // scales it by k0.
        let coord = to_utm(1.0, 3.0).unwrap();
        assert!((coord.northing - 110_530.0).abs() < 500.0);
    }

    #[test]
    fn southern_hemisphere_false_northing() {
        let coord = to_utm(-1.0, 3.0).unwrap();
        assert!(!coord.north);
        assert!(coord.northing < 10_000_000.0);
        assert!(coord.northing > 9_800_000.0);
    }

    #[test]
    fn north_south_symmetry() {
        let n = to_utm(35.0, 139.0).unwrap();
        let s = to_utm(-35.0, 139.0).unwrap();
        assert_relative_eq!(n.easting, s.easting, epsilon = 1e-6);
        assert_relative_eq!(n.northing, 10_000_000.0 - s.northing, epsilon = 1e-6);
    }

    #[test]
    fn round_trip_sampled_points() {
        let samples = [
            (35.0, 139.0),
            (35.6586, 139.7454),
            (-33.8688, 151.2093),
            (51.5074, -0.1278),
            (0.5, 0.5),
            (60.0, 24.9),
            (-80.0, 170.0),
        ];
        for (lat, lon) in samples {
            let coord = to_utm(lat, lon).unwrap();
            let (lat2, lon2) = from_utm(&coord).unwrap();
            assert_relative_eq!(lat, lat2, epsilon = 1e-9);
            assert_relative_eq!(lon, lon2, epsilon = 1e-9);
        }
    }

    #[test]
    fn round_trip_with_easting_offset() {
        // An offset point inside the zone must also survive the round trip.
        let mut coord = to_utm(35.0, 139.0).unwrap();
        coord.easting += 12_345.0;
        coord.northing += 6_789.0;
        let (lat, lon) = from_utm(&coord).unwrap();
        let coord2 = to_utm(lat, lon).unwrap();
        assert_relative_eq!(coord.easting, coord2.easting, epsilon = 1e-4);
        assert_relative_eq!(coord.northing, coord2.northing, epsilon = 1e-4);
    }

    #[test]
    fn rejects_out_of_domain_latitude() {
        assert!(to_utm(89.0, 0.0).is_err());
        assert!(to_utm(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert!(to_utm(35.0, 181.0).is_err());
        assert!(to_utm(35.0, f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_invalid_zone() {
        let coord = UtmCoord {
            zone: 0,
            north: true,
            easting: 500_000.0,
            northing: 0.0,
        };
        assert!(from_utm(&coord).is_err());
    }
}
