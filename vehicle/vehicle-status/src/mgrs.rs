//! MGRS 100 km grid reference decoding.
//!
//! An MGRS grid reference such as `54SUE` names a 100 km square: a UTM zone
//! number, a latitude band letter, and a column/row letter pair. Decoding it
//! yields the UTM coordinates of the square's southwest corner, which is the
//! origin that local Cartesian positions are measured from.

use crate::error::{ProjectionError, Result};
use crate::utm::{central_meridian, to_utm};

/// Latitude band letters, south to north (I and O are skipped).
const BANDS: &[u8] = b"CDEFGHJKLMNPQRSTUVWX";
/// Column letter sets, cycling with the zone number.
const COLUMNS: [&[u8]; 3] = [b"ABCDEFGH", b"JKLMNPQR", b"STUVWXYZ"];
/// Row letters, repeating every 2,000 km of northing.
const ROWS: &[u8] = b"ABCDEFGHJKLMNPQRSTUV";
/// Size of an MGRS square in meters.
const SQUARE_SIZE: f64 = 100_000.0;
/// Northing period of the row letter cycle in meters.
const ROW_PERIOD: f64 = 2_000_000.0;

/// The southwest corner of a decoded 100 km MGRS square, in UTM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MgrsSquare {
    /// UTM zone number, 1..=60.
    pub zone: u8,
    /// `true` for northern latitude bands (N through X).
    pub north: bool,
    /// Easting of the square's west edge in meters.
    pub easting: f64,
    /// Northing of the square's south edge in meters.
    pub northing: f64,
}

impl MgrsSquare {
    /// Decodes a 100 km grid reference such as `54SUE`.
    ///
    /// The reference must be uppercase: one or two zone digits, a latitude
    /// band letter, and a column/row letter pair.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidGrid`] for anything that does not
    /// decode: bad length, zone outside 1..=60, letters outside the valid
    /// sets for that zone, or band letters I/O.
    ///
    /// # Example
    ///
    /// ```
    /// use vehicle_status::MgrsSquare;
    ///
    /// let square = MgrsSquare::parse("54SUE").unwrap();
    /// assert_eq!(square.zone, 54);
    /// assert!(square.north);
    /// assert!((square.easting - 300_000.0).abs() < 1e-6);
    /// assert!((square.northing - 3_900_000.0).abs() < 1e-6);
    /// ```
    pub fn parse(grid: &str) -> Result<Self> {
        let bytes = grid.as_bytes();
        let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 || digits > 2 || bytes.len() != digits + 3 {
            return Err(ProjectionError::invalid_grid(grid));
        }

        let zone: u8 = grid[..digits]
            .parse()
            .map_err(|_| ProjectionError::invalid_grid(grid))?;
        if !(1..=60).contains(&zone) {
            return Err(ProjectionError::invalid_grid(grid));
        }

        let band = bytes[digits];
        let column = bytes[digits + 1];
        let row = bytes[digits + 2];

        let band_index = BANDS
            .iter()
            .position(|&b| b == band)
            .ok_or_else(|| ProjectionError::invalid_grid(grid))?;

        let column_set = COLUMNS[usize::from(zone - 1) % 3];
        let column_index = column_set
            .iter()
            .position(|&b| b == column)
            .ok_or_else(|| ProjectionError::invalid_grid(grid))?;

        let row_position = ROWS
            .iter()
            .position(|&b| b == row)
            .ok_or_else(|| ProjectionError::invalid_grid(grid))?;
        // Even zones offset the row cycle by five letters.
        let row_offset = if zone % 2 == 0 { 5 } else { 0 };
        let row_index = (row_position + ROWS.len() - row_offset) % ROWS.len();

        #[allow(clippy::cast_precision_loss)]
        let easting = (column_index as f64 + 1.0) * SQUARE_SIZE;
        #[allow(clippy::cast_precision_loss)]
        let mut northing = row_index as f64 * SQUARE_SIZE;

        // Row letters repeat every 2,000 km; lift the northing into the
        // band's latitude range. A square may straddle the band's southern
        // edge, hence the one-square slack.
        let (band_bottom, north) = band_latitude(band_index);
        let min_northing = to_utm(band_bottom, central_meridian(zone))?.northing;
        while northing < min_northing - SQUARE_SIZE {
            northing += ROW_PERIOD;
        }

        Ok(Self {
            zone,
            north,
            easting,
            northing,
        })
    }
}

/// Returns the southern latitude of a band and its hemisphere.
#[allow(clippy::cast_precision_loss)]
fn band_latitude(band_index: usize) -> (f64, bool) {
    let bottom = (band_index as f64).mul_add(8.0, -80.0);
    (bottom, bottom >= 0.0)
}
