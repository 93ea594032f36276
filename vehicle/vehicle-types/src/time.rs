//! Time types for telemetry data.
//!
//! Provides nanosecond-precision timing for telemetry samples and the
//! [`Stamped`] wrapper that tags a value with its source timestamp.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nanosecond-precision timestamp.
///
/// Used for all telemetry samples and for the publish-time stamp of
/// aggregate snapshots. The zero timestamp doubles as the "never updated"
/// marker for fields that have not received a sample yet.
///
/// # Example
///
/// ```
/// use vehicle_types::Timestamp;
///
/// let ts = Timestamp::from_millis(100);
/// assert_eq!(ts.as_nanos(), 100_000_000);
/// assert!(!ts.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamp {
    /// Nanoseconds since epoch (or simulation start).
    nanos: u64,
}

impl Timestamp {
    /// Creates a timestamp from nanoseconds.
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// Creates a timestamp from milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            nanos: millis * 1_000_000,
        }
    }

    /// Creates a timestamp from seconds (floating point).
    ///
    /// Negative values clamp to zero.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn from_secs_f64(secs: f64) -> Self {
        let nanos = (secs * 1e9).max(0.0) as u64;
        Self { nanos }
    }

    /// Returns the timestamp as nanoseconds.
    #[must_use]
    pub const fn as_nanos(self) -> u64 {
        self.nanos
    }

    /// Returns the timestamp as milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.nanos / 1_000_000
    }

    /// Returns the timestamp as seconds (floating point).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(self) -> f64 {
        self.nanos as f64 / 1e9
    }

    /// Returns the zero timestamp.
    #[must_use]
    pub const fn zero() -> Self {
        Self { nanos: 0 }
    }

    /// Checks if this is the zero timestamp.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.nanos == 0
    }

    /// Adds a duration, saturating at the numeric limit.
    #[must_use]
    pub const fn saturating_add(self, duration: Duration) -> Self {
        Self {
            nanos: self.nanos.saturating_add(duration.as_nanos()),
        }
    }

    /// Returns the absolute difference between two timestamps.
    #[must_use]
    pub const fn abs_diff(self, other: Self) -> Duration {
        Duration::from_nanos(self.nanos.abs_diff(other.nanos))
    }
}

/// A time interval with nanosecond precision.
///
/// # Example
///
/// ```
/// use vehicle_types::Duration;
///
/// let period = Duration::from_millis(100);
/// assert_eq!(period.as_nanos(), 100_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Duration {
    /// Interval in nanoseconds.
    nanos: u64,
}

impl Duration {
    /// Creates a duration from nanoseconds.
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// Creates a duration from milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            nanos: millis * 1_000_000,
        }
    }

    /// Creates a duration from seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            nanos: secs * 1_000_000_000,
        }
    }

    /// Returns the duration as nanoseconds.
    #[must_use]
    pub const fn as_nanos(self) -> u64 {
        self.nanos
    }

    /// Returns the duration as milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.nanos / 1_000_000
    }

    /// Returns the duration as seconds (floating point).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(self) -> f64 {
        self.nanos as f64 / 1e9
    }

    /// Returns the zero duration.
    #[must_use]
    pub const fn zero() -> Self {
        Self { nanos: 0 }
    }

    /// Checks if this is a zero duration.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.nanos == 0
    }
}

/// A value tagged with its source timestamp.
///
/// Telemetry streams update independently, so every field of an aggregate
/// snapshot records when *its* sample was produced. A default-constructed
/// `Stamped` holds the type's default value with a zero stamp, which is the
/// defined state for fields that have never received a sample.
///
/// # Example
///
/// ```
/// use vehicle_types::{Stamped, Timestamp};
///
/// let sample = Stamped::new(Timestamp::from_millis(250), 3.5_f64);
/// assert_eq!(sample.stamp.as_millis(), 250);
///
/// let never: Stamped<f64> = Stamped::default();
/// assert!(never.stamp.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stamped<T> {
    /// When the source produced this value.
    pub stamp: Timestamp,
    /// The value itself.
    pub value: T,
}

impl<T> Stamped<T> {
    /// Creates a stamped value.
    #[must_use]
    pub const fn new(stamp: Timestamp, value: T) -> Self {
        Self { stamp, value }
    }

    /// Checks whether a sample has ever been stored.
    ///
    /// A zero stamp means the field still holds its initial default.
    #[must_use]
    pub const fn is_initial(&self) -> bool {
        self.stamp.is_zero()
    }
}
