//! Vehicle telemetry aggregation for external status reporting.
//!
//! This crate turns heterogeneous, independently-updating telemetry streams
//! into a stable external status representation:
//!
//! # Status Normalization
//!
//! - [`Normalize`] - Total translation from raw report enums into the
//!   externally-facing status domains, with `Unknown` as the defined
//!   fallback
//!
//! # Geodetic Reverse Projection
//!
//! - [`ProjectionConfig`] - Runtime strategy selection: `Unset`, MGRS, or
//!   UTM, dispatched by pattern matching
//! - [`reverse_project`] - Local Cartesian position to
//!   latitude/longitude/altitude
//! - [`MgrsSquare`] - 100 km grid reference decoding
//! - [`UtmCoord`] / [`to_utm`] / [`from_utm`] - Transverse Mercator
//!   transform in both directions
//!
//! # Aggregation
//!
//! - [`TelemetryBuffer`] - Latest-value buffer, one update operation per
//!   telemetry family, normalization and projection applied at write time
//! - [`SnapshotPublisher`] - Fixed-rate snapshot emission driven by an
//!   injected [`Clock`]
//!
//! # Example
//!
//! ```
//! use vehicle_status::{ManualClock, ProjectionConfig, SnapshotPublisher, TelemetryBuffer};
//! use vehicle_types::{Duration, GearReport, Gear, Point3, Pose, Timestamp, Twist};
//!
//! let mut buffer = TelemetryBuffer::new();
//! buffer.set_projection(ProjectionConfig::utm(35.0, 139.0));
//! buffer.update_gear(Timestamp::from_millis(10), GearReport::Drive7);
//! buffer.update_kinematic_state(
//!     Timestamp::from_millis(20),
//!     Pose::from_position(Point3::new(100.0, 50.0, 2.0)),
//!     Twist::default(),
//! );
//!
//! let clock = ManualClock::new();
//! let mut publisher = SnapshotPublisher::new(&clock, Duration::from_millis(100));
//! clock.advance(Duration::from_millis(100));
//!
//! let (kinematics, status) = publisher.poll(&buffer).unwrap();
//! assert_eq!(status.gear.value, Gear::Drive);
//! assert!(kinematics.geographic_pose.value.latitude > 35.0);
//! ```
//!
//! # Error Handling
//!
//! Only malformed projection configuration is an error
//! ([`ProjectionError`]). Unmapped categorical reports default to `Unknown`,
//! and an `Unset` projection simply yields no geographic pose; neither is a
//! failure. A projection error during a pose update is logged and the
//! previous geographic pose retained, so the publish loop is never
//! disturbed.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod buffer;
mod error;
mod mgrs;
mod normalize;
mod projection;
mod publisher;
mod utm;

// Re-export aggregation types
pub use buffer::TelemetryBuffer;

// Re-export normalization
pub use normalize::Normalize;

// Re-export projection types
pub use mgrs::MgrsSquare;
pub use projection::{reverse_project, ProjectionConfig};
pub use utm::{central_meridian, from_utm, to_utm, zone_for_longitude, UtmCoord};

// Re-export publishing types
pub use publisher::{Clock, ManualClock, SnapshotPublisher, SystemClock, DEFAULT_PERIOD};

// Re-export error types
pub use error::{ProjectionError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        reverse_project, Clock, ManualClock, Normalize, ProjectionConfig, ProjectionError,
        SnapshotPublisher, SystemClock, TelemetryBuffer,
    };
}
