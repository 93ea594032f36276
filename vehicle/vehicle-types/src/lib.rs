//! Core value types for vehicle telemetry.
//!
//! This crate provides the foundational types for the vehicle status domain:
//!
//! - [`Timestamp`] / [`Duration`] - Nanosecond-precision timing
//! - [`Stamped`] - A value tagged with its source timestamp
//! - Categorical status families ([`Gear`], [`TurnIndicator`], [`HazardLight`],
//!   [`DoorStatus`]) and their raw report counterparts
//! - Kinematic values ([`Pose`], [`Twist`], [`Accel`])
//! - [`GeographicPoint`] - Latitude/longitude/altitude with a frame label
//! - [`VehicleKinematics`] / [`VehicleStatus`] - Aggregate snapshots
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with no transport or runtime dependencies. It can
//! be used in:
//! - Middleware bridges (`ROS2`, custom drivers)
//! - Simulation environments
//! - Dataset storage (serialized telemetry)
//! - Servers and CLI tools
//!
//! # Status Families
//!
//! Each categorical family is a pair of closed enums: a raw *report* domain as
//! delivered by the vehicle interface, and the externally-facing domain. The
//! translation between the two lives in `vehicle-status`; this crate only
//! defines the value spaces.
//!
//! # Time
//!
//! Every independently-updating telemetry field is a [`Stamped`] value: the
//! stamp records when the source produced the sample, not when it was
//! aggregated. The aggregate snapshots carry their own publish-time stamp.
//!
//! # Example
//!
//! ```
//! use vehicle_types::{Gear, Stamped, Timestamp};
//!
//! let gear = Stamped::new(Timestamp::from_millis(1500), Gear::Drive);
//! assert_eq!(gear.value, Gear::Drive);
//! assert_eq!(gear.stamp.as_millis(), 1500);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod geo;
mod kinematics;
mod snapshot;
mod status;
mod time;

// Re-export core types
pub use geo::{GeographicPoint, GLOBAL_FRAME};
pub use kinematics::{Accel, Pose, Twist};
pub use snapshot::{VehicleKinematics, VehicleStatus};
pub use status::{
    DoorReport, DoorStatus, Gear, GearReport, HazardLight, HazardLightReport, TurnIndicator,
    TurnIndicatorReport,
};
pub use time::{Duration, Stamped, Timestamp};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
