//! Aggregate snapshot types.
//!
//! The two externally-facing aggregates: kinematics (pose, twist,
//! acceleration, geographic pose) and categorical status (steering, gear,
//! indicators, hazard lights, doors, energy). Each field keeps its own
//! source stamp; the aggregate's `stamp` is assigned at publish time and is
//! always the tick time, never a source message's timestamp.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geo::GeographicPoint;
use crate::kinematics::{Accel, Pose, Twist};
use crate::status::{DoorStatus, Gear, HazardLight, TurnIndicator};
use crate::time::{Stamped, Timestamp};

/// Kinematic and geographic state of the vehicle.
///
/// Fields that have never received a sample hold their type's default with
/// a zero stamp; both stale and fresh fields are valid snapshot states.
///
/// # Example
///
/// ```
/// use vehicle_types::VehicleKinematics;
///
/// let snapshot = VehicleKinematics::default();
/// assert!(snapshot.pose.is_initial());
/// assert!(snapshot.geographic_pose.value.frame.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VehicleKinematics {
    /// Publish-time stamp of the snapshot.
    pub stamp: Timestamp,
    /// Latest pose in the local map frame.
    pub pose: Stamped<Pose>,
    /// Latest body-frame velocity.
    pub twist: Stamped<Twist>,
    /// Latest body-frame acceleration.
    pub accel: Stamped<Accel>,
    /// Latest reverse-projected geographic pose.
    pub geographic_pose: Stamped<GeographicPoint>,
}

/// Categorical and scalar status of the vehicle.
///
/// # Example
///
/// ```
/// use vehicle_types::{Gear, VehicleStatus};
///
/// let status = VehicleStatus::default();
/// assert_eq!(status.gear.value, Gear::Unknown);
/// assert!(status.doors.value.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VehicleStatus {
    /// Publish-time stamp of the snapshot.
    pub stamp: Timestamp,
    /// Steering tire angle in radians.
    pub steering_tire_angle: Stamped<f32>,
    /// Gear status.
    pub gear: Stamped<Gear>,
    /// Turn indicator status.
    pub turn_indicators: Stamped<TurnIndicator>,
    /// Hazard light status.
    pub hazard_lights: Stamped<HazardLight>,
    /// Per-door status, in vehicle interface order.
    pub doors: Stamped<Vec<DoorStatus>>,
    /// Remaining energy as a percentage.
    pub energy_percentage: Stamped<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinematics_default_fields_are_initial() {
        let k = VehicleKinematics::default();
        assert!(k.stamp.is_zero());
        assert!(k.pose.is_initial());
        assert!(k.twist.is_initial());
        assert!(k.accel.is_initial());
        assert!(k.geographic_pose.is_initial());
    }

    #[test]
    fn status_default_fields_are_unknown() {
        let s = VehicleStatus::default();
        assert_eq!(s.gear.value, Gear::Unknown);
        assert_eq!(s.turn_indicators.value, TurnIndicator::Unknown);
        assert_eq!(s.hazard_lights.value, HazardLight::Unknown);
        assert!((s.energy_percentage.value - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn field_stamps_are_independent_of_snapshot_stamp() {
        let mut s = VehicleStatus::default();
        s.gear = Stamped::new(Timestamp::from_millis(10), Gear::Drive);
        s.stamp = Timestamp::from_millis(500);
        assert_eq!(s.gear.stamp.as_millis(), 10);
        assert_eq!(s.stamp.as_millis(), 500);
    }
}
