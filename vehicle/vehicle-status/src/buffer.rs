//! Latest-value buffer for independently-updating telemetry streams.
//!
//! The buffer owns the aggregate snapshots exclusively; each update
//! operation replaces one family's fields and runs to completion before the
//! next update or publish tick begins. Categorical reports are normalized at
//! write time and the geographic pose is reverse-projected at write time, so
//! reading a snapshot is O(1) regardless of how projection is configured.

use tracing::warn;
use vehicle_types::{
    Accel, DoorReport, GearReport, HazardLightReport, Pose, Stamped, Timestamp,
    TurnIndicatorReport, Twist, VehicleKinematics, VehicleStatus,
};

use crate::normalize::Normalize;
use crate::projection::{reverse_project, ProjectionConfig};

/// Holds the most recently observed value of every telemetry stream.
///
/// No update inspects any other family, so updates to unrelated families
/// commute. A projection failure during a pose update rejects only the
/// geographic part of that update; the previously stored geographic pose is
/// retained and a diagnostic is logged.
///
/// # Example
///
/// ```
/// use vehicle_status::TelemetryBuffer;
/// use vehicle_types::{Gear, GearReport, Timestamp};
///
/// let mut buffer = TelemetryBuffer::new();
/// buffer.update_gear(Timestamp::from_millis(10), GearReport::Drive7);
/// assert_eq!(buffer.status().gear.value, Gear::Drive);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TelemetryBuffer {
    projection: ProjectionConfig,
    kinematics: VehicleKinematics,
    status: VehicleStatus,
}

impl TelemetryBuffer {
    /// Creates an empty buffer with all fields at their defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current kinematic aggregate.
    #[must_use]
    pub const fn kinematics(&self) -> &VehicleKinematics {
        &self.kinematics
    }

    /// Returns the current status aggregate.
    #[must_use]
    pub const fn status(&self) -> &VehicleStatus {
        &self.status
    }

    /// Returns the current projection configuration.
    #[must_use]
    pub const fn projection(&self) -> &ProjectionConfig {
        &self.projection
    }

    /// Replaces the projection configuration (last-write-wins).
    pub fn set_projection(&mut self, config: ProjectionConfig) {
        self.projection = config;
    }

    /// Stores a pose/twist sample and derives the geographic pose.
    ///
    /// The reverse projection runs inline with the update. While no
    /// projection is configured the geographic pose keeps its previous
    /// value; a projection error likewise keeps the previous value and logs
    /// a diagnostic, while the Cartesian pose and twist still land.
    pub fn update_kinematic_state(&mut self, stamp: Timestamp, pose: Pose, twist: Twist) {
        match reverse_project(&self.projection, &pose.position) {
            Ok(Some(geo)) => self.kinematics.geographic_pose = Stamped::new(stamp, geo),
            Ok(None) => {}
            Err(err) => warn!("geographic pose update rejected: {err}"),
        }
        self.kinematics.pose = Stamped::new(stamp, pose);
        self.kinematics.twist = Stamped::new(stamp, twist);
    }

    /// Stores an acceleration sample.
    pub fn update_acceleration(&mut self, stamp: Timestamp, accel: Accel) {
        self.kinematics.accel = Stamped::new(stamp, accel);
    }

    /// Stores a steering tire angle sample, in radians.
    pub fn update_steering(&mut self, stamp: Timestamp, angle: f32) {
        self.status.steering_tire_angle = Stamped::new(stamp, angle);
    }

    /// Stores a gear report, normalized to the external domain.
    pub fn update_gear(&mut self, stamp: Timestamp, report: GearReport) {
        self.status.gear = Stamped::new(stamp, report.normalize());
    }

    /// Stores a turn indicator report, normalized to the external domain.
    pub fn update_turn_indicator(&mut self, stamp: Timestamp, report: TurnIndicatorReport) {
        self.status.turn_indicators = Stamped::new(stamp, report.normalize());
    }

    /// Stores a hazard light report, normalized to the external domain.
    pub fn update_hazard_lights(&mut self, stamp: Timestamp, report: HazardLightReport) {
        self.status.hazard_lights = Stamped::new(stamp, report.normalize());
    }

    /// Stores door reports, normalized to the external domain.
    pub fn update_doors(&mut self, stamp: Timestamp, reports: &[DoorReport]) {
        let doors = reports.iter().map(|r| r.normalize()).collect();
        self.status.doors = Stamped::new(stamp, doors);
    }

    /// Stores an energy level sample, as a percentage.
    pub fn update_energy_level(&mut self, stamp: Timestamp, percentage: f32) {
        self.status.energy_percentage = Stamped::new(stamp, percentage);
    }

    /// Takes a consistent copy of both aggregates, stamped with `stamp`.
    ///
    /// The snapshot stamp is always the caller's tick time; individual
    /// fields keep their own source stamps and may be arbitrarily stale.
    #[must_use]
    pub fn snapshot(&self, stamp: Timestamp) -> (VehicleKinematics, VehicleStatus) {
        let mut kinematics = self.kinematics.clone();
        let mut status = self.status.clone();
        kinematics.stamp = stamp;
        status.stamp = stamp;
        (kinematics, status)
    }
}
