//! Fixed-rate snapshot publishing.
//!
//! The publisher is a polled task driven by an injected [`Clock`], so tests
//! advance a virtual clock instead of waiting on real time. On each elapsed
//! period it stamps the aggregates with the tick time and hands back the
//! kinematic and status snapshots as two independent values. It never
//! inspects whether a field has ever been set; never-updated fields are
//! emitted with their defaults.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use vehicle_types::{Duration, Timestamp, VehicleKinematics, VehicleStatus};

use crate::buffer::TelemetryBuffer;

/// Default publish period: 10 Hz.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(100);

/// A source of the current time.
///
/// Injected into [`SnapshotPublisher`] so the publish cadence can be tested
/// deterministically with [`ManualClock`].
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Wall-clock time since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or_else(|_| Timestamp::zero(), |d| {
                Timestamp::from_nanos(d.as_nanos() as u64)
            })
    }
}

/// A manually advanced clock for deterministic tests.
///
/// # Example
///
/// ```
/// use vehicle_status::{Clock, ManualClock};
/// use vehicle_types::Duration;
///
/// let clock = ManualClock::new();
/// clock.advance(Duration::from_millis(100));
/// assert_eq!(clock.now().as_millis(), 100);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Timestamp>,
}

impl ManualClock {
    /// Creates a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock at the given time.
    #[must_use]
    pub fn starting_at(start: Timestamp) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Advances the clock by `step`.
    pub fn advance(&self, step: Duration) {
        self.now.set(self.now.get().saturating_add(step));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

/// Emits buffer snapshots on a fixed cadence.
///
/// `poll` is cheap when no tick is due, so the external scheduler may call
/// it as often as it likes; overrun policy (queueing or dropping ticks when
/// emission is slow) stays with that scheduler. When several periods have
/// elapsed between polls, a single snapshot is emitted and the schedule
/// realigns past the current time.
///
/// # Example
///
/// ```
/// use vehicle_status::{ManualClock, SnapshotPublisher, TelemetryBuffer};
/// use vehicle_types::Duration;
///
/// let clock = ManualClock::new();
/// let mut publisher = SnapshotPublisher::new(&clock, Duration::from_millis(100));
/// let buffer = TelemetryBuffer::new();
///
/// assert!(publisher.poll(&buffer).is_none());
/// clock.advance(Duration::from_millis(100));
/// let (kinematics, status) = publisher.poll(&buffer).unwrap();
/// assert_eq!(status.stamp.as_millis(), 100);
/// assert_eq!(kinematics.stamp, status.stamp);
/// ```
#[derive(Debug)]
pub struct SnapshotPublisher<C: Clock> {
    clock: C,
    period: Duration,
    next_due: Timestamp,
}

impl<C: Clock> SnapshotPublisher<C> {
    /// Creates a publisher with the given period.
    ///
    /// The first tick is due one period after construction. A zero period
    /// is treated as the default period.
    #[must_use]
    pub fn new(clock: C, period: Duration) -> Self {
        let period = if period.is_zero() {
            DEFAULT_PERIOD
        } else {
            period
        };
        let next_due = clock.now().saturating_add(period);
        Self {
            clock,
            period,
            next_due,
        }
    }

    /// Creates a publisher at the default 10 Hz cadence.
    #[must_use]
    pub fn with_default_period(clock: C) -> Self {
        Self::new(clock, DEFAULT_PERIOD)
    }

    /// Returns the configured period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Emits a snapshot pair if a tick is due, stamped with the tick time.
    #[must_use]
    pub fn poll(&mut self, buffer: &TelemetryBuffer) -> Option<(VehicleKinematics, VehicleStatus)> {
        let now = self.clock.now();
        if now < self.next_due {
            return None;
        }
        while self.next_due <= now {
            self.next_due = self.next_due.saturating_add(self.period);
        }
        Some(buffer.snapshot(now))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use vehicle_types::{Gear, GearReport};

    #[test]
    fn no_tick_before_period_elapses() {
        let clock = ManualClock::new();
        let mut publisher = SnapshotPublisher::new(&clock, Duration::from_millis(100));
        let buffer = TelemetryBuffer::new();

        assert!(publisher.poll(&buffer).is_none());
        clock.advance(Duration::from_millis(99));
        assert!(publisher.poll(&buffer).is_none());
    }

    #[test]
    fn fires_every_period_with_tick_stamp() {
        let clock = ManualClock::new();
        let mut publisher = SnapshotPublisher::new(&clock, Duration::from_millis(100));
        let buffer = TelemetryBuffer::new();

        for expected_millis in [100, 200, 300, 400, 500] {
            clock.advance(Duration::from_millis(100));
            let (kinematics, status) = publisher.poll(&buffer).unwrap();
            assert_eq!(status.stamp.as_millis(), expected_millis);
            assert_eq!(kinematics.stamp.as_millis(), expected_millis);
        }
    }

    #[test]
    fn fires_regardless_of_updates() {
        // No telemetry ever arrives; snapshots still flow with defaults.
        let clock = ManualClock::new();
        let mut publisher = SnapshotPublisher::new(&clock, Duration::from_millis(100));
        let buffer = TelemetryBuffer::new();

        clock.advance(Duration::from_millis(100));
        let (kinematics, status) = publisher.poll(&buffer).unwrap();
        assert_eq!(status.gear.value, Gear::Unknown);
        assert!(kinematics.geographic_pose.is_initial());
    }

    #[test]
    fn late_poll_emits_once_and_realigns() {
        let clock = ManualClock::new();
        let mut publisher = SnapshotPublisher::new(&clock, Duration::from_millis(100));
        let buffer = TelemetryBuffer::new();

        // Three periods pass without a poll.
        clock.advance(Duration::from_millis(350));
        assert!(publisher.poll(&buffer).is_some());
        // The schedule realigned past "now"; nothing due immediately.
        assert!(publisher.poll(&buffer).is_none());
        clock.advance(Duration::from_millis(50));
        assert!(publisher.poll(&buffer).is_some());
    }

    #[test]
    fn snapshot_reflects_latest_buffer_state() {
        let clock = ManualClock::new();
        let mut publisher = SnapshotPublisher::new(&clock, Duration::from_millis(100));
        let mut buffer = TelemetryBuffer::new();

        buffer.update_gear(Timestamp::from_millis(42), GearReport::Drive7);
        clock.advance(Duration::from_millis(100));
        let (_, status) = publisher.poll(&buffer).unwrap();
        assert_eq!(status.gear.value, Gear::Drive);
        assert_eq!(status.gear.stamp.as_millis(), 42);
        assert_eq!(status.stamp.as_millis(), 100);
    }

    #[test]
    fn zero_period_falls_back_to_default() {
        let clock = ManualClock::new();
        let publisher = SnapshotPublisher::new(&clock, Duration::zero());
        assert_eq!(publisher.period(), DEFAULT_PERIOD);
    }

    #[test]
    fn system_clock_is_monotone_enough_for_stamping() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
        assert!(!a.is_zero());
    }
}
