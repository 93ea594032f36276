//! Categorical status families.
//!
//! Each family is a pair of closed enums: the raw *report* domain as the
//! vehicle interface delivers it, and the externally-facing domain that
//! snapshots expose. The two value spaces are deliberately incompatible;
//! `vehicle-status` owns the translation between them.
//!
//! The externally-facing enums all default to their `Unknown` variant, which
//! is the defined value for fields that have never received a report.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw gear report from the vehicle interface.
///
/// Numbered ratios (`Drive2` through `Drive18`, `Reverse2`, `Low2`) are
/// distinct report values even though the external domain collapses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GearReport {
    /// No gear reported.
    #[default]
    None,
    /// Neutral.
    Neutral,
    /// Drive (base ratio).
    Drive,
    /// Drive, ratio 2.
    Drive2,
    /// Drive, ratio 3.
    Drive3,
    /// Drive, ratio 4.
    Drive4,
    /// Drive, ratio 5.
    Drive5,
    /// Drive, ratio 6.
    Drive6,
    /// Drive, ratio 7.
    Drive7,
    /// Drive, ratio 8.
    Drive8,
    /// Drive, ratio 9.
    Drive9,
    /// Drive, ratio 10.
    Drive10,
    /// Drive, ratio 11.
    Drive11,
    /// Drive, ratio 12.
    Drive12,
    /// Drive, ratio 13.
    Drive13,
    /// Drive, ratio 14.
    Drive14,
    /// Drive, ratio 15.
    Drive15,
    /// Drive, ratio 16.
    Drive16,
    /// Drive, ratio 17.
    Drive17,
    /// Drive, ratio 18.
    Drive18,
    /// Reverse (base ratio).
    Reverse,
    /// Reverse, ratio 2.
    Reverse2,
    /// Park.
    Park,
    /// Low (base ratio).
    Low,
    /// Low, ratio 2.
    Low2,
}

/// Externally-facing gear status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Gear {
    /// Gear state is not known.
    #[default]
    Unknown,
    /// Neutral.
    Neutral,
    /// Any forward drive ratio.
    Drive,
    /// Any reverse ratio.
    Reverse,
    /// Park.
    Park,
    /// Any low ratio.
    Low,
}

impl Gear {
    /// Returns `true` for gears that move the vehicle forward.
    #[must_use]
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Drive | Self::Low)
    }
}

/// Raw turn indicator report from the vehicle interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnIndicatorReport {
    /// Indicators off.
    #[default]
    Disable,
    /// Left indicator on.
    EnableLeft,
    /// Right indicator on.
    EnableRight,
}

/// Externally-facing turn indicator status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnIndicator {
    /// Indicator state is not known.
    #[default]
    Unknown,
    /// Indicators off.
    Disable,
    /// Left indicator on.
    Left,
    /// Right indicator on.
    Right,
}

impl TurnIndicator {
    /// Returns `true` if either indicator is signalling.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Raw hazard light report from the vehicle interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HazardLightReport {
    /// Hazard lights off.
    #[default]
    Disable,
    /// Hazard lights on.
    Enable,
}

/// Externally-facing hazard light status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HazardLight {
    /// Hazard light state is not known.
    #[default]
    Unknown,
    /// Hazard lights off.
    Disable,
    /// Hazard lights on.
    Enable,
}

/// Raw door report from the vehicle interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DoorReport {
    /// Door state is not known.
    #[default]
    Unknown,
    /// Door fully open.
    Opened,
    /// Door fully closed.
    Closed,
    /// Door is opening.
    Opening,
    /// Door is closing.
    Closing,
    /// The vehicle has no such door.
    NotApplicable,
}

/// Externally-facing door status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DoorStatus {
    /// Door state is not known.
    #[default]
    Unknown,
    /// Door fully open.
    Opened,
    /// Door fully closed.
    Closed,
    /// Door is opening.
    Opening,
    /// Door is closing.
    Closing,
    /// No door status is available for this position.
    NotAvailable,
}

impl DoorStatus {
    /// Returns `true` while the door is in motion.
    #[must_use]
    pub const fn is_moving(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}
