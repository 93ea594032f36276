//! Categorical status normalization.
//!
//! Translates raw vehicle interface reports into the externally-facing
//! status domains. Each family is a total match over a closed enum, so
//! exhaustiveness is checked at compile time; any report value without an
//! explicit external counterpart falls through to the family's `Unknown`
//! variant. An unmapped report is therefore never an error.
//!
//! An explicit mapping may target the same value as the fallback:
//! `GearReport::None` maps to `Gear::Unknown`, indistinguishable from an
//! unmapped input on the output side.

use vehicle_types::{
    DoorReport, DoorStatus, Gear, GearReport, HazardLight, HazardLightReport, TurnIndicator,
    TurnIndicatorReport,
};

/// Translation from a raw report domain into its externally-facing domain.
///
/// Total and infallible: every report value produces an output, with the
/// family's `Unknown`-equivalent as the defined fallback.
///
/// # Example
///
/// ```
/// use vehicle_status::Normalize;
/// use vehicle_types::{Gear, GearReport};
///
/// assert_eq!(GearReport::Drive7.normalize(), Gear::Drive);
/// assert_eq!(GearReport::None.normalize(), Gear::Unknown);
/// ```
pub trait Normalize {
    /// The externally-facing status domain.
    type Status;

    /// Translates this report into the external domain.
    #[must_use]
    fn normalize(self) -> Self::Status;
}

impl Normalize for GearReport {
    type Status = Gear;

    fn normalize(self) -> Gear {
        match self {
            Self::Neutral => Gear::Neutral,
            Self::Drive
            | Self::Drive2
            | Self::Drive3
            | Self::Drive4
            | Self::Drive5
            | Self::Drive6
            | Self::Drive7
            | Self::Drive8
            | Self::Drive9
            | Self::Drive10
            | Self::Drive11
            | Self::Drive12
            | Self::Drive13
            | Self::Drive14
            | Self::Drive15
            | Self::Drive16
            | Self::Drive17
            | Self::Drive18 => Gear::Drive,
            Self::Reverse | Self::Reverse2 => Gear::Reverse,
            Self::Park => Gear::Park,
            Self::Low | Self::Low2 => Gear::Low,
            // No external counterpart.
            Self::None => Gear::Unknown,
        }
    }
}

impl Normalize for TurnIndicatorReport {
    type Status = TurnIndicator;

    fn normalize(self) -> TurnIndicator {
        match self {
            Self::Disable => TurnIndicator::Disable,
            Self::EnableLeft => TurnIndicator::Left,
            Self::EnableRight => TurnIndicator::Right,
        }
    }
}

impl Normalize for HazardLightReport {
    type Status = HazardLight;

    fn normalize(self) -> HazardLight {
        match self {
            Self::Disable => HazardLight::Disable,
            Self::Enable => HazardLight::Enable,
        }
    }
}

impl Normalize for DoorReport {
    type Status = DoorStatus;

    fn normalize(self) -> DoorStatus {
        match self {
            Self::Opened => DoorStatus::Opened,
            Self::Closed => DoorStatus::Closed,
            Self::Opening => DoorStatus::Opening,
            Self::Closing => DoorStatus::Closing,
            Self::NotApplicable => DoorStatus::NotAvailable,
            Self::Unknown => DoorStatus::Unknown,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn gear_numbered_ratios_collapse() {
        assert_eq!(GearReport::Drive.normalize(), Gear::Drive);
        assert_eq!(GearReport::Drive7.normalize(), Gear::Drive);
        assert_eq!(GearReport::Drive18.normalize(), Gear::Drive);
        assert_eq!(GearReport::Reverse2.normalize(), Gear::Reverse);
        assert_eq!(GearReport::Low2.normalize(), Gear::Low);
    }

    #[test]
    fn gear_direct_mappings() {
        assert_eq!(GearReport::Neutral.normalize(), Gear::Neutral);
        assert_eq!(GearReport::Park.normalize(), Gear::Park);
    }

    #[test]
    fn gear_none_falls_back_to_unknown() {
        // Explicitly mapped to the same value as the fallback.
        assert_eq!(GearReport::None.normalize(), Gear::Unknown);
    }

    #[test]
    fn turn_indicator_mappings() {
        assert_eq!(
            TurnIndicatorReport::Disable.normalize(),
            TurnIndicator::Disable
        );
        assert_eq!(
            TurnIndicatorReport::EnableLeft.normalize(),
            TurnIndicator::Left
        );
        assert_eq!(
            TurnIndicatorReport::EnableRight.normalize(),
            TurnIndicator::Right
        );
    }

    #[test]
    fn hazard_light_mappings() {
        assert_eq!(HazardLightReport::Disable.normalize(), HazardLight::Disable);
        assert_eq!(HazardLightReport::Enable.normalize(), HazardLight::Enable);
    }

    #[test]
    fn door_mappings() {
        assert_eq!(DoorReport::Opened.normalize(), DoorStatus::Opened);
        assert_eq!(DoorReport::Closed.normalize(), DoorStatus::Closed);
        assert_eq!(DoorReport::Opening.normalize(), DoorStatus::Opening);
        assert_eq!(DoorReport::Closing.normalize(), DoorStatus::Closing);
        assert_eq!(
            DoorReport::NotApplicable.normalize(),
            DoorStatus::NotAvailable
        );
        assert_eq!(DoorReport::Unknown.normalize(), DoorStatus::Unknown);
    }

    #[test]
    fn families_normalize_independently() {
        // Updating one family's output never depends on another family.
        let gear = GearReport::Park.normalize();
        let turn = TurnIndicatorReport::EnableLeft.normalize();
        assert_eq!(gear, Gear::Park);
        assert_eq!(turn, TurnIndicator::Left);
    }
}
