//! Engineering metrics derived from a raw [`BatteryRecord`].

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::{
    battery::record::BatteryRecord,
    quantity::{
        capacity::MilliampHours,
        percent::Percent,
        power::Watts,
        temperature::Celsius,
        voltage::Volts,
    },
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum ChargingStatus {
    Charging,
    Discharging,

    #[serde(rename = "Fully Charged")]
    FullyCharged,

    #[serde(rename = "Not Charging")]
    NotCharging,
}

impl ChargingStatus {
    pub const ALL: [Self; 4] =
        [Self::Charging, Self::Discharging, Self::FullyCharged, Self::NotCharging];

    /// Classify the status flags, first match wins.
    ///
    /// The firmware may raise `FullyCharged` and `IsCharging` together, so the
    /// full flag takes precedence. External power without active charging is a
    /// trickle-maintained battery, which is distinct from discharging on its own.
    const fn classify(record: &BatteryRecord) -> Self {
        if record.is_fully_charged {
            Self::FullyCharged
        } else if record.is_charging {
            Self::Charging
        } else if record.is_external_connected {
            Self::NotCharging
        } else {
            Self::Discharging
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Charging => "Charging",
            Self::Discharging => "Discharging",
            Self::FullyCharged => "Fully Charged",
            Self::NotCharging => "Not Charging",
        }
    }
}

impl Display for ChargingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The derived report values, rounded once at construction.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub voltage: Volts,

    /// Power magnitude only: the flow direction is already conveyed by the status.
    pub power_draw: Watts,

    pub temperature: Celsius,

    /// Capacity lost relative to the design capacity.
    pub wear_level: Percent,

    /// Capacity still available relative to the design capacity.
    pub real_health: Percent,

    /// Current charge relative to the *degraded* maximum, unlike the firmware
    /// percentage which uses its own baseline.
    pub real_percentage: Percent,

    pub charging_status: ChargingStatus,
    pub recorded_at: DateTime<Local>,
}

impl DerivedMetrics {
    /// Derive the report metrics from a raw record.
    ///
    /// Pure and deterministic: the clock is injected, and degenerate
    /// denominators degrade to zero instead of failing.
    pub fn derive(record: &BatteryRecord, now: DateTime<Local>) -> Self {
        // An unreported design capacity zeroes *both* health and wear:
        // "unavailable hardware field" must not read as a fully worn battery.
        let (real_health, wear_level) = if record.design_capacity > MilliampHours::ZERO {
            let health = record.raw_max_capacity.percent_of(record.design_capacity);
            (health.round_to_hundredths(), (Percent::FULL - health).round_to_hundredths())
        } else {
            (Percent::ZERO, Percent::ZERO)
        };
        Self {
            voltage: record.voltage.to_volts().round_to_hundredths(),
            power_draw: (record.voltage * record.amperage).abs().round_to_hundredths(),
            temperature: record.temperature.to_celsius().round_to_tenths(),
            wear_level,
            real_health,
            real_percentage: record
                .raw_current_capacity
                .percent_of(record.raw_max_capacity)
                .round_to_hundredths(),
            charging_status: ChargingStatus::classify(record),
            recorded_at: now,
        }
    }
}
