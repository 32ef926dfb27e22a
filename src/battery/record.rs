//! Typed view of the raw smart-battery registry entry.

use std::io::Cursor;

use plist::{Dictionary, Value};

use crate::quantity::{
    capacity::MilliampHours, current::Milliamps, temperature::CentiCelsius, voltage::Millivolts,
};

const UNKNOWN: &str = "Unknown";

/// The registry omits the key on some models, but the vendor never changes.
const DEFAULT_MANUFACTURER: &str = "Apple Inc.";

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no battery device found in the registry dump")]
    NoDeviceFound,

    #[error("malformed registry dump: {0}")]
    MalformedDocument(String),
}

impl From<plist::Error> for ParseError {
    fn from(error: plist::Error) -> Self {
        Self::MalformedDocument(error.to_string())
    }
}

/// One fully populated snapshot of the battery hardware state.
///
/// Every field has a documented default, so a missing registry key never
/// produces a partially built record.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatteryRecord {
    pub serial: String,
    pub device_name: String,
    pub manufacturer: String,

    pub design_capacity: MilliampHours,
    pub raw_max_capacity: MilliampHours,
    pub nominal_charge_capacity: MilliampHours,

    /// Charge percentage as the firmware reports it, relative to its own baseline.
    pub current_capacity_percent: i64,
    pub raw_current_capacity: MilliampHours,

    pub voltage: Millivolts,
    pub amperage: Milliamps,

    pub temperature: CentiCelsius,
    pub cycle_count: i64,

    /// The firmware reports `65535` while it is still estimating.
    pub time_remaining_minutes: i64,
    pub avg_time_to_empty_minutes: i64,
    pub instant_time_to_empty_minutes: i64,

    pub is_external_connected: bool,
    pub is_charging: bool,
    pub is_fully_charged: bool,

    /// Wattage of the first adapter in the adapter details, zero without one.
    pub adapter_watts: i64,
}

impl Default for BatteryRecord {
    fn default() -> Self {
        Self {
            serial: UNKNOWN.to_string(),
            device_name: UNKNOWN.to_string(),
            manufacturer: DEFAULT_MANUFACTURER.to_string(),
            design_capacity: MilliampHours::ZERO,
            raw_max_capacity: MilliampHours::ZERO,
            nominal_charge_capacity: MilliampHours::ZERO,
            current_capacity_percent: 0,
            raw_current_capacity: MilliampHours::ZERO,
            voltage: Millivolts(0),
            amperage: Milliamps(0),
            temperature: CentiCelsius(0),
            cycle_count: 0,
            time_remaining_minutes: 0,
            avg_time_to_empty_minutes: 0,
            instant_time_to_empty_minutes: 0,
            is_external_connected: false,
            is_charging: false,
            is_fully_charged: false,
            adapter_watts: 0,
        }
    }
}

impl BatteryRecord {
    /// Parse the raw property-list dump of the smart-battery service.
    ///
    /// The registry query returns an array with one entry per matching device,
    /// or a bare dictionary. The first entry wins.
    pub fn parse(raw: &[u8]) -> Result<Self, ParseError> {
        let root = Value::from_reader(Cursor::new(raw))?;
        let device = match &root {
            Value::Array(devices) => devices.first().ok_or(ParseError::NoDeviceFound)?,
            value => value,
        };
        let properties = device.as_dictionary().ok_or_else(|| {
            ParseError::MalformedDocument("the registry entry is not a dictionary".to_string())
        })?;
        if properties.is_empty() {
            return Err(ParseError::NoDeviceFound);
        }
        Ok(Self::from_properties(properties))
    }

    fn from_properties(properties: &Dictionary) -> Self {
        Self {
            serial: string_or(properties, "Serial", UNKNOWN),
            device_name: string_or(properties, "DeviceName", UNKNOWN),
            manufacturer: string_or(properties, "Manufacturer", DEFAULT_MANUFACTURER),
            design_capacity: MilliampHours(integer_or_zero(properties, "DesignCapacity")),
            raw_max_capacity: MilliampHours(integer_or_zero(properties, "AppleRawMaxCapacity")),
            nominal_charge_capacity: MilliampHours(integer_or_zero(
                properties,
                "NominalChargeCapacity",
            )),
            current_capacity_percent: integer_or_zero(properties, "CurrentCapacity"),
            raw_current_capacity: MilliampHours(integer_or_zero(
                properties,
                "AppleRawCurrentCapacity",
            )),
            voltage: Millivolts(integer_or_zero(properties, "Voltage")),
            amperage: Milliamps(integer_or_zero(properties, "Amperage")),
            temperature: CentiCelsius(integer_or_zero(properties, "Temperature")),
            cycle_count: integer_or_zero(properties, "CycleCount"),
            time_remaining_minutes: integer_or_zero(properties, "TimeRemaining"),
            avg_time_to_empty_minutes: integer_or_zero(properties, "AvgTimeToEmpty"),
            instant_time_to_empty_minutes: integer_or_zero(properties, "InstantTimeToEmpty"),
            is_external_connected: boolean_or_false(properties, "ExternalConnected"),
            is_charging: boolean_or_false(properties, "IsCharging"),
            is_fully_charged: boolean_or_false(properties, "FullyCharged"),
            adapter_watts: adapter_watts(properties),
        }
    }
}

fn string_or(properties: &Dictionary, key: &str, default: &str) -> String {
    properties.get(key).and_then(Value::as_string).unwrap_or(default).to_string()
}

fn integer_or_zero(properties: &Dictionary, key: &str) -> i64 {
    properties.get(key).and_then(Value::as_signed_integer).unwrap_or(0)
}

fn boolean_or_false(properties: &Dictionary, key: &str) -> bool {
    properties.get(key).and_then(Value::as_boolean).unwrap_or(false)
}

/// Wattage of the first well-formed entry in the adapter details.
///
/// The list may be absent, empty, or start with placeholder entries
/// that are not dictionaries at all.
fn adapter_watts(properties: &Dictionary) -> i64 {
    properties
        .get("AppleRawAdapterDetails")
        .and_then(Value::as_array)
        .and_then(|details| details.iter().find_map(Value::as_dictionary))
        .map_or(0, |adapter| integer_or_zero(adapter, "Watts"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_DUMP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<array>
    <dict>
        <key>Serial</key><string>F8Y3303SQ05M</string>
        <key>DeviceName</key><string>bq40z651</string>
        <key>Manufacturer</key><string>SMP</string>
        <key>DesignCapacity</key><integer>3000</integer>
        <key>AppleRawMaxCapacity</key><integer>2700</integer>
        <key>NominalChargeCapacity</key><integer>2750</integer>
        <key>CurrentCapacity</key><integer>76</integer>
        <key>AppleRawCurrentCapacity</key><integer>2000</integer>
        <key>Voltage</key><integer>12000</integer>
        <key>Amperage</key><integer>-1500</integer>
        <key>Temperature</key><integer>3650</integer>
        <key>CycleCount</key><integer>312</integer>
        <key>TimeRemaining</key><integer>143</integer>
        <key>AvgTimeToEmpty</key><integer>145</integer>
        <key>InstantTimeToEmpty</key><integer>139</integer>
        <key>ExternalConnected</key><true/>
        <key>IsCharging</key><false/>
        <key>FullyCharged</key><false/>
        <key>AppleRawAdapterDetails</key>
        <array>
            <dict>
                <key>Watts</key><integer>96</integer>
            </dict>
        </array>
    </dict>
</array>
</plist>"#;

    #[test]
    fn test_parse_full_dump() -> Result<(), ParseError> {
        let record = BatteryRecord::parse(FULL_DUMP.as_bytes())?;
        assert_eq!(
            record,
            BatteryRecord {
                serial: "F8Y3303SQ05M".to_string(),
                device_name: "bq40z651".to_string(),
                manufacturer: "SMP".to_string(),
                design_capacity: MilliampHours(3000),
                raw_max_capacity: MilliampHours(2700),
                nominal_charge_capacity: MilliampHours(2750),
                current_capacity_percent: 76,
                raw_current_capacity: MilliampHours(2000),
                voltage: Millivolts(12000),
                amperage: Milliamps(-1500),
                temperature: CentiCelsius(3650),
                cycle_count: 312,
                time_remaining_minutes: 143,
                avg_time_to_empty_minutes: 145,
                instant_time_to_empty_minutes: 139,
                is_external_connected: true,
                is_charging: false,
                is_fully_charged: false,
                adapter_watts: 96,
            },
        );
        Ok(())
    }

    #[test]
    fn test_parse_substitutes_defaults() -> Result<(), ParseError> {
        const DUMP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>CycleCount</key><integer>7</integer>
</dict>
</plist>"#;
        let record = BatteryRecord::parse(DUMP.as_bytes())?;
        assert_eq!(record, BatteryRecord { cycle_count: 7, ..BatteryRecord::default() });
        Ok(())
    }

    #[test]
    fn test_parse_empty_array() {
        const DUMP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<array/>
</plist>"#;
        let error = BatteryRecord::parse(DUMP.as_bytes()).unwrap_err();
        assert!(matches!(error, ParseError::NoDeviceFound));
    }

    #[test]
    fn test_parse_empty_dictionary() {
        const DUMP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict/>
</plist>"#;
        let error = BatteryRecord::parse(DUMP.as_bytes()).unwrap_err();
        assert!(matches!(error, ParseError::NoDeviceFound));
    }

    #[test]
    fn test_parse_garbage() {
        let error = BatteryRecord::parse(b"certainly not a property list").unwrap_err();
        assert!(matches!(error, ParseError::MalformedDocument(_)));
    }

    #[test]
    fn test_parse_non_dictionary_entry() {
        const DUMP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<array>
    <string>AppleSmartBattery</string>
</array>
</plist>"#;
        let error = BatteryRecord::parse(DUMP.as_bytes()).unwrap_err();
        assert!(matches!(error, ParseError::MalformedDocument(_)));
    }

    #[test]
    fn test_adapter_watts_skips_malformed_entries() -> Result<(), ParseError> {
        const DUMP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>Serial</key><string>F8Y3303SQ05M</string>
    <key>AppleRawAdapterDetails</key>
    <array>
        <integer>0</integer>
        <dict>
            <key>Watts</key><integer>67</integer>
        </dict>
        <dict>
            <key>Watts</key><integer>140</integer>
        </dict>
    </array>
</dict>
</plist>"#;
        let record = BatteryRecord::parse(DUMP.as_bytes())?;
        assert_eq!(record.adapter_watts, 67);
        Ok(())
    }

    #[test]
    fn test_adapter_watts_absent() -> Result<(), ParseError> {
        const DUMP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>AppleRawAdapterDetails</key>
    <array/>
    <key>Serial</key><string>F8Y3303SQ05M</string>
</dict>
</plist>"#;
        let record = BatteryRecord::parse(DUMP.as_bytes())?;
        assert_eq!(record.adapter_watts, 0);
        Ok(())
    }
}
