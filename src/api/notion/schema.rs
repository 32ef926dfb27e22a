//! Database schema definition: the report columns.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::battery::ChargingStatus;

#[derive(Serialize)]
pub struct UpdateDatabaseRequest {
    properties: BTreeMap<&'static str, PropertySchema>,
}

impl UpdateDatabaseRequest {
    pub fn new() -> Self {
        let mut properties = BTreeMap::new();
        properties.insert("Real Health %", PropertySchema::number("percent"));
        properties.insert("Design Capacity (mAh)", PropertySchema::number("number"));
        properties.insert("Current Max Capacity (mAh)", PropertySchema::number("number"));
        properties.insert("Cycle Count", PropertySchema::number("number"));
        properties.insert("Temperature (C)", PropertySchema::number("number"));
        properties.insert("Voltage (V)", PropertySchema::number("number"));
        properties.insert("Amperage (mA)", PropertySchema::number("number"));
        properties.insert("Watts", PropertySchema::number("number"));
        properties.insert("Time Remaining (Min)", PropertySchema::number("number"));
        properties.insert(
            "Charging Status",
            PropertySchema::Select {
                select: SelectOptions {
                    options: ChargingStatus::ALL
                        .into_iter()
                        .map(|status| SelectOption {
                            name: status.label(),
                            color: status_color(status),
                        })
                        .collect(),
                },
            },
        );
        Self { properties }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum PropertySchema {
    Number { number: NumberFormat },
    Select { select: SelectOptions },
}

impl PropertySchema {
    const fn number(format: &'static str) -> Self {
        Self::Number { number: NumberFormat { format } }
    }
}

#[derive(Serialize)]
struct NumberFormat {
    format: &'static str,
}

#[derive(Serialize)]
struct SelectOptions {
    options: Vec<SelectOption>,
}

#[derive(Serialize)]
struct SelectOption {
    name: &'static str,
    color: &'static str,
}

const fn status_color(status: ChargingStatus) -> &'static str {
    match status {
        ChargingStatus::Charging => "green",
        ChargingStatus::Discharging => "orange",
        ChargingStatus::FullyCharged => "blue",
        ChargingStatus::NotCharging => "gray",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serialize_schema() {
        let request = serde_json::to_value(UpdateDatabaseRequest::new()).unwrap();
        assert_eq!(request["properties"]["Real Health %"], json!({"number": {"format": "percent"}}));
        assert_eq!(request["properties"]["Cycle Count"], json!({"number": {"format": "number"}}));
        assert_eq!(
            request["properties"]["Charging Status"]["select"]["options"][0],
            json!({"name": "Charging", "color": "green"}),
        );
    }
}
