//! Report page payload: typed columns plus the engineering report body.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::{
    battery::{BatteryRecord, ChargingStatus, DerivedMetrics},
    prelude::*,
    quantity::capacity::MilliampHours,
};

#[derive(Serialize)]
pub struct CreatePageRequest<'a> {
    parent: Parent<'a>,
    properties: BTreeMap<&'static str, PropertyValue>,
    children: Vec<Block>,
}

impl<'a> CreatePageRequest<'a> {
    pub fn try_new(
        database_id: &'a str,
        record: &BatteryRecord,
        metrics: &DerivedMetrics,
    ) -> Result<Self> {
        Ok(Self {
            parent: Parent { database_id },
            properties: build_properties(record, metrics),
            children: build_children(record, metrics)?,
        })
    }
}

#[derive(Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

#[derive(Serialize)]
#[serde(untagged)]
enum PropertyValue {
    Title { title: Vec<RichText> },
    Number { number: f64 },
    Select { select: SelectValue },
}

impl PropertyValue {
    fn title(content: String) -> Self {
        Self::Title { title: vec![RichText::new(content)] }
    }

    #[expect(clippy::cast_precision_loss)]
    const fn integer(value: i64) -> Self {
        Self::Number { number: value as f64 }
    }

    const fn select(name: &'static str) -> Self {
        Self::Select { select: SelectValue { name } }
    }
}

#[derive(Serialize)]
struct SelectValue {
    name: &'static str,
}

#[derive(Serialize)]
struct RichText {
    #[serde(rename = "type")]
    kind: &'static str,

    text: Text,
}

impl RichText {
    fn new(content: String) -> Self {
        Self { kind: "text", text: Text { content } }
    }
}

#[derive(Serialize)]
struct Text {
    content: String,
}

fn build_properties(
    record: &BatteryRecord,
    metrics: &DerivedMetrics,
) -> BTreeMap<&'static str, PropertyValue> {
    let mut properties = BTreeMap::new();
    properties
        .insert("Date", PropertyValue::title(metrics.recorded_at.format("%Y-%m-%d %H:%M").to_string()));
    properties
        .insert("Real Health %", PropertyValue::Number { number: metrics.real_health.as_ratio() });
    properties.insert("Design Capacity (mAh)", PropertyValue::integer(record.design_capacity.0));
    properties
        .insert("Current Max Capacity (mAh)", PropertyValue::integer(record.raw_max_capacity.0));
    properties.insert("Cycle Count", PropertyValue::integer(record.cycle_count));
    properties.insert("Temperature (C)", PropertyValue::Number { number: metrics.temperature.0 });
    properties.insert("Voltage (V)", PropertyValue::Number { number: metrics.voltage.0 });
    properties.insert("Amperage (mA)", PropertyValue::integer(record.amperage.0));
    properties.insert("Watts", PropertyValue::Number { number: metrics.power_draw.0 });
    properties.insert("Time Remaining (Min)", PropertyValue::integer(record.time_remaining_minutes));
    properties.insert("Charging Status", PropertyValue::select(metrics.charging_status.label()));
    properties
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum Block {
    #[serde(rename = "heading_2")]
    Heading2 {
        object: &'static str,
        heading_2: RichTextBody,
    },

    #[serde(rename = "heading_3")]
    Heading3 {
        object: &'static str,
        heading_3: RichTextBody,
    },

    #[serde(rename = "bulleted_list_item")]
    BulletedListItem {
        object: &'static str,
        bulleted_list_item: RichTextBody,
    },

    #[serde(rename = "divider")]
    Divider {
        object: &'static str,
        divider: Empty,
    },

    #[serde(rename = "code")]
    Code {
        object: &'static str,
        code: CodeBody,
    },
}

impl Block {
    fn heading(text: &str) -> Self {
        Self::Heading2 { object: "block", heading_2: RichTextBody::new(text.to_string()) }
    }

    fn subheading(text: &str) -> Self {
        Self::Heading3 { object: "block", heading_3: RichTextBody::new(text.to_string()) }
    }

    fn bullet(text: String) -> Self {
        Self::BulletedListItem { object: "block", bulleted_list_item: RichTextBody::new(text) }
    }

    const fn divider() -> Self {
        Self::Divider { object: "block", divider: Empty {} }
    }

    fn code(content: String) -> Self {
        Self::Code {
            object: "block",
            code: CodeBody { rich_text: vec![RichText::new(content)], language: "json" },
        }
    }
}

#[derive(Serialize)]
struct RichTextBody {
    rich_text: Vec<RichText>,
}

impl RichTextBody {
    fn new(content: String) -> Self {
        Self { rich_text: vec![RichText::new(content)] }
    }
}

#[derive(Serialize)]
struct Empty {}

#[derive(Serialize)]
struct CodeBody {
    rich_text: Vec<RichText>,
    language: &'static str,
}

fn build_children(record: &BatteryRecord, metrics: &DerivedMetrics) -> Result<Vec<Block>> {
    let mut children = vec![
        Block::heading("Power Flow"),
        Block::bullet(format!("Voltage: {} ({})", metrics.voltage, record.voltage)),
        Block::bullet(format!("Amperage: {}", record.amperage)),
        Block::bullet(format!("Power draw: {}", metrics.power_draw)),
        Block::bullet(format!("Status: {}", metrics.charging_status)),
        Block::bullet(format!(
            "External power: {}",
            if record.is_external_connected { "connected" } else { "disconnected" },
        )),
        Block::heading("Health Diagnostics"),
        Block::bullet(format!("Real health: {}", metrics.real_health)),
        Block::bullet(format!("Wear level: {}", metrics.wear_level)),
        Block::bullet(format!("Cycle count: {}", record.cycle_count)),
        Block::bullet(format!("Temperature: {}", metrics.temperature)),
        Block::heading("Capacity Analysis"),
        Block::bullet(format!("Design capacity: {}", record.design_capacity)),
        Block::bullet(format!("Current max capacity: {}", record.raw_max_capacity)),
        Block::bullet(format!("Raw current charge: {}", record.raw_current_capacity)),
        Block::bullet(format!("Real percentage: {}", metrics.real_percentage)),
        Block::bullet(format!("Time remaining: {} min", record.time_remaining_minutes)),
        Block::heading("Device Information"),
        Block::bullet(format!("Serial: {}", record.serial)),
        Block::bullet(format!("Device name: {}", record.device_name)),
        Block::bullet(format!("Manufacturer: {}", record.manufacturer)),
        Block::bullet(format!("Recorded at: {}", metrics.recorded_at.to_rfc3339())),
        Block::divider(),
        Block::subheading("Raw Metrics (JSON)"),
    ];
    let snapshot = RawMetricsSnapshot::new(record, metrics);
    children.push(Block::code(
        serde_json::to_string_pretty(&snapshot).context("failed to serialize the raw metrics")?,
    ));
    Ok(children)
}

/// Key metrics duplicated as machine-readable JSON at the bottom of the page.
#[derive(Serialize)]
struct RawMetricsSnapshot<'a> {
    serial: &'a str,
    cycle_count: i64,
    real_health_pct: f64,
    design_capacity_mah: MilliampHours,
    current_max_capacity_mah: MilliampHours,
    voltage_mv: i64,
    amperage_ma: i64,
    temperature_celsius: f64,
    power_watts: f64,
    charging_status: ChargingStatus,
    timestamp: DateTime<Local>,
}

impl<'a> RawMetricsSnapshot<'a> {
    fn new(record: &'a BatteryRecord, metrics: &DerivedMetrics) -> Self {
        Self {
            serial: &record.serial,
            cycle_count: record.cycle_count,
            real_health_pct: metrics.real_health.0,
            design_capacity_mah: record.design_capacity,
            current_max_capacity_mah: record.raw_max_capacity,
            voltage_mv: record.voltage.0,
            amperage_ma: record.amperage.0,
            temperature_celsius: metrics.temperature.0,
            power_watts: metrics.power_draw.0,
            charging_status: metrics.charging_status,
            timestamp: metrics.recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::{
        prelude::*,
        quantity::{current::Milliamps, temperature::CentiCelsius, voltage::Millivolts},
    };

    fn fixtures() -> (BatteryRecord, DerivedMetrics) {
        let record = BatteryRecord {
            serial: "F8Y3303SQ05M".to_string(),
            design_capacity: MilliampHours(3000),
            raw_max_capacity: MilliampHours(2700),
            raw_current_capacity: MilliampHours(2000),
            voltage: Millivolts(12000),
            amperage: Milliamps(-1500),
            temperature: CentiCelsius(3650),
            cycle_count: 312,
            is_external_connected: true,
            ..BatteryRecord::default()
        };
        let now = NaiveDate::from_ymd_opt(2026, 2, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
            .and_local_timezone(Local)
            .unwrap();
        let metrics = DerivedMetrics::derive(&record, now);
        (record, metrics)
    }

    #[test]
    fn test_build_properties() {
        let (record, metrics) = fixtures();
        let properties = serde_json::to_value(build_properties(&record, &metrics)).unwrap();
        assert_eq!(
            properties["Date"],
            json!({"title": [{"type": "text", "text": {"content": "2026-02-01 09:30"}}]}),
        );
        assert_eq!(properties["Real Health %"], json!({"number": 0.9}));
        assert_eq!(properties["Design Capacity (mAh)"], json!({"number": 3000.0}));
        assert_eq!(properties["Watts"], json!({"number": 18.0}));
        assert_eq!(properties["Charging Status"], json!({"select": {"name": "Not Charging"}}));
    }

    #[test]
    fn test_build_children() -> Result {
        let (record, metrics) = fixtures();
        let children = serde_json::to_value(build_children(&record, &metrics)?)?;
        assert_eq!(
            children[0],
            json!({
                "object": "block",
                "type": "heading_2",
                "heading_2": {"rich_text": [{"type": "text", "text": {"content": "Power Flow"}}]},
            }),
        );
        assert_eq!(
            children[1]["bulleted_list_item"]["rich_text"][0]["text"]["content"],
            json!("Voltage: 12.00 V (12000 mV)"),
        );
        Ok(())
    }

    #[test]
    fn test_raw_metrics_snapshot() {
        let (record, metrics) = fixtures();
        let snapshot = serde_json::to_value(RawMetricsSnapshot::new(&record, &metrics)).unwrap();
        assert_eq!(snapshot["real_health_pct"], json!(90.0));
        assert_eq!(snapshot["charging_status"], json!("Not Charging"));
        assert_eq!(snapshot["voltage_mv"], json!(12000));
    }
}

