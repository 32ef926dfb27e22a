use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::battery::{BatteryRecord, ChargingStatus, DerivedMetrics};

pub fn build_report_table(record: &BatteryRecord, metrics: &DerivedMetrics) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Metric", "Value"]);

    let mut row = |name: &str, value: Cell| {
        table.add_row(vec![Cell::new(name).add_attribute(Attribute::Bold), value]);
    };

    row("Serial", Cell::new(&record.serial));
    row("Device name", Cell::new(&record.device_name));
    row("Manufacturer", Cell::new(&record.manufacturer));
    row(
        "Status",
        Cell::new(metrics.charging_status).fg(match metrics.charging_status {
            ChargingStatus::Charging => Color::Green,
            ChargingStatus::Discharging => Color::DarkYellow,
            ChargingStatus::FullyCharged => Color::Blue,
            ChargingStatus::NotCharging => Color::Grey,
        }),
    );
    row(
        "Real health",
        Cell::new(metrics.real_health).set_alignment(CellAlignment::Right).fg(
            if metrics.real_health.0 >= 80.0 {
                Color::Green
            } else if metrics.real_health.0 >= 50.0 {
                Color::DarkYellow
            } else {
                Color::Red
            },
        ),
    );
    row("Wear level", Cell::new(metrics.wear_level).set_alignment(CellAlignment::Right));
    row("Cycle count", Cell::new(record.cycle_count).set_alignment(CellAlignment::Right));
    row(
        "Temperature",
        Cell::new(metrics.temperature).set_alignment(CellAlignment::Right).fg(
            if metrics.temperature.0 >= 40.0 { Color::Red } else { Color::Reset },
        ),
    );
    row("Voltage", Cell::new(metrics.voltage).set_alignment(CellAlignment::Right));
    row("Amperage", Cell::new(record.amperage).set_alignment(CellAlignment::Right));
    row("Power draw", Cell::new(metrics.power_draw).set_alignment(CellAlignment::Right));
    row("Real percentage", Cell::new(metrics.real_percentage).set_alignment(CellAlignment::Right));
    row(
        "Firmware percentage",
        Cell::new(format!("{} %", record.current_capacity_percent))
            .set_alignment(CellAlignment::Right),
    );
    row("Design capacity", Cell::new(record.design_capacity).set_alignment(CellAlignment::Right));
    row(
        "Current max capacity",
        Cell::new(record.raw_max_capacity).set_alignment(CellAlignment::Right),
    );
    row(
        "Raw current charge",
        Cell::new(record.raw_current_capacity).set_alignment(CellAlignment::Right),
    );
    row(
        "Adapter",
        Cell::new(format!("{} W", record.adapter_watts)).set_alignment(CellAlignment::Right),
    );
    row(
        "Time remaining",
        Cell::new(format!("{} min", record.time_remaining_minutes))
            .set_alignment(CellAlignment::Right),
    );

    table
}
