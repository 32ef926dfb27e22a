pub mod metrics;
pub mod record;

pub use self::{
    metrics::{ChargingStatus, DerivedMetrics},
    record::{BatteryRecord, ParseError},
};
