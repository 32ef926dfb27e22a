pub mod capacity;
pub mod current;
pub mod percent;
pub mod power;
pub mod temperature;
pub mod voltage;
