use std::fmt::{Display, Formatter};

/// Battery current flow. The sign encodes the direction: negative while discharging.
#[must_use]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    derive_more::From,
    derive_more::Neg,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Milliamps(pub i64);

impl Display for Milliamps {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mA", self.0)
    }
}
