use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use crate::quantity::{current::Milliamps, voltage::Millivolts};

#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, derive_more::From, serde::Serialize)]
pub struct Watts(pub f64);

impl Watts {
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn round_to_hundredths(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}

impl Display for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} W", self.0)
    }
}

/// mV × mA = µW, hence the division by a million.
impl Mul<Milliamps> for Millivolts {
    type Output = Watts;

    #[expect(clippy::cast_precision_loss)]
    fn mul(self, rhs: Milliamps) -> Self::Output {
        Watts((self.0 * rhs.0) as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_power_from_flow() {
        assert_abs_diff_eq!((Millivolts(12000) * Milliamps(-1500)).0, -18.0);
    }

    #[test]
    fn test_abs() {
        assert_abs_diff_eq!(Watts(-18.0).abs().0, 18.0);
    }
}
