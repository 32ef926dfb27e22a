use std::fmt::{Display, Formatter};

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
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Millivolts(pub i64);

impl Millivolts {
    #[expect(clippy::cast_precision_loss)]
    pub fn to_volts(self) -> Volts {
        Volts(self.0 as f64 / 1000.0)
    }
}

impl Display for Millivolts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mV", self.0)
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, derive_more::From, serde::Serialize)]
pub struct Volts(pub f64);

impl Volts {
    pub fn round_to_hundredths(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}

impl Display for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} V", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_to_volts() {
        assert_abs_diff_eq!(Millivolts(12345).to_volts().0, 12.345);
    }

    #[test]
    fn test_round_to_hundredths() {
        assert_abs_diff_eq!(Volts(12.345).round_to_hundredths().0, 12.35);
    }
}
