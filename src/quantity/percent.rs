use std::fmt::{Display, Formatter};

#[must_use]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::From,
    derive_more::Sub,
    serde::Serialize,
)]
pub struct Percent(pub f64);

impl Percent {
    pub const FULL: Self = Self(100.0);
    pub const ZERO: Self = Self(0.0);

    pub fn round_to_hundredths(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }

    /// The percentage as a plain 0–1 ratio, the way Notion's percent format expects it.
    #[must_use]
    pub fn as_ratio(self) -> f64 {
        self.0 / 100.0
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} %", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_round_to_hundredths() {
        assert_abs_diff_eq!(Percent(74.074_074).round_to_hundredths().0, 74.07);
    }

    #[test]
    fn test_as_ratio() {
        assert_abs_diff_eq!(Percent(90.0).as_ratio(), 0.9);
    }
}
