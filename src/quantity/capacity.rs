use std::fmt::{Display, Formatter};

use crate::quantity::percent::Percent;

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
    derive_more::Sub,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct MilliampHours(pub i64);

impl MilliampHours {
    pub const ZERO: Self = Self(0);

    /// Ratio of `self` to `total`, as a percentage.
    ///
    /// A non-positive denominator means the firmware did not report the total:
    /// the ratio degrades to zero instead of a division fault.
    #[expect(clippy::cast_precision_loss)]
    pub fn percent_of(self, total: Self) -> Percent {
        if total.0 > 0 { Percent(self.0 as f64 / total.0 as f64 * 100.0) } else { Percent::ZERO }
    }
}

impl Display for MilliampHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mAh", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_percent_of() {
        assert_abs_diff_eq!(MilliampHours(2700).percent_of(MilliampHours(3000)).0, 90.0);
    }

    #[test]
    fn test_percent_of_zero_total() {
        assert_abs_diff_eq!(MilliampHours(2700).percent_of(MilliampHours::ZERO).0, 0.0);
    }

    #[test]
    fn test_percent_of_negative_total() {
        assert_abs_diff_eq!(MilliampHours(2700).percent_of(MilliampHours(-1)).0, 0.0);
    }
}
