use std::fmt::{Display, Formatter};

/// Raw cell temperature as the registry reports it: hundredths of a degree Celsius.
///
/// This type is the single place that owns the centi-Celsius convention,
/// so that the conversion is never duplicated with a stray `/ 100`.
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
pub struct CentiCelsius(pub i64);

impl CentiCelsius {
    #[expect(clippy::cast_precision_loss)]
    pub fn to_celsius(self) -> Celsius {
        Celsius(self.0 as f64 / 100.0)
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, derive_more::From, serde::Serialize)]
pub struct Celsius(pub f64);

impl Celsius {
    pub fn round_to_tenths(self) -> Self {
        Self((self.0 * 10.0).round() / 10.0)
    }
}

impl Display for Celsius {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} °C", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_to_celsius() {
        assert_abs_diff_eq!(CentiCelsius(3650).to_celsius().0, 36.5);
    }

    #[test]
    fn test_round_to_tenths() {
        assert_abs_diff_eq!(Celsius(36.456).round_to_tenths().0, 36.5);
    }
}
