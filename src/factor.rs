//! Validated scale factor.

use core::fmt;
use core::str::FromStr;

use crate::error::ScaleError;

/// A scale factor in the interval (0.0, 100.0].
///
/// Output dimensions are computed in single precision, matching the
/// `f32` this type stores.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ScaleFactor(f32);

impl ScaleFactor {
    /// Largest accepted factor.
    pub const MAX: f32 = 100.0;

    /// The identity factor.
    pub const ONE: ScaleFactor = ScaleFactor(1.0);

    /// Validate `factor`. NaN and infinities are rejected along with
    /// anything outside (0.0, 100.0].
    pub fn new(factor: f32) -> Result<Self, ScaleError> {
        if factor.is_nan() || factor <= 0.0 || factor > Self::MAX {
            return Err(ScaleError::InvalidScaleFactor(alloc::format!(
                "{factor} is outside (0.0, {}]",
                Self::MAX
            )));
        }
        Ok(Self(factor))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl FromStr for ScaleFactor {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f32 = trimmed.parse().map_err(|_| {
            ScaleError::InvalidScaleFactor(alloc::format!("`{trimmed}` is not a number"))
        })?;
        Self::new(value)
    }
}

impl TryFrom<f32> for ScaleFactor {
    type Error = ScaleError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_strings() {
        for s in ["0", "101", "-3", "abc", "", "2x", "100.01", "NaN", "inf"] {
            let result = s.parse::<ScaleFactor>();
            assert!(
                matches!(result, Err(ScaleError::InvalidScaleFactor(_))),
                "{s:?} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn accepts_interval_values() {
        assert_eq!("100".parse::<ScaleFactor>().unwrap().get(), 100.0);
        assert_eq!("1".parse::<ScaleFactor>().unwrap(), ScaleFactor::ONE);
        assert_eq!(" 0.5\n".parse::<ScaleFactor>().unwrap().get(), 0.5);
        assert_eq!("2e0".parse::<ScaleFactor>().unwrap().get(), 2.0);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(ScaleFactor::new(f32::NAN).is_err());
        assert!(ScaleFactor::new(f32::INFINITY).is_err());
        assert!(ScaleFactor::new(f32::MIN_POSITIVE).is_ok());
        assert!(ScaleFactor::try_from(-0.0).is_err());
    }
}
