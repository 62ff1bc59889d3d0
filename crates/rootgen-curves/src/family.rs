//! Curve families.

use std::fmt;
use std::str::FromStr;

use crate::error::CurveError;

/// A family of parametric curves.
///
/// Families are ordered as listed here, which is also the order in which
/// the registry and batch generation visit them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurveFamily {
    /// Polynomial Bezier curves.
    Bezier,
    /// Rational Bezier curves with one weight per control point.
    RationalBezier,
}

impl CurveFamily {
    /// Every family, in registry order.
    pub const ALL: [CurveFamily; 2] = [CurveFamily::Bezier, CurveFamily::RationalBezier];

    /// Returns the stable name used in generated code and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CurveFamily::Bezier => "Bezier",
            CurveFamily::RationalBezier => "RationalBezier",
        }
    }

    /// Returns true if curves of this family carry weights.
    #[must_use]
    pub const fn is_rational(self) -> bool {
        matches!(self, CurveFamily::RationalBezier)
    }
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveFamily {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveFamily::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CurveError::UnknownFamily(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for family in CurveFamily::ALL {
            assert_eq!(family.to_string().parse::<CurveFamily>(), Ok(family));
        }
        assert_eq!("rationalbezier".parse(), Ok(CurveFamily::RationalBezier));
    }

    #[test]
    fn test_unknown_family() {
        assert_eq!(
            "BSpline".parse::<CurveFamily>(),
            Err(CurveError::UnknownFamily("BSpline".to_string()))
        );
    }

    #[test]
    fn test_rational_flag() {
        assert!(!CurveFamily::Bezier.is_rational());
        assert!(CurveFamily::RationalBezier.is_rational());
    }
}
