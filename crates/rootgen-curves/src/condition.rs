//! Algebraic conditions over a curve.
//!
//! A condition turns a curve formula into one polynomial expression in `t`
//! whose real roots are the parameters where the condition holds. Rational
//! denominators are cleared rather than carried, so the result is always a
//! polynomial:
//!
//! | condition            | polynomial curve      | rational curve            |
//! |----------------------|-----------------------|---------------------------|
//! | `MatchTangent`       | `x'*ty - y'*tx`       | `(Nx'D - NxD')*ty - (Ny'D - NyD')*tx` |
//! | `Extremum(axis)`     | `c'`                  | `Nc'D - NcD'`             |
//! | `AxisCrossing(axis)` | `c - value`           | `Nc - value*D`            |
//!
//! The quotient-rule numerator `N'D - ND'` loses its top term to
//! cancellation, so its degree is `2d - 2` rather than `2d - 1`.

use std::fmt;
use std::str::FromStr;

use log::trace;
use rootgen_core::{derivative, ExprArena, ExprHandle};

use crate::error::CurveError;
use crate::formula::{Axis, CurveFormula};
use crate::registry::CurveDescriptor;

/// Name of the tangent direction's x component.
pub const TANGENT_X: &str = "tx";
/// Name of the tangent direction's y component.
pub const TANGENT_Y: &str = "ty";
/// Name of the target coordinate of an axis crossing.
pub const CROSSING_VALUE: &str = "value";

/// A named condition on a planar curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    /// The curve tangent is parallel to the direction `(tx, ty)`.
    MatchTangent,
    /// One coordinate has a stationary point.
    Extremum(Axis),
    /// One coordinate equals `value`.
    AxisCrossing(Axis),
}

impl Condition {
    /// Every condition, in a fixed order.
    pub const ALL: [Condition; 5] = [
        Condition::MatchTangent,
        Condition::Extremum(Axis::X),
        Condition::Extremum(Axis::Y),
        Condition::AxisCrossing(Axis::X),
        Condition::AxisCrossing(Axis::Y),
    ];

    /// Returns the names of the free parameters this condition introduces.
    #[must_use]
    pub fn parameters(self) -> &'static [&'static str] {
        match self {
            Condition::MatchTangent => &[TANGENT_X, TANGENT_Y],
            Condition::Extremum(_) => &[],
            Condition::AxisCrossing(_) => &[CROSSING_VALUE],
        }
    }

    /// Returns the degree in `t` of the condition polynomial for a curve.
    #[must_use]
    pub fn expected_degree(self, descriptor: &CurveDescriptor) -> u32 {
        let d = descriptor.degree();
        match (self, descriptor.is_rational()) {
            (Condition::MatchTangent | Condition::Extremum(_), false) => d.saturating_sub(1),
            (Condition::MatchTangent | Condition::Extremum(_), true) => (2 * d).saturating_sub(2),
            (Condition::AxisCrossing(_), _) => d,
        }
    }

    /// Builds the condition polynomial for `formula`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Expr`] if `t` is not a symbol.
    pub fn build(
        self,
        arena: &mut ExprArena,
        formula: &CurveFormula,
        t: ExprHandle,
    ) -> Result<ExprHandle, CurveError> {
        let expr = match self {
            Condition::MatchTangent => {
                let tx = arena.symbol(TANGENT_X);
                let ty = arena.symbol(TANGENT_Y);
                let dx = tangent_numerator(arena, formula, Axis::X, t)?;
                let dy = tangent_numerator(arena, formula, Axis::Y, t)?;
                let left = arena.mul([dx, ty]);
                let right = arena.mul([dy, tx]);
                arena.sub(left, right)
            }
            Condition::Extremum(axis) => tangent_numerator(arena, formula, axis, t)?,
            Condition::AxisCrossing(axis) => {
                let value = arena.symbol(CROSSING_VALUE);
                let scaled = match formula.denominator() {
                    Some(den) => arena.mul([value, den]),
                    None => value,
                };
                arena.sub(formula.numerator(axis), scaled)
            }
        };

        trace!("{self} condition built for degree {} curve", formula.degree());
        Ok(expr)
    }
}

/// The numerator of `d/dt` of one coordinate.
///
/// Polynomial curves differentiate directly; rational ones use `N'D - ND'`
/// and drop the `D^2` denominator.
fn tangent_numerator(
    arena: &mut ExprArena,
    formula: &CurveFormula,
    axis: Axis,
    t: ExprHandle,
) -> Result<ExprHandle, CurveError> {
    let num = formula.numerator(axis);
    let dnum = derivative(arena, num, t)?;

    let Some(den) = formula.denominator() else {
        return Ok(dnum);
    };

    let dden = derivative(arena, den, t)?;
    let left = arena.mul([dnum, den]);
    let right = arena.mul([num, dden]);
    Ok(arena.sub(left, right))
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::MatchTangent => f.write_str("match-tangent"),
            Condition::Extremum(axis) => write!(f, "extremum-{axis}"),
            Condition::AxisCrossing(axis) => write!(f, "crossing-{axis}"),
        }
    }
}

impl FromStr for Condition {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.to_string() == s)
            .ok_or_else(|| CurveError::UnknownCondition(s.to_string()))
    }
}
