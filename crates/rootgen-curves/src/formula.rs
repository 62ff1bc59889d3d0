//! Exact curve formulas.
//!
//! A Bezier curve of degree `d` with control points `P_i` is
//!
//! ```text
//! B(t) = sum_i C(d, i) (1 - t)^(d - i) t^i P_i
//! ```
//!
//! and its rational counterpart with weights `w_i` is the unreduced quotient
//!
//! ```text
//! R(t) = (sum_i C(d, i) (1 - t)^(d - i) t^i w_i P_i) / (sum_i C(d, i) (1 - t)^(d - i) t^i w_i)
//! ```
//!
//! Binomial weights are exact integer nodes. Numerators and the shared
//! denominator are kept apart so that conditions can clear the denominator
//! instead of differentiating a quotient.

use std::fmt;
use std::str::FromStr;

use rootgen_core::{ExprArena, ExprHandle};
use rootgen_integers::binomial;

use crate::error::CurveError;
use crate::symbols::ControlPointSymbols;

/// A coordinate axis of the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// Both axes, x first.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Returns the lowercase axis name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }

    const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            _ => Err(CurveError::UnknownAxis(s.to_string())),
        }
    }
}

/// Builds the Bernstein basis polynomial `C(degree, i) (1 - t)^(degree - i) t^i`.
///
/// Unit factors are left out, so `bernstein(d, 0, t)` is `(1 - t)^d` and
/// `bernstein(d, d, t)` is `t^d`. For `i > degree` the result is `0`.
pub fn bernstein(arena: &mut ExprArena, degree: u32, i: u32, t: ExprHandle) -> ExprHandle {
    if i > degree {
        return arena.int(0);
    }

    let one = arena.int(1);
    let one_minus_t = arena.sub(one, t);

    let factors = [
        arena.integer(binomial(degree, i)),
        arena.powi(one_minus_t, degree - i),
        arena.powi(t, i),
    ];
    let factors: Vec<_> = factors
        .into_iter()
        .filter(|&f| !arena.get(f).is_one())
        .collect();
    arena.mul(factors)
}

/// The symbolic formula of a curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveFormula {
    degree: u32,
    numerators: [ExprHandle; 2],
    denominator: Option<ExprHandle>,
}

impl CurveFormula {
    /// Builds the polynomial Bezier formula over `points`.
    ///
    /// The degree is `points.len() - 1`; an empty slice gives the constant
    /// zero curve of degree 0.
    pub fn bezier(arena: &mut ExprArena, t: ExprHandle, points: &[ControlPointSymbols]) -> Self {
        let degree = curve_degree(points);
        let numerators = Axis::ALL.map(|axis| {
            weighted_sum(arena, t, degree, points, |p| vec![coordinate(p, axis)])
        });

        Self {
            degree,
            numerators,
            denominator: None,
        }
    }

    /// Builds the rational Bezier formula over `points`, using their weights.
    pub fn rational_bezier(
        arena: &mut ExprArena,
        t: ExprHandle,
        points: &[ControlPointSymbols],
    ) -> Self {
        let degree = curve_degree(points);
        let numerators = Axis::ALL.map(|axis| {
            weighted_sum(arena, t, degree, points, |p| vec![coordinate(p, axis), p.w])
        });
        let denominator = weighted_sum(arena, t, degree, points, |p| vec![p.w]);

        Self {
            degree,
            numerators,
            denominator: Some(denominator),
        }
    }

    /// Returns the curve degree.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Returns true if the formula has a denominator.
    #[must_use]
    pub fn is_rational(&self) -> bool {
        self.denominator.is_some()
    }

    /// Returns the numerator of one coordinate.
    ///
    /// For polynomial curves this is the coordinate itself.
    #[must_use]
    pub fn numerator(&self, axis: Axis) -> ExprHandle {
        self.numerators[axis.index()]
    }

    /// Returns the shared denominator of a rational curve.
    #[must_use]
    pub fn denominator(&self) -> Option<ExprHandle> {
        self.denominator
    }

    /// Returns one coordinate as an expression in `t`.
    pub fn coordinate(&self, arena: &mut ExprArena, axis: Axis) -> ExprHandle {
        let num = self.numerator(axis);
        match self.denominator {
            Some(den) => arena.div(num, den),
            None => num,
        }
    }

    /// Returns the curve point `(x(t), y(t))`.
    pub fn point(&self, arena: &mut ExprArena) -> [ExprHandle; 2] {
        Axis::ALL.map(|axis| self.coordinate(arena, axis))
    }
}

fn curve_degree(points: &[ControlPointSymbols]) -> u32 {
    u32::try_from(points.len().saturating_sub(1)).unwrap_or(u32::MAX)
}

fn coordinate(point: &ControlPointSymbols, axis: Axis) -> ExprHandle {
    match axis {
        Axis::X => point.x,
        Axis::Y => point.y,
    }
}

/// `sum_i bernstein(degree, i, t) * prod(factors(P_i))`.
fn weighted_sum(
    arena: &mut ExprArena,
    t: ExprHandle,
    degree: u32,
    points: &[ControlPointSymbols],
    factors: impl Fn(&ControlPointSymbols) -> Vec<ExprHandle>,
) -> ExprHandle {
    let terms: Vec<_> = (0..)
        .zip(points)
        .map(|(i, p)| {
            let basis = bernstein(arena, degree, i, t);
            let mut product = vec![basis];
            product.extend(factors(p));
            arena.mul(product)
        })
        .collect();
    arena.add(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{control_point_symbols, free_variable};
    use rootgen_core::{ccode, substitute};
    use rootgen_poly::{expand, VarMap};

    fn expand_equal(arena: &ExprArena, a: ExprHandle, b: ExprHandle) -> bool {
        let vars = VarMap::for_exprs(arena, &[a, b]);
        let pa = expand(arena, a, &vars).unwrap();
        let pb = expand(arena, b, &vars).unwrap();
        pa == pb
    }

    #[test]
    fn test_bernstein_rendering() {
        let mut arena = ExprArena::new();
        let t = free_variable(&mut arena);

        let b0 = bernstein(&mut arena, 3, 0, t);
        let b1 = bernstein(&mut arena, 3, 1, t);
        let b3 = bernstein(&mut arena, 3, 3, t);
        assert_eq!(ccode(&arena, b0), "pow(1 - t, 3)");
        assert_eq!(ccode(&arena, b1), "3*pow(1 - t, 2)*t");
        assert_eq!(ccode(&arena, b3), "pow(t, 3)");

        let out_of_range = bernstein(&mut arena, 3, 4, t);
        assert!(arena.get(out_of_range).is_zero());
    }

    #[test]
    fn test_partition_of_unity() {
        for degree in 1..=8 {
            let mut arena = ExprArena::new();
            let t = free_variable(&mut arena);
            let terms: Vec<_> = (0..=degree).map(|i| bernstein(&mut arena, degree, i, t)).collect();
            let sum = arena.add(terms);

            let vars = VarMap::for_exprs(&arena, &[sum]);
            let poly = expand(&arena, sum, &vars).unwrap();
            assert_eq!(poly.as_constant().map(|c| c.to_string()), Some("1".to_string()));
        }
    }

    #[test]
    fn test_boundary_interpolation() {
        for degree in 2..11 {
            let mut arena = ExprArena::new();
            let t = free_variable(&mut arena);
            let points = control_point_symbols(&mut arena, degree + 1);
            let formula = CurveFormula::bezier(&mut arena, t, &points);
            assert_eq!(formula.degree() as usize, degree);

            let zero = arena.int(0);
            let one = arena.int(1);
            for axis in Axis::ALL {
                let c = formula.numerator(axis);
                let start = substitute(&mut arena, c, t, zero).unwrap();
                let end = substitute(&mut arena, c, t, one).unwrap();
                assert!(expand_equal(&arena, start, coordinate(&points[0], axis)));
                assert!(expand_equal(&arena, end, coordinate(&points[degree], axis)));
            }
        }
    }

    #[test]
    fn test_quadratic_formula() {
        let mut arena = ExprArena::new();
        let t = free_variable(&mut arena);
        let points = control_point_symbols(&mut arena, 3);
        let formula = CurveFormula::bezier(&mut arena, t, &points);

        assert!(!formula.is_rational());
        assert_eq!(
            ccode(&arena, formula.numerator(Axis::X)),
            "pow(1 - t, 2)*cx0 + 2*(1 - t)*t*cx1 + pow(t, 2)*cx2"
        );
    }

    #[test]
    fn test_rational_formula_shape() {
        let mut arena = ExprArena::new();
        let t = free_variable(&mut arena);
        let points = control_point_symbols(&mut arena, 3);
        let formula = CurveFormula::rational_bezier(&mut arena, t, &points);

        let den = formula.denominator().unwrap();
        assert_eq!(
            ccode(&arena, den),
            "pow(1 - t, 2)*w0 + 2*(1 - t)*t*w1 + pow(t, 2)*w2"
        );

        let [x, _] = formula.point(&mut arena);
        assert_eq!(arena.get(x), &rootgen_core::ExprNode::Div {
            num: formula.numerator(Axis::X),
            den,
        });
    }

    #[test]
    fn test_unit_weights_reduce_to_bezier() {
        for degree in 2..5 {
            let mut arena = ExprArena::new();
            let t = free_variable(&mut arena);
            let points = control_point_symbols(&mut arena, degree + 1);
            let plain = CurveFormula::bezier(&mut arena, t, &points);
            let rational = CurveFormula::rational_bezier(&mut arena, t, &points);

            let one = arena.int(1);
            let set_weights = |arena: &mut ExprArena, e: ExprHandle| {
                points
                    .iter()
                    .try_fold(e, |acc, p| substitute(arena, acc, p.w, one))
                    .unwrap()
            };

            let den = set_weights(&mut arena, rational.denominator().unwrap());
            assert!(expand_equal(&arena, den, one));
            for axis in Axis::ALL {
                let num = set_weights(&mut arena, rational.numerator(axis));
                assert!(expand_equal(&arena, num, plain.numerator(axis)));
            }
        }
    }

    #[test]
    fn test_axis_parse() {
        assert_eq!("x".parse(), Ok(Axis::X));
        assert_eq!("Y".parse(), Ok(Axis::Y));
        assert!("z".parse::<Axis>().is_err());
    }
}
