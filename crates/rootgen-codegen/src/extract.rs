//! Coefficient extraction.
//!
//! Expands a condition exactly and splits it by powers of the free
//! variable. The result is ordered from the highest power down to the
//! constant term, which is the order root finders take.

use log::debug;
use rootgen_core::{free_symbols, ExprArena, ExprError, ExprHandle};
use rootgen_poly::{expand, to_expr, SparsePoly, VarMap};

use crate::error::CodegenError;

/// The coefficients of a univariate polynomial, highest power first.
///
/// Entry `k` multiplies `t^(degree - k)`; the list holds exactly
/// `degree + 1` entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoefficientList {
    coefficients: Vec<ExprHandle>,
}

impl CoefficientList {
    /// Returns the polynomial degree.
    #[must_use]
    pub fn degree(&self) -> u32 {
        u32::try_from(self.coefficients.len() - 1).unwrap_or(u32::MAX)
    }

    /// Returns the number of coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always false; a list has at least the constant term.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Returns the coefficients, highest power first.
    #[must_use]
    pub fn as_slice(&self) -> &[ExprHandle] {
        &self.coefficients
    }

    /// Iterates over the coefficients, highest power first.
    pub fn iter(&self) -> impl Iterator<Item = ExprHandle> + '_ {
        self.coefficients.iter().copied()
    }

    /// Rebuilds `sum_k c_k t^(degree - k)`.
    pub fn reconstruct(&self, arena: &mut ExprArena, t: ExprHandle) -> ExprHandle {
        let degree = self.degree();
        let terms: Vec<_> = (0..=degree)
            .rev()
            .zip(&self.coefficients)
            .map(|(power, &c)| {
                let tp = arena.powi(t, power);
                arena.mul([c, tp])
            })
            .collect();
        arena.add(terms)
    }
}

impl IntoIterator for CoefficientList {
    type Item = ExprHandle;
    type IntoIter = std::vec::IntoIter<ExprHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.coefficients.into_iter()
    }
}

/// Extracts the coefficients of `expr` as a polynomial of `degree` in `t`.
///
/// # Errors
///
/// - [`CodegenError::Expr`] if `t` is not a symbol.
/// - [`CodegenError::NotPolynomial`] if `expr` does not expand to a polynomial.
/// - [`CodegenError::DegreeMismatch`] if the degree in `t` is not `degree`,
///   including when `expr` is identically zero.
pub fn extract_coefficients(
    arena: &mut ExprArena,
    expr: ExprHandle,
    t: ExprHandle,
    degree: u32,
) -> Result<CoefficientList, CodegenError> {
    let t_id = arena.as_symbol(t).ok_or(ExprError::NotASymbol(t))?;
    let vars = VarMap::new(free_symbols(arena, expr).into_iter().chain([t_id]));
    let t_index = vars.index_of(t_id).ok_or(ExprError::NotASymbol(t))?;

    let poly = expand(arena, expr, &vars)?;
    let actual = poly.degree_in(t_index);
    debug!(
        "expanded condition: {} terms, degree {actual:?} in t (expected {degree})",
        poly.len()
    );
    if actual != Some(degree) {
        return Err(CodegenError::DegreeMismatch {
            expected: degree,
            actual,
        });
    }

    let coefficients = poly
        .coefficients_in(t_index)
        .iter()
        .rev()
        .map(|c: &SparsePoly| to_expr(arena, c, &vars))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CoefficientList { coefficients })
}
