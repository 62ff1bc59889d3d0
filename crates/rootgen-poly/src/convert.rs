//! Conversion between arena expressions and sparse polynomials.
//!
//! Expansion is exact: every sum, product and integer power is multiplied
//! out over Z. Anything that is not a polynomial, such as a quotient that
//! was never cleared, is rejected rather than approximated.

use num_traits::One;
use rootgen_core::{ccode, free_symbols, ExprArena, ExprHandle, ExprNode, SymbolId};
use rootgen_integers::Integer;
use rustc_hash::FxHashMap;

use crate::error::PolyError;
use crate::sparse::SparsePoly;

/// Maps arena symbols to polynomial variable indices.
///
/// Variables are ordered by symbol ID, i.e. by creation order in the
/// arena, which keeps expansion and printing deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct VarMap {
    symbols: Vec<SymbolId>,
}

impl VarMap {
    /// Creates a map over the given symbols.
    #[must_use]
    pub fn new(symbols: impl IntoIterator<Item = SymbolId>) -> Self {
        let mut symbols: Vec<_> = symbols.into_iter().collect();
        symbols.sort_unstable();
        symbols.dedup();
        Self { symbols }
    }

    /// Creates a map over every symbol occurring in `exprs`.
    #[must_use]
    pub fn for_exprs(arena: &ExprArena, exprs: &[ExprHandle]) -> Self {
        Self::new(exprs.iter().flat_map(|&e| free_symbols(arena, e)))
    }

    /// Returns the variable index of a symbol.
    #[must_use]
    pub fn index_of(&self, symbol: SymbolId) -> Option<usize> {
        self.symbols.binary_search(&symbol).ok()
    }

    /// Returns the symbol behind variable `index`.
    #[must_use]
    pub fn symbol(&self, index: usize) -> Option<SymbolId> {
        self.symbols.get(index).copied()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the map has no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Expands `expr` into a polynomial over Z in the variables of `vars`.
///
/// # Errors
///
/// Returns [`PolyError::NotPolynomial`] for quotients and for exponents
/// that are not non-negative integer literals, and
/// [`PolyError::UnknownSymbol`] for symbols missing from `vars`.
pub fn expand(
    arena: &ExprArena,
    expr: ExprHandle,
    vars: &VarMap,
) -> Result<SparsePoly, PolyError> {
    let mut expander = Expander {
        arena,
        vars,
        memo: FxHashMap::default(),
    };
    expander.expand(expr)
}

struct Expander<'a> {
    arena: &'a ExprArena,
    vars: &'a VarMap,
    memo: FxHashMap<ExprHandle, SparsePoly>,
}

impl Expander<'_> {
    fn expand(&mut self, expr: ExprHandle) -> Result<SparsePoly, PolyError> {
        if let Some(done) = self.memo.get(&expr) {
            return Ok(done.clone());
        }

        let n = self.vars.len();
        let result = match self.arena.get(expr) {
            ExprNode::Integer(value) => SparsePoly::constant(value.clone(), n),
            ExprNode::Symbol(id) => {
                let index = self.vars.index_of(*id).ok_or_else(|| {
                    PolyError::UnknownSymbol(self.arena.symbol_name(*id).unwrap_or("?").to_string())
                })?;
                SparsePoly::var(index, n)
            }
            ExprNode::Add(args) => {
                let mut sum = SparsePoly::zero(n);
                for &a in args {
                    sum = sum.add(&self.expand(a)?);
                }
                sum
            }
            ExprNode::Mul(args) => {
                let mut product = SparsePoly::one(n);
                for &a in args {
                    product = product.mul(&self.expand(a)?);
                    if product.is_zero() {
                        break;
                    }
                }
                product
            }
            ExprNode::Pow { base, exp } => {
                let power = self
                    .arena
                    .get(*exp)
                    .as_integer()
                    .and_then(Integer::to_u32)
                    .ok_or_else(|| {
                        PolyError::NotPolynomial(format!(
                            "exponent `{}` is not a non-negative integer",
                            ccode(self.arena, *exp)
                        ))
                    })?;
                self.expand(*base)?.pow(power)
            }
            ExprNode::Neg(a) => self.expand(*a)?.neg(),
            ExprNode::Div { den, .. } => {
                return Err(PolyError::NotPolynomial(format!(
                    "unresolved denominator `{}`",
                    ccode(self.arena, *den)
                )));
            }
        };

        self.memo.insert(expr, result.clone());
        Ok(result)
    }
}

/// Rebuilds an arena expression from a polynomial.
///
/// Terms appear in the polynomial's order; each term is an integer
/// coefficient (omitted when it is 1) followed by the variables in index
/// order, with `x^e` as a power node. A `-1` coefficient stays a leading
/// factor, which the printer renders as a bare minus sign.
///
/// # Errors
///
/// Returns [`PolyError::UnknownSymbol`] if the polynomial has more
/// variables than `vars`.
pub fn to_expr(
    arena: &mut ExprArena,
    poly: &SparsePoly,
    vars: &VarMap,
) -> Result<ExprHandle, PolyError> {
    let mut terms = Vec::with_capacity(poly.len());

    for (monomial, coeff) in poly.terms() {
        let mut factors = Vec::new();
        for (i, &e) in monomial.exponents().iter().enumerate() {
            if e == 0 {
                continue;
            }
            let id = vars
                .symbol(i)
                .ok_or_else(|| PolyError::UnknownSymbol(format!("x{i}")))?;
            let sym = arena.intern(ExprNode::Symbol(id));
            factors.push(arena.powi(sym, e));
        }

        let term = if factors.is_empty() {
            arena.integer(coeff.clone())
        } else if coeff.is_one() {
            arena.mul(factors)
        } else {
            let c = arena.integer(coeff.clone());
            arena.mul(std::iter::once(c).chain(factors))
        };
        terms.push(term);
    }

    Ok(arena.add(terms))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (ExprArena, ExprHandle, ExprHandle) {
        let mut arena = ExprArena::new();
        let t = arena.symbol("t");
        let a = arena.symbol("a");
        (arena, t, a)
    }

    #[test]
    fn test_expand_binomial_square() {
        let (mut arena, t, a) = setup();
        // (a - t)^2
        let diff = arena.sub(a, t);
        let sq = arena.powi(diff, 2);

        let vars = VarMap::for_exprs(&arena, &[sq]);
        let poly = expand(&arena, sq, &vars).unwrap();
        assert_eq!(poly.len(), 3);

        let back = to_expr(&mut arena, &poly, &vars).unwrap();
        assert_eq!(ccode(&arena, back), "pow(t, 2) - 2*t*a + pow(a, 2)");
    }

    #[test]
    fn test_expand_rejects_quotient() {
        let (mut arena, t, a) = setup();
        let q = arena.div(a, t);
        let vars = VarMap::for_exprs(&arena, &[q]);

        let err = expand(&arena, q, &vars).unwrap_err();
        assert_eq!(err, PolyError::NotPolynomial("unresolved denominator `t`".to_string()));
    }

    #[test]
    fn test_expand_rejects_symbolic_exponent() {
        let (mut arena, t, a) = setup();
        let p = arena.pow(a, t);
        let vars = VarMap::for_exprs(&arena, &[p]);

        assert!(matches!(
            expand(&arena, p, &vars),
            Err(PolyError::NotPolynomial(_))
        ));
    }

    #[test]
    fn test_expand_unknown_symbol() {
        let (arena, t, a) = setup();
        let vars = VarMap::for_exprs(&arena, &[t]);

        assert_eq!(
            expand(&arena, a, &vars),
            Err(PolyError::UnknownSymbol("a".to_string()))
        );
    }

    #[test]
    fn test_to_expr_signs_and_constants() {
        let (mut arena, t, a) = setup();
        // 4 - a*t - 3*t
        let four = arena.int(4);
        let at = arena.mul([a, t]);
        let neg_at = arena.neg(at);
        let three = arena.int(3);
        let three_t = arena.mul([three, t]);
        let neg_three_t = arena.neg(three_t);
        let expr = arena.add([four, neg_at, neg_three_t]);

        let vars = VarMap::for_exprs(&arena, &[expr]);
        let poly = expand(&arena, expr, &vars).unwrap();
        let back = to_expr(&mut arena, &poly, &vars).unwrap();
        assert_eq!(ccode(&arena, back), "-t*a - 3*t + 4");
    }

    #[test]
    fn test_to_expr_minus_one_is_a_factor() {
        let (mut arena, t, a) = setup();
        // a - a*t*t
        let tt = arena.powi(t, 2);
        let att = arena.mul([a, tt]);
        let expr = arena.sub(a, att);

        let vars = VarMap::for_exprs(&arena, &[expr]);
        let poly = expand(&arena, expr, &vars).unwrap();
        let back = to_expr(&mut arena, &poly, &vars).unwrap();
        assert_eq!(ccode(&arena, back), "-pow(t, 2)*a + a");

        let ExprNode::Add(terms) = arena.get(back).clone() else {
            panic!("expected a sum");
        };
        assert!(matches!(arena.get(terms[0]), ExprNode::Mul(_)));
    }

    #[test]
    fn test_zero_polynomial_renders_as_zero() {
        let (mut arena, t, _) = setup();
        let expr = arena.sub(t, t);
        let vars = VarMap::for_exprs(&arena, &[expr]);
        let poly = expand(&arena, expr, &vars).unwrap();
        assert!(poly.is_zero());

        let back = to_expr(&mut arena, &poly, &vars).unwrap();
        assert_eq!(ccode(&arena, back), "0");
    }
}
