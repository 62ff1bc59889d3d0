//! Structural transformations on arena expressions.
//!
//! Every transformation returns a new handle; existing expressions are
//! never modified. Results are memoised per call because arena
//! expressions are DAGs and shared subtrees are common in curve formulas.

use std::collections::BTreeSet;

use hashbrown::HashMap;
use rootgen_integers::Integer;
use thiserror::Error;

use crate::arena::ExprArena;
use crate::expr::{ExprNode, SymbolId};
use crate::handle::ExprHandle;

/// Errors raised by expression transformations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExprError {
    /// The variable passed in is not a bare symbol.
    #[error("expected a symbol, found {0}")]
    NotASymbol(ExprHandle),

    /// `d/dx a^b` where `b` depends on `x` has no closed form in this
    /// expression language.
    #[error("cannot differentiate a power whose exponent depends on `{0}`")]
    VariableExponent(String),
}

/// Replaces every occurrence of the symbol `var` in `expr`.
///
/// # Errors
///
/// Returns [`ExprError::NotASymbol`] if `var` is not a bare symbol.
pub fn substitute(
    arena: &mut ExprArena,
    expr: ExprHandle,
    var: ExprHandle,
    replacement: ExprHandle,
) -> Result<ExprHandle, ExprError> {
    arena.as_symbol(var).ok_or(ExprError::NotASymbol(var))?;
    let mut memo = HashMap::new();
    Ok(substitute_rec(arena, expr, var, replacement, &mut memo))
}

fn substitute_rec(
    arena: &mut ExprArena,
    expr: ExprHandle,
    var: ExprHandle,
    replacement: ExprHandle,
    memo: &mut HashMap<ExprHandle, ExprHandle>,
) -> ExprHandle {
    if expr == var {
        return replacement;
    }
    if let Some(&done) = memo.get(&expr) {
        return done;
    }

    let node = arena.get(expr).clone();
    let result = match node {
        ExprNode::Integer(_) | ExprNode::Symbol(_) => expr,
        ExprNode::Add(args) => {
            let args: Vec<_> = args
                .iter()
                .map(|&a| substitute_rec(arena, a, var, replacement, memo))
                .collect();
            arena.add(args)
        }
        ExprNode::Mul(args) => {
            let args: Vec<_> = args
                .iter()
                .map(|&a| substitute_rec(arena, a, var, replacement, memo))
                .collect();
            arena.mul(args)
        }
        ExprNode::Pow { base, exp } => {
            let base = substitute_rec(arena, base, var, replacement, memo);
            let exp = substitute_rec(arena, exp, var, replacement, memo);
            arena.pow(base, exp)
        }
        ExprNode::Neg(a) => {
            let a = substitute_rec(arena, a, var, replacement, memo);
            arena.neg(a)
        }
        ExprNode::Div { num, den } => {
            let num = substitute_rec(arena, num, var, replacement, memo);
            let den = substitute_rec(arena, den, var, replacement, memo);
            arena.div(num, den)
        }
    };

    memo.insert(expr, result);
    result
}

/// Collects the symbols occurring in `expr`, ordered by symbol ID.
#[must_use]
pub fn free_symbols(arena: &ExprArena, expr: ExprHandle) -> BTreeSet<SymbolId> {
    let mut seen = BTreeSet::new();
    let mut visited = hashbrown::HashSet::new();
    let mut stack = vec![expr];

    while let Some(h) = stack.pop() {
        if !visited.insert(h) {
            continue;
        }
        match arena.get(h) {
            ExprNode::Symbol(id) => {
                seen.insert(*id);
            }
            node => stack.extend(node.children()),
        }
    }

    seen
}

/// Differentiates `expr` with respect to the symbol `var`.
///
/// Zero terms and unit factors produced by the sum and product rules are
/// folded away, so the derivative of a polynomial stays compact.
///
/// # Errors
///
/// Returns [`ExprError::NotASymbol`] if `var` is not a bare symbol and
/// [`ExprError::VariableExponent`] for powers like `t^t`.
pub fn derivative(
    arena: &mut ExprArena,
    expr: ExprHandle,
    var: ExprHandle,
) -> Result<ExprHandle, ExprError> {
    let var_id = arena.as_symbol(var).ok_or(ExprError::NotASymbol(var))?;
    let mut memo = HashMap::new();
    derivative_rec(arena, expr, var_id, &mut memo)
}

fn derivative_rec(
    arena: &mut ExprArena,
    expr: ExprHandle,
    var: SymbolId,
    memo: &mut HashMap<ExprHandle, ExprHandle>,
) -> Result<ExprHandle, ExprError> {
    if let Some(&done) = memo.get(&expr) {
        return Ok(done);
    }

    let node = arena.get(expr).clone();
    let result = match node {
        ExprNode::Integer(_) => arena.int(0),
        ExprNode::Symbol(id) => arena.int(i64::from(id == var)),
        ExprNode::Add(args) => {
            let mut terms = Vec::with_capacity(args.len());
            for &a in &args {
                terms.push(derivative_rec(arena, a, var, memo)?);
            }
            fold_add(arena, terms)
        }
        ExprNode::Mul(args) => {
            // Product rule: sum over i of a_i' * prod_{j != i} a_j
            let mut terms = Vec::with_capacity(args.len());
            for (i, &a) in args.iter().enumerate() {
                let da = derivative_rec(arena, a, var, memo)?;
                if arena.get(da).is_zero() {
                    continue;
                }
                let mut factors: Vec<_> = args
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, &b)| b)
                    .collect();
                factors.push(da);
                terms.push(fold_mul(arena, factors));
            }
            fold_add(arena, terms)
        }
        ExprNode::Pow { base, exp } => {
            let dexp = derivative_rec(arena, exp, var, memo)?;
            if !arena.get(dexp).is_zero() {
                let name = arena.symbol_name(var).unwrap_or("?").to_string();
                return Err(ExprError::VariableExponent(name));
            }
            let dbase = derivative_rec(arena, base, var, memo)?;
            power_rule(arena, base, exp, dbase)
        }
        ExprNode::Neg(a) => {
            let da = derivative_rec(arena, a, var, memo)?;
            if arena.get(da).is_zero() {
                da
            } else {
                arena.neg(da)
            }
        }
        ExprNode::Div { num, den } => {
            // Quotient rule: (n' d - n d') / d^2
            let dnum = derivative_rec(arena, num, var, memo)?;
            let dden = derivative_rec(arena, den, var, memo)?;
            let left = fold_mul(arena, vec![dnum, den]);
            let right = fold_mul(arena, vec![num, dden]);
            let numerator = if arena.get(right).is_zero() {
                left
            } else {
                let neg_right = arena.neg(right);
                fold_add(arena, vec![left, neg_right])
            };
            if arena.get(numerator).is_zero() {
                numerator
            } else {
                let den_sq = arena.powi(den, 2);
                arena.div(numerator, den_sq)
            }
        }
    };

    memo.insert(expr, result);
    Ok(result)
}

/// `d/dx base^exp = exp * base^(exp - 1) * base'` for constant `exp`.
fn power_rule(
    arena: &mut ExprArena,
    base: ExprHandle,
    exp: ExprHandle,
    dbase: ExprHandle,
) -> ExprHandle {
    if arena.get(dbase).is_zero() {
        return dbase;
    }

    let lowered = match arena.get(exp).as_integer().cloned() {
        Some(n) => {
            let n_minus_one = n - Integer::new(1);
            match n_minus_one.to_u32() {
                Some(m) => arena.powi(base, m),
                None => {
                    let e = arena.integer(n_minus_one);
                    arena.pow(base, e)
                }
            }
        }
        None => {
            let minus_one = arena.int(-1);
            let e = arena.add([exp, minus_one]);
            arena.pow(base, e)
        }
    };

    fold_mul(arena, vec![exp, lowered, dbase])
}

/// Builds a sum, dropping literal zeros.
fn fold_add(arena: &mut ExprArena, terms: Vec<ExprHandle>) -> ExprHandle {
    let terms: Vec<_> = terms
        .into_iter()
        .filter(|&t| !arena.get(t).is_zero())
        .collect();
    arena.add(terms)
}

/// Builds a product, dropping literal ones and collapsing on a zero factor.
fn fold_mul(arena: &mut ExprArena, factors: Vec<ExprHandle>) -> ExprHandle {
    if factors.iter().any(|&f| arena.get(f).is_zero()) {
        return arena.int(0);
    }
    let factors: Vec<_> = factors
        .into_iter()
        .filter(|&f| !arena.get(f).is_one())
        .collect();
    arena.mul(factors)
}
