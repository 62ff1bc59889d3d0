//! Sparse multivariate polynomials with exact integer coefficients.
//!
//! Expanded curve conditions have many symbols but comparatively few
//! terms, so they are stored as sorted (monomial, coefficient) pairs.

use std::collections::hash_map::Entry;

use num_traits::{One, Zero};
use rootgen_integers::Integer;
use rustc_hash::FxHashMap;

use crate::monomial::Monomial;

/// A sparse multivariate polynomial over Z.
///
/// Terms are stored in descending grevlex order with like terms combined
/// and zero coefficients removed, so structural equality is polynomial
/// equality.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SparsePoly {
    /// Terms in descending order.
    terms: Vec<(Monomial, Integer)>,
    /// Number of variables.
    num_vars: usize,
}

impl SparsePoly {
    /// Creates a new polynomial from terms.
    ///
    /// Terms are automatically sorted and combined.
    #[must_use]
    pub fn new(terms: Vec<(Monomial, Integer)>, num_vars: usize) -> Self {
        let mut poly = Self { terms, num_vars };
        poly.normalize();
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(num_vars: usize) -> Self {
        Self {
            terms: Vec::new(),
            num_vars,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self::constant(Integer::one(), num_vars)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: Integer, num_vars: usize) -> Self {
        if c.is_zero() {
            Self::zero(num_vars)
        } else {
            Self {
                terms: vec![(Monomial::one(num_vars), c)],
                num_vars,
            }
        }
    }

    /// Creates a single variable x_i.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        Self {
            terms: vec![(Monomial::var(i, num_vars), Integer::one())],
            num_vars,
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the constant value if the polynomial has no variables.
    #[must_use]
    pub fn as_constant(&self) -> Option<Integer> {
        match self.terms.as_slice() {
            [] => Some(Integer::zero()),
            [(m, c)] if m.is_one() => Some(c.clone()),
            _ => None,
        }
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the terms, leading term first.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, Integer)] {
        &self.terms
    }

    fn normalize(&mut self) {
        let mut terms = std::mem::take(&mut self.terms);
        terms.sort_by(|a, b| b.0.cmp(&a.0));

        let mut combined: Vec<(Monomial, Integer)> = Vec::with_capacity(terms.len());
        for (m, c) in terms {
            match combined.last_mut() {
                Some((last, acc)) if *last == m => *acc = &*acc + &c,
                _ => combined.push((m, c)),
            }
        }
        combined.retain(|(_, c)| !c.is_zero());

        self.terms = combined;
    }

    /// Adds two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if the variable counts differ.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars, "variable count mismatch");

        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());

        Self::new(terms, self.num_vars)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), -c)).collect(),
            num_vars: self.num_vars,
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials.
    ///
    /// Products are accumulated in a hash map keyed by monomial, so like
    /// terms are combined as they are produced.
    ///
    /// # Panics
    ///
    /// Panics if the variable counts differ.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars, "variable count mismatch");

        if self.is_zero() || other.is_zero() {
            return Self::zero(self.num_vars);
        }

        let mut acc: FxHashMap<Monomial, Integer> = FxHashMap::default();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                let c = c1 * c2;
                match acc.entry(m1.mul(m2)) {
                    Entry::Occupied(mut e) => {
                        let sum = e.get() + &c;
                        *e.get_mut() = sum;
                    }
                    Entry::Vacant(e) => {
                        e.insert(c);
                    }
                }
            }
        }

        Self::new(acc.into_iter().collect(), self.num_vars)
    }

    /// Raises the polynomial to a non-negative power by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one(self.num_vars);
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &Integer) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars);
        }

        Self {
            terms: self.terms.iter().map(|(m, x)| (m.clone(), x * c)).collect(),
            num_vars: self.num_vars,
        }
    }

    /// Returns the degree in variable `var`, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree_in(&self, var: usize) -> Option<u32> {
        self.terms.iter().map(|(m, _)| m.exponent(var)).max()
    }

    /// Splits the polynomial into coefficients with respect to `var`.
    ///
    /// Entry `k` of the result is the coefficient of `var^k`, a polynomial
    /// in which `var` no longer occurs. The zero polynomial yields an
    /// empty vector; otherwise the length is `degree_in(var) + 1`.
    #[must_use]
    pub fn coefficients_in(&self, var: usize) -> Vec<Self> {
        let Some(degree) = self.degree_in(var) else {
            return Vec::new();
        };

        let mut buckets: Vec<Vec<(Monomial, Integer)>> = vec![Vec::new(); degree as usize + 1];
        for (m, c) in &self.terms {
            let k = m.exponent(var) as usize;
            buckets[k].push((m.with_exponent(var, 0), c.clone()));
        }

        buckets
            .into_iter()
            .map(|terms| Self::new(terms, self.num_vars))
            .collect()
    }
}

impl std::fmt::Display for SparsePoly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<_> = self
            .terms
            .iter()
            .map(|(m, c)| {
                if m.is_one() {
                    format!("{c}")
                } else {
                    format!("{c}*{m}")
                }
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z(n: i64) -> Integer {
        Integer::new(n)
    }

    #[test]
    fn test_sparse_basic() {
        let x = SparsePoly::var(0, 2);
        let y = SparsePoly::var(1, 2);

        let sum = x.add(&y);
        assert_eq!(sum.len(), 2);
        assert!(sum.sub(&sum).is_zero());
    }

    #[test]
    fn test_sparse_mul() {
        let x = SparsePoly::var(0, 2);
        let one = SparsePoly::one(2);

        // (x + 1)^2 = x^2 + 2x + 1
        let xp1 = x.add(&one);
        let sq = xp1.pow(2);
        assert_eq!(sq.len(), 3);
        assert_eq!(sq, xp1.mul(&xp1));
        assert_eq!(sq.to_string(), "1*x0^2 + 2*x0 + 1");
    }

    #[test]
    fn test_binomial_cancellation() {
        let t = SparsePoly::var(0, 1);
        let one = SparsePoly::one(1);

        // (1 - t) + t == 1
        let sum = one.sub(&t).add(&t);
        assert_eq!(sum.as_constant(), Some(z(1)));
    }

    #[test]
    fn test_coefficients_in() {
        let t = SparsePoly::var(0, 2);
        let a = SparsePoly::var(1, 2);

        // 3*a*t^2 - a + 5
        let p = a
            .scale(&z(3))
            .mul(&t.pow(2))
            .sub(&a)
            .add(&SparsePoly::constant(z(5), 2));

        assert_eq!(p.degree_in(0), Some(2));
        let coeffs = p.coefficients_in(0);
        assert_eq!(coeffs.len(), 3);
        assert_eq!(coeffs[2], a.scale(&z(3)));
        assert!(coeffs[1].is_zero());
        assert_eq!(coeffs[0], SparsePoly::constant(z(5), 2).sub(&a));
    }

    #[test]
    fn test_scale_by_zero() {
        let x = SparsePoly::var(0, 1);
        assert!(x.scale(&z(0)).is_zero());
        assert_eq!(x.scale(&z(-4)).to_string(), "-4*x0");
    }

    #[test]
    fn test_zero_has_no_degree() {
        let p = SparsePoly::zero(3);
        assert_eq!(p.degree_in(1), None);
        assert!(p.coefficients_in(1).is_empty());
    }
}
