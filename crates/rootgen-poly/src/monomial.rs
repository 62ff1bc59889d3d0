//! Monomials over an arbitrary number of variables.
//!
//! A curve condition mentions the free variable, two coordinates and a
//! weight per control point, plus condition parameters, so the variable
//! count grows with the degree. Exponents are stored densely, inline for
//! small variable counts.

use std::cmp::Ordering;

use smallvec::SmallVec;

/// A monomial x_0^e_0 * x_1^e_1 * ... * x_{n-1}^e_{n-1}.
///
/// Invariant: every monomial of a polynomial has exactly `num_vars`
/// exponents, so equality and hashing are structural.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial {
    exps: SmallVec<[u32; 16]>,
}

impl Monomial {
    /// Creates the monomial 1 (all exponents zero).
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self {
            exps: smallvec::smallvec![0; num_vars],
        }
    }

    /// Creates the monomial x_i.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_vars`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        assert!(i < num_vars, "variable index {i} out of range for {num_vars} variables");
        let mut m = Self::one(num_vars);
        m.exps[i] = 1;
        m
    }

    /// Creates a monomial from exponents.
    #[must_use]
    pub fn from_exponents(exps: &[u32]) -> Self {
        Self {
            exps: SmallVec::from_slice(exps),
        }
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.exps.len()
    }

    /// Returns the exponent of variable i.
    #[must_use]
    pub fn exponent(&self, i: usize) -> u32 {
        self.exps.get(i).copied().unwrap_or(0)
    }

    /// Returns all exponents.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.exps
    }

    /// Returns a copy with the exponent of variable i replaced.
    #[must_use]
    pub fn with_exponent(&self, i: usize, e: u32) -> Self {
        let mut m = self.clone();
        m.exps[i] = e;
        m
    }

    /// Multiplies two monomials (adds exponents).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.exps.len(), other.exps.len());
        Self {
            exps: self
                .exps
                .iter()
                .zip(&other.exps)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.exps.iter().sum()
    }

    /// Returns true for the monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.exps.iter().all(|&e| e == 0)
    }
}

impl std::fmt::Display for Monomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .exps
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e > 0)
            .map(|(i, &e)| if e == 1 { format!("x{i}") } else { format!("x{i}^{e}") })
            .collect();

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join("*"))
        }
    }
}

/// Graded reverse lexicographic order: total degree first, then the
/// monomial with the smaller exponent in the last differing variable wins.
///
/// Polynomials store their terms in descending grevlex order, which fixes
/// the order of terms in generated code.
impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.total_degree().cmp(&other.total_degree()) {
            Ordering::Equal => {}
            ord => return ord,
        }

        for (ea, eb) in self.exps.iter().zip(&other.exps).rev() {
            match eb.cmp(ea) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.exps.len().cmp(&other.exps.len())
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
