//! Root-finder call emission.
//!
//! For a degree `D` polynomial the emitted fragment is
//!
//! ```text
//! PolynomialRootFinder<Scalar, D>::find_real_roots_in_interval({
//!     c0,
//!     ...
//!     cD
//! },
//! result, t0, t1, tol);
//! ```
//!
//! The trailing names refer to variables the enclosing code declares.

use crate::config::EmitterConfig;
use crate::error::CodegenError;

/// Emits root-finder call sites.
#[derive(Clone, Debug, Default)]
pub struct SolverCallEmitter {
    config: EmitterConfig,
}

impl SolverCallEmitter {
    /// Creates an emitter with the given names and layout.
    #[must_use]
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Emits the call site as lines, coefficients in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::ArityMismatch`] unless there are exactly
    /// `degree + 1` coefficients.
    pub fn emit<S: AsRef<str>>(
        &self,
        coefficients: &[S],
        degree: u32,
    ) -> Result<Vec<String>, CodegenError> {
        let expected = degree as usize + 1;
        if coefficients.len() != expected {
            return Err(CodegenError::ArityMismatch {
                degree,
                expected,
                actual: coefficients.len(),
            });
        }

        let c = &self.config;
        let mut lines = Vec::with_capacity(expected + 3);
        lines.push(format!(
            "{}<{}, {degree}>::find_real_roots_in_interval({{",
            c.root_finder, c.scalar
        ));

        let last = expected - 1;
        let block = coefficients.iter().enumerate().map(|(i, coeff)| {
            let sep = if i == last { "" } else { "," };
            format!("{}{sep}", coeff.as_ref())
        });
        lines.extend(indent(block, c.indent));

        lines.push("},".to_string());
        lines.push(format!("{}, {}, {}, {});", c.result, c.lower, c.upper, c.tolerance));
        Ok(lines)
    }

    /// Emits the call site as one newline-separated string.
    ///
    /// # Errors
    ///
    /// See [`Self::emit`].
    pub fn emit_text<S: AsRef<str>>(
        &self,
        coefficients: &[S],
        degree: u32,
    ) -> Result<String, CodegenError> {
        Ok(self.emit(coefficients, degree)?.join("\n"))
    }
}

/// Indents every line by `width` spaces.
pub fn indent<I>(lines: I, width: usize) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let pad = " ".repeat(width);
    lines
        .into_iter()
        .map(|line| format!("{pad}{}", line.as_ref()))
        .collect()
}
