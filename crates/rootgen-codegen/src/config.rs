//! Generator configuration.
//!
//! Library code never reads the environment; the driver maps its flags onto
//! these structs.

use rootgen_curves::registry::{DEFAULT_MAX_BEZIER_DEGREE, DEFAULT_MAX_RATIONAL_DEGREE};

/// Names used in the emitted root-finder call.
///
/// The defaults match a root finder declared as
/// `PolynomialRootFinder<Scalar, N>::find_real_roots_in_interval(coeffs, result, t0, t1, tol)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Root finder class template.
    pub root_finder: String,
    /// Scalar type argument.
    pub scalar: String,
    /// Output buffer at the call site.
    pub result: String,
    /// Lower interval bound at the call site.
    pub lower: String,
    /// Upper interval bound at the call site.
    pub upper: String,
    /// Tolerance at the call site.
    pub tolerance: String,
    /// Indentation width of the coefficient block.
    pub indent: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            root_finder: "PolynomialRootFinder".to_string(),
            scalar: "Scalar".to_string(),
            result: "result".to_string(),
            lower: "t0".to_string(),
            upper: "t1".to_string(),
            tolerance: "tol".to_string(),
            indent: 4,
        }
    }
}

impl EmitterConfig {
    /// Sets the root finder class template.
    #[must_use]
    pub fn with_root_finder(mut self, name: impl Into<String>) -> Self {
        self.root_finder = name.into();
        self
    }

    /// Sets the scalar type argument.
    #[must_use]
    pub fn with_scalar(mut self, name: impl Into<String>) -> Self {
        self.scalar = name.into();
        self
    }

    /// Sets the trailing call-site argument names.
    #[must_use]
    pub fn with_call_site_names(
        mut self,
        result: impl Into<String>,
        lower: impl Into<String>,
        upper: impl Into<String>,
        tolerance: impl Into<String>,
    ) -> Self {
        self.result = result.into();
        self.lower = lower.into();
        self.upper = upper.into();
        self.tolerance = tolerance.into();
        self
    }

    /// Sets the indentation width.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Configuration of a [`crate::Generator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Exclusive upper bound on Bezier degrees.
    pub max_bezier_degree: u32,
    /// Exclusive upper bound on rational Bezier degrees.
    pub max_rational_degree: u32,
    /// Call-site formatting.
    pub emitter: EmitterConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_bezier_degree: DEFAULT_MAX_BEZIER_DEGREE,
            max_rational_degree: DEFAULT_MAX_RATIONAL_DEGREE,
            emitter: EmitterConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Sets the exclusive upper bound on Bezier degrees.
    #[must_use]
    pub fn with_max_bezier_degree(mut self, max: u32) -> Self {
        self.max_bezier_degree = max;
        self
    }

    /// Sets the exclusive upper bound on rational Bezier degrees.
    #[must_use]
    pub fn with_max_rational_degree(mut self, max: u32) -> Self {
        self.max_rational_degree = max;
        self
    }

    /// Sets the emitter configuration.
    #[must_use]
    pub fn with_emitter(mut self, emitter: EmitterConfig) -> Self {
        self.emitter = emitter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.max_bezier_degree, 11);
        assert_eq!(config.max_rational_degree, 5);
        assert_eq!(config.emitter.root_finder, "PolynomialRootFinder");
        assert_eq!(config.emitter.indent, 4);
    }

    #[test]
    fn test_builders() {
        let emitter = EmitterConfig::default()
            .with_scalar("double")
            .with_call_site_names("roots", "lo", "hi", "eps")
            .with_indent(2);
        let config = GeneratorConfig::default()
            .with_max_bezier_degree(4)
            .with_emitter(emitter.clone());

        assert_eq!(config.max_bezier_degree, 4);
        assert_eq!(config.emitter, emitter);
        assert_eq!(config.emitter.upper, "hi");
    }
}
