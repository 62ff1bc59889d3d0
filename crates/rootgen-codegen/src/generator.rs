//! End-to-end generation of root-finder call sites.
//!
//! Each request runs in its own arena: symbols, curve formula, condition,
//! coefficient extraction, rendering, cleanup and emission. Requests share
//! nothing but the read-only registry and configuration, so batches run in
//! parallel.

use log::{debug, trace};
use rayon::prelude::*;
use rootgen_core::{CPrinter, ExprArena, ExprHandle};
use rootgen_curves::{
    control_point_symbols, free_variable, Condition, CurveDescriptor, CurveFamily, CurveRegistry,
};

use crate::clean::remove_pow;
use crate::config::GeneratorConfig;
use crate::emit::SolverCallEmitter;
use crate::error::CodegenError;
use crate::extract::extract_coefficients;

/// A generated root-finder call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    /// Curve family.
    pub family: CurveFamily,
    /// Curve degree.
    pub degree: u32,
    /// Condition the roots satisfy.
    pub condition: Condition,
    /// Degree of the condition polynomial in `t`.
    pub polynomial_degree: u32,
    /// Emitted lines.
    pub lines: Vec<String>,
}

impl CallSite {
    /// Returns the call site as newline-separated text.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Generates solver call sites for registered curves.
#[derive(Clone, Debug)]
pub struct Generator {
    registry: CurveRegistry,
    emitter: SolverCallEmitter,
    printer: CPrinter,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator {
    /// Builds the registry and emitter described by `config`.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            registry: CurveRegistry::new(config.max_bezier_degree, config.max_rational_degree),
            emitter: SolverCallEmitter::new(config.emitter),
            printer: CPrinter::default(),
        }
    }

    /// Returns the curve registry.
    #[must_use]
    pub fn registry(&self) -> &CurveRegistry {
        &self.registry
    }

    /// Turns a condition polynomial of `degree` in `t` into call-site lines.
    ///
    /// # Errors
    ///
    /// Fails if `expr` is not a polynomial of exactly `degree` in `t`, or
    /// if a rendered coefficient is malformed.
    pub fn solver_call(
        &self,
        arena: &mut ExprArena,
        expr: ExprHandle,
        t: ExprHandle,
        degree: u32,
    ) -> Result<Vec<String>, CodegenError> {
        let coefficients = extract_coefficients(arena, expr, t, degree)?;

        let rendered = coefficients
            .iter()
            .map(|c| {
                let text = remove_pow(&self.printer.print(arena, c))?;
                trace!("coefficient: {text}");
                Ok(text)
            })
            .collect::<Result<Vec<_>, CodegenError>>()?;

        self.emitter.emit(&rendered, degree)
    }

    /// Generates the call site for one curve and condition.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Generation`] naming the request, with the
    /// underlying failure as its source.
    pub fn generate(
        &self,
        family: CurveFamily,
        degree: u32,
        condition: Condition,
    ) -> Result<CallSite, CodegenError> {
        self.registry
            .get(family, degree)
            .map_err(CodegenError::from)
            .and_then(|descriptor| self.generate_for(&descriptor, condition))
            .map_err(|source| CodegenError::Generation {
                family,
                degree,
                condition,
                source: Box::new(source),
            })
    }

    /// Generates call sites for every registered curve, in registry order.
    ///
    /// # Errors
    ///
    /// Returns the first failure in registry order.
    pub fn generate_all(&self, condition: Condition) -> Result<Vec<CallSite>, CodegenError> {
        let descriptors: Vec<CurveDescriptor> = self.registry.iter().copied().collect();
        debug!("generating {condition} for {} curves", descriptors.len());

        descriptors
            .par_iter()
            .map(|d| self.generate(d.family(), d.degree(), condition))
            .collect()
    }

    fn generate_for(
        &self,
        descriptor: &CurveDescriptor,
        condition: Condition,
    ) -> Result<CallSite, CodegenError> {
        debug!(
            "generating {condition} for {} degree {}",
            descriptor.family(),
            descriptor.degree()
        );

        let mut arena = ExprArena::new();
        let t = free_variable(&mut arena);
        let points = control_point_symbols(&mut arena, descriptor.arity());
        let formula = descriptor.build_formula(&mut arena, t, &points)?;
        let expr = condition.build(&mut arena, &formula, t)?;

        let polynomial_degree = condition.expected_degree(descriptor);
        let lines = self.solver_call(&mut arena, expr, t, polynomial_degree)?;
        debug!(
            "{} degree {}: {} coefficients, arena holds {} nodes",
            descriptor.family(),
            descriptor.degree(),
            polynomial_degree + 1,
            arena.len()
        );

        Ok(CallSite {
            family: descriptor.family(),
            degree: descriptor.degree(),
            condition,
            polynomial_degree,
            lines,
        })
    }
}
