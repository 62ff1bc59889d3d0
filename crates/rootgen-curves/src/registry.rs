//! The curve family registry.
//!
//! The registry is an explicit, read-only table from family to the ordered
//! list of supported degrees. It is built once per run; there is no global
//! instance.

use std::collections::BTreeMap;

use log::debug;
use rootgen_core::{ExprArena, ExprHandle};

use crate::error::CurveError;
use crate::family::CurveFamily;
use crate::formula::CurveFormula;
use crate::symbols::ControlPointSymbols;

/// Smallest supported curve degree.
pub const MIN_DEGREE: u32 = 2;

/// Default exclusive upper bound for Bezier degrees.
pub const DEFAULT_MAX_BEZIER_DEGREE: u32 = 11;

/// Default exclusive upper bound for rational Bezier degrees.
pub const DEFAULT_MAX_RATIONAL_DEGREE: u32 = 5;

/// A supported (family, degree) pair.
///
/// Each descriptor binds its own degree by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurveDescriptor {
    family: CurveFamily,
    degree: u32,
}

impl CurveDescriptor {
    /// Returns the curve family.
    #[must_use]
    pub fn family(&self) -> CurveFamily {
        self.family
    }

    /// Returns the curve degree.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Returns the number of control points, `degree + 1`.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.degree as usize + 1
    }

    /// Returns true for rational curves.
    #[must_use]
    pub fn is_rational(&self) -> bool {
        self.family.is_rational()
    }

    /// Builds the curve formula in `t` over the given control points.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::SymbolCountMismatch`] unless exactly
    /// [`Self::arity`] control points are supplied.
    pub fn build_formula(
        &self,
        arena: &mut ExprArena,
        t: ExprHandle,
        points: &[ControlPointSymbols],
    ) -> Result<CurveFormula, CurveError> {
        if points.len() != self.arity() {
            return Err(CurveError::SymbolCountMismatch {
                degree: self.degree,
                expected: self.arity(),
                actual: points.len(),
            });
        }

        let formula = match self.family {
            CurveFamily::Bezier => CurveFormula::bezier(arena, t, points),
            CurveFamily::RationalBezier => CurveFormula::rational_bezier(arena, t, points),
        };
        Ok(formula)
    }
}

#[derive(Clone, Debug)]
struct FamilyTable {
    max_degree: u32,
    descriptors: Vec<CurveDescriptor>,
}

/// The table of supported curves.
#[derive(Clone, Debug)]
pub struct CurveRegistry {
    families: BTreeMap<CurveFamily, FamilyTable>,
}

impl CurveRegistry {
    /// Creates a registry with degrees `MIN_DEGREE..max` for each family.
    ///
    /// A bound at or below [`MIN_DEGREE`] leaves that family empty.
    #[must_use]
    pub fn new(max_bezier_degree: u32, max_rational_degree: u32) -> Self {
        let families = CurveFamily::ALL
            .into_iter()
            .map(|family| {
                let max_degree = match family {
                    CurveFamily::Bezier => max_bezier_degree,
                    CurveFamily::RationalBezier => max_rational_degree,
                };
                let descriptors = (MIN_DEGREE..max_degree)
                    .map(|degree| CurveDescriptor { family, degree })
                    .collect();
                (family, FamilyTable { max_degree, descriptors })
            })
            .collect();

        let registry = Self { families };
        debug!(
            "curve registry: {} Bezier, {} RationalBezier descriptors",
            registry.descriptors(CurveFamily::Bezier).len(),
            registry.descriptors(CurveFamily::RationalBezier).len()
        );
        registry
    }

    /// Looks up the descriptor for `(family, degree)`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::UnsupportedDegree`] for degrees below
    /// [`MIN_DEGREE`] and at or above the family's bound.
    pub fn get(&self, family: CurveFamily, degree: u32) -> Result<CurveDescriptor, CurveError> {
        let table = &self.families[&family];
        table
            .descriptors
            .iter()
            .find(|d| d.degree == degree)
            .copied()
            .ok_or(CurveError::UnsupportedDegree {
                family,
                degree,
                min: MIN_DEGREE,
                max: table.max_degree,
            })
    }

    /// Returns the descriptors of one family in ascending degree.
    #[must_use]
    pub fn descriptors(&self, family: CurveFamily) -> &[CurveDescriptor] {
        &self.families[&family].descriptors
    }

    /// Returns the exclusive degree bound of a family.
    #[must_use]
    pub fn max_degree(&self, family: CurveFamily) -> u32 {
        self.families[&family].max_degree
    }

    /// Iterates over every descriptor, family by family, in ascending degree.
    pub fn iter(&self) -> impl Iterator<Item = &CurveDescriptor> {
        self.families.values().flat_map(|table| table.descriptors.iter())
    }

    /// Returns the total number of descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.families.values().map(|table| table.descriptors.len()).sum()
    }

    /// Returns true if no family has a supported degree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CurveRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BEZIER_DEGREE, DEFAULT_MAX_RATIONAL_DEGREE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{control_point_symbols, free_variable};

    #[test]
    fn test_default_contents() {
        let registry = CurveRegistry::default();

        let bezier: Vec<_> = registry
            .descriptors(CurveFamily::Bezier)
            .iter()
            .map(CurveDescriptor::degree)
            .collect();
        assert_eq!(bezier, (2..11).collect::<Vec<_>>());

        let rational: Vec<_> = registry
            .descriptors(CurveFamily::RationalBezier)
            .iter()
            .map(CurveDescriptor::degree)
            .collect();
        assert_eq!(rational, vec![2, 3, 4]);
        assert_eq!(registry.len(), 12);
    }

    #[test]
    fn test_descriptor_binds_degree() {
        let registry = CurveRegistry::default();
        for descriptor in registry.iter() {
            let again = registry.get(descriptor.family(), descriptor.degree()).unwrap();
            assert_eq!(again, *descriptor);
            assert_eq!(descriptor.arity(), descriptor.degree() as usize + 1);
        }
    }

    #[test]
    fn test_unsupported_degrees() {
        let registry = CurveRegistry::default();
        for family in CurveFamily::ALL {
            let max = registry.max_degree(family);
            for degree in [0, 1, max, max + 7] {
                assert_eq!(
                    registry.get(family, degree),
                    Err(CurveError::UnsupportedDegree {
                        family,
                        degree,
                        min: MIN_DEGREE,
                        max,
                    })
                );
            }
        }
    }

    #[test]
    fn test_unsupported_degree_message() {
        let err = CurveRegistry::default()
            .get(CurveFamily::RationalBezier, 5)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "RationalBezier curves of degree 5 are not supported (supported: 2..5)"
        );
    }

    #[test]
    fn test_empty_family() {
        let registry = CurveRegistry::new(2, 0);
        assert!(registry.is_empty());
        assert!(registry.get(CurveFamily::Bezier, 2).is_err());
    }

    #[test]
    fn test_symbol_count_mismatch() {
        let registry = CurveRegistry::default();
        let cubic = registry.get(CurveFamily::Bezier, 3).unwrap();

        let mut arena = ExprArena::new();
        let t = free_variable(&mut arena);
        let points = control_point_symbols(&mut arena, 3);
        assert_eq!(
            cubic.build_formula(&mut arena, t, &points),
            Err(CurveError::SymbolCountMismatch {
                degree: 3,
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_build_formula_family() {
        let registry = CurveRegistry::default();
        let mut arena = ExprArena::new();
        let t = free_variable(&mut arena);
        let points = control_point_symbols(&mut arena, 4);

        let plain = registry.get(CurveFamily::Bezier, 3).unwrap();
        let rational = registry.get(CurveFamily::RationalBezier, 3).unwrap();
        assert!(!plain.build_formula(&mut arena, t, &points).unwrap().is_rational());
        assert!(rational.build_formula(&mut arena, t, &points).unwrap().is_rational());
    }
}
