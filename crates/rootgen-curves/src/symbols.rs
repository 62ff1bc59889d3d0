//! Control-point symbol tables.
//!
//! Control point `i` of a curve is the pair `(cx{i}, cy{i})` with weight
//! `w{i}`. Names embed the index, so symbols are identified by position and
//! interning the same table twice in one arena yields the same handles.

use rootgen_core::{ExprArena, ExprHandle};

/// Name of the curve parameter.
pub const FREE_VARIABLE: &str = "t";

/// The symbols of one control point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ControlPointSymbols {
    /// x coordinate, `cx{i}`.
    pub x: ExprHandle,
    /// y coordinate, `cy{i}`.
    pub y: ExprHandle,
    /// Weight, `w{i}`. Only rational curves use it.
    pub w: ExprHandle,
}

/// Returns the curve parameter `t`.
///
/// Call this before [`control_point_symbols`] so that `t` gets the
/// smallest symbol ID in a fresh arena.
pub fn free_variable(arena: &mut ExprArena) -> ExprHandle {
    arena.symbol(FREE_VARIABLE)
}

/// Creates the symbols for `n` control points, indexed `0..n`.
///
/// All x coordinates are interned first, then all y coordinates, then all
/// weights.
pub fn control_point_symbols(arena: &mut ExprArena, n: usize) -> Vec<ControlPointSymbols> {
    let xs: Vec<_> = (0..n).map(|i| arena.symbol(&format!("cx{i}"))).collect();
    let ys: Vec<_> = (0..n).map(|i| arena.symbol(&format!("cy{i}"))).collect();
    let ws: Vec<_> = (0..n).map(|i| arena.symbol(&format!("w{i}"))).collect();

    xs.into_iter()
        .zip(ys)
        .zip(ws)
        .map(|((x, y), w)| ControlPointSymbols { x, y, w })
        .collect()
}
