//! Dual-pass axis evaluation
//!
//! An algebra expression is a closure that combines point operands into one
//! scalar. It reads every operand through the [`AxisContext`] it is handed,
//! and is run twice: once with the context on [`Axis::X`] and once on
//! [`Axis::Y`]. The two scalars become the components of the result.
//!
//! ```
//! use planepoint::point_model::*;
//!
//! let a = Point::new(1.0, 2.0);
//! let b = Point::new(3.0, 4.0);
//! let sum = calc(|p| p.v(&a) + p.v(&b));
//! assert_eq!(sum.to_array(), [4.0, 6.0]);
//! ```
//!
//! The closure must not branch on [`AxisContext::axis`] or carry state from
//! one pass to the next. That is not checked; an expression that does so
//! gets inconsistent components.

use log::trace;

use super::Vector2;

/// One of the two components of a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];
}

/// Evaluation context of a single pass
#[derive(Debug, Clone, Copy)]
pub struct AxisContext {
    axis: Axis,
}

impl AxisContext {
    pub(crate) fn new(axis: Axis) -> Self {
        AxisContext { axis }
    }

    /// The axis this pass evaluates
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Reduce an operand to its scalar for this pass: its component on the active axis
    #[inline]
    pub fn v<P: Vector2 + ?Sized>(&self, p: &P) -> f64 {
        p.component(self.axis)
    }
}

/// Run `alg` once per axis and return the resulting `[x, y]`
pub fn calc_axes<F>(alg: F) -> [f64; 2]
where
    F: Fn(&AxisContext) -> f64,
{
    let mut out = [0.0; 2];
    for (slot, axis) in out.iter_mut().zip(Axis::ALL) {
        *slot = alg(&AxisContext::new(axis));
        trace!("axis pass {:?} -> {}", axis, slot);
    }
    out
}

/// Fallible [`calc_axes`]
///
/// The first error the expression returns is handed back unchanged and the
/// remaining pass is skipped.
pub fn try_calc_axes<F, E>(alg: F) -> Result<[f64; 2], E>
where
    F: Fn(&AxisContext) -> Result<f64, E>,
{
    let mut out = [0.0; 2];
    for (slot, axis) in out.iter_mut().zip(Axis::ALL) {
        *slot = alg(&AxisContext::new(axis))?;
        trace!("axis pass {:?} -> {}", axis, slot);
    }
    Ok(out)
}
