use super::AxisContext;
use crate::point_error::PointError;

/// Algebra expression type used when a [`PointInput`] carries none
pub type AlgFn = fn(&AxisContext) -> f64;

/// The four ways to construct a point
///
/// `Zero`, `Pair` and `Array` assign components directly; only `Alg` goes
/// through the dual-pass evaluator.
#[derive(Debug, Clone, Copy)]
pub enum PointInput<F = AlgFn> {
    Zero,
    Pair(f64, f64),
    Array([f64; 2]),
    Alg(F),
}

impl PointInput {
    pub fn zero() -> Self {
        PointInput::Zero
    }

    pub fn pair(x: f64, y: f64) -> Self {
        PointInput::Pair(x, y)
    }

    pub fn array(arr: [f64; 2]) -> Self {
        PointInput::Array(arr)
    }

    /// Array form from a runtime sequence, which must hold exactly two numbers
    pub fn sequence(seq: &[f64]) -> Result<Self, PointError> {
        Ok(PointInput::Array(pair_from_slice(seq)?))
    }
}

impl<F> PointInput<F> {
    pub fn alg(alg: F) -> Self
    where
        F: Fn(&AxisContext) -> f64,
    {
        PointInput::Alg(alg)
    }
}

impl From<[f64; 2]> for PointInput {
    fn from(arr: [f64; 2]) -> Self {
        PointInput::Array(arr)
    }
}

impl From<(f64, f64)> for PointInput {
    fn from((x, y): (f64, f64)) -> Self {
        PointInput::Pair(x, y)
    }
}

/// Whether `seq` has the shape of the array construction form
pub fn is_sequence(seq: &[f64]) -> bool {
    seq.len() == 2
}

/// Copy the two components out of `seq`
pub(crate) fn pair_from_slice(seq: &[f64]) -> Result<[f64; 2], PointError> {
    if !is_sequence(seq) {
        return Err(point_err!(
            InvalidSequence,
            &format!("expect a sequence of 2 numbers, got {}", seq.len())
        ));
    }
    Ok([seq[0], seq[1]])
}
