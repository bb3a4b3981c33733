use std::fmt::{Display, Formatter};

use super::axis::{calc_axes, try_calc_axes};
use super::cache::DerivedCache;
use super::sealed::Sealed;
use super::storage::AxisStorage;
use super::vector::fmt_axes;
use super::*;
use crate::point_error::PointError;

/// Mutable 2D point
///
/// Components can be reassigned through [`Point::set_x`], [`Point::set_y`]
/// and [`Point::calc`]. Each of those clears the derived-value cache before
/// returning, so lengths and angles read afterwards reflect the new value.
///
/// ```
/// use planepoint::point_model::*;
///
/// let mut p = Point::new(3.0, 4.0);
/// assert_eq!(p.length(), 5.0);
/// p.set_x(0.0);
/// assert_eq!(p.length(), 4.0);
/// ```
#[derive(Debug, Default)]
pub struct Point {
    axes: AxisStorage,
    cache: DerivedCache,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point {
            axes: AxisStorage::new(x, y),
            cache: DerivedCache::new(),
        }
    }

    pub fn zero() -> Self {
        Point::default()
    }

    /// Build from an algebra expression, see [`calc_axes`]
    pub fn from_alg<F>(alg: F) -> Self
    where
        F: Fn(&AxisContext) -> f64,
    {
        let [x, y] = calc_axes(alg);
        Point::new(x, y)
    }

    pub fn try_from_alg<F, E>(alg: F) -> Result<Self, E>
    where
        F: Fn(&AxisContext) -> Result<f64, E>,
    {
        let [x, y] = try_calc_axes(alg)?;
        Ok(Point::new(x, y))
    }

    /// Build from any construction form
    pub fn from_input<F>(input: PointInput<F>) -> Self
    where
        F: Fn(&AxisContext) -> f64,
    {
        match input {
            PointInput::Zero => Point::zero(),
            PointInput::Pair(x, y) => Point::new(x, y),
            PointInput::Array(arr) => Point::from(arr),
            PointInput::Alg(alg) => Point::from_alg(alg),
        }
    }

    pub fn set_x(&mut self, x: f64) {
        self.set(Axis::X, x);
    }

    pub fn set_y(&mut self, y: f64) {
        self.set(Axis::Y, y);
    }

    // the single write path, every mutator goes through here
    fn set(&mut self, axis: Axis, v: f64) {
        self.axes.set(axis, v);
        self.cache.invalidate();
    }

    /// Evaluate `alg` per axis and write the result into this point
    ///
    /// The expression also gets the point itself, as it was before the call,
    /// so both passes read the same operand even though X is written first.
    ///
    /// ```
    /// use planepoint::point_model::*;
    ///
    /// let mut p = Point::new(1.0, 2.0);
    /// p.calc(|ctx, this| ctx.v(this) * 2.0);
    /// assert_eq!(p.to_array(), [2.0, 4.0]);
    /// ```
    pub fn calc<F>(&mut self, alg: F) -> &mut Self
    where
        F: Fn(&AxisContext, &Point) -> f64,
    {
        let this = self.clone();
        let [x, y] = calc_axes(|ctx| alg(ctx, &this));
        self.set(Axis::X, x);
        self.set(Axis::Y, y);
        self
    }

    /// Fallible [`Point::calc`], leaves the point untouched on error
    pub fn try_calc<F, E>(&mut self, alg: F) -> Result<&mut Self, E>
    where
        F: Fn(&AxisContext, &Point) -> Result<f64, E>,
    {
        let this = self.clone();
        let [x, y] = try_calc_axes(|ctx| alg(ctx, &this))?;
        self.set(Axis::X, x);
        self.set(Axis::Y, y);
        Ok(self)
    }

    /// Frozen copy, pooled through the default factory
    pub fn to_ipoint(&self) -> std::sync::Arc<IPoint> {
        crate::point_factory::ipoint(PointInput::pair(self.x(), self.y()))
    }

    #[cfg(test)]
    pub(crate) fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

/// Build a fresh mutable point from an algebra expression
pub fn calc<F>(alg: F) -> Point
where
    F: Fn(&AxisContext) -> f64,
{
    Point::from_alg(alg)
}

/// Build a mutable point from any construction form, never pooled
pub fn point<F>(input: PointInput<F>) -> Point
where
    F: Fn(&AxisContext) -> f64,
{
    Point::from_input(input)
}

impl Sealed for Point {
    fn derived(&self) -> &DerivedCache {
        &self.cache
    }
}

impl Vector2 for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.axes.x()
    }

    #[inline]
    fn y(&self) -> f64 {
        self.axes.y()
    }

    fn from_components(x: f64, y: f64) -> Self {
        Point::new(x, y)
    }
}

// a clone starts with an empty cache of its own
impl Clone for Point {
    fn clone(&self) -> Self {
        Point::new(self.x(), self.y())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialEq<IPoint> for Point {
    fn eq(&self, other: &IPoint) -> bool {
        self.equals(other)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fmt_axes(f, self.x(), self.y())
    }
}

impl From<[f64; 2]> for Point {
    fn from(arr: [f64; 2]) -> Self {
        let [x, y] = arr;
        Point::new(x, y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = PointError;
    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        Ok(Point::from(pair_from_slice(value)?))
    }
}

impl From<&IPoint> for Point {
    fn from(value: &IPoint) -> Self {
        value.to_point()
    }
}
