use std::fmt::Formatter;

use super::cache::{ArgKey, CacheKey};
use super::sealed::Sealed;
use super::Axis;
use crate::angle::{normalize_angle, Radians};
use crate::formatter::format_number;
use crate::point_error::PointError;

fn square(v: f64) -> f64 {
    v * v
}

/// ground angle from heading `(x2, y2)` to heading `(x1, y1)`, in `[0, 2π)`
fn angle_over_ground(y1: f64, x1: f64, y2: f64, x2: f64) -> f64 {
    normalize_angle(y1.atan2(x1) - y2.atan2(x2))
}

fn arg_key<P: Vector2 + ?Sized>(p: &P) -> ArgKey {
    ArgKey::new(p.x(), p.y())
}

/// Read-only algebra shared by [`Point`](super::Point) and [`IPoint`](super::IPoint)
///
/// Implementors provide the component accessors and their derived-value
/// cache; every operation below is written once against those. Results that
/// are pure functions of the components go through the cache, so a second
/// call on an unchanged point is a map lookup.
///
/// The cache is only ever filled by these operations. It cannot be reached
/// from outside the crate:
///
/// ```compile_fail
/// use planepoint::point_model::*;
///
/// let p = IPoint::new(3.0, 4.0);
/// let _ = p.derived();
/// ```
pub trait Vector2: Sealed {
    /// number of axes, a 2D point always has 2
    const DIMENSIONS: usize = 2;

    fn x(&self) -> f64;

    fn y(&self) -> f64;

    /// Build a value of the same variant, used by `normalize` and `rotate`
    fn from_components(x: f64, y: f64) -> Self
    where
        Self: Sized;

    fn component(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x(),
            Axis::Y => self.y(),
        }
    }

    /// A 2D point has no third axis, this always fails with `NotImplemented`
    fn z(&self) -> Result<f64, PointError> {
        Err(point_err!(NotImplemented, "get z() not implemented"))
    }

    /// Always fails with `NotImplemented`, see [`Vector2::z`]
    fn set_z(&mut self, _z: f64) -> Result<(), PointError> {
        Err(point_err!(NotImplemented, "set z() not implemented"))
    }

    /// Scalar product
    ///
    /// Cached per argument value. On a long-lived immutable point, pooled ones
    /// included, every distinct argument adds an entry that is never evicted.
    /// The same holds for [`Vector2::distance`] and [`Vector2::angle_to`].
    fn dot<P: Vector2 + ?Sized>(&self, other: &P) -> f64 {
        self.derived()
            .scalar(CacheKey::Dot(arg_key(other)), || {
                self.x() * other.x() + self.y() * other.y()
            })
    }

    fn length_squared(&self) -> f64 {
        self.derived()
            .scalar(CacheKey::LengthSquared, || self.dot(self))
    }

    fn length(&self) -> f64 {
        self.derived()
            .scalar(CacheKey::Length, || self.length_squared().sqrt())
    }

    /// The scalar a point reduces to outside of axis evaluation: its magnitude
    fn value_of(&self) -> f64 {
        self.derived().scalar(CacheKey::ValueOf, || self.length())
    }

    /// Divide both components by the length
    ///
    /// A zero-length point gives `NaN` components; check `length() == 0.0`
    /// first if that matters.
    fn normalize(&self) -> Self
    where
        Self: Sized,
    {
        let length = self.length();
        Self::from_components(self.x() / length, self.y() / length)
    }

    /// Heading of the point, `atan2(y, x)` in `[0, 2π)`
    fn polar_angle(&self) -> f64 {
        self.derived().scalar(CacheKey::PolarAngle, || {
            normalize_angle(self.y().atan2(self.x()))
        })
    }

    /// Angle from `other`'s heading to this heading, in `[0, 2π)`
    ///
    /// Cached per argument like [`Vector2::dot`].
    fn angle_to<P: Vector2 + ?Sized>(&self, other: &P) -> f64 {
        self.derived()
            .scalar(CacheKey::AngleTo(arg_key(other)), || {
                angle_over_ground(self.y(), self.x(), other.y(), other.x())
            })
    }

    /// Rotate counterclockwise by `angle`, radians or anything converting to them
    fn rotate<A: Into<Radians>>(&self, angle: A) -> Self
    where
        Self: Sized,
    {
        let angle = angle.into().value();
        let (sa, ca) = angle.sin_cos();

        let x = (self.x() * ca) - (self.y() * sa);
        let y = (self.x() * sa) + (self.y() * ca);

        Self::from_components(x, y)
    }

    /// Euclidean distance, cached per argument like [`Vector2::dot`]
    fn distance<P: Vector2 + ?Sized>(&self, other: &P) -> f64 {
        self.derived()
            .scalar(CacheKey::Distance(arg_key(other)), || {
                (square(self.x() - other.x()) + square(self.y() - other.y())).sqrt()
            })
    }

    /// Exact component-wise equality
    fn equals<P: Vector2 + ?Sized>(&self, other: &P) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    fn to_array(&self) -> [f64; 2] {
        self.derived()
            .pair(CacheKey::ToArray, || [self.x(), self.y()])
    }

    fn norm(&self) -> Self
    where
        Self: Sized,
    {
        self.normalize()
    }

    fn dist<P: Vector2 + ?Sized>(&self, other: &P) -> f64 {
        self.distance(other)
    }

    fn len(&self) -> f64 {
        self.length()
    }

    fn lensq(&self) -> f64 {
        self.length_squared()
    }

    fn get_rad(&self) -> f64 {
        self.polar_angle()
    }
}

/// `{ x: <x>, y: <y> }`, shared by the `Display` impls of both variants
pub(crate) fn fmt_axes(f: &mut Formatter<'_>, x: f64, y: f64) -> std::fmt::Result {
    write!(f, "{{ x: {}, y: {} }}", format_number(x), format_number(y))
}
