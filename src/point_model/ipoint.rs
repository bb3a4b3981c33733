use std::fmt::{Display, Formatter};

use super::axis::{calc_axes, try_calc_axes};
use super::cache::DerivedCache;
use super::sealed::Sealed;
use super::storage::AxisStorage;
use super::vector::fmt_axes;
use super::*;
use crate::point_error::PointError;

/// Immutable 2D point
///
/// There is no way to change the components after construction, so cached
/// derived values stay valid for the whole life of the instance. Recurring
/// inputs can be shared through [`PointFactory`](crate::point_factory::PointFactory).
#[derive(Debug, Default)]
pub struct IPoint {
    axes: AxisStorage,
    cache: DerivedCache,
}

impl IPoint {
    pub fn new(x: f64, y: f64) -> Self {
        IPoint {
            axes: AxisStorage::new(x, y),
            cache: DerivedCache::new(),
        }
    }

    pub fn zero() -> Self {
        IPoint::default()
    }

    pub fn from_alg<F>(alg: F) -> Self
    where
        F: Fn(&AxisContext) -> f64,
    {
        IPoint::from(calc_axes(alg))
    }

    pub fn try_from_alg<F, E>(alg: F) -> Result<Self, E>
    where
        F: Fn(&AxisContext) -> Result<f64, E>,
    {
        Ok(IPoint::from(try_calc_axes(alg)?))
    }

    pub fn from_input<F>(input: PointInput<F>) -> Self
    where
        F: Fn(&AxisContext) -> f64,
    {
        match input {
            PointInput::Zero => IPoint::zero(),
            PointInput::Pair(x, y) => IPoint::new(x, y),
            PointInput::Array(arr) => IPoint::from(arr),
            PointInput::Alg(alg) => IPoint::from_alg(alg),
        }
    }

    /// Mutable copy with the same components
    pub fn to_point(&self) -> Point {
        Point::new(self.x(), self.y())
    }

    #[cfg(test)]
    pub(crate) fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

impl Sealed for IPoint {
    fn derived(&self) -> &DerivedCache {
        &self.cache
    }
}

impl Vector2 for IPoint {
    #[inline]
    fn x(&self) -> f64 {
        self.axes.x()
    }

    #[inline]
    fn y(&self) -> f64 {
        self.axes.y()
    }

    fn from_components(x: f64, y: f64) -> Self {
        IPoint::new(x, y)
    }
}

impl Clone for IPoint {
    fn clone(&self) -> Self {
        IPoint::new(self.x(), self.y())
    }
}

impl PartialEq for IPoint {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialEq<Point> for IPoint {
    fn eq(&self, other: &Point) -> bool {
        self.equals(other)
    }
}

impl Display for IPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fmt_axes(f, self.x(), self.y())
    }
}

impl From<[f64; 2]> for IPoint {
    fn from(arr: [f64; 2]) -> Self {
        let [x, y] = arr;
        IPoint::new(x, y)
    }
}

impl From<(f64, f64)> for IPoint {
    fn from((x, y): (f64, f64)) -> Self {
        IPoint::new(x, y)
    }
}

impl TryFrom<&[f64]> for IPoint {
    type Error = PointError;
    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        Ok(IPoint::from(pair_from_slice(value)?))
    }
}

impl From<&Point> for IPoint {
    fn from(value: &Point) -> Self {
        IPoint::new(value.x(), value.y())
    }
}

#[cfg(test)]
mod test_ipoint {
    use super::*;
    use crate::point_model::cache::{CacheKey, Derived};
    use crate::point_model::sealed::Sealed;
    use std::f64::consts::FRAC_PI_3;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_construction_forms() {
        let a = IPoint::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);
        let seq: &[f64] = &[-1.0, 0.5];
        assert_eq!(IPoint::zero().to_array(), [0.0, 0.0]);
        assert_eq!(IPoint::from([-1.0, 0.5]).to_array(), [-1.0, 0.5]);
        assert_eq!(IPoint::try_from(seq).unwrap().to_array(), [-1.0, 0.5]);
        assert_eq!(
            IPoint::from_input(PointInput::alg(|p| p.v(&a) + p.v(&b))).to_array(),
            [4.0, 6.0]
        );
        assert_eq!(IPoint::from_input(PointInput::pair(2.0, 3.0)), IPoint::new(2.0, 3.0));
    }

    #[test]
    fn test_cache_is_permanent() {
        let p = IPoint::new(3.0, 4.0);
        assert_eq!(p.cached_len(), 0);
        assert_eq!(p.length(), 5.0);
        let populated = p.cached_len();
        assert!(populated >= 3);
        assert_eq!(p.length(), 5.0);
        assert_eq!(p.length_squared(), 25.0);
        assert_eq!(p.cached_len(), populated);
    }

    #[test]
    fn test_cached_values_match_components() {
        let p = IPoint::new(3.0, -4.0);
        let others = [IPoint::new(1.0, 0.0), IPoint::new(-2.5, 7.0), IPoint::zero()];
        p.value_of();
        p.polar_angle();
        p.to_array();
        p.normalize();
        p.rotate(FRAC_PI_3);
        for o in &others {
            p.dot(o);
            p.distance(o);
            p.angle_to(o);
        }

        let entries = p.derived().entries();
        // length_squared goes through dot(self), one more argument entry
        assert_eq!(entries.len(), 6 + 3 * others.len());
        // every entry must equal what a point with no history computes
        let fresh = || IPoint::new(p.x(), p.y());
        for (key, value) in entries {
            let expected = match key {
                CacheKey::Length => Derived::Scalar(fresh().length()),
                CacheKey::LengthSquared => Derived::Scalar(fresh().length_squared()),
                CacheKey::ValueOf => Derived::Scalar(fresh().value_of()),
                CacheKey::PolarAngle => Derived::Scalar(fresh().polar_angle()),
                CacheKey::ToArray => Derived::Pair([p.x(), p.y()]),
                CacheKey::Dot(arg) => {
                    let (x, y) = arg.components();
                    Derived::Scalar(fresh().dot(&IPoint::new(x, y)))
                }
                CacheKey::Distance(arg) => {
                    let (x, y) = arg.components();
                    Derived::Scalar(fresh().distance(&IPoint::new(x, y)))
                }
                CacheKey::AngleTo(arg) => {
                    let (x, y) = arg.components();
                    Derived::Scalar(fresh().angle_to(&IPoint::new(x, y)))
                }
            };
            assert_eq!(value, expected, "{:?}", key);
        }
    }

    #[test]
    fn test_to_point_is_independent() {
        let frozen = IPoint::new(3.0, 4.0);
        assert_eq!(frozen.length(), 5.0);
        let mut copy = frozen.to_point();
        assert_eq!(copy, frozen);
        copy.set_y(0.0);
        assert_eq!(copy.length(), 3.0);
        assert_eq!(frozen.length(), 5.0);
        assert_eq!(frozen.y(), 4.0);
    }

    #[test]
    fn test_shared_across_threads() {
        let shared = Arc::new(IPoint::new(6.0, 8.0));
        let handles = (0..4)
            .map(|_| {
                let p = Arc::clone(&shared);
                thread::spawn(move || (p.length(), p.polar_angle()))
            })
            .collect::<Vec<_>>();
        for h in handles {
            let (length, _) = h.join().unwrap();
            assert_eq!(length, 10.0);
        }
    }
}
