//! Canonicalizing factory for immutable points
//!
//! A recurring construction input gives back the instance built the first
//! time. The pool key is the call shape plus the literal numbers supplied, so
//! `Zero` and `Pair(0, 0)` are two different entries even though they yield
//! equal points. Mutable points are never pooled.

use lazy_static::lazy_static;
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::point_model::{calc_axes, try_calc_axes, AxisContext, IPoint, PointInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FactoryKey {
    Zero,
    Pair(u64, u64),
    Array(u64, u64),
    // closures carry no comparable identity, keyed by what they evaluate to
    Alg(u64, u64),
}

impl FactoryKey {
    fn bits(shape: fn(u64, u64) -> FactoryKey, x: f64, y: f64) -> Self {
        shape(x.to_bits(), y.to_bits())
    }
}

#[derive(Debug, Default)]
pub struct PointFactory {
    pool: Mutex<HashMap<FactoryKey, Arc<IPoint>>>,
}

impl PointFactory {
    pub fn new() -> Self {
        PointFactory::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PointFactory {
            pool: Mutex::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Shared immutable point for `input`, built and pooled on first request
    pub fn ipoint<F>(&self, input: PointInput<F>) -> Arc<IPoint>
    where
        F: Fn(&AxisContext) -> f64,
    {
        match input {
            PointInput::Zero => self.intern(FactoryKey::Zero, IPoint::zero),
            PointInput::Pair(x, y) => {
                self.intern(FactoryKey::bits(FactoryKey::Pair, x, y), || IPoint::new(x, y))
            }
            PointInput::Array(arr) => {
                let [x, y] = arr;
                self.intern(FactoryKey::bits(FactoryKey::Array, x, y), || IPoint::from(arr))
            }
            PointInput::Alg(alg) => {
                let [x, y] = calc_axes(alg);
                self.intern(FactoryKey::bits(FactoryKey::Alg, x, y), || IPoint::new(x, y))
            }
        }
    }

    /// Pooled point from a fallible algebra expression, nothing is pooled on error
    pub fn try_ipoint_alg<F, E>(&self, alg: F) -> Result<Arc<IPoint>, E>
    where
        F: Fn(&AxisContext) -> Result<f64, E>,
    {
        let [x, y] = try_calc_axes(alg)?;
        Ok(self.intern(FactoryKey::bits(FactoryKey::Alg, x, y), || IPoint::new(x, y)))
    }

    /// Number of pooled instances
    pub fn len(&self) -> usize {
        self.pool().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn intern<M: FnOnce() -> IPoint>(&self, key: FactoryKey, make: M) -> Arc<IPoint> {
        let mut pool = self.pool();
        let entry = pool.entry(key).or_insert_with(|| {
            debug!("pool new ipoint for {:?}", key);
            Arc::new(make())
        });
        Arc::clone(entry)
    }

    // pooled points are never mutated, a poisoned lock still holds a valid map
    fn pool(&self) -> MutexGuard<'_, HashMap<FactoryKey, Arc<IPoint>>> {
        self.pool.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// use lazy_static initialize the process wide factory and named points
lazy_static! {
    static ref DEFAULT_FACTORY: PointFactory = PointFactory::new();
    /// `(0, 0)`
    pub static ref ZERO: Arc<IPoint> = ipoint(PointInput::pair(0.0, 0.0));
    /// unit vector pointing forward, `(0, -1)`
    pub static ref FORWARD: Arc<IPoint> = ipoint(PointInput::pair(0.0, -1.0));
    /// unit vector pointing left, `(-1, 0)`
    pub static ref LEFT: Arc<IPoint> = ipoint(PointInput::pair(-1.0, 0.0));
}

pub fn default_factory() -> &'static PointFactory {
    &DEFAULT_FACTORY
}

/// Shared immutable point from the process wide factory
pub fn ipoint<F>(input: PointInput<F>) -> Arc<IPoint>
where
    F: Fn(&AxisContext) -> f64,
{
    default_factory().ipoint(input)
}

#[cfg(test)]
mod test_point_factory {
    use super::*;
    use crate::point_model::{Point, Vector2};
    use float_cmp::ApproxEq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_same_input_same_instance() {
        let _ = env_logger::builder().is_test(true).try_init();
        let factory = PointFactory::new();
        let a = factory.ipoint(PointInput::zero());
        let b = factory.ipoint(PointInput::zero());
        assert!(Arc::ptr_eq(&a, &b));

        let c = factory.ipoint(PointInput::pair(1.0, 2.0));
        let d = factory.ipoint(PointInput::pair(1.0, 2.0));
        assert!(Arc::ptr_eq(&c, &d));

        let e = factory.ipoint(PointInput::array([1.0, 2.0]));
        let f = factory.ipoint(PointInput::array([1.0, 2.0]));
        assert!(Arc::ptr_eq(&e, &f));
        assert_eq!(factory.len(), 3);
    }

    #[test]
    fn test_call_shape_is_part_of_key() {
        let factory = PointFactory::new();
        let zero = factory.ipoint(PointInput::zero());
        let pair = factory.ipoint(PointInput::pair(0.0, 0.0));
        let arr = factory.ipoint(PointInput::array([0.0, 0.0]));
        assert_eq!(*zero, *pair);
        assert_eq!(*pair, *arr);
        assert!(!Arc::ptr_eq(&zero, &pair));
        assert!(!Arc::ptr_eq(&pair, &arr));
        // -0.0 is a different literal
        let neg = factory.ipoint(PointInput::pair(-0.0, 0.0));
        assert!(!Arc::ptr_eq(&pair, &neg));
        assert_eq!(factory.len(), 4);
    }

    #[test]
    fn test_alg_input_pooled_by_result() {
        let factory = PointFactory::new();
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);
        let first = factory.ipoint(PointInput::alg(|p| p.v(&a) + p.v(&b)));
        let second = factory.ipoint(PointInput::alg(|p| p.v(&b) + p.v(&a)));
        assert_eq!(first.to_array(), [4.0, 6.0]);
        assert!(Arc::ptr_eq(&first, &second));

        let failed: Result<Arc<IPoint>, &str> = factory.try_ipoint_alg(|_| Err("bad"));
        assert_eq!(failed.unwrap_err(), "bad");
        assert_eq!(factory.len(), 1);
        let ok: Result<Arc<IPoint>, &str> = factory.try_ipoint_alg(|p| Ok(p.v(&a) + p.v(&b)));
        assert!(Arc::ptr_eq(&ok.unwrap(), &first));
    }

    #[test]
    fn test_pooled_cache_shared() {
        let factory = PointFactory::with_capacity(4);
        let a = factory.ipoint(PointInput::pair(3.0, 4.0));
        assert_eq!(a.length(), 5.0);
        let b = factory.ipoint(PointInput::pair(3.0, 4.0));
        assert!(b.cached_len() > 0);
        assert_eq!(b.length(), 5.0);
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(ZERO.to_array(), [0.0, 0.0]);
        assert_eq!(FORWARD.to_array(), [0.0, -1.0]);
        assert_eq!(LEFT.to_array(), [-1.0, 0.0]);
        assert_eq!(FORWARD.length(), 1.0);
        assert!(Arc::ptr_eq(&*ZERO, &ipoint(PointInput::pair(0.0, 0.0))));
        assert!(Arc::ptr_eq(&*LEFT, &Point::new(-1.0, 0.0).to_ipoint()));
        // from heading left to heading forward is a quarter turn
        let quarter = FORWARD.angle_to(&**LEFT);
        assert!(FRAC_PI_2.approx_eq(quarter, (1e-12, 4)));
    }

    #[test]
    fn test_default_factory_consistent() {
        let a = ipoint(PointInput::zero());
        let b = ipoint(PointInput::zero());
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!default_factory().is_empty());
    }
}
