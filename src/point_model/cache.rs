//! Per-instance memoization of derived quantities
//!
//! Every entry is a pure function of the owning point's current components.
//! The owner must call [`DerivedCache::invalidate`] on every component write;
//! immutable owners never do, so their entries live as long as they do.
//!
//! Nothing outside this crate can reach a cache: the type is not exported and
//! only the point types hand it out, through a sealed trait.

use log::{debug, trace};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Structural identity of an argument point: the bit patterns of its components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgKey(u64, u64);

impl ArgKey {
    pub(crate) fn new(x: f64, y: f64) -> Self {
        ArgKey(x.to_bits(), y.to_bits())
    }

    #[cfg(test)]
    pub(crate) fn components(&self) -> (f64, f64) {
        (f64::from_bits(self.0), f64::from_bits(self.1))
    }
}

/// Identifies one cached quantity
///
/// Operations taking another point carry that point's [`ArgKey`], so
/// `a.dot(b)` and `a.dot(c)` never share a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Length,
    LengthSquared,
    ValueOf,
    PolarAngle,
    ToArray,
    Dot(ArgKey),
    Distance(ArgKey),
    AngleTo(ArgKey),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Derived {
    Scalar(f64),
    Pair([f64; 2]),
}

#[derive(Debug, Default)]
pub struct DerivedCache {
    slots: Mutex<HashMap<CacheKey, Derived>>,
}

impl DerivedCache {
    pub(crate) fn new() -> Self {
        DerivedCache::default()
    }

    /// Return the cached scalar under `key`, computing and storing it on a miss
    pub(crate) fn scalar<F: FnOnce() -> f64>(&self, key: CacheKey, compute: F) -> f64 {
        if let Some(Derived::Scalar(v)) = self.lookup(&key) {
            return v;
        }
        trace!("derived cache miss: {:?}", key);
        // computed without the lock held, derived values build on each other
        let v = compute();
        self.slots().insert(key, Derived::Scalar(v));
        v
    }

    /// Return the cached pair under `key`, computing and storing it on a miss
    pub(crate) fn pair<F: FnOnce() -> [f64; 2]>(&self, key: CacheKey, compute: F) -> [f64; 2] {
        if let Some(Derived::Pair(v)) = self.lookup(&key) {
            return v;
        }
        trace!("derived cache miss: {:?}", key);
        let v = compute();
        self.slots().insert(key, Derived::Pair(v));
        v
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots().len()
    }

    /// Copy of every entry, to check them against their owner
    #[cfg(test)]
    pub(crate) fn entries(&self) -> Vec<(CacheKey, Derived)> {
        self.slots().iter().map(|(k, v)| (*k, *v)).collect()
    }

    /// Drop every entry
    ///
    /// Takes `&mut self`: a component write holds the owner mutably, so no
    /// reader can observe the cache between the write and this call.
    pub(crate) fn invalidate(&mut self) {
        let slots = self
            .slots
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if !slots.is_empty() {
            debug!("invalidate {} derived values", slots.len());
            slots.clear();
        }
    }

    fn lookup(&self, key: &CacheKey) -> Option<Derived> {
        self.slots().get(key).copied()
    }

    // entries are recomputable, a poisoned lock still holds usable data
    fn slots(&self) -> MutexGuard<'_, HashMap<CacheKey, Derived>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
