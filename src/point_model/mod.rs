//! Point types and the algebra shared by them

mod axis;
mod cache;
mod input;
mod ipoint;
mod point;
mod storage;
mod vector;

pub use self::axis::*;
pub use self::input::*;
pub use self::ipoint::*;
pub use self::point::*;
pub use self::vector::*;

use self::input::pair_from_slice;

pub(crate) mod sealed {
    use super::cache::DerivedCache;

    /// Gives the algebra access to a point's cache without exposing it
    ///
    /// Unreachable from outside the crate, so only [`Point`](super::Point)
    /// and [`IPoint`](super::IPoint) can implement `Vector2`.
    pub trait Sealed {
        fn derived(&self) -> &DerivedCache;
    }
}
