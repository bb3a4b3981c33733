//! 2D point and vector algebra
//!
//! Mutable [`Point`](point_model::Point) and immutable
//! [`IPoint`](point_model::IPoint) share one read-only algebra through the
//! [`Vector2`](point_model::Vector2) trait, with derived values cached per
//! instance.
//!
//! New points can be computed from a single scalar expression over point
//! operands, evaluated once per axis
//!
//! ```
//! use planepoint::point_model::*;
//!
//! let a = Point::new(1.0, 2.0);
//! let b = IPoint::new(3.0, 4.0);
//! let mid = calc(|p| (p.v(&a) + p.v(&b)) / 2.0);
//! assert_eq!(mid.to_array(), [2.0, 3.0]);
//! ```
//!
//! Or share immutable points for recurring inputs through the factory
//!
//! ```
//! use planepoint::point_factory::{ipoint, ZERO};
//! use planepoint::point_model::PointInput;
//! use std::sync::Arc;
//!
//! assert!(Arc::ptr_eq(&*ZERO, &ipoint(PointInput::pair(0.0, 0.0))));
//! ```

#[macro_use]
pub mod point_error;
pub mod angle;
pub mod formatter;
pub mod point_factory;
pub mod point_model;

pub use angle::{normalize_angle, Degree, Radians};
pub use formatter::format_number;
pub use point_error::{PointError, PointErrorKind};
pub use point_factory::{default_factory, ipoint, PointFactory, FORWARD, LEFT, ZERO};
pub use point_model::{calc, Axis, AxisContext, IPoint, Point, PointInput, Vector2};
