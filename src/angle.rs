//! angle helpers: normalization into `[0, 2π)` and the degree wrapper

use std::f64::consts::{PI, TAU};
use std::fmt::{Display, Formatter};

/// Map any finite angle in radians into `[0, 2π)`
///
/// Idempotent on its own output range. Non-finite input yields `NaN`.
pub fn normalize_angle(rad: f64) -> f64 {
    let wrapped = rad.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative input
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// An angle measured in radians, the unit every rotation works in
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Radians(pub f64);

impl Radians {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Radians {
    fn from(rad: f64) -> Self {
        Radians(rad)
    }
}

impl From<Radians> for f64 {
    fn from(rad: Radians) -> Self {
        rad.0
    }
}

/// An angle measured in degrees, counterclockwise
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Degree(pub f64);

impl Degree {
    pub fn new(deg: f64) -> Self {
        Degree(deg)
    }

    pub fn from_radians(rad: f64) -> Self {
        Degree(rad * 180.0 / PI)
    }

    pub fn to_radians(self) -> f64 {
        self.0 * PI / 180.0
    }
}

impl From<Degree> for Radians {
    fn from(deg: Degree) -> Self {
        Radians(deg.to_radians())
    }
}

impl Display for Degree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", crate::formatter::format_number(self.0))
    }
}
