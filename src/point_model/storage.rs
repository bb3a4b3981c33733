use super::Axis;

const X: usize = 0;
const Y: usize = 1;

/// The two components owned by one point instance
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(crate) struct AxisStorage([f64; 2]);

impl AxisStorage {
    pub(crate) fn new(x: f64, y: f64) -> Self {
        AxisStorage([x, y])
    }

    #[inline]
    pub(crate) fn x(&self) -> f64 {
        self.0[X]
    }

    #[inline]
    pub(crate) fn y(&self) -> f64 {
        self.0[Y]
    }

    pub(crate) fn set(&mut self, axis: Axis, v: f64) {
        match axis {
            Axis::X => self.0[X] = v,
            Axis::Y => self.0[Y] = v,
        }
    }
}
