//! point error type

use std::error::Error;
use std::fmt::{Display, Formatter};

/// What kind of contract a caller broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointErrorKind {
    /// operation deliberately not provided, e.g. the third axis of a 2D point
    NotImplemented,
    /// a runtime sequence that does not hold exactly two components
    InvalidSequence,
}

impl Display for PointErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PointErrorKind::NotImplemented => write!(f, "NotImplemented"),
            PointErrorKind::InvalidSequence => write!(f, "InvalidSequence"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointError {
    kind: PointErrorKind,
    err: String,
}

impl PointError {
    pub fn new(kind: PointErrorKind, err: &str) -> PointError {
        PointError {
            kind,
            err: err.to_string(),
        }
    }

    pub fn kind(&self) -> PointErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.err
    }
}

impl Display for PointError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[PointError] {}: {}", self.kind, self.err)
    }
}

impl Error for PointError {}

#[macro_export]
macro_rules! point_err {
    ( $kind:ident, $x:expr ) => {{
        $crate::point_error::PointError::new(
            $crate::point_error::PointErrorKind::$kind,
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}

#[cfg(test)]
mod test_point_error {
    use super::*;

    #[test]
    fn test_point_err_macro() {
        let err = point_err!(NotImplemented, "get z() not implemented");
        assert_eq!(err.kind(), PointErrorKind::NotImplemented);
        assert!(err.message().contains("point_error.rs"));
        assert!(err.message().ends_with("get z() not implemented"));
        assert!(err
            .to_string()
            .starts_with("[PointError] NotImplemented: "));
    }
}
