use std::{fmt, str::FromStr};

use crate::ResampleError;

/// The resampling strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Copy the source sample found by rounding all coordinates at once.
    /// No new values are created.
    Neighbour,
    /// One nearest-sample pass per axis
    Nearest,
    /// One linear interpolation pass per axis
    #[default]
    Linear,
    /// Cubic B-spline sampled at the joint coordinate grid
    Spline,
}

impl Method {
    /// All methods, in the order they are documented
    pub const ALL: [Method; 4] = [
        Method::Neighbour,
        Method::Nearest,
        Method::Linear,
        Method::Spline,
    ];

    /// The name used by [`FromStr`] and [`Display`](fmt::Display)
    pub fn name(&self) -> &'static str {
        match self {
            Method::Neighbour => "neighbour",
            Method::Nearest => "nearest",
            Method::Linear => "linear",
            Method::Spline => "spline",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ResampleError;

    /// ```rust
    /// # use ndarray_resample::*;
    /// let method: Method = "spline".parse().unwrap();
    /// # assert_eq!(method, Method::Spline);
    /// assert!(matches!(
    ///     "bicubic".parse::<Method>(),
    ///     Err(ResampleError::UnsupportedMethod(_))
    /// ));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| ResampleError::UnsupportedMethod(s.into()))
    }
}
