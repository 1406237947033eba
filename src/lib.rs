//! The ndarray-resample crate resamples _n_-dimensional arrays
//! onto grids of a different shape.
//!
//! [`resample()`] is the entry point. It maps every target index onto a
//! fractional source coordinate (see [`coordinates`]) and evaluates one of
//! the [`Method`]s there:
//!  - [`Method::Neighbour`] copies the jointly rounded source sample
//!  - [`Method::Nearest`] and [`Method::Linear`] run successive 1-D
//!    interpolations with [`interp1d::Interp1D`], one axis at a time
//!  - [`Method::Spline`] samples a cubic B-spline with [`spline::SplineSampler`]
//!
//! ```rust
//! # use ndarray::*;
//! # use ndarray_resample::*;
//! # use approx::*;
//! let source = array![0.0, 10.0, 20.0, 30.0];
//! let result = resample(&source, &[7], Method::Linear, false, true).unwrap();
//! # assert_abs_diff_eq!(result, array![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0], epsilon=1e-12);
//! ```
//!
//! The [`rebin`] module adds the plain index-picking and block-averaging
//! variants.
use thiserror::Error;

pub mod coordinates;
pub mod dim_extensions;
pub mod interp1d;
pub mod rebin;
mod resample;
pub mod spline;
pub mod vector_extensions;

pub use resample::*;

/// Errors during construction of an interpolator or sampler
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Insufficient data for the chosen interpolation strategy
    #[error("{0}")]
    NotEnoughData(String),
    /// A interpolation axis is not strict monotonic rising
    #[error("{0}")]
    Monotonic(String),
    #[error("{0}")]
    ShapeError(String),
    #[error("{0}")]
    AxisLenght(String),
}

/// Errors during interpolation
#[derive(Debug, Error)]
pub enum InterpolateError {
    #[error("{0}")]
    OutOfBounds(String),
    #[error("{0}")]
    InvalidArguments(String),
}

/// Errors returned by [`resample()`], [`Resampler`] and the [`rebin`] functions
#[derive(Debug, Error)]
pub enum ResampleError {
    /// The rank of the target shape differs from the rank of the source
    #[error("{0}")]
    ShapeMismatch(String),
    /// A target (or source) extent can not be mapped
    #[error("{0}")]
    InvalidShape(String),
    #[error("unsupported resampling method `{0}`")]
    UnsupportedMethod(String),
    /// A mapped coordinate is further outside the source than the tolerated overshoot
    #[error("{0}")]
    OutOfDomain(String),
    #[error(transparent)]
    Builder(#[from] BuilderError),
    #[error(transparent)]
    Interpolate(#[from] InterpolateError),
}
