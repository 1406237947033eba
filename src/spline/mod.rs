//! Sampling of _n_-dimensional data at fractional coordinates
//! with a cubic B-spline interpolant.
//!
//! [`SplineSampler`] prefilters the data once along every axis and then
//! evaluates the separable cubic B-spline kernel (4 taps per axis) at each
//! requested coordinate tuple. The interpolant passes through all samples.
//!
//! ```rust
//! # use ndarray::*;
//! # use ndarray_resample::spline::*;
//! # use approx::*;
//! let data = array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]];
//! let sampler = SplineSampler::new(&data).unwrap();
//!
//! // sample the two rows at their middle column
//! let rows = array![0.0, 1.0];
//! let cols = array![1.0, 1.0];
//! let result = sampler.sample(&[rows, cols]).unwrap();
//! # assert_abs_diff_eq!(result, array![1.0, 4.0], epsilon=1e-12);
//! ```
use std::fmt::Debug;

use ndarray::{Array, ArrayBase, ArrayD, Axis, Data, Dimension};
use num_traits::{cast, Float};

use crate::{BuilderError, InterpolateError, ResampleError};

mod filter;

/// How coordinates outside of `[0, len - 1]` are evaluated
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplineBoundary<F> {
    /// Clamp the coordinate onto the first or last sample
    Nearest,
    /// Evaluate the mirror-symmetric continuation of the data
    Mirror,
    /// Return the constant for any point outside of the data
    Constant(F),
}

impl<F> Default for SplineBoundary<F> {
    fn default() -> Self {
        SplineBoundary::Nearest
    }
}

/// Cubic B-spline sampler for data of any dimension
#[derive(Debug, Clone)]
pub struct SplineSampler<F> {
    coefficients: ArrayD<F>,
    boundary: SplineBoundary<F>,
}

impl<F> SplineSampler<F>
where
    F: Float + Debug,
{
    /// Prefilter `data` and create the sampler.
    ///
    /// # Errors
    ///  - [`BuilderError::ShapeError`] when the data has no axes
    ///  - [`BuilderError::NotEnoughData`] when an axis of the data is empty
    pub fn new<S, D>(data: &ArrayBase<S, D>) -> Result<Self, BuilderError>
    where
        S: Data<Elem = F>,
        D: Dimension,
    {
        if data.ndim() < 1 {
            return Err(BuilderError::ShapeError(
                "data dimension is 0, needs to be at least 1".into(),
            ));
        }
        if let Some(axis) = data.shape().iter().position(|&len| len == 0) {
            return Err(BuilderError::NotEnoughData(format!(
                "axis {axis} of the data is empty"
            )));
        }

        log::debug!("prefiltering spline coefficients of shape {:?}", data.shape());
        let mut coefficients = data.to_owned().into_dyn();
        for axis in 0..coefficients.ndim() {
            for lane in coefficients.lanes_mut(Axis(axis)) {
                filter::prefilter_lane(lane);
            }
        }

        Ok(SplineSampler {
            coefficients,
            boundary: SplineBoundary::default(),
        })
    }

    /// Set the boundary handling, default is [`SplineBoundary::Nearest`]
    pub fn boundary(mut self, boundary: SplineBoundary<F>) -> Self {
        self.boundary = boundary;
        self
    }

    /// The B-spline coefficients of the data
    pub fn coefficients(&self) -> &ArrayD<F> {
        &self.coefficients
    }

    /// Sample the spline at every coordinate tuple.
    ///
    /// `coords` holds one array per data axis, all of the same shape.
    /// The result has that shape, its entry at some index is the spline
    /// evaluated at the coordinates found at that index.
    ///
    /// # Errors
    /// [`InterpolateError::InvalidArguments`] when the number of coordinate arrays
    /// does not match the data dimension or the coordinate arrays differ in shape.
    pub fn sample<Sc, Dc>(&self, coords: &[ArrayBase<Sc, Dc>]) -> Result<Array<F, Dc>, InterpolateError>
    where
        Sc: Data<Elem = F>,
        Dc: Dimension,
    {
        let ndim = self.coefficients.ndim();
        if coords.len() != ndim {
            return Err(InterpolateError::InvalidArguments(format!(
                "expected {ndim} coordinate arrays, got {}",
                coords.len()
            )));
        }
        let dim = coords[0].raw_dim();
        if coords.iter().any(|c| c.raw_dim() != dim) {
            return Err(InterpolateError::InvalidArguments(
                "all coordinate arrays need the same shape".into(),
            ));
        }

        let mut result = Array::zeros(dim);
        let mut iters: Vec<_> = coords.iter().map(|c| c.iter()).collect();
        let mut point = vec![F::zero(); ndim];
        for value in result.iter_mut() {
            for (p, iter) in point.iter_mut().zip(iters.iter_mut()) {
                *p = *iter.next().unwrap_or_else(|| unreachable!());
            }
            *value = self.evaluate(&point);
        }
        Ok(result)
    }

    /// Sample the spline at a single point
    pub fn sample_point(&self, point: &[F]) -> Result<F, InterpolateError> {
        if point.len() != self.coefficients.ndim() {
            return Err(InterpolateError::InvalidArguments(format!(
                "expected a point with {} coordinates, got {}",
                self.coefficients.ndim(),
                point.len()
            )));
        }
        Ok(self.evaluate(point))
    }

    fn evaluate(&self, point: &[F]) -> F {
        let shape = self.coefficients.shape();
        let mut taps = Vec::with_capacity(shape.len());
        for (&x, &len) in point.iter().zip(shape) {
            let last: F = cast(len - 1).unwrap_or_else(|| unimplemented!());
            let x = match self.boundary {
                SplineBoundary::Nearest => x.max(F::zero()).min(last),
                SplineBoundary::Mirror => x,
                SplineBoundary::Constant(cval) => {
                    if !(x >= F::zero() && x <= last) {
                        return cval;
                    }
                    x
                }
            };
            taps.push(filter::taps(x, len));
        }

        // walk all 4^n combinations of taps
        let mut counter = vec![0usize; shape.len()];
        let mut index = vec![0usize; shape.len()];
        let mut sum = F::zero();
        loop {
            let mut weight = F::one();
            for (axis, &n) in counter.iter().enumerate() {
                index[axis] = taps[axis].0[n];
                weight = weight * taps[axis].1[n];
            }
            sum = sum + weight * self.coefficients[index.as_slice()];

            let mut axis = counter.len();
            loop {
                if axis == 0 {
                    return sum;
                }
                axis -= 1;
                counter[axis] += 1;
                if counter[axis] < 4 {
                    break;
                }
                counter[axis] = 0;
            }
        }
    }
}

/// Sample `data` at the fractional coordinates `coords` with a cubic B-spline.
///
/// Shortcut for [`SplineSampler::new`] followed by [`SplineSampler::sample`].
pub fn map_coordinates<S, D, Sc, Dc, F>(
    data: &ArrayBase<S, D>,
    coords: &[ArrayBase<Sc, Dc>],
    boundary: SplineBoundary<F>,
) -> Result<Array<F, Dc>, ResampleError>
where
    S: Data<Elem = F>,
    D: Dimension,
    Sc: Data<Elem = F>,
    Dc: Dimension,
    F: Float + Debug,
{
    let sampler = SplineSampler::new(data)?.boundary(boundary);
    Ok(sampler.sample(coords)?)
}
