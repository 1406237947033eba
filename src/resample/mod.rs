//! The resampler and its configuration
//!
//!  - [`resample()`] resample with a single call
//!  - [`Resampler`] a validated resampling configuration, reusable for many arrays
//!  - [`ResamplerBuilder`] configure the resampler
//!  - [`Method`] the resampling strategy
use std::fmt::Debug;

use ndarray::{Array, ArrayBase, Data, RemoveAxis};
use num_traits::{cast, Float, NumCast};

use crate::{dim_extensions::DimExtension, ResampleError};

mod joint;
mod method;
mod neighbour;
mod separable;

pub use method::Method;

/// Element types the interpolating methods work on
pub trait ResampleNum: Float + Debug + Send + Sync + 'static {}

impl<T> ResampleNum for T where T: Float + Debug + Send + Sync + 'static {}

/// Resample `source` to `target_shape`.
///
/// `centre` places the samples at the bin centres instead of the leading bin edges,
/// `minusone` maps the first and last target sample exactly onto the first and last
/// source sample. See [`coordinates`](crate::coordinates) for the mapping.
///
/// ```rust
/// # use ndarray::*;
/// # use ndarray_resample::*;
/// let source = array![[0.0, 1.0], [2.0, 3.0]];
/// let result = resample(&source, &[4, 4], Method::Neighbour, false, false).unwrap();
/// # assert_eq!(result, array![
/// #     [0.0, 1.0, 1.0, 1.0],
/// #     [2.0, 3.0, 3.0, 3.0],
/// #     [2.0, 3.0, 3.0, 3.0],
/// #     [2.0, 3.0, 3.0, 3.0],
/// # ]);
/// assert!(result.iter().all(|v| source.iter().any(|s| s == v)));
/// ```
///
/// Only float elements are accepted here. Integer images go through a
/// [`Resampler`]: [`resample_cast`](Resampler::resample_cast) converts to a float
/// type first and works with every method, [`resample_neighbour`](Resampler::resample_neighbour)
/// keeps the element type.
///
/// ```rust
/// # use ndarray::*;
/// # use ndarray_resample::*;
/// let image = array![[0u8, 100], [200, 255]];
/// let resampler = Resampler::builder([3, 3]).minusone(true).build().unwrap();
/// let smooth = resampler.resample_cast::<f32, _, _>(&image).unwrap();
/// # assert_eq!(smooth, array![[0.0, 50.0, 100.0], [100.0, 138.75, 177.5], [200.0, 227.5, 255.0]]);
/// let blocky = resampler.resample_neighbour(&image).unwrap();
/// # assert_eq!(blocky, array![[0u8, 100, 100], [200, 255, 255], [200, 255, 255]]);
/// ```
///
/// # Errors
///  - [`ResampleError::ShapeMismatch`] when `target_shape` has a different rank than `source`
///  - [`ResampleError::InvalidShape`] when a target extent is `0`, or `1` with `minusone`
pub fn resample<S, D>(
    source: &ArrayBase<S, D>,
    target_shape: &[usize],
    method: Method,
    centre: bool,
    minusone: bool,
) -> Result<Array<S::Elem, D>, ResampleError>
where
    S: Data,
    S::Elem: ResampleNum,
    D: DimExtension + RemoveAxis,
{
    Resampler::builder(target_shape)
        .method(method)
        .centre(centre)
        .minusone(minusone)
        .build()?
        .resample(source)
}

/// A validated resampling configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Resampler {
    shape: Vec<usize>,
    method: Method,
    centre: bool,
    minusone: bool,
}

impl Resampler {
    /// Get the [`ResamplerBuilder`]
    pub fn builder(shape: impl Into<Vec<usize>>) -> ResamplerBuilder {
        ResamplerBuilder::new(shape)
    }

    /// The target shape
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn centre(&self) -> bool {
        self.centre
    }

    pub fn minusone(&self) -> bool {
        self.minusone
    }

    /// Resample a floating point array with the configured method.
    ///
    /// ```rust
    /// # use ndarray::*;
    /// # use ndarray_resample::*;
    /// # use approx::*;
    /// let resampler = Resampler::builder([2, 3])
    ///     .method(Method::Linear)
    ///     .minusone(true)
    ///     .build()
    ///     .unwrap();
    /// let source = array![[0.0, 2.0, 4.0, 6.0, 8.0], [1.0, 3.0, 5.0, 7.0, 9.0]];
    /// let result = resampler.resample(&source).unwrap();
    /// # assert_abs_diff_eq!(result, array![[0.0, 4.0, 8.0], [1.0, 5.0, 9.0]], epsilon=1e-12);
    /// ```
    pub fn resample<S, D>(&self, source: &ArrayBase<S, D>) -> Result<Array<S::Elem, D>, ResampleError>
    where
        S: Data,
        S::Elem: ResampleNum,
        D: DimExtension + RemoveAxis,
    {
        let target = self.target_dim(source)?;
        log::trace!(
            "resampling {:?} -> {:?} with {} (centre: {}, minusone: {})",
            source.shape(),
            self.shape,
            self.method,
            self.centre,
            self.minusone
        );

        match self.method {
            Method::Neighbour => neighbour::resample(source, target, self.centre, self.minusone),
            Method::Nearest => separable::resample(
                source,
                &target,
                separable::Pass::Nearest,
                self.centre,
                self.minusone,
            ),
            Method::Linear => separable::resample(
                source,
                &target,
                separable::Pass::Linear,
                self.centre,
                self.minusone,
            ),
            Method::Spline => joint::resample(source, &target, self.centre, self.minusone),
        }
    }

    /// Cast every element to the float type `F`, then [`resample`](Resampler::resample).
    ///
    /// This is the way to resample integer data with an interpolating method.
    /// Values that `F` can not represent become `NaN`.
    ///
    /// ```rust
    /// # use ndarray::*;
    /// # use ndarray_resample::*;
    /// let resampler = Resampler::builder([3]).minusone(true).build().unwrap();
    /// let result = resampler.resample_cast::<f32, _, _>(&array![0u8, 255]).unwrap();
    /// # assert_eq!(result, array![0.0, 127.5, 255.0]);
    /// ```
    pub fn resample_cast<F, S, D>(&self, source: &ArrayBase<S, D>) -> Result<Array<F, D>, ResampleError>
    where
        F: ResampleNum,
        S: Data,
        S::Elem: NumCast + Copy,
        D: DimExtension + RemoveAxis,
    {
        let source = source.mapv(|v| cast(v).unwrap_or_else(F::nan));
        self.resample(&source)
    }

    /// Resample with [`Method::Neighbour`] regardless of the configured method.
    ///
    /// Works for any element type, the result contains only copies of source elements.
    ///
    /// ```rust
    /// # use ndarray::*;
    /// # use ndarray_resample::*;
    /// let resampler = Resampler::builder([2, 2]).build().unwrap();
    /// let source = array![["a", "b", "c"], ["d", "e", "f"], ["g", "h", "i"]];
    /// let result = resampler.resample_neighbour(&source).unwrap();
    /// # assert_eq!(result, array![["a", "c"], ["g", "i"]]);
    /// ```
    pub fn resample_neighbour<S, D>(
        &self,
        source: &ArrayBase<S, D>,
    ) -> Result<Array<S::Elem, D>, ResampleError>
    where
        S: Data,
        S::Elem: Clone,
        D: DimExtension,
    {
        let target = self.target_dim(source)?;
        neighbour::resample(source, target, self.centre, self.minusone)
    }

    fn target_dim<S, D>(&self, source: &ArrayBase<S, D>) -> Result<D, ResampleError>
    where
        S: Data,
        D: DimExtension,
    {
        let mismatch = || {
            ResampleError::ShapeMismatch(format!(
                "can not resample an array of shape {:?} to {:?}, the number of dimensions must match",
                source.shape(),
                self.shape
            ))
        };
        if self.shape.len() != source.ndim() {
            return Err(mismatch());
        }
        D::try_new(&self.shape).ok_or_else(mismatch)
    }
}

/// Create and configure a [`Resampler`].
///
/// # Default configuration
/// [`Method::Linear`] with `centre` and `minusone` both `false`.
#[derive(Debug, Clone)]
pub struct ResamplerBuilder {
    shape: Vec<usize>,
    method: Method,
    centre: bool,
    minusone: bool,
}

impl ResamplerBuilder {
    /// Create a new [`ResamplerBuilder`] for the target `shape`
    pub fn new(shape: impl Into<Vec<usize>>) -> Self {
        ResamplerBuilder {
            shape: shape.into(),
            method: Method::default(),
            centre: false,
            minusone: false,
        }
    }

    /// Set the resampling method, default is [`Method::Linear`]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sample at the bin centres instead of the leading bin edges, default is `false`
    pub fn centre(mut self, centre: bool) -> Self {
        self.centre = centre;
        self
    }

    /// Map the end points of every axis exactly onto each other, default is `false`
    pub fn minusone(mut self, minusone: bool) -> Self {
        self.minusone = minusone;
        self
    }

    /// Validate the target shape and create the configured [`Resampler`]
    pub fn build(self) -> Result<Resampler, ResampleError> {
        let ResamplerBuilder {
            shape,
            method,
            centre,
            minusone,
        } = self;

        let minimum = if minusone { 2 } else { 1 };
        if let Some(axis) = shape.iter().position(|&len| len < minimum) {
            return Err(ResampleError::InvalidShape(format!(
                "target axis {axis} has length {}, needs at least {minimum}{}",
                shape[axis],
                if minusone { " with minusone" } else { "" }
            )));
        }

        Ok(Resampler {
            shape,
            method,
            centre,
            minusone,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array, Array2, IxDyn};

    use super::{Method, Resampler};
    use crate::ResampleError;

    #[test]
    fn builder_defaults() {
        let resampler = Resampler::builder(vec![3, 4]).build().unwrap();
        assert_eq!(resampler.shape(), &[3, 4]);
        assert_eq!(resampler.method(), Method::Linear);
        assert!(!resampler.centre());
        assert!(!resampler.minusone());
    }

    #[test]
    fn builder_rejects_degenerate_shape() {
        assert!(matches!(
            Resampler::builder([3, 1]).minusone(true).build(),
            Err(ResampleError::InvalidShape(_))
        ));
        assert!(matches!(
            Resampler::builder([0]).build(),
            Err(ResampleError::InvalidShape(_))
        ));
        assert!(Resampler::builder([3, 1]).build().is_ok());
    }

    #[test]
    fn rank_mismatch_fixed_and_dyn() {
        let resampler = Resampler::builder([8]).build().unwrap();
        let fixed = Array2::<f64>::zeros((4, 4));
        assert!(matches!(
            resampler.resample(&fixed),
            Err(ResampleError::ShapeMismatch(_))
        ));
        let dynamic = Array::<f64, _>::zeros(IxDyn(&[4, 4]));
        assert!(matches!(
            resampler.resample(&dynamic),
            Err(ResampleError::ShapeMismatch(_))
        ));
        assert!(matches!(
            resampler.resample_neighbour(&fixed),
            Err(ResampleError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn dynamic_dimension() {
        let source = Array::from_shape_vec(IxDyn(&[2, 2]), vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        let resampler = Resampler::builder([3, 3]).minusone(true).build().unwrap();
        let result = resampler.resample(&source).unwrap();
        let expect = Array::from_shape_vec(
            IxDyn(&[3, 3]),
            vec![0.0, 0.5, 1.0, 1.0, 1.5, 2.0, 2.0, 2.5, 3.0],
        )
        .unwrap();
        assert_abs_diff_eq!(result, expect, epsilon = 1e-12);
    }

    #[test]
    fn neighbour_on_integers() {
        let resampler = Resampler::builder([4]).build().unwrap();
        let result = resampler.resample_neighbour(&array![1u16, 2]).unwrap();
        assert_eq!(result, array![1u16, 2, 2, 2]);
    }
}
