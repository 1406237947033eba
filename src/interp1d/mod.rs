//! Interpolation along the trailing axis of _n_-dimensional data
//!
//! Every lane of the data along its trailing axis is one function sampled at
//! the shared x axis. [`Interp1D::interp_array`] evaluates all lanes at the
//! same query points, the leading axes are carried through unchanged.
//!
//!  - [`Interp1DBuilder`] validates the data and x axis
//!  - [`Linear`] and [`Nearest`] are the available strategies, both can clamp
//!    queries outside of the x axis onto its ends

use std::fmt::Debug;

use ndarray::{Array, ArrayBase, ArrayView, Axis, Data, Dimension, Ix1, OwnedRepr, RemoveAxis};
use num_traits::{cast, Float};

use crate::{
    vector_extensions::{Monotonic, VectorExtensions},
    BuilderError, InterpolateError,
};

mod aliases;
mod strategies;
pub use aliases::*;
pub use strategies::linear::Linear;
pub use strategies::nearest::Nearest;
pub use strategies::{Interp1DStrategy, Interp1DStrategyBuilder};

/// Interpolator over the trailing axis of the data
#[derive(Debug)]
pub struct Interp1D<Sd, Sx, D, Strat>
where
    Sd: Data,
    Sd::Elem: Debug,
    Sx: Data<Elem = Sd::Elem>,
    D: Dimension,
{
    /// strictly rising, same length as the trailing data axis
    x: ArrayBase<Sx, Ix1>,
    data: ArrayBase<Sd, D>,
    strategy: Strat,
}

impl<Sd, Sx, D, Strat> Interp1D<Sd, Sx, D, Strat>
where
    Sd: Data,
    Sd::Elem: Float + Debug,
    Sx: Data<Elem = Sd::Elem>,
    D: Dimension + RemoveAxis,
    Strat: Interp1DStrategy<Sd, Sx, D>,
{
    /// Evaluate every lane at all points of `xs`.
    ///
    /// The result has the shape of the data with the trailing axis
    /// replaced by `xs.len()`.
    ///
    /// ```rust
    /// # use ndarray_resample::interp1d::*;
    /// # use ndarray::*;
    /// # use approx::*;
    /// let data = array![
    ///     [0.0, 1.0, 2.0],
    ///     [0.0, 10.0, 40.0],
    /// ];
    /// let interpolator = Interp1DBuilder::new(data).build().unwrap();
    /// let result = interpolator.interp_array(&array![0.5, 1.5]).unwrap();
    /// # assert_abs_diff_eq!(result, array![[0.5, 1.5], [5.0, 25.0]], epsilon=f64::EPSILON);
    /// ```
    ///
    /// # Errors
    /// Whatever the strategy reports for a query, see [`Linear`] and [`Nearest`].
    pub fn interp_array<Sq>(&self, xs: &ArrayBase<Sq, Ix1>) -> Result<Array<Sd::Elem, D>, InterpolateError>
    where
        Sq: Data<Elem = Sd::Elem>,
    {
        let axis = self.axis();
        let mut dim = self.data.raw_dim();
        dim[axis.index()] = xs.len();
        let mut result = Array::zeros(dim);
        for (k, &x) in xs.iter().enumerate() {
            self.strategy
                .interp_into(self, result.index_axis_mut(axis, k), x)?;
        }
        Ok(result)
    }

    fn axis(&self) -> Axis {
        Axis(self.data.ndim() - 1)
    }

    /// The x value and the data lanes at `index` of the trailing axis
    pub(crate) fn sample(&self, index: usize) -> (Sd::Elem, ArrayView<'_, Sd::Elem, D::Smaller>) {
        (self.x[index], self.data.index_axis(self.axis(), index))
    }

    /// Index `i` with `x[i] <= x < x[i + 1]`, never the last index
    pub(crate) fn lower_index(&self, x: Sd::Elem) -> usize {
        self.x.get_lower_index(x)
    }

    pub(crate) fn contains(&self, x: Sd::Elem) -> bool {
        self.x[0] <= x && x <= self.x[self.x.len() - 1]
    }

    /// Move `x` onto the nearer end of the x axis when it lies outside
    pub(crate) fn clamp(&self, x: Sd::Elem) -> Sd::Elem {
        let (first, last) = (self.x[0], self.x[self.x.len() - 1]);
        if x < first {
            first
        } else if x > last {
            last
        } else {
            x
        }
    }
}

/// Create and configure an [`Interp1D`].
///
/// Defaults to the [`Linear`] strategy without clamping and to
/// `0, 1, .., len - 1` as x axis.
#[derive(Debug)]
pub struct Interp1DBuilder<Sd, Sx, D, Strat>
where
    Sd: Data,
    Sd::Elem: Debug,
    Sx: Data<Elem = Sd::Elem>,
    D: Dimension,
{
    x: ArrayBase<Sx, Ix1>,
    data: ArrayBase<Sd, D>,
    strategy: Strat,
}

impl<Sd, D> Interp1DBuilder<Sd, OwnedRepr<Sd::Elem>, D, Linear>
where
    Sd: Data,
    Sd::Elem: Float + Debug,
    D: Dimension,
{
    /// Start from the data, lanes run along its trailing axis
    pub fn new(data: ArrayBase<Sd, D>) -> Self {
        let len = data.shape().last().copied().unwrap_or(0);
        let x = Array::from_iter((0..len).map(|n| {
            cast(n).unwrap_or_else(|| unimplemented!("casting from usize to a float should always work"))
        }));
        Interp1DBuilder {
            x,
            data,
            strategy: Linear::new(),
        }
    }
}

impl<Sd, Sx, D, Strat> Interp1DBuilder<Sd, Sx, D, Strat>
where
    Sd: Data,
    Sd::Elem: Float + Debug,
    Sx: Data<Elem = Sd::Elem>,
    D: Dimension + RemoveAxis,
    Strat: Interp1DStrategyBuilder<Sd, Sx, D>,
{
    /// Use `x` instead of the lane indices, it has to rise strictly
    pub fn x<NewSx>(self, x: ArrayBase<NewSx, Ix1>) -> Interp1DBuilder<Sd, NewSx, D, Strat>
    where
        NewSx: Data<Elem = Sd::Elem>,
    {
        Interp1DBuilder {
            x,
            data: self.data,
            strategy: self.strategy,
        }
    }

    pub fn strategy<NewStrat>(self, strategy: NewStrat) -> Interp1DBuilder<Sd, Sx, D, NewStrat>
    where
        NewStrat: Interp1DStrategyBuilder<Sd, Sx, D>,
    {
        Interp1DBuilder {
            x: self.x,
            data: self.data,
            strategy,
        }
    }

    /// Validate data and x axis, then finish the strategy
    ///
    /// # Errors
    ///  - [`BuilderError::ShapeError`] for 0-dimensional data
    ///  - [`BuilderError::NotEnoughData`] when the lanes are shorter than the strategy needs
    ///  - [`BuilderError::AxisLenght`] when x and the lanes differ in length
    ///  - [`BuilderError::Monotonic`] when x does not rise strictly
    pub fn build(self) -> Result<Interp1D<Sd, Sx, D, Strat::FinishedStrat>, BuilderError> {
        let Interp1DBuilder { x, data, strategy } = self;

        let Some(&len) = data.shape().last() else {
            return Err(BuilderError::ShapeError(
                "can not interpolate 0-dimensional data".into(),
            ));
        };
        if len < Strat::MINIMUM_DATA_LENGTH {
            return Err(BuilderError::NotEnoughData(format!(
                "lanes have {len} samples, the strategy needs at least {}",
                Strat::MINIMUM_DATA_LENGTH
            )));
        }
        if x.len() != len {
            return Err(BuilderError::AxisLenght(format!(
                "x has {} values but the trailing data axis has {len}",
                x.len()
            )));
        }
        if x.monotonic_prop() != (Monotonic::Rising { strict: true }) {
            return Err(BuilderError::Monotonic(
                "x values have to rise strictly".into(),
            ));
        }

        let strategy = strategy.build(&x, &data)?;
        Ok(Interp1D { x, data, strategy })
    }
}
