//! The seam between [`Interp1D`] and the per-query interpolation rule

use std::fmt::Debug;

use ndarray::{ArrayBase, ArrayViewMut, Data, Dimension, Ix1};
use num_traits::Float;

use super::Interp1D;
use crate::{BuilderError, InterpolateError};

pub mod linear;
pub mod nearest;

/// Configuration of a strategy, finished by [`Interp1DBuilder::build`](super::Interp1DBuilder::build)
pub trait Interp1DStrategyBuilder<Sd, Sx, D>
where
    Sd: Data,
    Sd::Elem: Float + Debug,
    Sx: Data<Elem = Sd::Elem>,
    D: Dimension,
    Self: Sized,
{
    /// Lanes shorter than this are rejected with [`BuilderError::NotEnoughData`]
    const MINIMUM_DATA_LENGTH: usize;
    type FinishedStrat: Interp1DStrategy<Sd, Sx, D>;

    /// Called after the builder checked that `x` rises strictly, has the length
    /// of the trailing data axis and that this length is at least
    /// [`MINIMUM_DATA_LENGTH`](Interp1DStrategyBuilder::MINIMUM_DATA_LENGTH).
    fn build(
        self,
        x: &ArrayBase<Sx, Ix1>,
        data: &ArrayBase<Sd, D>,
    ) -> Result<Self::FinishedStrat, BuilderError>;
}

pub trait Interp1DStrategy<Sd, Sx, D>
where
    Sd: Data,
    Sd::Elem: Float + Debug,
    Sx: Data<Elem = Sd::Elem>,
    D: Dimension,
    Self: Sized,
{
    /// Write the value of every lane at `x` into `target`, which has the
    /// data shape without the trailing axis.
    fn interp_into(
        &self,
        interpolator: &Interp1D<Sd, Sx, D, Self>,
        target: ArrayViewMut<'_, Sd::Elem, D::Smaller>,
        x: Sd::Elem,
    ) -> Result<(), InterpolateError>;
}
