use std::fmt::Debug;

use ndarray::{ArrayBase, ArrayViewMut, Data, Dimension, Ix1, RemoveAxis};
use num_traits::Float;

use crate::{interp1d::Interp1D, BuilderError, InterpolateError};

use super::{Interp1DStrategy, Interp1DStrategyBuilder};

/// Copy the sample at the closest x value.
///
/// A query exactly halfway between two x values takes the lower one.
///
/// ```rust
/// # use ndarray_resample::interp1d::*;
/// # use ndarray::*;
/// let data = array![1.0, 2.0, 4.0];
/// let interpolator = Interp1DBuilder::new(data)
///     .strategy(Nearest::new())
///     .build().unwrap();
/// let result = interpolator.interp_array(&array![0.5, 0.51, 1.6]).unwrap();
/// # assert_eq!(result, array![1.0, 2.0, 4.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Nearest {
    clamp: bool,
}

impl<Sd, Sx, D> Interp1DStrategyBuilder<Sd, Sx, D> for Nearest
where
    Sd: Data,
    Sd::Elem: Float + Debug,
    Sx: Data<Elem = Sd::Elem>,
    D: Dimension + RemoveAxis,
{
    const MINIMUM_DATA_LENGTH: usize = 2;
    type FinishedStrat = Nearest;

    fn build(
        self,
        _x: &ArrayBase<Sx, Ix1>,
        _data: &ArrayBase<Sd, D>,
    ) -> Result<Self::FinishedStrat, BuilderError> {
        Ok(self)
    }
}

impl<Sd, Sx, D> Interp1DStrategy<Sd, Sx, D> for Nearest
where
    Sd: Data,
    Sd::Elem: Float + Debug,
    Sx: Data<Elem = Sd::Elem>,
    D: Dimension + RemoveAxis,
{
    fn interp_into(
        &self,
        interpolator: &Interp1D<Sd, Sx, D, Self>,
        mut target: ArrayViewMut<'_, Sd::Elem, D::Smaller>,
        x: Sd::Elem,
    ) -> Result<(), InterpolateError> {
        let x = if interpolator.contains(x) {
            x
        } else if self.clamp {
            interpolator.clamp(x)
        } else {
            return Err(InterpolateError::OutOfBounds(format!(
                "x = {x:?} is outside of the x axis"
            )));
        };

        let index = interpolator.lower_index(x);
        let (x1, y1) = interpolator.sample(index);
        let (x2, y2) = interpolator.sample(index + 1);
        if x - x1 <= x2 - x {
            target.assign(&y1);
        } else {
            target.assign(&y2);
        }
        Ok(())
    }
}

impl Nearest {
    pub fn new() -> Self {
        Self { clamp: false }
    }

    /// Use the end samples for queries outside of the x axis, default is `false`
    pub fn clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }
}
