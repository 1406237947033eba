use std::fmt::Debug;

use ndarray::{ArrayBase, ArrayViewMut, Data, Dimension, Ix1, RemoveAxis, Zip};
use num_traits::Float;

use crate::{interp1d::Interp1D, BuilderError, InterpolateError};

use super::{Interp1DStrategy, Interp1DStrategyBuilder};

/// Linear interpolation between the two samples around the query
///
/// Queries outside of the x axis are an [`InterpolateError::OutOfBounds`]
/// unless [`clamp`](Linear::clamp) moves them onto the nearer end.
///
/// The result never leaves the interval spanned by the two samples and is
/// exactly the sample value when the query hits an x value.
#[derive(Debug, Clone, Default)]
pub struct Linear {
    clamp: bool,
}

impl<Sd, Sx, D> Interp1DStrategyBuilder<Sd, Sx, D> for Linear
where
    Sd: Data,
    Sd::Elem: Float + Debug,
    Sx: Data<Elem = Sd::Elem>,
    D: Dimension + RemoveAxis,
{
    const MINIMUM_DATA_LENGTH: usize = 2;
    type FinishedStrat = Linear;

    fn build(
        self,
        _x: &ArrayBase<Sx, Ix1>,
        _data: &ArrayBase<Sd, D>,
    ) -> Result<Self::FinishedStrat, BuilderError> {
        Ok(self)
    }
}

impl<Sd, Sx, D> Interp1DStrategy<Sd, Sx, D> for Linear
where
    Sd: Data,
    Sd::Elem: Float + Debug,
    Sx: Data<Elem = Sd::Elem>,
    D: Dimension + RemoveAxis,
{
    fn interp_into(
        &self,
        interpolator: &Interp1D<Sd, Sx, D, Self>,
        target: ArrayViewMut<'_, Sd::Elem, D::Smaller>,
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
        let t = (x - x1) / (x2 - x1);

        Zip::from(target)
            .and(y1)
            .and(y2)
            .for_each(|target, &y1, &y2| *target = Self::lerp(y1, y2, t));
        Ok(())
    }
}

impl Linear {
    pub fn new() -> Self {
        Self { clamp: false }
    }

    /// Use the end samples for queries outside of the x axis, default is `false`
    pub fn clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Blend `y1` and `y2` at the fraction `t` in `[0, 1]`.
    ///
    /// Rounding can push the blend past the larger sample, so the result is
    /// bounded by the two samples. `NaN` in either sample passes through.
    pub(crate) fn lerp<T: Float>(y1: T, y2: T, t: T) -> T {
        if t == T::zero() {
            return y1;
        }
        if t == T::one() {
            return y2;
        }
        let value = y1 * (T::one() - t) + y2 * t;
        let (low, high) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
        if value < low {
            low
        } else if value > high {
            high
        } else {
            value
        }
    }
}
