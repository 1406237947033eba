use ndarray::{OwnedRepr, ViewRepr};

use super::Interp1D;

/// Interpolator borrowing its data with the default lane-index x axis,
/// one is built for every separable resampling pass
pub type Interp1DDataView<'a, A, D, S> = Interp1D<ViewRepr<&'a A>, OwnedRepr<A>, D, S>;
