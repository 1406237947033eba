use ndarray::{Array, ArrayBase, Data, Dimension, IntoDimension};
use num_traits::cast;

use super::ResampleNum;
use crate::{
    coordinates::{offset, scale_factor},
    spline::{SplineBoundary, SplineSampler},
    ResampleError,
};

/// Sample a cubic B-spline of the source at the full target coordinate grid.
pub(super) fn resample<S, D, F>(
    source: &ArrayBase<S, D>,
    target: &D,
    centre: bool,
    minusone: bool,
) -> Result<Array<F, D>, ResampleError>
where
    S: Data<Elem = F>,
    F: ResampleNum,
    D: Dimension,
{
    let ofs: F = offset(centre);
    let mut grid = Vec::with_capacity(source.ndim());
    for (axis, (&len, &target_len)) in source.shape().iter().zip(target.slice()).enumerate() {
        let scale: F = scale_factor(len, target_len, minusone)?;
        let mut coords: Array<F, D> = Array::zeros(target.clone());
        for (index, c) in coords.indexed_iter_mut() {
            let k = index.into_dimension()[axis];
            *c = cast(k).unwrap_or_else(|| {
                unimplemented!("casting from usize to a float should always work")
            });
        }
        coords.mapv_inplace(|k: F| (k + ofs) * scale - ofs);
        grid.push(coords);
    }

    let sampler = SplineSampler::new(source)?.boundary(SplineBoundary::Nearest);
    Ok(sampler.sample(&grid)?)
}
