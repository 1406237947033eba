use ndarray::{Array, ArrayBase, Data, Dimension, IntoDimension};

use crate::{coordinates::coordinate_map, ResampleError};

/// Copy the source sample at the jointly rounded coordinates of every target cell.
///
/// Ties round toward positive infinity, indices are clamped into the source.
pub(super) fn resample<S, D>(
    source: &ArrayBase<S, D>,
    target: D,
    centre: bool,
    minusone: bool,
) -> Result<Array<S::Elem, D>, ResampleError>
where
    S: Data,
    S::Elem: Clone,
    D: Dimension,
{
    let lookup = source
        .shape()
        .iter()
        .zip(target.slice())
        .map(|(&len, &target_len)| {
            let coords = coordinate_map::<f64>(len, target_len, centre, minusone)?;
            Ok(coords.iter().map(|&c| round_index(c, len)).collect())
        })
        .collect::<Result<Vec<Vec<usize>>, ResampleError>>()?;

    let source = source.view().into_dyn();
    let mut index = vec![0; source.ndim()];
    Ok(Array::from_shape_fn(target, |target_index| {
        let target_index = target_index.into_dimension();
        for (axis, i) in index.iter_mut().enumerate() {
            *i = lookup[axis][target_index[axis]];
        }
        source[index.as_slice()].clone()
    }))
}

fn round_index(coord: f64, len: usize) -> usize {
    let last = (len - 1) as f64;
    (coord + 0.5).floor().max(0.0).min(last) as usize
}
