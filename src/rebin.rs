//! Rebinning without interpolation
//!
//!  - [`rebin`] picks the source sample at the largest integer index not above
//!    the mapped coordinate, any target shape is allowed
//!  - [`rebin_mean`] downsamples by averaging blocks, the target extents have to divide
//!    the source extents
//!
//! Unlike [`resample()`](crate::resample()) these map target index `k` onto
//! `k * s / d` without any alignment flags.
use ndarray::{Array, ArrayBase, Data, IntoDimension, Slice};
use num_traits::{cast, Float};

use crate::{dim_extensions::DimExtension, ResampleError};

/// Rebin `source` to `shape` by taking the source sample at index `floor(k * s / d)`
/// along every axis.
///
/// ```rust
/// # use ndarray::*;
/// # use ndarray_resample::rebin::rebin;
/// let source = array![[0, 1, 2, 3], [4, 5, 6, 7]];
/// let result = rebin(&source, &[4, 2]).unwrap();
/// # assert_eq!(result, array![[0, 2], [0, 2], [4, 6], [4, 6]]);
/// ```
///
/// # Errors
///  - [`ResampleError::ShapeMismatch`] when `shape` has a different rank than `source`
///  - [`ResampleError::InvalidShape`] when a source or target extent is `0`
pub fn rebin<S, D>(source: &ArrayBase<S, D>, shape: &[usize]) -> Result<Array<S::Elem, D>, ResampleError>
where
    S: Data,
    S::Elem: Clone,
    D: DimExtension,
{
    let target = target_dim::<D>(source.shape(), shape)?;
    let lookup: Vec<Vec<usize>> = source
        .shape()
        .iter()
        .zip(shape)
        .map(|(&len, &target_len)| (0..target_len).map(|k| k * len / target_len).collect())
        .collect();

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

/// Downsample `source` to `shape` where every target cell is the mean of its block
/// of `s / d` source samples per axis.
///
/// ```rust
/// # use ndarray::*;
/// # use ndarray_resample::rebin::rebin_mean;
/// let source = array![[0.0, 1.0, 2.0, 3.0], [4.0, 5.0, 6.0, 7.0]];
/// let result = rebin_mean(&source, &[1, 2]).unwrap();
/// # assert_eq!(result, array![[2.5, 4.5]]);
/// ```
///
/// # Errors
///  - [`ResampleError::ShapeMismatch`] when `shape` has a different rank than `source`
///  - [`ResampleError::InvalidShape`] when an extent is `0` or a target extent does not
///    divide the source extent
pub fn rebin_mean<S, D>(source: &ArrayBase<S, D>, shape: &[usize]) -> Result<Array<S::Elem, D>, ResampleError>
where
    S: Data,
    S::Elem: Float,
    D: DimExtension,
{
    let target = target_dim::<D>(source.shape(), shape)?;
    if let Some(axis) = source
        .shape()
        .iter()
        .zip(shape)
        .position(|(&len, &target_len)| len % target_len != 0)
    {
        return Err(ResampleError::InvalidShape(format!(
            "target length {} of axis {axis} does not divide the source length {}",
            shape[axis],
            source.shape()[axis]
        )));
    }

    let factors: Vec<usize> = source
        .shape()
        .iter()
        .zip(shape)
        .map(|(&len, &target_len)| len / target_len)
        .collect();
    let count: S::Elem = cast(factors.iter().product::<usize>())
        .unwrap_or_else(|| unimplemented!("casting from usize to a float should always work"));

    Ok(Array::from_shape_fn(target, |target_index| {
        let target_index = target_index.into_dimension();
        let block = source.slice_each_axis(|desc| {
            let axis = desc.axis.index();
            let start = target_index[axis] * factors[axis];
            Slice::from(start..start + factors[axis])
        });
        block.sum() / count
    }))
}

fn target_dim<D: DimExtension>(source_shape: &[usize], shape: &[usize]) -> Result<D, ResampleError> {
    let mismatch = || {
        ResampleError::ShapeMismatch(format!(
            "can not rebin an array of shape {source_shape:?} to {shape:?}, the number of dimensions must match"
        ))
    };
    if source_shape.len() != shape.len() {
        return Err(mismatch());
    }
    if let Some(axis) = source_shape
        .iter()
        .zip(shape)
        .position(|(&len, &target_len)| len == 0 || target_len == 0)
    {
        return Err(ResampleError::InvalidShape(format!(
            "axis {axis} is empty, source length {} target length {}",
            source_shape[axis], shape[axis]
        )));
    }
    D::try_new(shape).ok_or_else(mismatch)
}

#[cfg(test)]
mod tests {
    use ndarray::{array, Array2, Ix2};

    use super::{rebin, rebin_mean, target_dim};
    use crate::ResampleError;

    #[test]
    fn rebin_upsample_repeats() {
        let result = rebin(&array![1, 2, 3], &[6]).unwrap();
        assert_eq!(result, array![1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn rebin_uneven() {
        // k * 5 / 3 = 0, 1, 3
        let result = rebin(&array![0, 1, 2, 3, 4], &[3]).unwrap();
        assert_eq!(result, array![0, 1, 3]);
    }

    #[test]
    fn rebin_mean_constant() {
        let source = Array2::from_elem((6, 4), 3.25f32);
        let result = rebin_mean(&source, &[3, 2]).unwrap();
        assert_eq!(result, Array2::from_elem((3, 2), 3.25));
    }

    #[test]
    fn rebin_mean_not_divisible() {
        let source = Array2::<f64>::zeros((6, 4));
        assert!(matches!(
            rebin_mean(&source, &[4, 2]),
            Err(ResampleError::InvalidShape(_))
        ));
    }

    #[test]
    fn empty_axes() {
        assert!(matches!(
            target_dim::<Ix2>(&[0, 2], &[1, 1]),
            Err(ResampleError::InvalidShape(_))
        ));
        assert!(matches!(
            target_dim::<Ix2>(&[2, 2], &[1, 0]),
            Err(ResampleError::InvalidShape(_))
        ));
    }
}
