use ndarray::{Array, Array1, ArrayBase, ArrayView, Data, Dimension, RemoveAxis};

use super::ResampleNum;
use crate::{
    coordinates::{check_domain, coordinate_map, scale_factor},
    dim_extensions::permutation,
    interp1d::{Interp1DBuilder, Interp1DDataView, Linear, Nearest},
    ResampleError,
};

/// The 1-D strategy used on every pass
#[derive(Debug, Clone, Copy)]
pub(super) enum Pass {
    Nearest,
    Linear,
}

/// Resample by interpolating one axis after the other.
///
/// The axis being interpolated always sits in the trailing slot of the
/// working array. `order[slot]` tracks which source axis occupies each slot,
/// after every pass the slots are rotated by one so the next axis becomes trailing.
pub(super) fn resample<S, D, F>(
    source: &ArrayBase<S, D>,
    target: &D,
    pass: Pass,
    centre: bool,
    minusone: bool,
) -> Result<Array<F, D>, ResampleError>
where
    S: Data<Elem = F>,
    F: ResampleNum,
    D: Dimension + RemoveAxis,
{
    let ndim = source.ndim();
    let maps = source
        .shape()
        .iter()
        .zip(target.slice())
        .map(|(&len, &target_len)| {
            let coords = coordinate_map::<F>(len, target_len, centre, minusone)?;
            check_domain(&coords, len, scale_factor(len, target_len, minusone)?)?;
            Ok(coords)
        })
        .collect::<Result<Vec<_>, ResampleError>>()?;

    let mut order: Vec<usize> = (0..ndim).collect();
    let mut working: Option<Array<F, D>> = None;
    for step in 0..ndim {
        let axis = order[ndim - 1];
        let data = match &working {
            Some(working) => working.view(),
            None => source.view(),
        };
        log::trace!(
            "{pass:?} pass over axis {axis}: {} -> {} samples",
            data.shape()[ndim - 1],
            maps[axis].len()
        );
        let next = interp_trailing(data, &maps[axis], pass)?;

        working = Some(if step + 1 < ndim {
            // [n-1, 0, 1, .., n-2] moves the finished axis to the front
            let rotation: Vec<usize> = (0..ndim).map(|slot| (slot + ndim - 1) % ndim).collect();
            order.rotate_right(1);
            next.permuted_axes(permutation::<D>(ndim, &rotation))
        } else {
            next
        });
    }

    let working = match working {
        Some(working) => working,
        None => source.to_owned(),
    };
    // slot `order[axis]` -> axis
    let mut restore = vec![0; ndim];
    for (slot, &axis) in order.iter().enumerate() {
        restore[axis] = slot;
    }
    let result = working.permuted_axes(permutation::<D>(ndim, &restore));
    Ok(result.as_standard_layout().into_owned())
}

/// Interpolate `data` along its trailing axis at `coords`
fn interp_trailing<F, D>(
    data: ArrayView<'_, F, D>,
    coords: &Array1<F>,
    pass: Pass,
) -> Result<Array<F, D>, ResampleError>
where
    F: ResampleNum,
    D: Dimension + RemoveAxis,
{
    let trailing = data.ndim() - 1;
    if data.shape()[trailing] == 1 {
        // a single sample is repeated, there is nothing to interpolate between
        let mut dim = data.raw_dim();
        dim[trailing] = coords.len();
        return data.broadcast(dim).map(|view| view.to_owned()).ok_or_else(|| {
            ResampleError::InvalidShape("can not broadcast a single sample".into())
        });
    }

    let builder = Interp1DBuilder::new(data);
    let result = match pass {
        Pass::Linear => {
            let interp: Interp1DDataView<'_, F, D, Linear> =
                builder.strategy(Linear::new().clamp(true)).build()?;
            interp.interp_array(coords)?
        }
        Pass::Nearest => {
            let interp: Interp1DDataView<'_, F, D, Nearest> =
                builder.strategy(Nearest::new().clamp(true)).build()?;
            interp.interp_array(coords)?
        }
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array, Ix3};

    use super::{resample, Pass};

    #[test]
    fn axis_order_restored() {
        // every axis gets a different target length so a mixed up order can not pass
        let source = Array::from_shape_fn((2, 3, 4), |(i, j, k)| (100 * i + 10 * j + k) as f64);
        let result = resample(&source, &Ix3(3, 5, 7), Pass::Linear, false, true).unwrap();
        assert_eq!(result.shape(), &[3, 5, 7]);
        assert!(result.is_standard_layout());
        // separable linear interpolation of a linear function is exact
        let expect = Array::from_shape_fn((3, 5, 7), |(i, j, k)| {
            100.0 * i as f64 * 0.5 + 10.0 * j as f64 * 0.5 + k as f64 * 0.5
        });
        assert_abs_diff_eq!(result, expect, epsilon = 1e-12);
    }

    #[test]
    fn single_sample_axis() {
        let source = array![[1.0, 2.0]];
        let result = resample(&source, &ndarray::Ix2(3, 3), Pass::Linear, false, true).unwrap();
        assert_abs_diff_eq!(
            result,
            array![[1.0, 1.5, 2.0], [1.0, 1.5, 2.0], [1.0, 1.5, 2.0]],
            epsilon = 1e-12
        );
    }

    #[test]
    fn nearest_pass() {
        let source = array![0.0, 1.0, 2.0, 3.0];
        let result = resample(&source, &ndarray::Ix1(8), Pass::Nearest, false, false).unwrap();
        assert_eq!(result, array![0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
    }
}
