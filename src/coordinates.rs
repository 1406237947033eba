//! Mapping of target indices onto fractional source coordinates
//!
//! For an axis with `s` source samples resampled to `d` target samples the
//! target index `k` is mapped onto
//!
//! ```text
//! coord[k] = (s - m) / (d - m) * (k + ofs) - ofs
//! ```
//!
//! where `m = 1` when resampling with `minusone` and `ofs = 0.5` when
//! resampling with `centre`.
//!
//! ```rust
//! # use ndarray::*;
//! # use ndarray_resample::coordinates::coordinate_map;
//! let coords = coordinate_map::<f64>(4, 7, false, true).unwrap();
//! # assert_eq!(coords, array![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0]);
//! ```
use ndarray::Array1;
use num_traits::{cast, Float, NumCast};

use crate::ResampleError;

/// The factor `(s - m) / (d - m)` between target and source spacing
pub fn scale_factor<F: Float>(
    source_len: usize,
    target_len: usize,
    minusone: bool,
) -> Result<F, ResampleError> {
    check_lengths(source_len, target_len, minusone)?;
    let m = <usize as From<bool>>::from(minusone);
    Ok(to_float::<F>(source_len - m) / to_float(target_len - m))
}

/// The fractional source coordinate for every index of the target axis.
///
/// The sequence has exactly `target_len` entries and is strictly increasing
/// when `source_len > 1`. With `minusone` (and without `centre`) the first
/// and last entries are exactly `0` and `source_len - 1`.
/// Otherwise the outermost entries can lie past the first or last sample,
/// consumers have to clamp.
///
/// # Errors
/// [`ResampleError::InvalidShape`] when the source axis is empty or when
/// `target_len` is too small for the mapping, which is `0` and with `minusone` also `1`.
pub fn coordinate_map<F: Float>(
    source_len: usize,
    target_len: usize,
    centre: bool,
    minusone: bool,
) -> Result<Array1<F>, ResampleError> {
    check_lengths(source_len, target_len, minusone)?;
    let m = <usize as From<bool>>::from(minusone);
    let span: F = to_float(source_len - m);
    let steps: F = to_float(target_len - m);
    let ofs = offset::<F>(centre);

    // multiplying before dividing keeps the minusone end points exact
    Ok(Array1::from_iter((0..target_len).map(|k| {
        span * (to_float::<F>(k) + ofs) / steps - ofs
    })))
}

/// The half-bin offset applied with `centre`
pub fn offset<F: Float>(centre: bool) -> F {
    if centre {
        to_float(0.5)
    } else {
        F::zero()
    }
}

/// Check that all coordinates lie within the tolerated window
/// `(-1 - scale / 2, source_len + scale / 2)`, one source sample plus half a
/// target bin past either end of the axis.
///
/// `scale` is the [`scale_factor`] of the axis. Coordinates from [`coordinate_map`]
/// never leave this window, consumers clamp them into `[0, source_len - 1]`.
///
/// # Errors
/// [`ResampleError::OutOfDomain`] for the first coordinate outside of the window,
/// this includes `NaN`.
pub fn check_domain<F: Float>(
    coords: &Array1<F>,
    source_len: usize,
    scale: F,
) -> Result<(), ResampleError> {
    let half_bin = scale.abs() / to_float(2);
    let low = -F::one() - half_bin;
    let high = to_float::<F>(source_len) + half_bin;
    match coords.iter().find(|&&c| !(c > low && c < high)) {
        Some(c) => Err(ResampleError::OutOfDomain(format!(
            "coordinate {:?} is outside of the tolerated range ({:?}, {:?})",
            c.to_f64(),
            low.to_f64(),
            high.to_f64()
        ))),
        None => Ok(()),
    }
}

fn check_lengths(source_len: usize, target_len: usize, minusone: bool) -> Result<(), ResampleError> {
    if source_len == 0 {
        return Err(ResampleError::InvalidShape(
            "can not resample an empty source axis".into(),
        ));
    }
    let m = <usize as From<bool>>::from(minusone);
    if target_len <= m {
        return Err(ResampleError::InvalidShape(format!(
            "target length {target_len} is too small, needs to be at least {}{}",
            m + 1,
            if minusone { " with minusone" } else { "" },
        )));
    }
    Ok(())
}

fn to_float<F: Float>(val: impl NumCast) -> F {
    cast(val).unwrap_or_else(|| unimplemented!("casting to a float should always work"))
}
