//! Cubic B-spline prefilter and kernel taps
//!
//! The prefilter turns samples into B-spline coefficients with the recursive
//! causal / anti-causal filter described by Unser, Aldroubi and Eden
//! ("B-spline signal processing", 1993). The signal is treated as
//! mirror-symmetric about its first and last sample.
use ndarray::ArrayViewMut1;
use num_traits::{cast, Float};

/// `sqrt(3) - 2`, the single pole of the cubic B-spline prefilter
pub(crate) fn pole<F: Float>() -> F {
    let three: F = cast(3.0).unwrap_or_else(|| unimplemented!());
    let two: F = cast(2.0).unwrap_or_else(|| unimplemented!());
    three.sqrt() - two
}

/// Replace the samples of `lane` with their cubic B-spline coefficients
pub(crate) fn prefilter_lane<F: Float>(mut lane: ArrayViewMut1<'_, F>) {
    let len = lane.len();
    if len < 2 {
        return;
    }
    let z = pole::<F>();
    let gain = (F::one() - z) * (F::one() - z.recip());
    lane.mapv_inplace(|v| v * gain);

    lane[0] = initial_causal(&lane, z);
    for k in 1..len {
        lane[k] = lane[k] + z * lane[k - 1];
    }

    lane[len - 1] = initial_anti_causal(&lane, z);
    for k in (0..len - 1).rev() {
        lane[k] = z * (lane[k + 1] - lane[k]);
    }
}

fn initial_causal<F: Float>(lane: &ArrayViewMut1<'_, F>, z: F) -> F {
    let len = lane.len();
    let horizon = (F::epsilon().ln() / z.abs().ln())
        .ceil()
        .to_usize()
        .unwrap_or(len);

    if horizon < len {
        // the truncated sum already reaches machine precision
        let mut zn = z;
        let mut sum = lane[0];
        for k in 1..horizon {
            sum = sum + zn * lane[k];
            zn = zn * z;
        }
        sum
    } else {
        // exact sum over the mirrored signal
        let iz = z.recip();
        let mut zn = z;
        let mut z2n = z.powi((len - 1) as i32);
        let mut sum = lane[0] + z2n * lane[len - 1];
        z2n = z2n * z2n * iz;
        for k in 1..len - 1 {
            sum = sum + (zn + z2n) * lane[k];
            zn = zn * z;
            z2n = z2n * iz;
        }
        sum / (F::one() - zn * zn)
    }
}

fn initial_anti_causal<F: Float>(lane: &ArrayViewMut1<'_, F>, z: F) -> F {
    let len = lane.len();
    (z / (z * z - F::one())) * (z * lane[len - 2] + lane[len - 1])
}

/// The four coefficient indices and kernel weights contributing at `x`
/// on an axis of `len` coefficients.
///
/// Indices outside of the axis are mirrored back into it.
pub(crate) fn taps<F: Float>(x: F, len: usize) -> ([usize; 4], [F; 4]) {
    // the mirrored axis repeats every `period` samples, `%` is exact for floats
    let period = 2 * len.saturating_sub(1);
    let x = match cast::<usize, F>(period) {
        Some(period) if period > F::zero() => x % period,
        _ => x,
    };
    let floor = x.floor();
    let t = x - floor;
    let first = floor.to_isize().unwrap_or(0).saturating_sub(1);

    let one = F::one();
    let sixth: F = cast(1.0 / 6.0).unwrap_or_else(|| unimplemented!());
    let two_thirds: F = cast(2.0 / 3.0).unwrap_or_else(|| unimplemented!());
    let half: F = cast(0.5).unwrap_or_else(|| unimplemented!());
    let t2 = t * t;
    let t3 = t2 * t;
    let u = one - t;

    let weights = [
        u * u * u * sixth,
        two_thirds - t2 + t3 * half,
        two_thirds - u * u + u * u * u * half,
        t3 * sixth,
    ];
    let mut indices = [0; 4];
    for (n, index) in indices.iter_mut().enumerate() {
        *index = mirror_index(first.saturating_add(n as isize), len);
    }
    (indices, weights)
}

/// Reflect `index` about the first and last entry of an axis with `len` entries
pub(crate) fn mirror_index(index: isize, len: usize) -> usize {
    if len < 2 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let index = index.rem_euclid(period);
    if index >= len as isize {
        (period - index) as usize
    } else {
        index as usize
    }
}
