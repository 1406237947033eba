use approx::assert_abs_diff_eq;
use ndarray::{array, s, Array, Array1, Array2, Array3, Dimension, IxDyn};
use rand::{
    distr::Uniform,
    rngs::StdRng,
    Rng, SeedableRng,
};

use ndarray_resample::{coordinates::coordinate_map, resample, Method, ResampleError, Resampler};

fn rand_vec(size: usize, range: (f64, f64), seed: u64) -> Vec<f64> {
    StdRng::seed_from_u64(seed)
        .sample_iter(Uniform::new_inclusive(range.0, range.1).unwrap())
        .take(size)
        .collect()
}

#[test]
fn linear_minusone_example() {
    let source = array![0.0, 10.0, 20.0, 30.0];
    let result = resample(&source, &[7], Method::Linear, false, true).unwrap();
    assert_abs_diff_eq!(
        result,
        array![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0],
        epsilon = 1e-12
    );
}

#[test]
fn neighbour_values_come_from_source() {
    let source = array![[0.0, 1.0], [2.0, 3.0]];
    for (centre, minusone) in [(false, false), (true, false), (false, true), (true, true)] {
        let result = resample(&source, &[4, 4], Method::Neighbour, centre, minusone).unwrap();
        assert_eq!(result.shape(), &[4, 4]);
        for value in result.iter() {
            assert!([0.0, 1.0, 2.0, 3.0].contains(value));
        }
    }
}

#[test]
fn rank_mismatch() {
    let source = Array2::<f64>::zeros((4, 4));
    for method in Method::ALL {
        assert!(matches!(
            resample(&source, &[8], method, false, false),
            Err(ResampleError::ShapeMismatch(_))
        ));
    }
}

#[test]
fn degenerate_target_with_minusone() {
    let source = array![0.0, 1.0, 2.0];
    assert!(matches!(
        resample(&source, &[1], Method::Linear, false, true),
        Err(ResampleError::InvalidShape(_))
    ));
    // without minusone a single target sample is fine
    let result = resample(&source, &[1], Method::Linear, false, false).unwrap();
    assert_eq!(result, array![0.0]);
}

#[test]
fn empty_source_axis() {
    let source = Array2::<f64>::zeros((0, 3));
    for method in Method::ALL {
        assert!(resample(&source, &[2, 2], method, false, false).is_err());
    }
}

#[test]
fn shape_contract() {
    let source = Array::from_shape_vec((3, 5, 4), rand_vec(60, (-1.0, 1.0), 42)).unwrap();
    let targets = [[3, 5, 4], [6, 2, 9], [1, 1, 1], [2, 10, 3]];
    for method in Method::ALL {
        for target in targets {
            let result = resample(&source, &target, method, false, false).unwrap();
            assert_eq!(result.shape(), &target, "{method} to {target:?}");
        }
    }
}

#[test]
fn identity_for_every_method() {
    let source = Array::from_shape_vec((4, 6), rand_vec(24, (-10.0, 10.0), 7)).unwrap();
    for method in Method::ALL {
        let result = resample(&source, &[4, 6], method, false, true).unwrap();
        assert_abs_diff_eq!(result, source, epsilon = 1e-9);
    }
    // with equal shapes the map is the identity without minusone as well
    for method in Method::ALL {
        let result = resample(&source, &[4, 6], method, false, false).unwrap();
        assert_abs_diff_eq!(result, source, epsilon = 1e-9);
    }
}

#[test]
fn coordinate_maps_are_increasing() {
    for (s, d) in [(4, 7), (7, 4), (2, 100), (100, 3), (5, 5)] {
        for centre in [false, true] {
            for minusone in [false, true] {
                let coords = coordinate_map::<f64>(s, d, centre, minusone).unwrap();
                assert_eq!(coords.len(), d);
                assert!(coords.windows(2).into_iter().all(|w| w[0] < w[1]));
            }
        }
    }
}

#[test]
fn interpolation_stays_in_bounds() {
    let source = Array::from_shape_vec((8, 7, 3), rand_vec(168, (-5.0, 5.0), 1234)).unwrap();
    let min = source.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = source.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    for method in [Method::Nearest, Method::Linear] {
        for target in [[3, 2, 2], [16, 13, 5]] {
            for (centre, minusone) in [(false, false), (true, false), (false, true)] {
                let result = resample(&source, &target, method, centre, minusone).unwrap();
                assert!(result.iter().all(|&v| v >= min && v <= max));
            }
        }
    }
}

#[test]
fn overshoot_is_clamped() {
    // coordinates 0, 0.5, 1, 1.5, the last one is past the source
    let source = array![0.0, 10.0];
    let linear = resample(&source, &[4], Method::Linear, false, false).unwrap();
    assert_abs_diff_eq!(linear, array![0.0, 5.0, 10.0, 10.0], epsilon = 1e-12);
    let nearest = resample(&source, &[4], Method::Nearest, false, false).unwrap();
    assert_eq!(nearest, array![0.0, 0.0, 10.0, 10.0]);
    let spline = resample(&source, &[4], Method::Spline, false, false).unwrap();
    assert_abs_diff_eq!(spline[3], 10.0, epsilon = 1e-9);
}

#[test]
fn centre_alignment() {
    let source = array![0.0, 10.0, 20.0, 30.0];
    // coordinates 0.5 and 2.5
    let result = resample(&source, &[2], Method::Linear, true, false).unwrap();
    assert_abs_diff_eq!(result, array![5.0, 25.0], epsilon = 1e-12);
    let result = resample(&source, &[2], Method::Linear, false, false).unwrap();
    assert_abs_diff_eq!(result, array![0.0, 20.0], epsilon = 1e-12);
}

#[test]
fn separable_linear_is_bilinear() {
    let source = array![[0.0, 1.0], [2.0, 4.0]];
    let result = resample(&source, &[3, 3], Method::Linear, false, true).unwrap();
    assert_abs_diff_eq!(
        result,
        array![[0.0, 0.5, 1.0], [1.0, 1.75, 2.5], [2.0, 3.0, 4.0]],
        epsilon = 1e-12
    );
}

#[test]
fn three_dimensional_views() {
    let data = Array3::from_shape_fn((4, 3, 6), |(i, j, k)| (i + 2 * j + 3 * k) as f64);
    let view = data.slice(s![..;2, .., 1..]);
    let result = resample(&view, &[3, 5, 9], Method::Linear, false, true).unwrap();
    assert_eq!(result.shape(), &[3, 5, 9]);
    // the view samples i = 0, 2 and k = 1..6, the ramp stays a ramp
    assert_abs_diff_eq!(result[[0, 0, 0]], 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result[[2, 4, 8]], 2.0 + 4.0 + 15.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result[[1, 2, 4]], 1.0 + 2.0 + 9.0, epsilon = 1e-12);
}

#[test]
fn dynamic_dimension() {
    let source = Array::from_shape_fn(IxDyn(&[3, 4]), |ix| (ix[0] * 4 + ix[1]) as f64);
    let result = resample(&source, &[6, 8], Method::Neighbour, false, false).unwrap();
    assert_eq!(result.shape(), &[6, 8]);
    assert_eq!(result.raw_dim().ndim(), 2);
    assert!(matches!(
        resample(&source, &[6, 8, 1], Method::Neighbour, false, false),
        Err(ResampleError::ShapeMismatch(_))
    ));
}

#[test]
fn nan_propagates() {
    let source = array![1.0, f64::NAN, 3.0, 4.0];
    let linear = resample(&source, &[7], Method::Linear, false, true).unwrap();
    assert!(linear.iter().any(|v| v.is_nan()));
    let spline = resample(&source, &[7], Method::Spline, false, true).unwrap();
    assert!(spline.iter().any(|v| v.is_nan()));

    let neighbour = resample(&source, &[8], Method::Neighbour, false, false).unwrap();
    assert_eq!(neighbour[0], 1.0);
    assert!(neighbour[1].is_nan() && neighbour[2].is_nan());
    assert_eq!(neighbour[7], 4.0);
}

#[test]
fn infinity_is_copied() {
    let source = array![f64::INFINITY, 0.0];
    let result = resample(&source, &[4], Method::Nearest, false, false).unwrap();
    assert_eq!(result, array![f64::INFINITY, f64::INFINITY, 0.0, 0.0]);
}

#[test]
fn single_precision() {
    let source: Array1<f32> = array![0.0, 1.0, 2.0];
    let result = resample(&source, &[5], Method::Linear, false, true).unwrap();
    assert_abs_diff_eq!(result, array![0.0f32, 0.5, 1.0, 1.5, 2.0], epsilon = 1e-6);
}

#[test]
fn integer_sources() {
    let resampler = Resampler::builder([2, 3])
        .method(Method::Linear)
        .minusone(true)
        .build()
        .unwrap();
    let source = array![[0i32, 10, 20], [-30, -40, -50]];
    let result = resampler.resample_cast::<f64, _, _>(&source).unwrap();
    assert_abs_diff_eq!(result, source.mapv(f64::from), epsilon = 1e-12);

    let upsampled = Resampler::builder([2, 5])
        .minusone(true)
        .build()
        .unwrap()
        .resample_cast::<f64, _, _>(&source)
        .unwrap();
    assert_abs_diff_eq!(
        upsampled.row(1),
        array![-30.0, -35.0, -40.0, -45.0, -50.0],
        epsilon = 1e-12
    );

    let neighbour = Resampler::builder([4, 6])
        .build()
        .unwrap()
        .resample_neighbour(&source)
        .unwrap();
    assert!(neighbour.iter().all(|v| source.iter().any(|s| s == v)));
}

#[test]
fn methods_parse_from_strings() {
    let source = array![0.0, 1.0];
    for name in ["neighbour", "nearest", "linear", "spline"] {
        let method: Method = name.parse().unwrap();
        assert!(resample(&source, &[3], method, false, true).is_ok());
    }
    assert!(matches!(
        "cubic".parse::<Method>(),
        Err(ResampleError::UnsupportedMethod(_))
    ));
}

#[test]
fn resampler_is_reusable() {
    let resampler = Resampler::builder([3])
        .method(Method::Nearest)
        .centre(true)
        .build()
        .unwrap();
    let a = resampler.resample(&array![1.0, 2.0, 3.0]).unwrap();
    let b = resampler.resample(&array![4.0, 5.0, 6.0]).unwrap();
    assert_eq!(a, array![1.0, 2.0, 3.0]);
    assert_eq!(b, array![4.0, 5.0, 6.0]);
}
