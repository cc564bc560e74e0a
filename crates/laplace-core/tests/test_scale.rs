use ndarray::Array2;

use laplace_core::error::LaplaceError;
use laplace_core::pyramid::scale::{coarsest_size, fit_to_levels, is_valid_dimension};

#[test]
fn test_valid_dimensions() {
    assert!(is_valid_dimension(509, 5));
    assert!(is_valid_dimension(61, 5));
    assert!(!is_valid_dimension(512, 5));
    assert!(!is_valid_dimension(510, 5));
    // (29 + 3) / 32 = 1: integral but the baseband would be empty
    assert!(!is_valid_dimension(29, 5));
    assert_eq!(coarsest_size(509, 5), 16);
}

#[test]
fn test_fit_trims_to_largest_valid_size() {
    let data = Array2::from_shape_fn((512, 512), |(r, c)| (r * 512 + c) as f32);
    let fitted = fit_to_levels(&data, 5).unwrap();
    assert_eq!(fitted.dim(), (509, 509));
    // Trimming only removes trailing rows/columns.
    assert_eq!(fitted[[0, 0]], data[[0, 0]]);
    assert_eq!(fitted[[508, 508]], data[[508, 508]]);
}

#[test]
fn test_fit_keeps_valid_image_unchanged() {
    let data = Array2::from_shape_fn((125, 61), |(r, c)| (r + c) as f32);
    let fitted = fit_to_levels(&data, 4).unwrap();
    assert_eq!(fitted, data);
}

#[test]
fn test_fit_trims_dimensions_independently() {
    let data = Array2::<f32>::zeros((125, 70));
    let fitted = fit_to_levels(&data, 4).unwrap();
    assert_eq!(fitted.dim(), (125, 61));
}

#[test]
fn test_fit_single_level_needs_odd_sizes() {
    let data = Array2::<f32>::zeros((4, 6));
    let fitted = fit_to_levels(&data, 1).unwrap();
    assert_eq!(fitted.dim(), (3, 5));
}

#[test]
fn test_fit_too_small_is_scaling_impossible() {
    let data = Array2::<f32>::zeros((20, 100));
    match fit_to_levels(&data, 5) {
        Err(LaplaceError::ScalingImpossible {
            width,
            height,
            levels,
        }) => {
            assert_eq!((width, height, levels), (100, 20, 5));
        }
        other => panic!("expected ScalingImpossible, got {other:?}"),
    }
}

#[test]
fn test_fit_single_row_is_scaling_impossible() {
    let data = Array2::<f32>::zeros((1, 509));
    assert!(matches!(
        fit_to_levels(&data, 5),
        Err(LaplaceError::ScalingImpossible { .. })
    ));
}
