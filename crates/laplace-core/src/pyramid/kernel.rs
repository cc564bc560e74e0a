use ndarray::{Array1, Array2, Axis};

use crate::consts::KERNEL_SIZE;

/// 1D generating vector `[1/4 - a/2, 1/4, a, 1/4, 1/4 - a/2]`.
///
/// The taps sum to 1 for every `a`.
pub fn generating_vector(a: f32) -> [f32; KERNEL_SIZE] {
    let outer = 0.25 - a / 2.0;
    [outer, 0.25, a, 0.25, outer]
}

/// Build the 5x5 separable smoothing kernel `w * w^T` for parameter `a`.
pub fn generating_kernel(a: f32) -> Array2<f32> {
    let w = Array1::from(generating_vector(a).to_vec());
    let column = w.view().insert_axis(Axis(1));
    let row = w.view().insert_axis(Axis(0));
    column.dot(&row)
}
