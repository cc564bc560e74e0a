use ndarray::Array2;

/// Round every sample to the nearest multiple of `step`.
///
/// A step of 0.0 leaves the plane unchanged.
pub fn quantize(plane: &Array2<f32>, step: f32) -> Array2<f32> {
    if step == 0.0 {
        return plane.clone();
    }
    plane.mapv(|v| (v / step).round() * step)
}

/// In-place variant of [`quantize`].
pub fn quantize_inplace(plane: &mut Array2<f32>, step: f32) {
    if step == 0.0 {
        return;
    }
    plane.mapv_inplace(|v| (v / step).round() * step);
}
