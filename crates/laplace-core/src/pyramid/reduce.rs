use ndarray::Array2;
use tracing::debug;

use crate::consts::{KERNEL_RADIUS, KERNEL_SIZE};
use crate::error::{LaplaceError, Result};

use super::border::BorderPolicy;
use super::rows::fill_by_rows;
use super::scale::{is_valid_dimension, level_size};

/// Source indices read by one reduced output index: `2 * out - m` for
/// kernel offsets `m` in `-2..=2`, in kernel order.
fn reduce_taps(out: usize, src_len: usize, border: BorderPolicy) -> [Option<usize>; KERNEL_SIZE] {
    let mut taps = [None; KERNEL_SIZE];
    for (k, tap) in taps.iter_mut().enumerate() {
        let m = k as isize - KERNEL_RADIUS;
        *tap = border.map_index(2 * out as isize - m, src_len);
    }
    taps
}

/// Smooth `data` with `kernel` and subsample it to exactly `rows x cols`.
///
/// Output sample `(i, j)` is the kernel-weighted sum centred on input
/// sample `(2i, 2j)`. `kernel` must be `KERNEL_SIZE x KERNEL_SIZE`.
pub fn reduce(
    data: &Array2<f32>,
    kernel: &Array2<f32>,
    rows: usize,
    cols: usize,
    border: BorderPolicy,
) -> Array2<f32> {
    let (src_h, src_w) = data.dim();
    let col_taps: Vec<_> = (0..cols).map(|j| reduce_taps(j, src_w, border)).collect();

    fill_by_rows(rows, cols, |i, mut out| {
        let row_taps = reduce_taps(i, src_h, border);
        for (j, taps_c) in col_taps.iter().enumerate() {
            let mut sum = 0.0f32;
            for (km, src_r) in row_taps.iter().enumerate() {
                let Some(src_r) = *src_r else { continue };
                for (kn, src_c) in taps_c.iter().enumerate() {
                    if let Some(src_c) = *src_c {
                        sum += kernel[[km, kn]] * data[[src_r, src_c]];
                    }
                }
            }
            out[j] = sum;
        }
    })
}

/// Build the Gaussian pyramid of a validated image.
///
/// Returns `levels` arrays: index 0 is `data` itself and index `levels - 1`
/// is the coarsest. Target sizes are derived from the level-0 dimensions
/// rather than by halving, so every level satisfies the size chain exactly.
pub fn reduce_to_gaussians(
    data: &Array2<f32>,
    kernel: &Array2<f32>,
    levels: usize,
    border: BorderPolicy,
) -> Result<Vec<Array2<f32>>> {
    let (height, width) = data.dim();
    if levels == 0 {
        return Err(LaplaceError::InvalidLevels(levels));
    }
    if !is_valid_dimension(height, levels) || !is_valid_dimension(width, levels) {
        return Err(LaplaceError::InvariantViolation(format!(
            "{width}x{height} image was not validated for {levels} levels"
        )));
    }

    let mut gaussians = Vec::with_capacity(levels);
    gaussians.push(data.clone());

    for level in 1..levels {
        let rows = level_size(height, levels, level);
        let cols = level_size(width, levels, level);
        let reduced = reduce(&gaussians[level - 1], kernel, rows, cols, border);
        debug!(level, rows, cols, "Reduced Gaussian level");
        gaussians.push(reduced);
    }

    Ok(gaussians)
}
