use approx::relative_eq;
use ndarray::{s, Array2};
use tracing::debug;

use crate::consts::SCALE_EPSILON;
use crate::error::{LaplaceError, Result};

/// `(dim + 3) / 2^levels`, evaluated in floating point.
///
/// Depths past `i32::MAX` saturate the exponent, which drives the result to 0.
fn scaled(dim: usize, levels: usize) -> f64 {
    let exponent = i32::try_from(levels).unwrap_or(i32::MAX);
    (dim as f64 + 3.0) / 2f64.powi(exponent)
}

/// Whether `dim` maps to an integral coarsest size for `levels` levels.
///
/// The coarsest size `M` must also be at least 2, otherwise the stored
/// baseband (`2M - 3` samples wide) would be empty.
pub fn is_valid_dimension(dim: usize, levels: usize) -> bool {
    let value = scaled(dim, levels);
    relative_eq!(
        value,
        value.floor(),
        epsilon = f64::EPSILON,
        max_relative = SCALE_EPSILON
    ) && value.floor() >= 2.0
}

/// Coarsest-level size `M = (dim + 3) / 2^levels`, rounded down.
pub fn coarsest_size(dim: usize, levels: usize) -> usize {
    scaled(dim, levels).floor() as usize
}

/// Size of Gaussian level `level` for a validated dimension `dim`.
///
/// Level 0 is `dim` itself; every following level is `M * 2^(levels - level) - 3`.
/// Returns 0 when the size does not fit in a `usize`.
pub fn level_size(dim: usize, levels: usize, level: usize) -> usize {
    u32::try_from(levels.saturating_sub(level))
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .and_then(|factor| coarsest_size(dim, levels).checked_mul(factor))
        .and_then(|size| size.checked_sub(3))
        .unwrap_or(0)
}

/// Trim the last rows/columns of `data` until both dimensions are valid for
/// `levels` pyramid levels.
///
/// Fails with `ScalingImpossible` once a still-invalid image is down to a
/// single row or column.
pub fn fit_to_levels(data: &Array2<f32>, levels: usize) -> Result<Array2<f32>> {
    let (orig_rows, orig_cols) = data.dim();
    let mut rows = orig_rows;
    let mut cols = orig_cols;

    loop {
        let rows_ok = is_valid_dimension(rows, levels);
        let cols_ok = is_valid_dimension(cols, levels);
        if rows_ok && cols_ok {
            break;
        }
        if rows <= 1 || cols <= 1 {
            return Err(LaplaceError::ScalingImpossible {
                width: orig_cols,
                height: orig_rows,
                levels,
            });
        }
        if !cols_ok {
            cols -= 1;
        }
        if !rows_ok {
            rows -= 1;
        }
    }

    if (rows, cols) != (orig_rows, orig_cols) {
        debug!(
            from = ?(orig_rows, orig_cols),
            to = ?(rows, cols),
            levels,
            "Trimmed image to pyramid-compatible size"
        );
    }

    Ok(data.slice(s![..rows, ..cols]).to_owned())
}
