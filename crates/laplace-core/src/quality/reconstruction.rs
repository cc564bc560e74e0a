use ndarray::{s, Array2, Zip};

use crate::error::{LaplaceError, Result};

/// Pixel error between an original image and its reconstruction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorStats {
    pub max_abs: f32,
    pub mean_abs: f64,
    pub rmse: f64,
    /// Peak signal-to-noise ratio in dB; infinite for an exact match.
    pub psnr: f64,
}

/// Common top-left region of two images.
fn overlap(original: &Array2<f32>, decoded: &Array2<f32>) -> Result<(usize, usize)> {
    let rows = original.nrows().min(decoded.nrows());
    let cols = original.ncols().min(decoded.ncols());
    if rows == 0 || cols == 0 {
        return Err(LaplaceError::DimensionMismatch {
            expected: original.dim(),
            actual: decoded.dim(),
        });
    }
    Ok((rows, cols))
}

/// Compare `decoded` against `original` over their overlapping region.
///
/// The decoded image may be smaller when the encoder trimmed the input.
pub fn reconstruction_error(
    original: &Array2<f32>,
    decoded: &Array2<f32>,
    peak: f32,
) -> Result<ErrorStats> {
    let (rows, cols) = overlap(original, decoded)?;
    let a = original.slice(s![..rows, ..cols]);
    let b = decoded.slice(s![..rows, ..cols]);

    let mut max_abs = 0.0f32;
    let mut sum_abs = 0.0f64;
    let mut sum_sq = 0.0f64;
    Zip::from(&a).and(&b).for_each(|&x, &y| {
        let diff = x - y;
        max_abs = max_abs.max(diff.abs());
        sum_abs += diff.abs() as f64;
        sum_sq += (diff as f64) * (diff as f64);
    });

    let n = (rows * cols) as f64;
    let mse = sum_sq / n;
    Ok(ErrorStats {
        max_abs,
        mean_abs: sum_abs / n,
        rmse: mse.sqrt(),
        psnr: psnr(mse, peak),
    })
}

/// Merge per-channel statistics into one set: worst-case maximum, mean of
/// the mean absolute errors and RMSE/PSNR from the mean squared error.
pub fn combine_stats(channels: &[ErrorStats], peak: f32) -> ErrorStats {
    if channels.is_empty() {
        return ErrorStats::default();
    }
    let n = channels.len() as f64;
    let max_abs = channels.iter().map(|s| s.max_abs).fold(0.0f32, f32::max);
    let mean_abs = channels.iter().map(|s| s.mean_abs).sum::<f64>() / n;
    let mse = channels.iter().map(|s| s.rmse * s.rmse).sum::<f64>() / n;
    ErrorStats {
        max_abs,
        mean_abs,
        rmse: mse.sqrt(),
        psnr: psnr(mse, peak),
    }
}

fn psnr(mse: f64, peak: f32) -> f64 {
    if mse > 0.0 {
        10.0 * ((peak as f64 * peak as f64) / mse).log10()
    } else {
        f64::INFINITY
    }
}

/// Signed difference `original - decoded` over the overlapping region.
pub fn difference_image(original: &Array2<f32>, decoded: &Array2<f32>) -> Result<Array2<f32>> {
    let (rows, cols) = overlap(original, decoded)?;
    Ok(&original.slice(s![..rows, ..cols]) - &decoded.slice(s![..rows, ..cols]))
}
