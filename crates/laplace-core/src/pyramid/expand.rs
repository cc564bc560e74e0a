use ndarray::Array2;

use crate::consts::{EXPAND_GAIN, KERNEL_RADIUS, KERNEL_SIZE};

use super::border::BorderPolicy;
use super::rows::fill_by_rows;

/// Source indices read by one expanded output index.
///
/// Offset `m` contributes only when `out - m` is even (zero-insertion), and
/// then reads source index `(out - m) / 2`.
fn expand_taps(out: usize, src_len: usize, border: BorderPolicy) -> [Option<usize>; KERNEL_SIZE] {
    let mut taps = [None; KERNEL_SIZE];
    for (k, tap) in taps.iter_mut().enumerate() {
        let shifted = out as isize - (k as isize - KERNEL_RADIUS);
        if shifted.rem_euclid(2) == 0 {
            *tap = border.map_index(shifted.div_euclid(2), src_len);
        }
    }
    taps
}

/// Upsample `data` by 2x to exactly `rows x cols`.
///
/// Equivalent to inserting zeros between samples, convolving with `kernel`
/// and scaling by 4.
pub fn expand(
    data: &Array2<f32>,
    kernel: &Array2<f32>,
    rows: usize,
    cols: usize,
    border: BorderPolicy,
) -> Array2<f32> {
    let (src_h, src_w) = data.dim();
    let col_taps: Vec<_> = (0..cols).map(|j| expand_taps(j, src_w, border)).collect();

    fill_by_rows(rows, cols, |i, mut out| {
        let row_taps = expand_taps(i, src_h, border);
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
            out[j] = EXPAND_GAIN * sum;
        }
    })
}
