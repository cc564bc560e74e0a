use ndarray::{Array2, ArrayViewMut1, Axis};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Allocate a `(rows, cols)` plane and fill it one output row at a time.
///
/// Rows are filled in parallel once the plane reaches
/// `PARALLEL_PIXEL_THRESHOLD` pixels. Each row is computed by the same
/// closure either way, so the result does not depend on the path taken.
pub(crate) fn fill_by_rows<F>(rows: usize, cols: usize, fill_row: F) -> Array2<f32>
where
    F: Fn(usize, ArrayViewMut1<f32>) + Sync,
{
    let mut result = Array2::<f32>::zeros((rows, cols));

    if rows * cols >= PARALLEL_PIXEL_THRESHOLD {
        if let Some(buf) = result.as_slice_mut() {
            buf.par_chunks_mut(cols)
                .enumerate()
                .for_each(|(row, out)| fill_row(row, ArrayViewMut1::from(out)));
            return result;
        }
    }

    for (row, out) in result.axis_iter_mut(Axis(0)).enumerate() {
        fill_row(row, out);
    }
    result
}
