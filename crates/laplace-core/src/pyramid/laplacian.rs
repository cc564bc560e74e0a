//! Laplacian pyramid encode/decode.
//!
//! Construction validates the image size, builds the Gaussian chain and
//! stores one band-pass detail plane per level plus the coarsest Gaussian
//! level as baseband. The pyramid is immutable afterwards.

use std::ops::Index;

use ndarray::Array2;
use tracing::debug;

use crate::error::{LaplaceError, Result};
use crate::frame::Frame;

use super::expand::expand;
use super::kernel::generating_kernel;
use super::params::PyramidParams;
use super::quantize::quantize_inplace;
use super::reduce::reduce_to_gaussians;
use super::scale::fit_to_levels;

#[derive(Clone, Debug)]
pub struct LaplacianPyramid {
    /// Index 0 = finest detail, last = baseband.
    planes: Vec<Array2<f32>>,
    kernel: Array2<f32>,
    params: PyramidParams,
}

impl LaplacianPyramid {
    /// Encode `data` into `levels` planes, quantizing detail planes with
    /// step `quantization` (0.0 = lossless).
    pub fn new(data: &Array2<f32>, levels: usize, quantization: f32) -> Result<Self> {
        Self::with_params(data, &PyramidParams::new(levels, quantization))
    }

    pub fn with_params(data: &Array2<f32>, params: &PyramidParams) -> Result<Self> {
        params.validate()?;
        let levels = params.levels;
        let kernel = generating_kernel(params.kernel_a);

        let validated = fit_to_levels(data, levels)?;
        let gaussians = reduce_to_gaussians(&validated, &kernel, levels, params.border)?;

        let planes = build_planes(gaussians, &kernel, params)?;
        if planes.len() != levels {
            return Err(LaplaceError::InvariantViolation(format!(
                "built {} planes for {levels} levels",
                planes.len()
            )));
        }

        debug!(
            levels,
            dims = ?planes[0].dim(),
            baseband = ?planes[levels - 1].dim(),
            quantization = params.quantization,
            "Built Laplacian pyramid"
        );

        Ok(Self {
            planes,
            kernel,
            params: params.clone(),
        })
    }

    /// Encode the pixel data of a frame.
    pub fn from_frame(frame: &Frame, params: &PyramidParams) -> Result<Self> {
        Self::with_params(&frame.data, params)
    }

    /// Reconstruct the image: start from the baseband, then repeatedly
    /// expand and add the next finer detail plane.
    pub fn decode(&self) -> Array2<f32> {
        let Some((baseband, details)) = self.planes.split_last() else {
            return Array2::zeros((0, 0));
        };

        let mut result = baseband.clone();
        for detail in details.iter().rev() {
            let (rows, cols) = detail.dim();
            result = expand(&result, &self.kernel, rows, cols, self.params.border);
            result += detail;
        }

        debug!(dims = ?result.dim(), "Decoded Laplacian pyramid");
        result
    }

    /// Stored plane at `level` (0 = finest detail, `levels() - 1` = baseband).
    pub fn at(&self, level: usize) -> Result<&Array2<f32>> {
        self.planes.get(level).ok_or(LaplaceError::LevelOutOfRange {
            level,
            total: self.planes.len(),
        })
    }

    pub fn levels(&self) -> usize {
        self.planes.len()
    }

    pub fn planes(&self) -> &[Array2<f32>] {
        &self.planes
    }

    pub fn baseband(&self) -> &Array2<f32> {
        &self.planes[self.planes.len() - 1]
    }

    pub fn kernel(&self) -> &Array2<f32> {
        &self.kernel
    }

    pub fn params(&self) -> &PyramidParams {
        &self.params
    }

    /// `(rows, cols)` of the validated image, which is also the size of
    /// [`decode`](Self::decode)'s output.
    pub fn dimensions(&self) -> (usize, usize) {
        self.planes[0].dim()
    }
}

impl Index<usize> for LaplacianPyramid {
    type Output = Array2<f32>;

    fn index(&self, level: usize) -> &Array2<f32> {
        &self.planes[level]
    }
}

/// Turn the Gaussian chain into detail planes plus baseband.
///
/// Each Gaussian level is replaced in place by its difference with the
/// expanded next-coarser level, so at most one extra plane is alive at a time.
fn build_planes(
    mut gaussians: Vec<Array2<f32>>,
    kernel: &Array2<f32>,
    params: &PyramidParams,
) -> Result<Vec<Array2<f32>>> {
    if gaussians.len() != params.levels {
        return Err(LaplaceError::InvariantViolation(format!(
            "expected {} Gaussian levels, got {}",
            params.levels,
            gaussians.len()
        )));
    }

    for level in 0..gaussians.len().saturating_sub(1) {
        let (rows, cols) = gaussians[level].dim();
        let expanded = expand(&gaussians[level + 1], kernel, rows, cols, params.border);
        let detail = &mut gaussians[level];
        *detail -= &expanded;
        quantize_inplace(detail, params.quantization);
    }

    Ok(gaussians)
}
