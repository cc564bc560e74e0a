use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_KERNEL_A, DEFAULT_LEVELS, DEFAULT_QUANTIZATION};
use crate::error::{LaplaceError, Result};

use super::border::BorderPolicy;

/// Parameters for building a Laplacian pyramid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PyramidParams {
    /// Number of stored planes, baseband included (at least 1).
    #[serde(default = "default_levels")]
    pub levels: usize,
    /// Quantization step for detail planes. 0.0 = lossless.
    #[serde(default = "default_quantization")]
    pub quantization: f32,
    /// Generating-kernel parameter `a`.
    #[serde(default = "default_kernel_a")]
    pub kernel_a: f32,
    #[serde(default)]
    pub border: BorderPolicy,
}

fn default_levels() -> usize {
    DEFAULT_LEVELS
}

fn default_quantization() -> f32 {
    DEFAULT_QUANTIZATION
}

fn default_kernel_a() -> f32 {
    DEFAULT_KERNEL_A
}

impl Default for PyramidParams {
    fn default() -> Self {
        Self {
            levels: DEFAULT_LEVELS,
            quantization: DEFAULT_QUANTIZATION,
            kernel_a: DEFAULT_KERNEL_A,
            border: BorderPolicy::default(),
        }
    }
}

impl PyramidParams {
    pub fn new(levels: usize, quantization: f32) -> Self {
        Self {
            levels,
            quantization,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.levels == 0 {
            return Err(LaplaceError::InvalidLevels(self.levels));
        }
        if !self.quantization.is_finite() || self.quantization < 0.0 {
            return Err(LaplaceError::InvalidQuantization(self.quantization));
        }
        if !self.kernel_a.is_finite() {
            return Err(LaplaceError::InvalidKernel(self.kernel_a));
        }
        Ok(())
    }
}
