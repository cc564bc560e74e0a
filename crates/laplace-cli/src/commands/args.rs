use clap::{Args, ValueEnum};
use laplace_core::consts::{DEFAULT_KERNEL_A, DEFAULT_LEVELS, DEFAULT_QUANTIZATION};
use laplace_core::pyramid::{BorderPolicy, PyramidParams};

#[derive(Clone, Copy, ValueEnum)]
pub enum BorderArg {
    /// Drop samples past the top/left edge, clamp past the bottom/right edge
    SkipLow,
    /// Clamp on every edge
    Replicate,
}

impl From<BorderArg> for BorderPolicy {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::SkipLow => BorderPolicy::SkipLowClampHigh,
            BorderArg::Replicate => BorderPolicy::Replicate,
        }
    }
}

/// Pyramid parameters shared by every subcommand that builds a pyramid.
#[derive(Args)]
pub struct PyramidArgs {
    /// Number of pyramid levels, baseband included
    #[arg(short, long, default_value_t = DEFAULT_LEVELS)]
    pub levels: usize,

    /// Quantization step for detail planes (0 = lossless)
    #[arg(short, long, default_value_t = DEFAULT_QUANTIZATION)]
    pub quantization: f32,

    /// Generating kernel parameter `a`
    #[arg(long, default_value_t = DEFAULT_KERNEL_A)]
    pub kernel_a: f32,

    /// Border handling for reduce/expand
    #[arg(long, value_enum, default_value = "skip-low")]
    pub border: BorderArg,
}

impl PyramidArgs {
    pub fn to_params(&self) -> PyramidParams {
        PyramidParams {
            levels: self.levels,
            quantization: self.quantization,
            kernel_a: self.kernel_a,
            border: self.border.into(),
        }
    }
}
