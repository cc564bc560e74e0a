use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaplaceError {
    #[error("Image {width}x{height} cannot be trimmed to fit {levels} pyramid levels")]
    ScalingImpossible {
        width: usize,
        height: usize,
        levels: usize,
    },

    #[error("Pyramid level {level} out of range (total: {total})")]
    LevelOutOfRange { level: usize, total: usize },

    #[error("Pipeline invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Invalid level count: {0} (must be at least 1)")]
    InvalidLevels(usize),

    #[error("Invalid quantization step: {0} (must be finite and non-negative)")]
    InvalidQuantization(f32),

    #[error("Invalid kernel parameter a: {0} (must be finite)")]
    InvalidKernel(f32),

    #[error("Dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, LaplaceError>;
