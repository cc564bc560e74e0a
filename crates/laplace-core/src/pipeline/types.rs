use crate::frame::{ColorFrame, Frame};
use crate::quality::reconstruction::ErrorStats;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Reading,
    Encoding,
    Decoding,
    Measuring,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "Reading image"),
            Self::Encoding => write!(f, "Encoding pyramid"),
            Self::Decoding => write!(f, "Decoding pyramid"),
            Self::Measuring => write!(f, "Measuring error"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Decoded image, either mono or color.
#[derive(Clone, Debug)]
pub enum DecodedImage {
    Mono(Frame),
    Color(ColorFrame),
}

impl DecodedImage {
    pub fn width(&self) -> usize {
        match self {
            Self::Mono(f) => f.width(),
            Self::Color(cf) => cf.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::Mono(f) => f.height(),
            Self::Color(cf) => cf.height(),
        }
    }
}

/// Result of an encode/decode round trip.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub decoded: DecodedImage,
    pub stats: ErrorStats,
    pub levels: usize,
    /// `(rows, cols)` of every stored plane, finest first.
    pub plane_dims: Vec<(usize, usize)>,
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (e.g., channel count), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
