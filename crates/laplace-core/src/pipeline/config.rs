use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::pyramid::PyramidParams;

/// Encode/decode round-trip job.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CodecConfig {
    pub input: PathBuf,
    /// Where the decoded image is written.
    pub output: PathBuf,
    /// Optional path for the `original - decoded` difference image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difference: Option<PathBuf>,
    /// Encode R, G and B as three independent pyramids instead of luminance.
    #[serde(default)]
    pub color: bool,
    #[serde(default)]
    pub pyramid: PyramidParams,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.png"),
            output: PathBuf::from("decoded.png"),
            difference: None,
            color: false,
            pyramid: PyramidParams::default(),
        }
    }
}
