use serde::{Deserialize, Serialize};

/// How reduce/expand treat source indices that fall outside the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderPolicy {
    /// Negative indices contribute nothing; indices past the end clamp to the
    /// last row/column.
    ///
    /// The low side loses kernel weight, which darkens the top and left
    /// borders of every reduced level.
    #[default]
    SkipLowClampHigh,
    /// Clamp to the nearest valid index on both sides.
    Replicate,
}

impl std::fmt::Display for BorderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SkipLowClampHigh => write!(f, "Skip low / clamp high"),
            Self::Replicate => write!(f, "Replicate"),
        }
    }
}

impl BorderPolicy {
    /// Map a possibly out-of-range index into `[0, len)`, or `None` if the
    /// sample should be dropped.
    pub fn map_index(self, idx: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        if idx < 0 {
            return match self {
                Self::SkipLowClampHigh => None,
                Self::Replicate => Some(0),
            };
        }
        Some((idx as usize).min(len - 1))
    }
}
