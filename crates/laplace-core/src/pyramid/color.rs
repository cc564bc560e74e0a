use crate::error::Result;
use crate::frame::{ColorFrame, Frame};

use super::laplacian::LaplacianPyramid;
use super::params::PyramidParams;

/// Three independent per-channel pyramids.
#[derive(Clone, Debug)]
pub struct ColorPyramid {
    pub red: LaplacianPyramid,
    pub green: LaplacianPyramid,
    pub blue: LaplacianPyramid,
    bit_depth: u8,
}

impl ColorPyramid {
    pub fn new(color: &ColorFrame, params: &PyramidParams) -> Result<Self> {
        Ok(Self {
            red: LaplacianPyramid::from_frame(&color.red, params)?,
            green: LaplacianPyramid::from_frame(&color.green, params)?,
            blue: LaplacianPyramid::from_frame(&color.blue, params)?,
            bit_depth: color.red.original_bit_depth,
        })
    }

    /// Decode each channel and recombine.
    pub fn decode(&self) -> ColorFrame {
        ColorFrame {
            red: Frame::new(self.red.decode(), self.bit_depth),
            green: Frame::new(self.green.decode(), self.bit_depth),
            blue: Frame::new(self.blue.decode(), self.bit_depth),
        }
    }

    pub fn levels(&self) -> usize {
        self.red.levels()
    }
}
