//! Laplacian pyramid construction and reconstruction.

pub mod border;
pub mod color;
pub mod expand;
pub mod kernel;
pub mod laplacian;
pub mod params;
pub mod quantize;
pub mod reduce;
mod rows;
pub mod scale;

pub use border::BorderPolicy;
pub use color::ColorPyramid;
pub use laplacian::LaplacianPyramid;
pub use params::PyramidParams;
