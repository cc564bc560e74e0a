use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use laplace_core::io::image_io::load_image;
use laplace_core::pyramid::LaplacianPyramid;

use super::args::PyramidArgs;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    #[command(flatten)]
    pub pyramid: PyramidArgs,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let params = args.pyramid.to_params();
    let pyramid = LaplacianPyramid::from_frame(&frame, &params)?;
    let (rows, cols) = pyramid.dimensions();

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", frame.width(), frame.height());
    println!("Validated:   {}x{}", cols, rows);
    println!("Levels:      {}", pyramid.levels());
    println!("Kernel a:    {}", params.kernel_a);
    println!("Border:      {}", params.border);
    println!();

    for (level, plane) in pyramid.planes().iter().enumerate() {
        let kind = if level + 1 == pyramid.levels() {
            "baseband"
        } else {
            "detail"
        };
        let min = plane.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = plane.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let mean = plane.mean().unwrap_or(0.0);
        println!(
            "  [{level}] {kind:<9} {:>5}x{:<5} min {min:>9.3}  max {max:>9.3}  mean {mean:>9.3}",
            plane.ncols(),
            plane.nrows()
        );
    }

    Ok(())
}
