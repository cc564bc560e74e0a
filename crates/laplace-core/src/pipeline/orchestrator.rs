use std::sync::Arc;

use tracing::info;

use crate::consts::{COLOR_CHANNEL_COUNT, PEAK_8BIT};
use crate::error::Result;
use crate::frame::{ColorFrame, Frame};
use crate::io::image_io::{
    load_color_image, load_image, save_color_difference, save_color_image, save_difference,
    save_image,
};
use crate::pyramid::{ColorPyramid, LaplacianPyramid};
use crate::quality::reconstruction::{
    combine_stats, difference_image, reconstruction_error, ErrorStats,
};

use super::config::CodecConfig;
use super::types::{DecodedImage, NoOpReporter, PipelineOutput, PipelineStage, ProgressReporter};

/// Run an encode/decode round trip with a thread-safe progress reporter.
pub fn run_pipeline_reported(
    config: &CodecConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<PipelineOutput> {
    config.pyramid.validate()?;
    info!(
        input = %config.input.display(),
        levels = config.pyramid.levels,
        quantization = config.pyramid.quantization,
        border = %config.pyramid.border,
        color = config.color,
        "Starting Laplacian pyramid round trip"
    );

    if config.color {
        run_color(config, reporter.as_ref())
    } else {
        run_mono(config, reporter.as_ref())
    }
}

/// Run an encode/decode round trip without progress reporting.
pub fn run_pipeline(config: &CodecConfig) -> Result<PipelineOutput> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}

fn run_mono(config: &CodecConfig, reporter: &dyn ProgressReporter) -> Result<PipelineOutput> {
    reporter.begin_stage(PipelineStage::Reading, None);
    let frame = load_image(&config.input)?;
    info!(width = frame.width(), height = frame.height(), "Image loaded");
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Encoding, Some(1));
    let pyramid = LaplacianPyramid::from_frame(&frame, &config.pyramid)?;
    reporter.advance(1);
    reporter.finish_stage();
    log_planes(&pyramid);

    reporter.begin_stage(PipelineStage::Decoding, Some(1));
    let decoded = Frame::new(pyramid.decode(), frame.original_bit_depth);
    reporter.advance(1);
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Measuring, None);
    let stats = reconstruction_error(&frame.data, &decoded.data, PEAK_8BIT)?;
    log_stats(&stats);
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Writing, None);
    save_image(&decoded, &config.output)?;
    if let Some(ref path) = config.difference {
        let difference = difference_image(&frame.data, &decoded.data)?;
        save_difference(&difference, path)?;
        info!(output = %path.display(), "Difference image saved");
    }
    info!(output = %config.output.display(), "Decoded image saved");
    reporter.finish_stage();

    Ok(PipelineOutput {
        decoded: DecodedImage::Mono(decoded),
        stats,
        levels: pyramid.levels(),
        plane_dims: plane_dims(&pyramid),
    })
}

fn run_color(config: &CodecConfig, reporter: &dyn ProgressReporter) -> Result<PipelineOutput> {
    reporter.begin_stage(PipelineStage::Reading, None);
    let color = load_color_image(&config.input)?;
    info!(width = color.width(), height = color.height(), "Color image loaded");
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Encoding, Some(COLOR_CHANNEL_COUNT));
    let pyramid = ColorPyramid::new(&color, &config.pyramid)?;
    reporter.advance(COLOR_CHANNEL_COUNT);
    reporter.finish_stage();
    log_planes(&pyramid.red);

    reporter.begin_stage(PipelineStage::Decoding, Some(COLOR_CHANNEL_COUNT));
    let decoded = pyramid.decode();
    reporter.advance(COLOR_CHANNEL_COUNT);
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Measuring, None);
    let per_channel = [
        reconstruction_error(&color.red.data, &decoded.red.data, PEAK_8BIT)?,
        reconstruction_error(&color.green.data, &decoded.green.data, PEAK_8BIT)?,
        reconstruction_error(&color.blue.data, &decoded.blue.data, PEAK_8BIT)?,
    ];
    let stats = combine_stats(&per_channel, PEAK_8BIT);
    log_stats(&stats);
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Writing, None);
    save_color_image(&decoded, &config.output)?;
    if let Some(ref path) = config.difference {
        save_color_difference(&color_difference(&color, &decoded)?, path)?;
        info!(output = %path.display(), "Difference image saved");
    }
    info!(output = %config.output.display(), "Decoded color image saved");
    reporter.finish_stage();

    Ok(PipelineOutput {
        decoded: DecodedImage::Color(decoded),
        stats,
        levels: pyramid.levels(),
        plane_dims: plane_dims(&pyramid.red),
    })
}

fn color_difference(original: &ColorFrame, decoded: &ColorFrame) -> Result<ColorFrame> {
    let channel = |a: &Frame, b: &Frame| -> Result<Frame> {
        Ok(Frame::new(difference_image(&a.data, &b.data)?, a.original_bit_depth))
    };
    Ok(ColorFrame {
        red: channel(&original.red, &decoded.red)?,
        green: channel(&original.green, &decoded.green)?,
        blue: channel(&original.blue, &decoded.blue)?,
    })
}

fn plane_dims(pyramid: &LaplacianPyramid) -> Vec<(usize, usize)> {
    pyramid.planes().iter().map(|p| p.dim()).collect()
}

fn log_planes(pyramid: &LaplacianPyramid) {
    let (rows, cols) = pyramid.dimensions();
    info!(
        levels = pyramid.levels(),
        rows,
        cols,
        baseband = ?pyramid.baseband().dim(),
        "Pyramid encoded"
    );
}

fn log_stats(stats: &ErrorStats) {
    info!(
        max_abs = stats.max_abs,
        rmse = stats.rmse,
        psnr = stats.psnr,
        "Reconstruction error"
    );
}
