#[allow(dead_code)]
mod common;

use std::sync::{Arc, Mutex};

use laplace_core::io::image_io::load_image;
use laplace_core::pipeline::config::CodecConfig;
use laplace_core::pipeline::{
    run_pipeline, run_pipeline_reported, DecodedImage, PipelineStage, ProgressReporter,
};
use laplace_core::pyramid::PyramidParams;

#[derive(Default)]
struct RecordingReporter {
    stages: Mutex<Vec<PipelineStage>>,
    advanced: Mutex<usize>,
}

impl ProgressReporter for RecordingReporter {
    fn begin_stage(&self, stage: PipelineStage, _total_items: Option<usize>) {
        self.stages.lock().unwrap().push(stage);
    }

    fn advance(&self, items_done: usize) {
        *self.advanced.lock().unwrap() += items_done;
    }
}

fn mono_config(dir: &std::path::Path, levels: usize, quantization: f32) -> CodecConfig {
    let input = dir.join("input.png");
    common::write_gray_png(&common::make_textured(70, 130), &input);
    CodecConfig {
        input,
        output: dir.join("decoded.png"),
        difference: Some(dir.join("diff.png")),
        color: false,
        pyramid: PyramidParams::new(levels, quantization),
    }
}

#[test]
fn test_mono_lossless_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let config = mono_config(dir.path(), 4, 0.0);

    let output = run_pipeline(&config).unwrap();
    assert_eq!(output.levels, 4);
    assert_eq!(output.plane_dims, vec![(61, 125), (29, 61), (13, 29), (5, 13)]);
    assert!(matches!(output.decoded, DecodedImage::Mono(_)));
    assert_eq!((output.decoded.height(), output.decoded.width()), (61, 125));
    assert!(output.stats.max_abs < 1e-3, "max abs {}", output.stats.max_abs);

    let written = load_image(&config.output).unwrap();
    assert_eq!(written.data.dim(), (61, 125));
    let diff = load_image(config.difference.as_ref().unwrap()).unwrap();
    assert!(diff.data.iter().all(|&v| v == 128.0));
}

#[test]
fn test_mono_quantized_pipeline_is_lossy() {
    let dir = tempfile::tempdir().unwrap();
    let config = mono_config(dir.path(), 4, 16.0);
    let output = run_pipeline(&config).unwrap();
    assert!(output.stats.rmse > 0.0);
    assert!(output.stats.psnr.is_finite());
}

#[test]
fn test_pipeline_reports_stages_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = mono_config(dir.path(), 3, 1.0);
    let reporter = Arc::new(RecordingReporter::default());

    run_pipeline_reported(&config, reporter.clone()).unwrap();

    let stages = reporter.stages.lock().unwrap().clone();
    assert_eq!(
        stages,
        vec![
            PipelineStage::Reading,
            PipelineStage::Encoding,
            PipelineStage::Decoding,
            PipelineStage::Measuring,
            PipelineStage::Writing,
        ]
    );
    assert_eq!(*reporter.advanced.lock().unwrap(), 2);
}

#[test]
fn test_color_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("color.png");
    common::write_color_png(61, 61, &input);
    let config = CodecConfig {
        input,
        output: dir.path().join("decoded.png"),
        difference: Some(dir.path().join("diff.png")),
        color: true,
        pyramid: PyramidParams::new(4, 0.0),
    };

    let output = run_pipeline(&config).unwrap();
    assert!(matches!(output.decoded, DecodedImage::Color(_)));
    assert!(output.stats.max_abs < 1e-3);
    assert!(config.output.exists());
    assert!(dir.path().join("diff.png").exists());
}

#[test]
fn test_pipeline_rejects_too_small_image() {
    let dir = tempfile::tempdir().unwrap();
    let config = mono_config(dir.path(), 7, 1.0);
    assert!(run_pipeline(&config).is_err());
    assert!(!config.output.exists());
}

#[test]
fn test_pipeline_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let config = CodecConfig {
        input: dir.path().join("missing.png"),
        ..CodecConfig::default()
    };
    assert!(run_pipeline(&config).is_err());
}
