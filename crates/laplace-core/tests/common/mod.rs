use std::path::Path;

use ndarray::Array2;

use laplace_core::frame::{ColorFrame, Frame};
use laplace_core::io::image_io::{save_color_png, save_png};

/// Smooth textured test image with values kept inside `[40, 215]`.
pub fn make_textured(h: usize, w: usize) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(r, c)| {
        let (r, c) = (r as f32, c as f32);
        128.0
            + 40.0 * (r * 0.21).sin() * (c * 0.13).cos()
            + 25.0 * (r * 0.7 + c * 0.45).sin()
            + 10.0 * ((r + 2.0 * c) * 1.3).cos()
    })
}

/// Horizontal ramp from 0 to 255 in whole grey levels.
pub fn make_ramp(h: usize, w: usize) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(_, c)| ((c * 255) / (w - 1).max(1)) as f32)
}

pub fn max_abs_diff(a: &Array2<f32>, b: &Array2<f32>) -> f32 {
    assert_eq!(a.dim(), b.dim(), "dimension mismatch");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0f32, f32::max)
}

pub fn rmse(a: &Array2<f32>, b: &Array2<f32>) -> f64 {
    assert_eq!(a.dim(), b.dim(), "dimension mismatch");
    let sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| ((x - y) as f64).powi(2))
        .sum();
    (sum / a.len() as f64).sqrt()
}

/// Write an 8-bit grayscale PNG holding whole-number pixel values.
pub fn write_gray_png(data: &Array2<f32>, path: &Path) {
    let rounded = data.mapv(|v| v.round().clamp(0.0, 255.0));
    save_png(&Frame::new(rounded, 8), path).expect("write test png");
}

/// Write an 8-bit RGB PNG with three differently shaped channels.
pub fn write_color_png(h: usize, w: usize, path: &Path) -> ColorFrame {
    let red = make_textured(h, w).mapv(|v| v.round());
    let green = make_ramp(h, w);
    let blue = red.mapv(|v| 255.0 - v);
    let color = ColorFrame {
        red: Frame::new(red, 8),
        green: Frame::new(green, 8),
        blue: Frame::new(blue, 8),
    };
    save_color_png(&color, path).expect("write test color png");
    color
}
