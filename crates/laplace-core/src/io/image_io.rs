use std::path::Path;

use image::{GrayImage, ImageBuffer, ImageFormat, Luma, Rgb, RgbImage};
use ndarray::Array2;

use crate::consts::{DIFFERENCE_OFFSET, PEAK_8BIT};
use crate::error::Result;
use crate::frame::{ColorFrame, Frame};

/// Scale factor from the 0..=255 working range to 16-bit output.
const SCALE_TO_16BIT: f32 = 65535.0 / PEAK_8BIT;

fn to_u8(v: f32) -> u8 {
    v.clamp(0.0, PEAK_8BIT).round() as u8
}

fn to_u16(v: f32) -> u16 {
    (v.clamp(0.0, PEAK_8BIT) * SCALE_TO_16BIT).round() as u16
}

/// Save a frame as 16-bit grayscale TIFF.
pub fn save_tiff(frame: &Frame, path: &Path) -> Result<()> {
    let (h, w) = frame.data.dim();
    let img = ImageBuffer::<Luma<u16>, Vec<u16>>::from_fn(w as u32, h as u32, |x, y| {
        Luma([to_u16(frame.data[[y as usize, x as usize]])])
    });
    img.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save a frame as 8-bit grayscale PNG.
pub fn save_png(frame: &Frame, path: &Path) -> Result<()> {
    let (h, w) = frame.data.dim();
    let img = GrayImage::from_fn(w as u32, h as u32, |x, y| {
        Luma([to_u8(frame.data[[y as usize, x as usize]])])
    });
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save frame, choosing format from file extension.
pub fn save_image(frame: &Frame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => save_tiff(frame, path),
        Some("png") => save_png(frame, path),
        _ => save_png(frame, path),
    }
}

/// Save a signed difference image, shifted so zero error is mid-grey.
pub fn save_difference(difference: &Array2<f32>, path: &Path) -> Result<()> {
    let shifted = difference.mapv(|v| v + DIFFERENCE_OFFSET);
    save_image(&Frame::new(shifted, 8), path)
}

/// Save a signed per-channel difference image, shifted so zero error is mid-grey.
pub fn save_color_difference(difference: &ColorFrame, path: &Path) -> Result<()> {
    let shift = |f: &Frame| Frame::new(f.data.mapv(|v| v + DIFFERENCE_OFFSET), 8);
    let shifted = ColorFrame {
        red: shift(&difference.red),
        green: shift(&difference.green),
        blue: shift(&difference.blue),
    };
    save_color_image(&shifted, path)
}

/// Save a ColorFrame as 16-bit RGB TIFF.
pub fn save_color_tiff(color: &ColorFrame, path: &Path) -> Result<()> {
    let img = ImageBuffer::<Rgb<u16>, Vec<u16>>::from_fn(
        color.width() as u32,
        color.height() as u32,
        |x, y| {
            let idx = [y as usize, x as usize];
            Rgb([
                to_u16(color.red.data[idx]),
                to_u16(color.green.data[idx]),
                to_u16(color.blue.data[idx]),
            ])
        },
    );
    img.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save a ColorFrame as 8-bit RGB PNG.
pub fn save_color_png(color: &ColorFrame, path: &Path) -> Result<()> {
    let img = RgbImage::from_fn(color.width() as u32, color.height() as u32, |x, y| {
        let idx = [y as usize, x as usize];
        Rgb([
            to_u8(color.red.data[idx]),
            to_u8(color.green.data[idx]),
            to_u8(color.blue.data[idx]),
        ])
    });
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a ColorFrame, choosing format from file extension.
pub fn save_color_image(color: &ColorFrame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => save_color_tiff(color, path),
        Some("png") => save_color_png(color, path),
        _ => save_color_png(color, path),
    }
}

/// Load an image file as a single grayscale Frame on the 0..=255 scale.
pub fn load_image(path: &Path) -> Result<Frame> {
    let gray = image::open(path)?.to_luma8();
    let (w, h) = gray.dimensions();
    let data = Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
        gray.get_pixel(col as u32, row as u32).0[0] as f32
    });
    Ok(Frame::new(data, 8))
}

/// Load an image file as three channel Frames on the 0..=255 scale.
pub fn load_color_image(path: &Path) -> Result<ColorFrame> {
    let rgb = image::open(path)?.to_rgb8();
    let (w, h) = rgb.dimensions();
    let channel = |c: usize| {
        let data = Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
            rgb.get_pixel(col as u32, row as u32).0[c] as f32
        });
        Frame::new(data, 8)
    };
    Ok(ColorFrame {
        red: channel(0),
        green: channel(1),
        blue: channel(2),
    })
}
