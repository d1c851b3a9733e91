//! Image sink: 8-bit conversion and PNG export.
//!
//! Colors are linear `[0, 1]` floats. They are written without gamma
//! correction: each channel is clamped and scaled to `0..=255`.

use std::path::Path;

use crate::ImageBuffer;
use glint_core::Color;
use glint_math::Interval;
use image::RgbImage;
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let c = Interval::UNIT.clamp_vec(color) * 255.0;
    [c.x.round() as u8, c.y.round() as u8, c.z.round() as u8]
}

/// Convert the whole buffer to an `image` crate RGB image.
pub fn to_rgb8(image: &ImageBuffer) -> OutputResult<RgbImage> {
    let mut bytes = Vec::with_capacity(image.pixels.len() * 3);
    for color in &image.pixels {
        bytes.extend_from_slice(&color_to_rgb8(*color));
    }

    RgbImage::from_raw(image.width, image.height, bytes).ok_or(OutputError::BufferSize {
        width: image.width,
        height: image.height,
    })
}

/// Write the buffer to `path` as PNG.
pub fn save_png<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    to_rgb8(image)?.save_with_format(path, image::ImageFormat::Png)?;
    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_rgb8() {
        assert_eq!(color_to_rgb8(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb8(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb8(Color::new(0.5, 2.0, -1.0)), [128, 255, 0]);
    }

    #[test]
    fn test_to_rgb8_layout() {
        let mut image = ImageBuffer::new(3, 2);
        // Row 1, column 2
        image.pixels[5] = Color::new(1.0, 0.0, 0.0);

        let rgb = to_rgb8(&image).unwrap();
        assert_eq!(rgb.dimensions(), (3, 2));
        // image crate addresses pixels as (x, y) = (col, row)
        assert_eq!(rgb.get_pixel(2, 1).0, [255, 0, 0]);
        assert_eq!(rgb.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_mismatched_buffer_is_error() {
        let mut image = ImageBuffer::new(3, 2);
        image.pixels.pop();
        assert!(matches!(
            to_rgb8(&image),
            Err(OutputError::BufferSize { width: 3, height: 2 })
        ));
    }

    #[test]
    fn test_save_png_round_trip() {
        let mut image = ImageBuffer::new(4, 4);
        image.pixels[3 * 4] = Color::new(0.0, 1.0, 0.0);

        let path = std::env::temp_dir().join(format!("glint_output_{}.png", std::process::id()));
        save_png(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.dimensions(), (4, 4));
        assert_eq!(loaded.get_pixel(0, 3).0, [0, 255, 0]);
    }
}
