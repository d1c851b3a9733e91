//! Frame renderer.
//!
//! Walks the pixel grid row by row, casts one primary ray per pixel and
//! shades the nearest hit. Rows never read each other's pixels, so the
//! parallel path hands each rayon task one row slice of the buffer.

use std::ops::{Add, AddAssign};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::hittable::nearest;
use crate::shading::{shade, DegeneratePolicy};
use crate::Camera;
use glint_core::{Color, Scene};
use glint_math::DegenerateVectorError;
use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid resolution {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Degenerate vector at pixel (row {row}, col {col}): {source}")]
    Degenerate {
        row: u32,
        col: u32,
        #[source]
        source: DegenerateVectorError,
    },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// How zero-length directions are handled
    pub degenerate: DegeneratePolicy,
}

/// Counts gathered while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Pixels whose primary ray hit a sphere
    pub hit_pixels: usize,
    /// Hit pixels left black because the light was blocked
    pub shadowed_pixels: usize,
}

impl Add for RenderStats {
    type Output = RenderStats;

    fn add(self, other: RenderStats) -> RenderStats {
        RenderStats {
            hit_pixels: self.hit_pixels + other.hit_pixels,
            shadowed_pixels: self.shadowed_pixels + other.shadowed_pixels,
        }
    }
}

impl AddAssign for RenderStats {
    fn add_assign(&mut self, other: RenderStats) {
        *self = *self + other;
    }
}

/// Outcome of a single primary ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PixelSample {
    /// No sphere in the way
    Miss,
    /// Hit, but the light is blocked
    Shadowed,
    /// Hit and lit
    Lit(Color),
}

impl PixelSample {
    /// Color written to the image (black unless lit).
    pub fn color(&self) -> Color {
        match self {
            PixelSample::Lit(color) => *color,
            PixelSample::Miss | PixelSample::Shadowed => Color::ZERO,
        }
    }
}

/// Image buffer for storing render output.
///
/// Row-major, one [`Color`] per pixel, black by default.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (`row`, `col`).
    pub fn get(&self, row: u32, col: u32) -> Color {
        self.pixels[self.index(row, col)]
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }
}

/// A finished render.
#[derive(Debug, Clone)]
pub struct Frame {
    pub image: ImageBuffer,
    pub stats: RenderStats,
}

/// Trace the primary ray through pixel (`row`, `col`).
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    row: u32,
    col: u32,
    config: &RenderConfig,
) -> RenderResult<PixelSample> {
    let degenerate = |source| RenderError::Degenerate { row, col, source };

    // A degenerate camera ray under the zero policy sees nothing.
    let ray = match camera.get_ray(row, col) {
        Ok(ray) => ray,
        Err(source) => match config.degenerate {
            DegeneratePolicy::Fail => return Err(degenerate(source)),
            DegeneratePolicy::Zero => {
                log::trace!("{source} at pixel ({row}, {col}), leaving it black");
                return Ok(PixelSample::Miss);
            }
        },
    };

    let Some(hit) = nearest(&scene.spheres, &ray) else {
        return Ok(PixelSample::Miss);
    };

    match shade(scene, camera.position(), &ray, hit, config.degenerate) {
        Ok(Some(color)) => Ok(PixelSample::Lit(color)),
        Ok(None) => Ok(PixelSample::Shadowed),
        Err(source) => Err(degenerate(source)),
    }
}

/// Render one row into `pixels` (a `width`-long slice of the image).
fn render_row(
    camera: &Camera,
    scene: &Scene,
    row: u32,
    pixels: &mut [Color],
    config: &RenderConfig,
) -> RenderResult<RenderStats> {
    let mut stats = RenderStats::default();

    for (col, pixel) in pixels.iter_mut().enumerate() {
        let sample = render_pixel(camera, scene, row, col as u32, config)?;
        match sample {
            PixelSample::Miss => {}
            PixelSample::Shadowed => {
                stats.hit_pixels += 1;
                stats.shadowed_pixels += 1;
            }
            PixelSample::Lit(_) => stats.hit_pixels += 1,
        }
        *pixel = sample.color();
    }

    Ok(stats)
}

fn check_resolution(camera: &Camera) -> RenderResult<()> {
    if camera.width() == 0 || camera.height() == 0 {
        return Err(RenderError::InvalidResolution {
            width: camera.width(),
            height: camera.height(),
        });
    }
    Ok(())
}

/// Render the entire scene on the calling thread.
///
/// `progress` is called after every row with `(completed_rows, total_rows)`.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    progress: &(dyn Fn(usize, usize) + Sync),
) -> RenderResult<Frame> {
    check_resolution(camera)?;
    log::debug!(
        "Rendering '{}' at {}x{} (sequential)",
        scene.name,
        camera.width(),
        camera.height()
    );

    let mut image = ImageBuffer::new(camera.width(), camera.height());
    let total = image.height as usize;
    let mut stats = RenderStats::default();

    for (row, pixels) in image.pixels.chunks_mut(image.width as usize).enumerate() {
        stats += render_row(camera, scene, row as u32, pixels, config)?;
        progress(row + 1, total);
    }

    Ok(Frame { image, stats })
}

/// Render the entire scene with one rayon task per row.
///
/// Produces exactly the same image as [`render`]. `progress` is called once
/// per finished row from whichever worker finished it; each call carries a
/// distinct completed-row count.
pub fn render_parallel(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    progress: &(dyn Fn(usize, usize) + Sync),
) -> RenderResult<Frame> {
    check_resolution(camera)?;
    log::debug!(
        "Rendering '{}' at {}x{} ({} threads)",
        scene.name,
        camera.width(),
        camera.height(),
        rayon::current_num_threads()
    );

    let mut image = ImageBuffer::new(camera.width(), camera.height());
    let total = image.height as usize;
    let completed = AtomicUsize::new(0);

    let stats = image
        .pixels
        .par_chunks_mut(image.width as usize)
        .enumerate()
        .map(|(row, pixels)| -> RenderResult<RenderStats> {
            let stats = render_row(camera, scene, row as u32, pixels, config)?;
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            progress(done, total);
            Ok(stats)
        })
        .try_reduce(RenderStats::default, |a, b| Ok(a + b))?;

    Ok(Frame { image, stats })
}
