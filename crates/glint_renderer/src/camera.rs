//! Camera for primary ray generation.
//!
//! The camera is a point looking through an image plane at `z = 0`. The
//! plane spans `x` in `[-1, 1]` and `y` in `[1/aspect, -1/aspect]`, so the
//! pixel grid keeps square pixels whatever the resolution.

use glint_math::{DegenerateVectorError, Ray, Vec3};

/// Camera for generating rays into the scene.
///
/// The screen rectangle is derived from the resolution and kept in sync by
/// every constructor, so a camera is always ready to generate rays.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    image_width: u32,
    image_height: u32,

    // Camera positioning
    position: Vec3,

    // Cached screen rectangle
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl Camera {
    /// Create a new 300x200 camera at (0, 0, 1).
    pub fn new() -> Self {
        Self {
            image_width: 0,
            image_height: 0,
            position: Vec3::new(0.0, 0.0, 1.0),
            left: -1.0,
            top: 1.0,
            right: 1.0,
            bottom: -1.0,
        }
        .with_resolution(300, 200)
    }

    /// Set image resolution and recompute the screen rectangle.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;

        let aspect = width as f32 / height as f32;
        self.left = -1.0;
        self.right = 1.0;
        self.top = 1.0 / aspect;
        self.bottom = -1.0 / aspect;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image_width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image_height
    }

    /// Point on the image plane for pixel (`row`, `col`).
    ///
    /// The first and last columns land exactly on `left` and `right`, the
    /// first and last rows on `top` and `bottom`.
    pub fn plane_point(&self, row: u32, col: u32) -> Vec3 {
        let x = linspace(self.left, self.right, self.image_width, col);
        let y = linspace(self.top, self.bottom, self.image_height, row);
        Vec3::new(x, y, 0.0)
    }

    /// Generate the unit-direction primary ray for pixel (`row`, `col`).
    ///
    /// Fails only when the camera sits exactly on that plane point.
    pub fn get_ray(&self, row: u32, col: u32) -> Result<Ray, DegenerateVectorError> {
        Ray::towards(self.position, self.plane_point(row, col))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample `index` of `count` evenly spaced values from `start` to `stop`.
#[inline]
fn linspace(start: f32, stop: f32, count: u32, index: u32) -> f32 {
    if count <= 1 {
        return start;
    }
    let step = (stop - start) / (count - 1) as f32;
    start + step * index as f32
}
