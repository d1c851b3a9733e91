//! Glint Renderer - CPU ray casting.
//!
//! One primary ray per pixel, closest-sphere visibility, a single shadow
//! probe toward the point light, and Blinn-Phong shading.

mod camera;
mod hittable;
mod output;
mod renderer;
mod shading;
mod sphere;

pub use camera::Camera;
pub use hittable::{distance_or_infinity, nearest, Hit, Hittable};
pub use output::{color_to_rgb8, save_png, to_rgb8, OutputError, OutputResult};
pub use renderer::{
    render, render_parallel, render_pixel, Frame, ImageBuffer, PixelSample, RenderConfig,
    RenderError, RenderResult, RenderStats,
};
pub use shading::{shade, DegeneratePolicy};

/// Re-export the scene types from glint_core
pub use glint_core::{Color, Light, Scene, Sphere};

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{DegenerateVectorError, Interval, Ray, Vec3};
