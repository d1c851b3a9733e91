//! Scene types for Glint.
//!
//! A scene is an ordered list of spheres and one point light. Everything is
//! plain data: it is built once (in code or from a file) and only read while
//! rendering.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// A sphere with Blinn-Phong material coefficients.
///
/// Color coefficients are expected in `[0, 1]` per channel. No validation is
/// applied: a non-positive radius is kept as-is and simply behaves like the
/// intersection formula says it does.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center in world space
    pub center: Vec3,

    /// Radius
    pub radius: f32,

    /// Ambient reflection coefficient
    pub ambient: Color,

    /// Diffuse reflection coefficient
    pub diffuse: Color,

    /// Specular reflection coefficient
    pub specular: Color,

    /// Specular exponent
    pub shininess: f32,
}

impl Sphere {
    /// Create a sphere with a neutral white material.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            ambient: Color::splat(0.1),
            diffuse: Color::splat(0.7),
            specular: Color::ONE,
            shininess: 100.0,
        }
    }

    /// Set the ambient, diffuse and specular coefficients.
    pub fn with_material(mut self, ambient: Color, diffuse: Color, specular: Color) -> Self {
        self.ambient = ambient;
        self.diffuse = diffuse;
        self.specular = specular;
        self
    }

    /// Set the specular exponent.
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }
}

/// A point light with per-term intensities.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// Position in world space
    pub position: Vec3,

    /// Ambient intensity
    pub ambient: Color,

    /// Diffuse intensity
    pub diffuse: Color,

    /// Specular intensity
    pub specular: Color,
}

impl Light {
    /// Create a white light at `position` (all intensities 1).
    pub fn white(position: Vec3) -> Self {
        Self {
            position,
            ambient: Color::ONE,
            diffuse: Color::ONE,
            specular: Color::ONE,
        }
    }
}

/// A renderable scene: ordered spheres lit by a single point light.
///
/// Sphere order only matters for exact distance ties, where the earlier
/// sphere wins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name, used in logs
    #[serde(default = "Scene::default_name")]
    pub name: String,

    /// Spheres in scene order
    #[serde(default)]
    pub spheres: Vec<Sphere>,

    /// The point light
    pub light: Light,
}

impl Scene {
    /// Create an empty scene lit by `light`.
    pub fn new(name: impl Into<String>, light: Light) -> Self {
        Self {
            name: name.into(),
            spheres: Vec::new(),
            light,
        }
    }

    fn default_name() -> String {
        "untitled".to_string()
    }

    /// Append a sphere and return its index.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    /// Builder form of [`Scene::add_sphere`].
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.add_sphere(sphere);
        self
    }

    /// Number of spheres in the scene.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// True if the scene has no spheres (every ray misses).
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_add_sphere() {
        let mut scene = Scene::new("test", Light::white(Vec3::splat(5.0)));
        assert!(scene.is_empty());

        let a = scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0));
        let b = scene.add_sphere(Sphere::new(Vec3::X, 0.5));

        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(scene.sphere_count(), 2);
        assert_eq!(scene.spheres[1].center, Vec3::X);
    }

    #[test]
    fn test_sphere_builder() {
        let sphere = Sphere::new(Vec3::ZERO, 0.7)
            .with_material(
                Color::new(0.1, 0.0, 0.0),
                Color::new(0.7, 0.0, 0.0),
                Color::ONE,
            )
            .with_shininess(50.0);

        assert_eq!(sphere.ambient, Color::new(0.1, 0.0, 0.0));
        assert_eq!(sphere.diffuse, Color::new(0.7, 0.0, 0.0));
        assert_eq!(sphere.shininess, 50.0);
    }

    #[test]
    fn test_non_positive_radius_is_kept() {
        let sphere = Sphere::new(Vec3::ZERO, -2.0);
        assert_eq!(sphere.radius, -2.0);
    }
}
