use crate::{normalize, DegenerateVectorError, Vec3};

/// A ray in 3D space with an origin and a direction.
///
/// Every ray built by the renderer carries a unit-length direction, so the
/// parameter `t` in [`Ray::at`] is a distance along the ray.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is stored as given.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from `origin` pointing at `target` with a unit direction.
    pub fn towards(origin: Vec3, target: Vec3) -> Result<Self, DegenerateVectorError> {
        let direction = normalize(target - origin)?;
        Ok(Self::new(origin, direction))
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
