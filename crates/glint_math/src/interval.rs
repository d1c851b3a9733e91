use crate::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps every component of `v` to the interval. NaN maps to `min`.
    pub fn clamp_vec(&self, v: Vec3) -> Vec3 {
        crate::clamp(v, self.min, self.max)
    }

    /// The unit interval [0, 1], the valid range of an output color channel.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Strictly positive distances along a ray.
    pub const POSITIVE: Interval = Interval {
        min: 0.0,
        max: f32::INFINITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));
        assert!(interval.surrounds(5.0));
        assert!(!interval.surrounds(-0.1));
    }

    #[test]
    fn test_interval_clamp_vec() {
        let interval = Interval::new(0.0, 10.0);
        let v = interval.clamp_vec(Vec3::new(-5.0, 5.0, 15.0));
        assert_eq!(v, Vec3::new(0.0, 5.0, 10.0));
    }

    #[test]
    fn test_unit_clamp_vec() {
        let v = Interval::UNIT.clamp_vec(Vec3::new(1.5, -0.2, 0.4));
        assert_eq!(v, Vec3::new(1.0, 0.0, 0.4));

        let v = Interval::UNIT.clamp_vec(Vec3::new(f32::NAN, 0.5, f32::INFINITY));
        assert_eq!(v, Vec3::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_positive_excludes_zero() {
        assert!(!Interval::POSITIVE.surrounds(0.0));
        assert!(Interval::POSITIVE.surrounds(1e-6));
        assert!(!Interval::POSITIVE.surrounds(-1.0));
    }
}
