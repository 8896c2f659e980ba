//! Axis-aligned bounding box

use crate::core::types::Vec3;

/// Axis-aligned bounding box defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create AABB from center and half-extents
    pub fn from_center_half_extent(center: Vec3, half_extent: Vec3) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// Cube of edge `size` centered on `center`
    pub fn cube(center: Vec3, size: f32) -> Self {
        Self::from_center_half_extent(center, Vec3::splat(size * 0.5))
    }

    /// Get center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert_eq!(aabb.center(), Vec3::splat(0.5));
    }

    #[test]
    fn test_cube_is_centered() {
        let aabb = Aabb::cube(Vec3::new(1.0, 2.0, 3.0), 0.5);
        assert_eq!(aabb.min, Vec3::new(0.75, 1.75, 2.75));
        assert_eq!(aabb.max, Vec3::new(1.25, 2.25, 3.25));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
    }
}
