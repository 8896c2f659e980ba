//! Ray type and operations

use crate::core::types::Vec3;
use super::aabb::Aabb;

/// Direction components smaller than this are treated as parallel to the slab
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// A ray defined by origin and unit direction
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Precomputed 1/direction for the slab test
    pub inv_direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is normalized; a zero direction stays
    /// zero and the ray then only "hits" boxes that contain its origin.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        let direction = direction.normalize_or_zero();
        Self {
            origin,
            direction,
            inv_direction: direction.recip(),
        }
    }

    /// Get point along ray at parameter t
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray-AABB intersection using the slab method, limited to `[0, max_distance]`.
    ///
    /// Axes where the direction is (nearly) zero are treated as parallel: the
    /// box is rejected outright unless the origin lies between the two planes.
    /// Returns `Some((t_near, t_far))` on a hit, where `t_near` is clamped at 0
    /// for an origin inside the box.
    pub fn intersect_aabb(&self, aabb: &Aabb, max_distance: f32) -> Option<(f32, f32)> {
        let mut t_near = 0.0f32;
        let mut t_far = max_distance;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let (lo, hi) = (aabb.min[axis], aabb.max[axis]);

            if self.direction[axis].abs() < PARALLEL_EPSILON {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = self.inv_direction[axis];
            let t1 = (lo - origin) * inv;
            let t2 = (hi - origin) * inv;
            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
        }

        if t_near <= t_far && t_far >= 0.0 {
            Some((t_near, t_far))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(ray.at(5.0), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_direction_is_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(ray.direction, Vec3::NEG_Z);
    }

    #[test]
    fn test_intersect_aabb_hit() {
        let ray = Ray::new(Vec3::new(-2.0, 0.5, 0.5), Vec3::X);
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let (t_near, t_far) = ray.intersect_aabb(&aabb, 20.0).expect("should hit");
        assert!((t_near - 2.0).abs() < 0.001);
        assert!((t_far - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_intersect_aabb_miss() {
        let ray = Ray::new(Vec3::new(-2.0, 5.0, 0.5), Vec3::X);
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert!(ray.intersect_aabb(&aabb, 20.0).is_none());
    }

    #[test]
    fn test_intersect_aabb_inside() {
        let ray = Ray::new(Vec3::splat(0.5), Vec3::X);
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let (t_near, t_far) = ray.intersect_aabb(&aabb, 20.0).expect("should hit");
        assert_eq!(t_near, 0.0);
        assert!((t_far - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_box_behind_origin_is_missed() {
        let ray = Ray::new(Vec3::new(3.0, 0.5, 0.5), Vec3::X);
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert!(ray.intersect_aabb(&aabb, 20.0).is_none());
    }

    #[test]
    fn test_box_beyond_max_distance_is_missed() {
        let ray = Ray::new(Vec3::new(-10.0, 0.5, 0.5), Vec3::X);
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert!(ray.intersect_aabb(&aabb, 5.0).is_none());
        assert!(ray.intersect_aabb(&aabb, 10.0).is_some());
    }

    #[test]
    fn test_parallel_axis_outside_slab_rejects() {
        // Travels along X at y = 2, box spans y in [0, 1]
        let ray = Ray::new(Vec3::new(-2.0, 2.0, 0.5), Vec3::X);
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert!(ray.intersect_aabb(&aabb, 20.0).is_none());
    }

    #[test]
    fn test_zero_direction_hits_only_enclosing_box() {
        let inside = Ray::new(Vec3::splat(0.5), Vec3::ZERO);
        let outside = Ray::new(Vec3::splat(2.0), Vec3::ZERO);
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert_eq!(inside.intersect_aabb(&aabb, 20.0), Some((0.0, 20.0)));
        assert!(outside.intersect_aabb(&aabb, 20.0).is_none());
    }
}
