use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::engine::vector_math::{magnitude, magnitude_squared, normalized};

/// Display category of a collider. Only consumers that draw care about it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColliderTag {
    Container,
    Big,
    Small,
}

impl ColliderTag {
    pub fn color_name(&self) -> &'static str {
        match self {
            ColliderTag::Container => "blue",
            ColliderTag::Big => "red",
            ColliderTag::Small => "green",
        }
    }
}

/// A disk in simulation space. Shared by the boundary and every body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Collider {
    pub position: DVec2,
    radius: f64,
    pub tag: ColliderTag,
}

impl Collider {
    pub fn new_circle(x: f64, y: f64, radius: f64, tag: ColliderTag) -> Self {
        Self {
            position: DVec2::new(x, y),
            radius,
            tag,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// True when the two disks overlap. Touching edges do not count.
    pub fn intersects(&self, other: &Collider) -> bool {
        let distance_sq = magnitude_squared(self.position - other.position);
        let radius_sum = self.radius + other.radius;
        distance_sq < radius_sum * radius_sum
    }

    /// True when this disk lies strictly inside `other`.
    ///
    /// The radius difference is squared, so an `other` smaller than `self`
    /// can still report containment when the centers are close enough.
    pub fn is_contained_by(&self, other: &Collider) -> bool {
        let distance_sq = magnitude_squared(self.position - other.position);
        let radius_diff = other.radius - self.radius;
        distance_sq < radius_diff * radius_diff
    }

    /// Vector from `other`'s center toward this center, scaled to `other`'s
    /// radius. `None` when the centers coincide.
    pub fn away_vector(&self, other: &Collider) -> Option<DVec2> {
        let delta = self.position - other.position;
        if magnitude_squared(delta) == 0.0 {
            return None;
        }
        Some(normalized(delta) * other.radius)
    }

    /// Overlap depth between the two disks, negative when apart.
    pub fn penetration(&self, other: &Collider) -> f64 {
        self.radius + other.radius - magnitude(self.position - other.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: f64, y: f64, r: f64) -> Collider {
        Collider::new_circle(x, y, r, ColliderTag::Small)
    }

    #[test]
    fn intersects_is_symmetric_and_strict() {
        let a = circle(0.0, 0.0, 10.0);
        let b = circle(15.0, 0.0, 10.0);
        let touching = circle(20.0, 0.0, 10.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&touching));
    }

    #[test]
    fn containment_inside_and_on_the_wall() {
        let outer = circle(0.0, 0.0, 100.0);

        assert!(circle(50.0, 0.0, 10.0).is_contained_by(&outer));
        assert!(!circle(90.0, 0.0, 10.0).is_contained_by(&outer));
        assert!(!circle(95.0, 0.0, 10.0).is_contained_by(&outer));
        assert!(circle(0.0, 0.0, 99.0).is_contained_by(&outer));
    }

    // The squared radius difference lets a bigger disk count as "inside" a
    // smaller one when their centers nearly coincide.
    #[test]
    fn containment_by_smaller_collider_is_literal() {
        let small = circle(0.0, 0.0, 10.0);
        let big = circle(1.0, 0.0, 100.0);

        assert!(big.is_contained_by(&small));
        assert!(!circle(95.0, 0.0, 100.0).is_contained_by(&small));
    }

    #[test]
    fn away_vector_points_from_other_scaled_to_its_radius() {
        let inner = circle(0.0, -30.0, 5.0);
        let outer = circle(0.0, 0.0, 100.0);

        assert_eq!(inner.away_vector(&outer), Some(DVec2::new(0.0, -100.0)));
        assert_eq!(outer.away_vector(&circle(0.0, 0.0, 1.0)), None);
    }

    #[test]
    fn penetration_is_negative_when_apart() {
        let a = circle(0.0, 0.0, 10.0);

        assert_eq!(a.penetration(&circle(16.0, 0.0, 10.0)), 4.0);
        assert_eq!(a.penetration(&circle(50.0, 0.0, 10.0)), -30.0);
    }

    #[test]
    fn tags_map_to_colors() {
        assert_eq!(ColliderTag::Container.color_name(), "blue");
        assert_eq!(ColliderTag::Big.color_name(), "red");
        assert_eq!(ColliderTag::Small.color_name(), "green");
    }
}
