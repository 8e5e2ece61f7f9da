use glam::DVec2;

use crate::engine::physics::physics_world::BodySnapshot;

pub const GLOBAL_SCALE: f64 = 0.01;
pub const OFFSET: DVec2 = DVec2::new(400.0, 400.0);

/// Maps simulation space onto a screen. Uniform scale, no rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64,
    pub offset: DVec2, // screen position of the simulation origin
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: GLOBAL_SCALE,
            offset: OFFSET,
        }
    }
}

impl Viewport {
    pub fn new(scale: f64, offset: DVec2) -> Self {
        Self { scale, offset }
    }

    pub fn world_to_screen(&self, world_pos: DVec2) -> DVec2 {
        world_pos * self.scale + self.offset
    }

    pub fn screen_to_world(&self, screen_pos: DVec2) -> DVec2 {
        (screen_pos - self.offset) / self.scale
    }

    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.scale
    }
}

/// Segment from a body's center along its velocity, one radius long.
pub fn velocity_ray(body: &BodySnapshot) -> Option<(DVec2, DVec2)> {
    let speed = body.velocity.length();
    if speed == 0.0 || !speed.is_finite() {
        return None;
    }
    let tip = body.position + body.velocity * (body.radius / speed);
    Some((body.position, tip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::collision::ColliderTag;

    #[test]
    fn origin_maps_to_offset() {
        let view = Viewport::default();
        assert_eq!(view.world_to_screen(DVec2::ZERO), DVec2::new(400.0, 400.0));
        assert_eq!(
            view.world_to_screen(DVec2::new(30000.0, -10000.0)),
            DVec2::new(700.0, 300.0)
        );
        assert_eq!(view.scale_length(1000.0), 10.0);
    }

    #[test]
    fn screen_round_trip() {
        let view = Viewport::new(0.5, DVec2::new(10.0, 20.0));
        let world = DVec2::new(-42.0, 8.0);
        assert_eq!(view.screen_to_world(view.world_to_screen(world)), world);
    }

    #[test]
    fn velocity_ray_is_one_radius_long() {
        let body = BodySnapshot {
            position: DVec2::new(100.0, 100.0),
            radius: 50.0,
            tag: ColliderTag::Small,
            velocity: DVec2::new(0.0, 3.0),
        };
        let (start, tip) = velocity_ray(&body).unwrap();
        assert_eq!(start, body.position);
        assert_eq!(tip, DVec2::new(100.0, 150.0));

        let resting = BodySnapshot {
            velocity: DVec2::ZERO,
            ..body
        };
        assert!(velocity_ray(&resting).is_none());
    }
}
