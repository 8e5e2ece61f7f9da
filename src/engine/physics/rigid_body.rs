use glam::DVec2;

use crate::{
    collision_debug_print,
    engine::{
        collision::{Collider, ColliderTag},
        physics::boundary::Boundary,
        vector_math::{dot, floored_delta, magnitude, normalized},
    },
};

/// Overlap tolerated before positional correction kicks in.
pub const CORRECTION_SLOP: f64 = 0.01;
/// Share of the remaining overlap removed per contact.
pub const CORRECTION_PERCENT: f64 = 0.2;
/// `1 + restitution`, with restitution fixed at 1.
pub const IMPULSE_FACTOR: f64 = 2.0;

/// What happened when one body was tested against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Disks do not overlap
    Apart,
    /// Overlapping but already moving apart along the normal
    Separating,
    /// Both bodies are immovable, nothing can be resolved
    Anchored,
    /// Impulse applied and overlap corrected
    Resolved,
}

/// A movable disk. Mass is taken from the radius.
#[derive(Debug, Clone)]
pub struct Body {
    collider: Collider,
    pub velocity: DVec2,

    mass: f64,
    inverse_mass: f64,

    // Cleared every frame after being folded into velocity
    pub(crate) force: DVec2,
}

impl Body {
    pub fn new(x: f64, y: f64, radius: f64, tag: ColliderTag) -> Self {
        let mass = radius;
        let inverse_mass = if mass == 0.0 { 0.0 } else { 1.0 / mass };

        Self {
            collider: Collider::new_circle(x, y, radius, tag),
            velocity: DVec2::ZERO,
            mass,
            inverse_mass,
            force: DVec2::ZERO,
        }
    }

    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Radius is fixed at construction, only the position can be moved.
    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    pub fn position(&self) -> DVec2 {
        self.collider.position
    }

    pub fn set_position(&mut self, position: DVec2) {
        self.collider.position = position;
    }

    pub fn radius(&self) -> f64 {
        self.collider.radius()
    }

    pub fn tag(&self) -> ColliderTag {
        self.collider.tag
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Zero for a zero-radius body, which then acts as a fixed anchor.
    pub fn inverse_mass(&self) -> f64 {
        self.inverse_mass
    }

    pub fn force(&self) -> DVec2 {
        self.force
    }

    /// Queue a force for the next update. Forces act directly on velocity.
    pub fn apply_force(&mut self, force: DVec2) {
        self.force += force;
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Add gravity to the accumulated force, fold it into velocity and clear it.
    pub fn accrue_forces(&mut self, gravity: f64) {
        self.force.y += gravity;
        self.velocity += self.force;
        self.force = DVec2::ZERO;
    }

    /// Resolve an overlap with `other`, changing the velocity and position of
    /// both bodies.
    pub fn resolve_collision(&mut self, other: &mut Body) -> ContactOutcome {
        if !self.collider.intersects(&other.collider) {
            return ContactOutcome::Apart;
        }

        let relative_velocity = other.velocity - self.velocity;

        let distance = magnitude(floored_delta(self.position(), other.position()));
        let normal = (other.position() - self.position()) / distance;

        let velocity_along_normal = dot(relative_velocity, normal);
        if velocity_along_normal > 0.0 {
            return ContactOutcome::Separating;
        }

        let inverse_mass_sum = self.inverse_mass + other.inverse_mass;
        if inverse_mass_sum == 0.0 {
            return ContactOutcome::Anchored;
        }

        let impulse_scalar = -IMPULSE_FACTOR * velocity_along_normal / inverse_mass_sum;
        let impulse = normal * impulse_scalar;

        self.velocity -= impulse * self.inverse_mass;
        other.velocity += impulse * other.inverse_mass;

        let penetration = self.radius() + other.radius() - distance;
        let correction_scalar =
            (penetration - CORRECTION_SLOP).max(0.0) / inverse_mass_sum * CORRECTION_PERCENT;
        let correction = normal * correction_scalar;

        self.collider.position -= correction * self.inverse_mass;
        other.collider.position += correction * other.inverse_mass;

        ContactOutcome::Resolved
    }

    /// Push the body back inside `boundary` if any part of it has left.
    ///
    /// The push is added to velocity as well, so the body bounces off the
    /// wall. Returns true when a correction was applied.
    pub fn contain_within(&mut self, boundary: &Boundary) -> bool {
        if self.collider.is_contained_by(boundary.collider()) {
            return false;
        }

        let delta = self.position() - boundary.position();
        let delta_mag = magnitude(delta);
        // Centered on the container but still not inside: no direction to push in
        if delta_mag == 0.0 {
            return false;
        }

        let distance_to_wall = boundary.radius() - delta_mag;
        let overshoot = self.radius() - distance_to_wall;
        let push = -normalized(delta) * overshoot;

        self.collider.position += push;
        self.velocity += push;

        true
    }

    /// Move by one frame of velocity.
    pub fn integrate(&mut self) {
        self.collider.position += self.velocity;
    }

    /// Force accrual, collisions against every other body, then containment
    /// for the body at `index`.
    pub fn update(bodies: &mut [Body], index: usize, boundary: &Boundary, gravity: f64) {
        bodies[index].accrue_forces(gravity);

        for other in 0..bodies.len() {
            if other == index {
                continue;
            }

            let (this, that) = pair_mut(bodies, index, other);
            if this.resolve_collision(that) == ContactOutcome::Resolved {
                collision_debug_print!(
                    "contact {} -> {}: v = {:?}, {:?}",
                    index,
                    other,
                    this.velocity,
                    that.velocity
                );
            }
        }

        if bodies[index].contain_within(boundary) {
            collision_debug_print!(
                "body {} pushed back inside, now at {:?}",
                index,
                bodies[index].position()
            );
        }
    }
}

/// Mutable references to two distinct elements.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    assert_ne!(a, b, "pair_mut needs two distinct indices");
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
