use glam::DVec2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

use crate::{
    debug_print,
    engine::{
        collision::ColliderTag,
        config::SimulationConfig,
        error::ConfigError,
        physics::{
            boundary::{Boundary, MotionPreset},
            rigid_body::Body,
        },
    },
};

/// Position and size of one disk, as handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleSnapshot {
    pub position: DVec2,
    pub radius: f64,
    pub tag: ColliderTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub position: DVec2,
    pub radius: f64,
    pub tag: ColliderTag,
    pub velocity: DVec2,
}

/// Read-only copy of the world after a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub frame: u64,
    pub boundary: CircleSnapshot,
    pub bodies: Vec<BodySnapshot>,
}

/// The container, its bodies and the frame counter.
pub struct PhysicsWorld {
    boundary: Boundary,
    bodies: Vec<Body>,
    frame_count: u64,
    gravity: f64,
}

impl PhysicsWorld {
    /// Build a world from `config`, spawning its population.
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let world = Self {
            boundary: Self::build_boundary(config),
            bodies: Self::spawn_bodies(config, &mut rng),
            frame_count: 0,
            gravity: config.gravity,
        };

        debug_print!(
            "World initialized: {} bodies ({} big), container radius {}, preset {:?}",
            world.bodies.len(),
            config.big_count(),
            config.boundary_radius,
            config.motion_preset
        );

        Ok(world)
    }

    /// Assemble a world from hand-placed parts.
    pub fn from_parts(boundary: Boundary, bodies: Vec<Body>, gravity: f64) -> Self {
        Self {
            boundary,
            bodies,
            frame_count: 0,
            gravity,
        }
    }

    fn build_boundary(config: &SimulationConfig) -> Boundary {
        Boundary::new(
            0.0,
            0.0,
            config.boundary_radius,
            config.wiggle_magnitude,
            config.wiggle_speed,
        )
        .with_motion(config.motion_preset)
    }

    fn spawn_bodies(config: &SimulationConfig, rng: &mut StdRng) -> Vec<Body> {
        let area = config.spawn_area;

        (0..config.body_count)
            .map(|i| {
                let (radius, tag) = if config.is_big(i) {
                    (config.big_radius, ColliderTag::Big)
                } else {
                    (config.small_radius, ColliderTag::Small)
                };

                let x = rng.random_range(-area..=area);
                let y = rng.random_range(-area..=area);
                Body::new(x, y, radius, tag)
            })
            .collect()
    }

    /// Throw away the current container and population and start over.
    pub fn reinitialize(&mut self, config: &SimulationConfig) -> Result<(), ConfigError> {
        *self = Self::new(config)?;
        debug_print!("World re-initialized");
        Ok(())
    }

    /// Change the container motion. Applies from the next step.
    pub fn set_motion_preset(&mut self, preset: MotionPreset) {
        if self.boundary.motion != preset {
            debug_print!("Motion preset {:?} -> {:?}", self.boundary.motion, preset);
        }
        self.boundary.motion = preset;
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Advance one frame.
    ///
    /// Every body finishes its update (forces, collisions, containment)
    /// before any body moves.
    pub fn step(&mut self) {
        self.boundary.update(self.frame_count);

        for index in 0..self.bodies.len() {
            Body::update(&mut self.bodies, index, &self.boundary, self.gravity);
        }

        for body in &mut self.bodies {
            body.integrate();
        }

        self.frame_count += 1;
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            frame: self.frame_count,
            boundary: CircleSnapshot {
                position: self.boundary.position(),
                radius: self.boundary.radius(),
                tag: self.boundary.collider().tag,
            },
            bodies: self
                .bodies
                .iter()
                .map(|body| BodySnapshot {
                    position: body.position(),
                    radius: body.radius(),
                    tag: body.tag(),
                    velocity: body.velocity,
                })
                .collect(),
        }
    }

    /// Get physics world statistics
    pub fn stats(&self) -> PhysicsStats {
        let total_bodies = self.bodies.len();
        let contained_bodies = self
            .bodies
            .iter()
            .filter(|b| b.collider().is_contained_by(self.boundary.collider()))
            .count();
        let total_kinetic_energy = self.bodies.iter().map(|b| b.kinetic_energy()).sum();

        let mut max_overlap: f64 = 0.0;
        for (i, a) in self.bodies.iter().enumerate() {
            for b in &self.bodies[i + 1..] {
                max_overlap = max_overlap.max(a.collider().penetration(b.collider()));
            }
        }

        PhysicsStats {
            frame: self.frame_count,
            total_bodies,
            contained_bodies,
            escaped_bodies: total_bodies - contained_bodies,
            total_kinetic_energy,
            max_overlap,
        }
    }
}

/// Physics world statistics for debugging
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhysicsStats {
    pub frame: u64,
    pub total_bodies: usize,
    pub contained_bodies: usize,
    pub escaped_bodies: usize,
    pub total_kinetic_energy: f64,
    /// Deepest pairwise overlap, zero when nothing touches
    pub max_overlap: f64,
}
