pub mod engine;

pub use engine::collision::{Collider, ColliderTag};
pub use engine::config::{ControlSettings, SimulationConfig};
pub use engine::error::ConfigError;
pub use engine::physics::boundary::{Boundary, MotionPreset};
pub use engine::physics::physics_world::{PhysicsStats, PhysicsWorld, WorldSnapshot};
pub use engine::physics::rigid_body::{Body, ContactOutcome};
pub use engine::view::Viewport;
