pub mod boundary;
pub mod physics_world;
pub mod rigid_body;

pub use boundary::*;
pub use physics_world::*;
pub use rigid_body::*;
