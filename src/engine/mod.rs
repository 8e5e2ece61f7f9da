pub mod collision;
pub mod config;
pub mod debug;
pub mod error;
pub mod physics;
pub mod vector_math;
pub mod view;

pub use collision::*;
pub use debug::*;
pub use physics::*;
