//! Agent module containing agent behavior and perception systems.

#[allow(clippy::module_inception)]
mod agent;
mod local_velocity;
mod perception;
mod ray_fan;
mod sense;

// Re-export everything from the agent module
pub use agent::*;

// Re-export perception system components
pub use local_velocity::LocalVelocity;
pub use perception::Perception;
pub use ray_fan::{RAY_ANGLES, RayFan};
pub use sense::Sense;
