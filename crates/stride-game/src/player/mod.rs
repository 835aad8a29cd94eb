//! Player locomotion module
//!
//! Provides the first-person locomotion integrator and the controller that
//! pairs it with keyboard input.

mod controller;
mod locomotion;
mod movement;

pub use controller::PlayerController;
pub use locomotion::{Grounding, KinematicBody, LocomotionIntegrator};
pub use movement::LocomotionConfig;
