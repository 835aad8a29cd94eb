//! Stride Game - Input handling and first-person locomotion
//!
//! Provides the keyboard input state, the locomotion integrator that turns
//! it into a camera pose, a player controller façade, and look angles.

pub mod camera;
pub mod error;
pub mod event_queue;
pub mod input;
pub mod player;

pub use camera::{LookAngles, LookConfig};
pub use error::{ConfigError, InputError};
pub use event_queue::{KeyEvent, KeyEventQueue, KeySender};
pub use input::{InputAction, InputBindings, InputState, DEFAULT_LAYOUT};
pub use player::{Grounding, KinematicBody, LocomotionConfig, LocomotionIntegrator, PlayerController};
