//! Player controller pairing keyboard input with the locomotion integrator

use glam::{Quat, Vec3};
use stride_core::Pose;
use stride_physics::CollidableSet;
use tracing::trace;

use crate::event_queue::KeyEventQueue;
use crate::input::{InputBindings, InputState};

use super::{Grounding, KinematicBody, LocomotionConfig, LocomotionIntegrator};

/// First-person player: key transitions in, camera pose out
#[derive(Debug, Clone)]
pub struct PlayerController {
    /// Key bindings
    pub bindings: InputBindings,
    /// Current input flags
    input: InputState,
    /// Locomotion integration
    integrator: LocomotionIntegrator,
    /// View orientation supplied by look control
    orientation: Quat,
}

impl PlayerController {
    /// Create a new player controller with default config and bindings
    pub fn new() -> Self {
        Self::with_config(LocomotionConfig::default())
    }

    /// Create a player controller with custom config
    pub fn with_config(config: LocomotionConfig) -> Self {
        Self {
            bindings: InputBindings::default(),
            input: InputState::new(),
            integrator: LocomotionIntegrator::new(config),
            orientation: Quat::IDENTITY,
        }
    }

    /// Replace the key bindings
    pub fn with_bindings(mut self, bindings: InputBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Apply a key transition. Unbound keys are ignored.
    ///
    /// Returns whether the key was bound to an action.
    pub fn on_key_transition(&mut self, key: &str, pressed: bool) -> bool {
        match self.bindings.get_action(key) {
            Some(action) => {
                self.input.apply(action, pressed);
                true
            }
            None => {
                trace!(key, "ignoring unbound key");
                false
            }
        }
    }

    /// Apply every transition queued by other threads, in order
    pub fn drain(&mut self, queue: &KeyEventQueue) -> usize {
        let events = queue.drain();
        for event in &events {
            self.on_key_transition(&event.key, event.pressed);
        }
        events.len()
    }

    /// Advance one frame against the scene's collidables
    pub fn tick<C: CollidableSet + ?Sized>(&mut self, collidables: &C, dt: f32) -> Pose {
        self.integrator
            .tick(&mut self.input, collidables, self.orientation, dt)
    }

    /// Set the view orientation used for the next tick
    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Current camera pose
    pub fn pose(&self) -> Pose {
        Pose::new(self.integrator.position(), self.orientation)
    }

    pub fn body(&self) -> KinematicBody {
        self.integrator.body()
    }

    pub fn grounding(&self) -> Grounding {
        self.integrator.grounding()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.integrator.config
    }

    /// Release all movement keys (focus or pointer lock lost)
    pub fn release_all(&mut self) {
        self.input.clear_movement();
    }

    /// Teleport the player to a position
    pub fn teleport(&mut self, position: Vec3) {
        self.integrator.teleport(position);
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}
