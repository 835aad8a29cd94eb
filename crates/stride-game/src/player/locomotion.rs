//! First-person locomotion integrator
//!
//! Turns the input flags and frame time into a new eye position using
//! explicit Euler steps: horizontal damping, gravity, directional
//! acceleration, a downward ground probe and a hard floor.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use stride_core::Pose;
use stride_physics::CollidableSet;
use tracing::{debug, trace};

use crate::input::InputState;

use super::LocomotionConfig;

/// Position and velocity of the actor's eye point
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    /// Eye point in world space
    pub position: Vec3,
    /// World units per second
    pub velocity: Vec3,
}

impl KinematicBody {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }
}

/// Whether the actor is standing on something
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grounding {
    /// Falling or jumping; gravity dominates
    #[default]
    Airborne,
    /// Probe hit or floor clamp fired during the last tick
    Grounded,
}

impl Grounding {
    pub fn is_grounded(&self) -> bool {
        matches!(self, Grounding::Grounded)
    }
}

/// Integrates a [`KinematicBody`] once per frame
#[derive(Debug, Clone)]
pub struct LocomotionIntegrator {
    /// Tuning parameters
    pub config: LocomotionConfig,
    body: KinematicBody,
    grounding: Grounding,
}

impl LocomotionIntegrator {
    /// Create an integrator standing at the origin on the floor
    pub fn new(config: LocomotionConfig) -> Self {
        let start = Vec3::new(0.0, config.floor_height, 0.0);
        Self::with_body(config, KinematicBody::at(start))
    }

    /// Create an integrator from an existing body, lifted to the floor if needed
    pub fn with_body(config: LocomotionConfig, mut body: KinematicBody) -> Self {
        body.position.y = body.position.y.max(config.floor_height);
        Self {
            config,
            body,
            grounding: Grounding::Airborne,
        }
    }

    pub fn body(&self) -> KinematicBody {
        self.body
    }

    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.body.velocity
    }

    /// Grounding state after the last tick
    pub fn grounding(&self) -> Grounding {
        self.grounding
    }

    /// Move the body, dropping all velocity. The floor still applies.
    pub fn teleport(&mut self, position: Vec3) {
        self.body = KinematicBody::at(position);
        self.body.position.y = self.body.position.y.max(self.config.floor_height);
        self.grounding = Grounding::Airborne;
        debug!(?position, "teleported");
    }

    /// Cast the ground probe from below the eye point
    pub fn probe<C: CollidableSet + ?Sized>(&self, collidables: &C) -> bool {
        let origin = self.body.position - Vec3::new(0.0, self.config.probe_offset, 0.0);
        collidables.cast_downward(origin, 0.0, self.config.probe_range) > 0
    }

    /// Advance one frame.
    ///
    /// `orientation` is the view rotation owned by look control; horizontal
    /// motion is relative to it and it is returned untouched in the pose.
    /// A non-positive or non-finite `dt` leaves every piece of state alone.
    pub fn tick<C: CollidableSet + ?Sized>(
        &mut self,
        input: &mut InputState,
        collidables: &C,
        orientation: Quat,
        dt: f32,
    ) -> Pose {
        if !(dt > 0.0 && dt.is_finite()) {
            trace!(dt, "skipping tick");
            return Pose::new(self.body.position, orientation);
        }

        let supported = self.probe(collidables);
        let config = &self.config;
        let mut velocity = self.body.velocity;

        // First-order decay; the factor is capped so long frames stop rather than reverse
        let decay = (config.damping * dt).min(1.0);
        velocity.x -= velocity.x * decay;
        velocity.z -= velocity.z * decay;

        velocity.y -= config.fall_acceleration() * dt;

        let direction = input.movement_intent();
        if input.move_forward || input.move_backward {
            velocity.z -= direction.y * config.acceleration * dt;
        }
        if input.move_left || input.move_right {
            velocity.x -= direction.x * config.acceleration * dt;
        }

        if supported {
            velocity.y = velocity.y.max(0.0);
            input.restore_jump();
        }

        // The impulse is additive; only a launch from support (probe now, or
        // the floor on the previous tick) starts from rest
        if input.take_jump_request() {
            if supported || self.grounding.is_grounded() {
                velocity.y = velocity.y.max(0.0);
            }
            velocity.y += config.jump_impulse;
        }

        // Velocity is stored negated relative to the view axes
        let view = Pose::new(self.body.position, orientation);
        let mut position = self.body.position;
        position += view.horizontal_right() * (-velocity.x * dt);
        position += view.horizontal_forward() * (-velocity.z * dt);
        position.y += velocity.y * dt;

        let mut floor_clamped = false;
        if position.y < config.floor_height {
            position.y = config.floor_height;
            velocity.y = 0.0;
            input.restore_jump();
            floor_clamped = true;
        }

        self.body = KinematicBody { position, velocity };

        let grounding = if supported || floor_clamped {
            Grounding::Grounded
        } else {
            Grounding::Airborne
        };
        if grounding != self.grounding {
            debug!(?grounding, supported, floor_clamped, y = position.y, "grounding changed");
            self.grounding = grounding;
        }

        trace!(?position, ?velocity, dt, "tick");
        Pose::new(position, orientation)
    }
}

impl Default for LocomotionIntegrator {
    fn default() -> Self {
        Self::new(LocomotionConfig::default())
    }
}
