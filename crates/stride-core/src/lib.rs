//! Stride Core - Core types and utilities for the Stride locomotion controller
//!
//! This crate provides the foundational types shared by the other crates:
//! - Mathematical primitives (re-exported from glam)
//! - Pose handed to the camera/view owner every tick
//! - Frame time with delta clamping and pause

pub mod time;
pub mod types;

pub use glam::{Mat4, Quat, Vec2, Vec3};
pub use time::{GameTime, TimeConfig};
pub use types::Pose;
