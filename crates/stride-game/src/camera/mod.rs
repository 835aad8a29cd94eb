//! Look control module
//!
//! Mouse-driven yaw/pitch that produces the view orientation the locomotion
//! integrator moves relative to.

mod config;
mod look;

pub use config::LookConfig;
pub use look::LookAngles;
