use thiserror::Error;

/// Errors raised while building key bindings from configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown input action '{action}' bound to key '{key}'")]
    UnknownAction { key: String, action: String },

    #[error("unknown input action '{0}'")]
    UnknownActionName(String),

    #[error("empty key identifier bound to action '{0}'")]
    EmptyKey(String),
}

/// Errors raised when validating locomotion parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("locomotion parameter `{name}` must be finite and non-negative, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("floor height must be finite, got {0}")]
    FloorHeight(f32),

    #[error("probe range must be positive, got {0}")]
    ProbeRange(f32),
}
