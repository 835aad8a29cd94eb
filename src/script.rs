//! Scripted input for the headless walk

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One timed input event. A step may carry a key transition, a mouse
/// movement, or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Frame at which the step fires
    pub frame: u32,
    /// Key identifier, as the host's event layer reports it
    #[serde(default)]
    pub key: Option<String>,
    /// Whether the key goes down or up
    #[serde(default)]
    pub pressed: bool,
    /// Mouse movement in pixels
    #[serde(default)]
    pub look: Option<[f32; 2]>,
}

impl ScriptStep {
    fn key(frame: u32, key: &str, pressed: bool) -> Self {
        Self {
            frame,
            key: Some(key.to_string()),
            pressed,
            look: None,
        }
    }

    fn look(frame: u32, dx: f32, dy: f32) -> Self {
        Self {
            frame,
            key: None,
            pressed: false,
            look: Some([dx, dy]),
        }
    }

    pub fn look_delta(&self) -> Option<Vec2> {
        self.look.map(Vec2::from_array)
    }

    /// Walk forward, hop, turn right, strafe, and jump once more
    pub fn default_walk() -> Vec<ScriptStep> {
        vec![
            Self::key(0, "w", true),
            Self::key(30, " ", true),
            Self::key(31, " ", false),
            Self::look(120, 400.0, 0.0),
            Self::key(200, "d", true),
            Self::key(300, "w", false),
            Self::key(400, "d", false),
            Self::look(410, -200.0, 50.0),
            Self::key(420, " ", true),
            Self::key(421, " ", false),
            Self::key(450, "ArrowDown", true),
            Self::key(540, "ArrowDown", false),
        ]
    }
}

/// Steps firing at a frame, in script order
pub fn steps_at(script: &[ScriptStep], frame: u32) -> impl Iterator<Item = &ScriptStep> {
    script.iter().filter(move |step| step.frame == frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_walk_is_ordered() {
        let script = ScriptStep::default_walk();
        assert!(script.windows(2).all(|pair| pair[0].frame <= pair[1].frame));
    }

    #[test]
    fn steps_at_filters_by_frame() {
        let script = ScriptStep::default_walk();
        let at_30: Vec<_> = steps_at(&script, 30).collect();
        assert_eq!(at_30.len(), 1);
        assert_eq!(at_30[0].key.as_deref(), Some(" "));
        assert_eq!(steps_at(&script, 1).count(), 0);
        assert_eq!(
            steps_at(&script, 120).next().and_then(ScriptStep::look_delta),
            Some(Vec2::new(400.0, 0.0))
        );
    }
}
