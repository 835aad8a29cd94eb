//! Keyboard input state with action-based mapping
//!
//! Raw key identifiers (as reported by the host's event layer, e.g. `"w"` or
//! `"ArrowUp"`) map to a small fixed set of actions. The resulting
//! [`InputState`] is plain flags: no timing, no event history.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::InputError;

/// Actions that can be triggered by a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAction {
    /// Move forward (W / ArrowUp by default)
    MoveForward,
    /// Move backward (S / ArrowDown by default)
    MoveBackward,
    /// Move left (A / ArrowLeft by default)
    MoveLeft,
    /// Move right (D / ArrowRight by default)
    MoveRight,
    /// Jump (Space by default)
    Jump,
}

impl InputAction {
    pub const ALL: [InputAction; 5] = [
        InputAction::MoveForward,
        InputAction::MoveBackward,
        InputAction::MoveLeft,
        InputAction::MoveRight,
        InputAction::Jump,
    ];

    /// Config-file name of this action
    pub fn name(&self) -> &'static str {
        match self {
            InputAction::MoveForward => "move_forward",
            InputAction::MoveBackward => "move_backward",
            InputAction::MoveLeft => "move_left",
            InputAction::MoveRight => "move_right",
            InputAction::Jump => "jump",
        }
    }

    /// Action bound to a key in the default layout (WASD, arrows, space)
    pub fn for_default_key(key: &str) -> Option<InputAction> {
        DEFAULT_LAYOUT
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, action)| *action)
    }
}

/// Default key layout: WASD, arrow keys as alternative, space to jump
pub const DEFAULT_LAYOUT: [(&str, InputAction); 9] = [
    ("w", InputAction::MoveForward),
    ("s", InputAction::MoveBackward),
    ("a", InputAction::MoveLeft),
    ("d", InputAction::MoveRight),
    ("ArrowUp", InputAction::MoveForward),
    ("ArrowDown", InputAction::MoveBackward),
    ("ArrowLeft", InputAction::MoveLeft),
    ("ArrowRight", InputAction::MoveRight),
    (" ", InputAction::Jump),
];

impl fmt::Display for InputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputAction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputAction::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| InputError::UnknownActionName(s.to_string()))
    }
}

/// Current input flags for the locomotion integrator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub move_forward: bool,
    pub move_backward: bool,
    pub move_left: bool,
    pub move_right: bool,
    /// Jump eligibility. Consumed by a jump press, restored when grounded.
    pub can_jump: bool,
    /// One-shot set by an eligible jump press, taken by the next tick
    jump_requested: bool,
}

impl InputState {
    /// Create a new input state with nothing held and no jump eligibility
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a key transition through the default layout.
    ///
    /// Unrecognized keys are ignored. Returns whether the key was recognized.
    pub fn on_key_transition(&mut self, key: &str, pressed: bool) -> bool {
        match InputAction::for_default_key(key) {
            Some(action) => {
                self.apply(action, pressed);
                true
            }
            None => {
                trace!(key, "ignoring unbound key");
                false
            }
        }
    }

    /// Apply an action transition.
    ///
    /// Directional actions are level flags. Jump is edge-triggered: a press
    /// while eligible requests one impulse, and any press clears eligibility.
    /// Releasing jump does nothing.
    pub fn apply(&mut self, action: InputAction, pressed: bool) {
        match action {
            InputAction::MoveForward => self.move_forward = pressed,
            InputAction::MoveBackward => self.move_backward = pressed,
            InputAction::MoveLeft => self.move_left = pressed,
            InputAction::MoveRight => self.move_right = pressed,
            InputAction::Jump => {
                if pressed {
                    if self.can_jump {
                        self.jump_requested = true;
                        debug!("jump requested");
                    }
                    self.can_jump = false;
                }
            }
        }
    }

    /// Check whether a directional action is held
    pub fn is_held(&self, action: InputAction) -> bool {
        match action {
            InputAction::MoveForward => self.move_forward,
            InputAction::MoveBackward => self.move_backward,
            InputAction::MoveLeft => self.move_left,
            InputAction::MoveRight => self.move_right,
            InputAction::Jump => false,
        }
    }

    /// Whether a jump impulse is waiting for the next tick
    pub fn jump_requested(&self) -> bool {
        self.jump_requested
    }

    /// Normalized movement intent: `x = right - left`, `y = forward - back`.
    ///
    /// Either zero (no input or opposing keys) or unit length.
    pub fn movement_intent(&self) -> Vec2 {
        let x = self.move_right as i8 - self.move_left as i8;
        let y = self.move_forward as i8 - self.move_backward as i8;
        Vec2::new(x as f32, y as f32).normalize_or_zero()
    }

    /// Release all directional keys (focus or pointer lock lost)
    pub fn clear_movement(&mut self) {
        self.move_forward = false;
        self.move_backward = false;
        self.move_left = false;
        self.move_right = false;
    }

    /// Take the pending jump request, if any
    pub(crate) fn take_jump_request(&mut self) -> bool {
        std::mem::take(&mut self.jump_requested)
    }

    /// Re-enable jumping once the actor is grounded
    pub(crate) fn restore_jump(&mut self) {
        self.can_jump = true;
    }
}

/// Maps key identifiers to actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    bindings: HashMap<String, InputAction>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        for (key, action) in DEFAULT_LAYOUT {
            bindings.bind(key, action);
        }
        bindings
    }
}

impl InputBindings {
    /// Create new input bindings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings with no keys bound
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Defaults extended by a `key -> action name` table from configuration
    pub fn with_overrides<'a, I>(overrides: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut bindings = Self::default();
        for (key, action_name) in overrides {
            if key.is_empty() {
                return Err(InputError::EmptyKey(action_name.clone()));
            }
            let action = action_name
                .parse::<InputAction>()
                .map_err(|_| InputError::UnknownAction {
                    key: key.clone(),
                    action: action_name.clone(),
                })?;
            bindings.bind(key.clone(), action);
        }
        Ok(bindings)
    }

    /// Bind a key to an action, replacing any previous binding of that key
    pub fn bind(&mut self, key: impl Into<String>, action: InputAction) {
        self.bindings.insert(key.into(), action);
    }

    /// Unbind a key
    pub fn unbind(&mut self, key: &str) -> Option<InputAction> {
        self.bindings.remove(key)
    }

    /// Get the action for a key, if any
    pub fn get_action(&self, key: &str) -> Option<InputAction> {
        self.bindings.get(key).copied()
    }

    /// All keys bound to an action, sorted
    pub fn keys_for(&self, action: InputAction) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = InputBindings::default();
        assert_eq!(bindings.get_action("w"), Some(InputAction::MoveForward));
        assert_eq!(bindings.get_action("ArrowUp"), Some(InputAction::MoveForward));
        assert_eq!(bindings.get_action(" "), Some(InputAction::Jump));
        assert_eq!(bindings.get_action("q"), None);
        assert_eq!(bindings.keys_for(InputAction::MoveLeft), vec!["ArrowLeft", "a"]);
    }

    #[test]
    fn test_default_bindings_match_default_layout() {
        let bindings = InputBindings::default();
        for (key, action) in DEFAULT_LAYOUT {
            assert_eq!(bindings.get_action(key), Some(action));
            assert_eq!(InputAction::for_default_key(key), Some(action));
        }
        for action in InputAction::ALL {
            assert!(!bindings.keys_for(action).is_empty());
        }
        assert_eq!(InputAction::for_default_key("W"), None);
    }

    #[test]
    fn test_binding_overrides() {
        let mut table = BTreeMap::new();
        table.insert("z".to_string(), "move_forward".to_string());
        table.insert("w".to_string(), "jump".to_string());

        let bindings = InputBindings::with_overrides(&table).unwrap();
        assert_eq!(bindings.get_action("z"), Some(InputAction::MoveForward));
        assert_eq!(bindings.get_action("w"), Some(InputAction::Jump));
        assert_eq!(bindings.get_action("ArrowUp"), Some(InputAction::MoveForward));
    }

    #[test]
    fn test_binding_unknown_action() {
        let mut table = BTreeMap::new();
        table.insert("f".to_string(), "fly".to_string());

        let err = InputBindings::with_overrides(&table).unwrap_err();
        assert_eq!(
            err,
            InputError::UnknownAction {
                key: "f".to_string(),
                action: "fly".to_string(),
            }
        );
    }

    #[test]
    fn test_action_names_round_trip() {
        for action in InputAction::ALL {
            assert_eq!(action.name().parse::<InputAction>(), Ok(action));
        }
        assert_eq!(
            "sprint".parse::<InputAction>(),
            Err(InputError::UnknownActionName("sprint".to_string()))
        );
    }

    #[test]
    fn test_unrecognized_key_is_ignored() {
        let mut state = InputState::new();
        assert!(!state.on_key_transition("Shift", true));
        assert!(!state.on_key_transition("W", true));
        assert_eq!(state, InputState::new());
    }

    #[test]
    fn test_last_transition_wins() {
        let mut rng = StdRng::seed_from_u64(7);
        for key in ["w", "a", "s", "d", "ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight"] {
            let action = InputAction::for_default_key(key).unwrap();
            let mut state = InputState::new();
            let mut last = false;
            for _ in 0..64 {
                last = rng.gen_bool(0.5);
                state.on_key_transition(key, last);
                assert_eq!(state.is_held(action), last);
            }
            assert_eq!(state.is_held(action), last);
        }
    }

    #[test]
    fn test_synonyms_share_a_flag() {
        let mut state = InputState::new();
        state.on_key_transition("ArrowUp", true);
        assert!(state.move_forward);
        state.on_key_transition("w", false);
        assert!(!state.move_forward);
    }

    #[test]
    fn test_jump_consumes_eligibility() {
        let mut state = InputState::new();
        state.restore_jump();

        state.on_key_transition(" ", true);
        assert!(!state.can_jump);
        assert!(state.jump_requested());

        assert!(state.take_jump_request());
        assert!(!state.take_jump_request());
    }

    #[test]
    fn test_jump_requires_eligibility() {
        let mut state = InputState::new();
        state.on_key_transition(" ", true);
        assert!(!state.jump_requested());
        assert!(!state.can_jump);
    }

    #[test]
    fn test_jump_release_is_ignored() {
        let mut state = InputState::new();
        state.restore_jump();
        state.on_key_transition(" ", false);
        assert!(state.can_jump);
        assert!(!state.jump_requested());
    }

    #[test]
    fn test_movement_intent_is_zero_or_unit() {
        for bits in 0u8..16 {
            let state = InputState {
                move_forward: bits & 1 != 0,
                move_backward: bits & 2 != 0,
                move_left: bits & 4 != 0,
                move_right: bits & 8 != 0,
                ..Default::default()
            };
            let intent = state.movement_intent();
            let length = intent.length();
            assert!(
                length == 0.0 || (length - 1.0).abs() < 1e-6,
                "bits {bits:04b} gave length {length}"
            );

            let forward_axis = state.move_forward != state.move_backward;
            let side_axis = state.move_left != state.move_right;
            assert_eq!(length == 0.0, !forward_axis && !side_axis);
        }
    }

    #[test]
    fn test_movement_intent_directions() {
        let mut state = InputState::new();
        state.move_forward = true;
        assert_eq!(state.movement_intent(), Vec2::new(0.0, 1.0));

        state.move_right = true;
        let diagonal = state.movement_intent();
        assert!((diagonal.x - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        assert!((diagonal.y - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_clear_movement_keeps_jump_state() {
        let mut state = InputState::new();
        state.restore_jump();
        state.on_key_transition("w", true);
        state.on_key_transition("d", true);
        state.clear_movement();
        assert_eq!(state.movement_intent(), Vec2::ZERO);
        assert!(state.can_jump);
    }
}
