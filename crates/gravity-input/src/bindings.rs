//! Key bindings for the three movement controls.

use gravity_config::InputConfig;
use gravity_physics::ControlInput;
use serde::{Deserialize, Serialize};
use tracing::warn;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::keyboard::KeyboardState;

/// A bindable control of the controlled body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlAction {
    Left,
    Right,
    Jump,
}

impl ControlAction {
    pub const ALL: [ControlAction; 3] = [ControlAction::Left, ControlAction::Right, ControlAction::Jump];

    /// Name used as a key in the `input.keybindings` config table.
    pub fn name(self) -> &'static str {
        match self {
            ControlAction::Left => "left",
            ControlAction::Right => "right",
            ControlAction::Jump => "jump",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(name.trim()))
    }
}

const LETTERS: [KeyCode; 26] = [
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
    KeyCode::KeyM,
    KeyCode::KeyN,
    KeyCode::KeyO,
    KeyCode::KeyP,
    KeyCode::KeyQ,
    KeyCode::KeyR,
    KeyCode::KeyS,
    KeyCode::KeyT,
    KeyCode::KeyU,
    KeyCode::KeyV,
    KeyCode::KeyW,
    KeyCode::KeyX,
    KeyCode::KeyY,
    KeyCode::KeyZ,
];

const DIGITS: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Parses a winit key code name such as `"KeyW"`, `"Digit3"` or `"ArrowUp"`.
/// A bare letter (`"w"`) is accepted as shorthand for `Key<letter>`.
pub fn parse_key_name(name: &str) -> Option<KeyCode> {
    let name = name.trim();
    let letter = name.strip_prefix("Key").unwrap_or(name);
    if let [byte] = letter.as_bytes()
        && byte.is_ascii_alphabetic()
    {
        return Some(LETTERS[usize::from(byte.to_ascii_uppercase() - b'A')]);
    }
    if let Some(digit) = name.strip_prefix("Digit")
        && let [byte] = digit.as_bytes()
        && byte.is_ascii_digit()
    {
        return Some(DIGITS[usize::from(byte - b'0')]);
    }
    Some(match name {
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Tab" => KeyCode::Tab,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        _ => return None,
    })
}

/// Physical keys bound to each control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlBindings {
    pub left: Vec<PhysicalKey>,
    pub right: Vec<PhysicalKey>,
    pub jump: Vec<PhysicalKey>,
}

impl Default for ControlBindings {
    fn default() -> Self {
        Self {
            left: vec![
                PhysicalKey::Code(KeyCode::KeyA),
                PhysicalKey::Code(KeyCode::ArrowLeft),
            ],
            right: vec![
                PhysicalKey::Code(KeyCode::KeyD),
                PhysicalKey::Code(KeyCode::ArrowRight),
            ],
            jump: vec![PhysicalKey::Code(KeyCode::Space)],
        }
    }
}

impl ControlBindings {
    /// Defaults with the overrides from `config.keybindings` applied.
    ///
    /// An override replaces every default key of its action. Unknown action
    /// or key names are logged and skipped.
    pub fn from_config(config: &InputConfig) -> Self {
        let mut bindings = Self::default();
        for (action_name, key_name) in &config.keybindings {
            let Some(action) = ControlAction::from_name(action_name) else {
                warn!(action = %action_name, "ignoring binding for unknown action");
                continue;
            };
            let Some(code) = parse_key_name(key_name) else {
                warn!(action = %action_name, key = %key_name, "ignoring binding with unknown key");
                continue;
            };
            bindings.set(action, vec![PhysicalKey::Code(code)]);
        }
        bindings
    }

    pub fn keys(&self, action: ControlAction) -> &[PhysicalKey] {
        match action {
            ControlAction::Left => &self.left,
            ControlAction::Right => &self.right,
            ControlAction::Jump => &self.jump,
        }
    }

    pub fn set(&mut self, action: ControlAction, keys: Vec<PhysicalKey>) {
        match action {
            ControlAction::Left => self.left = keys,
            ControlAction::Right => self.right = keys,
            ControlAction::Jump => self.jump = keys,
        }
    }

    /// Samples the held state of every control.
    pub fn control_input(&self, keyboard: &KeyboardState) -> ControlInput {
        ControlInput {
            left: keyboard.any_held(&self.left),
            right: keyboard.any_held(&self.right),
            jump: keyboard.any_held(&self.jump),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::RawKeyEvent;

    fn press(kb: &mut KeyboardState, code: KeyCode) {
        kb.process_raw(RawKeyEvent::pressed(PhysicalKey::Code(code)));
    }

    #[test]
    fn test_default_bindings_map_to_controls() {
        let bindings = ControlBindings::default();
        let mut kb = KeyboardState::new();
        assert_eq!(bindings.control_input(&kb), ControlInput::default());

        press(&mut kb, KeyCode::ArrowLeft);
        press(&mut kb, KeyCode::Space);
        let input = bindings.control_input(&kb);
        assert!(input.left);
        assert!(!input.right);
        assert!(input.jump);
    }

    #[test]
    fn test_both_directions_held() {
        let bindings = ControlBindings::default();
        let mut kb = KeyboardState::new();
        press(&mut kb, KeyCode::KeyA);
        press(&mut kb, KeyCode::KeyD);
        let input = bindings.control_input(&kb);
        assert!(input.left && input.right);
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!(parse_key_name("KeyW"), Some(KeyCode::KeyW));
        assert_eq!(parse_key_name("w"), Some(KeyCode::KeyW));
        assert_eq!(parse_key_name("Digit7"), Some(KeyCode::Digit7));
        assert_eq!(parse_key_name("ArrowUp"), Some(KeyCode::ArrowUp));
        assert_eq!(parse_key_name(" Space "), Some(KeyCode::Space));
        assert_eq!(parse_key_name("Key"), None);
        assert_eq!(parse_key_name("Hyperdrive"), None);
    }

    #[test]
    fn test_config_override_replaces_defaults() {
        let mut config = InputConfig::default();
        config
            .keybindings
            .insert("jump".to_string(), "KeyW".to_string());
        let bindings = ControlBindings::from_config(&config);
        assert_eq!(bindings.jump, vec![PhysicalKey::Code(KeyCode::KeyW)]);
        assert_eq!(bindings.left, ControlBindings::default().left);

        let mut kb = KeyboardState::new();
        press(&mut kb, KeyCode::Space);
        assert!(!bindings.control_input(&kb).jump);
        press(&mut kb, KeyCode::KeyW);
        assert!(bindings.control_input(&kb).jump);
    }

    #[test]
    fn test_unknown_names_are_skipped() {
        let mut config = InputConfig::default();
        config
            .keybindings
            .insert("fly".to_string(), "KeyF".to_string());
        config
            .keybindings
            .insert("left".to_string(), "NotAKey".to_string());
        assert_eq!(ControlBindings::from_config(&config), ControlBindings::default());
    }

    #[test]
    fn test_action_names() {
        for action in ControlAction::ALL {
            assert_eq!(ControlAction::from_name(action.name()), Some(action));
        }
        assert_eq!(ControlAction::from_name("JUMP"), Some(ControlAction::Jump));
    }
}
