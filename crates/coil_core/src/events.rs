//! Key event model
//!
//! Mirrors the callback signature of the windowing layer:
//! `(key, scan_code, action, mods)`, with the literal action codes it uses.

use serde::{Deserialize, Serialize};

/// Raw action code reported by the windowing layer
pub type ActionCode = i32;

/// Common action codes
pub mod action_codes {
    use super::ActionCode;

    pub const RELEASE: ActionCode = 0;
    pub const PRESS: ActionCode = 1;
    pub const REPEAT: ActionCode = 2;
}

/// Decoded key action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    Release,
    Press,
    Repeat,
    Unknown(ActionCode),
}

impl KeyAction {
    pub fn from_code(code: ActionCode) -> Self {
        match code {
            action_codes::RELEASE => KeyAction::Release,
            action_codes::PRESS => KeyAction::Press,
            action_codes::REPEAT => KeyAction::Repeat,
            other => KeyAction::Unknown(other),
        }
    }

    pub fn code(self) -> ActionCode {
        match self {
            KeyAction::Release => action_codes::RELEASE,
            KeyAction::Press => action_codes::PRESS,
            KeyAction::Repeat => action_codes::REPEAT,
            KeyAction::Unknown(code) => code,
        }
    }
}

/// Keyboard modifier flags as delivered by the windowing layer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers(pub u32);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(0x0001);
    pub const CONTROL: Modifiers = Modifiers(0x0002);
    pub const ALT: Modifiers = Modifiers(0x0004);
    pub const SUPER: Modifiers = Modifiers(0x0008);

    pub fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }
}

/// A single key callback invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Virtual key code (platform-specific)
    pub key: i32,
    /// Hardware scan code
    pub scan_code: i32,
    pub action: KeyAction,
    #[serde(default)]
    pub mods: Modifiers,
}

impl KeyEvent {
    /// Build from the raw callback arguments
    pub fn from_raw(key: i32, scan_code: i32, action: ActionCode, mods: u32) -> Self {
        Self {
            key,
            scan_code,
            action: KeyAction::from_code(action),
            mods: Modifiers(mods),
        }
    }

    pub fn press(scan_code: i32) -> Self {
        Self::from_raw(0, scan_code, action_codes::PRESS, 0)
    }

    pub fn release(scan_code: i32) -> Self {
        Self::from_raw(0, scan_code, action_codes::RELEASE, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_codes() {
        assert_eq!(KeyAction::from_code(0), KeyAction::Release);
        assert_eq!(KeyAction::from_code(1), KeyAction::Press);
        assert_eq!(KeyAction::from_code(2), KeyAction::Repeat);
        assert_eq!(KeyAction::from_code(7), KeyAction::Unknown(7));
        assert_eq!(KeyAction::Unknown(7).code(), 7);
        assert_eq!(KeyAction::Press.code(), 1);
    }

    #[test]
    fn test_from_raw() {
        let event = KeyEvent::from_raw(265, 116, 1, 0x0003);
        assert_eq!(event.scan_code, 116);
        assert_eq!(event.action, KeyAction::Press);
        assert!(event.mods.contains(Modifiers::SHIFT));
        assert!(event.mods.contains(Modifiers::CONTROL));
        assert!(!event.mods.contains(Modifiers::ALT));
    }
}
