//! Key input mapping
//!
//! Only one scan code drives the spring. A press pulls, a release lets go;
//! repeats, unknown actions and every other key are ignored.

use coil_core::{KeyAction, KeyEvent, Transformation};
use serde::{Deserialize, Serialize};

use crate::animator::SpringAnimator;

/// Scan code the spring listens to unless configured otherwise
pub const DEFAULT_SCAN_CODE: i32 = 116;

/// The key bound to the spring
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBinding {
    pub scan_code: i32,
}

impl Default for KeyBinding {
    fn default() -> Self {
        Self {
            scan_code: DEFAULT_SCAN_CODE,
        }
    }
}

impl KeyBinding {
    pub fn new(scan_code: i32) -> Self {
        Self { scan_code }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.scan_code == self.scan_code
    }
}

/// What a key event did to the spring
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Pulled,
    Left,
    Ignored,
}

/// Routes key callbacks and frame queries to one animator
#[derive(Clone, Debug)]
pub struct SpringController {
    animator: SpringAnimator,
    binding: KeyBinding,
}

impl SpringController {
    pub fn new(animator: SpringAnimator, binding: KeyBinding) -> Self {
        Self { animator, binding }
    }

    pub fn binding(&self) -> KeyBinding {
        self.binding
    }

    pub fn animator(&self) -> &SpringAnimator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut SpringAnimator {
        &mut self.animator
    }

    pub fn into_animator(self) -> SpringAnimator {
        self.animator
    }

    /// Key callback entry point
    pub fn on_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        if !self.binding.matches(event) {
            return KeyOutcome::Ignored;
        }

        match event.action {
            KeyAction::Press => {
                self.animator.pull();
                KeyOutcome::Pulled
            }
            KeyAction::Release => {
                self.animator.leave();
                KeyOutcome::Left
            }
            KeyAction::Repeat | KeyAction::Unknown(_) => {
                tracing::trace!(action = ?event.action, "key action ignored");
                KeyOutcome::Ignored
            }
        }
    }

    /// Raw key callback `(key, scan_code, action, mods)`
    pub fn on_key_raw(&mut self, key: i32, scan_code: i32, action: i32, mods: u32) -> KeyOutcome {
        self.on_key(&KeyEvent::from_raw(key, scan_code, action, mods))
    }

    /// Frame callback entry point: one tick
    pub fn frame(&mut self) -> Transformation {
        self.animator.get_transformation()
    }
}
