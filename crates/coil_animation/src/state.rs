//! Spring animation states and their transition function

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of the jump cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringState {
    /// No deformation
    #[default]
    Resting,
    /// Compressing while strength accumulates
    ApplyingStrength,
    /// Releasing, one strength unit per tick
    LeavingStrength,
    /// On the ballistic arc
    Jumping,
    /// Settled at the landing offset (terminal)
    Landed,
}

/// What drives a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringEvent {
    /// Strength applied from outside
    Pull,
    /// Outside strength let go
    Leave,
    /// Accumulated strength fully released
    Drained,
    /// Arc reached the half turn
    Touchdown,
}

impl SpringState {
    /// Target state for `event`, or `None` when the event has no effect here
    pub fn next(self, event: SpringEvent) -> Option<SpringState> {
        use SpringEvent::*;
        use SpringState::*;

        match (self, event) {
            (Resting, Pull) => Some(ApplyingStrength),
            (Resting | ApplyingStrength, Leave) => Some(LeavingStrength),
            (LeavingStrength, Drained) => Some(Jumping),
            (Jumping, Touchdown) => Some(Landed),
            _ => None,
        }
    }

    /// Whether `pull()` adds strength in this state
    pub fn accepts_strength(self) -> bool {
        matches!(self, SpringState::Resting | SpringState::ApplyingStrength)
    }

    pub fn is_terminal(self) -> bool {
        self == SpringState::Landed
    }
}

impl fmt::Display for SpringState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpringState::Resting => "resting",
            SpringState::ApplyingStrength => "applying_strength",
            SpringState::LeavingStrength => "leaving_strength",
            SpringState::Jumping => "jumping",
            SpringState::Landed => "landed",
        };
        f.write_str(name)
    }
}
