//! Jump direction
//!
//! The direction is drawn once when an animator is built. Drawing goes through
//! [`DirectionSource`] so callers can pin it or seed it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Side the spring jumps towards
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpDirection {
    Left,
    Right,
}

impl JumpDirection {
    /// Rotation sign applied to the jump angle: `+1` for Left, `-1` for Right
    pub fn sign(self) -> f64 {
        match self {
            JumpDirection::Left => 1.0,
            JumpDirection::Right => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            JumpDirection::Left => JumpDirection::Right,
            JumpDirection::Right => JumpDirection::Left,
        }
    }
}

impl fmt::Display for JumpDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpDirection::Left => f.write_str("left"),
            JumpDirection::Right => f.write_str("right"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown jump direction `{0}` (expected `left` or `right`)")]
pub struct ParseDirectionError(String);

impl FromStr for JumpDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(JumpDirection::Left),
            "right" | "r" => Ok(JumpDirection::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Supplies the jump direction for a new animator
pub trait DirectionSource {
    fn draw(&mut self) -> JumpDirection;
}

/// Always yields the same direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDirection(pub JumpDirection);

impl DirectionSource for FixedDirection {
    fn draw(&mut self) -> JumpDirection {
        self.0
    }
}

/// Draws Left or Right with equal odds
#[derive(Clone, Debug)]
pub struct RandomDirection {
    rng: StdRng,
}

impl RandomDirection {
    /// Seeded when `seed` is given, otherwise seeded from the thread RNG
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }
}

impl Default for RandomDirection {
    fn default() -> Self {
        Self::new(None)
    }
}

impl DirectionSource for RandomDirection {
    fn draw(&mut self) -> JumpDirection {
        if self.rng.random_bool(0.5) {
            JumpDirection::Left
        } else {
            JumpDirection::Right
        }
    }
}

impl<S: DirectionSource + ?Sized> DirectionSource for &mut S {
    fn draw(&mut self) -> JumpDirection {
        (**self).draw()
    }
}
