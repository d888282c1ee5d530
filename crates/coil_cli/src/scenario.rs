//! Scripted input for headless runs.

use anyhow::{Context, Result};
use coil_animation::SpringState;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sequence of input and frame steps.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Scenario {
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).context("Failed to parse scenario")
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_json(&raw)
    }

    /// Compress fully, let go, and follow the jump to the ground.
    pub fn full_jump(max_strength: u32) -> Self {
        Self {
            steps: vec![
                ScenarioStep::Pull {
                    times: max_strength,
                },
                ScenarioStep::Leave,
                ScenarioStep::RunUntilLanded {
                    max_frames: default_max_frames(),
                },
                ScenarioStep::ExpectState {
                    state: SpringState::Landed,
                },
            ],
        }
    }
}

/// One scenario step.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Call `pull()` directly.
    Pull {
        #[serde(default = "default_times")]
        times: u32,
    },
    /// Call `leave()` directly.
    Leave,
    /// Deliver a raw key callback.
    Key {
        #[serde(default)]
        key: i32,
        scan_code: i32,
        action: i32,
        #[serde(default)]
        mods: u32,
    },
    /// Render a fixed number of frames.
    Tick { frames: u32 },
    /// Render frames until the spring lands.
    RunUntilLanded {
        #[serde(default = "default_max_frames")]
        max_frames: u32,
    },
    /// Fail the run unless the spring is in `state`.
    ExpectState { state: SpringState },
}

fn default_times() -> u32 {
    1
}

fn default_max_frames() -> u32 {
    1_000
}
