//! Coil configuration file handling

use anyhow::{Context, Result};
use coil_animation::{
    AnimatorConfig, CurveParams, FixedDirection, JumpDirection, KeyBinding, RandomDirection,
    SpringAnimator, SpringController, SpringCurve,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level coil configuration (coil.toml)
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CoilConfig {
    #[serde(default)]
    pub curve: CurveParams,
    #[serde(default)]
    pub animator: AnimatorConfig,
    #[serde(default)]
    pub jump: JumpConfig,
    #[serde(default)]
    pub input: KeyBinding,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Jump direction selection
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct JumpConfig {
    /// Pin the direction instead of drawing it
    #[serde(default)]
    pub direction: Option<JumpDirection>,
    /// Seed for the direction draw
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl CoilConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).context("Failed to parse coil configuration")
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(mut self, seed: Option<u64>, direction: Option<JumpDirection>) -> Self {
        if seed.is_some() {
            self.jump.seed = seed;
        }
        if direction.is_some() {
            self.jump.direction = direction;
        }
        self
    }

    pub fn build_curve(&self) -> Result<SpringCurve> {
        SpringCurve::new(self.curve).context("Invalid [curve] section")
    }

    pub fn build_animator(&self, curve: &SpringCurve) -> SpringAnimator {
        match self.jump.direction {
            Some(direction) => SpringAnimator::new(curve, self.animator, FixedDirection(direction)),
            None => SpringAnimator::new(curve, self.animator, RandomDirection::new(self.jump.seed)),
        }
    }

    pub fn build_controller(&self, curve: &SpringCurve) -> SpringController {
        SpringController::new(self.build_animator(curve), self.input)
    }
}
