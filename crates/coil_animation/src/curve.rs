//! Spring curve generation
//!
//! The spring is drawn as a line strip through control points produced by a
//! sinusoidal recurrence. Starting from `(0, 0)`, each iteration emits the
//! current point, then advances:
//!
//! ```text
//! x = amplitude * sin(y * coefficient)
//! y = y + step
//! ```
//!
//! Generation stops once `floor(y / (2π / coefficient))` reaches the arch count.
//! The sequence is fully deterministic and computed once per curve.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use thiserror::Error;

/// Parameters of the curve recurrence
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParams {
    /// Horizontal half-width of each coil
    pub amplitude: f64,
    /// Angular frequency along Y; larger values give tighter coils
    pub coefficient: f64,
    /// Y increment between consecutive points
    pub step: f64,
    /// Number of full periods to draw
    pub arches: u32,
}

impl CurveParams {
    pub const AMPLITUDE: f64 = 0.07;
    pub const COEFFICIENT: f64 = 380.0;
    pub const STEP: f64 = 0.001;
    pub const ARCHES: u32 = 10;
    /// Upper bound on the number of generated control points
    pub const MAX_POINTS: usize = 1_000_000;

    /// Y length of one period
    pub fn period(&self) -> f64 {
        TAU / self.coefficient
    }

    /// Approximate number of points the recurrence emits
    pub fn estimated_points(&self) -> f64 {
        f64::from(self.arches) * self.period() / self.step
    }

    fn validate(&self) -> Result<(), CurveError> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(CurveError::InvalidStep(self.step));
        }
        if !(self.coefficient.is_finite() && self.coefficient > 0.0) {
            return Err(CurveError::InvalidCoefficient(self.coefficient));
        }
        if !self.amplitude.is_finite() {
            return Err(CurveError::InvalidAmplitude(self.amplitude));
        }
        if self.arches == 0 {
            return Err(CurveError::NoArches);
        }
        let estimated = self.estimated_points();
        if !(estimated <= Self::MAX_POINTS as f64) {
            return Err(CurveError::TooManyPoints {
                estimated,
                max: Self::MAX_POINTS,
            });
        }
        Ok(())
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            amplitude: Self::AMPLITUDE,
            coefficient: Self::COEFFICIENT,
            step: Self::STEP,
            arches: Self::ARCHES,
        }
    }
}

/// Rejected curve parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("curve step must be a positive finite number, got {0}")]
    InvalidStep(f64),

    #[error("curve coefficient must be a positive finite number, got {0}")]
    InvalidCoefficient(f64),

    #[error("curve amplitude must be finite, got {0}")]
    InvalidAmplitude(f64),

    #[error("curve must draw at least one arch")]
    NoArches,

    #[error("curve would generate about {estimated:.0} points, limit is {max}")]
    TooManyPoints { estimated: f64, max: usize },
}

/// A control point of the spring curve
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f32,
    pub y: f32,
}

/// The spring's immutable control points
#[derive(Clone, Debug, PartialEq)]
pub struct SpringCurve {
    params: CurveParams,
    points: Vec<ControlPoint>,
}

impl Default for SpringCurve {
    fn default() -> Self {
        let params = CurveParams::default();
        Self {
            points: generate(&params),
            params,
        }
    }
}

impl SpringCurve {
    /// Generate the curve for `params`
    pub fn new(params: CurveParams) -> Result<Self, CurveError> {
        params.validate()?;
        Ok(Self {
            points: generate(&params),
            params,
        })
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Interleaved `x, y, x, y, ...` buffer for vertex upload
    pub fn to_buffer(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// Height of the curve: the Y of the last generated point
    pub fn top(&self) -> f32 {
        self.points.last().map_or(0.0, |p| p.y)
    }

    /// Largest X among all control points
    pub fn max_x(&self) -> f32 {
        self.points
            .iter()
            .map(|p| p.x)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Geometric center the spring tumbles about while jumping
    pub fn center(&self) -> (f32, f32) {
        (0.0, self.top() / 2.0)
    }
}

fn generate(params: &CurveParams) -> Vec<ControlPoint> {
    let period = params.period();
    let capacity = (params.estimated_points() as usize).min(CurveParams::MAX_POINTS);
    let mut points = Vec::with_capacity(capacity.saturating_add(1));

    let mut x = 0.0f64;
    let mut y = 0.0f64;
    let mut drawn = 0u64;

    while drawn < u64::from(params.arches) {
        points.push(ControlPoint {
            x: x as f32,
            y: y as f32,
        });

        x = params.amplitude * (y * params.coefficient).sin();
        y += params.step;

        drawn = (y / period).floor() as u64;
    }

    tracing::debug!(
        points = points.len(),
        arches = params.arches,
        "generated spring curve"
    );
    points
}
