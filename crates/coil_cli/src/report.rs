//! Report output model for headless runs.

use anyhow::{Context, Result};
use coil_animation::{AnimatorConfig, JumpArc, JumpDirection, SpringCurve, SpringState};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Report status for a headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// One rendered frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: u64,
    /// State after the frame was produced
    pub state: SpringState,
    pub strength: u32,
    pub jump_step: u32,
    /// Row-major transformation uploaded for this frame
    pub matrix: [f32; 16],
}

/// Machine-readable result of a headless run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub message: Option<String>,
    pub direction: JumpDirection,
    pub max_distance: f32,
    pub max_height: f32,
    pub final_state: SpringState,
    pub frames: Vec<FrameRecord>,
}

impl RunReport {
    pub fn is_failed(&self) -> bool {
        self.status == ReportStatus::Failed
    }

    pub fn write_to_path(&self, path: &Path, pretty: bool) -> Result<()> {
        let payload = to_json(self, pretty)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<()> {
        write_json(self, writer, pretty)
    }
}

/// Control points and the jump geometry derived from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveReport {
    pub points: usize,
    pub top: f32,
    pub max_x: f32,
    pub max_distance: f32,
    pub max_height: f32,
    /// Interleaved `x, y` pairs
    pub buffer: Vec<f32>,
}

impl CurveReport {
    pub fn new(curve: &SpringCurve, config: &AnimatorConfig) -> Self {
        // Extents do not depend on the side of the jump
        let arc = JumpArc::for_curve(
            curve,
            JumpDirection::Left,
            config.boundary_x,
            config.height_factor,
        );
        Self {
            points: curve.len(),
            top: curve.top(),
            max_x: curve.max_x(),
            max_distance: arc.max_distance(),
            max_height: arc.max_height(),
            buffer: curve.to_buffer(),
        }
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<()> {
        write_json(self, writer, pretty)
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(payload)
}

fn write_json<T: Serialize, W: Write>(value: &T, writer: &mut W, pretty: bool) -> Result<()> {
    let payload = to_json(value, pretty)?;
    writer.write_all(payload.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}
