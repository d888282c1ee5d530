//! Scenario runner that drives a spring frame by frame.

use coil_animation::SpringController;

use crate::report::{FrameRecord, ReportStatus, RunReport};
use crate::scenario::{Scenario, ScenarioStep};

/// Executes scenario steps against one controller and records every frame.
pub struct ScenarioRunner {
    controller: SpringController,
    frames: Vec<FrameRecord>,
}

impl ScenarioRunner {
    pub fn new(controller: SpringController) -> Self {
        Self {
            controller,
            frames: Vec::new(),
        }
    }

    pub fn controller(&self) -> &SpringController {
        &self.controller
    }

    /// Run all steps; the first failing step ends the run.
    pub fn run(mut self, scenario: &Scenario) -> RunReport {
        for (step_index, step) in scenario.steps.iter().enumerate() {
            if let Err(message) = self.execute(step) {
                tracing::warn!(step_index, %message, "scenario step failed");
                return self.finish(ReportStatus::Failed, Some(step_index), Some(message));
            }
        }
        self.finish(ReportStatus::Passed, None, None)
    }

    fn execute(&mut self, step: &ScenarioStep) -> Result<(), String> {
        match step {
            ScenarioStep::Pull { times } => {
                for _ in 0..*times {
                    self.controller.animator_mut().pull();
                }
            }
            ScenarioStep::Leave => self.controller.animator_mut().leave(),
            ScenarioStep::Key {
                key,
                scan_code,
                action,
                mods,
            } => {
                let outcome = self.controller.on_key_raw(*key, *scan_code, *action, *mods);
                tracing::debug!(scan_code, action, ?outcome, "key delivered");
            }
            ScenarioStep::Tick { frames } => {
                for _ in 0..*frames {
                    self.render();
                }
            }
            ScenarioStep::RunUntilLanded { max_frames } => {
                let mut rendered = 0u32;
                while !self.controller.animator().is_landed() {
                    if rendered == *max_frames {
                        return Err(format!(
                            "spring did not land within {max_frames} frames (state: {})",
                            self.controller.animator().state()
                        ));
                    }
                    self.render();
                    rendered += 1;
                }
            }
            ScenarioStep::ExpectState { state } => {
                let actual = self.controller.animator().state();
                if actual != *state {
                    return Err(format!("expected state {state}, found {actual}"));
                }
            }
        }
        Ok(())
    }

    fn render(&mut self) {
        let transformation = self.controller.frame();
        let animator = self.controller.animator();
        self.frames.push(FrameRecord {
            frame: self.frames.len() as u64,
            state: animator.state(),
            strength: animator.strength_applied(),
            jump_step: animator.jump_step(),
            matrix: transformation.to_array(),
        });
    }

    fn finish(
        self,
        status: ReportStatus,
        failed_step_index: Option<usize>,
        message: Option<String>,
    ) -> RunReport {
        let animator = self.controller.animator();
        let arc = animator.arc();
        tracing::info!(
            frames = self.frames.len(),
            state = %animator.state(),
            ?status,
            "scenario finished"
        );
        RunReport {
            status,
            failed_step_index,
            message,
            direction: arc.direction(),
            max_distance: arc.max_distance(),
            max_height: arc.max_height(),
            final_state: animator.state(),
            frames: self.frames,
        }
    }
}

/// Run `scenario` against `controller`.
pub fn run_scenario(controller: SpringController, scenario: &Scenario) -> RunReport {
    ScenarioRunner::new(controller).run(scenario)
}
