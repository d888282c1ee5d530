//! Coil headless driver
//!
//! Loads a `coil.toml`, replays a scripted scenario against a spring, and
//! reports the transformation produced for every frame.

pub mod config;
pub mod report;
pub mod runner;
pub mod scenario;

pub use config::CoilConfig;
pub use report::{CurveReport, FrameRecord, ReportStatus, RunReport};
pub use runner::{run_scenario, ScenarioRunner};
pub use scenario::{Scenario, ScenarioStep};
