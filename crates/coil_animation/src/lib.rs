//! Coil Animation System
//!
//! The spring curve and its compress, release, jump, settle cycle.
//!
//! # Features
//!
//! - **Curve generation**: deterministic sinusoidal control points
//! - **Jump cycle**: a tick-driven state machine emitting one transformation
//!   per frame
//! - **Key mapping**: one bound scan code, press pulls and release lets go
//! - **Scheduling**: tick several springs in lockstep
//!
//! # Example
//!
//! ```rust
//! use coil_animation::{AnimatorConfig, JumpDirection, SpringAnimator, SpringCurve, SpringState};
//!
//! let curve = SpringCurve::default();
//! let mut spring = SpringAnimator::with_direction(&curve, AnimatorConfig::default(), JumpDirection::Right);
//!
//! spring.pull();
//! spring.leave();
//! while !spring.is_landed() {
//!     let frame = spring.get_transformation();
//!     assert_eq!(frame.export_buffer().len(), 16);
//! }
//! assert_eq!(spring.state(), SpringState::Landed);
//! ```

pub mod animator;
pub mod arc;
pub mod curve;
pub mod direction;
pub mod input;
pub mod scheduler;
pub mod state;

pub use animator::{AnimatorConfig, SpringAnimator};
pub use arc::{ArcPhase, JumpArc};
pub use curve::{ControlPoint, CurveError, CurveParams, SpringCurve};
pub use direction::{DirectionSource, FixedDirection, JumpDirection, RandomDirection};
pub use input::{KeyBinding, KeyOutcome, SpringController};
pub use scheduler::{AnimationScheduler, AnimatorId};
pub use state::{SpringEvent, SpringState};
