//! Spring animator
//!
//! Drives one compress, release, jump, settle cycle. Input arrives through
//! [`SpringAnimator::pull`] and [`SpringAnimator::leave`]; the render loop calls
//! [`SpringAnimator::get_transformation`] exactly once per frame. Each call is one
//! tick of simulated time, so the animation speed follows the frame rate.
//!
//! | State            | Frame transformation                  |
//! |------------------|---------------------------------------|
//! | Resting          | identity                              |
//! | ApplyingStrength | `Scale(1, (max - strength) / max)`    |
//! | LeavingStrength  | same scale, one unit released per tick |
//! | Jumping          | [`JumpArc::transformation`]           |
//! | Landed           | [`JumpArc::landing`]                  |

use coil_core::Transformation;
use serde::{Deserialize, Serialize};

use crate::arc::JumpArc;
use crate::curve::SpringCurve;
use crate::direction::{DirectionSource, JumpDirection};
use crate::state::{SpringEvent, SpringState};

/// Tunables of the jump cycle
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Strength at which `pull()` saturates
    pub max_strength: u32,
    /// X of the boundary the jump must not cross
    pub boundary_x: f32,
    /// Apex height as a multiple of the curve height
    pub height_factor: f32,
}

impl AnimatorConfig {
    pub const MAX_STRENGTH: u32 = 30;
    pub const BOUNDARY_X: f32 = 0.8;
    pub const HEIGHT_FACTOR: f32 = 4.0;
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            max_strength: Self::MAX_STRENGTH,
            boundary_x: Self::BOUNDARY_X,
            height_factor: Self::HEIGHT_FACTOR,
        }
    }
}

/// One recorded state change: `(from, event, to)`
pub type TransitionRecord = (SpringState, SpringEvent, SpringState);

/// State machine producing one [`Transformation`] per frame
#[derive(Clone, Debug)]
pub struct SpringAnimator {
    config: AnimatorConfig,
    state: SpringState,
    strength_applied: u32,
    jump_step: u32,
    arc: JumpArc,
    history: Vec<TransitionRecord>,
}

impl SpringAnimator {
    /// Build an animator for `curve`, drawing the jump direction from `source`
    pub fn new<S: DirectionSource>(
        curve: &SpringCurve,
        config: AnimatorConfig,
        mut source: S,
    ) -> Self {
        Self::with_direction(curve, config, source.draw())
    }

    /// Build an animator with a known jump direction
    pub fn with_direction(
        curve: &SpringCurve,
        mut config: AnimatorConfig,
        direction: JumpDirection,
    ) -> Self {
        // Compression frames divide by the cap
        if config.max_strength == 0 {
            tracing::warn!("max_strength of 0 clamped to 1");
            config.max_strength = 1;
        }

        let arc = JumpArc::for_curve(curve, direction, config.boundary_x, config.height_factor);
        tracing::debug!(
            %direction,
            max_distance = arc.max_distance(),
            max_height = arc.max_height(),
            "spring animator created"
        );

        Self {
            config,
            state: SpringState::Resting,
            strength_applied: 0,
            jump_step: 0,
            arc,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn state(&self) -> SpringState {
        self.state
    }

    pub fn strength_applied(&self) -> u32 {
        self.strength_applied
    }

    pub fn jump_step(&self) -> u32 {
        self.jump_step
    }

    pub fn direction(&self) -> JumpDirection {
        self.arc.direction()
    }

    pub fn arc(&self) -> &JumpArc {
        &self.arc
    }

    pub fn is_landed(&self) -> bool {
        self.state.is_terminal()
    }

    /// State changes so far, oldest first
    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }

    fn fire(&mut self, event: SpringEvent) -> bool {
        let from = self.state;
        let Some(to) = from.next(event) else {
            tracing::trace!(state = %from, ?event, "event ignored");
            return false;
        };

        self.state = to;
        self.history.push((from, event, to));
        tracing::debug!(from = %from, to = %to, ?event, "spring state changed");
        true
    }

    /// Apply one unit of strength, saturating at the configured maximum
    ///
    /// Ignored once the spring is releasing, jumping or landed. Pulls during
    /// the release do not add strength back.
    pub fn pull(&mut self) {
        if !self.state.accepts_strength() {
            tracing::trace!(state = %self.state, "pull ignored");
            return;
        }
        if self.state == SpringState::Resting {
            self.fire(SpringEvent::Pull);
        }
        if self.strength_applied < self.config.max_strength {
            self.strength_applied += 1;
        }
    }

    /// Let go of the spring
    ///
    /// With no strength applied the spring takes off right away.
    pub fn leave(&mut self) {
        if !self.fire(SpringEvent::Leave) {
            return;
        }
        if self.strength_applied == 0 {
            self.enter_jump();
        }
    }

    fn enter_jump(&mut self) {
        if self.fire(SpringEvent::Drained) {
            self.jump_step = 0;
        }
    }

    /// Transformation for this frame; advances the animation by one tick
    pub fn get_transformation(&mut self) -> Transformation {
        match self.state {
            SpringState::Resting => Transformation::identity(),
            SpringState::ApplyingStrength => self.compression(),
            SpringState::LeavingStrength => self.release_tick(),
            SpringState::Jumping => self.jump_tick(),
            SpringState::Landed => self.arc.landing(),
        }
    }

    /// The landing transformation, regardless of the current state
    pub fn landing_transformation(&self) -> Transformation {
        self.arc.landing()
    }

    fn compression(&self) -> Transformation {
        let max = self.config.max_strength as f32;
        let remaining = self.config.max_strength.saturating_sub(self.strength_applied) as f32;
        Transformation::scale(1.0, remaining / max, 1.0)
    }

    fn release_tick(&mut self) -> Transformation {
        self.strength_applied = self.strength_applied.saturating_sub(1);
        let frame = self.compression();
        if self.strength_applied == 0 {
            self.enter_jump();
        }
        frame
    }

    fn jump_tick(&mut self) -> Transformation {
        let step = self.jump_step;
        let frame = self.arc.transformation(step);

        if self.arc.is_touchdown(step) {
            self.fire(SpringEvent::Touchdown);
            self.jump_step = 0;
        } else {
            self.jump_step += 1;
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::HALF_TURN_STEPS;
    use crate::direction::FixedDirection;

    fn animator(direction: JumpDirection) -> SpringAnimator {
        SpringAnimator::with_direction(&SpringCurve::default(), AnimatorConfig::default(), direction)
    }

    #[test]
    fn test_resting_is_identity() {
        let mut a = animator(JumpDirection::Left);
        for _ in 0..5 {
            assert_eq!(a.get_transformation(), Transformation::identity());
        }
        assert_eq!(a.state(), SpringState::Resting);
    }

    #[test]
    fn test_pull_saturates() {
        let mut a = animator(JumpDirection::Left);
        for _ in 0..40 {
            a.pull();
        }
        assert_eq!(a.strength_applied(), 30);
        assert_eq!(a.state(), SpringState::ApplyingStrength);
        // One transition only, however many pulls
        assert_eq!(a.history().len(), 1);
    }

    #[test]
    fn test_pull_during_release_is_ignored() {
        let mut a = animator(JumpDirection::Left);
        for _ in 0..10 {
            a.pull();
        }
        a.leave();
        a.get_transformation();
        assert_eq!(a.strength_applied(), 9);
        a.pull();
        assert_eq!(a.strength_applied(), 9);
        assert_eq!(a.state(), SpringState::LeavingStrength);
    }

    #[test]
    fn test_compression_scale() {
        let mut a = animator(JumpDirection::Left);
        for _ in 0..15 {
            a.pull();
        }
        let m = a.get_transformation().into_matrix();
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 1)], 0.5);
        assert_eq!(m[(2, 2)], 1.0);
        // Querying while compressing does not drain strength
        assert_eq!(a.strength_applied(), 15);
    }

    #[test]
    fn test_full_compression_flattens() {
        let mut a = animator(JumpDirection::Left);
        for _ in 0..30 {
            a.pull();
        }
        assert_eq!(a.get_transformation().export_matrix()[(1, 1)], 0.0);
    }

    #[test]
    fn test_leave_without_strength_jumps_immediately() {
        let mut a = animator(JumpDirection::Right);
        a.leave();
        assert_eq!(a.state(), SpringState::Jumping);
        assert_eq!(a.strength_applied(), 0);
        assert_eq!(a.jump_step(), 0);
        assert_eq!(
            a.history(),
            &[
                (SpringState::Resting, SpringEvent::Leave, SpringState::LeavingStrength),
                (SpringState::LeavingStrength, SpringEvent::Drained, SpringState::Jumping),
            ]
        );
        // First jump frame is take-off
        assert_eq!(a.get_transformation(), Transformation::identity());
        assert_eq!(a.jump_step(), 1);
    }

    #[test]
    fn test_release_drains_one_per_tick() {
        let mut a = animator(JumpDirection::Left);
        for _ in 0..3 {
            a.pull();
        }
        a.leave();
        assert_eq!(a.state(), SpringState::LeavingStrength);

        let frame = a.get_transformation();
        assert_eq!(a.strength_applied(), 2);
        assert_eq!(frame.export_matrix()[(1, 1)], 28.0 / 30.0);

        a.get_transformation();
        assert_eq!(a.state(), SpringState::LeavingStrength);
        let last = a.get_transformation();
        assert_eq!(a.strength_applied(), 0);
        assert_eq!(last, Transformation::identity());
        assert_eq!(a.state(), SpringState::Jumping);
    }

    #[test]
    fn test_input_ignored_while_releasing() {
        let mut a = animator(JumpDirection::Left);
        for _ in 0..5 {
            a.pull();
        }
        a.leave();
        a.pull();
        a.leave();
        assert_eq!(a.strength_applied(), 5);
        assert_eq!(a.state(), SpringState::LeavingStrength);
    }

    #[test]
    fn test_input_ignored_while_jumping_and_landed() {
        let mut a = animator(JumpDirection::Left);
        a.leave();
        a.get_transformation();
        let step = a.jump_step();

        a.pull();
        a.leave();
        assert_eq!(a.state(), SpringState::Jumping);
        assert_eq!(a.strength_applied(), 0);
        assert_eq!(a.jump_step(), step);

        while !a.is_landed() {
            a.get_transformation();
        }
        let history_len = a.history().len();
        a.pull();
        a.leave();
        assert_eq!(a.state(), SpringState::Landed);
        assert_eq!(a.strength_applied(), 0);
        assert_eq!(a.history().len(), history_len);
    }

    #[test]
    fn test_jump_length() {
        let mut a = animator(JumpDirection::Right);
        a.leave();
        let mut ticks = 0;
        while a.state() == SpringState::Jumping {
            a.get_transformation();
            ticks += 1;
        }
        // Steps 0 through 180 inclusive
        assert_eq!(ticks, HALF_TURN_STEPS + 1);
        assert_eq!(a.jump_step(), 0);
    }

    #[test]
    fn test_landed_is_idempotent() {
        let mut a = animator(JumpDirection::Left);
        a.leave();
        while !a.is_landed() {
            a.get_transformation();
        }
        let first = a.get_transformation().export_buffer();
        for _ in 0..10 {
            let again = a.get_transformation().export_buffer();
            let bits = |v: &[f32]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
            assert_eq!(bits(&again), bits(&first));
        }
        assert_eq!(a.get_transformation(), a.landing_transformation());
    }

    #[test]
    fn test_direction_from_source() {
        let curve = SpringCurve::default();
        let a = SpringAnimator::new(&curve, AnimatorConfig::default(), FixedDirection(JumpDirection::Right));
        assert_eq!(a.direction(), JumpDirection::Right);
    }

    #[test]
    fn test_zero_max_strength_clamped() {
        let config = AnimatorConfig {
            max_strength: 0,
            ..AnimatorConfig::default()
        };
        let mut a = SpringAnimator::with_direction(&SpringCurve::default(), config, JumpDirection::Left);
        a.pull();
        let m = a.get_transformation().into_matrix();
        assert!(m[(1, 1)].is_finite());
        assert_eq!(a.config().max_strength, 1);
    }
}
