//! Animation scheduler
//!
//! Owns every live spring and ticks each one once per frame. There is no wall
//! clock: one call to [`AnimationScheduler::tick`] is one tick for every spring.

use coil_core::Transformation;
use slotmap::{new_key_type, SlotMap};

use crate::animator::SpringAnimator;
use crate::state::SpringState;

new_key_type! {
    pub struct AnimatorId;
}

/// Ticks all registered springs
pub struct AnimationScheduler {
    animators: SlotMap<AnimatorId, SpringAnimator>,
    frame: u64,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            animators: SlotMap::with_key(),
            frame: 0,
        }
    }

    pub fn add(&mut self, animator: SpringAnimator) -> AnimatorId {
        self.animators.insert(animator)
    }

    pub fn get(&self, id: AnimatorId) -> Option<&SpringAnimator> {
        self.animators.get(id)
    }

    pub fn get_mut(&mut self, id: AnimatorId) -> Option<&mut SpringAnimator> {
        self.animators.get_mut(id)
    }

    pub fn remove(&mut self, id: AnimatorId) -> Option<SpringAnimator> {
        self.animators.remove(id)
    }

    /// Frames ticked so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance every spring by one tick and collect its frame transformation
    pub fn tick(&mut self) -> Vec<(AnimatorId, Transformation)> {
        self.frame += 1;
        self.animators
            .iter_mut()
            .map(|(id, animator)| (id, animator.get_transformation()))
            .collect()
    }

    /// True while any spring is mid-cycle (neither resting nor landed)
    pub fn has_active_animations(&self) -> bool {
        self.animators
            .values()
            .any(|a| !matches!(a.state(), SpringState::Resting | SpringState::Landed))
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnimatorId, &SpringAnimator)> {
        self.animators.iter()
    }

    pub fn len(&self) -> usize {
        self.animators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animators.is_empty()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
