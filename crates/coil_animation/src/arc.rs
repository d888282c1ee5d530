//! Ballistic jump arc
//!
//! The jump advances one degree per tick. At step `n` the spring sits at
//! angle `n * sign` (sign from [`JumpDirection::sign`]), translated along a
//! half-ellipse and tumbling about its own center:
//!
//! ```text
//! rising  (cos ≥ 0): dx = d/2 * (1 - cos a)        dy = h * |sin a|
//! falling (cos < 0): dx = d/2 + d/2 * |cos a|      dy = h * sin |a|
//! ```
//!
//! `dx` is negated for a leftward jump. The jump ends at 180°, where
//! `|dx| == d` and `dy == 0`.

use coil_core::Transformation;
use serde::{Deserialize, Serialize};

use crate::curve::SpringCurve;
use crate::direction::JumpDirection;

/// Number of one-degree ticks from take-off to touchdown
pub const HALF_TURN_STEPS: u32 = 180;

/// Which half of the arc an angle falls in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcPhase {
    Rising,
    Falling,
}

/// Geometry of one jump
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JumpArc {
    direction: JumpDirection,
    /// Horizontal travel from take-off to touchdown
    max_distance: f32,
    /// Height of the apex
    max_height: f32,
    /// Pivot of the tumble
    center: (f32, f32),
}

impl JumpArc {
    pub fn new(
        direction: JumpDirection,
        max_distance: f32,
        max_height: f32,
        center: (f32, f32),
    ) -> Self {
        Self {
            direction,
            max_distance,
            max_height,
            center,
        }
    }

    /// Derive the arc from a curve's extents
    ///
    /// `max_distance = boundary_x - max_x`, `max_height = height_factor * top`,
    /// pivot at `(0, top / 2)`.
    pub fn for_curve(
        curve: &SpringCurve,
        direction: JumpDirection,
        boundary_x: f32,
        height_factor: f32,
    ) -> Self {
        Self::new(
            direction,
            boundary_x - curve.max_x(),
            height_factor * curve.top(),
            curve.center(),
        )
    }

    pub fn direction(&self) -> JumpDirection {
        self.direction
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    pub fn center(&self) -> (f32, f32) {
        self.center
    }

    /// Signed angle in degrees at `step`
    pub fn angle_degrees(&self, step: u32) -> f64 {
        f64::from(step) * self.direction.sign()
    }

    /// True once `step` has reached the half turn
    pub fn is_touchdown(&self, step: u32) -> bool {
        self.angle_degrees(step).abs() >= f64::from(HALF_TURN_STEPS)
    }

    pub fn phase(&self, step: u32) -> ArcPhase {
        let cos = self.angle_degrees(step).to_radians().cos();
        if (0.0..=1.0).contains(&cos) {
            ArcPhase::Rising
        } else {
            ArcPhase::Falling
        }
    }

    /// Translation `(dx, dy)` at `step`
    pub fn shift(&self, step: u32) -> (f32, f32) {
        let radians = self.angle_degrees(step).to_radians();
        let middle = f64::from(self.max_distance) / 2.0;
        let height = f64::from(self.max_height);

        let (mut dx, dy) = match self.phase(step) {
            ArcPhase::Rising => (middle * (1.0 - radians.cos()), height * radians.sin().abs()),
            ArcPhase::Falling => (
                middle + middle * radians.cos().abs(),
                height * radians.abs().sin(),
            ),
        };

        if self.direction == JumpDirection::Left {
            dx = -dx;
        }

        (dx as f32, dy as f32)
    }

    /// Frame transformation at `step`: `T(dx, dy) * R(center, angle)`
    pub fn transformation(&self, step: u32) -> Transformation {
        let (dx, dy) = self.shift(step);
        let radians = self.angle_degrees(step).to_radians() as f32;
        let (cx, cy) = self.center;

        Transformation::translation(dx, dy, 0.0)
            .compose(&Transformation::rotation_about(cx, cy, radians))
    }

    /// Where the spring rests after touchdown
    pub fn landing(&self) -> Transformation {
        let dx = self.max_distance * self.direction.sign() as f32 * -1.0;
        Transformation::translation(dx, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(direction: JumpDirection) -> JumpArc {
        JumpArc::for_curve(&SpringCurve::default(), direction, 0.8, 4.0)
    }

    #[test]
    fn test_derived_geometry() {
        let curve = SpringCurve::default();
        let a = arc(JumpDirection::Left);
        assert_eq!(a.max_distance(), 0.8 - curve.max_x());
        assert_eq!(a.max_height(), 4.0 * curve.top());
        assert_eq!(a.center(), (0.0, curve.top() / 2.0));
    }

    #[test]
    fn test_take_off_is_identity() {
        let a = arc(JumpDirection::Right);
        assert_eq!(a.shift(0), (0.0, 0.0));
        assert_eq!(a.transformation(0), Transformation::identity());
    }

    #[test]
    fn test_frame_translates_after_tumbling() {
        let a = arc(JumpDirection::Right);
        let (dx, dy) = a.shift(90);
        let (cx, cy) = a.center();
        let radians = a.angle_degrees(90).to_radians() as f32;

        let expected = Transformation::translation(dx, dy, 0.0)
            .compose(&Transformation::rotation_about(cx, cy, radians));
        assert_eq!(a.transformation(90), expected);

        // The pivot only moves by the shift
        let (px, py) = a.transformation(90).transform_point(cx, cy);
        assert!((px - (cx + dx)).abs() < 1e-5);
        assert!((py - (cy + dy)).abs() < 1e-5);

        // A quarter turn clockwise swings the base from below the pivot to its left
        let (bx, by) = a.transformation(90).transform_point(0.0, 0.0);
        assert!((bx - (dx - cy)).abs() < 1e-5, "{bx}");
        assert!((by - (cy + dy)).abs() < 1e-5, "{by}");
    }

    #[test]
    fn test_phases() {
        let a = arc(JumpDirection::Left);
        assert_eq!(a.phase(0), ArcPhase::Rising);
        assert_eq!(a.phase(45), ArcPhase::Rising);
        assert_eq!(a.phase(90), ArcPhase::Rising);
        assert_eq!(a.phase(91), ArcPhase::Falling);
        assert_eq!(a.phase(180), ArcPhase::Falling);
    }

    #[test]
    fn test_apex() {
        let a = arc(JumpDirection::Right);
        let (dx, dy) = a.shift(90);
        assert!((dx - a.max_distance() / 2.0).abs() < 1e-6);
        assert!((dy - a.max_height()).abs() < 1e-6);
    }

    #[test]
    fn test_touchdown_shift_matches_landing() {
        for direction in [JumpDirection::Left, JumpDirection::Right] {
            let a = arc(direction);
            let (dx, dy) = a.shift(HALF_TURN_STEPS);
            let landing = a.landing();
            assert_eq!(dx, landing.export_matrix()[(0, 3)]);
            assert!(dy.abs() < 1e-6);
        }
    }

    #[test]
    fn test_mirror_symmetry() {
        let left = arc(JumpDirection::Left);
        let right = arc(JumpDirection::Right);
        for step in 0..=HALF_TURN_STEPS {
            let (lx, ly) = left.shift(step);
            let (rx, ry) = right.shift(step);
            assert_eq!(rx, -lx, "step {step}");
            assert_eq!(ry, ly, "step {step}");
        }
    }

    #[test]
    fn test_right_moves_positive_x() {
        let a = arc(JumpDirection::Right);
        for step in 1..=HALF_TURN_STEPS {
            assert!(a.shift(step).0 > 0.0);
        }
        assert!(a.landing().export_matrix()[(0, 3)] > 0.0);
    }

    #[test]
    fn test_horizontal_progress_is_monotonic() {
        let a = arc(JumpDirection::Right);
        let mut previous = 0.0f32;
        for step in 1..=HALF_TURN_STEPS {
            let (dx, _) = a.shift(step);
            assert!(dx >= previous, "step {step}: {dx} < {previous}");
            previous = dx;
        }
    }

    #[test]
    fn test_touchdown_detection() {
        let a = arc(JumpDirection::Left);
        assert!(!a.is_touchdown(179));
        assert!(a.is_touchdown(180));
    }
}
