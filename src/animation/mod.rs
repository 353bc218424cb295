//! Provides the animation strategies that drive an orientation toward a target.
//!
//! Both strategies are pure functions with the same signature: they read the
//! orientation and target, advance the orientation by at most one frame's
//! worth of rotation, and report whether the target has been reached. Any
//! state that must survive between frames lives in the [`Orientation`] itself
//! or in the [`Animator`] that owns the target and rate.
//!
//! # Examples
//! ```
//! use gimbal::animation::{Strategy, Tuning};
//! use gimbal::orientation::Orientation;
//!
//! let mut orientation = Orientation::default();
//! let tuning = Tuning::default();
//! let mut ticks = 0;
//! while !Strategy::Concurrent.tick(&mut orientation, [0.0, 90.0, 0.0], 90.0, 0.1, &tuning) {
//!     ticks += 1;
//! }
//! assert_eq!(orientation.rotation, [0.0, 90.0, 0.0]);
//! assert_eq!(ticks + 1, 10);
//! ```

pub mod concurrent;
pub mod controller;
pub mod sequential;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::angle::{self, FULL_TURN};
use crate::error::{GimbalError, Result};
use crate::euler::{self, Axis, EulerMode};
use crate::orientation::Orientation;

pub use concurrent::tick_concurrent;
pub use controller::{AnimationState, Animator};
pub use sequential::tick_sequential;

/// Default angular tolerance in degrees.
pub const DEFAULT_EPSILON: f32 = 0.05;

/// Highest rate the controller accepts, in degrees per second.
pub const MAX_RATE: f32 = 360.0;

/// How the per-axis rotation direction is chosen from `target - current`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionPolicy {
    /// Always the shorter arc.
    #[default]
    Shortest,
    /// Negative when the difference is `>= 180` or negative, positive
    /// otherwise. Differences `<= -180` go the long way round.
    Legacy,
}

impl DirectionPolicy {
    /// Returns `+1.0` or `-1.0` for a raw difference `target - current`.
    ///
    /// # Examples
    /// ```
    /// use gimbal::animation::DirectionPolicy;
    ///
    /// assert_eq!(DirectionPolicy::Shortest.direction(-340.0), 1.0);
    /// assert_eq!(DirectionPolicy::Legacy.direction(-340.0), -1.0);
    /// assert_eq!(DirectionPolicy::Legacy.direction(200.0), -1.0);
    /// ```
    pub fn direction(self, diff: f32) -> f32 {
        let half = FULL_TURN / 2.0;
        match self {
            DirectionPolicy::Legacy => {
                if diff >= half || diff < 0.0 {
                    -1.0
                } else {
                    1.0
                }
            }
            DirectionPolicy::Shortest => {
                if diff >= half {
                    -1.0
                } else if diff <= -half {
                    1.0
                } else if diff < 0.0 {
                    -1.0
                } else {
                    1.0
                }
            }
        }
    }
}

/// Which axis the sequential strategy finishes first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityOrder {
    /// The mode's named order: `XYZ` finishes X, then Y, then Z.
    #[default]
    Named,
    /// The order rotations act on the object: `XYZ` finishes Z first.
    Reversed,
}

impl PriorityOrder {
    /// Returns the convergence order for `mode`.
    pub fn order(self, mode: EulerMode) -> [Axis; 3] {
        match self {
            PriorityOrder::Named => euler::resolve_order(mode),
            PriorityOrder::Reversed => euler::application_order(mode),
        }
    }
}

/// Knobs shared by both strategies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Angular tolerance, in degrees, below which an axis counts as arrived.
    pub epsilon: f32,
    pub direction: DirectionPolicy,
    pub priority: PriorityOrder,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            direction: DirectionPolicy::default(),
            priority: PriorityOrder::default(),
        }
    }
}

impl Tuning {
    /// Checks that the tolerance is usable.
    ///
    /// # Examples
    /// ```
    /// use gimbal::animation::Tuning;
    ///
    /// assert!(Tuning::default().validate().is_ok());
    /// assert!(Tuning { epsilon: -1.0, ..Tuning::default() }.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.epsilon.is_finite() && self.epsilon > 0.0 && self.epsilon < FULL_TURN / 2.0 {
            Ok(())
        } else {
            Err(GimbalError::InvalidConfig(format!(
                "epsilon must be in (0, 180), got {}",
                self.epsilon
            )))
        }
    }
}

/// Selects one of the two interchangeable strategies.
///
/// # Examples
/// ```
/// use gimbal::animation::Strategy;
///
/// assert_eq!("concurrent".parse::<Strategy>().unwrap(), Strategy::Concurrent);
/// assert_eq!(Strategy::Sequential.to_string(), "sequential");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One axis at a time, in priority order.
    #[default]
    Sequential,
    /// All axes at once, scaled to arrive together.
    Concurrent,
}

impl Strategy {
    /// Runs one tick of the selected strategy.
    pub fn tick(
        self,
        orientation: &mut Orientation,
        target: [f32; 3],
        rate_deg_per_sec: f32,
        delta_seconds: f32,
        tuning: &Tuning,
    ) -> bool {
        match self {
            Strategy::Sequential => {
                tick_sequential(orientation, target, rate_deg_per_sec, delta_seconds, tuning)
            }
            Strategy::Concurrent => {
                tick_concurrent(orientation, target, rate_deg_per_sec, delta_seconds, tuning)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sequential => f.write_str("sequential"),
            Strategy::Concurrent => f.write_str("concurrent"),
        }
    }
}

impl FromStr for Strategy {
    type Err = GimbalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Strategy::Sequential),
            "concurrent" => Ok(Strategy::Concurrent),
            other => Err(GimbalError::InvalidConfig(format!(
                "unknown strategy {other:?} (expected sequential or concurrent)"
            ))),
        }
    }
}

/// Checks that `rate` is a usable angular speed.
///
/// # Examples
/// ```
/// use gimbal::animation::validate_rate;
///
/// assert!(validate_rate(10.0).is_ok());
/// assert!(validate_rate(0.0).is_ok());
/// assert!(validate_rate(f32::NAN).is_err());
/// assert!(validate_rate(361.0).is_err());
/// ```
pub fn validate_rate(rate: f32) -> Result<f32> {
    if rate.is_finite() && (0.0..=MAX_RATE).contains(&rate) {
        Ok(rate)
    } else {
        Err(GimbalError::InvalidRate(rate))
    }
}

// ---------------------------------------------------------------------------
// Shared per-tick helpers
// ---------------------------------------------------------------------------

/// Per-axis view of how far the orientation still has to travel.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AxisPlan {
    /// Canonical target angle.
    pub target: f32,
    /// `+1.0` or `-1.0`.
    pub direction: f32,
    /// Degrees left to travel along `direction`.
    pub distance: f32,
    /// Length of the shorter arc, used for arrival checks.
    pub gap: f32,
}

impl AxisPlan {
    pub fn new(current: f32, target: f32, policy: DirectionPolicy) -> Self {
        let diff = target - current;
        let direction = policy.direction(diff);
        let distance = if diff == 0.0 {
            0.0
        } else if direction == diff.signum() {
            diff.abs()
        } else {
            FULL_TURN - diff.abs()
        };
        Self {
            target,
            direction,
            distance,
            gap: angle::shortest_delta(current, target).abs(),
        }
    }
}

/// Brings each target component into the orientation's range.
pub(crate) fn canonical_target(orientation: &Orientation, target: [f32; 3]) -> [f32; 3] {
    target.map(|t| orientation.canonical(t))
}

/// Returns this tick's travel in degrees; degenerate input travels nowhere.
pub(crate) fn step_length(rate_deg_per_sec: f32, delta_seconds: f32) -> f32 {
    let step = rate_deg_per_sec * delta_seconds;
    if step.is_finite() && step > 0.0 {
        step
    } else {
        if step != 0.0 {
            log::warn!(
                "ignoring step of {} deg (rate {} deg/s, dt {} s)",
                step,
                rate_deg_per_sec,
                delta_seconds
            );
        }
        0.0
    }
}

/// Moves one axis `step` degrees along its plan, never past the target.
///
/// The step is clamped to the remaining distance, which is under one full
/// turn, so a single normalization always suffices. Returns the new angle.
pub(crate) fn advance(orientation: &mut Orientation, axis: Axis, plan: &AxisPlan, step: f32) -> f32 {
    let i = axis.index();
    if step >= plan.distance {
        orientation.rotation[i] = plan.target;
    } else {
        let moved = orientation.rotation[i] + plan.direction * step;
        orientation.rotation[i] = angle::normalize(moved, orientation.range);
    }
    orientation.rotation[i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_policies_agree_inside_half_turn() {
        for diff in [-179.0, -90.0, -0.5, 0.0, 0.5, 90.0, 179.0] {
            assert_eq!(
                DirectionPolicy::Shortest.direction(diff),
                DirectionPolicy::Legacy.direction(diff),
                "diff {diff}"
            );
        }
    }

    #[test]
    fn test_direction_policies_disagree_on_large_negative() {
        assert_eq!(DirectionPolicy::Shortest.direction(-270.0), 1.0);
        assert_eq!(DirectionPolicy::Legacy.direction(-270.0), -1.0);
        assert_eq!(DirectionPolicy::Shortest.direction(270.0), -1.0);
        assert_eq!(DirectionPolicy::Legacy.direction(270.0), -1.0);
    }

    #[test]
    fn test_axis_plan_distance_follows_direction() {
        let short = AxisPlan::new(170.0, -170.0, DirectionPolicy::Shortest);
        assert_eq!(short.direction, 1.0);
        assert_eq!(short.distance, 20.0);
        assert_eq!(short.gap, 20.0);

        let legacy = AxisPlan::new(170.0, -170.0, DirectionPolicy::Legacy);
        assert_eq!(legacy.direction, -1.0);
        assert_eq!(legacy.distance, 340.0);
        assert_eq!(legacy.gap, 20.0);

        let wrap = AxisPlan::new(10.0, 300.0, DirectionPolicy::Legacy);
        assert_eq!(wrap.direction, -1.0);
        assert_eq!(wrap.distance, 70.0);
    }

    #[test]
    fn test_step_length_rejects_degenerate_input() {
        assert_eq!(step_length(90.0, 0.1), 9.0);
        assert_eq!(step_length(0.0, 0.1), 0.0);
        assert_eq!(step_length(10.0, -1.0), 0.0);
        assert_eq!(step_length(f32::INFINITY, 0.1), 0.0);
        assert_eq!(step_length(f32::NAN, 0.1), 0.0);
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!(" Sequential ".parse::<Strategy>().unwrap(), Strategy::Sequential);
        assert!("diagonal".parse::<Strategy>().is_err());
        assert_eq!(
            serde_json::from_str::<Strategy>("\"concurrent\"").unwrap(),
            Strategy::Concurrent
        );
    }

    #[test]
    fn test_priority_orders() {
        assert_eq!(
            PriorityOrder::Named.order(EulerMode::ZXY),
            [Axis::Z, Axis::X, Axis::Y]
        );
        assert_eq!(
            PriorityOrder::Reversed.order(EulerMode::ZXY),
            [Axis::Y, Axis::X, Axis::Z]
        );
    }
}
