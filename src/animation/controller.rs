//! Provides the idle/animating state machine around the strategies.
//!
//! # Examples
//! ```
//! use gimbal::animation::{Animator, Strategy, Tuning};
//! use gimbal::orientation::Orientation;
//!
//! let mut orientation = Orientation::default();
//! let mut animator = Animator::new(Strategy::Sequential, Tuning::default());
//! animator.play([0.0, 0.0, 45.0], 45.0).unwrap();
//! while animator.is_animating() {
//!     animator.tick(&mut orientation, 0.25);
//! }
//! assert_eq!(orientation.rotation, [0.0, 0.0, 45.0]);
//! ```

use crate::animation::{validate_rate, Strategy, Tuning};
use crate::error::Result;
use crate::orientation::Orientation;

/// Whether an animation is running, and toward what.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AnimationState {
    #[default]
    Idle,
    Animating {
        /// Goal angles in degrees, as captured by `play`.
        target: [f32; 3],
        /// Degrees per second.
        rate: f32,
    },
}

/// Drives an orientation toward a captured target, one tick per frame.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    strategy: Strategy,
    tuning: Tuning,
    state: AnimationState,
}

impl Animator {
    /// Creates an idle animator.
    pub fn new(strategy: Strategy, tuning: Tuning) -> Self {
        Self {
            strategy,
            tuning,
            state: AnimationState::Idle,
        }
    }

    /// Returns the strategy used by [`Animator::tick`].
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the current tuning.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Returns the current state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Checks whether an animation is in progress.
    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimationState::Animating { .. })
    }

    /// Starts (or restarts) an animation toward `target` at `rate` deg/s.
    ///
    /// Progress is always measured from wherever the orientation is on the
    /// next tick, so replaying after a stop continues from the stopped pose.
    ///
    /// # Errors
    /// Returns [`GimbalError::InvalidRate`](crate::GimbalError::InvalidRate)
    /// if `rate` is not finite or outside `0..=360`.
    pub fn play(&mut self, target: [f32; 3], rate: f32) -> Result<()> {
        let rate = validate_rate(rate)?;
        log::debug!(
            "play {} toward {:?} at {} deg/s",
            self.strategy,
            target,
            rate
        );
        self.state = AnimationState::Animating { target, rate };
        Ok(())
    }

    /// Abandons any running animation without snapping to its target.
    ///
    /// Returns whether an animation was running.
    pub fn stop(&mut self) -> bool {
        let was_animating = self.is_animating();
        if was_animating {
            log::debug!("stop");
        }
        self.state = AnimationState::Idle;
        was_animating
    }

    /// Switches strategy; a running animation is stopped.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        if strategy != self.strategy {
            log::debug!("strategy {} -> {}", self.strategy, strategy);
            self.stop();
            self.strategy = strategy;
        }
    }

    /// Replaces the tuning; a running animation is stopped.
    ///
    /// # Errors
    /// Returns an error if the tuning fails [`Tuning::validate`]; the current
    /// tuning and state are left untouched.
    pub fn set_tuning(&mut self, tuning: Tuning) -> Result<()> {
        tuning.validate()?;
        if tuning != self.tuning {
            self.stop();
            self.tuning = tuning;
        }
        Ok(())
    }

    /// Runs one frame. Returns `true` on the tick the target is reached;
    /// idle ticks return `false` and leave the orientation alone.
    pub fn tick(&mut self, orientation: &mut Orientation, delta_seconds: f32) -> bool {
        let AnimationState::Animating { target, rate } = self.state else {
            return false;
        };
        let done = self
            .strategy
            .tick(orientation, target, rate, delta_seconds, &self.tuning);
        if done {
            log::debug!("reached {:?}", orientation.rotation);
            self.state = AnimationState::Idle;
        }
        done
    }
}
