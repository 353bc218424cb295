//! Provides the dual-gimbal session and its JSON configuration.
//!
//! A [`Scene`] owns the user-driven primary gimbal, the translucent target
//! gimbal and the animator that moves one toward the other. Each frame applies
//! queued input first and then runs at most one animation tick, so the pose a
//! renderer reads afterwards is always complete.
//!
//! # Examples
//! ```
//! use gimbal::scene::SceneConfig;
//!
//! let config = SceneConfig::from_json(r#"{ "target": [0, 90, 0], "rate": 90 }"#).unwrap();
//! let mut scene = config.into_scene().unwrap();
//! scene.play().unwrap();
//! let mut frames = 0;
//! while !scene.frame(0.1) {
//!     frames += 1;
//! }
//! assert_eq!(frames + 1, 10);
//! assert_eq!(scene.primary.orientation.rotation, [0.0, 90.0, 0.0]);
//! ```

use std::collections::VecDeque;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::angle::AngleRange;
use crate::animation::{self, Animator, Strategy, Tuning};
use crate::controls::{self, Command, Flow};
use crate::error::Result;
use crate::euler::EulerMode;
use crate::orientation::{Gimbal, Orientation};
use crate::pose::GimbalPose;

/// Default animation rate in degrees per second.
pub const DEFAULT_RATE: f32 = 10.0;

/// Scene file contents. Every field is optional.
///
/// # Examples
/// ```
/// use gimbal::animation::Strategy;
/// use gimbal::scene::SceneConfig;
///
/// let config = SceneConfig::from_json("{}").unwrap();
/// assert_eq!(config.rate, 10.0);
/// assert_eq!(config.strategy, Strategy::Sequential);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub range: AngleRange,
    pub mode: EulerMode,
    /// Starting angles of the primary gimbal.
    pub rotation: [f32; 3],
    /// Angles of the target gimbal.
    pub target: [f32; 3],
    /// Degrees per second.
    pub rate: f32,
    pub strategy: Strategy,
    pub tuning: Tuning,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            range: AngleRange::default(),
            mode: EulerMode::default(),
            rotation: [0.0; 3],
            target: [0.0; 3],
            rate: DEFAULT_RATE,
            strategy: Strategy::default(),
            tuning: Tuning::default(),
        }
    }
}

impl SceneConfig {
    /// Parses a scene from JSON text and validates it.
    ///
    /// # Errors
    /// Returns an error for malformed JSON, unknown fields, an unknown mode or
    /// strategy name, or out-of-range rate/epsilon values.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: SceneConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a scene file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or fails [`Self::from_json`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("loaded scene {}", path.display());
        Self::from_json(&text)
    }

    /// Checks the rate and tuning.
    pub fn validate(&self) -> Result<()> {
        animation::validate_rate(self.rate)?;
        self.tuning.validate()
    }

    /// Builds a scene from this configuration.
    ///
    /// # Errors
    /// Returns an error if validation fails.
    pub fn into_scene(self) -> Result<Scene> {
        self.validate()?;
        let mut scene = Scene::new(Animator::new(self.strategy, self.tuning));
        scene.rate = self.rate;
        for gimbal in [&mut scene.primary, &mut scene.target] {
            gimbal.orientation.range = self.range;
            gimbal.orientation.euler_mode = self.mode;
        }
        scene.primary.orientation.set_rotation(self.rotation);
        scene.target.orientation.set_rotation(self.target);
        Ok(scene)
    }
}

/// The primary gimbal, its target, and the animation between them.
#[derive(Clone, Debug)]
pub struct Scene {
    pub primary: Gimbal,
    pub target: Gimbal,
    pub animator: Animator,
    /// Degrees per second used by [`Scene::play`].
    pub rate: f32,
    pending: VecDeque<Command>,
    quit: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Animator::default())
    }
}

impl Scene {
    /// Creates a scene with the default primary and target gimbals.
    pub fn new(animator: Animator) -> Self {
        Self {
            primary: Gimbal::primary(),
            target: Gimbal::target(),
            animator,
            rate: DEFAULT_RATE,
            pending: VecDeque::new(),
            quit: false,
        }
    }

    /// Starts animating the primary gimbal toward the target gimbal.
    ///
    /// # Errors
    /// Returns an error if the scene's rate is invalid.
    pub fn play(&mut self) -> Result<()> {
        self.animator.play(self.target.orientation.rotation, self.rate)
    }

    /// Stops the animation where it is.
    pub fn stop(&mut self) -> bool {
        self.animator.stop()
    }

    /// Changes the rate from a widget; a running animation is stopped.
    pub fn set_rate(&mut self, rate: f32) {
        let rate = controls::clamp_rate(rate);
        if rate != self.rate {
            self.stop();
            self.rate = rate;
        }
    }

    /// Queues a key press for the next frame. Unbound keys are ignored.
    pub fn handle_key(&mut self, key: char) {
        match Command::from_key(key) {
            Some(command) => self.pending.push_back(command),
            None => log::trace!("unbound key {:?}", key),
        }
    }

    /// Queues an arbitrary command for the next frame.
    pub fn queue(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    /// Handles a key release immediately.
    pub fn release_key(&mut self, key: char) {
        controls::release_key(key, &mut self.primary);
    }

    /// Whether a `Quit` command has been applied.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Runs one frame: queued commands, then one animation tick.
    ///
    /// Returns `true` on the frame the animation reaches its target.
    pub fn frame(&mut self, delta_seconds: f32) -> bool {
        while let Some(command) = self.pending.pop_front() {
            if command.apply(&mut self.primary) == Flow::Quit {
                self.quit = true;
            }
        }
        self.animator.tick(&mut self.primary.orientation, delta_seconds)
    }

    /// Poses for the renderer: primary first, then the target.
    pub fn poses(&self) -> [GimbalPose; 2] {
        [
            GimbalPose::from_gimbal(&self.primary),
            GimbalPose::from_gimbal(&self.target),
        ]
    }

    /// The primary gimbal's orientation.
    pub fn orientation(&self) -> &Orientation {
        &self.primary.orientation
    }
}
