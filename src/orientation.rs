//! Provides the per-entity orientation state and its display wrapper.
//!
//! # Examples
//! ```
//! use gimbal::angle::AngleRange;
//! use gimbal::euler::Axis;
//! use gimbal::orientation::Orientation;
//!
//! let mut orientation = Orientation::new(AngleRange::Unsigned);
//! orientation.rotate_by(Axis::X, -5.0);
//! assert_eq!(orientation.angle(Axis::X), 355.0);
//! ```

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::angle::{self, AngleRange};
use crate::euler::{self, Axis, EulerMode};

/// Represents one rotatable entity's pose as three Euler angles (degrees).
///
/// Every component of `rotation` stays inside `range`. Mutate through the
/// methods here to keep that true; writing the field directly is allowed but
/// the caller then owns the invariant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Rotation angles in degrees [X, Y, Z].
    pub rotation: [f32; 3],
    /// Euler composition order.
    pub euler_mode: EulerMode,
    /// The axis currently being manipulated, if any.
    pub active_axis: Option<Axis>,
    /// Canonical range for all three angles.
    pub range: AngleRange,
}

impl Orientation {
    /// Creates a zero pose in XYZ mode.
    pub fn new(range: AngleRange) -> Self {
        Self {
            rotation: [0.0; 3],
            euler_mode: EulerMode::default(),
            active_axis: None,
            range,
        }
    }

    /// Creates a pose with the given angles, brought into `range`.
    ///
    /// # Examples
    /// ```
    /// use gimbal::angle::AngleRange;
    /// use gimbal::euler::EulerMode;
    /// use gimbal::orientation::Orientation;
    ///
    /// let o = Orientation::with_rotation([190.0, 0.0, -90.0], EulerMode::ZYX, AngleRange::Signed);
    /// assert_eq!(o.rotation, [-170.0, 0.0, -90.0]);
    /// ```
    pub fn with_rotation(rotation: [f32; 3], euler_mode: EulerMode, range: AngleRange) -> Self {
        let mut orientation = Self::new(range);
        orientation.euler_mode = euler_mode;
        orientation.set_rotation(rotation);
        orientation
    }

    /// Returns the angle about `axis`.
    pub fn angle(&self, axis: Axis) -> f32 {
        self.rotation[axis.index()]
    }

    /// Sets the angle about `axis`, restoring the range invariant.
    pub fn set_angle(&mut self, axis: Axis, degrees: f32) {
        self.rotation[axis.index()] = self.canonical(degrees);
    }

    /// Rotates about `axis` by `delta` degrees.
    pub fn rotate_by(&mut self, axis: Axis, delta: f32) {
        let current = self.angle(axis);
        self.set_angle(axis, current + delta);
    }

    /// Replaces all three angles.
    pub fn set_rotation(&mut self, rotation: [f32; 3]) {
        for axis in Axis::ALL {
            self.set_angle(axis, rotation[axis.index()]);
        }
    }

    /// Zeroes the rotation; the mode is kept.
    pub fn reset(&mut self) {
        self.rotation = [0.0; 3];
    }

    /// Returns the rotation transform for the current angles and mode.
    pub fn rotation_matrix(&self) -> Mat4 {
        euler::rotation_matrix(self.rotation, self.euler_mode)
    }

    /// Brings `degrees` into this orientation's range.
    ///
    /// Values within one turn of the range take the single-step path; anything
    /// further out is reduced by modulo.
    pub fn canonical(&self, degrees: f32) -> f32 {
        if self.range.within_one_turn(degrees) {
            angle::normalize(degrees, self.range)
        } else {
            log::warn!(
                "angle {} is more than one turn outside {:?}; wrapping",
                degrees,
                self.range
            );
            angle::wrap(degrees, self.range)
        }
    }
}

/// Presentation-only flags read by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
    /// Draw the local X/Y/Z axes.
    pub draw_axes: bool,
    /// Draw the three rotation rings.
    pub draw_rotations: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            draw_axes: false,
            draw_rotations: true,
        }
    }
}

/// An orientation plus how it should be drawn.
///
/// # Examples
/// ```
/// use gimbal::orientation::Gimbal;
///
/// let target = Gimbal::target();
/// assert_eq!(target.display.alpha, 0.3);
/// assert!(!target.display.draw_rotations);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Gimbal {
    pub orientation: Orientation,
    pub display: DisplayOptions,
}

impl Gimbal {
    /// The user-driven gimbal: opaque, rings drawn.
    pub fn primary() -> Self {
        Self::default()
    }

    /// The translucent goal shown behind an animation.
    pub fn target() -> Self {
        Self {
            orientation: Orientation::default(),
            display: DisplayOptions {
                alpha: 0.3,
                draw_axes: false,
                draw_rotations: false,
            },
        }
    }
}
