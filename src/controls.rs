//! Provides the demo's keyboard bindings and widget edits as commands.
//!
//! | Key        | Command                       |
//! |------------|-------------------------------|
//! | `x` `y` `z` | rotate +5° about that axis    |
//! | `X` `Y` `Z` | rotate −5° about that axis    |
//! | `1`–`6`    | Euler mode XYZ, XZY, YXZ, YZX, ZXY, ZYX |
//! | `a`        | toggle local axes             |
//! | `g`        | toggle rotation rings         |
//! | `r`        | reset orientation             |
//! | `q`        | quit                          |
//!
//! # Examples
//! ```
//! use gimbal::controls::{Command, Flow};
//! use gimbal::euler::Axis;
//! use gimbal::orientation::Gimbal;
//!
//! let mut gimbal = Gimbal::primary();
//! let command = Command::from_key('x').unwrap();
//! assert_eq!(command.apply(&mut gimbal), Flow::Continue);
//! assert_eq!(gimbal.orientation.angle(Axis::X), 5.0);
//! assert_eq!(gimbal.orientation.active_axis, Some(Axis::X));
//! ```

use crate::animation::MAX_RATE;
use crate::euler::{Axis, EulerMode};
use crate::orientation::Gimbal;

/// Degrees per key press.
pub const NUDGE_DEGREES: f32 = 5.0;

/// One user edit to a gimbal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    ToggleAxes,
    ToggleRotations,
    /// Rotate about `axis` by `delta` degrees.
    Nudge { axis: Axis, delta: f32 },
    /// Set the angle about `axis` outright (a dragged value field).
    SetAngle { axis: Axis, degrees: f32 },
    SetMode(EulerMode),
    Reset,
    Quit,
}

/// Whether the session should keep running after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl Command {
    /// Maps a pressed key to its command.
    pub fn from_key(key: char) -> Option<Self> {
        let command = match key {
            'a' | 'A' => Command::ToggleAxes,
            'g' | 'G' => Command::ToggleRotations,
            'x' | 'y' | 'z' | 'X' | 'Y' | 'Z' => {
                let axis = Axis::try_from(key).ok()?;
                let delta = if key.is_ascii_lowercase() {
                    NUDGE_DEGREES
                } else {
                    -NUDGE_DEGREES
                };
                Command::Nudge { axis, delta }
            }
            '1'..='6' => {
                let index = key.to_digit(10)? as u8 - 1;
                Command::SetMode(EulerMode::try_from(index).ok()?)
            }
            'r' | 'R' => Command::Reset,
            'q' | 'Q' => Command::Quit,
            _ => return None,
        };
        Some(command)
    }

    /// A held +/− button: rotate at `rate` deg/s for `delta_seconds`.
    ///
    /// # Examples
    /// ```
    /// use gimbal::controls::Command;
    /// use gimbal::euler::Axis;
    ///
    /// assert_eq!(
    ///     Command::spin(Axis::Y, false, 10.0, 0.5),
    ///     Command::Nudge { axis: Axis::Y, delta: -5.0 }
    /// );
    /// ```
    pub fn spin(axis: Axis, positive: bool, rate: f32, delta_seconds: f32) -> Self {
        let magnitude = clamp_rate(rate) * delta_seconds.max(0.0);
        Command::Nudge {
            axis,
            delta: if positive { magnitude } else { -magnitude },
        }
    }

    /// Applies the command to `gimbal`.
    pub fn apply(self, gimbal: &mut Gimbal) -> Flow {
        let orientation = &mut gimbal.orientation;
        match self {
            Command::ToggleAxes => gimbal.display.draw_axes = !gimbal.display.draw_axes,
            Command::ToggleRotations => {
                gimbal.display.draw_rotations = !gimbal.display.draw_rotations
            }
            Command::Nudge { axis, delta } => {
                orientation.active_axis = Some(axis);
                orientation.rotate_by(axis, delta);
            }
            Command::SetAngle { axis, degrees } => {
                orientation.active_axis = Some(axis);
                orientation.set_angle(axis, degrees);
            }
            Command::SetMode(mode) => {
                log::debug!("euler mode {} -> {}", orientation.euler_mode, mode);
                orientation.euler_mode = mode;
            }
            Command::Reset => orientation.reset(),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }
}

/// Handles a key release: letting go of an axis key clears the active axis.
pub fn release_key(key: char, gimbal: &mut Gimbal) {
    if Axis::try_from(key).is_ok() {
        gimbal.orientation.active_axis = None;
    }
}

/// Clamps a user-entered rate into `0..=360` deg/s; NaN becomes 0.
///
/// # Examples
/// ```
/// use gimbal::controls::clamp_rate;
///
/// assert_eq!(clamp_rate(-3.0), 0.0);
/// assert_eq!(clamp_rate(720.0), 360.0);
/// assert_eq!(clamp_rate(f32::NAN), 0.0);
/// ```
pub fn clamp_rate(rate: f32) -> f32 {
    if rate.is_nan() {
        0.0
    } else {
        rate.clamp(0.0, MAX_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::AngleRange;

    #[test]
    fn test_key_bindings() {
        assert_eq!(Command::from_key('a'), Some(Command::ToggleAxes));
        assert_eq!(Command::from_key('G'), Some(Command::ToggleRotations));
        assert_eq!(
            Command::from_key('Z'),
            Some(Command::Nudge {
                axis: Axis::Z,
                delta: -5.0
            })
        );
        assert_eq!(Command::from_key('1'), Some(Command::SetMode(EulerMode::XYZ)));
        assert_eq!(Command::from_key('6'), Some(Command::SetMode(EulerMode::ZYX)));
        assert_eq!(Command::from_key('0'), None);
        assert_eq!(Command::from_key('7'), None);
        assert_eq!(Command::from_key('r'), Some(Command::Reset));
        assert_eq!(Command::from_key('Q'), Some(Command::Quit));
        assert_eq!(Command::from_key('?'), None);
    }

    #[test]
    fn test_negative_nudge_wraps_in_unsigned_range() {
        let mut gimbal = Gimbal::primary();
        gimbal.orientation.range = AngleRange::Unsigned;
        Command::from_key('Y').unwrap().apply(&mut gimbal);
        assert_eq!(gimbal.orientation.angle(Axis::Y), 355.0);
    }

    #[test]
    fn test_release_clears_active_axis() {
        let mut gimbal = Gimbal::primary();
        Command::from_key('z').unwrap().apply(&mut gimbal);
        release_key('a', &mut gimbal);
        assert_eq!(gimbal.orientation.active_axis, Some(Axis::Z));
        release_key('Z', &mut gimbal);
        assert_eq!(gimbal.orientation.active_axis, None);
    }

    #[test]
    fn test_toggles_and_reset() {
        let mut gimbal = Gimbal::primary();
        Command::ToggleAxes.apply(&mut gimbal);
        Command::ToggleRotations.apply(&mut gimbal);
        assert!(gimbal.display.draw_axes);
        assert!(!gimbal.display.draw_rotations);

        Command::SetMode(EulerMode::YXZ).apply(&mut gimbal);
        Command::SetAngle {
            axis: Axis::X,
            degrees: 400.0,
        }
        .apply(&mut gimbal);
        assert_eq!(gimbal.orientation.angle(Axis::X), 40.0);
        Command::Reset.apply(&mut gimbal);
        assert_eq!(gimbal.orientation.rotation, [0.0; 3]);
        assert_eq!(gimbal.orientation.euler_mode, EulerMode::YXZ);
        assert_eq!(Command::Quit.apply(&mut gimbal), Flow::Quit);
    }
}
