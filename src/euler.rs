//! Provides the six Euler conventions and their axis orders.
//!
//! A mode names the order in which the per-axis rotations are multiplied.
//! Because each factor right-multiplies the transform, the rotations act on
//! the object in the *reverse* order: mode `XYZ` turns the object about Z,
//! then Y, then X. The same named order doubles as the convergence priority
//! of the sequential animation strategy.
//!
//! # Examples
//! ```
//! use gimbal::euler::{application_order, resolve_order, Axis, EulerMode};
//!
//! assert_eq!(resolve_order(EulerMode::XYZ), [Axis::X, Axis::Y, Axis::Z]);
//! assert_eq!(application_order(EulerMode::XYZ), [Axis::Z, Axis::Y, Axis::X]);
//! ```

use std::fmt;
use std::str::FromStr;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::GimbalError;

/// One of the three rotation axes.
///
/// # Examples
/// ```
/// use gimbal::euler::Axis;
///
/// assert_eq!(Axis::Y.index(), 1);
/// assert_eq!(Axis::try_from('z').unwrap(), Axis::Z);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in X, Y, Z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the component index of this axis in a rotation triple.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Returns the unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Returns the rotation of `degrees` about this axis.
    pub fn rotation(self, degrees: f32) -> Mat4 {
        let radians = degrees.to_radians();
        match self {
            Axis::X => Mat4::from_rotation_x(radians),
            Axis::Y => Mat4::from_rotation_y(radians),
            Axis::Z => Mat4::from_rotation_z(radians),
        }
    }

    fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Axis {
    type Error = GimbalError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'X' => Ok(Axis::X),
            'Y' => Ok(Axis::Y),
            'Z' => Ok(Axis::Z),
            _ => Err(GimbalError::InvalidAxis(c)),
        }
    }
}

/// The six Euler conventions, in the order the demo's mode keys 1–6 use.
///
/// Parsing never falls back to a default; an unknown name or index is an
/// error.
///
/// # Examples
/// ```
/// use gimbal::euler::EulerMode;
///
/// assert_eq!("zyx".parse::<EulerMode>().unwrap(), EulerMode::ZYX);
/// assert!("XXY".parse::<EulerMode>().is_err());
/// assert!(EulerMode::try_from(6u8).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EulerMode {
    #[default]
    XYZ,
    XZY,
    YXZ,
    YZX,
    ZXY,
    ZYX,
}

impl EulerMode {
    /// All modes in index order.
    pub const ALL: [EulerMode; 6] = [
        EulerMode::XYZ,
        EulerMode::XZY,
        EulerMode::YXZ,
        EulerMode::YZX,
        EulerMode::ZXY,
        EulerMode::ZYX,
    ];

    /// Returns the mode's canonical name.
    pub fn name(self) -> &'static str {
        match self {
            EulerMode::XYZ => "XYZ",
            EulerMode::XZY => "XZY",
            EulerMode::YXZ => "YXZ",
            EulerMode::YZX => "YZX",
            EulerMode::ZXY => "ZXY",
            EulerMode::ZYX => "ZYX",
        }
    }
}

impl fmt::Display for EulerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EulerMode {
    type Err = GimbalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        EulerMode::ALL
            .into_iter()
            .find(|mode| mode.name() == upper)
            .ok_or_else(|| GimbalError::InvalidEulerMode(s.to_string()))
    }
}

impl TryFrom<u8> for EulerMode {
    type Error = GimbalError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        EulerMode::ALL
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| GimbalError::InvalidEulerMode(index.to_string()))
    }
}

impl TryFrom<String> for EulerMode {
    type Error = GimbalError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EulerMode> for String {
    fn from(mode: EulerMode) -> Self {
        mode.name().to_string()
    }
}

/// Returns the named axis order of `mode`.
///
/// This is the multiplication order of the rotation transform and the
/// default convergence priority for sequential animation.
///
/// # Examples
/// ```
/// use gimbal::euler::{resolve_order, Axis, EulerMode};
///
/// assert_eq!(resolve_order(EulerMode::YZX), [Axis::Y, Axis::Z, Axis::X]);
/// ```
pub fn resolve_order(mode: EulerMode) -> [Axis; 3] {
    match mode {
        EulerMode::XYZ => [Axis::X, Axis::Y, Axis::Z],
        EulerMode::XZY => [Axis::X, Axis::Z, Axis::Y],
        EulerMode::YXZ => [Axis::Y, Axis::X, Axis::Z],
        EulerMode::YZX => [Axis::Y, Axis::Z, Axis::X],
        EulerMode::ZXY => [Axis::Z, Axis::X, Axis::Y],
        EulerMode::ZYX => [Axis::Z, Axis::Y, Axis::X],
    }
}

/// Returns the order in which the rotations act on the object (the reverse
/// of [`resolve_order`]).
pub fn application_order(mode: EulerMode) -> [Axis; 3] {
    let [first, second, third] = resolve_order(mode);
    [third, second, first]
}

/// Builds the rotation transform for `rotation` (degrees, X/Y/Z) under `mode`.
///
/// Factors are right-multiplied in the named order, so for `XYZ` the result
/// is `Rx * Ry * Rz`.
///
/// # Examples
/// ```
/// use glam::Vec3;
///
/// use gimbal::euler::{rotation_matrix, EulerMode};
///
/// let m = rotation_matrix([0.0, 90.0, 0.0], EulerMode::XYZ);
/// let v = m.transform_vector3(Vec3::X);
/// assert!((v - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
/// ```
pub fn rotation_matrix(rotation: [f32; 3], mode: EulerMode) -> Mat4 {
    resolve_order(mode)
        .into_iter()
        .fold(Mat4::IDENTITY, |m, axis| {
            m * axis.rotation(rotation[axis.index()])
        })
}
