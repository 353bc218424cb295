//! Provides the renderer-facing transforms for a gimbal's rings and arrow.
//!
//! Nothing here draws. A renderer reads a [`GimbalPose`] once per frame and
//! issues its own draw calls: each ring is a unit circle in the XY plane
//! placed by `RingPose::transform`, and the arrow points along +Z under
//! `GimbalPose::arrow`.
//!
//! Rings nest in the mode's named order. The outermost ring carries only its
//! own rotation; the innermost carries all three, as does the arrow.
//!
//! # Examples
//! ```
//! use gimbal::orientation::Orientation;
//! use gimbal::pose::GimbalPose;
//!
//! let pose = GimbalPose::from_orientation(&Orientation::default());
//! assert!((pose.arrow_direction - glam::Vec3::Z).length() < 1e-6);
//! ```

use glam::{Mat4, Vec3};

use crate::euler::{self, Axis};
use crate::orientation::{Gimbal, Orientation};

/// Placement of one rotation ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingPose {
    pub axis: Axis,
    /// Maps the unit circle in the XY plane into world space.
    pub transform: Mat4,
    /// World-space normal of the ring's plane (its rotation axis).
    pub normal: Vec3,
    /// RGB color, red/green/blue for X/Y/Z.
    pub color: [f32; 3],
    /// Set while this axis is being manipulated.
    pub highlighted: bool,
}

/// Everything a renderer needs to draw one gimbal.
#[derive(Clone, Debug, PartialEq)]
pub struct GimbalPose {
    /// Rings from outermost to innermost.
    pub rings: [RingPose; 3],
    /// Full rotation transform, applied to the arrow and local axes.
    pub arrow: Mat4,
    /// Where the arrow points in world space.
    pub arrow_direction: Vec3,
    pub alpha: f32,
    pub draw_rings: bool,
    pub draw_axes: bool,
}

impl GimbalPose {
    /// Computes the pose of a bare orientation with default display options.
    pub fn from_orientation(orientation: &Orientation) -> Self {
        Self::from_gimbal(&Gimbal {
            orientation: *orientation,
            ..Gimbal::primary()
        })
    }

    /// Computes the pose of a gimbal, honoring its display options.
    pub fn from_gimbal(gimbal: &Gimbal) -> Self {
        let orientation = &gimbal.orientation;
        let mut cumulative = Mat4::IDENTITY;
        let rings = euler::resolve_order(orientation.euler_mode).map(|axis| {
            cumulative *= axis.rotation(orientation.angle(axis));
            ring_pose(axis, cumulative, orientation.active_axis == Some(axis))
        });

        Self {
            rings,
            arrow: cumulative,
            arrow_direction: cumulative.transform_vector3(Vec3::Z).normalize(),
            alpha: gimbal.display.alpha,
            draw_rings: gimbal.display.draw_rotations,
            draw_axes: gimbal.display.draw_axes,
        }
    }

    /// Checks whether the outer and inner rings have collapsed into the same
    /// plane, losing a degree of freedom.
    ///
    /// # Examples
    /// ```
    /// use gimbal::angle::AngleRange;
    /// use gimbal::euler::EulerMode;
    /// use gimbal::orientation::Orientation;
    /// use gimbal::pose::GimbalPose;
    ///
    /// let locked = Orientation::with_rotation([0.0, 90.0, 0.0], EulerMode::XYZ, AngleRange::Signed);
    /// assert!(GimbalPose::from_orientation(&locked).is_locked(1e-4));
    /// assert!(!GimbalPose::from_orientation(&Orientation::default()).is_locked(1e-4));
    /// ```
    pub fn is_locked(&self, tolerance: f32) -> bool {
        let outer = self.rings[0].normal;
        let inner = self.rings[2].normal;
        outer.dot(inner).abs() >= 1.0 - tolerance
    }
}

/// Turns the XY-plane circle so its normal lies along `axis`, then applies
/// the rotations accumulated so far.
fn ring_pose(axis: Axis, cumulative: Mat4, highlighted: bool) -> RingPose {
    let basis = match axis {
        Axis::X => Mat4::from_rotation_y(90_f32.to_radians()),
        Axis::Y => Mat4::from_rotation_x(90_f32.to_radians()),
        Axis::Z => Mat4::IDENTITY,
    };
    let transform = cumulative * basis;
    let mut color = [0.0; 3];
    color[axis.index()] = 1.0;

    RingPose {
        axis,
        transform,
        normal: transform.transform_vector3(Vec3::Z).normalize(),
        color,
        highlighted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::AngleRange;
    use crate::euler::EulerMode;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_rest_pose_rings_face_their_axes() {
        for mode in EulerMode::ALL {
            let o = Orientation::with_rotation([0.0; 3], mode, AngleRange::Signed);
            let pose = GimbalPose::from_orientation(&o);
            for ring in pose.rings {
                assert!(
                    approx(ring.normal.abs(), ring.axis.unit()),
                    "{mode} {}: {}",
                    ring.axis,
                    ring.normal
                );
            }
        }
    }

    #[test]
    fn test_rings_follow_named_order() {
        let o = Orientation::with_rotation([0.0; 3], EulerMode::YZX, AngleRange::Signed);
        let pose = GimbalPose::from_orientation(&o);
        let axes: Vec<Axis> = pose.rings.iter().map(|r| r.axis).collect();
        assert_eq!(axes, vec![Axis::Y, Axis::Z, Axis::X]);
    }

    #[test]
    fn test_outer_ring_carries_inner_rings() {
        // XYZ: turning X by 90 tips the Y ring's axis onto +Z
        let o = Orientation::with_rotation([90.0, 0.0, 0.0], EulerMode::XYZ, AngleRange::Signed);
        let pose = GimbalPose::from_orientation(&o);
        assert!(approx(pose.rings[0].normal.abs(), Vec3::X));
        assert!(approx(pose.rings[1].normal.abs(), Vec3::Z));
    }

    #[test]
    fn test_arrow_matches_rotation_matrix() {
        let o = Orientation::with_rotation([30.0, -45.0, 120.0], EulerMode::ZXY, AngleRange::Signed);
        let pose = GimbalPose::from_orientation(&o);
        assert!(pose.arrow.abs_diff_eq(o.rotation_matrix(), 1e-5));
    }

    #[test]
    fn test_active_axis_is_highlighted() {
        let mut o = Orientation::default();
        o.active_axis = Some(Axis::Z);
        let pose = GimbalPose::from_orientation(&o);
        assert!(pose.rings[2].highlighted);
        assert!(!pose.rings[0].highlighted);
        assert_eq!(pose.rings[2].color, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_display_options_carried_through() {
        let pose = GimbalPose::from_gimbal(&Gimbal::target());
        assert_eq!(pose.alpha, 0.3);
        assert!(!pose.draw_rings);
    }
}
